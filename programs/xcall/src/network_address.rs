//! Network address: `<network id>/<account>`, the cross-chain form of an account

use std::fmt;

use anchor_lang::prelude::*;

use crate::constants::NETWORK_ADDRESS_DELIMITER;
use crate::errors::XcallError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetworkAddress(String);

impl NetworkAddress {
    pub fn new(nid: &str, account: &str) -> Self {
        Self(format!("{}{}{}", nid, NETWORK_ADDRESS_DELIMITER, account))
    }

    /// Parse a `<nid>/<account>` string, splitting on the first delimiter
    pub fn parse(value: &str) -> Result<Self> {
        match value.split_once(NETWORK_ADDRESS_DELIMITER) {
            Some((nid, account)) if !nid.is_empty() && !account.is_empty() => {
                Ok(Self(value.to_string()))
            }
            _ => err!(XcallError::InvalidNetworkAddress),
        }
    }

    pub fn nid(&self) -> &str {
        self.parts().0
    }

    pub fn account(&self) -> &str {
        self.parts().1
    }

    fn parts(&self) -> (&str, &str) {
        self.0
            .split_once(NETWORK_ADDRESS_DELIMITER)
            .unwrap_or((self.0.as_str(), ""))
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
