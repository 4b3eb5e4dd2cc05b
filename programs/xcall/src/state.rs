//! # State Module
//!
//! Account structures for the xcall program.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::XcallError;

/// The singleton configuration account holding the program's network identity
///
/// Lives at the address derived from [`Config::SEED_PREFIX`] and the program
/// id. Its existence is what marks the program as initialized; `network_id`
/// is written once at creation and never changes afterwards.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Config {
    /// The account allowed to change admin and fee handler
    pub admin: Pubkey,
    /// The account allowed to change the protocol fee
    pub fee_handler: Pubkey,
    /// Identifier of the network this program instance represents
    #[max_len(MAX_NETWORK_ID_LEN)]
    pub network_id: String,
    /// Protocol fee in lamports
    pub protocol_fee: u64,
    /// Timestamp when the configuration was created
    pub created_at: i64,
    /// Canonical bump of the configuration address
    pub bump: u8,
}

impl Config {
    pub const SEED_PREFIX: &'static [u8] = b"config";

    /// Total allocation for the account, discriminator included
    pub const SPACE: usize = ACCOUNT_DISCRIMINATOR_SIZE + Config::INIT_SPACE;

    /// Build the initial configuration; the initializer becomes admin and fee handler
    pub fn new(admin: Pubkey, network_id: String, bump: u8, clock: &Clock) -> Self {
        Self {
            admin,
            fee_handler: admin,
            network_id,
            protocol_fee: 0,
            created_at: clock.unix_timestamp,
            bump,
        }
    }

    /// Check a requested network id against the storage policy
    ///
    /// The id must be non-empty, fit in `MAX_NETWORK_ID_LEN` bytes and must not
    /// contain the network address delimiter.
    pub fn validate_network_id(network_id: &str) -> Result<()> {
        require!(!network_id.is_empty(), XcallError::InvalidNetworkId);
        require!(
            network_id.len() <= MAX_NETWORK_ID_LEN,
            XcallError::NetworkIdTooLong
        );
        require!(
            !network_id.contains(NETWORK_ADDRESS_DELIMITER),
            XcallError::InvalidNetworkId
        );
        Ok(())
    }

    /// Fail with `OnlyAdmin` unless `signer` is the admin
    pub fn ensure_admin(&self, signer: Pubkey) -> Result<()> {
        require_keys_eq!(self.admin, signer, XcallError::OnlyAdmin);
        Ok(())
    }

    /// Fail with `OnlyFeeHandler` unless `signer` is the fee handler
    pub fn ensure_fee_handler(&self, signer: Pubkey) -> Result<()> {
        require_keys_eq!(self.fee_handler, signer, XcallError::OnlyFeeHandler);
        Ok(())
    }

    pub fn set_admin(&mut self, account: Pubkey) {
        self.admin = account;
    }

    pub fn set_fee_handler(&mut self, fee_handler: Pubkey) {
        self.fee_handler = fee_handler;
    }

    pub fn set_protocol_fee(&mut self, fee: u64) {
        self.protocol_fee = fee;
    }
}
