//! Program-wide constants

/// Size of the Anchor account discriminator prepended to every account
pub const ACCOUNT_DISCRIMINATOR_SIZE: usize = 8;

/// Maximum length of a network identifier, in bytes
pub const MAX_NETWORK_ID_LEN: usize = 64;

/// Separator between the network id and the account in a network address
pub const NETWORK_ADDRESS_DELIMITER: char = '/';
