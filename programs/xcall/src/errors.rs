//! # Error Module
//!
//! Custom error types for the xcall program.

use anchor_lang::prelude::*;

/// Custom error codes for the xcall program
#[error_code]
pub enum XcallError {
    /// The configuration account already exists. Retrying can never succeed.
    #[msg("Already initialized: The network identity has already been recorded")]
    AlreadyInitialized,

    /// Error when an operation needs the configuration before it exists
    #[msg("Not initialized: The network identity has not been recorded yet")]
    NotInitialized,

    /// Error when the network id is empty or contains the address delimiter
    #[msg("Invalid network id: Network id must be non-empty and must not contain '/'")]
    InvalidNetworkId,

    /// Error when the network id exceeds `MAX_NETWORK_ID_LEN` bytes
    #[msg("Network id too long: Network id exceeds maximum allowed length")]
    NetworkIdTooLong,

    #[msg("Only admin: Only the admin can perform this action")]
    OnlyAdmin,

    #[msg("Only fee handler: Only the protocol fee handler can perform this action")]
    OnlyFeeHandler,

    /// Error when a network address is not of the form `<nid>/<account>`
    #[msg("Invalid network address: Expected '<network id>/<account>'")]
    InvalidNetworkAddress,
}
