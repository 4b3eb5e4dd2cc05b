//! # Events Module
//!
//! Event definitions for the xcall program. Events are emitted through the
//! program log and can be observed by off-chain indexers and relayers.

use anchor_lang::prelude::*;

/// Event emitted when the network identity is recorded
#[event]
pub struct XcallInitialized {
    /// The configuration account
    pub config: Pubkey,
    /// The signer who initialized the program and became admin
    pub admin: Pubkey,
    /// The recorded network identifier
    pub network_id: String,
    /// Timestamp when initialized
    pub timestamp: i64,
}

/// Event emitted when the admin is replaced
#[event]
pub struct AdminUpdated {
    pub config: Pubkey,
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when the protocol fee changes
#[event]
pub struct ProtocolFeeUpdated {
    pub config: Pubkey,
    pub previous_fee: u64,
    pub new_fee: u64,
    pub timestamp: i64,
}

/// Event emitted when the protocol fee handler is replaced
#[event]
pub struct FeeHandlerUpdated {
    pub config: Pubkey,
    pub previous_fee_handler: Pubkey,
    pub new_fee_handler: Pubkey,
    pub timestamp: i64,
}
