//! # xcall Program
//!
//! Solana entry point of the xcall cross-chain messaging protocol.
//!
//! The program owns a single configuration account, derived from the fixed
//! `b"config"` seed and the program id, which records the network identifier
//! this deployment represents. The account can be created exactly once:
//! `initialize` refuses to run against an occupied address, and the system
//! program refuses to allocate it twice, so concurrent callers race for the
//! same address and only one of them can win.
//!
//! ## Features
//! - One-time network identity bootstrap
//! - Admin, protocol fee and fee handler configuration
//! - Read-only queries over the stored configuration

// Suppress warnings from Anchor's internal behavior
#![allow(deprecated)]
#![allow(ambiguous_glob_reexports)]
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod network_address;
pub mod state;
pub mod store;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use network_address::NetworkAddress;
pub use state::*;

declare_id!("DoSLJH36FLrQVjZ8wDD4tHHfLbisj4VwMzpvTV9yyyp2");

/// Main program module containing all instruction handlers
#[program]
pub mod xcall {
    use super::*;

    /// Record the network identifier of this deployment
    ///
    /// Creates the singleton configuration account. The signer pays rent and
    /// becomes both admin and protocol fee handler. Can succeed only once per
    /// program; every later call fails without touching state.
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    /// * `network_id` - Identifier of the network this program instance represents
    ///
    /// # Events
    /// * `XcallInitialized` - Emitted when the configuration is created
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the configuration account already exists
    /// * `InvalidNetworkId` - If the network id is empty or contains `/`
    /// * `NetworkIdTooLong` - If the network id exceeds `MAX_NETWORK_ID_LEN` bytes
    pub fn initialize(ctx: Context<Initialize>, network_id: String) -> Result<()> {
        instructions::initialize(ctx, network_id)
    }

    /// Replace the admin
    ///
    /// # Errors
    /// * `NotInitialized` - If the configuration does not exist yet
    /// * `OnlyAdmin` - If the signer is not the current admin
    pub fn set_admin(ctx: Context<SetAdmin>, account: Pubkey) -> Result<()> {
        instructions::set_admin(ctx, account)
    }

    /// Set the protocol fee charged on outgoing messages
    ///
    /// # Errors
    /// * `NotInitialized` - If the configuration does not exist yet
    /// * `OnlyFeeHandler` - If the signer is not the current fee handler
    pub fn set_protocol_fee(ctx: Context<SetProtocolFee>, fee: u64) -> Result<()> {
        instructions::set_protocol_fee(ctx, fee)
    }

    /// Replace the account that receives protocol fees
    ///
    /// # Errors
    /// * `NotInitialized` - If the configuration does not exist yet
    /// * `OnlyAdmin` - If the signer is not the current admin
    pub fn set_protocol_fee_handler(
        ctx: Context<SetProtocolFeeHandler>,
        fee_handler: Pubkey,
    ) -> Result<()> {
        instructions::set_protocol_fee_handler(ctx, fee_handler)
    }

    /// Return the stored configuration, or `None` before initialization
    pub fn get_identity(ctx: Context<GetIdentity>) -> Result<Option<Config>> {
        instructions::get_identity(ctx)
    }

    /// Return the current admin
    pub fn get_admin(ctx: Context<GetConfig>) -> Result<Pubkey> {
        instructions::get_admin(ctx)
    }

    /// Return the protocol fee in lamports
    pub fn get_protocol_fee(ctx: Context<GetConfig>) -> Result<u64> {
        instructions::get_protocol_fee(ctx)
    }

    /// Return the account that receives protocol fees
    pub fn get_protocol_fee_handler(ctx: Context<GetConfig>) -> Result<Pubkey> {
        instructions::get_protocol_fee_handler(ctx)
    }

    /// Return `<network_id>/<program_id>`, the address of this program on the
    /// cross-chain network
    ///
    /// # Errors
    /// * `NotInitialized` - If the configuration does not exist yet
    pub fn get_network_address(ctx: Context<GetConfig>) -> Result<NetworkAddress> {
        instructions::get_network_address(ctx)
    }
}
