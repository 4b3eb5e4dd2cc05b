//! # Instructions Module
//!
//! Instruction handlers and account validation contexts for the xcall program.

use anchor_lang::prelude::*;
use crate::state::*;

pub mod initialize;
pub mod set_admin;
pub mod set_protocol_fee;
pub mod set_protocol_fee_handler;
pub mod query;

pub use initialize::*;
pub use set_admin::*;
pub use set_protocol_fee::*;
pub use set_protocol_fee_handler::*;
pub use query::*;

/// Account validation context for recording the network identity
///
/// `config` is left unchecked because it does not exist yet on the first call;
/// the seeds constraint pins it to the one address the program will ever use,
/// and the handler creates it through the identity store.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The configuration account to be created
    /// CHECK: Address enforced by seeds; existence checked by the handler
    #[account(
        mut,
        seeds = [Config::SEED_PREFIX],
        bump
    )]
    pub config: UncheckedAccount<'info>,

    /// Pays rent and becomes admin
    #[account(mut)]
    pub signer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Account validation context for replacing the admin
#[derive(Accounts)]
pub struct SetAdmin<'info> {
    /// CHECK: Address enforced by seeds; loaded and role-checked by the handler
    #[account(
        mut,
        seeds = [Config::SEED_PREFIX],
        bump
    )]
    pub config: UncheckedAccount<'info>,

    pub admin: Signer<'info>,
}

/// Account validation context for setting the protocol fee
#[derive(Accounts)]
pub struct SetProtocolFee<'info> {
    /// CHECK: Address enforced by seeds; loaded and role-checked by the handler
    #[account(
        mut,
        seeds = [Config::SEED_PREFIX],
        bump
    )]
    pub config: UncheckedAccount<'info>,

    pub fee_handler: Signer<'info>,
}

/// Account validation context for replacing the protocol fee handler
#[derive(Accounts)]
pub struct SetProtocolFeeHandler<'info> {
    /// CHECK: Address enforced by seeds; loaded and role-checked by the handler
    #[account(
        mut,
        seeds = [Config::SEED_PREFIX],
        bump
    )]
    pub config: UncheckedAccount<'info>,

    pub admin: Signer<'info>,
}

/// Account validation context for reading the identity before or after initialization
#[derive(Accounts)]
pub struct GetIdentity<'info> {
    /// CHECK: Address enforced by seeds; may not exist yet
    #[account(
        seeds = [Config::SEED_PREFIX],
        bump
    )]
    pub config: UncheckedAccount<'info>,
}

/// Account validation context for configuration queries (view functions)
///
/// Unlike [`GetIdentity`], these queries fail with `NotInitialized` when the
/// configuration does not exist yet.
#[derive(Accounts)]
pub struct GetConfig<'info> {
    /// CHECK: Address enforced by seeds; loaded by the handler
    #[account(
        seeds = [Config::SEED_PREFIX],
        bump
    )]
    pub config: UncheckedAccount<'info>,
}
