//! Initialize instruction for the xcall program

use anchor_lang::prelude::*;
use crate::events::XcallInitialized;
use crate::instructions::Initialize;
use crate::state::Config;
use crate::store;

/// Record the network identity of this program instance
///
/// Validation runs before anything is written, and creation is refused once
/// the configuration exists, so a failed call leaves the ledger untouched.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `network_id` - Identifier of the network this program represents
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn initialize(ctx: Context<Initialize>, network_id: String) -> Result<()> {
    Config::validate_network_id(&network_id)?;

    let config = ctx.accounts.config.to_account_info();
    let signer = ctx.accounts.signer.key();
    let bump = ctx.bumps.config;
    let clock = Clock::get()?;

    let record = Config::new(signer, network_id, bump, &clock);

    store::create(
        &config,
        &ctx.accounts.signer.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        ctx.program_id,
        bump,
        &record,
    )?;

    emit!(XcallInitialized {
        config: config.key(),
        admin: signer,
        network_id: record.network_id.clone(),
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "xcall initialized for network {} with admin {}",
        record.network_id,
        signer
    );

    Ok(())
}
