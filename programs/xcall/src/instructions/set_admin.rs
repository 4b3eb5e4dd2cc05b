//! Set admin instruction for the xcall program

use anchor_lang::prelude::*;
use crate::events::AdminUpdated;
use crate::instructions::SetAdmin;
use crate::store;

/// Hand the admin role to `account`
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `account` - The public key of the new admin
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn set_admin(ctx: Context<SetAdmin>, account: Pubkey) -> Result<()> {
    let config_info = ctx.accounts.config.to_account_info();
    let mut config = store::load_initialized(&config_info, ctx.program_id)?;
    config.ensure_admin(ctx.accounts.admin.key())?;
    let clock = Clock::get()?;

    let previous_admin = config.admin;
    config.set_admin(account);
    store::save(&config_info, ctx.program_id, &config)?;

    emit!(AdminUpdated {
        config: config_info.key(),
        previous_admin,
        new_admin: account,
        timestamp: clock.unix_timestamp,
    });

    msg!("xcall admin changed from {} to {}", previous_admin, account);

    Ok(())
}
