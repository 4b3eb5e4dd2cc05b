//! Set protocol fee handler instruction for the xcall program

use anchor_lang::prelude::*;
use crate::events::FeeHandlerUpdated;
use crate::instructions::SetProtocolFeeHandler;
use crate::store;

/// Replace the account that may set the protocol fee and receives it
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `fee_handler` - The public key of the new fee handler
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn set_protocol_fee_handler(
    ctx: Context<SetProtocolFeeHandler>,
    fee_handler: Pubkey,
) -> Result<()> {
    let config_info = ctx.accounts.config.to_account_info();
    let mut config = store::load_initialized(&config_info, ctx.program_id)?;
    config.ensure_admin(ctx.accounts.admin.key())?;
    let clock = Clock::get()?;

    let previous_fee_handler = config.fee_handler;
    config.set_fee_handler(fee_handler);
    store::save(&config_info, ctx.program_id, &config)?;

    emit!(FeeHandlerUpdated {
        config: config_info.key(),
        previous_fee_handler,
        new_fee_handler: fee_handler,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Protocol fee handler changed from {} to {}",
        previous_fee_handler,
        fee_handler
    );

    Ok(())
}
