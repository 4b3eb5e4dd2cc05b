//! Set protocol fee instruction for the xcall program

use anchor_lang::prelude::*;
use crate::events::ProtocolFeeUpdated;
use crate::instructions::SetProtocolFee;
use crate::store;

pub fn set_protocol_fee(ctx: Context<SetProtocolFee>, fee: u64) -> Result<()> {
    let config_info = ctx.accounts.config.to_account_info();
    let mut config = store::load_initialized(&config_info, ctx.program_id)?;
    config.ensure_fee_handler(ctx.accounts.fee_handler.key())?;
    let clock = Clock::get()?;

    let previous_fee = config.protocol_fee;
    config.set_protocol_fee(fee);
    store::save(&config_info, ctx.program_id, &config)?;

    emit!(ProtocolFeeUpdated {
        config: config_info.key(),
        previous_fee,
        new_fee: fee,
        timestamp: clock.unix_timestamp,
    });

    msg!("Protocol fee set to {} lamports", fee);

    Ok(())
}
