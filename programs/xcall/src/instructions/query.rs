//! Read-only queries over the configuration

use anchor_lang::prelude::*;
use crate::instructions::{GetConfig, GetIdentity};
use crate::network_address::NetworkAddress;
use crate::state::Config;
use crate::store;

/// Return the stored configuration, `None` while the program is uninitialized
pub fn get_identity(ctx: Context<GetIdentity>) -> Result<Option<Config>> {
    store::load(&ctx.accounts.config.to_account_info(), ctx.program_id)
}

fn initialized_config(ctx: &Context<GetConfig>) -> Result<Config> {
    store::load_initialized(&ctx.accounts.config.to_account_info(), ctx.program_id)
}

pub fn get_admin(ctx: Context<GetConfig>) -> Result<Pubkey> {
    Ok(initialized_config(&ctx)?.admin)
}

pub fn get_protocol_fee(ctx: Context<GetConfig>) -> Result<u64> {
    Ok(initialized_config(&ctx)?.protocol_fee)
}

pub fn get_protocol_fee_handler(ctx: Context<GetConfig>) -> Result<Pubkey> {
    Ok(initialized_config(&ctx)?.fee_handler)
}

/// Return the network address of this program, `<network_id>/<program_id>`
pub fn get_network_address(ctx: Context<GetConfig>) -> Result<NetworkAddress> {
    let config = initialized_config(&ctx)?;
    Ok(NetworkAddress::new(
        &config.network_id,
        &ctx.program_id.to_string(),
    ))
}
