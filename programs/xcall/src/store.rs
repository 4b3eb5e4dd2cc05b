//! # Identity Record Store
//!
//! Addressing and create-once storage for the singleton [`Config`] account.
//!
//! The record lives at a program derived address computed only from a fixed
//! seed and the program id, so there is exactly one place it can ever be
//! written. Creation goes through the system program, which allocates an
//! address at most once: a second allocation against an account that already
//! carries data or belongs to another owner is rejected by the runtime, and
//! the ledger serializes transactions that write the same account.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::errors::XcallError;
use crate::state::Config;

/// Derive the configuration address and its canonical bump for `program_id`
pub fn config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[Config::SEED_PREFIX], program_id)
}

/// Whether the configuration account has already been created
///
/// An address that only holds lamports (sent there before initialization) is
/// still owned by the system program and does not count as created.
pub fn exists(config: &AccountInfo, program_id: &Pubkey) -> bool {
    config.owner == program_id && !config.data_is_empty()
}

/// Allocate the configuration account and write `record` into it
///
/// Fails with `AlreadyInitialized` when the account exists. The caller must
/// have checked that `config` sits at [`config_address`] with the given `bump`.
pub fn create<'info>(
    config: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    program_id: &Pubkey,
    bump: u8,
    record: &Config,
) -> Result<()> {
    if exists(config, program_id) {
        return err!(XcallError::AlreadyInitialized);
    }

    let bump_seed = [bump];
    let seeds: &[&[u8]] = &[Config::SEED_PREFIX, &bump_seed];
    let signer_seeds = &[seeds];

    let space = Config::SPACE;
    let rent = Rent::get()?.minimum_balance(space);
    let current_lamports = config.lamports();

    if current_lamports == 0 {
        create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: config.clone(),
                },
                signer_seeds,
            ),
            rent,
            space as u64,
            program_id,
        )?;
    } else {
        // Pre-funded address: create_account would refuse it, so top up rent
        // and allocate + assign instead.
        let top_up = rent.saturating_sub(current_lamports);
        if top_up > 0 {
            transfer(
                CpiContext::new(
                    system_program.clone(),
                    Transfer {
                        from: payer.clone(),
                        to: config.clone(),
                    },
                ),
                top_up,
            )?;
        }
        allocate(
            CpiContext::new_with_signer(
                system_program.clone(),
                Allocate {
                    account_to_allocate: config.clone(),
                },
                signer_seeds,
            ),
            space as u64,
        )?;
        assign(
            CpiContext::new_with_signer(
                system_program.clone(),
                Assign {
                    account_to_assign: config.clone(),
                },
                signer_seeds,
            ),
            program_id,
        )?;
    }

    write(config, record)
}

/// Read the configuration account, `None` if it has not been created
pub fn load(config: &AccountInfo, program_id: &Pubkey) -> Result<Option<Config>> {
    if !exists(config, program_id) {
        return Ok(None);
    }
    let data = config.try_borrow_data()?;
    let record = Config::try_deserialize(&mut &data[..])?;
    Ok(Some(record))
}

/// Read the configuration account, failing with `NotInitialized` if it has not
/// been created
pub fn load_initialized(config: &AccountInfo, program_id: &Pubkey) -> Result<Config> {
    load(config, program_id)?.ok_or_else(|| error!(XcallError::NotInitialized))
}

/// Overwrite an existing configuration account with `record`
pub fn save(config: &AccountInfo, program_id: &Pubkey, record: &Config) -> Result<()> {
    require!(exists(config, program_id), XcallError::NotInitialized);
    write(config, record)
}

fn write(config: &AccountInfo, record: &Config) -> Result<()> {
    let mut data = config.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    record.try_serialize(&mut writer)?;
    Ok(())
}
