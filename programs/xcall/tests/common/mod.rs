#![allow(dead_code)]

use std::sync::OnceLock;

use anchor_lang::solana_program::{account_info::AccountInfo, entrypoint::ProgramResult};
use anchor_lang::{AccountDeserialize, AnchorDeserialize, InstructionData, ToAccountMetas};
use solana_program_test::{processor, BanksClient, BanksClientError, ProgramTest};
use solana_sdk::{
    account::Account,
    instruction::{Instruction, InstructionError},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_program,
    transaction::{Transaction, TransactionError},
};
use tokio::sync::{Mutex, MutexGuard};

use xcall::{Config, XcallError};

// `solana-program-test` shares global syscall stubs between banks; run the
// integration tests one at a time.
static PROGRAM_TEST_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub async fn program_test_lock() -> MutexGuard<'static, ()> {
    PROGRAM_TEST_LOCK.get_or_init(|| Mutex::new(())).lock().await
}

// The Anchor entrypoint ties the account slice to the account lifetime; the
// builtin processor hands out a shorter borrow.
fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    xcall::entry(program_id, accounts, data)
}

pub fn program_test() -> ProgramTest {
    let mut pt = ProgramTest::new("xcall", xcall::ID, processor!(process_instruction));
    pt.prefer_bpf(false);
    pt
}

/// Register a fresh keypair holding 10 SOL in the genesis accounts
pub fn add_funded_keypair(pt: &mut ProgramTest) -> Keypair {
    let keypair = Keypair::new();
    pt.add_account(
        keypair.pubkey(),
        Account::new(10 * LAMPORTS_PER_SOL, 0, &system_program::ID),
    );
    keypair
}

pub fn config_pda() -> Pubkey {
    xcall::store::config_address(&xcall::ID).0
}

pub fn initialize_ix(signer: &Pubkey, network_id: &str) -> Instruction {
    initialize_ix_with_config(signer, &config_pda(), network_id)
}

pub fn initialize_ix_with_config(signer: &Pubkey, config: &Pubkey, network_id: &str) -> Instruction {
    Instruction {
        program_id: xcall::ID,
        accounts: xcall::accounts::Initialize {
            config: *config,
            signer: *signer,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: xcall::instruction::Initialize {
            network_id: network_id.to_string(),
        }
        .data(),
    }
}

pub fn set_admin_ix(admin: &Pubkey, account: Pubkey) -> Instruction {
    Instruction {
        program_id: xcall::ID,
        accounts: xcall::accounts::SetAdmin {
            config: config_pda(),
            admin: *admin,
        }
        .to_account_metas(None),
        data: xcall::instruction::SetAdmin { account }.data(),
    }
}

pub fn set_protocol_fee_ix(fee_handler: &Pubkey, fee: u64) -> Instruction {
    Instruction {
        program_id: xcall::ID,
        accounts: xcall::accounts::SetProtocolFee {
            config: config_pda(),
            fee_handler: *fee_handler,
        }
        .to_account_metas(None),
        data: xcall::instruction::SetProtocolFee { fee }.data(),
    }
}

pub fn set_protocol_fee_handler_ix(admin: &Pubkey, fee_handler: Pubkey) -> Instruction {
    Instruction {
        program_id: xcall::ID,
        accounts: xcall::accounts::SetProtocolFeeHandler {
            config: config_pda(),
            admin: *admin,
        }
        .to_account_metas(None),
        data: xcall::instruction::SetProtocolFeeHandler { fee_handler }.data(),
    }
}

pub fn get_identity_ix() -> Instruction {
    Instruction {
        program_id: xcall::ID,
        accounts: xcall::accounts::GetIdentity {
            config: config_pda(),
        }
        .to_account_metas(None),
        data: xcall::instruction::GetIdentity {}.data(),
    }
}

/// Build a query instruction over the `GetConfig` context
pub fn get_config_ix(data: Vec<u8>) -> Instruction {
    Instruction {
        program_id: xcall::ID,
        accounts: xcall::accounts::GetConfig {
            config: config_pda(),
        }
        .to_account_metas(None),
        data,
    }
}

pub fn signed_tx(
    ixs: &[Instruction],
    payer: &Keypair,
    blockhash: solana_sdk::hash::Hash,
) -> Transaction {
    Transaction::new_signed_with_payer(ixs, Some(&payer.pubkey()), &[payer], blockhash)
}

pub async fn send(
    banks_client: &mut BanksClient,
    ixs: &[Instruction],
    payer: &Keypair,
) -> Result<(), BanksClientError> {
    let blockhash = banks_client.get_latest_blockhash().await?;
    banks_client
        .process_transaction(signed_tx(ixs, payer, blockhash))
        .await
}

/// Simulate a view instruction and decode its return data
///
/// The runtime strips trailing zero bytes from return data, so the payload is
/// padded back to `max_len` before decoding.
pub async fn simulate_view<T: AnchorDeserialize>(
    banks_client: &mut BanksClient,
    ix: Instruction,
    payer: &Keypair,
    max_len: usize,
) -> T {
    let blockhash = banks_client.get_latest_blockhash().await.unwrap();
    let simulation = banks_client
        .simulate_transaction(signed_tx(&[ix], payer, blockhash))
        .await
        .unwrap();
    assert!(
        matches!(simulation.result, Some(Ok(()))),
        "view failed: {:?}",
        simulation.result
    );

    let mut bytes = simulation
        .simulation_details
        .and_then(|details| details.return_data)
        .map(|return_data| return_data.data)
        .unwrap_or_default();
    assert!(bytes.len() <= max_len);
    bytes.resize(max_len, 0);
    T::deserialize(&mut bytes.as_slice()).unwrap()
}

pub async fn fetch_config(banks_client: &mut BanksClient) -> Option<Config> {
    let account = banks_client.get_account(config_pda()).await.unwrap()?;
    Some(Config::try_deserialize(&mut account.data.as_slice()).unwrap())
}

pub fn custom_error_code(err: &BanksClientError) -> u32 {
    match err.unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => code,
        other => panic!("unexpected error: {other:?}"),
    }
}

pub fn assert_xcall_error(err: &BanksClientError, expected: XcallError) {
    assert_eq!(
        custom_error_code(err),
        anchor_lang::error::ERROR_CODE_OFFSET + expected as u32,
        "{err:?}"
    );
}
