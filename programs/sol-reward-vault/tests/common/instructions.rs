//! Vault instruction helpers.
//!
//! Each helper builds one instruction from the program's generated account and
//! argument types, sends it, and expires the blockhash so an identical retry is
//! a new transaction.

use anchor_lang::{InstructionData, ToAccountMetas};
use litesvm::LiteSVM;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;

use super::setup::VaultEnv;

fn send(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair, signers: &[&Keypair]) -> Result<(), String> {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm
        .send_transaction(tx)
        .map(|_| ())
        .map_err(|e| format!("{:?}", e));
    svm.expire_blockhash();
    result
}

fn signed_by(payer: &Keypair, user: &Keypair) -> Vec<Keypair> {
    let mut signers = vec![payer.insecure_clone()];
    if payer.pubkey() != user.pubkey() {
        signers.push(user.insecure_clone());
    }
    signers
}

// ============================================================================
// Setup
// ============================================================================

pub fn initialize(env: &mut VaultEnv, authority: &Keypair, exchange_rate: u64) -> Result<(), String> {
    let a = &env.addresses;
    let ix = Instruction {
        program_id: a.program_id,
        accounts: sol_reward_vault::accounts::Initialize {
            config: a.config,
            pool: a.pool,
            mint: a.mint,
            mint_authority: a.mint_authority,
            signer: authority.pubkey(),
            token_program: anchor_spl::token::ID,
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: sol_reward_vault::instruction::Initialize { exchange_rate }.data(),
    };
    send(&mut env.svm, ix, authority, &[authority])
}

pub fn init_user(env: &mut VaultEnv, user: &Keypair) -> Result<(), String> {
    let ix = Instruction {
        program_id: env.addresses.program_id,
        accounts: sol_reward_vault::accounts::InitUser {
            user_account: env.addresses.user(&user.pubkey()),
            signer: user.pubkey(),
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: sol_reward_vault::instruction::InitUser.data(),
    };
    send(&mut env.svm, ix, user, &[user])
}

// ============================================================================
// Deposit / Withdraw
// ============================================================================

pub fn deposit(env: &mut VaultEnv, user: &Keypair, amount: u64) -> Result<(), String> {
    deposit_with_payer(env, user, user, amount)
}

/// Deposit with transaction fees charged to `payer` instead of the depositor.
pub fn deposit_with_payer(
    env: &mut VaultEnv,
    payer: &Keypair,
    user: &Keypair,
    amount: u64,
) -> Result<(), String> {
    let owner = user.pubkey();
    let a = &env.addresses;
    let ix = Instruction {
        program_id: a.program_id,
        accounts: sol_reward_vault::accounts::Deposit {
            config: a.config,
            pool: a.pool,
            user_account: a.user(&owner),
            mint: a.mint,
            mint_authority: a.mint_authority,
            user_token_account: env.share_account(&owner),
            signer: owner,
            token_program: anchor_spl::token::ID,
            associated_token_program: anchor_spl::associated_token::ID,
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: sol_reward_vault::instruction::Deposit { amount }.data(),
    };
    let signers = signed_by(payer, user);
    let signers: Vec<&Keypair> = signers.iter().collect();
    send(&mut env.svm, ix, payer, &signers)
}

pub fn withdraw(env: &mut VaultEnv, user: &Keypair, shares: u64) -> Result<(), String> {
    withdraw_with_payer(env, user, user, shares)
}

/// Withdraw with transaction fees charged to `payer`, so the depositor's balance
/// moves by exactly the payout.
pub fn withdraw_with_payer(
    env: &mut VaultEnv,
    payer: &Keypair,
    user: &Keypair,
    shares: u64,
) -> Result<(), String> {
    let owner = user.pubkey();
    let a = &env.addresses;
    let ix = Instruction {
        program_id: a.program_id,
        accounts: sol_reward_vault::accounts::Withdraw {
            config: a.config,
            pool: a.pool,
            user_account: a.user(&owner),
            mint: a.mint,
            user_token_account: env.share_account(&owner),
            signer: owner,
            token_program: anchor_spl::token::ID,
        }
        .to_account_metas(None),
        data: sol_reward_vault::instruction::Withdraw { shares }.data(),
    };
    let signers = signed_by(payer, user);
    let signers: Vec<&Keypair> = signers.iter().collect();
    send(&mut env.svm, ix, payer, &signers)
}

// ============================================================================
// Administration
// ============================================================================

pub fn set_lock(env: &mut VaultEnv, signer: &Keypair, locked: bool) -> Result<(), String> {
    let ix = Instruction {
        program_id: env.addresses.program_id,
        accounts: sol_reward_vault::accounts::SetLock {
            config: env.addresses.config,
            pool: env.addresses.pool,
            signer: signer.pubkey(),
        }
        .to_account_metas(None),
        data: sol_reward_vault::instruction::SetLock { locked }.data(),
    };
    send(&mut env.svm, ix, signer, &[signer])
}

pub fn set_exchange_rate(env: &mut VaultEnv, signer: &Keypair, new_rate: u64) -> Result<(), String> {
    let ix = Instruction {
        program_id: env.addresses.program_id,
        accounts: sol_reward_vault::accounts::UpdateConfig {
            config: env.addresses.config,
            signer: signer.pubkey(),
        }
        .to_account_metas(None),
        data: sol_reward_vault::instruction::SetExchangeRate { new_rate }.data(),
    };
    send(&mut env.svm, ix, signer, &[signer])
}

pub fn transfer_authority(
    env: &mut VaultEnv,
    signer: &Keypair,
    new_authority: Pubkey,
) -> Result<(), String> {
    let ix = Instruction {
        program_id: env.addresses.program_id,
        accounts: sol_reward_vault::accounts::UpdateConfig {
            config: env.addresses.config,
            signer: signer.pubkey(),
        }
        .to_account_metas(None),
        data: sol_reward_vault::instruction::TransferAuthority { new_authority }.data(),
    };
    send(&mut env.svm, ix, signer, &[signer])
}
