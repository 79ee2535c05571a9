//! Vault accounting.
//!
//! Every function here validates first and writes last: when one returns an
//! error, the records it was handed are untouched. Handlers run these against
//! the deserialized accounts and then perform the matching lamport and token
//! movements inside the same instruction.

use crate::error::VaultError;
use crate::guard::require_authority;
use crate::math::{lamports_for_shares, shares_for_deposit};
use crate::state::{Config, Pool, UserAccount};
use anchor_lang::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositReceipt {
    pub amount: u64,
    pub shares: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawReceipt {
    pub shares: u64,
    pub amount: u64,
}

/// Writes the singleton configuration and pool.
pub fn open_vault(
    config: &mut Config,
    pool: &mut Pool,
    authority: Pubkey,
    mint: Pubkey,
    exchange_rate: u64,
) -> Result<()> {
    require!(!config.is_initialized(), VaultError::AlreadyInitialized);
    require!(exchange_rate > 0, VaultError::InvalidRate);
    require_keys_neq!(authority, Pubkey::default(), VaultError::InvalidAuthority);

    config.authority = authority;
    config.mint = mint;
    config.exchange_rate = exchange_rate;

    pool.total_deposited = 0;
    pool.locked = false;
    Ok(())
}

pub fn open_user_record(user: &mut UserAccount, owner: Pubkey, bump: u8) -> Result<()> {
    require!(!user.is_initialized(), VaultError::AlreadyInitialized);
    require_keys_neq!(owner, Pubkey::default(), VaultError::InvalidAuthority);

    *user = UserAccount {
        owner,
        amount_deposited: 0,
        reward_earned: 0,
        shares_held: 0,
        bump,
    };
    Ok(())
}

/// Books a deposit of `amount` lamports by `depositor`, who currently holds
/// `available_lamports`.
pub fn settle_deposit(
    config: &Config,
    pool: &mut Pool,
    user: &mut UserAccount,
    depositor: &Pubkey,
    available_lamports: u64,
    amount: u64,
) -> Result<DepositReceipt> {
    require!(!pool.locked, VaultError::VaultLocked);
    require!(user.is_initialized(), VaultError::RecordNotFound);
    require_keys_eq!(user.owner, *depositor, VaultError::Unauthorized);
    require!(amount > 0, VaultError::InvalidAmount);
    require!(available_lamports >= amount, VaultError::InsufficientFunds);

    let shares = shares_for_deposit(amount, config.exchange_rate)?;
    // too small to mint a single share
    require!(shares > 0, VaultError::InvalidAmount);

    let amount_deposited = user
        .amount_deposited
        .checked_add(amount)
        .ok_or(VaultError::Overflow)?;
    let shares_held = user
        .shares_held
        .checked_add(shares)
        .ok_or(VaultError::Overflow)?;
    let total_deposited = pool
        .total_deposited
        .checked_add(amount)
        .ok_or(VaultError::Overflow)?;

    user.amount_deposited = amount_deposited;
    user.shares_held = shares_held;
    pool.total_deposited = total_deposited;

    Ok(DepositReceipt { amount, shares })
}

/// Books a redemption of `shares` by `owner`.
///
/// `token_balance` is the owner's actual claim-token balance and
/// `pool_spendable` the lamports the pool can release. Redeeming every held
/// share pays out the remaining principal; a partial redemption pays the
/// converted amount, capped at that principal.
pub fn settle_withdraw(
    config: &Config,
    pool: &mut Pool,
    user: &mut UserAccount,
    owner: &Pubkey,
    token_balance: u64,
    pool_spendable: u64,
    shares: u64,
) -> Result<WithdrawReceipt> {
    require!(!pool.locked, VaultError::VaultLocked);
    require!(user.is_initialized(), VaultError::RecordNotFound);
    require_keys_eq!(user.owner, *owner, VaultError::Unauthorized);
    require!(shares > 0, VaultError::InvalidAmount);
    require!(
        user.shares_held >= shares && token_balance >= shares,
        VaultError::InsufficientShares
    );

    let full_exit = shares == user.shares_held;
    let amount = if full_exit {
        user.amount_deposited
    } else {
        lamports_for_shares(shares, config.exchange_rate)?.min(user.amount_deposited)
    };
    require!(amount > 0 || full_exit, VaultError::InvalidAmount);

    require!(
        pool.total_deposited >= amount && pool_spendable >= amount,
        VaultError::PoolUnderfunded
    );

    let shares_held = user.shares_held - shares;
    let amount_deposited = user.amount_deposited - amount;
    let total_deposited = pool.total_deposited - amount;

    user.shares_held = shares_held;
    user.amount_deposited = amount_deposited;
    pool.total_deposited = total_deposited;

    Ok(WithdrawReceipt { shares, amount })
}

pub fn set_lock(config: &Config, pool: &mut Pool, signer: &Pubkey, locked: bool) -> Result<()> {
    require_authority(config, signer)?;
    pool.locked = locked;
    Ok(())
}

/// Returns the previous rate.
pub fn set_exchange_rate(config: &mut Config, signer: &Pubkey, new_rate: u64) -> Result<u64> {
    require_authority(config, signer)?;
    require!(new_rate > 0, VaultError::InvalidRate);

    let old_rate = config.exchange_rate;
    config.exchange_rate = new_rate;
    Ok(old_rate)
}

pub fn transfer_authority(
    config: &mut Config,
    signer: &Pubkey,
    new_authority: Pubkey,
) -> Result<()> {
    require_authority(config, signer)?;
    require_keys_neq!(new_authority, Pubkey::default(), VaultError::InvalidAuthority);

    config.authority = new_authority;
    Ok(())
}
