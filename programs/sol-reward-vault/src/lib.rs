pub mod account_structs;
/// # Sol Reward Vault - SOL Deposits Backed by Share Tokens
///
/// ## Business Process Flow
///
/// 1. Initial Setup:
///    - Admin initializes the vault with an exchange rate (shares per SOL)
///    - Program creates the share mint, owned by the `mint_authority` PDA
///    - Program creates the pool record, which custodies all deposited SOL
///
/// 2. User Deposit Flow:
///    - User creates a user record once
///    - User deposits SOL into the pool
///    - Program mints `amount * rate / 1 SOL` shares to the user's token account
///
/// 3. Withdrawal Flow:
///    - User burns shares
///    - Pool pays back the converted SOL, capped at the user's remaining principal
///
/// 4. Administrative Functions:
///    - Lock and unlock deposits and withdrawals
///    - Update the exchange rate
///    - Hand the authority to another key
///
/// Every record lives at a PDA. The pool's recorded total always equals the sum of
/// user principal, and each user's share counter always equals their token balance.
pub mod constants;
pub mod error;
pub mod events;
mod guard;
pub mod ledger;
pub mod math;
pub mod pda;
pub mod processor;
pub mod reads;
pub mod state;

use account_structs::*;
use anchor_lang::prelude::*;

declare_id!("GpAKr7A3K3w6KadMkQndFJdzZnwnifUyWF3Xwe8XZhtH");

#[program]
pub mod sol_reward_vault {
    use super::*;

    /// Creates the configuration, pool and share mint.
    /// Fails with AlreadyInitialized on every call after the first.
    pub fn initialize(ctx: Context<Initialize>, exchange_rate: u64) -> Result<()> {
        processor::initialize(ctx, exchange_rate)
    }

    /// Creates the signer's user record.
    pub fn init_user(ctx: Context<InitUser>) -> Result<()> {
        processor::init_user(ctx)
    }

    /// Handles user deposits of SOL:
    /// - Transfers `amount` lamports from the user to the pool
    /// - Mints the converted amount of shares to the user's associated token account
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        processor::deposit(ctx, amount)
    }

    /// Burns `shares` from the user and returns the matching lamports from the pool.
    pub fn withdraw(ctx: Context<Withdraw>, shares: u64) -> Result<()> {
        processor::withdraw(ctx, shares)
    }

    pub fn set_lock(ctx: Context<SetLock>, locked: bool) -> Result<()> {
        processor::set_lock(ctx, locked)
    }

    pub fn set_exchange_rate(ctx: Context<UpdateConfig>, new_rate: u64) -> Result<()> {
        processor::set_exchange_rate(ctx, new_rate)
    }

    pub fn transfer_authority(ctx: Context<UpdateConfig>, new_authority: Pubkey) -> Result<()> {
        processor::transfer_authority(ctx, new_authority)
    }
}
