use crate::account_structs::*;
use crate::error::*;
use crate::events::*;
use crate::guard::{
    load_share_balance, load_user_record, spendable_lamports, spendable_wallet_lamports,
    store_user_record,
};
use crate::ledger;
use crate::pda::MintSigner;
use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Burn, MintTo};

pub fn initialize(ctx: Context<Initialize>, exchange_rate: u64) -> Result<()> {
    let authority = ctx.accounts.signer.key();
    let mint = ctx.accounts.mint.key();

    let config = &mut ctx.accounts.config;
    let pool = &mut ctx.accounts.pool;
    ledger::open_vault(config, pool, authority, mint, exchange_rate)?;

    config.bump = ctx.bumps.config;
    config.mint_authority_bump = ctx.bumps.mint_authority;
    pool.bump = ctx.bumps.pool;

    msg!(
        "Vault initialized authority={} mint={} exchange_rate={}",
        authority,
        mint,
        exchange_rate
    );
    emit!(VaultInitialized {
        authority,
        mint,
        exchange_rate,
    });
    Ok(())
}

pub fn init_user(ctx: Context<InitUser>) -> Result<()> {
    let owner = ctx.accounts.signer.key();
    ledger::open_user_record(&mut ctx.accounts.user_account, owner, ctx.bumps.user_account)?;

    msg!("User record created for {}", owner);
    emit!(UserInitialized { user: owner });
    Ok(())
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let user_info = ctx.accounts.user_account.to_account_info();
    let mut user = load_user_record(&user_info)?;

    let depositor = ctx.accounts.signer.key();
    let available = spendable_wallet_lamports(&ctx.accounts.signer.to_account_info(), amount)?;
    let receipt = ledger::settle_deposit(
        &ctx.accounts.config,
        &mut ctx.accounts.pool,
        &mut user,
        &depositor,
        available,
        amount,
    )?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.signer.to_account_info(),
                to: ctx.accounts.pool.to_account_info(),
            },
        ),
        receipt.amount,
    )?;

    let mint_signer = MintSigner::new(ctx.accounts.config.mint_authority_bump);
    let seeds = mint_signer.seeds();
    let signer = &[&seeds[..]];
    let cpi_accounts = MintTo {
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.mint_authority.to_account_info(),
    };
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer,
        ),
        receipt.shares,
    )?;

    store_user_record(&user_info, &user)?;

    msg!(
        "Deposit user={} amount={} shares={} total_deposited={}",
        depositor,
        receipt.amount,
        receipt.shares,
        ctx.accounts.pool.total_deposited
    );
    emit!(DepositEvent {
        user: depositor,
        amount: receipt.amount,
        shares_minted: receipt.shares,
        total_deposited: ctx.accounts.pool.total_deposited,
    });
    Ok(())
}

pub fn withdraw(ctx: Context<Withdraw>, shares: u64) -> Result<()> {
    let user_info = ctx.accounts.user_account.to_account_info();
    let mut user = load_user_record(&user_info)?;

    let owner = ctx.accounts.signer.key();
    let pool_info = ctx.accounts.pool.to_account_info();
    let pool_spendable = spendable_lamports(&pool_info)?;
    let token_balance = load_share_balance(
        &ctx.accounts.user_token_account.to_account_info(),
        &owner,
        &ctx.accounts.mint.key(),
    )?;

    let receipt = ledger::settle_withdraw(
        &ctx.accounts.config,
        &mut ctx.accounts.pool,
        &mut user,
        &owner,
        token_balance,
        pool_spendable,
        shares,
    )?;

    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.signer.to_account_info(),
            },
        ),
        receipt.shares,
    )?;

    // Lamports move after the CPI; the pool is program-owned so it is debited directly.
    if receipt.amount > 0 {
        let signer_info = ctx.accounts.signer.to_account_info();
        let pool_remaining = pool_info
            .lamports()
            .checked_sub(receipt.amount)
            .ok_or(VaultError::PoolUnderfunded)?;
        let signer_total = signer_info
            .lamports()
            .checked_add(receipt.amount)
            .ok_or(VaultError::Overflow)?;
        **pool_info.try_borrow_mut_lamports()? = pool_remaining;
        **signer_info.try_borrow_mut_lamports()? = signer_total;
    }

    store_user_record(&user_info, &user)?;

    msg!(
        "Withdraw user={} shares={} amount={} total_deposited={}",
        owner,
        receipt.shares,
        receipt.amount,
        ctx.accounts.pool.total_deposited
    );
    emit!(WithdrawEvent {
        user: owner,
        amount: receipt.amount,
        shares_burned: receipt.shares,
        total_deposited: ctx.accounts.pool.total_deposited,
    });
    Ok(())
}

pub fn set_lock(ctx: Context<SetLock>, locked: bool) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    ledger::set_lock(&ctx.accounts.config, &mut ctx.accounts.pool, &signer, locked)?;

    msg!("Vault lock set to {} by {}", locked, signer);
    emit!(LockChanged {
        authority: signer,
        locked,
    });
    Ok(())
}

pub fn set_exchange_rate(ctx: Context<UpdateConfig>, new_rate: u64) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    let old_rate = ledger::set_exchange_rate(&mut ctx.accounts.config, &signer, new_rate)?;

    msg!("Exchange rate updated {} -> {}", old_rate, new_rate);
    emit!(ExchangeRateUpdated {
        authority: signer,
        old_rate,
        new_rate,
    });
    Ok(())
}

pub fn transfer_authority(ctx: Context<UpdateConfig>, new_authority: Pubkey) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    ledger::transfer_authority(&mut ctx.accounts.config, &signer, new_authority)?;

    msg!("Authority transferred {} -> {}", signer, new_authority);
    emit!(AuthorityTransferred {
        old_authority: signer,
        new_authority,
    });
    Ok(())
}
