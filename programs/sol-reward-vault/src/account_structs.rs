use crate::constants::*;
use crate::error::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::{get_associated_token_address, AssociatedToken};
use anchor_spl::token::{Mint, Token, TokenAccount};

// Singletons are opened with init_if_needed so that a second initialize reaches
// the handler and fails with AlreadyInitialized instead of a system error.
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        payer = signer,
        space = Config::LEN,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init_if_needed,
        payer = signer,
        space = Pool::LEN,
        seeds = [POOL_SEED],
        bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init_if_needed,
        payer = signer,
        mint::decimals = SHARE_DECIMALS,
        mint::authority = mint_authority,
        mint::freeze_authority = mint_authority,
        seeds = [MINT_SEED],
        bump
    )]
    pub mint: Account<'info, Mint>,

    /// CHECK: PDA that signs mint_to for the claim-token, validated by seeds constraint
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct InitUser<'info> {
    #[account(
        init_if_needed,
        payer = signer,
        space = UserAccount::LEN,
        seeds = [USER_SEED, signer.key().as_ref()],
        bump
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    /// CHECK: Address is bound to the signer by seeds. Contents are loaded in the
    /// handler so that a missing record reports RecordNotFound.
    #[account(
        mut,
        seeds = [USER_SEED, signer.key().as_ref()],
        bump
    )]
    pub user_account: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [MINT_SEED],
        bump,
        constraint = mint.key() == config.mint @ VaultError::InvalidMint
    )]
    pub mint: Account<'info, Mint>,

    /// CHECK: This is a PDA that acts as mint authority, validated by seeds constraint
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump = config.mint_authority_bump,
        constraint = mint.mint_authority == Some(mint_authority.key()).into() @ VaultError::InvalidMintAuthority
    )]
    pub mint_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = signer,
        associated_token::mint = mint,
        associated_token::authority = signer
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    /// CHECK: Address is bound to the signer by seeds. Contents are loaded in the
    /// handler so that a missing record reports RecordNotFound.
    #[account(
        mut,
        seeds = [USER_SEED, signer.key().as_ref()],
        bump
    )]
    pub user_account: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [MINT_SEED],
        bump,
        constraint = mint.key() == config.mint @ VaultError::InvalidMint
    )]
    pub mint: Account<'info, Mint>,

    /// CHECK: Bound to the signer's associated token account by address. Loaded in
    /// the handler so that a missing account reports InsufficientShares.
    #[account(
        mut,
        address = get_associated_token_address(&signer.key(), &mint.key())
    )]
    pub user_token_account: UncheckedAccount<'info>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct SetLock<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    pub signer: Signer<'info>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub signer: Signer<'info>,
}
