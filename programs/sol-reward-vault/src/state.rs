use anchor_lang::prelude::*;

/// Singleton vault configuration, seeds = [b"config"].
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Config {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub exchange_rate: u64,
    pub bump: u8,
    pub mint_authority_bump: u8,
}

impl Config {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 1 + 1;

    /// A default authority can never sign, so it marks a record that was
    /// allocated but never written.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }
}

/// Singleton pool, seeds = [b"vault"]. The account's own lamports are the custody.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Pool {
    pub total_deposited: u64,
    pub locked: bool,
    pub bump: u8,
}

impl Pool {
    pub const LEN: usize = 8 + 8 + 1 + 1;
}

/// Per-depositor record, seeds = [b"user", owner].
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct UserAccount {
    pub owner: Pubkey,
    /// Net principal: lamports deposited minus lamports paid back out.
    pub amount_deposited: u64,
    /// Reserved. No instruction accrues rewards yet.
    pub reward_earned: u64,
    pub shares_held: u64,
    pub bump: u8,
}

impl UserAccount {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 8 + 1;

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }
}
