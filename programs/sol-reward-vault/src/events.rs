use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub exchange_rate: u64,
}

#[event]
pub struct UserInitialized {
    pub user: Pubkey,
}

#[event]
pub struct DepositEvent {
    pub user: Pubkey,
    pub amount: u64,
    pub shares_minted: u64,
    pub total_deposited: u64,
}

#[event]
pub struct WithdrawEvent {
    pub user: Pubkey,
    pub amount: u64,
    pub shares_burned: u64,
    pub total_deposited: u64,
}

#[event]
pub struct LockChanged {
    pub authority: Pubkey,
    pub locked: bool,
}

#[event]
pub struct ExchangeRateUpdated {
    pub authority: Pubkey,
    pub old_rate: u64,
    pub new_rate: u64,
}

#[event]
pub struct AuthorityTransferred {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}
