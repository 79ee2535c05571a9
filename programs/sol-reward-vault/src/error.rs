use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Account is already initialized")]
    AlreadyInitialized = 1,
    #[msg("User record not found; initialize the user first")]
    RecordNotFound = 2,
    #[msg("Invalid amount")]
    InvalidAmount = 3,
    #[msg("Insufficient funds")]
    InsufficientFunds = 4,
    #[msg("Insufficient shares")]
    InsufficientShares = 5,
    #[msg("Vault is locked")]
    VaultLocked = 6,
    #[msg("Signer is not the vault authority")]
    Unauthorized = 7,
    #[msg("Pool holds less than the redemption amount")]
    PoolUnderfunded = 8,
    #[msg("Exchange rate must be greater than zero")]
    InvalidRate = 9,
    #[msg("Invalid mint provided")]
    InvalidMint = 10,
    #[msg("Invalid mint authority")]
    InvalidMintAuthority = 11,
    #[msg("Arithmetic overflow")]
    Overflow = 12,
    #[msg("Invalid authority")]
    InvalidAuthority = 13,
}
