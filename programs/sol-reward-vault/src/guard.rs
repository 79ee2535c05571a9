use crate::error::VaultError;
use crate::state::{Config, UserAccount};
use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

/// Fails with `Unauthorized` unless `signer` is the configured authority.
pub fn require_authority(config: &Config, signer: &Pubkey) -> Result<()> {
    require_keys_eq!(config.authority, *signer, VaultError::Unauthorized);
    Ok(())
}

/// Deserializes a user record that must already exist.
///
/// Deposit and withdraw take the user record unchecked so that a missing
/// record is reported as `RecordNotFound` instead of a framework error.
pub fn load_user_record(info: &AccountInfo) -> Result<UserAccount> {
    if info.data_is_empty() || info.owner != &crate::ID {
        return err!(VaultError::RecordNotFound);
    }
    let data = info.try_borrow_data()?;
    UserAccount::try_deserialize(&mut &data[..])
}

pub fn store_user_record(info: &AccountInfo, record: &UserAccount) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data[..];
    record.try_serialize(&mut dst)
}

/// Lamports the pool can pay out without dropping below rent exemption.
pub fn spendable_lamports(info: &AccountInfo) -> Result<u64> {
    let reserve = Rent::get()?.minimum_balance(info.data_len());
    Ok(info.lamports().saturating_sub(reserve))
}

/// Lamports a wallet can hand over for `amount`: all of them when the transfer
/// empties it, otherwise only what sits above its rent-exempt reserve.
pub fn wallet_spendable(balance: u64, reserve: u64, amount: u64) -> u64 {
    if amount == balance {
        balance
    } else {
        balance.saturating_sub(reserve)
    }
}

pub fn spendable_wallet_lamports(info: &AccountInfo, amount: u64) -> Result<u64> {
    let reserve = Rent::get()?.minimum_balance(info.data_len());
    Ok(wallet_spendable(info.lamports(), reserve, amount))
}

/// Claim-token balance of `owner`'s share account. An account that was never
/// created holds nothing, which the ledger reports as InsufficientShares.
pub fn load_share_balance(info: &AccountInfo, owner: &Pubkey, mint: &Pubkey) -> Result<u64> {
    if info.data_is_empty() {
        return Ok(0);
    }
    require_keys_eq!(*info.owner, anchor_spl::token::ID, VaultError::InvalidMint);

    let data = info.try_borrow_data()?;
    let account = TokenAccount::try_deserialize(&mut &data[..])?;
    require_keys_eq!(account.mint, *mint, VaultError::InvalidMint);
    require_keys_eq!(account.owner, *owner, VaultError::Unauthorized);
    Ok(account.amount)
}
