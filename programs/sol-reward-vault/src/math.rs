//! Share/lamport conversion. Both directions truncate toward zero.

use crate::constants::LAMPORTS_PER_SOL;
use crate::error::VaultError;
use anchor_lang::prelude::*;

/// Shares minted for `lamports` at `exchange_rate` shares per whole SOL.
pub fn shares_for_deposit(lamports: u64, exchange_rate: u64) -> Result<u64> {
    require!(exchange_rate > 0, VaultError::InvalidRate);
    let shares = (lamports as u128)
        .checked_mul(exchange_rate as u128)
        .ok_or(VaultError::Overflow)?
        / LAMPORTS_PER_SOL as u128;
    u64::try_from(shares).map_err(|_| error!(VaultError::Overflow))
}

/// Lamports redeemed for `shares` at `exchange_rate` shares per whole SOL.
pub fn lamports_for_shares(shares: u64, exchange_rate: u64) -> Result<u64> {
    require!(exchange_rate > 0, VaultError::InvalidRate);
    let lamports = (shares as u128)
        .checked_mul(LAMPORTS_PER_SOL as u128)
        .ok_or(VaultError::Overflow)?
        / exchange_rate as u128;
    u64::try_from(lamports).map_err(|_| error!(VaultError::Overflow))
}
