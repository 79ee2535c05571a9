//! Address derivation for every record the vault owns.
//!
//! Clients and handlers must locate the configuration, pool, mint and user
//! records through these functions; a caller-supplied address is never trusted.

use crate::constants::*;
use anchor_lang::prelude::*;

pub fn find_config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], program_id)
}

pub fn find_mint_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_SEED], program_id)
}

pub fn find_mint_authority_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_AUTHORITY_SEED], program_id)
}

pub fn find_pool_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED], program_id)
}

pub fn find_user_address(program_id: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_SEED, owner.as_ref()], program_id)
}

/// Every singleton address for one deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultAddresses {
    pub program_id: Pubkey,
    pub config: Pubkey,
    pub mint: Pubkey,
    pub mint_authority: Pubkey,
    pub pool: Pubkey,
}

impl VaultAddresses {
    pub fn derive(program_id: &Pubkey) -> Self {
        Self {
            program_id: *program_id,
            config: find_config_address(program_id).0,
            mint: find_mint_address(program_id).0,
            mint_authority: find_mint_authority_address(program_id).0,
            pool: find_pool_address(program_id).0,
        }
    }

    pub fn user(&self, owner: &Pubkey) -> Pubkey {
        find_user_address(&self.program_id, owner).0
    }
}

/// Capability to sign as the claim-token mint authority.
///
/// Only handlers inside this crate can build one, and only from the bump the
/// runtime validated for the `mint_authority` seeds.
pub(crate) struct MintSigner {
    bump: [u8; 1],
}

impl MintSigner {
    pub(crate) fn new(bump: u8) -> Self {
        Self { bump: [bump] }
    }

    pub(crate) fn seeds(&self) -> [&[u8]; 2] {
        [MINT_AUTHORITY_SEED, &self.bump]
    }
}
