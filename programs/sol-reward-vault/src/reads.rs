//! Decoding of raw account data for clients that fetch records over RPC.

use crate::error::VaultError;
use crate::state::{Config, Pool, UserAccount};
use anchor_lang::prelude::*;

fn decode<T: AccountDeserialize>(data: &[u8]) -> Result<T> {
    if data.is_empty() {
        return err!(VaultError::RecordNotFound);
    }
    T::try_deserialize(&mut &data[..])
}

pub fn read_config(data: &[u8]) -> Result<Config> {
    decode(data)
}

pub fn read_pool(data: &[u8]) -> Result<Pool> {
    decode(data)
}

pub fn read_user(data: &[u8]) -> Result<UserAccount> {
    decode(data)
}
