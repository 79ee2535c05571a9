/// Seed for the singleton configuration record.
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed for the claim-token mint.
pub const MINT_SEED: &[u8] = b"mint";

/// Seed for the program signer that owns mint and freeze authority over the claim-token.
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

/// Seed for the pool record, which also custodies the deposited lamports.
pub const POOL_SEED: &[u8] = b"vault";

/// Seed prefix for per-depositor records, followed by the depositor's key.
pub const USER_SEED: &[u8] = b"user";

/// Lamports in one whole SOL. Exchange rates are quoted in shares per whole SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// One claim-token base unit is one share.
pub const SHARE_DECIMALS: u8 = 0;
