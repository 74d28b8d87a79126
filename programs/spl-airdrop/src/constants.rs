/// Seed of the canonical SPL mint PDA. The PDA is also its own mint authority.
pub const MINT_SEED: &[u8] = b"mint";

/// Seed of the program-owned record that carries the mint's metadata and counters.
pub const MINT_RECORD_SEED: &[u8] = b"mint_record";

/// First seed of a Token Metadata account, followed by the metadata program id and the mint.
pub const METADATA_SEED: &[u8] = b"metadata";

/// Decimals of the canonical mint.
pub const MINT_DECIMALS: u8 = 9;

/// Base units credited by every airdrop (1 token at 9 decimals).
pub const AIRDROP_AMOUNT: u64 = 1_000_000_000;

/// Metadata bounds, matching the Token Metadata program's limits.
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;
