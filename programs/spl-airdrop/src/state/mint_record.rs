use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::SplAirdropError;

/// Record of the canonical mint. PDA seeds: [MINT_RECORD_SEED]
///
/// Holds the token metadata and the supply counter next to the SPL mint at
/// [MINT_SEED]. A record whose `mint` is still the default key has been
/// allocated but not yet claimed by `create_mint`.
#[account]
#[derive(InitSpace)]
pub struct MintRecord {
    /// The SPL mint this record describes
    pub mint: Pubkey,

    /// Wallet that paid for the mint creation
    pub creator: Pubkey,

    #[max_len(32)]
    pub name: String,

    #[max_len(10)]
    pub symbol: String,

    #[max_len(200)]
    pub uri: String,

    pub decimals: u8,

    /// Base units minted through airdrops, kept equal to the SPL mint supply
    pub supply: u64,

    /// Number of successful airdrops
    pub airdrop_count: u64,

    /// Slot in which the mint was created
    pub created_slot: u64,

    /// Bump of the mint PDA, used to sign as mint authority
    pub mint_bump: u8,

    /// Bump of this record
    pub bump: u8,
}

impl MintRecord {
    pub fn is_initialized(&self) -> bool {
        self.mint != Pubkey::default()
    }

    /// Adds `amount` to the supply counter and returns the new supply.
    pub fn record_airdrop(&mut self, amount: u64) -> Result<u64> {
        self.supply = self
            .supply
            .checked_add(amount)
            .ok_or(SplAirdropError::SupplyOverflow)?;
        self.airdrop_count = self.airdrop_count.saturating_add(1);
        Ok(self.supply)
    }
}

/// Rejects metadata that does not fit the record.
pub fn validate_metadata(name: &str, symbol: &str, uri: &str) -> Result<()> {
    require!(
        !name.is_empty() && name.len() <= MAX_NAME_LENGTH,
        SplAirdropError::InvalidMetadata
    );
    require!(
        !symbol.is_empty() && symbol.len() <= MAX_SYMBOL_LENGTH,
        SplAirdropError::InvalidMetadata
    );
    require!(uri.len() <= MAX_URI_LENGTH, SplAirdropError::InvalidMetadata);
    Ok(())
}
