use anchor_lang::prelude::*;

#[event]
pub struct MintCreated {
    /// Canonical mint PDA
    pub mint: Pubkey,
    /// Record holding the metadata and counters
    pub mint_record: Pubkey,
    /// Token Metadata account read by wallets
    pub metadata: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    /// Wallet that paid for creation
    pub creator: Pubkey,
    pub slot: u64,
}

#[event]
pub struct TokensAirdropped {
    pub mint: Pubkey,
    pub recipient: Pubkey,
    /// Recipient's associated token account
    pub token_account: Pubkey,
    /// Base units credited
    pub amount: u64,
    /// Token account balance after the credit
    pub balance: u64,
    /// Mint supply after the credit
    pub supply: u64,
    /// Whether this call created the token account
    pub created: bool,
    pub slot: u64,
}
