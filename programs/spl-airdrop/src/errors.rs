use anchor_lang::prelude::*;

#[error_code]
pub enum SplAirdropError {
    #[msg("Mint has already been created")]
    AlreadyInitialized,
    #[msg("Token name, symbol or uri is empty or too long")]
    InvalidMetadata,
    #[msg("Mint mismatch")]
    MintMismatch,
    #[msg("Payer cannot fund the recipient token account")]
    AccountCreationFailed,
    #[msg("Mint supply would overflow")]
    SupplyOverflow,
    #[msg("Mint authority is not the mint PDA")]
    Unauthorized,
    #[msg("Recipient token account is not the associated token account for this mint")]
    InvalidTokenAccount,
}
