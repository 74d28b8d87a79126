use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("4gjGVTWDi19sBVS6oj4oskGyvennpyoxYju3rtUt4Qdo");

#[program]
pub mod spl_airdrop {
    use super::*;

    /// Creates the canonical mint at the [MINT_SEED] PDA, with the PDA as its
    /// own mint and freeze authority. The metadata goes into an immutable
    /// Token Metadata account and into the mint record.
    /// Succeeds once per deployment.
    pub fn create_mint(
        ctx: Context<CreateMint>,
        token_name: String,
        token_symbol: String,
        token_uri: String,
    ) -> Result<Pubkey> {
        ctx.accounts
            .create_mint(token_name, token_symbol, token_uri, &ctx.bumps)
    }

    /// Mints AIRDROP_AMOUNT into the recipient's associated token account,
    /// creating the account first if needed. `amount` is not honored.
    pub fn airdrop(ctx: Context<Airdrop>, mint: Pubkey, amount: u64) -> Result<AirdropReceipt> {
        ctx.accounts.airdrop(mint, amount)
    }
}
