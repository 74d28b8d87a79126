use anchor_lang::prelude::*;
use anchor_spl::metadata::Metadata;
use anchor_spl::token::{Mint, Token};
use crate::constants::*;
use crate::errors::*;
use crate::events::MintCreated;
use crate::state::*;
use crate::utils::*;

#[derive(Accounts)]
pub struct CreateMint<'info> {
    /// Pays for the mint and its record
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The mint record PDA. Listed before the mint so that a second creation
    /// attempt stops here with AlreadyInitialized instead of failing inside
    /// the system program when the mint is allocated.
    #[account(
        init_if_needed,
        payer = payer,
        space = MintRecord::DISCRIMINATOR.len() + MintRecord::INIT_SPACE,
        seeds = [MINT_RECORD_SEED],
        bump,
        constraint = !mint_record.is_initialized() @ SplAirdropError::AlreadyInitialized,
    )]
    pub mint_record: Account<'info, MintRecord>,

    /// The canonical mint PDA, its own mint and freeze authority
    #[account(
        init,
        payer = payer,
        seeds = [MINT_SEED],
        bump,
        mint::decimals = MINT_DECIMALS,
        mint::authority = mint_account.key(),
        mint::freeze_authority = mint_account.key(),
    )]
    pub mint_account: Account<'info, Mint>,

    /// Token Metadata account of the mint, created by the metadata program
    /// CHECK: Address is verified by the seeds below
    #[account(
        mut,
        seeds = [METADATA_SEED, token_metadata_program.key().as_ref(), mint_account.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub metadata_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub token_metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreateMint<'info> {
    pub fn create_mint(
        &mut self,
        token_name: String,
        token_symbol: String,
        token_uri: String,
        bumps: &CreateMintBumps,
    ) -> Result<Pubkey> {
        validate_metadata(&token_name, &token_symbol, &token_uri)?;

        let bump = [bumps.mint_account];
        let seeds = mint_signer_seeds(&bump);
        let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

        create_token_metadata(
            self.token_metadata_program.to_account_info(),
            self.metadata_account.to_account_info(),
            self.mint_account.to_account_info(),
            self.mint_account.to_account_info(),
            self.payer.to_account_info(),
            self.system_program.to_account_info(),
            self.rent.to_account_info(),
            token_name.clone(),
            token_symbol.clone(),
            token_uri.clone(),
            signer_seeds,
        )?;

        let slot = Clock::get()?.slot;
        let mint = self.mint_account.key();

        self.mint_record.set_inner(MintRecord {
            mint,
            creator: self.payer.key(),
            name: token_name,
            symbol: token_symbol,
            uri: token_uri,
            decimals: MINT_DECIMALS,
            supply: 0,
            airdrop_count: 0,
            created_slot: slot,
            mint_bump: bumps.mint_account,
            bump: bumps.mint_record,
        });

        emit!(MintCreated {
            mint,
            mint_record: self.mint_record.key(),
            metadata: self.metadata_account.key(),
            name: self.mint_record.name.clone(),
            symbol: self.mint_record.symbol.clone(),
            uri: self.mint_record.uri.clone(),
            decimals: MINT_DECIMALS,
            creator: self.payer.key(),
            slot,
        });

        msg!(
            "Token mint created: {} ({} / {})",
            mint,
            self.mint_record.name,
            self.mint_record.symbol
        );

        Ok(mint)
    }
}
