use crate::constants::*;
use crate::errors::*;
use crate::events::TokensAirdropped;
use crate::state::*;
use crate::utils::*;
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::{get_associated_token_address, AssociatedToken},
    token::{Mint, Token, TokenAccount},
};
use solana_program::program_option::COption;

//////////////////////////////// RECEIPT ////////////////////////////////

/// Returned to the caller as instruction return data
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AirdropReceipt {
    pub token_account: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub supply: u64,
    pub created: bool,
}

//////////////////////////////// INSTRUCTIONS ////////////////////////////////

#[derive(Accounts)]
#[instruction(mint: Pubkey)]
pub struct Airdrop<'info> {
    /// Pays for the recipient token account when it has to be created
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Owner of the credited token account
    /// CHECK: Any wallet may receive; only its key is used
    pub recipient: UncheckedAccount<'info>,

    /// The mint record; the `mint` argument must name its mint
    #[account(
        mut,
        seeds = [MINT_RECORD_SEED],
        bump = mint_record.bump,
        constraint = mint_record.mint == mint @ SplAirdropError::MintMismatch,
    )]
    pub mint_record: Account<'info, MintRecord>,

    /// The canonical mint
    /// CHECK: Pinned to the recorded mint before its data is read, so any
    /// other account fails with MintMismatch
    #[account(
        mut,
        address = mint_record.mint @ SplAirdropError::MintMismatch,
    )]
    pub mint_account: UncheckedAccount<'info>,

    /// The recipient's associated token account for the canonical mint
    /// CHECK: Address is pinned below; created by the handler when empty and
    /// validated as a token account otherwise
    #[account(
        mut,
        address = get_associated_token_address(&recipient.key(), &mint_account.key())
            @ SplAirdropError::InvalidTokenAccount,
    )]
    pub recipient_token_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

//////////////////////////////// HANDLERS ////////////////////////////////

impl<'info> Airdrop<'info> {
    pub fn airdrop(&mut self, mint: Pubkey, amount: u64) -> Result<AirdropReceipt> {
        let mint_state = self.load_mint()?;
        self.verify_mint_authority(&mint_state)?;

        // The credited amount is fixed; the argument only exists for client compatibility
        if amount != AIRDROP_AMOUNT {
            msg!(
                "Requested amount {} ignored, crediting the fixed {}",
                amount,
                AIRDROP_AMOUNT
            );
        }

        require!(
            mint_state.supply.checked_add(AIRDROP_AMOUNT).is_some(),
            SplAirdropError::SupplyOverflow
        );
        let supply = self.mint_record.record_airdrop(AIRDROP_AMOUNT)?;

        let created = self.create_token_account_if_absent()?;
        if !created {
            self.verify_token_account()?;
        }

        let bump = [self.mint_record.mint_bump];
        let seeds = mint_signer_seeds(&bump);
        let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

        mint_spl(
            self.token_program.to_account_info(),
            self.mint_account.to_account_info(),
            self.mint_account.to_account_info(),
            self.recipient_token_account.to_account_info(),
            AIRDROP_AMOUNT,
            Some(signer_seeds),
        )?;

        let balance = self.token_account_balance()?;
        let receipt = AirdropReceipt {
            token_account: self.recipient_token_account.key(),
            amount: AIRDROP_AMOUNT,
            balance,
            supply,
            created,
        };

        emit!(TokensAirdropped {
            mint,
            recipient: self.recipient.key(),
            token_account: receipt.token_account,
            amount: receipt.amount,
            balance,
            supply,
            created,
            slot: Clock::get()?.slot,
        });

        msg!(
            "Airdropped {} tokens of mint {} to {}",
            AIRDROP_AMOUNT,
            mint,
            receipt.token_account
        );

        Ok(receipt)
    }

    fn load_mint(&self) -> Result<Mint> {
        let data = self.mint_account.try_borrow_data()?;
        Mint::try_deserialize(&mut &data[..])
    }

    /// The mint must be the PDA this program signs for and must still name
    /// itself as mint authority.
    fn verify_mint_authority(&self, mint_state: &Mint) -> Result<()> {
        let mint = self.mint_account.key();

        require!(
            is_mint_pda(&mint, self.mint_record.mint_bump, &crate::ID),
            SplAirdropError::Unauthorized
        );
        require!(
            mint_state.mint_authority == COption::Some(mint),
            SplAirdropError::Unauthorized
        );

        Ok(())
    }

    /// Creates the recipient token account when it holds no data.
    /// Returns whether it was created.
    fn create_token_account_if_absent(&self) -> Result<bool> {
        if !self.recipient_token_account.data_is_empty() {
            return Ok(false);
        }

        // The associated token program only tops up what the address lacks,
        // and the payer may not be left with a balance below rent exemption.
        let rent = Rent::get()?;
        let shortfall = rent
            .minimum_balance(TokenAccount::LEN)
            .saturating_sub(self.recipient_token_account.lamports());
        let can_fund = match self.payer.lamports().checked_sub(shortfall) {
            Some(remaining) => remaining == 0 || remaining >= rent.minimum_balance(0),
            None => false,
        };
        require!(can_fund, SplAirdropError::AccountCreationFailed);

        create_associated_token_account(
            self.associated_token_program.to_account_info(),
            self.payer.to_account_info(),
            self.recipient_token_account.to_account_info(),
            self.recipient.to_account_info(),
            self.mint_account.to_account_info(),
            self.system_program.to_account_info(),
            self.token_program.to_account_info(),
        )?;

        msg!("Created token account {}", self.recipient_token_account.key());

        Ok(true)
    }

    fn verify_token_account(&self) -> Result<()> {
        require_keys_eq!(
            *self.recipient_token_account.owner,
            self.token_program.key(),
            SplAirdropError::InvalidTokenAccount
        );

        let data = self.recipient_token_account.try_borrow_data()?;
        let account = TokenAccount::try_deserialize(&mut &data[..])
            .map_err(|_| error!(SplAirdropError::InvalidTokenAccount))?;

        require_keys_eq!(
            account.mint,
            self.mint_account.key(),
            SplAirdropError::InvalidTokenAccount
        );
        require_keys_eq!(
            account.owner,
            self.recipient.key(),
            SplAirdropError::InvalidTokenAccount
        );

        Ok(())
    }

    fn token_account_balance(&self) -> Result<u64> {
        let data = self.recipient_token_account.try_borrow_data()?;
        let account = TokenAccount::try_deserialize(&mut &data[..])?;
        Ok(account.amount)
    }
}
