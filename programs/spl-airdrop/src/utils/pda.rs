use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::metadata::Metadata;
use crate::constants::*;

/// Address and bump of the canonical mint PDA
pub fn find_mint_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_SEED], program_id)
}

/// Address and bump of the mint record PDA
pub fn find_mint_record_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_RECORD_SEED], program_id)
}

/// Token Metadata account of `mint`, owned by the metadata program
pub fn find_metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    let metadata_program = Metadata::id();
    Pubkey::find_program_address(
        &[METADATA_SEED, metadata_program.as_ref(), mint.as_ref()],
        &metadata_program,
    )
}

/// Associated token account of `recipient` for the canonical mint
pub fn find_recipient_token_address(recipient: &Pubkey, program_id: &Pubkey) -> Pubkey {
    let (mint, _) = find_mint_address(program_id);
    get_associated_token_address(recipient, &mint)
}

/// Checks that `mint` is the PDA derived from [MINT_SEED] and `mint_bump`.
///
/// This is what lets the program sign as mint authority, so a mint that fails
/// it cannot be minted into.
pub fn is_mint_pda(mint: &Pubkey, mint_bump: u8, program_id: &Pubkey) -> bool {
    Pubkey::create_program_address(&[MINT_SEED, &[mint_bump]], program_id)
        .map(|derived| derived == *mint)
        .unwrap_or(false)
}

/// Signer seeds for the mint PDA. The caller keeps `bump` alive for the CPI.
pub fn mint_signer_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
    [MINT_SEED, bump]
}
