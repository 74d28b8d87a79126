use anchor_lang::prelude::*;
use anchor_spl::associated_token::{self, Create};
use anchor_spl::metadata::{
    create_metadata_accounts_v3, mpl_token_metadata::types::DataV2, CreateMetadataAccountsV3,
};
use anchor_spl::token::{self, MintTo};

pub fn mint_spl<'info>(
    token_program: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    to: AccountInfo<'info>,
    amount: u64,
    signer: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = MintTo {
        mint,
        to,
        authority,
    };

    let cpi_ctx = if let Some(signer) = signer {
        CpiContext::new_with_signer(token_program, cpi_accounts, signer)
    } else {
        CpiContext::new(token_program, cpi_accounts)
    };

    token::mint_to(cpi_ctx, amount)?;

    Ok(())
}

pub fn create_associated_token_account<'info>(
    associated_token_program: AccountInfo<'info>,
    payer: AccountInfo<'info>,
    associated_token: AccountInfo<'info>,
    owner: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
) -> Result<()> {
    let cpi_accounts = Create {
        payer,
        associated_token,
        authority: owner,
        mint,
        system_program,
        token_program,
    };

    associated_token::create(CpiContext::new(associated_token_program, cpi_accounts))?;

    Ok(())
}

/// Creates an immutable Token Metadata account for `mint`. `authority` is both
/// mint authority and update authority and signs through `signer`.
#[allow(clippy::too_many_arguments)]
pub fn create_token_metadata<'info>(
    token_metadata_program: AccountInfo<'info>,
    metadata: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    payer: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    rent: AccountInfo<'info>,
    name: String,
    symbol: String,
    uri: String,
    signer: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = CreateMetadataAccountsV3 {
        metadata,
        mint,
        mint_authority: authority.clone(),
        payer,
        update_authority: authority,
        system_program,
        rent,
    };

    let data = DataV2 {
        name,
        symbol,
        uri,
        seller_fee_basis_points: 0,
        creators: None,
        collection: None,
        uses: None,
    };

    create_metadata_accounts_v3(
        CpiContext::new_with_signer(token_metadata_program, cpi_accounts, signer),
        data,
        false,
        true,
        None,
    )?;

    Ok(())
}
