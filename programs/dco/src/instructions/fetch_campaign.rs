use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::error::DcoError;
use crate::ledger::{self, TokenAccountView};
use crate::query::{format_units, CampaignSnapshot};
use crate::state::CampaignState;

#[derive(Accounts)]
pub struct FetchCampaign<'info> {
    #[account(
        seeds = [CampaignState::SEED_PREFIX, state.owner.as_ref(), state.token_mint.as_ref()],
        bump = state.bump,
    )]
    pub state: Account<'info, CampaignState>,

    pub vault: Account<'info, TokenAccount>,

    #[account(address = state.token_mint @ DcoError::InvalidTokenMint)]
    pub token_mint: Account<'info, Mint>,
}

/// Returns the campaign snapshot as return data and logs the counters in
/// token units.
pub fn handler(ctx: Context<FetchCampaign>) -> Result<CampaignSnapshot> {
    let state = &ctx.accounts.state;
    let vault = TokenAccountView::of(&ctx.accounts.vault);
    ledger::ensure_vault(state, &vault)?;

    let decimals = ctx.accounts.token_mint.decimals;
    let snapshot = CampaignSnapshot::capture(state, vault.amount, decimals);

    msg!(
        "token sold: {} ({} tokens)",
        snapshot.token_sold,
        format_units(snapshot.token_sold, decimals)
    );
    msg!(
        "total donations: {} ({} tokens), owed: {}",
        snapshot.total_donations,
        format_units(snapshot.total_donations, decimals),
        format_units(snapshot.donations_owed, decimals)
    );
    msg!(
        "vault holds {} tokens, {} releasers",
        format_units(snapshot.held_balance as u128, decimals),
        snapshot.releasers.len()
    );

    Ok(snapshot)
}
