use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::events::CampaignInitialized;
use crate::lifecycle::{self, CampaignTerms};
use crate::state::CampaignState;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_mint: Account<'info, Mint>,

    /// init_if_needed so a repeated initialize reaches the handler and fails
    /// with AlreadyInitialized instead of a system program error
    #[account(
        init_if_needed,
        payer = owner,
        space = CampaignState::SIZE,
        seeds = [CampaignState::SEED_PREFIX, owner.key().as_ref(), token_mint.key().as_ref()],
        bump,
    )]
    pub state: Account<'info, CampaignState>,

    #[account(
        init_if_needed,
        payer = owner,
        token::mint = token_mint,
        token::authority = state,
        seeds = [CampaignState::VAULT_SEED_PREFIX, state.key().as_ref()],
        bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    token_price: u128,
    campaign_end_time: i64,
    charity_wallet: Pubkey,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let terms = CampaignTerms {
        token_mint: ctx.accounts.token_mint.key(),
        vault: ctx.accounts.vault.key(),
        token_price,
        campaign_end_time,
        charity_wallet,
        bump: ctx.bumps.state,
    };

    lifecycle::open_campaign(&mut ctx.accounts.state, &owner, terms, now)?;

    emit!(CampaignInitialized {
        owner,
        state: ctx.accounts.state.key(),
        token_mint: terms.token_mint,
        vault: terms.vault,
        token_price,
        campaign_end_time,
        charity_wallet,
    });

    Ok(())
}
