use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::events::SupplyInjected;
use crate::ledger::{self, TokenAccountView};
use crate::state::CampaignState;

#[derive(Accounts)]
pub struct InjectSupply<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [CampaignState::SEED_PREFIX, state.owner.as_ref(), state.token_mint.as_ref()],
        bump = state.bump,
    )]
    pub state: Account<'info, CampaignState>,

    /// Owner's token account of the campaign mint
    #[account(mut)]
    pub from: Account<'info, TokenAccount>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<InjectSupply>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let settlement = ledger::inject_supply(
        &ctx.accounts.state,
        &owner,
        &TokenAccountView::of(&ctx.accounts.vault),
        &TokenAccountView::of(&ctx.accounts.from),
        amount,
    )?;

    // Owner signs for their own token account
    let cpi_accounts = Transfer {
        from: ctx.accounts.from.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, settlement.amount)?;

    emit!(SupplyInjected {
        owner,
        amount,
        held_balance: settlement.held_after,
    });

    Ok(())
}
