use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::events::TokensReleased;
use crate::ledger::{self, TokenAccountView};
use crate::state::CampaignState;

#[derive(Accounts)]
pub struct Release<'info> {
    /// Owner or a registered releaser
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [CampaignState::SEED_PREFIX, state.owner.as_ref(), state.token_mint.as_ref()],
        bump = state.bump,
    )]
    pub state: Account<'info, CampaignState>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    /// Must already exist; the buyer creates their own token account
    #[account(mut)]
    pub buyer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Release>, amount: u64, donation_amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.caller.key();
    let vault = TokenAccountView::of(&ctx.accounts.vault);
    let buyer = TokenAccountView::of(&ctx.accounts.buyer_token_account);

    let settlement = ledger::release(
        &mut ctx.accounts.state,
        &caller,
        now,
        &vault,
        &buyer,
        amount,
        donation_amount,
    )?;

    let state = &ctx.accounts.state;
    let bump = [state.bump];
    let seeds = &[
        CampaignState::SEED_PREFIX,
        state.owner.as_ref(),
        state.token_mint.as_ref(),
        &bump,
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.buyer_token_account.to_account_info(),
        authority: state.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer(cpi_ctx, settlement.amount)?;

    emit!(TokensReleased {
        caller,
        buyer: buyer.key,
        amount,
        donation_amount,
        held_balance: settlement.held_after,
        token_sold: state.token_sold,
    });

    Ok(())
}
