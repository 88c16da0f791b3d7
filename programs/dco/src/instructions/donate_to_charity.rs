use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::events::DonationSent;
use crate::ledger::{self, TokenAccountView};
use crate::state::CampaignState;

#[derive(Accounts)]
pub struct DonateToCharity<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [CampaignState::SEED_PREFIX, state.owner.as_ref(), state.token_mint.as_ref()],
        bump = state.bump,
    )]
    pub state: Account<'info, CampaignState>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    /// Held by the campaign's charity wallet
    #[account(mut)]
    pub charity_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<DonateToCharity>) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let vault = TokenAccountView::of(&ctx.accounts.vault);
    let charity = TokenAccountView::of(&ctx.accounts.charity_token_account);

    let settlement = ledger::donate_to_charity(&mut ctx.accounts.state, &caller, &vault, &charity)?;

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
        to: ctx.accounts.charity_token_account.to_account_info(),
        authority: state.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer(cpi_ctx, settlement.amount)?;

    emit!(DonationSent {
        caller,
        charity_token_account: charity.key,
        amount: settlement.amount,
        total_donations: state.total_donations,
    });

    Ok(())
}
