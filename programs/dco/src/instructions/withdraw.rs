use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::events::Withdrawn;
use crate::ledger::{self, TokenAccountView};
use crate::state::CampaignState;

/// Owner reclaims unsold tokens once the campaign has ended.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [CampaignState::SEED_PREFIX, state.owner.as_ref(), state.token_mint.as_ref()],
        bump = state.bump,
    )]
    pub state: Account<'info, CampaignState>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let state = &ctx.accounts.state;

    let vault = TokenAccountView::of(&ctx.accounts.vault);
    let destination = TokenAccountView::of(&ctx.accounts.owner_token_account);

    let settlement = ledger::withdraw(state, &owner, now, &vault, &destination, amount)?;

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
        to: ctx.accounts.owner_token_account.to_account_info(),
        authority: state.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer(cpi_ctx, settlement.amount)?;

    emit!(Withdrawn {
        owner,
        amount,
        held_balance: settlement.held_after,
    });

    Ok(())
}
