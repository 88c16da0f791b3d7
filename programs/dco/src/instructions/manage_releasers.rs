use anchor_lang::prelude::*;

use crate::events::{ReleaserAdded, ReleaserRemoved};
use crate::registry;
use crate::state::CampaignState;

#[derive(Accounts)]
pub struct ManageReleasers<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [CampaignState::SEED_PREFIX, state.owner.as_ref(), state.token_mint.as_ref()],
        bump = state.bump,
    )]
    pub state: Account<'info, CampaignState>,
}

pub fn add_handler(ctx: Context<ManageReleasers>, releaser: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let state = &mut ctx.accounts.state;
    registry::add(state, &owner, releaser)?;

    emit!(ReleaserAdded {
        owner,
        releaser,
        releaser_count: state.releaser_count(),
    });

    Ok(())
}

pub fn remove_handler(ctx: Context<ManageReleasers>, releaser: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let state = &mut ctx.accounts.state;
    registry::remove(state, &owner, &releaser)?;

    emit!(ReleaserRemoved {
        owner,
        releaser,
        releaser_count: state.releaser_count(),
    });

    Ok(())
}
