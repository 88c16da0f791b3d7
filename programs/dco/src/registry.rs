use anchor_lang::prelude::*;

use crate::authorization::{authorize, Operation};
use crate::error::DcoError;
use crate::state::CampaignState;

pub fn add(state: &mut CampaignState, caller: &Pubkey, releaser: Pubkey) -> Result<()> {
    authorize(state, caller, Operation::AddReleaser)?;
    require!(
        state.releasers.len() < CampaignState::MAX_RELEASERS,
        DcoError::CapacityExceeded
    );
    require!(!state.is_releaser(&releaser), DcoError::AlreadyPresent);

    state.releasers.push(releaser);
    Ok(())
}

pub fn remove(state: &mut CampaignState, caller: &Pubkey, releaser: &Pubkey) -> Result<()> {
    authorize(state, caller, Operation::RemoveReleaser)?;
    let index = state
        .releasers
        .iter()
        .position(|r| r == releaser)
        .ok_or(DcoError::NotFound)?;

    state.releasers.remove(index);
    Ok(())
}
