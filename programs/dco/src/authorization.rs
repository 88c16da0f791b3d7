use anchor_lang::prelude::*;

use crate::error::DcoError;
use crate::state::CampaignState;

/// Operations a caller can attempt against a campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Initialize,
    AddReleaser,
    RemoveReleaser,
    InjectSupply,
    Release,
    DonateToCharity,
    Withdraw,
}

/// Checks `caller` against the campaign's owner and releaser set.
///
/// Runs before any mutation. The signer check only proves which key
/// signed; this decides what that key may do. Reads need no caller.
pub fn authorize(state: &CampaignState, caller: &Pubkey, operation: Operation) -> Result<()> {
    match operation {
        // the state PDA is seeded by the signing owner, so only the
        // intended owner can reach an uninitialized record
        Operation::Initialize => {
            require!(!state.is_initialized(), DcoError::AlreadyInitialized);
            Ok(())
        }
        Operation::AddReleaser
        | Operation::RemoveReleaser
        | Operation::InjectSupply
        | Operation::Withdraw => {
            require_keys_eq!(*caller, state.owner, DcoError::Unauthorized);
            Ok(())
        }
        Operation::Release | Operation::DonateToCharity => {
            require!(
                state.is_owner(caller) || state.is_releaser(caller),
                DcoError::Unauthorized
            );
            Ok(())
        }
    }
}
