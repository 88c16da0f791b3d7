use anchor_lang::prelude::*;

use crate::authorization::{authorize, Operation};
use crate::error::DcoError;
use crate::state::CampaignState;

/// Immutable campaign configuration fixed at initialize.
#[derive(Clone, Copy, Debug)]
pub struct CampaignTerms {
    pub token_mint: Pubkey,
    pub vault: Pubkey,
    pub token_price: u128,
    pub campaign_end_time: i64,
    pub charity_wallet: Pubkey,
    pub bump: u8,
}

/// Writes a fresh campaign into an uninitialized record.
///
/// Fails without touching `state` if it already holds a campaign, so a
/// second initialize can never reset counters or the releaser set.
pub fn open_campaign(
    state: &mut CampaignState,
    owner: &Pubkey,
    terms: CampaignTerms,
    now: i64,
) -> Result<()> {
    authorize(state, owner, Operation::Initialize)?;
    require!(terms.token_price > 0, DcoError::InvalidParameter);
    require!(terms.campaign_end_time > now, DcoError::InvalidParameter);
    require_keys_neq!(terms.charity_wallet, Pubkey::default(), DcoError::InvalidParameter);

    state.owner = *owner;
    state.token_mint = terms.token_mint;
    state.vault = terms.vault;
    state.token_price = terms.token_price;
    state.campaign_end_time = terms.campaign_end_time;
    state.charity_wallet = terms.charity_wallet;
    state.releasers = Vec::new();
    state.token_sold = 0;
    state.total_donations = 0;
    state.donations_owed = 0;
    state.bump = terms.bump;

    Ok(())
}

/// Releases are open strictly before `campaign_end_time`.
pub fn ensure_release_window(state: &CampaignState, now: i64) -> Result<()> {
    require!(now < state.campaign_end_time, DcoError::CampaignExpired);
    Ok(())
}

pub fn ensure_campaign_ended(state: &CampaignState, now: i64) -> Result<()> {
    require!(now >= state.campaign_end_time, DcoError::CampaignStillActive);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    const NOW: i64 = 1_700_000_000;

    fn terms(end: i64) -> CampaignTerms {
        CampaignTerms {
            token_mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            token_price: 1_000_000,
            campaign_end_time: end,
            charity_wallet: Pubkey::new_unique(),
            bump: 254,
        }
    }

    #[test]
    fn open_campaign_starts_with_zeroed_counters() {
        let owner = Pubkey::new_unique();
        let terms = terms(NOW + 86_400);
        let mut state = CampaignState::default();

        open_campaign(&mut state, &owner, terms, NOW).unwrap();

        assert_eq!(state.owner, owner);
        assert_eq!(state.token_mint, terms.token_mint);
        assert_eq!(state.vault, terms.vault);
        assert_eq!(state.charity_wallet, terms.charity_wallet);
        assert_eq!(state.campaign_end_time, NOW + 86_400);
        assert_eq!(state.token_sold, 0);
        assert_eq!(state.total_donations, 0);
        assert_eq!(state.donations_owed, 0);
        assert!(state.releasers.is_empty());
        assert_eq!(state.bump, 254);
    }

    #[test]
    fn rejects_past_or_zero_end_time() {
        let owner = Pubkey::new_unique();
        for end in [0, NOW - 1, NOW] {
            let mut state = CampaignState::default();
            assert_eq!(
                open_campaign(&mut state, &owner, terms(end), NOW).unwrap_err(),
                Error::from(DcoError::InvalidParameter)
            );
            assert!(!state.is_initialized());
        }
    }

    #[test]
    fn rejects_zero_price_and_empty_charity() {
        let owner = Pubkey::new_unique();
        let mut state = CampaignState::default();

        let mut zero_price = terms(NOW + 10);
        zero_price.token_price = 0;
        assert_eq!(
            open_campaign(&mut state, &owner, zero_price, NOW).unwrap_err(),
            Error::from(DcoError::InvalidParameter)
        );

        let mut no_charity = terms(NOW + 10);
        no_charity.charity_wallet = Pubkey::default();
        assert_eq!(
            open_campaign(&mut state, &owner, no_charity, NOW).unwrap_err(),
            Error::from(DcoError::InvalidParameter)
        );
    }

    #[test]
    fn second_open_keeps_existing_counters() {
        let owner = Pubkey::new_unique();
        let mut state = CampaignState::default();
        open_campaign(&mut state, &owner, terms(NOW + 100), NOW).unwrap();
        state.token_sold = 42;
        state.donations_owed = 7;
        let before = state.clone();

        assert_eq!(
            open_campaign(&mut state, &owner, terms(NOW + 500), NOW).unwrap_err(),
            Error::from(DcoError::AlreadyInitialized)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn release_window_closes_at_end_time() {
        let state = CampaignState {
            campaign_end_time: NOW,
            ..Default::default()
        };
        assert!(ensure_release_window(&state, NOW - 1).is_ok());
        assert_eq!(
            ensure_release_window(&state, NOW).unwrap_err(),
            Error::from(DcoError::CampaignExpired)
        );
        assert_eq!(
            ensure_campaign_ended(&state, NOW - 1).unwrap_err(),
            Error::from(DcoError::CampaignStillActive)
        );
        assert!(ensure_campaign_ended(&state, NOW).is_ok());
    }
}
