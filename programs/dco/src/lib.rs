pub mod authorization;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod lifecycle;
pub mod query;
pub mod registry;
pub mod state;

use anchor_lang::prelude::*;
use instructions::*;
use query::CampaignSnapshot;

declare_id!("CEHTQCjD4A4z6MYRjXydYvFhnz6s5E5Wha8XvH9xvFXM");

/// Donation-linked token distribution campaign.
///
/// The owner locks a token supply in a PDA-owned vault; the owner and any
/// delegated releasers hand tokens out to buyers until the campaign end
/// time, booking a donation against every release. Booked donations are
/// later swept from the vault to the charity wallet in one transfer.
#[program]
pub mod dco {
    use super::*;

    /// Create the campaign state and its empty vault for `(owner, token_mint)`.
    pub fn initialize(
        ctx: Context<Initialize>,
        token_price: u128,
        campaign_end_time: i64,
        charity_wallet: Pubkey,
    ) -> Result<()> {
        initialize::handler(ctx, token_price, campaign_end_time, charity_wallet)
    }

    pub fn add_releaser(ctx: Context<ManageReleasers>, releaser: Pubkey) -> Result<()> {
        manage_releasers::add_handler(ctx, releaser)
    }

    pub fn remove_releaser(ctx: Context<ManageReleasers>, releaser: Pubkey) -> Result<()> {
        manage_releasers::remove_handler(ctx, releaser)
    }

    /// Move tokens from the owner's token account into the vault.
    pub fn inject_supply(ctx: Context<InjectSupply>, amount: u64) -> Result<()> {
        inject_supply::handler(ctx, amount)
    }

    /// Release tokens to a buyer and book `donation_amount` for the charity.
    ///
    /// Caller must be the owner or a releaser. The donation is not moved
    /// here; see `donate_to_charity`.
    pub fn release(ctx: Context<Release>, amount: u64, donation_amount: u64) -> Result<()> {
        release::handler(ctx, amount, donation_amount)
    }

    /// Sweep all owed donations from the vault to the charity token account.
    pub fn donate_to_charity(ctx: Context<DonateToCharity>) -> Result<()> {
        donate_to_charity::handler(ctx)
    }

    /// Owner reclaims unreserved vault tokens after the campaign end time.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        withdraw::handler(ctx, amount)
    }

    pub fn fetch_campaign(ctx: Context<FetchCampaign>) -> Result<CampaignSnapshot> {
        fetch_campaign::handler(ctx)
    }
}
