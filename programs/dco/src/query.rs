use anchor_lang::prelude::*;

use crate::state::CampaignState;

/// Decimal scale of the deployed campaign token.
pub const DISPLAY_DECIMALS: u8 = 9;

/// Point-in-time copy of a campaign and its vault balance.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CampaignSnapshot {
    pub owner: Pubkey,
    pub token_mint: Pubkey,
    pub vault: Pubkey,
    pub token_price: u128,
    pub campaign_end_time: i64,
    pub charity_wallet: Pubkey,
    pub releasers: Vec<Pubkey>,
    pub token_sold: u128,
    pub total_donations: u128,
    pub donations_owed: u128,
    pub held_balance: u64,
    pub decimals: u8,
}

impl CampaignSnapshot {
    pub fn capture(state: &CampaignState, held_balance: u64, decimals: u8) -> Self {
        Self {
            owner: state.owner,
            token_mint: state.token_mint,
            vault: state.vault,
            token_price: state.token_price,
            campaign_end_time: state.campaign_end_time,
            charity_wallet: state.charity_wallet,
            releasers: state.releasers.clone(),
            token_sold: state.token_sold,
            total_donations: state.total_donations,
            donations_owed: state.donations_owed,
            held_balance,
            decimals,
        }
    }
}

/// Display only. Ledger math stays in raw integer units.
pub fn to_human_units(raw: u128, decimals: u8) -> f64 {
    raw as f64 / 10f64.powi(decimals as i32)
}

/// Exact decimal rendering of a raw amount, trailing zeros trimmed.
pub fn format_units(raw: u128, decimals: u8) -> String {
    if decimals == 0 {
        return raw.to_string();
    }
    let digits = format!("{:0>width$}", raw, width = decimals as usize + 1);
    let (whole, fraction) = digits.split_at(digits.len() - decimals as usize);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}
