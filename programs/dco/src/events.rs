use anchor_lang::prelude::*;

#[event]
pub struct CampaignInitialized {
    pub owner: Pubkey,
    pub state: Pubkey,
    pub token_mint: Pubkey,
    pub vault: Pubkey,
    pub token_price: u128,
    pub campaign_end_time: i64,
    pub charity_wallet: Pubkey,
}

#[event]
pub struct ReleaserAdded {
    pub owner: Pubkey,
    pub releaser: Pubkey,
    pub releaser_count: u8,
}

#[event]
pub struct ReleaserRemoved {
    pub owner: Pubkey,
    pub releaser: Pubkey,
    pub releaser_count: u8,
}

#[event]
pub struct SupplyInjected {
    pub owner: Pubkey,
    pub amount: u64,
    pub held_balance: u64,
}

#[event]
pub struct TokensReleased {
    pub caller: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
    pub donation_amount: u64,
    pub held_balance: u64,
    pub token_sold: u128,
}

#[event]
pub struct DonationSent {
    pub caller: Pubkey,
    pub charity_token_account: Pubkey,
    pub amount: u64,
    pub total_donations: u128,
}

#[event]
pub struct Withdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub held_balance: u64,
}
