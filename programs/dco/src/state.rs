use anchor_lang::prelude::*;

/// Distribution campaign record, one per (owner, token mint).
///
/// Custody of undistributed tokens lives in the SPL token account at `vault`,
/// whose authority is this PDA. Only the program's instructions can move it.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct CampaignState {
    /// Campaign creator, sole authority over releasers, supply and withdraw
    pub owner: Pubkey,
    /// Mint of the distributed token
    pub token_mint: Pubkey,
    /// Vault token account, PDA of [VAULT_SEED_PREFIX, state]
    pub vault: Pubkey,
    /// Advisory price of one unit in lamports, never collected on-chain
    pub token_price: u128,
    /// Unix timestamp at which releases close
    pub campaign_end_time: i64,
    /// Owner of the token account receiving donation sweeps
    pub charity_wallet: Pubkey,
    /// Identities allowed to release and sweep besides the owner
    pub releasers: Vec<Pubkey>,
    /// Lifetime released amount, raw units
    pub token_sold: u128,
    /// Lifetime recorded donations, raw units
    pub total_donations: u128,
    /// Donations recorded but not yet swept to the charity wallet
    pub donations_owed: u128,
    pub bump: u8,
}

impl CampaignState {
    pub const SEED_PREFIX: &'static [u8] = b"dco_state";
    pub const VAULT_SEED_PREFIX: &'static [u8] = b"dco_vault";
    pub const MAX_RELEASERS: usize = 20;

    pub const SIZE: usize = 8 // discriminator
        + 32  // owner
        + 32  // token_mint
        + 32  // vault
        + 16  // token_price
        + 8   // campaign_end_time
        + 32  // charity_wallet
        + 4 + (32 * Self::MAX_RELEASERS) // releasers
        + 16  // token_sold
        + 16  // total_donations
        + 16  // donations_owed
        + 1;  // bump

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn is_owner(&self, who: &Pubkey) -> bool {
        self.owner == *who
    }

    pub fn is_releaser(&self, who: &Pubkey) -> bool {
        self.releasers.contains(who)
    }

    pub fn releaser_count(&self) -> u8 {
        self.releasers.len() as u8
    }

    pub fn find_address(owner: &Pubkey, token_mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, owner.as_ref(), token_mint.as_ref()],
            &crate::ID,
        )
    }

    pub fn find_vault_address(state: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::VAULT_SEED_PREFIX, state.as_ref()], &crate::ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_uninitialized() {
        let state = CampaignState::default();
        assert!(!state.is_initialized());
        assert_eq!(state.releaser_count(), 0);
    }

    #[test]
    fn addresses_are_deterministic_per_owner_and_mint() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let other_mint = Pubkey::new_unique();

        let (state, _) = CampaignState::find_address(&owner, &mint);
        assert_eq!(CampaignState::find_address(&owner, &mint).0, state);
        assert_ne!(CampaignState::find_address(&owner, &other_mint).0, state);

        let (vault, _) = CampaignState::find_vault_address(&state);
        assert_eq!(CampaignState::find_vault_address(&state).0, vault);
        assert_ne!(vault, state);
    }

    #[test]
    fn size_covers_a_full_registry() {
        let state = CampaignState {
            owner: Pubkey::new_unique(),
            releasers: (0..CampaignState::MAX_RELEASERS)
                .map(|_| Pubkey::new_unique())
                .collect(),
            token_sold: u128::MAX,
            ..Default::default()
        };
        let mut data = Vec::new();
        state.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), CampaignState::SIZE);

        let decoded = CampaignState::try_deserialize(&mut data.as_slice()).unwrap();
        assert_eq!(decoded, state);
    }
}
