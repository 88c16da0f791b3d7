use anchor_lang::prelude::*;

#[error_code]
pub enum DcoError {
    #[msg("Caller is not authorized for this operation")]
    Unauthorized,

    #[msg("Campaign already initialized for this owner and mint")]
    AlreadyInitialized,

    #[msg("Invalid parameter: zero amount, zero price, past end time or empty charity wallet")]
    InvalidParameter,

    #[msg("Releasers list full")]
    CapacityExceeded,

    #[msg("Releaser already registered")]
    AlreadyPresent,

    #[msg("Releaser not found")]
    NotFound,

    #[msg("Campaign has ended, releases are closed")]
    CampaignExpired,

    #[msg("Campaign is still active")]
    CampaignStillActive,

    #[msg("Vault balance cannot cover this transfer")]
    InsufficientVaultBalance,

    #[msg("Source token account cannot cover this transfer")]
    InsufficientSourceBalance,

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("No donations owed to the charity wallet")]
    NoDonationsOwed,

    #[msg("Token account mint does not match campaign mint")]
    InvalidTokenMint,

    #[msg("Vault account does not match campaign vault")]
    InvalidVault,

    #[msg("Token account is not owned by the charity wallet")]
    InvalidCharityAccount,
}
