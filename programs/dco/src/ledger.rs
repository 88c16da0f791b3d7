//! Vault custody accounting.
//!
//! Each operation validates the caller, the campaign window, the token
//! accounts on both sides of the transfer and the vault balance, applies its
//! counter changes to the campaign, and returns the [`Settlement`] the
//! instruction must then carry out as a token transfer. Nothing is written to
//! the campaign unless every check passed.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::authorization::{authorize, Operation};
use crate::error::DcoError;
use crate::lifecycle;
use crate::state::CampaignState;

/// The fields of an SPL token account the ledger rules look at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAccountView {
    pub key: Pubkey,
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

impl TokenAccountView {
    pub fn of(account: &Account<'_, TokenAccount>) -> Self {
        Self {
            key: account.key(),
            mint: account.mint,
            owner: account.owner,
            amount: account.amount,
        }
    }
}

/// A validated vault movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    /// Raw units to transfer
    pub amount: u64,
    /// Vault balance once the transfer lands
    pub held_after: u64,
}

/// The vault must be the campaign's own vault.
pub fn ensure_vault(state: &CampaignState, vault: &TokenAccountView) -> Result<()> {
    require_keys_eq!(vault.key, state.vault, DcoError::InvalidVault);
    Ok(())
}

/// A token account on the other side of a vault transfer: same mint as the
/// campaign and never the vault itself.
fn ensure_counterparty(
    state: &CampaignState,
    vault: &TokenAccountView,
    other: &TokenAccountView,
) -> Result<()> {
    require_keys_eq!(other.mint, state.token_mint, DcoError::InvalidTokenMint);
    require_keys_neq!(other.key, vault.key, DcoError::InvalidParameter);
    Ok(())
}

pub fn inject_supply(
    state: &CampaignState,
    caller: &Pubkey,
    vault: &TokenAccountView,
    source: &TokenAccountView,
    amount: u64,
) -> Result<Settlement> {
    authorize(state, caller, Operation::InjectSupply)?;
    ensure_vault(state, vault)?;
    ensure_counterparty(state, vault, source)?;
    require_keys_eq!(source.owner, *caller, DcoError::Unauthorized);
    require!(amount > 0, DcoError::InvalidParameter);
    require!(source.amount >= amount, DcoError::InsufficientSourceBalance);
    let held_after = vault.amount.checked_add(amount).ok_or(DcoError::Overflow)?;

    Ok(Settlement { amount, held_after })
}

/// Releases `amount` to a buyer and books `donation_amount` as owed to the
/// charity wallet. The donation stays in the vault until swept.
pub fn release(
    state: &mut CampaignState,
    caller: &Pubkey,
    now: i64,
    vault: &TokenAccountView,
    buyer: &TokenAccountView,
    amount: u64,
    donation_amount: u64,
) -> Result<Settlement> {
    authorize(state, caller, Operation::Release)?;
    lifecycle::ensure_release_window(state, now)?;
    ensure_vault(state, vault)?;
    ensure_counterparty(state, vault, buyer)?;
    require!(amount > 0, DcoError::InvalidParameter);
    let held_after = vault
        .amount
        .checked_sub(amount)
        .ok_or(DcoError::InsufficientVaultBalance)?;

    let token_sold = state
        .token_sold
        .checked_add(amount as u128)
        .ok_or(DcoError::Overflow)?;
    let total_donations = state
        .total_donations
        .checked_add(donation_amount as u128)
        .ok_or(DcoError::Overflow)?;
    let donations_owed = state
        .donations_owed
        .checked_add(donation_amount as u128)
        .ok_or(DcoError::Overflow)?;

    state.token_sold = token_sold;
    state.total_donations = total_donations;
    state.donations_owed = donations_owed;

    Ok(Settlement { amount, held_after })
}

/// Sweeps every owed donation to the charity wallet in one transfer.
/// `total_donations` is a lifetime counter and is left as is.
pub fn donate_to_charity(
    state: &mut CampaignState,
    caller: &Pubkey,
    vault: &TokenAccountView,
    charity: &TokenAccountView,
) -> Result<Settlement> {
    authorize(state, caller, Operation::DonateToCharity)?;
    ensure_vault(state, vault)?;
    require_keys_eq!(charity.mint, state.token_mint, DcoError::InvalidTokenMint);
    require_keys_eq!(charity.owner, state.charity_wallet, DcoError::InvalidCharityAccount);
    require_keys_neq!(charity.key, vault.key, DcoError::InvalidCharityAccount);
    require!(state.donations_owed > 0, DcoError::NoDonationsOwed);
    let amount = u64::try_from(state.donations_owed).map_err(|_| DcoError::Overflow)?;
    let held_after = vault
        .amount
        .checked_sub(amount)
        .ok_or(DcoError::InsufficientVaultBalance)?;

    state.donations_owed = 0;

    Ok(Settlement { amount, held_after })
}

/// Returns unsold custody to the owner once releases have closed. Tokens
/// backing owed donations are not withdrawable.
pub fn withdraw(
    state: &CampaignState,
    caller: &Pubkey,
    now: i64,
    vault: &TokenAccountView,
    destination: &TokenAccountView,
    amount: u64,
) -> Result<Settlement> {
    authorize(state, caller, Operation::Withdraw)?;
    lifecycle::ensure_campaign_ended(state, now)?;
    ensure_vault(state, vault)?;
    ensure_counterparty(state, vault, destination)?;
    require_keys_eq!(destination.owner, *caller, DcoError::Unauthorized);
    require!(amount > 0, DcoError::InvalidParameter);
    require!(
        amount <= withdrawable(vault.amount, state.donations_owed),
        DcoError::InsufficientVaultBalance
    );

    Ok(Settlement {
        amount,
        held_after: vault.amount - amount,
    })
}

pub fn withdrawable(vault_balance: u64, donations_owed: u128) -> u64 {
    let reserved = u64::try_from(donations_owed).unwrap_or(u64::MAX);
    vault_balance.saturating_sub(reserved)
}
