//! Persisted records of the TRv1 Dev Earn module.

use {
    crate::{
        address::EvmAddress,
        constants::{DEFAULT_REWARD_DENOM, DEFAULT_TVL_SHARE_BPS, TOTAL_BPS},
        error::DevEarnError,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

// ── Whitelist ────────────────────────────────────────────────────────────────

/// A token denomination whose locked value counts toward TVL rewards.
///
/// Stored under `[ASSETS_PREFIX, denom]`.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct Asset {
    pub denom: String,
}

impl Asset {
    pub fn new(denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
        }
    }
}

// ── Incentive record ─────────────────────────────────────────────────────────

/// One incentivized contract.
///
/// Stored under `[DEV_EARN_INFO_PREFIX, contract]`.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct DevEarnInfo {
    /// The incentivized contract.
    pub contract: EvmAddress,

    /// Hex address of the developer receiving the rewards.
    pub owner_address: String,

    /// Gas spent by users on the contract since the last distribution.
    pub gas_meter: u64,

    /// Distribution passes left before the record is retired.
    pub epochs: u32,
}

impl DevEarnInfo {
    pub fn new(contract: EvmAddress, owner_address: impl Into<String>, epochs: u32) -> Self {
        Self {
            contract,
            owner_address: owner_address.into(),
            gas_meter: 0,
            epochs,
        }
    }

    /// A record stays in the store only while it has epochs left.
    pub fn is_active(&self) -> bool {
        self.epochs > 0
    }
}

// ── Params ───────────────────────────────────────────────────────────────────

/// Governance-controlled module parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Params {
    /// Share of each reward pool split by TVL, in basis points. The rest is
    /// split by gas.
    pub tvl_share_bps: u64,

    /// Denomination the reward pool is held and paid in.
    pub reward_denom: String,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            tvl_share_bps: DEFAULT_TVL_SHARE_BPS,
            reward_denom: DEFAULT_REWARD_DENOM.to_string(),
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<(), DevEarnError> {
        if self.tvl_share_bps > TOTAL_BPS {
            return Err(DevEarnError::InvalidTvlShare);
        }
        validate_denom(&self.reward_denom)
    }
}

/// Denominations are 3–128 characters: a letter followed by letters,
/// digits, or one of `/:._-`.
pub fn validate_denom(denom: &str) -> Result<(), DevEarnError> {
    let mut chars = denom.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_valid =
        chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'));
    if !starts_with_letter || !rest_valid || !(3..=128).contains(&denom.len()) {
        return Err(DevEarnError::InvalidDenom);
    }
    Ok(())
}
