//! Error types for the TRv1 Dev Earn module.

use {
    num_derive::{FromPrimitive, ToPrimitive},
    thiserror::Error,
};

/// Coded module errors. Discriminants are stable and may be surfaced to
/// clients as numeric codes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum DevEarnError {
    // ── Authority ────────────────────────────────────────────────────────
    #[error("Signer is not the module authority")]
    UnauthorizedAuthority = 0,

    // ── Whitelist ────────────────────────────────────────────────────────
    #[error("Asset is already registered in the whitelist")]
    AssetAlreadyRegistered = 1,

    #[error("Asset is not registered in the whitelist")]
    AssetNotRegistered = 2,

    #[error("Invalid denomination")]
    InvalidDenom = 3,

    // ── Params ───────────────────────────────────────────────────────────
    #[error("TVL share exceeds 10 000 basis points")]
    InvalidTvlShare = 4,

    #[error("TVL share is non-zero but the asset whitelist is empty")]
    StrandedTvlShare = 5,

    // ── Incentives ───────────────────────────────────────────────────────
    #[error("Duplicate incentive record for contract")]
    DuplicateIncentive = 6,

    #[error("Incentive record has no remaining epochs")]
    ZeroEpochIncentive = 7,

    #[error("Invalid hex address")]
    InvalidAddress = 8,

    // ── Serialization ────────────────────────────────────────────────────
    #[error("Invalid instruction data")]
    InvalidInstructionData = 9,

    #[error("Failed to deserialize record")]
    DeserializationError = 10,

    #[error("Failed to serialize record")]
    SerializationError = 11,
}

/// Errors returned by keeper operations, including failures reported by
/// the collaborating modules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeeperError {
    #[error("exchange rate unavailable for {denom}: {reason}")]
    ExchangeRate { denom: String, reason: String },

    #[error("token pair lookup failed for {denom}: {reason}")]
    TokenPair { denom: String, reason: String },

    #[error("bank: {0}")]
    Bank(String),

    #[error("corrupted record under key {key}")]
    Decode { key: String },

    #[error(transparent)]
    DevEarn(#[from] DevEarnError),
}
