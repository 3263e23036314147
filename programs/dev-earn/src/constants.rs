//! Constants for the TRv1 Dev Earn module.

/// Module name. Also the seed of the module account address.
pub const MODULE_NAME: &str = "dev_earn";

/// Total basis points. `tvl_share_bps` is expressed against this.
pub const TOTAL_BPS: u64 = 10_000;

/// Default share of the reward pool split by TVL instead of gas.
pub const DEFAULT_TVL_SHARE_BPS: u64 = 0;

/// Denomination the reward pool is paid out in unless governance changes it.
pub const DEFAULT_REWARD_DENOM: &str = "aside";

/// Number of fractional digits carried by [`crate::decimal::Dec`].
pub const DEC_PRECISION: u32 = 18;

// ── Store layout ─────────────────────────────────────────────────────────────

/// Prefix of the whitelist records, keyed by raw denom bytes.
pub const ASSETS_PREFIX: &[u8] = b"Assets";

/// Prefix of the incentive records, keyed by contract address bytes.
pub const DEV_EARN_INFO_PREFIX: &[u8] = b"DevEarnInfo";

/// Key of the singleton params record.
pub const PARAMS_KEY: &[u8] = b"Params";

// ── Events ───────────────────────────────────────────────────────────────────

pub const EVENT_TYPE_DISTRIBUTE_REWARDS: &str = "distribute_rewards";
pub const EVENT_TYPE_REWARD_TRANSFER: &str = "reward_transfer";

pub const ATTRIBUTE_KEY_CONTRACT: &str = "contract";
pub const ATTRIBUTE_KEY_EPOCHS: &str = "epochs";
pub const ATTRIBUTE_KEY_RECIPIENT: &str = "recipient";
pub const ATTRIBUTE_KEY_AMOUNT: &str = "amount";
