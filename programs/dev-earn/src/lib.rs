//! TRv1 Dev Earn
//!
//! Epoch rewards for the developers of incentivized smart contracts.
//!
//! # Overview
//!
//! Each incentivized contract has a [`DevEarnInfo`] record that accumulates
//! the gas users spend on it. At every epoch tick,
//! [`Keeper::distribute_rewards`] snapshots and ages those records and splits
//! the module account balance between them:
//!
//! ```text
//! tvl_portion = pool × tvl_share_bps / 10 000
//! gas_portion = pool − tvl_portion
//! reward(c)   = gas(c) / Σ gas × gas_portion + tvl(c) / Σ tvl × tvl_portion
//! ```
//!
//! TVL is the oracle-priced value of the whitelisted assets a contract holds,
//! relative to their total supply. Records are retired once their epochs run
//! out.
//!
//! # Governance
//!
//! The asset whitelist and the [`Params`] are changed through
//! [`processor::process_instruction`], signed by the keeper's authority.

#![allow(clippy::arithmetic_side_effects)]

pub mod address;
pub mod calculator;
pub mod constants;
pub mod context;
pub mod decimal;
pub mod error;
pub mod events;
pub mod genesis;
pub mod instruction;
pub mod interfaces;
pub mod keeper;
pub mod processor;
pub mod state;
pub mod store;

#[cfg(any(test, feature = "dev-context-only-utils"))]
pub mod test_utils;


pub use {
    address::{AccAddress, EvmAddress},
    context::Context,
    decimal::Dec,
    error::{DevEarnError, KeeperError},
    genesis::GenesisState,
    keeper::{
        AllocationOutcome, DistributionSummary, Keeper, RewardAllocation, RewardParticipant,
        RewardPool, TvlErrorPolicy,
    },
    state::{Asset, DevEarnInfo, Params},
};
