//! TRv1 Dev Earn Property-Based Invariant Tests
//!
//! Uses proptest to verify the reward pipeline across random inputs:
//! - Reward arithmetic: pool splits, gas ratios, payouts
//! - Epoch lifecycle: record aging, retirement, pool conservation

pub mod lifecycle_invariants;
pub mod reward_invariants;
