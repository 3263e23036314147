//! TRv1 Dev Earn Integration Tests
//!
//! End-to-end epoch scenarios for the dev earn module, driven through
//! [`harness::DevEarnTestHarness`]:
//!
//! 1. **Gas-weighted rewards**: single and shared pools, truncation
//! 2. **TVL-weighted rewards**: whitelist, locked balances, missing prices
//! 3. **Lifecycle**: epoch countdown, retirement, gas reset
//! 4. **Governance**: authority checks, stranded TVL share guards
//! 5. **Genesis**: import, export, JSON

#![allow(clippy::arithmetic_side_effects)]

pub mod harness;
