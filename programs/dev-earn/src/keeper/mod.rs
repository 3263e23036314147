//! The module keeper: store access plus the reward pipeline.
//!
//! A [`Keeper`] owns the module's collaborators and the governance
//! authority. Every operation takes the [`Context`](crate::context::Context)
//! of the state transition it runs in.

mod assets;
mod dev_earn_info;
mod distribution;
mod params;
mod tvl;

pub use distribution::{
    AllocationOutcome, DistributionSummary, RewardAllocation, RewardParticipant, RewardPool,
    TvlErrorPolicy,
};
use {
    crate::{
        address::{dev_earn_module_address, AccAddress},
        error::{DevEarnError, KeeperError},
    },
    borsh::{BorshDeserialize, BorshSerialize},
};

pub struct Keeper<O, E, B> {
    authority: String,
    oracle: O,
    erc20: E,
    bank: B,
}

impl<O, E, B> Keeper<O, E, B> {
    pub fn new(authority: impl Into<String>, oracle: O, erc20: E, bank: B) -> Self {
        Self {
            authority: authority.into(),
            oracle,
            erc20,
            bank,
        }
    }

    /// Account allowed to submit governance instructions.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    pub fn erc20(&self) -> &E {
        &self.erc20
    }

    pub fn erc20_mut(&mut self) -> &mut E {
        &mut self.erc20
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut B {
        &mut self.bank
    }

    /// Account holding the reward pool.
    pub fn module_address(&self) -> AccAddress {
        dev_earn_module_address()
    }
}

fn encode<T: BorshSerialize>(value: &T) -> Result<Vec<u8>, KeeperError> {
    borsh::to_vec(value).map_err(|_| DevEarnError::SerializationError.into())
}

fn decode<T: BorshDeserialize>(key: &[u8], bytes: &[u8]) -> Result<T, KeeperError> {
    T::try_from_slice(bytes).map_err(|_| KeeperError::Decode {
        key: hex::encode(key),
    })
}
