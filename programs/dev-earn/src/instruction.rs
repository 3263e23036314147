//! Governance instructions for the TRv1 Dev Earn module.

use {
    crate::state::Params,
    borsh::{BorshDeserialize, BorshSerialize},
};

/// Instructions accepted by [`crate::processor::process_instruction`].
///
/// Every instruction must be signed by the keeper's authority.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum DevEarnInstruction {
    /// Add a denomination to the TVL whitelist.
    ///
    /// Fails if the denom is malformed or already whitelisted.
    RegisterAsset {
        denom: String,
    },

    /// Remove a denomination from the TVL whitelist.
    ///
    /// Fails if the denom is not whitelisted, or if it is the last asset
    /// while part of the pool is still reserved for TVL.
    RemoveAsset {
        denom: String,
    },

    /// Replace the module params.
    ///
    /// Fails on invalid params, or on a non-zero TVL share while the
    /// whitelist is empty.
    UpdateParams {
        params: Params,
    },
}

impl DevEarnInstruction {
    pub fn pack(&self) -> Vec<u8> {
        // Strings and integers only; encoding into a Vec cannot fail.
        borsh::to_vec(self).unwrap_or_default()
    }
}
