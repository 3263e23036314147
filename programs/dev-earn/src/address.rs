//! Contract and account address types.
//!
//! Incentivized contracts and reward receivers are identified by 20-byte
//! chain addresses written in hex. Payouts go to the native account that
//! carries the same bytes.

use {
    crate::{constants::MODULE_NAME, error::DevEarnError},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, Deserialize, Deserializer, Serialize, Serializer},
    sha2::{Digest, Sha256},
    std::{fmt, str::FromStr},
};

pub const ADDRESS_LEN: usize = 20;

/// 20-byte contract address.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, BorshSerialize, BorshDeserialize,
)]
pub struct EvmAddress([u8; ADDRESS_LEN]);

impl EvmAddress {
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Parses a hex address, with or without `0x`.
    ///
    /// Short inputs are left-padded with zero bytes; long inputs keep their
    /// trailing 20 bytes.
    pub fn from_hex(input: &str) -> Result<Self, DevEarnError> {
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);
        let decoded = if digits.len() % 2 == 1 {
            hex::decode(format!("0{digits}"))
        } else {
            hex::decode(digits)
        }
        .map_err(|_| DevEarnError::InvalidAddress)?;

        let mut bytes = [0u8; ADDRESS_LEN];
        if decoded.len() > ADDRESS_LEN {
            bytes.copy_from_slice(&decoded[decoded.len() - ADDRESS_LEN..]);
        } else {
            bytes[ADDRESS_LEN - decoded.len()..].copy_from_slice(&decoded);
        }
        Ok(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for EvmAddress {
    type Err = DevEarnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for EvmAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for EvmAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(de::Error::custom)
    }
}

/// Native account identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccAddress(Vec<u8>);

impl AccAddress {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<EvmAddress> for AccAddress {
    fn from(address: EvmAddress) -> Self {
        Self(address.0.to_vec())
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(&self.0))
    }
}

/// Account controlled by a module: the first 20 bytes of `sha256(name)`.
pub fn module_address(name: &str) -> AccAddress {
    let digest = Sha256::digest(name.as_bytes());
    AccAddress(digest[..ADDRESS_LEN].to_vec())
}

/// Account holding the reward pool.
pub fn dev_earn_module_address() -> AccAddress {
    module_address(MODULE_NAME)
}
