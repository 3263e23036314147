//! Collaborating modules the keeper reads prices, token data and balances
//! from, and pays rewards through.
//!
//! The host wires concrete implementations in; the module never owns their
//! state.

use {
    crate::{
        address::{AccAddress, EvmAddress},
        decimal::Dec,
        error::KeeperError,
    },
    num_bigint::BigUint,
    serde::{Deserialize, Serialize},
};

/// Native denomination paired with the ERC-20 contract representing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub erc20_address: EvmAddress,
    pub denom: String,
    pub enabled: bool,
}

/// An amount of a single denomination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coin {
    pub denom: String,
    pub amount: BigUint,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<BigUint>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// Price feed.
pub trait OracleKeeper {
    /// Price of one unit of `denom` in the reward currency.
    fn get_exchange_rate(&self, denom: &str) -> Result<Dec, KeeperError>;
}

/// Token registry and ERC-20 balance queries.
pub trait Erc20Keeper {
    fn token_pair(&self, denom: &str) -> Result<TokenPair, KeeperError>;

    fn total_supply(&self, pair: &TokenPair) -> BigUint;

    fn balance_of(&self, token: &EvmAddress, holder: &EvmAddress) -> BigUint;
}

/// Native balances and module-to-account transfers.
pub trait BankKeeper {
    fn get_balance(&self, account: &AccAddress, denom: &str) -> Coin;

    fn send_coins_from_module_to_account(
        &mut self,
        module: &str,
        recipient: &AccAddress,
        coins: &[Coin],
    ) -> Result<(), KeeperError>;
}
