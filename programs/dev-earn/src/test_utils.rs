//! Deterministic collaborators for tests and local tooling.

use {
    crate::{
        address::{dev_earn_module_address, AccAddress, EvmAddress, ADDRESS_LEN},
        decimal::Dec,
        error::KeeperError,
        interfaces::{BankKeeper, Coin, Erc20Keeper, OracleKeeper, TokenPair},
        keeper::Keeper,
    },
    num_bigint::BigUint,
    std::{
        cell::Cell,
        collections::{BTreeMap, BTreeSet},
    },
};

pub const TEST_AUTHORITY: &str = "gov";

pub type TestKeeper = Keeper<MockOracle, MockErc20, MockBank>;

pub fn test_keeper() -> TestKeeper {
    Keeper::new(
        TEST_AUTHORITY,
        MockOracle::default(),
        MockErc20::default(),
        MockBank::default(),
    )
}

/// Contract address whose last byte is `id`.
pub fn contract(id: u8) -> EvmAddress {
    let mut bytes = [0u8; ADDRESS_LEN];
    bytes[0] = 0xc0;
    bytes[ADDRESS_LEN - 1] = id;
    EvmAddress::new(bytes)
}

/// ERC-20 token address whose last byte is `id`.
pub fn token(id: u8) -> EvmAddress {
    let mut bytes = [0u8; ADDRESS_LEN];
    bytes[0] = 0xe2;
    bytes[ADDRESS_LEN - 1] = id;
    EvmAddress::new(bytes)
}

/// Developer account whose last byte is `id`.
pub fn owner(id: u8) -> EvmAddress {
    let mut bytes = [0u8; ADDRESS_LEN];
    bytes[0] = 0xde;
    bytes[ADDRESS_LEN - 1] = id;
    EvmAddress::new(bytes)
}

#[derive(Debug, Default)]
pub struct MockOracle {
    rates: BTreeMap<String, Dec>,
    calls: Cell<usize>,
    outage_after: Option<usize>,
}

impl MockOracle {
    pub fn set_rate(&mut self, denom: &str, rate: Dec) {
        self.rates.insert(denom.to_string(), rate);
    }

    /// Every lookup after the first `calls` fails.
    pub fn go_offline_after(&mut self, calls: usize) {
        self.outage_after = Some(calls);
    }

    /// Number of price lookups served so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl OracleKeeper for MockOracle {
    fn get_exchange_rate(&self, denom: &str) -> Result<Dec, KeeperError> {
        let served = self.calls.get();
        self.calls.set(served.saturating_add(1));
        if self.outage_after.is_some_and(|limit| served >= limit) {
            return Err(KeeperError::ExchangeRate {
                denom: denom.to_string(),
                reason: "oracle offline".to_string(),
            });
        }
        self.rates
            .get(denom)
            .cloned()
            .ok_or_else(|| KeeperError::ExchangeRate {
                denom: denom.to_string(),
                reason: "no price".to_string(),
            })
    }
}

#[derive(Debug, Default)]
pub struct MockErc20 {
    pairs: BTreeMap<String, TokenPair>,
    supplies: BTreeMap<EvmAddress, BigUint>,
    balances: BTreeMap<(EvmAddress, EvmAddress), BigUint>,
}

impl MockErc20 {
    pub fn add_token(&mut self, denom: &str, address: EvmAddress, supply: impl Into<BigUint>) {
        self.pairs.insert(
            denom.to_string(),
            TokenPair {
                erc20_address: address,
                denom: denom.to_string(),
                enabled: true,
            },
        );
        self.supplies.insert(address, supply.into());
    }

    pub fn set_balance(&mut self, token: EvmAddress, holder: EvmAddress, amount: impl Into<BigUint>) {
        self.balances.insert((token, holder), amount.into());
    }
}

impl Erc20Keeper for MockErc20 {
    fn token_pair(&self, denom: &str) -> Result<TokenPair, KeeperError> {
        self.pairs
            .get(denom)
            .cloned()
            .ok_or_else(|| KeeperError::TokenPair {
                denom: denom.to_string(),
                reason: "not registered".to_string(),
            })
    }

    fn total_supply(&self, pair: &TokenPair) -> BigUint {
        self.supplies
            .get(&pair.erc20_address)
            .cloned()
            .unwrap_or_default()
    }

    fn balance_of(&self, token: &EvmAddress, holder: &EvmAddress) -> BigUint {
        self.balances
            .get(&(*token, *holder))
            .cloned()
            .unwrap_or_default()
    }
}

/// In-memory ledger. Transfers debit the module account and fail on
/// insufficient funds or for blocked recipients.
#[derive(Debug, Default)]
pub struct MockBank {
    balances: BTreeMap<(AccAddress, String), BigUint>,
    blocked: BTreeSet<AccAddress>,
    sent: Vec<(AccAddress, Coin)>,
}

impl MockBank {
    pub fn fund_module(&mut self, denom: &str, amount: impl Into<BigUint>) {
        self.credit(dev_earn_module_address(), denom, amount.into());
    }

    pub fn block_recipient(&mut self, account: AccAddress) {
        self.blocked.insert(account);
    }

    /// Successful transfers in order.
    pub fn sent(&self) -> &[(AccAddress, Coin)] {
        &self.sent
    }

    pub fn balance(&self, account: &AccAddress, denom: &str) -> BigUint {
        self.balances
            .get(&(account.clone(), denom.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    fn credit(&mut self, account: AccAddress, denom: &str, amount: BigUint) {
        let balance = self.balances.entry((account, denom.to_string())).or_default();
        *balance += amount;
    }
}

impl BankKeeper for MockBank {
    fn get_balance(&self, account: &AccAddress, denom: &str) -> Coin {
        Coin::new(denom, self.balance(account, denom))
    }

    fn send_coins_from_module_to_account(
        &mut self,
        _module: &str,
        recipient: &AccAddress,
        coins: &[Coin],
    ) -> Result<(), KeeperError> {
        if self.blocked.contains(recipient) {
            return Err(KeeperError::Bank(format!("{recipient} is not allowed to receive funds")));
        }
        let module = dev_earn_module_address();
        for coin in coins {
            let available = self.balance(&module, &coin.denom);
            if available < coin.amount {
                return Err(KeeperError::Bank(format!(
                    "insufficient funds: {}{} < {}{}",
                    available, coin.denom, coin.amount, coin.denom
                )));
            }
        }
        for coin in coins {
            let remaining = self.balance(&module, &coin.denom) - &coin.amount;
            self.balances
                .insert((module.clone(), coin.denom.clone()), remaining);
            self.credit(recipient.clone(), &coin.denom, coin.amount.clone());
            self.sent.push((recipient.clone(), coin.clone()));
        }
        Ok(())
    }
}
