//! Total value locked across the whitelist.
//!
//! Every asset is priced through the oracle and resolved to its ERC-20 token
//! pair; the locked amount is either the token's total supply or the balance
//! a single contract holds. The first failed lookup aborts the aggregation
//! so a missing price never understates the total.

use {
    super::Keeper,
    crate::{
        address::EvmAddress,
        calculator,
        context::Context,
        decimal::Dec,
        error::KeeperError,
        interfaces::{Erc20Keeper, OracleKeeper},
    },
};

#[derive(Clone, Copy)]
enum TvlScope<'a> {
    Total,
    Contract(&'a EvmAddress),
}

impl<O: OracleKeeper, E: Erc20Keeper, B> Keeper<O, E, B> {
    fn aggregate_tvl(&self, ctx: &Context, scope: TvlScope) -> Result<Dec, KeeperError> {
        let mut tvl = Dec::zero();
        for asset in self.get_all_assets(ctx)? {
            let rate = self.oracle.get_exchange_rate(&asset.denom)?;
            let pair = self.erc20.token_pair(&asset.denom)?;
            let locked = match scope {
                TvlScope::Total => self.erc20.total_supply(&pair),
                TvlScope::Contract(contract) => self.erc20.balance_of(&pair.erc20_address, contract),
            };
            tvl = tvl + &rate * &Dec::from_uint(&locked);
        }
        Ok(tvl)
    }

    /// Σ `rate × total_supply` over every whitelisted asset. Zero when the
    /// whitelist is empty.
    pub fn total_tvl(&self, ctx: &Context) -> Result<Dec, KeeperError> {
        self.aggregate_tvl(ctx, TvlScope::Total)
    }

    /// Σ `rate × balance_of(contract)` over every whitelisted asset.
    pub fn contract_tvl(&self, ctx: &Context, contract: &EvmAddress) -> Result<Dec, KeeperError> {
        self.aggregate_tvl(ctx, TvlScope::Contract(contract))
    }

    /// `contract`'s share of an already computed `total_tvl`.
    pub fn tvl_ratio(
        &self,
        ctx: &Context,
        contract: &EvmAddress,
        total_tvl: &Dec,
    ) -> Result<Dec, KeeperError> {
        if total_tvl.is_zero() {
            return Ok(Dec::zero());
        }
        let contract_tvl = self.contract_tvl(ctx, contract)?;
        Ok(calculator::tvl_ratio(&contract_tvl, total_tvl))
    }

    /// `contract`'s share of the total locked value, both aggregated fresh.
    ///
    /// Returns zero when the total is zero. Any failed lookup is returned.
    pub fn tvl_reward(&self, ctx: &Context, contract: &EvmAddress) -> Result<Dec, KeeperError> {
        let contract_tvl = self.contract_tvl(ctx, contract)?;
        let total_tvl = self.total_tvl(ctx)?;
        Ok(calculator::tvl_ratio(&contract_tvl, &total_tvl))
    }
}
