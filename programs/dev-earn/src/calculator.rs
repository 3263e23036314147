use {
    crate::{constants::TOTAL_BPS, decimal::Dec},
    num_bigint::BigUint,
    num_traits::Zero,
};

/// Split a reward pool into its TVL-weighted and gas-weighted portions.
///
/// # Formula
///
/// ```text
/// tvl_portion = pool × tvl_share_bps / 10 000      (integer division)
/// gas_portion = pool − tvl_portion
/// ```
///
/// Returns `(tvl_portion, gas_portion)`. The two always add up to `pool`.
pub fn split_reward_pool(pool: &BigUint, tvl_share_bps: u64) -> (Dec, Dec) {
    let pool = Dec::from_uint(pool);
    let tvl_portion = pool
        .mul_int(tvl_share_bps)
        .quo_int(TOTAL_BPS)
        .unwrap_or_else(Dec::zero);
    let gas_portion = &pool - &tvl_portion;
    (tvl_portion, gas_portion)
}

/// Sum of every participant's gas meter.
pub fn total_gas(gas_meters: impl IntoIterator<Item = u64>) -> Dec {
    gas_meters.into_iter().map(Dec::from).sum()
}

/// `gas_meter / total_gas`, or zero when nothing was spent.
pub fn gas_ratio(gas_meter: u64, total_gas: &Dec) -> Dec {
    Dec::from(gas_meter)
        .checked_quo(total_gas)
        .unwrap_or_else(Dec::zero)
}

/// A contract's share of the total locked value. A zero total yields zero.
pub fn tvl_ratio(contract_tvl: &Dec, total_tvl: &Dec) -> Dec {
    contract_tvl
        .checked_quo(total_tvl)
        .unwrap_or_else(Dec::zero)
}

/// `gas_ratio × gas_portion + tvl_ratio × tvl_portion`
pub fn compute_reward(gas_ratio: &Dec, gas_portion: &Dec, tvl_ratio: &Dec, tvl_portion: &Dec) -> Dec {
    &(gas_ratio * gas_portion) + &(tvl_ratio * tvl_portion)
}

/// Whole token units a reward pays out, or `None` when nothing is owed.
///
/// Rewards are truncated toward zero; a non-positive reward, or one below a
/// single unit, pays nothing.
pub fn payable_amount(reward: &Dec) -> Option<BigUint> {
    if !reward.is_positive() {
        return None;
    }
    reward.truncate_uint().filter(|amount| !amount.is_zero())
}
