//! Property-based tests for dev earn reward arithmetic.
//!
//! Properties tested:
//! 1. The TVL and gas portions always add up to the pool
//! 2. Gas ratios sum to one within rounding
//! 3. A payout never exceeds the exact reward it truncates
//! 4. Rewards of a full pass never exceed the pool

#[cfg(test)]
mod tests {
    use {
        num_bigint::{BigInt, BigUint},
        proptest::prelude::*,
        trv1_dev_earn_program::{
            calculator::{
                compute_reward, gas_ratio, payable_amount, split_reward_pool, total_gas, tvl_ratio,
            },
            Dec,
        },
    };

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 1. Pool split conservation
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn split_conserves_pool(pool in any::<u64>(), bps in 0..=10_000u64) {
            let (tvl_portion, gas_portion) = split_reward_pool(&BigUint::from(pool), bps);
            prop_assert_eq!(&tvl_portion + &gas_portion, Dec::from(pool));
            prop_assert!(!tvl_portion.is_negative());
            prop_assert!(!gas_portion.is_negative());
            prop_assert!(tvl_portion <= Dec::from(pool));
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 2. Gas ratios
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn gas_ratios_sum_to_one(meters in prop::collection::vec(any::<u64>(), 1..32)) {
            let total = total_gas(meters.iter().copied());
            prop_assume!(!total.is_zero());

            let sum: Dec = meters.iter().map(|gas| gas_ratio(*gas, &total)).sum();
            let error = (&sum - &Dec::one()).atomics().clone();
            // each ratio is off by at most half a unit in the 18th digit
            let bound = BigInt::from(meters.len());
            prop_assert!(error <= bound && error >= -bound.clone(), "sum = {}", sum);
        }

        #[test]
        fn gas_ratio_is_a_fraction(gas in any::<u64>(), rest in any::<u64>()) {
            let total = total_gas([gas, rest]);
            let ratio = gas_ratio(gas, &total);
            prop_assert!(!ratio.is_negative());
            prop_assert!(ratio <= Dec::one());
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 3 & 4. Payouts
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn payout_never_exceeds_reward(atomics in any::<i128>()) {
            let reward = Dec::from_atomics(BigInt::from(atomics));
            match payable_amount(&reward) {
                Some(amount) => {
                    prop_assert!(reward.is_positive());
                    prop_assert!(Dec::from_uint(&amount) <= reward);
                    prop_assert!(&reward - &Dec::from_uint(&amount) < Dec::one());
                }
                None => prop_assert!(reward < Dec::one()),
            }
        }

        #[test]
        fn pass_payouts_fit_in_pool(
            pool in 0..1_000_000_000_000_000u64,
            bps in 0..=10_000u64,
            participants in prop::collection::vec((any::<u32>(), 0..=100u64), 1..24),
        ) {
            let (tvl_portion, gas_portion) = split_reward_pool(&BigUint::from(pool), bps);
            let total = total_gas(participants.iter().map(|(gas, _)| u64::from(*gas)));
            prop_assume!(!total.is_zero());

            // locked shares are percentages normalised over the whole set
            let total_locked: u64 = participants.iter().map(|(_, locked)| locked).sum();
            let total_tvl = Dec::from(total_locked);

            let paid: BigUint = participants
                .iter()
                .map(|(gas, locked)| {
                    let reward = compute_reward(
                        &gas_ratio(u64::from(*gas), &total),
                        &gas_portion,
                        &tvl_ratio(&Dec::from(*locked), &total_tvl),
                        &tvl_portion,
                    );
                    payable_amount(&reward).unwrap_or_default()
                })
                .sum();
            prop_assert!(paid <= BigUint::from(pool), "paid {} of {}", paid, pool);
        }
    }
}
