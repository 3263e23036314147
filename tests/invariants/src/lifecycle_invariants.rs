//! Property-based tests for the dev earn epoch lifecycle.
//!
//! Properties tested:
//! 1. Survivors lose exactly one epoch and restart with an empty gas meter
//! 2. Records on their last epoch are gone after the pass
//! 3. One `distribute_rewards` event per record
//! 4. Module balance plus payouts equals the funded pool
//! 5. No gas means no transfers

#[cfg(test)]
mod tests {
    use {
        num_bigint::BigUint,
        proptest::prelude::*,
        trv1_dev_earn_program::{
            constants::EVENT_TYPE_DISTRIBUTE_REWARDS,
            context::Context,
            state::{Asset, DevEarnInfo, Params},
            store::MemoryStore,
            test_utils::{contract, owner, test_keeper, token, TestKeeper},
            AccAddress, Dec,
        },
    };

    const DENOM: &str = "aside";
    const SUPPLY: u64 = 1_000_000;

    /// (gas_meter, epochs, locked)
    type RecordSeed = (u64, u32, u64);

    fn records() -> impl Strategy<Value = Vec<RecordSeed>> {
        prop::collection::vec((0..1_000_000_000u64, 1..6u32, 0..=SUPPLY / 32), 1..32)
    }

    fn setup(
        pool: u64,
        tvl_share_bps: u64,
        seeds: &[RecordSeed],
    ) -> (TestKeeper, MemoryStore, Vec<DevEarnInfo>) {
        let mut keeper = test_keeper();
        keeper.bank_mut().fund_module(DENOM, pool);
        keeper.oracle_mut().set_rate("coin", Dec::one());
        keeper.erc20_mut().add_token("coin", token(1), SUPPLY);

        let infos: Vec<DevEarnInfo> = (1u8..)
            .zip(seeds)
            .map(|(id, (gas, epochs, locked))| {
                keeper
                    .erc20_mut()
                    .set_balance(token(1), contract(id), *locked);
                let mut info = DevEarnInfo::new(contract(id), owner(id).to_hex(), *epochs);
                info.gas_meter = *gas;
                info
            })
            .collect();

        let mut store = MemoryStore::new();
        {
            let mut ctx = Context::new(&mut store, 1);
            keeper
                .set_params(
                    &mut ctx,
                    &Params {
                        tvl_share_bps,
                        ..Params::default()
                    },
                )
                .unwrap();
            keeper.set_asset(&mut ctx, &Asset::new("coin")).unwrap();
            for info in &infos {
                keeper.set_dev_earn_info(&mut ctx, info).unwrap();
            }
        }
        (keeper, store, infos)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn pass_ages_every_record(seeds in records(), bps in 0..=10_000u64) {
            let (mut keeper, mut store, before) = setup(1_000_000, bps, &seeds);
            let mut ctx = Context::new(&mut store, 2);
            keeper.distribute_rewards(&mut ctx).unwrap();

            for info in &before {
                let after = keeper.get_dev_earn_info(&ctx, &info.contract).unwrap();
                if info.epochs == 1 {
                    prop_assert!(after.is_none());
                } else {
                    let after = after.unwrap();
                    prop_assert_eq!(after.epochs, info.epochs - 1);
                    prop_assert_eq!(after.gas_meter, 0);
                    prop_assert_eq!(&after.owner_address, &info.owner_address);
                }
            }
            prop_assert_eq!(
                ctx.event_manager().events_of_type(EVENT_TYPE_DISTRIBUTE_REWARDS).count(),
                before.len()
            );
        }

        #[test]
        fn pass_conserves_pool(
            seeds in records(),
            pool in 0..1_000_000_000_000u64,
            bps in 0..=10_000u64,
        ) {
            let (mut keeper, mut store, before) = setup(pool, bps, &seeds);
            let mut ctx = Context::new(&mut store, 2);
            let summary = keeper.distribute_rewards(&mut ctx).unwrap();

            let paid: BigUint = (1u8..)
                .take(before.len())
                .map(|id| keeper.bank().balance(&AccAddress::from(owner(id)), DENOM))
                .sum();
            let left = keeper.bank().balance(&keeper.module_address(), DENOM);
            prop_assert_eq!(&paid + &left, BigUint::from(pool));
            prop_assert_eq!(paid, summary.total_transferred());
            prop_assert_eq!(summary.failed().count(), 0);
        }

        #[test]
        fn idle_pass_transfers_nothing(
            epochs in prop::collection::vec(1..6u32, 1..16),
            pool in any::<u64>(),
        ) {
            let seeds: Vec<RecordSeed> = epochs.iter().map(|epochs| (0, *epochs, 0)).collect();
            let (mut keeper, mut store, _) = setup(pool, 0, &seeds);
            let mut ctx = Context::new(&mut store, 2);
            let summary = keeper.distribute_rewards(&mut ctx).unwrap();

            prop_assert!(summary.allocations.is_empty());
            prop_assert!(keeper.bank().sent().is_empty());
            prop_assert_eq!(
                keeper.bank().balance(&keeper.module_address(), DENOM),
                BigUint::from(pool)
            );
        }
    }
}
