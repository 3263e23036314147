//! Epoch reward distribution.
//!
//! [`Keeper::distribute_rewards`] ages every incentive record by one epoch
//! and hands the gas snapshots to [`Keeper::send_reward`], which splits the
//! module account balance between the participants.

use {
    super::Keeper,
    crate::{
        address::{AccAddress, EvmAddress},
        calculator,
        constants::{
            ATTRIBUTE_KEY_AMOUNT, ATTRIBUTE_KEY_CONTRACT, ATTRIBUTE_KEY_EPOCHS,
            ATTRIBUTE_KEY_RECIPIENT, EVENT_TYPE_DISTRIBUTE_REWARDS, EVENT_TYPE_REWARD_TRANSFER,
            MODULE_NAME,
        },
        context::Context,
        decimal::Dec,
        error::KeeperError,
        events::Event,
        interfaces::{BankKeeper, Coin, Erc20Keeper, OracleKeeper},
    },
    log::{debug, info, warn},
    num_bigint::BigUint,
};

/// What a failed TVL lookup does to a reward pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TvlErrorPolicy {
    /// Return the error and transfer nothing.
    Abort,
    /// Log the error and drop the TVL term of the affected reward.
    #[default]
    ZeroTerm,
}

/// One contract taking part in a reward pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardParticipant {
    pub contract: EvmAddress,
    /// Hex address the reward is paid to.
    pub receiver: String,
    pub gas_meter: u64,
}

/// Module account balance read once at the start of a pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RewardPool {
    pub denom: String,
    pub amount: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocationOutcome {
    Transferred,
    /// Nothing was owed: the reward was non-positive or below one unit.
    Skipped,
    /// The transfer was attempted and rejected; funds stay in the pool.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardAllocation {
    pub contract: EvmAddress,
    pub recipient: String,
    pub gas_ratio: Dec,
    pub tvl_ratio: Dec,
    /// Exact reward before truncation.
    pub reward: Dec,
    /// Whole units paid, zero unless transferred.
    pub amount: BigUint,
    pub outcome: AllocationOutcome,
}

/// Result of one reward pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DistributionSummary {
    pub pool: RewardPool,
    pub total_gas: Dec,
    pub tvl_portion: Dec,
    pub gas_portion: Dec,
    pub allocations: Vec<RewardAllocation>,
}

impl DistributionSummary {
    pub fn allocation(&self, contract: &EvmAddress) -> Option<&RewardAllocation> {
        self.allocations
            .iter()
            .find(|allocation| &allocation.contract == contract)
    }

    /// Units that actually left the module account.
    pub fn total_transferred(&self) -> BigUint {
        self.allocations.iter().map(|allocation| &allocation.amount).sum()
    }

    pub fn failed(&self) -> impl Iterator<Item = &RewardAllocation> {
        self.allocations
            .iter()
            .filter(|allocation| matches!(allocation.outcome, AllocationOutcome::Failed(_)))
    }
}

struct PlannedReward<'a> {
    participant: &'a RewardParticipant,
    gas_ratio: Dec,
    tvl_ratio: Dec,
    reward: Dec,
}

impl<O: OracleKeeper, E: Erc20Keeper, B: BankKeeper> Keeper<O, E, B> {
    /// Module account balance in the reward denomination.
    pub fn reward_pool(&self, denom: &str) -> RewardPool {
        let coin = self.bank.get_balance(&self.module_address(), denom);
        RewardPool {
            denom: denom.to_string(),
            amount: coin.amount,
        }
    }

    /// Pays each participant its share of the reward pool.
    ///
    /// Every reward is computed against the same pool snapshot and the same
    /// total TVL before any transfer runs. Transfers are best-effort: a
    /// rejected payout is recorded and the remaining participants are still
    /// paid. With [`TvlErrorPolicy::Abort`] a failed TVL lookup is returned
    /// before anything is paid.
    pub fn send_reward(
        &mut self,
        ctx: &mut Context,
        participants: &[RewardParticipant],
        policy: TvlErrorPolicy,
    ) -> Result<DistributionSummary, KeeperError> {
        let total_gas = calculator::total_gas(participants.iter().map(|p| p.gas_meter));
        if total_gas.is_zero() {
            debug!("dev earn: no gas spent on incentivized contracts, nothing to distribute");
            return Ok(DistributionSummary::default());
        }

        let params = self.get_params(ctx)?;
        let pool = self.reward_pool(&params.reward_denom);
        let (tvl_portion, gas_portion) =
            calculator::split_reward_pool(&pool.amount, params.tvl_share_bps);

        if params.tvl_share_bps > 0 && !self.has_assets(ctx) {
            warn!(
                "dev earn: {} bps of the pool is reserved for TVL but the whitelist is empty; {} {} stays in the module account",
                params.tvl_share_bps, tvl_portion, pool.denom
            );
        }

        let total_tvl = match self.total_tvl(ctx) {
            Ok(total_tvl) => total_tvl,
            Err(err) if policy == TvlErrorPolicy::ZeroTerm => {
                debug!("dev earn: total tvl unavailable, tvl rewards are zero this pass: {err}");
                Dec::zero()
            }
            Err(err) => return Err(err),
        };

        let mut planned = Vec::with_capacity(participants.len());
        for participant in participants {
            let gas_ratio = calculator::gas_ratio(participant.gas_meter, &total_gas);
            let tvl_ratio = match self.tvl_ratio(ctx, &participant.contract, &total_tvl) {
                Ok(tvl_ratio) => tvl_ratio,
                Err(err) if policy == TvlErrorPolicy::ZeroTerm => {
                    debug!(
                        "dev earn: tvl reward unavailable for {}: {err}",
                        participant.contract
                    );
                    Dec::zero()
                }
                Err(err) => return Err(err),
            };
            let reward =
                calculator::compute_reward(&gas_ratio, &gas_portion, &tvl_ratio, &tvl_portion);
            planned.push(PlannedReward {
                participant,
                gas_ratio,
                tvl_ratio,
                reward,
            });
        }

        let mut allocations = Vec::with_capacity(planned.len());
        for plan in planned {
            let (amount, outcome) = match calculator::payable_amount(&plan.reward) {
                Some(amount) => {
                    let outcome = self.transfer_reward(ctx, &pool.denom, plan.participant, &amount);
                    let paid = if outcome == AllocationOutcome::Transferred {
                        amount
                    } else {
                        BigUint::from(0u8)
                    };
                    (paid, outcome)
                }
                None => (BigUint::from(0u8), AllocationOutcome::Skipped),
            };
            allocations.push(RewardAllocation {
                contract: plan.participant.contract,
                recipient: plan.participant.receiver.clone(),
                gas_ratio: plan.gas_ratio,
                tvl_ratio: plan.tvl_ratio,
                reward: plan.reward,
                amount,
                outcome,
            });
        }

        Ok(DistributionSummary {
            pool,
            total_gas,
            tvl_portion,
            gas_portion,
            allocations,
        })
    }

    fn transfer_reward(
        &mut self,
        ctx: &mut Context,
        denom: &str,
        participant: &RewardParticipant,
        amount: &BigUint,
    ) -> AllocationOutcome {
        let receiver = match EvmAddress::from_hex(&participant.receiver) {
            Ok(receiver) => receiver,
            Err(err) => {
                debug!(
                    "dev earn: cannot pay {} for {}: {err}",
                    participant.receiver, participant.contract
                );
                return AllocationOutcome::Failed(err.to_string());
            }
        };
        let coins = [Coin::new(denom, amount.clone())];
        if let Err(err) = self.bank.send_coins_from_module_to_account(
            MODULE_NAME,
            &AccAddress::from(receiver),
            &coins,
        ) {
            debug!(
                "dev earn: failed to send {amount}{denom} to {receiver} for {}: {err}",
                participant.contract
            );
            return AllocationOutcome::Failed(err.to_string());
        }

        ctx.event_manager_mut().emit(
            Event::new(EVENT_TYPE_REWARD_TRANSFER)
                .add_attribute(ATTRIBUTE_KEY_CONTRACT, participant.contract.to_hex())
                .add_attribute(ATTRIBUTE_KEY_RECIPIENT, receiver.to_hex())
                .add_attribute(ATTRIBUTE_KEY_AMOUNT, format!("{amount}{denom}")),
        );
        AllocationOutcome::Transferred
    }

    /// Runs one epoch tick over every incentive record.
    ///
    /// Each record is snapshotted, loses one epoch, and is either reset
    /// (`gas_meter = 0`) or deleted when no epochs remain. A
    /// `distribute_rewards` event is emitted per record. Rewards are then
    /// paid once for the whole pass. Reward failures are logged and never
    /// undo the bookkeeping; only an unreadable record is returned.
    pub fn distribute_rewards(
        &mut self,
        ctx: &mut Context,
    ) -> Result<DistributionSummary, KeeperError> {
        let infos = self.get_all_dev_earn_infos(ctx)?;
        let mut participants = Vec::with_capacity(infos.len());

        for mut info in infos {
            participants.push(RewardParticipant {
                contract: info.contract,
                receiver: info.owner_address.clone(),
                gas_meter: info.gas_meter,
            });

            info.epochs = info.epochs.saturating_sub(1);
            if info.is_active() {
                info.gas_meter = 0;
                self.set_dev_earn_info(ctx, &info)?;
            } else {
                self.delete_dev_earn_info(ctx, &info.contract);
                info!("dev earn finalized: contract {}", info.contract);
            }

            ctx.event_manager_mut().emit(
                Event::new(EVENT_TYPE_DISTRIBUTE_REWARDS)
                    .add_attribute(ATTRIBUTE_KEY_CONTRACT, info.contract.to_hex())
                    .add_attribute(ATTRIBUTE_KEY_EPOCHS, info.epochs.to_string()),
            );
        }

        match self.send_reward(ctx, &participants, TvlErrorPolicy::ZeroTerm) {
            Ok(summary) => {
                if !summary.allocations.is_empty() {
                    info!(
                        "dev earn: height {} paid {}{} to {} of {} contracts ({} failed)",
                        ctx.block_height(),
                        summary.total_transferred(),
                        summary.pool.denom,
                        summary
                            .allocations
                            .iter()
                            .filter(|a| a.outcome == AllocationOutcome::Transferred)
                            .count(),
                        summary.allocations.len(),
                        summary.failed().count(),
                    );
                }
                Ok(summary)
            }
            Err(err) => {
                warn!(
                    "dev earn: reward distribution failed at height {}: {err}",
                    ctx.block_height()
                );
                Ok(DistributionSummary::default())
            }
        }
    }
}
