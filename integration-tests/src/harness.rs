//! TRv1 Dev Earn Test Harness
//!
//! Drives the dev earn keeper through whole epochs against deterministic
//! collaborators:
//!
//! - governance instructions signed by the module authority
//! - gas accrual on incentivized contracts between ticks
//! - epoch ticks running the full distribution pass
//!
//! The harness does NOT run a chain; it owns an in-memory store and advances
//! the block height itself.

use trv1_dev_earn_program::{
    address::{AccAddress, EvmAddress},
    context::Context,
    decimal::Dec,
    events::Event,
    genesis::GenesisState,
    instruction::DevEarnInstruction,
    processor::process_instruction,
    state::{DevEarnInfo, Params},
    store::MemoryStore,
    test_utils::{contract, owner, test_keeper, token, TestKeeper, TEST_AUTHORITY},
    DistributionSummary, KeeperError,
};

// ─── Constants ───────────────────────────────────────────────────────────────

/// Blocks between two epoch ticks.
pub const BLOCKS_PER_EPOCH: u64 = 17_280;

/// Denomination of the reward pool under default params.
pub const REWARD_DENOM: &str = "aside";

// ─── Harness ─────────────────────────────────────────────────────────────────

pub struct DevEarnTestHarness {
    pub keeper: TestKeeper,
    pub store: MemoryStore,
    pub block_height: u64,
    pub epoch: u64,
    /// Events of every transition run so far.
    pub events: Vec<Event>,
}

impl Default for DevEarnTestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl DevEarnTestHarness {
    pub fn new() -> Self {
        Self {
            keeper: test_keeper(),
            store: MemoryStore::new(),
            block_height: 1,
            epoch: 0,
            events: Vec::new(),
        }
    }

    /// Harness initialised from a genesis document.
    pub fn from_genesis(genesis: &GenesisState) -> Result<Self, KeeperError> {
        let mut harness = Self::new();
        harness.with_context(|keeper, ctx| keeper.init_genesis(ctx, genesis))?;
        Ok(harness)
    }

    /// Runs `f` in a fresh context at the current height and keeps its events.
    pub fn with_context<T>(
        &mut self,
        f: impl FnOnce(&mut TestKeeper, &mut Context) -> T,
    ) -> T {
        let mut ctx = Context::new(&mut self.store, self.block_height);
        let result = f(&mut self.keeper, &mut ctx);
        self.events.extend(ctx.into_events());
        result
    }

    // ── Collaborators ────────────────────────────────────────────────────

    pub fn fund_pool(&mut self, amount: u64) {
        self.keeper.bank_mut().fund_module(REWARD_DENOM, amount);
    }

    /// Prices `denom` at `rate` and backs it with token `token_id`.
    pub fn list_token(&mut self, denom: &str, token_id: u8, rate: &str, supply: u64) {
        let rate: Dec = rate.parse().unwrap();
        self.keeper.oracle_mut().set_rate(denom, rate);
        self.keeper.erc20_mut().add_token(denom, token(token_id), supply);
    }

    /// Gives contract `contract_id` a balance of token `token_id`.
    pub fn lock(&mut self, token_id: u8, contract_id: u8, amount: u64) {
        self.keeper
            .erc20_mut()
            .set_balance(token(token_id), contract(contract_id), amount);
    }

    pub fn pool_balance(&self) -> u64 {
        self.balance(&self.keeper.module_address())
    }

    /// Rewards received so far by the owner of contract `id`.
    pub fn owner_balance(&self, id: u8) -> u64 {
        self.balance(&AccAddress::from(owner(id)))
    }

    fn balance(&self, account: &AccAddress) -> u64 {
        let balance = self.keeper.bank().balance(account, REWARD_DENOM);
        u64::try_from(&balance).unwrap()
    }

    // ── Governance ───────────────────────────────────────────────────────

    pub fn submit(
        &mut self,
        signer: &str,
        instruction: &DevEarnInstruction,
    ) -> Result<(), KeeperError> {
        let data = instruction.pack();
        self.with_context(|keeper, ctx| process_instruction(keeper, ctx, signer, &data))
    }

    pub fn register_asset(&mut self, denom: &str) -> Result<(), KeeperError> {
        self.submit(
            TEST_AUTHORITY,
            &DevEarnInstruction::RegisterAsset {
                denom: denom.to_string(),
            },
        )
    }

    pub fn remove_asset(&mut self, denom: &str) -> Result<(), KeeperError> {
        self.submit(
            TEST_AUTHORITY,
            &DevEarnInstruction::RemoveAsset {
                denom: denom.to_string(),
            },
        )
    }

    pub fn set_tvl_share(&mut self, tvl_share_bps: u64) -> Result<(), KeeperError> {
        self.submit(
            TEST_AUTHORITY,
            &DevEarnInstruction::UpdateParams {
                params: Params {
                    tvl_share_bps,
                    ..Params::default()
                },
            },
        )
    }

    // ── Incentives ───────────────────────────────────────────────────────

    /// Incentivizes contract `id` for `epochs` ticks, paying the owner `id`.
    pub fn incentivize(&mut self, id: u8, epochs: u32) {
        let info = DevEarnInfo::new(contract(id), owner(id).to_hex(), epochs);
        self.with_context(|keeper, ctx| keeper.set_dev_earn_info(ctx, &info))
            .unwrap();
    }

    /// Records gas spent on contract `id` since the last tick.
    pub fn spend_gas(&mut self, id: u8, gas: u64) {
        let address = contract(id);
        self.with_context(|keeper, ctx| {
            let mut info = keeper.get_dev_earn_info(ctx, &address)?.unwrap();
            info.gas_meter += gas;
            keeper.set_dev_earn_info(ctx, &info)
        })
        .unwrap();
    }

    pub fn info(&mut self, id: u8) -> Option<DevEarnInfo> {
        let address: EvmAddress = contract(id);
        self.with_context(|keeper, ctx| keeper.get_dev_earn_info(ctx, &address))
            .unwrap()
    }

    // ── Time ─────────────────────────────────────────────────────────────

    /// Advances to the next epoch boundary and runs the distribution pass.
    pub fn end_epoch(&mut self) -> DistributionSummary {
        self.block_height += BLOCKS_PER_EPOCH;
        self.epoch += 1;
        self.with_context(|keeper, ctx| keeper.distribute_rewards(ctx))
            .unwrap()
    }

    pub fn events_of_type<'a>(&'a self, ty: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |event| event.ty == ty)
    }
}
