//! Genesis import and export.

use {
    crate::{
        address::EvmAddress,
        context::Context,
        error::{DevEarnError, KeeperError},
        keeper::Keeper,
        state::{validate_denom, Asset, DevEarnInfo, Params},
    },
    serde::{Deserialize, Serialize},
    std::collections::BTreeSet,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
    pub assets: Vec<Asset>,
    pub dev_earn_infos: Vec<DevEarnInfo>,
}

pub fn default_genesis() -> GenesisState {
    GenesisState::default()
}

impl GenesisState {
    pub fn new(params: Params, assets: Vec<Asset>, dev_earn_infos: Vec<DevEarnInfo>) -> Self {
        Self {
            params,
            assets,
            dev_earn_infos,
        }
    }

    pub fn validate(&self) -> Result<(), DevEarnError> {
        self.params.validate()?;

        let mut denoms = BTreeSet::new();
        for asset in &self.assets {
            validate_denom(&asset.denom)?;
            if !denoms.insert(asset.denom.as_str()) {
                return Err(DevEarnError::AssetAlreadyRegistered);
            }
        }
        if self.params.tvl_share_bps > 0 && self.assets.is_empty() {
            return Err(DevEarnError::StrandedTvlShare);
        }

        let mut contracts = BTreeSet::new();
        for info in &self.dev_earn_infos {
            if !contracts.insert(info.contract) {
                return Err(DevEarnError::DuplicateIncentive);
            }
            if !info.is_active() {
                return Err(DevEarnError::ZeroEpochIncentive);
            }
            EvmAddress::from_hex(&info.owner_address)?;
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, DevEarnError> {
        serde_json::from_str(json).map_err(|_| DevEarnError::DeserializationError)
    }

    pub fn to_json(&self) -> Result<String, DevEarnError> {
        serde_json::to_string_pretty(self).map_err(|_| DevEarnError::SerializationError)
    }
}

impl<O, E, B> Keeper<O, E, B> {
    pub fn init_genesis(&self, ctx: &mut Context, genesis: &GenesisState) -> Result<(), KeeperError> {
        genesis.validate()?;
        self.set_params(ctx, &genesis.params)?;
        for asset in &genesis.assets {
            self.set_asset(ctx, asset)?;
        }
        for info in &genesis.dev_earn_infos {
            self.set_dev_earn_info(ctx, info)?;
        }
        Ok(())
    }

    /// Current state, records in store order.
    pub fn export_genesis(&self, ctx: &Context) -> Result<GenesisState, KeeperError> {
        Ok(GenesisState {
            params: self.get_params(ctx)?,
            assets: self.get_all_assets(ctx)?,
            dev_earn_infos: self.get_all_dev_earn_infos(ctx)?,
        })
    }
}
