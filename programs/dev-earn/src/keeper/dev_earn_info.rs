//! Incentive records, keyed by contract address bytes.

use {
    super::{decode, encode, Keeper},
    crate::{
        address::EvmAddress,
        constants::DEV_EARN_INFO_PREFIX,
        context::Context,
        error::KeeperError,
        state::DevEarnInfo,
        store::{prefix_scan, prefixed_key},
    },
};

fn dev_earn_info_key(contract: &[u8]) -> Vec<u8> {
    prefixed_key(DEV_EARN_INFO_PREFIX, contract)
}

impl<O, E, B> Keeper<O, E, B> {
    pub fn set_dev_earn_info(
        &self,
        ctx: &mut Context,
        info: &DevEarnInfo,
    ) -> Result<(), KeeperError> {
        let bytes = encode(info)?;
        ctx.store_mut()
            .set(&dev_earn_info_key(info.contract.as_bytes()), &bytes);
        Ok(())
    }

    pub fn get_dev_earn_info(
        &self,
        ctx: &Context,
        contract: &EvmAddress,
    ) -> Result<Option<DevEarnInfo>, KeeperError> {
        let key = dev_earn_info_key(contract.as_bytes());
        ctx.store()
            .get(&key)
            .map(|bytes| decode(&key, &bytes))
            .transpose()
    }

    pub fn delete_dev_earn_info(&self, ctx: &mut Context, contract: &EvmAddress) {
        ctx.store_mut()
            .delete(&dev_earn_info_key(contract.as_bytes()));
    }

    /// Walks the records in store order until `stop` returns `true`.
    pub fn iterate_dev_earn_infos<F>(&self, ctx: &Context, mut stop: F) -> Result<(), KeeperError>
    where
        F: FnMut(&DevEarnInfo) -> bool,
    {
        for (contract, bytes) in prefix_scan(ctx.store(), DEV_EARN_INFO_PREFIX) {
            let info: DevEarnInfo = decode(&dev_earn_info_key(&contract), &bytes)?;
            if stop(&info) {
                break;
            }
        }
        Ok(())
    }

    pub fn get_all_dev_earn_infos(&self, ctx: &Context) -> Result<Vec<DevEarnInfo>, KeeperError> {
        let mut infos = Vec::new();
        self.iterate_dev_earn_infos(ctx, |info| {
            infos.push(info.clone());
            false
        })?;
        Ok(infos)
    }
}
