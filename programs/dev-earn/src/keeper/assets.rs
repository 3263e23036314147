//! Whitelist of denominations counted toward TVL.

use {
    super::{decode, encode, Keeper},
    crate::{
        constants::ASSETS_PREFIX,
        context::Context,
        error::KeeperError,
        state::Asset,
        store::{prefix_scan, prefixed_key},
    },
};

fn asset_key(denom: &str) -> Vec<u8> {
    prefixed_key(ASSETS_PREFIX, denom.as_bytes())
}

impl<O, E, B> Keeper<O, E, B> {
    /// Inserts or overwrites the whitelist entry for `asset.denom`.
    pub fn set_asset(&self, ctx: &mut Context, asset: &Asset) -> Result<(), KeeperError> {
        let bytes = encode(asset)?;
        ctx.store_mut().set(&asset_key(&asset.denom), &bytes);
        Ok(())
    }

    pub fn is_asset_registered(&self, ctx: &Context, denom: &str) -> bool {
        ctx.store().has(&asset_key(denom))
    }

    pub fn remove_asset(&self, ctx: &mut Context, denom: &str) {
        ctx.store_mut().delete(&asset_key(denom));
    }

    /// Every whitelisted asset in ascending byte order of its denom.
    pub fn get_all_assets(&self, ctx: &Context) -> Result<Vec<Asset>, KeeperError> {
        prefix_scan(ctx.store(), ASSETS_PREFIX)
            .map(|(denom, bytes)| decode(&prefixed_key(ASSETS_PREFIX, &denom), &bytes))
            .collect()
    }

    pub fn has_assets(&self, ctx: &Context) -> bool {
        prefix_scan(ctx.store(), ASSETS_PREFIX).next().is_some()
    }
}
