//! Instruction processing for the TRv1 Dev Earn module.

use {
    crate::{
        context::Context,
        error::{DevEarnError, KeeperError},
        instruction::DevEarnInstruction,
        keeper::Keeper,
        state::{validate_denom, Asset, Params},
    },
    borsh::BorshDeserialize,
    log::info,
};

// ─────────────────────────────────────────────────────────────────────────────
// Entry point
// ─────────────────────────────────────────────────────────────────────────────

/// Decodes and applies one governance instruction signed by `signer`.
pub fn process_instruction<O, E, B>(
    keeper: &Keeper<O, E, B>,
    ctx: &mut Context,
    signer: &str,
    instruction_data: &[u8],
) -> Result<(), KeeperError> {
    let instruction = DevEarnInstruction::try_from_slice(instruction_data)
        .map_err(|_| DevEarnError::InvalidInstructionData)?;

    if signer != keeper.authority() {
        return Err(DevEarnError::UnauthorizedAuthority.into());
    }

    match instruction {
        DevEarnInstruction::RegisterAsset { denom } => process_register_asset(keeper, ctx, &denom),
        DevEarnInstruction::RemoveAsset { denom } => process_remove_asset(keeper, ctx, &denom),
        DevEarnInstruction::UpdateParams { params } => process_update_params(keeper, ctx, &params),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RegisterAsset
// ─────────────────────────────────────────────────────────────────────────────

fn process_register_asset<O, E, B>(
    keeper: &Keeper<O, E, B>,
    ctx: &mut Context,
    denom: &str,
) -> Result<(), KeeperError> {
    validate_denom(denom)?;
    if keeper.is_asset_registered(ctx, denom) {
        return Err(DevEarnError::AssetAlreadyRegistered.into());
    }
    keeper.set_asset(ctx, &Asset::new(denom))?;
    info!("dev earn: registered asset {denom}");
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// RemoveAsset
// ─────────────────────────────────────────────────────────────────────────────

fn process_remove_asset<O, E, B>(
    keeper: &Keeper<O, E, B>,
    ctx: &mut Context,
    denom: &str,
) -> Result<(), KeeperError> {
    if !keeper.is_asset_registered(ctx, denom) {
        return Err(DevEarnError::AssetNotRegistered.into());
    }

    // Removing the last asset would strand the TVL share of every pool.
    let params = keeper.get_params(ctx)?;
    if params.tvl_share_bps > 0 && keeper.get_all_assets(ctx)?.len() == 1 {
        return Err(DevEarnError::StrandedTvlShare.into());
    }

    keeper.remove_asset(ctx, denom);
    info!("dev earn: removed asset {denom}");
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// UpdateParams
// ─────────────────────────────────────────────────────────────────────────────

fn process_update_params<O, E, B>(
    keeper: &Keeper<O, E, B>,
    ctx: &mut Context,
    params: &Params,
) -> Result<(), KeeperError> {
    params.validate()?;
    if params.tvl_share_bps > 0 && !keeper.has_assets(ctx) {
        return Err(DevEarnError::StrandedTvlShare.into());
    }
    keeper.set_params(ctx, params)?;
    info!(
        "dev earn: params updated, tvl share {} bps, reward denom {}",
        params.tvl_share_bps, params.reward_denom
    );
    Ok(())
}
