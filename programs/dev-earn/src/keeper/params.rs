use {
    super::{decode, encode, Keeper},
    crate::{constants::PARAMS_KEY, context::Context, error::KeeperError, state::Params},
};

impl<O, E, B> Keeper<O, E, B> {
    /// Current params; defaults when governance never set any.
    pub fn get_params(&self, ctx: &Context) -> Result<Params, KeeperError> {
        match ctx.store().get(PARAMS_KEY) {
            Some(bytes) => decode(PARAMS_KEY, &bytes),
            None => Ok(Params::default()),
        }
    }

    pub fn set_params(&self, ctx: &mut Context, params: &Params) -> Result<(), KeeperError> {
        params.validate()?;
        let bytes = encode(params)?;
        ctx.store_mut().set(PARAMS_KEY, &bytes);
        Ok(())
    }
}
