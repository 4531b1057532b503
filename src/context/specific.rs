/*!
The default context, fixed to the [minimal PCG](crate::generic::minimal_pcg)
random number generator.
*/

use rand_core::SeedableRng;

use crate::{config::Config, context::GenericContext, generic::minimal_pcg::MinimalPCG32};

/// A context fixed to the default random number generator.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// A context with the given configuration, seeded per the configuration.
    pub fn from_config(config: Config) -> Self {
        let rng = MinimalPCG32::seed_from_u64(config.random_seed);
        GenericContext::with_rng(config, rng)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
