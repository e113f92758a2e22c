pub mod applicator;
pub mod builder;
pub mod catalog;
pub mod plan;
pub mod rates;

#[cfg(test)]
mod test_fixtures;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use applicator::{AppliedRecipe, AppliedRecipes, Applicator, ApplyError, Binding, POWER_VARIABLE};
pub use builder::{BuildError, Demand, ModelBuilder, OBJECTIVE_NAME};
pub use catalog::*;
pub use plan::{Plan, PlanEntry, PlanError, PlanOptions, apply_recipes, build_model, generate_lp, solve};
pub use rates::{TransferLimits, max_effective_overclock, max_effective_well_overclock, net_energy_rate, production_rate};
