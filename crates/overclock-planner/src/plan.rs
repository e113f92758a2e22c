//! End-to-end pipeline: catalog + options → LP model → solved plan.

use std::collections::BTreeMap;

use overclock_lp::{LpProblem, Solution, SolveError, Solver};
use thiserror::Error;
use tracing::info;

use crate::applicator::{AppliedRecipes, Applicator, ApplyError, POWER_VARIABLE};
use crate::builder::{BuildError, Demand, ModelBuilder};
use crate::catalog::Catalog;
use crate::rates::TransferLimits;

/// Columns below this are treated as unused
const ACTIVE_EPSILON: f64 = 1e-6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error(transparent)]
    Apply(#[from] ApplyError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Everything a caller can tune for one planning run
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanOptions {
    /// Items whose net output is maximized
    pub targets: Vec<String>,
    /// Minimum MW that must stay unconsumed
    pub excess_power: f64,
    /// Minimum net output per item
    pub excess_items: BTreeMap<String, f64>,
    /// Manual overclock per manufacturing recipe id
    pub overclock_overrides: BTreeMap<String, f64>,
    pub limits: TransferLimits,
}

impl PlanOptions {
    pub fn maximize(targets: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn demand(&self) -> Demand {
        Demand {
            targets: self.targets.clone(),
            excess_power: self.excess_power,
            excess_items: self.excess_items.clone(),
        }
    }
}

/// Run the applicator over the whole catalog
pub fn apply_recipes<'c>(catalog: &'c Catalog, options: &PlanOptions) -> Result<AppliedRecipes<'c>, PlanError> {
    let applied = Applicator::new(catalog)
        .with_limits(options.limits)
        .with_overrides(options.overclock_overrides.clone())
        .apply_all()?;
    Ok(applied)
}

/// Build the LP model for the given options
pub fn build_model(catalog: &Catalog, options: &PlanOptions) -> Result<LpProblem, PlanError> {
    let applied = apply_recipes(catalog, options)?;
    let lp = ModelBuilder::new(catalog, &applied)
        .with_per_minute(options.limits.per_minute)
        .build(&options.demand())?;
    Ok(lp)
}

/// Build the LP model and serialize it to LP text
pub fn generate_lp(catalog: &Catalog, options: &PlanOptions) -> Result<String, PlanError> {
    Ok(build_model(catalog, options)?.to_lp_string())
}

/// Build, hand the model to a solver and interpret its answer
pub fn solve(catalog: &Catalog, options: &PlanOptions, solver: &impl Solver) -> Result<Plan, PlanError> {
    let applied = apply_recipes(catalog, options)?;
    let lp = ModelBuilder::new(catalog, &applied)
        .with_per_minute(options.limits.per_minute)
        .build(&options.demand())?;
    let solution = solver.solve(&lp)?;
    let plan = Plan::from_solution(&lp, &applied, solution)?;
    info!(
        entries = plan.entries.len(),
        objective = plan.objective,
        power_surplus = plan.power_surplus,
        "solved plan"
    );
    Ok(plan)
}

/// One running recipe in a solved plan
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub id: String,
    pub recipe: String,
    pub machine: String,
    pub extractor: Option<String>,
    pub overclock: f64,
    /// Number of machine instances (fractional means partial utilization)
    pub count: f64,
    /// MW for all instances together
    pub power: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub entries: Vec<PlanEntry>,
    /// Net per-minute output of the targets
    pub objective: f64,
    /// MW left over above the excess-power floor
    pub power_surplus: f64,
}

impl Plan {
    /// Interpret a solver answer. Anything but an optimal status is a failure.
    pub fn from_solution(lp: &LpProblem, applied: &AppliedRecipes<'_>, solution: Solution) -> Result<Self, SolveError> {
        let solution = solution.into_optimal()?;
        let mut entries = Vec::new();
        for (id, recipe) in applied {
            let count = solution.value(id).unwrap_or(0.0);
            if count <= ACTIVE_EPSILON {
                continue;
            }
            entries.push(PlanEntry {
                id: id.clone(),
                recipe: recipe.recipe.name.clone(),
                machine: recipe.machine.name.clone(),
                extractor: recipe.extractor.map(|e| e.name.clone()),
                overclock: recipe.overclock,
                count,
                power: recipe.net_power * count,
            });
        }
        Ok(Self {
            entries,
            objective: lp.objective.expr.evaluate(|v| solution.value(v)),
            power_surplus: solution.value(POWER_VARIABLE).unwrap_or(0.0),
        })
    }
}
