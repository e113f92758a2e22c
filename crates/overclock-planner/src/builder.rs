//! Encodes applied recipes and the catalog's conservation laws as an LP.
//!
//! One decision variable per applied recipe: how many instances of that
//! recipe/machine/overclock combination are running. Fractional counts are
//! allowed except where a deposit, geyser or well pins them to whole numbers.

use std::collections::BTreeMap;

use overclock_lp::{ConstraintOp, LinearExpr, LpProblem, Sense};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::applicator::{AppliedRecipe, AppliedRecipes, POWER_VARIABLE, sanitize_name};
use crate::catalog::{Catalog, CatalogError, RecipeKind};
use crate::rates::production_rate;

/// Label of the objective line
pub const OBJECTIVE_NAME: &str = "desired";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("No target items to maximize")]
    NoTargets,
    #[error("No recipe produces or consumes {item}, excess floor {floor} cannot be met")]
    UnreachableFloor { item: String, floor: f64 },
}

/// Demand floors and targets for one model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Demand {
    pub targets: Vec<String>,
    /// Minimum MW left unconsumed
    pub excess_power: f64,
    /// Minimum net output per item
    pub excess_items: BTreeMap<String, f64>,
}

pub struct ModelBuilder<'a, 'c> {
    catalog: &'c Catalog,
    applied: &'a AppliedRecipes<'c>,
    per_minute: f64,
}

impl<'a, 'c> ModelBuilder<'a, 'c> {
    pub fn new(catalog: &'c Catalog, applied: &'a AppliedRecipes<'c>) -> Self {
        Self {
            catalog,
            applied,
            per_minute: 60.0,
        }
    }

    pub fn with_per_minute(mut self, per_minute: f64) -> Self {
        self.per_minute = per_minute;
        self
    }

    /// Build the full model: objective, item balances, extraction counts, power, bounds
    pub fn build(&self, demand: &Demand) -> Result<LpProblem, BuildError> {
        self.check_references(demand)?;

        let mut lp = LpProblem::new(OBJECTIVE_NAME, Sense::Maximize);
        lp.set_objective(self.objective(&demand.targets));

        self.add_item_balances(&mut lp, &demand.excess_items)?;
        self.add_node_counts(&mut lp);
        self.add_geyser_counts(&mut lp);
        self.add_well_constraints(&mut lp);
        self.add_power(&mut lp, demand.excess_power);

        for id in self.applied.keys() {
            lp.add_lower_bound(id.as_str(), 0.0);
        }
        lp.add_lower_bound(POWER_VARIABLE, 0.0);

        info!(
            variables = self.applied.len() + 1,
            constraints = lp.num_constraints(),
            integers = lp.integers.len(),
            "built LP model"
        );
        Ok(lp)
    }

    /// Every entity the model refers to must exist in the catalog
    fn check_references(&self, demand: &Demand) -> Result<(), BuildError> {
        if demand.targets.is_empty() {
            return Err(BuildError::NoTargets);
        }
        for target in &demand.targets {
            self.catalog.item(target)?;
        }
        for item in demand.excess_items.keys() {
            self.catalog.item(item)?;
        }
        for applied in self.applied.values() {
            self.catalog.recipe(&applied.recipe.id)?;
            for item in applied.recipe.items() {
                self.catalog.item(item)?;
            }
        }
        Ok(())
    }

    fn rate(&self, applied: &AppliedRecipe<'_>) -> f64 {
        production_rate(applied, self.per_minute)
    }

    /// Net per-minute output of the targets, summed per applied recipe
    fn objective(&self, targets: &[String]) -> LinearExpr {
        let mut expr = LinearExpr::new();
        for (id, applied) in self.applied {
            if !targets.iter().any(|t| applied.recipe.touches(t)) {
                continue;
            }
            let rate = self.rate(applied);
            let coefficient: f64 = targets.iter().map(|t| applied.recipe.net_amount(t) * rate).sum();
            expr.add(id.as_str(), coefficient);
        }
        expr
    }

    fn add_item_balances(&self, lp: &mut LpProblem, excess: &BTreeMap<String, f64>) -> Result<(), BuildError> {
        for item in self.catalog.items.values() {
            let mut expr = LinearExpr::new();
            for (id, applied) in self.applied {
                if applied.recipe.touches(&item.id) {
                    expr.add(id.as_str(), applied.recipe.net_amount(&item.id) * self.rate(applied));
                }
            }
            let floor = excess.get(&item.id).copied().unwrap_or(0.0);
            if expr.is_empty() {
                if floor > 0.0 {
                    return Err(BuildError::UnreachableFloor {
                        item: item.id.clone(),
                        floor,
                    });
                }
                continue;
            }
            lp.add_constraint(format!("item_{}", sanitize_name(&item.id)), expr, ConstraintOp::Ge, floor);
        }
        Ok(())
    }

    /// Equality of extraction variables against a fixed count; all of them become integers
    fn add_count(&self, lp: &mut LpProblem, name: String, ids: Vec<&str>, count: f64) {
        if ids.is_empty() {
            warn!(constraint = %name, count, "no applied recipe can use these sources");
            return;
        }
        let mut expr = LinearExpr::new();
        for id in ids {
            expr.add(id, 1.0);
            lp.mark_integer(id);
        }
        debug!(constraint = %name, terms = expr.len(), count, "count constraint");
        lp.add_constraint(name, expr, ConstraintOp::Eq, count);
    }

    fn add_node_counts(&self, lp: &mut LpProblem) {
        for (resource, counts) in &self.catalog.resource_nodes {
            for (purity, count) in counts {
                if *count == 0 {
                    continue;
                }
                let ids: Vec<&str> = self
                    .applied
                    .iter()
                    .filter(|(_, a)| {
                        matches!(a.recipe.kind, RecipeKind::NodeExtraction)
                            && !a.machine.is_unlimited_source()
                            && a.binding.purity() == Some(purity.as_str())
                            && a.recipe.products.contains_key(resource)
                    })
                    .map(|(id, _)| id.as_str())
                    .collect();
                let name = format!("node_{}_{}", sanitize_name(resource), sanitize_name(purity));
                self.add_count(lp, name, ids, *count as f64);
            }
        }
    }

    fn add_geyser_counts(&self, lp: &mut LpProblem) {
        for (purity, count) in &self.catalog.geysers {
            if *count == 0 {
                continue;
            }
            let ids: Vec<&str> = self
                .applied
                .iter()
                .filter(|(_, a)| {
                    matches!(a.recipe.kind, RecipeKind::GeothermalPower) && a.binding.purity() == Some(purity.as_str())
                })
                .map(|(id, _)| id.as_str())
                .collect();
            self.add_count(lp, format!("geyser_{}", sanitize_name(purity)), ids, *count as f64);
        }
    }

    /// Every known well is extracted by exactly one of its variants
    fn add_well_constraints(&self, lp: &mut LpProblem) {
        for well in self.catalog.resource_wells.values() {
            let ids: Vec<&str> = self
                .applied
                .iter()
                .filter(|(_, a)| a.binding.well() == Some(well.id.as_str()))
                .map(|(id, _)| id.as_str())
                .collect();
            self.add_count(lp, format!("well_{}", sanitize_name(&well.id)), ids, 1.0);
        }
    }

    /// `Σ netPower·x − power = excess` with `power >= 0`
    fn add_power(&self, lp: &mut LpProblem, excess_power: f64) {
        let mut expr = LinearExpr::new();
        for (id, applied) in self.applied {
            expr.add(id.as_str(), applied.net_power);
        }
        expr.add(POWER_VARIABLE, -1.0);
        lp.add_constraint(POWER_VARIABLE, expr, ConstraintOp::Eq, excess_power);
    }
}
