//! Per-minute throughput, power and overclock ceilings for a recipe in a machine.

use crate::applicator::AppliedRecipe;
use crate::catalog::{Catalog, CatalogError, Machine, MachineKind, Recipe, RecipeKind, ResourceWell, TransferMedium};

/// Power generators scale sublinearly with overclock
pub const GENERATOR_EXPONENT: f64 = 1.0 / 1.3;

/// Maximum transfer rates per medium and the time base all rates are expressed in
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferLimits {
    pub belt_per_minute: f64,
    pub pipe_per_minute: f64,
    /// Seconds per rate window; the default 60 makes every rate per minute
    pub per_minute: f64,
}

impl Default for TransferLimits {
    fn default() -> Self {
        Self {
            belt_per_minute: 1200.0,
            pipe_per_minute: 600.0,
            per_minute: 60.0,
        }
    }
}

impl TransferLimits {
    /// Cap for a medium; `None` means unlimited
    pub fn cap(&self, medium: TransferMedium) -> Option<f64> {
        match medium {
            TransferMedium::Belt => Some(self.belt_per_minute),
            TransferMedium::Pipe => Some(self.pipe_per_minute),
            TransferMedium::None => None,
        }
    }
}

/// Recipe cycles per `per_minutes` seconds for one applied recipe instance
pub fn production_rate(applied: &AppliedRecipe<'_>, per_minutes: f64) -> f64 {
    per_minutes * applied.efficiency_multiplier * applied.producer().efficiency_multiplier() * applied.overclock
        / applied.recipe.duration
}

/// Net power in MW: positive when produced, negative when consumed
pub fn net_energy_rate(recipe: &Recipe, machine: &Machine, overclock: f64, power_production_multiplier: f64) -> f64 {
    let consumption = |base: f64| -base * overclock.powf(machine.power_consumption_exponent);
    match &machine.kind {
        MachineKind::PowerGenerator { power_production } => power_production * overclock.powf(GENERATOR_EXPONENT),
        MachineKind::VariablePowerGenerator {
            power_production_factor,
        } => {
            power_production_factor * power_production_multiplier * overclock.powf(GENERATOR_EXPONENT)
                / recipe.duration
        }
        MachineKind::VariablePowerManufacturing { .. } => match &recipe.kind {
            RecipeKind::Manufacturing {
                variable_power: Some(variable),
            } if variable.factor != 0.0 => consumption(variable.factor),
            _ => consumption(machine.power_consumption),
        },
        MachineKind::Manufacturing { .. }
        | MachineKind::NodeExtractor { .. }
        | MachineKind::FrackingActivator { .. }
        | MachineKind::FrackingExtractor { .. }
        | MachineKind::ItemSink => consumption(machine.power_consumption),
    }
}

/// Binding overclock for one product given its rate at 100% potential
fn binding_overclock(cap: Option<f64>, rate_at_full: f64, ceiling: f64) -> f64 {
    match cap {
        Some(cap) if rate_at_full > 0.0 => (cap / rate_at_full).min(ceiling),
        _ => ceiling,
    }
}

/// Highest overclock at which some product of the recipe still fits its transfer
/// medium, capped by the machine's achievable potential. Per-item limits for the
/// remaining products are left to the LP item balances.
pub fn max_effective_overclock(
    catalog: &Catalog,
    recipe: &Recipe,
    machine: &Machine,
    production_multiplier: f64,
    limits: &TransferLimits,
) -> Result<f64, CatalogError> {
    if !machine.can_change_potential() {
        return Ok(1.0);
    }
    let ceiling = machine.potential.ceiling();
    let mut best: Option<f64> = None;
    for (item_id, amount) in &recipe.products {
        let item = catalog.item(item_id)?;
        let rate_at_full =
            limits.per_minute * amount * machine.efficiency_multiplier() * production_multiplier / recipe.duration;
        let overclock = binding_overclock(limits.cap(item.transfer), rate_at_full, ceiling);
        best = Some(best.map_or(overclock, |b| b.max(overclock)));
    }
    Ok(best.unwrap_or(ceiling))
}

/// Activator overclock for a fracking well: the largest per-product value over
/// every occupied satellite purity.
pub fn max_effective_well_overclock(
    catalog: &Catalog,
    recipe: &Recipe,
    activator: &Machine,
    extractor: &Machine,
    well: &ResourceWell,
    limits: &TransferLimits,
) -> Result<f64, CatalogError> {
    if !activator.can_change_potential() {
        return Ok(1.0);
    }
    let ceiling = activator.potential.ceiling();
    let mut best: Option<f64> = None;
    for (purity_id, count) in &well.satellites {
        if *count == 0 {
            continue;
        }
        let purity = catalog.purity(purity_id)?;
        for (item_id, amount) in &recipe.products {
            let item = catalog.item(item_id)?;
            let rate_at_full = limits.per_minute * amount * extractor.efficiency_multiplier() * purity.efficiency_multiplier
                / recipe.duration;
            let overclock = binding_overclock(limits.cap(item.transfer), rate_at_full, ceiling);
            best = Some(best.map_or(overclock, |b| b.max(overclock)));
        }
    }
    Ok(best.unwrap_or(ceiling))
}
