//! Expands base recipes into applied recipes: one physically valid variant per
//! machine and per purity or resource well, with the dominated variants removed.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{
    Catalog, CatalogError, Machine, MachineKind, Purity, Recipe, RecipeKind, ResourceWell, WATER_PURITY,
};
use crate::rates::{
    TransferLimits, max_effective_overclock, max_effective_well_overclock, net_energy_rate, production_rate,
};

/// Name of the synthetic power column in the LP
pub const POWER_VARIABLE: &str = "power";

const OVERCLOCK_TOLERANCE: f64 = 1e-9;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplyError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Duplicate applied recipe id: {0}")]
    DuplicateId(String),
    #[error("Applied recipe id '{0}' is reserved")]
    ReservedId(String),
    #[error("Machine {machine} cannot run recipe {recipe}")]
    MachineNotAllowed { recipe: String, machine: String },
    #[error("Machine {machine} is the wrong kind for recipe {recipe}")]
    MachineKindMismatch { recipe: String, machine: String },
    #[error("Overclock {overclock} for recipe {recipe} in {machine} is outside {min}..={max}")]
    OverclockOutOfRange {
        recipe: String,
        machine: String,
        overclock: f64,
        min: f64,
        max: f64,
    },
    #[error("Overclock override for {0} is only allowed on manufacturing recipes")]
    OverrideNotAllowed(String),
    #[error("Well extraction recipe {0} must have exactly one product")]
    WellRecipeOutput(String),
    #[error("Fracking activator {0} has no extractors")]
    NoExtractors(String),
}

/// What an applied recipe is tied to beyond its machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binding<'c> {
    Unbound,
    Purity(&'c Purity),
    Well(&'c ResourceWell),
}

impl Binding<'_> {
    pub fn purity(&self) -> Option<&str> {
        match self {
            Binding::Purity(purity) => Some(&purity.id),
            _ => None,
        }
    }

    pub fn well(&self) -> Option<&str> {
        match self {
            Binding::Well(well) => Some(&well.id),
            _ => None,
        }
    }
}

/// A recipe bound to one machine (and purity or well) at a resolved overclock
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedRecipe<'c> {
    pub id: String,
    pub recipe: &'c Recipe,
    /// The machine that is built and powered; the activator for wells
    pub machine: &'c Machine,
    /// Satellite extractor for well recipes
    pub extractor: Option<&'c Machine>,
    pub binding: Binding<'c>,
    pub overclock: f64,
    /// Purity or well-size multiplier, 1 when unbound
    pub efficiency_multiplier: f64,
    /// MW, positive when produced
    pub net_power: f64,
}

impl<'c> AppliedRecipe<'c> {
    /// The machine whose base rate sets throughput
    pub fn producer(&self) -> &'c Machine {
        self.extractor.unwrap_or(self.machine)
    }

    /// Variants sharing a slot are interchangeable; only the fastest survives
    fn slot(&self) -> (String, Option<String>) {
        let bound = match self.binding {
            Binding::Unbound => String::new(),
            Binding::Purity(purity) => format!("purity:{}", purity.id),
            Binding::Well(well) => format!("well:{}", well.id),
        };
        (bound, self.extractor.map(|e| e.id.clone()))
    }
}

pub type AppliedRecipes<'c> = BTreeMap<String, AppliedRecipe<'c>>;

/// Turn an arbitrary id into a valid LP column name
pub fn sanitize_name(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "x_");
    }
    out
}

/// Keep the highest-throughput variant per slot. Ties keep the earlier variant.
pub fn reduce_dominated<'c>(variants: Vec<AppliedRecipe<'c>>, per_minutes: f64) -> Vec<AppliedRecipe<'c>> {
    let mut slots: Vec<((String, Option<String>), AppliedRecipe<'c>)> = Vec::new();
    for variant in variants {
        let slot = variant.slot();
        match slots.iter_mut().find(|(key, _)| *key == slot) {
            Some((_, kept)) => {
                if production_rate(&variant, per_minutes) > production_rate(kept, per_minutes) {
                    debug!(recipe = %variant.recipe.id, dropped = %kept.machine.id, kept = %variant.machine.id, "dominated variant");
                    *kept = variant;
                } else {
                    debug!(recipe = %variant.recipe.id, dropped = %variant.machine.id, kept = %kept.machine.id, "dominated variant");
                }
            }
            None => slots.push((slot, variant)),
        }
    }
    slots.into_iter().map(|(_, variant)| variant).collect()
}

/// Expands every recipe of a catalog into applied recipes
pub struct Applicator<'c> {
    catalog: &'c Catalog,
    limits: TransferLimits,
    overrides: BTreeMap<String, f64>,
}

impl<'c> Applicator<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            limits: TransferLimits::default(),
            overrides: BTreeMap::new(),
        }
    }

    pub fn with_limits(mut self, limits: TransferLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Pin manufacturing recipes to manual overclock values
    pub fn with_overrides(mut self, overrides: BTreeMap<String, f64>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn limits(&self) -> &TransferLimits {
        &self.limits
    }

    /// Apply every recipe in the catalog
    pub fn apply_all(&self) -> Result<AppliedRecipes<'c>, ApplyError> {
        self.check_overrides()?;

        let mut applied = AppliedRecipes::new();
        for recipe in self.catalog.recipes.values() {
            let variants = self.apply(recipe)?;
            for variant in variants {
                if variant.id == POWER_VARIABLE {
                    return Err(ApplyError::ReservedId(variant.id));
                }
                if applied.contains_key(&variant.id) {
                    return Err(ApplyError::DuplicateId(variant.id));
                }
                applied.insert(variant.id.clone(), variant);
            }
        }
        info!(
            recipes = self.catalog.recipes.len(),
            applied = applied.len(),
            "applied recipes"
        );
        Ok(applied)
    }

    /// Every non-dominated variant of one recipe
    pub fn apply(&self, recipe: &'c Recipe) -> Result<Vec<AppliedRecipe<'c>>, ApplyError> {
        let variants = match &recipe.kind {
            RecipeKind::Sink => self.apply_sink(recipe)?,
            RecipeKind::NodeExtraction => self.apply_node(recipe)?,
            RecipeKind::WellExtraction => self.apply_well(recipe)?,
            RecipeKind::GeothermalPower => self.apply_geothermal(recipe)?,
            RecipeKind::Manufacturing { .. } => self.apply_manufacturing(recipe)?,
        };
        let generated = variants.len();
        let kept = reduce_dominated(variants, self.limits.per_minute);
        debug!(recipe = %recipe.id, generated, kept = kept.len(), "applied recipe");
        Ok(kept)
    }

    fn check_overrides(&self) -> Result<(), ApplyError> {
        for recipe_id in self.overrides.keys() {
            let recipe = self.catalog.recipe(recipe_id)?;
            if !matches!(recipe.kind, RecipeKind::Manufacturing { .. }) {
                return Err(ApplyError::OverrideNotAllowed(recipe_id.clone()));
            }
        }
        Ok(())
    }

    fn machines(&self, recipe: &'c Recipe) -> Result<Vec<&'c Machine>, ApplyError> {
        let mut machines = Vec::with_capacity(recipe.produced_in.len());
        for id in &recipe.produced_in {
            machines.push(self.catalog.machine(id)?);
        }
        Ok(machines)
    }

    #[allow(clippy::too_many_arguments)]
    fn variant(
        &self,
        id: String,
        recipe: &'c Recipe,
        machine: &'c Machine,
        extractor: Option<&'c Machine>,
        binding: Binding<'c>,
        overclock: f64,
        efficiency_multiplier: f64,
        power_production_multiplier: f64,
    ) -> Result<AppliedRecipe<'c>, ApplyError> {
        if !recipe.produced_in.contains(&machine.id) {
            return Err(ApplyError::MachineNotAllowed {
                recipe: recipe.id.clone(),
                machine: machine.id.clone(),
            });
        }
        let (min, max) = (machine.potential.floor(), machine.potential.ceiling());
        if !(overclock >= min - OVERCLOCK_TOLERANCE && overclock <= max + OVERCLOCK_TOLERANCE) {
            return Err(ApplyError::OverclockOutOfRange {
                recipe: recipe.id.clone(),
                machine: machine.id.clone(),
                overclock,
                min,
                max,
            });
        }
        Ok(AppliedRecipe {
            id: sanitize_name(&id),
            recipe,
            machine,
            extractor,
            binding,
            overclock,
            efficiency_multiplier,
            net_power: net_energy_rate(recipe, machine, overclock, power_production_multiplier),
        })
    }

    fn mismatch(recipe: &Recipe, machine: &Machine) -> ApplyError {
        ApplyError::MachineKindMismatch {
            recipe: recipe.id.clone(),
            machine: machine.id.clone(),
        }
    }

    fn apply_sink(&self, recipe: &'c Recipe) -> Result<Vec<AppliedRecipe<'c>>, ApplyError> {
        let mut out = Vec::new();
        for machine in self.machines(recipe)? {
            if !matches!(machine.kind, MachineKind::ItemSink) {
                return Err(Self::mismatch(recipe, machine));
            }
            out.push(self.variant(recipe.id.clone(), recipe, machine, None, Binding::Unbound, 1.0, 1.0, 1.0)?);
        }
        Ok(out)
    }

    fn apply_manufacturing(&self, recipe: &'c Recipe) -> Result<Vec<AppliedRecipe<'c>>, ApplyError> {
        let overclock = self.overrides.get(&recipe.id).copied().unwrap_or(1.0);
        let mut out = Vec::new();
        for machine in self.machines(recipe)? {
            out.push(self.variant(
                recipe.id.clone(),
                recipe,
                machine,
                None,
                Binding::Unbound,
                overclock,
                1.0,
                1.0,
            )?);
        }
        Ok(out)
    }

    fn apply_node(&self, recipe: &'c Recipe) -> Result<Vec<AppliedRecipe<'c>>, ApplyError> {
        let mut out = Vec::new();
        for machine in self.machines(recipe)? {
            if !matches!(machine.kind, MachineKind::NodeExtractor { .. }) {
                return Err(Self::mismatch(recipe, machine));
            }
            if machine.is_unlimited_source() {
                let purity = self.catalog.purity(WATER_PURITY)?;
                out.push(self.variant(
                    format!("{}_{}", recipe.id, purity.id),
                    recipe,
                    machine,
                    None,
                    Binding::Purity(purity),
                    1.0,
                    purity.efficiency_multiplier,
                    1.0,
                )?);
                continue;
            }
            for purity in self.deposit_purities(recipe)? {
                let overclock =
                    max_effective_overclock(self.catalog, recipe, machine, purity.efficiency_multiplier, &self.limits)?;
                out.push(self.variant(
                    format!("{}_{}", recipe.id, purity.id),
                    recipe,
                    machine,
                    None,
                    Binding::Purity(purity),
                    overclock,
                    purity.efficiency_multiplier,
                    1.0,
                )?);
            }
        }
        Ok(out)
    }

    /// Purities with at least one deposit of any resource the recipe extracts
    fn deposit_purities(&self, recipe: &Recipe) -> Result<Vec<&'c Purity>, ApplyError> {
        let mut out: Vec<&'c Purity> = Vec::new();
        for resource in recipe.products.keys() {
            let Some(counts) = self.catalog.resource_nodes.get(resource) else {
                continue;
            };
            for (purity_id, count) in counts {
                let purity = self.catalog.purity(purity_id)?;
                if *count > 0 && !out.iter().any(|p| p.id == purity.id) {
                    out.push(purity);
                }
            }
        }
        Ok(out)
    }

    fn apply_well(&self, recipe: &'c Recipe) -> Result<Vec<AppliedRecipe<'c>>, ApplyError> {
        let mut products = recipe.products.keys();
        let (Some(resource), None) = (products.next(), products.next()) else {
            return Err(ApplyError::WellRecipeOutput(recipe.id.clone()));
        };

        let mut out = Vec::new();
        for activator in self.machines(recipe)? {
            if !matches!(activator.kind, MachineKind::FrackingActivator { .. }) {
                return Err(Self::mismatch(recipe, activator));
            }
            let extractors = self.catalog.extractors_of(activator)?;
            if extractors.is_empty() {
                return Err(ApplyError::NoExtractors(activator.id.clone()));
            }
            for well in self.catalog.wells_for(resource) {
                let size = self.catalog.well_size_multiplier(well)?;
                for extractor in &extractors {
                    let overclock = max_effective_well_overclock(
                        self.catalog,
                        recipe,
                        activator,
                        extractor,
                        well,
                        &self.limits,
                    )?;
                    let id = if extractors.len() > 1 {
                        format!("{}_{}_{}", recipe.id, well.id, extractor.name)
                    } else {
                        format!("{}_{}", recipe.id, well.id)
                    };
                    out.push(self.variant(
                        id,
                        recipe,
                        activator,
                        Some(*extractor),
                        Binding::Well(well),
                        overclock,
                        size,
                        1.0,
                    )?);
                }
            }
        }
        Ok(out)
    }

    fn apply_geothermal(&self, recipe: &'c Recipe) -> Result<Vec<AppliedRecipe<'c>>, ApplyError> {
        let mut out = Vec::new();
        for machine in self.machines(recipe)? {
            if !matches!(machine.kind, MachineKind::VariablePowerGenerator { .. }) {
                return Err(Self::mismatch(recipe, machine));
            }
            for (purity_id, count) in &self.catalog.geysers {
                if *count == 0 {
                    continue;
                }
                let purity = self.catalog.purity(purity_id)?;
                out.push(self.variant(
                    format!("{}_{}", recipe.id, purity.id),
                    recipe,
                    machine,
                    None,
                    Binding::Purity(purity),
                    1.0,
                    purity.efficiency_multiplier,
                    purity.efficiency_multiplier,
                )?);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::*;

    fn applied(catalog: &Catalog) -> AppliedRecipes<'_> {
        Applicator::new(catalog).apply_all().unwrap()
    }

    #[test]
    fn test_node_variants_one_per_deposit_purity() {
        let catalog = iron_catalog();
        let applied = applied(&catalog);

        let mut mining: Vec<&str> = applied
            .values()
            .filter(|a| a.recipe.id == "mine_iron")
            .map(|a| a.id.as_str())
            .collect();
        mining.sort();
        // no impure iron deposits in the fixture
        assert_eq!(mining, vec!["mine_iron_normal", "mine_iron_pure"]);
    }

    #[test]
    fn test_node_dominance_keeps_faster_miner() {
        let catalog = iron_catalog();
        let applied = applied(&catalog);
        let pure = &applied["mine_iron_pure"];
        assert_eq!(pure.machine.id, "miner_mk2");
        assert_eq!(pure.binding.purity(), Some("pure"));
        assert!((pure.overclock - 1200.0 / 720.0).abs() < 1e-9);
        // capped exactly at belt speed
        assert!((production_rate(pure, 60.0) - 1200.0).abs() < 1e-6);
    }

    #[test]
    fn test_node_throughput_within_transfer_cap() {
        let catalog = iron_catalog();
        let limits = TransferLimits::default();
        for applied in applied(&catalog).values() {
            if !matches!(applied.recipe.kind, RecipeKind::NodeExtraction) {
                continue;
            }
            for (item_id, amount) in &applied.recipe.products {
                let item = catalog.item(item_id).unwrap();
                let cap = limits.cap(item.transfer).unwrap_or(f64::INFINITY);
                let throughput = amount * production_rate(applied, limits.per_minute);
                assert!(throughput <= cap + 1e-6, "{} moves {} > {}", applied.id, throughput, cap);
            }
        }
    }

    #[test]
    fn test_water_pump_single_impure_variant() {
        let catalog = iron_catalog();
        let applied = applied(&catalog);
        let water: Vec<_> = applied.values().filter(|a| a.recipe.id == "pump_water").collect();
        assert_eq!(water.len(), 1);
        assert_eq!(water[0].id, "pump_water_impure");
        assert_eq!(water[0].overclock, 1.0);
        assert_eq!(water[0].binding.purity(), Some("impure"));
    }

    #[test]
    fn test_manufacturing_defaults_to_full_speed() {
        let catalog = iron_catalog();
        let applied = applied(&catalog);
        let plate = &applied["iron_plate"];
        assert_eq!(plate.overclock, 1.0);
        assert_eq!(plate.net_power, -4.0);
        assert_eq!(production_rate(plate, 60.0), 10.0);
    }

    #[test]
    fn test_manufacturing_override() {
        let catalog = iron_catalog();
        let applied = Applicator::new(&catalog)
            .with_overrides(BTreeMap::from([("iron_plate".to_string(), 2.0)]))
            .apply_all()
            .unwrap();
        let plate = &applied["iron_plate"];
        assert_eq!(plate.overclock, 2.0);
        assert_eq!(production_rate(plate, 60.0), 20.0);
        assert!((plate.net_power + 4.0 * 2f64.powf(EXPONENT)).abs() < 1e-9);
    }

    #[test]
    fn test_override_beyond_ceiling_fails() {
        let catalog = iron_catalog();
        let err = Applicator::new(&catalog)
            .with_overrides(BTreeMap::from([("iron_plate".to_string(), 3.0)]))
            .apply_all()
            .unwrap_err();
        assert!(matches!(err, ApplyError::OverclockOutOfRange { .. }));
    }

    #[test]
    fn test_override_on_extraction_recipe_fails() {
        let catalog = iron_catalog();
        let err = Applicator::new(&catalog)
            .with_overrides(BTreeMap::from([("mine_iron".to_string(), 1.5)]))
            .apply_all()
            .unwrap_err();
        assert_eq!(err, ApplyError::OverrideNotAllowed("mine_iron".to_string()));
    }

    #[test]
    fn test_override_unknown_recipe_fails() {
        let catalog = iron_catalog();
        let err = Applicator::new(&catalog)
            .with_overrides(BTreeMap::from([("ghost".to_string(), 1.5)]))
            .apply_all()
            .unwrap_err();
        assert_eq!(err, ApplyError::Catalog(CatalogError::UnknownRecipe("ghost".to_string())));
    }

    #[test]
    fn test_sink_fixed_overclock() {
        let catalog = iron_catalog();
        let applied = applied(&catalog);
        let sink = &applied["sink_iron_plate"];
        assert_eq!(sink.overclock, 1.0);
        assert_eq!(sink.net_power, -30.0);
    }

    #[test]
    fn test_one_variant_per_well() {
        let catalog = oil_catalog();
        let applied = applied(&catalog);
        let mut wells: Vec<&str> = applied
            .values()
            .filter(|a| a.binding.well().is_some())
            .map(|a| a.id.as_str())
            .collect();
        wells.sort();
        assert_eq!(wells, vec!["frack_oil_well_a", "frack_oil_well_b"]);

        let well_a = &applied["frack_oil_well_a"];
        assert_eq!(well_a.machine.id, "pressurizer");
        assert_eq!(well_a.producer().id, "extractor");
        assert_eq!(well_a.efficiency_multiplier, 3.0);
        // impure satellites set the activator clock
        assert!((well_a.overclock - 2.5).abs() < 1e-9);
        assert!((production_rate(well_a, 60.0) - 1800.0).abs() < 1e-6);
    }

    #[test]
    fn test_well_ids_name_extractor_when_ambiguous() {
        let mut catalog = oil_catalog();
        let mut mk2 = machine(
            "extractor_mk2",
            MachineKind::FrackingExtractor { extraction_rate: 8.0 },
            0.0,
            crate::catalog::Potential::fixed(),
        );
        mk2.name = "Extractor Mk.2".to_string();
        catalog.add_machine(mk2);
        catalog.machines.get_mut("pressurizer").unwrap().kind = MachineKind::FrackingActivator {
            extractors: vec!["extractor".to_string(), "extractor_mk2".to_string()],
        };
        let applied = applied(&catalog);
        let ids: Vec<&str> = applied
            .values()
            .filter(|a| a.binding.well() == Some("well_a"))
            .map(|a| a.id.as_str())
            .collect();
        // disambiguated by extractor name, sanitized
        assert_eq!(ids, vec!["frack_oil_well_a_Extractor_Mk_2", "frack_oil_well_a_extractor"]);
    }

    #[test]
    fn test_geothermal_one_per_geyser_purity() {
        let catalog = oil_catalog();
        let applied = applied(&catalog);
        assert_eq!(applied["geothermal_normal"].net_power, 200.0);
        assert_eq!(applied["geothermal_pure"].net_power, 400.0);
        assert!(!applied.contains_key("geothermal_impure"));
    }

    #[test]
    fn test_dominance_is_idempotent() {
        let catalog = iron_catalog();
        let applicator = Applicator::new(&catalog);
        let recipe = catalog.recipe("mine_iron").unwrap();
        let once = applicator.apply(recipe).unwrap();
        let twice = reduce_dominated(once.clone(), 60.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dominance_compares_same_slot_only() {
        let catalog = iron_catalog();
        let recipe = catalog.recipe("mine_iron").unwrap();
        let mk1 = catalog.machine("miner_mk1").unwrap();
        let mk2 = catalog.machine("miner_mk2").unwrap();
        let pure = catalog.purity("pure").unwrap();
        let normal = catalog.purity("normal").unwrap();
        let make = |machine, purity: &'static str, p, overclock| AppliedRecipe {
            id: format!("mine_iron_{purity}"),
            recipe,
            machine,
            extractor: None,
            binding: Binding::Purity(p),
            overclock,
            efficiency_multiplier: 1.0,
            net_power: 0.0,
        };
        let kept = reduce_dominated(
            vec![
                make(mk2, "pure", pure, 1.0),
                make(mk1, "normal", normal, 2.5),
                make(mk1, "pure", pure, 2.5),
            ],
            60.0,
        );
        assert_eq!(kept.len(), 2);
        // mk2 at 1.0 (6/cycle) beats mk1 at 2.5 (2.5/cycle)
        assert_eq!(kept[0].machine.id, "miner_mk2");
        assert_eq!(kept[1].binding.purity(), Some("normal"));
    }

    #[test]
    fn test_duplicate_id_detected() {
        let mut catalog = iron_catalog();
        catalog.add_recipe(recipe(
            "mine_iron_pure",
            part(),
            1.0,
            &[],
            &[("iron_plate", 1.0)],
            &["constructor"],
        ));
        let err = Applicator::new(&catalog).apply_all().unwrap_err();
        assert_eq!(err, ApplyError::DuplicateId("mine_iron_pure".to_string()));
    }

    #[test]
    fn test_reserved_power_id() {
        let mut catalog = single_recipe_catalog();
        catalog.add_recipe(recipe("power", part(), 1.0, &[], &[("widget", 1.0)], &["assembler"]));
        let err = Applicator::new(&catalog).apply_all().unwrap_err();
        assert_eq!(err, ApplyError::ReservedId("power".to_string()));
    }

    #[test]
    fn test_wrong_machine_kind() {
        let mut catalog = iron_catalog();
        catalog
            .recipes
            .get_mut("mine_iron")
            .unwrap()
            .produced_in
            .insert("smelter".to_string());
        let err = Applicator::new(&catalog).apply_all().unwrap_err();
        assert_eq!(
            err,
            ApplyError::MachineKindMismatch {
                recipe: "mine_iron".to_string(),
                machine: "smelter".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_machine_is_catalog_error() {
        let mut catalog = iron_catalog();
        catalog
            .recipes
            .get_mut("iron_plate")
            .unwrap()
            .produced_in
            .insert("ghost".to_string());
        let err = Applicator::new(&catalog).apply_all().unwrap_err();
        assert_eq!(err, ApplyError::Catalog(CatalogError::UnknownMachine("ghost".to_string())));
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Recipe_IronPlate_C"), "Recipe_IronPlate_C");
        assert_eq!(sanitize_name("iron plate (alt)"), "iron_plate__alt_");
        assert_eq!(sanitize_name("9lives"), "x_9lives");
    }
}
