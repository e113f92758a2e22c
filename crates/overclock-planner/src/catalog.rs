//! Immutable catalog of items, machines, recipes and resource availability.
//!
//! Entities are stored once, keyed by their stable string id. Every relation
//! (ingredients, producing machines, purity tables, fracking extractors) is an id
//! that resolves through the catalog.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Unknown item: {0}")]
    UnknownItem(String),
    #[error("Unknown machine: {0}")]
    UnknownMachine(String),
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),
    #[error("Unknown purity: {0}")]
    UnknownPurity(String),
    #[error("Unknown resource well: {0}")]
    UnknownWell(String),
    #[error("Recipe {0} has a non-positive duration")]
    InvalidDuration(String),
    #[error("Machine {0} is not a fracking extractor")]
    NotAnExtractor(String),
    #[error("Invalid catalog JSON: {0}")]
    Json(String),
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferMedium {
    Belt,
    Pipe,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalProperties {
    pub energy_value: f64,
    pub sinkable: bool,
    pub sink_points: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub transfer: TransferMedium,
    /// Absent for non-physical items
    #[cfg_attr(feature = "serde", serde(default))]
    pub physical: Option<PhysicalProperties>,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Potential {
    pub can_change: bool,
    pub min: f64,
    pub max: f64,
    /// Potential added per installed crystal
    pub crystal_bonus: f64,
    pub max_crystals: u32,
}

impl Potential {
    pub fn fixed() -> Self {
        Self {
            can_change: false,
            min: 1.0,
            max: 1.0,
            crystal_bonus: 0.0,
            max_crystals: 0,
        }
    }

    /// Highest reachable overclock with every crystal slot filled
    pub fn ceiling(&self) -> f64 {
        if self.can_change {
            self.max + self.max_crystals as f64 * self.crystal_bonus
        } else {
            1.0
        }
    }

    pub fn floor(&self) -> f64 {
        if self.can_change { self.min } else { 1.0 }
    }
}

impl Default for Potential {
    fn default() -> Self {
        Self::fixed()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq)]
pub enum MachineKind {
    Manufacturing {
        speed: f64,
    },
    /// Power draw comes from the recipe rather than the machine
    VariablePowerManufacturing {
        speed: f64,
    },
    NodeExtractor {
        extraction_rate: f64,
        /// Water pumps: deposits are unlimited and uniform
        #[cfg_attr(feature = "serde", serde(default))]
        unlimited_source: bool,
    },
    FrackingActivator {
        extractors: Vec<String>,
    },
    FrackingExtractor {
        extraction_rate: f64,
    },
    PowerGenerator {
        power_production: f64,
    },
    VariablePowerGenerator {
        power_production_factor: f64,
    },
    ItemSink,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Machine {
    pub id: String,
    pub name: String,
    pub kind: MachineKind,
    /// Base draw in MW at 100% potential
    #[cfg_attr(feature = "serde", serde(default))]
    pub power_consumption: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_exponent"))]
    pub power_consumption_exponent: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub potential: Potential,
}

#[cfg(feature = "serde")]
fn default_exponent() -> f64 {
    1.321928
}

impl Machine {
    /// Manufacturing speed or extraction items per cycle; 1 for machines without one
    pub fn efficiency_multiplier(&self) -> f64 {
        match &self.kind {
            MachineKind::Manufacturing { speed } | MachineKind::VariablePowerManufacturing { speed } => *speed,
            MachineKind::NodeExtractor { extraction_rate, .. }
            | MachineKind::FrackingExtractor { extraction_rate } => *extraction_rate,
            MachineKind::FrackingActivator { .. }
            | MachineKind::PowerGenerator { .. }
            | MachineKind::VariablePowerGenerator { .. }
            | MachineKind::ItemSink => 1.0,
        }
    }

    pub fn can_change_potential(&self) -> bool {
        self.potential.can_change
    }

    pub fn is_unlimited_source(&self) -> bool {
        matches!(
            self.kind,
            MachineKind::NodeExtractor {
                unlimited_source: true,
                ..
            }
        )
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct VariablePower {
    pub constant: f64,
    /// Mean variable draw in MW at 100% potential
    pub factor: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeKind {
    Manufacturing {
        #[cfg_attr(feature = "serde", serde(default))]
        variable_power: Option<VariablePower>,
    },
    NodeExtraction,
    WellExtraction,
    Sink,
    GeothermalPower,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub kind: RecipeKind,
    /// Cycle duration in seconds
    pub duration: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ingredients: BTreeMap<String, f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub products: BTreeMap<String, f64>,
    pub produced_in: BTreeSet<String>,
}

impl Recipe {
    pub fn ingredient_amount(&self, item: &str) -> f64 {
        self.ingredients.get(item).copied().unwrap_or(0.0)
    }

    pub fn product_amount(&self, item: &str) -> f64 {
        self.products.get(item).copied().unwrap_or(0.0)
    }

    /// Net amount of `item` per cycle, positive when produced
    pub fn net_amount(&self, item: &str) -> f64 {
        self.product_amount(item) - self.ingredient_amount(item)
    }

    pub fn touches(&self, item: &str) -> bool {
        self.ingredients.contains_key(item) || self.products.contains_key(item)
    }

    /// Items consumed or produced, each listed once in id order
    pub fn items(&self) -> BTreeSet<&str> {
        self.ingredients
            .keys()
            .chain(self.products.keys())
            .map(String::as_str)
            .collect()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Purity {
    pub id: String,
    pub efficiency_multiplier: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceWell {
    pub id: String,
    /// Item extracted from this well
    pub resource: String,
    /// Satellite count per purity
    pub satellites: BTreeMap<String, u32>,
}

/// The purity id water pumps are bound to
pub const WATER_PURITY: &str = "impure";

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: BTreeMap<String, Item>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub machines: BTreeMap<String, Machine>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub recipes: BTreeMap<String, Recipe>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub purities: BTreeMap<String, Purity>,
    /// Deposit count per purity, keyed by resource item
    #[cfg_attr(feature = "serde", serde(default))]
    pub resource_nodes: BTreeMap<String, BTreeMap<String, u32>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resource_wells: BTreeMap<String, ResourceWell>,
    /// Geyser count per purity
    #[cfg_attr(feature = "serde", serde(default))]
    pub geysers: BTreeMap<String, u32>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    pub fn add_machine(&mut self, machine: Machine) {
        self.machines.insert(machine.id.clone(), machine);
    }

    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.insert(recipe.id.clone(), recipe);
    }

    pub fn add_purity(&mut self, purity: Purity) {
        self.purities.insert(purity.id.clone(), purity);
    }

    pub fn add_well(&mut self, well: ResourceWell) {
        self.resource_wells.insert(well.id.clone(), well);
    }

    pub fn item(&self, id: &str) -> Result<&Item, CatalogError> {
        self.items.get(id).ok_or_else(|| CatalogError::UnknownItem(id.to_string()))
    }

    pub fn machine(&self, id: &str) -> Result<&Machine, CatalogError> {
        self.machines
            .get(id)
            .ok_or_else(|| CatalogError::UnknownMachine(id.to_string()))
    }

    pub fn recipe(&self, id: &str) -> Result<&Recipe, CatalogError> {
        self.recipes
            .get(id)
            .ok_or_else(|| CatalogError::UnknownRecipe(id.to_string()))
    }

    pub fn purity(&self, id: &str) -> Result<&Purity, CatalogError> {
        self.purities
            .get(id)
            .ok_or_else(|| CatalogError::UnknownPurity(id.to_string()))
    }

    pub fn well(&self, id: &str) -> Result<&ResourceWell, CatalogError> {
        self.resource_wells
            .get(id)
            .ok_or_else(|| CatalogError::UnknownWell(id.to_string()))
    }

    /// Wells that yield the given resource, in id order
    pub fn wells_for(&self, resource: &str) -> impl Iterator<Item = &ResourceWell> {
        self.resource_wells.values().filter(move |w| w.resource == resource)
    }

    /// Sum of `satellite count × purity multiplier` across the well
    pub fn well_size_multiplier(&self, well: &ResourceWell) -> Result<f64, CatalogError> {
        let mut total = 0.0;
        for (purity, count) in &well.satellites {
            total += self.purity(purity)?.efficiency_multiplier * *count as f64;
        }
        Ok(total)
    }

    /// Extractor machines attached to a fracking activator
    pub fn extractors_of<'a>(&'a self, activator: &'a Machine) -> Result<Vec<&'a Machine>, CatalogError> {
        let MachineKind::FrackingActivator { extractors } = &activator.kind else {
            return Ok(Vec::new());
        };
        let mut out = Vec::with_capacity(extractors.len());
        for id in extractors {
            let machine = self.machine(id)?;
            if !matches!(machine.kind, MachineKind::FrackingExtractor { .. }) {
                return Err(CatalogError::NotAnExtractor(id.clone()));
            }
            out.push(machine);
        }
        Ok(out)
    }

    /// Check every cross reference. Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for recipe in self.recipes.values() {
            if !(recipe.duration > 0.0) {
                return Err(CatalogError::InvalidDuration(recipe.id.clone()));
            }
            for item in recipe.items() {
                self.item(item)?;
            }
            for machine in &recipe.produced_in {
                self.machine(machine)?;
            }
        }
        for machine in self.machines.values() {
            self.extractors_of(machine)?;
        }
        for (resource, counts) in &self.resource_nodes {
            self.item(resource)?;
            for purity in counts.keys() {
                self.purity(purity)?;
            }
        }
        for well in self.resource_wells.values() {
            self.item(&well.resource)?;
            self.well_size_multiplier(well)?;
        }
        for purity in self.geysers.keys() {
            self.purity(purity)?;
        }
        Ok(())
    }

    /// Load an already-processed catalog document and validate it
    #[cfg(feature = "serde")]
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(source).map_err(|e| CatalogError::Json(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }
}
