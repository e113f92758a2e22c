//! Shared test fixtures.
//!
//! `iron_catalog()` covers node extraction (two miner tiers, a water pump),
//! smelting, a constructor and an item sink. `oil_catalog()` covers fracking
//! wells, geothermal geysers and a fuel generator. `single_recipe_catalog()` is
//! the smallest catalog that still produces something.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::*;

pub const EXPONENT: f64 = 1.321928;

pub fn purities() -> Vec<Purity> {
    vec![
        Purity {
            id: "impure".to_string(),
            efficiency_multiplier: 0.5,
        },
        Purity {
            id: "normal".to_string(),
            efficiency_multiplier: 1.0,
        },
        Purity {
            id: "pure".to_string(),
            efficiency_multiplier: 2.0,
        },
    ]
}

pub fn overclockable() -> Potential {
    Potential {
        can_change: true,
        min: 0.01,
        max: 1.0,
        crystal_bonus: 0.5,
        max_crystals: 3,
    }
}

pub fn item(id: &str, transfer: TransferMedium) -> Item {
    Item {
        id: id.to_string(),
        name: id.replace('_', " "),
        transfer,
        physical: Some(PhysicalProperties {
            energy_value: 0.0,
            sinkable: transfer == TransferMedium::Belt,
            sink_points: 1.0,
        }),
    }
}

pub fn machine(id: &str, kind: MachineKind, power_consumption: f64, potential: Potential) -> Machine {
    Machine {
        id: id.to_string(),
        name: id.replace('_', " "),
        kind,
        power_consumption,
        power_consumption_exponent: EXPONENT,
        potential,
    }
}

pub fn recipe(
    id: &str,
    kind: RecipeKind,
    duration: f64,
    ingredients: &[(&str, f64)],
    products: &[(&str, f64)],
    produced_in: &[&str],
) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: id.replace('_', " "),
        kind,
        duration,
        ingredients: ingredients.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        products: products.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        produced_in: produced_in.iter().map(|m| m.to_string()).collect::<BTreeSet<_>>(),
    }
}

pub fn part() -> RecipeKind {
    RecipeKind::Manufacturing { variable_power: None }
}

pub fn miner_mk2() -> Machine {
    machine(
        "miner_mk2",
        MachineKind::NodeExtractor {
            extraction_rate: 6.0,
            unlimited_source: false,
        },
        12.0,
        overclockable(),
    )
}

pub fn iron_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for purity in purities() {
        catalog.add_purity(purity);
    }
    catalog.add_item(item("iron_ore", TransferMedium::Belt));
    catalog.add_item(item("iron_ingot", TransferMedium::Belt));
    catalog.add_item(item("iron_plate", TransferMedium::Belt));
    catalog.add_item(item("water", TransferMedium::Pipe));

    catalog.add_machine(machine(
        "miner_mk1",
        MachineKind::NodeExtractor {
            extraction_rate: 1.0,
            unlimited_source: false,
        },
        5.0,
        overclockable(),
    ));
    catalog.add_machine(miner_mk2());
    catalog.add_machine(machine(
        "water_pump",
        MachineKind::NodeExtractor {
            extraction_rate: 2.0,
            unlimited_source: true,
        },
        20.0,
        overclockable(),
    ));
    catalog.add_machine(machine(
        "smelter",
        MachineKind::Manufacturing { speed: 1.0 },
        4.0,
        overclockable(),
    ));
    catalog.add_machine(machine(
        "constructor",
        MachineKind::Manufacturing { speed: 1.0 },
        4.0,
        overclockable(),
    ));
    catalog.add_machine(machine("sink", MachineKind::ItemSink, 30.0, Potential::fixed()));

    catalog.add_recipe(recipe(
        "mine_iron",
        RecipeKind::NodeExtraction,
        1.0,
        &[],
        &[("iron_ore", 1.0)],
        &["miner_mk1", "miner_mk2"],
    ));
    catalog.add_recipe(recipe(
        "pump_water",
        RecipeKind::NodeExtraction,
        1.0,
        &[],
        &[("water", 1.0)],
        &["water_pump"],
    ));
    catalog.add_recipe(recipe(
        "iron_ingot",
        part(),
        2.0,
        &[("iron_ore", 1.0)],
        &[("iron_ingot", 1.0)],
        &["smelter"],
    ));
    catalog.add_recipe(recipe(
        "iron_plate",
        part(),
        6.0,
        &[("iron_ingot", 3.0)],
        &[("iron_plate", 2.0)],
        &["constructor"],
    ));
    catalog.add_recipe(recipe(
        "sink_iron_plate",
        RecipeKind::Sink,
        1.0,
        &[("iron_plate", 1.0)],
        &[],
        &["sink"],
    ));

    catalog.resource_nodes.insert(
        "iron_ore".to_string(),
        BTreeMap::from([("pure".to_string(), 2), ("normal".to_string(), 3)]),
    );
    catalog
}

pub fn oil_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for purity in purities() {
        catalog.add_purity(purity);
    }
    catalog.add_item(item("crude_oil", TransferMedium::Pipe));
    catalog.add_item(item("coal", TransferMedium::Belt));

    catalog.add_machine(machine(
        "pressurizer",
        MachineKind::FrackingActivator {
            extractors: vec!["extractor".to_string()],
        },
        150.0,
        overclockable(),
    ));
    catalog.add_machine(machine(
        "extractor",
        MachineKind::FrackingExtractor { extraction_rate: 4.0 },
        0.0,
        Potential::fixed(),
    ));
    catalog.add_machine(machine(
        "geothermal_generator",
        MachineKind::VariablePowerGenerator {
            power_production_factor: 200.0,
        },
        0.0,
        Potential::fixed(),
    ));
    catalog.add_machine(machine(
        "coal_generator",
        MachineKind::PowerGenerator { power_production: 75.0 },
        0.0,
        overclockable(),
    ));

    catalog.add_recipe(recipe(
        "frack_oil",
        RecipeKind::WellExtraction,
        1.0,
        &[],
        &[("crude_oil", 1.0)],
        &["pressurizer"],
    ));
    catalog.add_recipe(recipe(
        "geothermal",
        RecipeKind::GeothermalPower,
        1.0,
        &[],
        &[],
        &["geothermal_generator"],
    ));
    catalog.add_recipe(recipe(
        "burn_coal",
        part(),
        4.0,
        &[("coal", 1.0)],
        &[],
        &["coal_generator"],
    ));

    catalog.add_well(ResourceWell {
        id: "well_a".to_string(),
        resource: "crude_oil".to_string(),
        satellites: BTreeMap::from([("impure".to_string(), 2), ("pure".to_string(), 1)]),
    });
    catalog.add_well(ResourceWell {
        id: "well_b".to_string(),
        resource: "crude_oil".to_string(),
        satellites: BTreeMap::from([("normal".to_string(), 3)]),
    });
    catalog.geysers = BTreeMap::from([("normal".to_string(), 2), ("pure".to_string(), 1)]);
    catalog
}

/// One item, one fixed-speed machine, one recipe producing 1 unit per 1 second cycle
pub fn single_recipe_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_item(item("widget", TransferMedium::Belt));
    catalog.add_machine(machine(
        "assembler",
        MachineKind::Manufacturing { speed: 1.0 },
        15.0,
        Potential::fixed(),
    ));
    catalog.add_recipe(recipe("widget", part(), 1.0, &[], &[("widget", 1.0)], &["assembler"]));
    catalog
}
