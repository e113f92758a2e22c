//! WASM bindings for the planner
//!
//! Catalogs cross the boundary as JSON text, options and results as plain
//! JavaScript objects.

use std::collections::BTreeMap;

use wasm_bindgen::prelude::*;

use crate::applicator::Applicator;
use crate::catalog::Catalog;
use crate::plan::{self, PlanOptions};
use crate::rates::production_rate;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Build the LP text for a catalog and a `PlanOptions` object
#[wasm_bindgen]
pub fn generate_lp(catalog_json: &str, options: JsValue) -> Result<String, JsValue> {
    let catalog = Catalog::from_json(catalog_json).map_err(js_error)?;
    let options: PlanOptions = if options.is_undefined() || options.is_null() {
        PlanOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(js_error)?
    };
    plan::generate_lp(&catalog, &options).map_err(js_error)
}

/// List every applied recipe the model would contain
#[wasm_bindgen]
pub fn applied_recipes(catalog_json: &str, overrides: JsValue) -> Result<JsValue, JsValue> {
    let catalog = Catalog::from_json(catalog_json).map_err(js_error)?;
    let overrides: BTreeMap<String, f64> = if overrides.is_undefined() || overrides.is_null() {
        BTreeMap::new()
    } else {
        serde_wasm_bindgen::from_value(overrides).map_err(js_error)?
    };
    let applicator = Applicator::new(&catalog).with_overrides(overrides);
    let per_minute = applicator.limits().per_minute;
    let applied = applicator.apply_all().map_err(js_error)?;

    let summaries: Vec<AppliedRecipeInfo> = applied
        .values()
        .map(|a| AppliedRecipeInfo {
            id: a.id.clone(),
            recipe: a.recipe.id.clone(),
            machine: a.machine.id.clone(),
            extractor: a.extractor.map(|e| e.id.clone()),
            purity: a.binding.purity().map(str::to_string),
            well: a.binding.well().map(str::to_string),
            overclock: a.overclock,
            cycles_per_minute: production_rate(a, per_minute),
            net_power: a.net_power,
        })
        .collect();
    serde_wasm_bindgen::to_value(&summaries).map_err(js_error)
}

/// Applied recipe summary for JavaScript
#[derive(serde::Serialize)]
struct AppliedRecipeInfo {
    id: String,
    recipe: String,
    machine: String,
    extractor: Option<String>,
    purity: Option<String>,
    well: Option<String>,
    overclock: f64,
    cycles_per_minute: f64,
    net_power: f64,
}

/// Validate a catalog and return the problems found (empty when valid)
#[wasm_bindgen]
pub fn validate_catalog(catalog_json: &str) -> JsValue {
    let diagnostics: Vec<String> = match Catalog::from_json(catalog_json) {
        Ok(_) => Vec::new(),
        Err(e) => vec![e.to_string()],
    };
    serde_wasm_bindgen::to_value(&diagnostics).unwrap_or(JsValue::NULL)
}
