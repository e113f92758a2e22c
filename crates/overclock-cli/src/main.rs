use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use overclock_lp::MicrolpSolver;
use overclock_planner::{Applicator, Catalog, PlanOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "overclock")]
#[command(about = "Factory production planning as a linear program", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the LP model for a catalog and plan
    Generate {
        /// Processed catalog (JSON)
        catalog: PathBuf,
        #[command(flatten)]
        plan: PlanArgs,
        /// Write LP text here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build the model, solve it and print the plan
    Solve {
        /// Processed catalog (JSON)
        catalog: PathBuf,
        #[command(flatten)]
        plan: PlanArgs,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a catalog for broken references
    Check {
        /// Processed catalog (JSON)
        catalog: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
struct PlanArgs {
    /// Plan file (TOML) with targets, floors and overrides
    #[arg(long)]
    plan: Option<PathBuf>,
    /// Item to maximize, repeatable
    #[arg(short, long = "target")]
    targets: Vec<String>,
    /// Minimum MW left unconsumed
    #[arg(long)]
    excess_power: Option<f64>,
    /// Minimum net output as item=rate, repeatable
    #[arg(long = "excess", value_parser = parse_assignment)]
    excess_items: Vec<(String, f64)>,
    /// Manual overclock as recipe=value, repeatable
    #[arg(long = "overclock", value_parser = parse_assignment)]
    overclocks: Vec<(String, f64)>,
}

impl PlanArgs {
    /// Plan file first, then flags on top
    fn options(&self) -> Result<PlanOptions> {
        let mut options = match &self.plan {
            Some(path) => load_plan(path)?,
            None => PlanOptions::default(),
        };
        self.apply(&mut options);
        Ok(options)
    }

    fn apply(&self, options: &mut PlanOptions) {
        if !self.targets.is_empty() {
            options.targets = self.targets.clone();
        }
        if let Some(power) = self.excess_power {
            options.excess_power = power;
        }
        for (item, rate) in &self.excess_items {
            options.excess_items.insert(item.clone(), *rate);
        }
        for (recipe, overclock) in &self.overclocks {
            options.overclock_overrides.insert(recipe.clone(), *overclock);
        }
    }
}

fn parse_assignment(raw: &str) -> Result<(String, f64), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((key.to_string(), value))
}

fn load_plan(path: &Path) -> Result<PlanOptions> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading plan {}", path.display()))?;
    let options = toml::from_str(&text).with_context(|| format!("parsing plan {}", path.display()))?;
    Ok(options)
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&text).with_context(|| format!("loading catalog {}", path.display()))?;
    debug!(
        items = catalog.items.len(),
        machines = catalog.machines.len(),
        recipes = catalog.recipes.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { catalog, plan, output } => {
            let options = plan.options()?;
            let catalog = load_catalog(&catalog)?;
            let lp = overclock_planner::generate_lp(&catalog, &options)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, lp).with_context(|| format!("writing {}", path.display()))?;
                }
                None => print!("{}", lp),
            }
        }

        Commands::Solve { catalog, plan, json } => {
            let options = plan.options()?;
            let catalog = load_catalog(&catalog)?;
            let plan = overclock_planner::solve(&catalog, &options, &MicrolpSolver::new())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
                return Ok(());
            }

            println!("Status: OPTIMAL");
            println!("Objective: {:.4} per minute", plan.objective);
            println!("Power surplus: {:.4} MW", plan.power_surplus);
            println!();
            println!("{:<36} {:<24} {:>8} {:>10} {:>10}", "Recipe", "Machine", "Clock", "Count", "MW");
            println!("{}", "-".repeat(92));
            for entry in &plan.entries {
                let machine = match &entry.extractor {
                    Some(extractor) => format!("{} + {}", entry.machine, extractor),
                    None => entry.machine.clone(),
                };
                println!(
                    "{:<36} {:<24} {:>7.1}% {:>10.4} {:>10.2}",
                    entry.id,
                    machine,
                    entry.overclock * 100.0,
                    entry.count,
                    entry.power
                );
            }
        }

        Commands::Check { catalog: path } => {
            let catalog = match load_catalog(&path) {
                Ok(catalog) => catalog,
                Err(e) => {
                    eprintln!("✗ {} has errors:", path.display());
                    eprintln!("  {:#}", e);
                    std::process::exit(1);
                }
            };
            let applied = Applicator::new(&catalog).apply_all()?;
            if applied.is_empty() {
                bail!("{} has no applicable recipes", path.display());
            }

            println!("✓ {} is valid", path.display());
            println!("  {} items", catalog.items.len());
            println!("  {} machines", catalog.machines.len());
            println!("  {} recipes", catalog.recipes.len());
            println!("  {} resource wells", catalog.resource_wells.len());
            println!("  {} applied recipes", applied.len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("iron_plate=30"), Ok(("iron_plate".to_string(), 30.0)));
        assert_eq!(parse_assignment(" smelter = 2.5 "), Ok(("smelter".to_string(), 2.5)));
        assert!(parse_assignment("iron_plate").is_err());
        assert!(parse_assignment("=3").is_err());
        assert!(parse_assignment("iron_plate=fast").is_err());
    }

    #[test]
    fn test_flags_override_plan_file() {
        let mut options: PlanOptions = toml::from_str(
            r#"
            targets = ["iron_plate"]
            excess_power = 100.0

            [excess_items]
            iron_ingot = 30.0

            [limits]
            belt_per_minute = 780.0
            "#,
        )
        .unwrap();
        assert_eq!(options.limits.belt_per_minute, 780.0);
        assert_eq!(options.limits.pipe_per_minute, 600.0);

        let args = PlanArgs {
            targets: vec!["iron_rod".to_string()],
            excess_items: vec![("iron_ingot".to_string(), 10.0)],
            overclocks: vec![("iron_plate".to_string(), 1.5)],
            ..PlanArgs::default()
        };
        args.apply(&mut options);

        assert_eq!(options.targets, vec!["iron_rod"]);
        assert_eq!(options.excess_power, 100.0);
        assert_eq!(options.excess_items["iron_ingot"], 10.0);
        assert_eq!(options.overclock_overrides["iron_plate"], 1.5);
    }
}
