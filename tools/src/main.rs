//! seedling-runner: headless runner for the generational wealth simulator.
//!
//! Usage:
//!   seedling-runner compare --seed 42 --generations 3 --habit 100
//!   seedling-runner run --config run.json
//!   seedling-runner habit --habit 50 --years 30 --return 0.07
//!
//! Results are printed to stdout as JSON; a short summary goes to stderr.

use anyhow::{anyhow, bail, Result};
use seedling_core::{
    compare,
    config::RunConfig,
    habit::habit_impact,
    report::MemberView,
    run_simulation, ComparisonInput, ComparisonSummary,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("compare");

    let mut config = match find_arg(&args, "--config") {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    config.seed = parse_arg(&args, "--seed", config.seed)?;
    config.generations = parse_arg(&args, "--generations", config.generations)?;
    if let Some(v) = parse_opt(&args, "--habit")? {
        config.scenario.monthly_habit_change = Some(v);
    }
    if let Some(v) = parse_opt(&args, "--debt-modifier")? {
        config.scenario.starting_debt_modifier = Some(v);
    }
    if let Some(v) = parse_opt(&args, "--literacy-boost")? {
        config.scenario.financial_literacy_boost = Some(v);
    }
    if let Some(v) = parse_opt(&args, "--investment-return")? {
        config.scenario.investment_return = Some(v);
    }

    match mode {
        "run" => {
            config.validate()?;
            let params = config.params.with_overrides(&config.scenario);
            let tree = run_simulation(&config.founder, &params, config.generations, config.seed)?;
            eprintln!(
                "run: seed={} generations={} members={} founder net worth=${:.0}",
                config.seed,
                config.generations,
                tree.flatten().len(),
                tree.net_worth()
            );
            println!("{}", serde_json::to_string_pretty(&MemberView::new(&tree))?);
        }
        "compare" => {
            if config.scenario.is_empty() {
                log::warn!("No scenario modifiers given; scenario will match baseline");
            }
            config.validate()?;
            let mut input = ComparisonInput::from_overrides(
                config.founder.clone(),
                config.params.clone(),
                &config.scenario,
                config.generations,
                config.seed,
            );
            input.founder_overrides = config.founder_overrides.clone();
            let result = compare(&input)?;
            print_summary(&result.summary);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "habit" => {
            let monthly = config.scenario.monthly_habit_change.unwrap_or(50.0);
            let years = parse_arg(&args, "--years", 30u32)?;
            let annual_return = parse_arg(&args, "--return", config.params.investment_return)?;
            let impact = habit_impact(monthly, years, annual_return)?;
            eprintln!("{}", impact.insight);
            println!("{}", serde_json::to_string_pretty(&impact)?);
        }
        other => bail!("Unknown mode '{other}' (expected run, compare or habit)"),
    }

    Ok(())
}

fn print_summary(summary: &ComparisonSummary) {
    eprintln!("=== COMPARISON SUMMARY ===");
    eprintln!(
        "  baseline:   {} members, ${:.0}",
        summary.baseline.total_members, summary.baseline.total_net_worth
    );
    eprintln!(
        "  scenario:   {} members, ${:.0}",
        summary.scenario.total_members, summary.scenario.total_net_worth
    );
    eprintln!(
        "  difference: ${:.0} ({:+.1}%)",
        summary.difference.total_net_worth, summary.difference.percent_change
    );
    for (base, scen) in summary.baseline.by_generation.iter().zip(&summary.scenario.by_generation) {
        eprintln!(
            "  Gen {} | avg ${:.0} -> ${:.0} | homes {:.0}% -> {:.0}%",
            base.generation + 1,
            base.avg_net_worth,
            scen.avg_net_worth,
            base.home_ownership_rate * 100.0,
            scen.home_ownership_rate * 100.0
        );
    }
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// The parsed value of `flag`, or None when the flag is absent. A flag
/// given without a value, or with one that does not parse, is an error.
fn parse_opt<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>> {
    match find_arg(args, flag) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| anyhow!("Invalid value '{value}' for {flag}")),
        None if args.iter().any(|a| a == flag) => bail!("Missing value for {flag}"),
        None => Ok(None),
    }
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> Result<T> {
    Ok(parse_opt(args, flag)?.unwrap_or(default))
}
