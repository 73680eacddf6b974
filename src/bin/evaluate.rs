use loopexplorer::config::LoopConfig;
use loopexplorer::evaluation::{
    default_scenarios, evaluate_scenario, format_report, EvalScenario, ScenarioResult,
};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        "\
Usage: evaluate [OPTIONS]

Options:
  --scenario=FILTER     Only run scenarios whose name contains FILTER
  --tolerance=F         Accepted deviation as fraction (default: LOOP_DISTANCE_TOLERANCE_PCT, 0.10)
  --json                Output results as JSON
  --help                Show this help message

Exits with status 1 when any scenario falls outside the tolerance."
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (less verbose for eval)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loopexplorer=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI args
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    dotenv::dotenv().ok();
    let config = LoopConfig::from_env().map_err(|e| format!("Config error: {}", e))?;

    let scenario_filter = args.iter().find_map(|a| a.strip_prefix("--scenario="));
    let json_output = args.iter().any(|a| a == "--json");
    let tolerance_pct: f64 = match args.iter().find_map(|a| a.strip_prefix("--tolerance=")) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("Invalid --tolerance value: {}", raw))?,
        None => config.distance_tolerance_pct,
    };

    // Select scenarios
    let all_scenarios = default_scenarios();
    let scenarios: Vec<&EvalScenario> = if let Some(filter) = scenario_filter {
        all_scenarios
            .iter()
            .filter(|s| s.name.contains(filter))
            .collect()
    } else {
        all_scenarios.iter().collect()
    };

    if scenarios.is_empty() {
        eprintln!("No scenarios matched filter. Available:");
        for s in &all_scenarios {
            eprintln!("  {}", s.name);
        }
        std::process::exit(1);
    }

    tracing::info!(
        scenarios = scenarios.len(),
        tolerance_pct,
        "Running loop evaluation"
    );

    let results: Vec<ScenarioResult> = scenarios
        .iter()
        .map(|scenario| evaluate_scenario(scenario, tolerance_pct))
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", format_report(&results, tolerance_pct));
    }

    if results.iter().any(|r| !r.within_tolerance) {
        std::process::exit(1);
    }

    Ok(())
}
