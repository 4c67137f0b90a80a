//! Handler for the `knapsack` command.

use owo_colors::OwoColorize;

use crate::app;
use crate::cli::KnapsackArgs;
use crate::error::Result;
use crate::model::KnapsackSpec;
use crate::solver::{HiGHSSolver, SolutionStatus};

/// Execute the knapsack command.
pub fn execute(args: &KnapsackArgs) -> Result<()> {
    let sample = KnapsackSpec::sample();
    let spec = KnapsackSpec::new(
        args.values
            .clone()
            .unwrap_or_else(|| sample.values().to_vec()),
        args.weights
            .clone()
            .unwrap_or_else(|| sample.weights().to_vec()),
        args.capacity.unwrap_or_else(|| sample.capacity()),
    )?;

    if args.show_model {
        println!("{}", spec.build());
        println!();
    }

    let solver = HiGHSSolver::new();
    let report = app::solve_knapsack(&spec, &solver)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Problem status: {}", SolutionStatus::Optimal.green());
    println!();
    println!("Items packed: {:?}", report.selection.items);
    println!("Total value: {}", report.selection.total_value);
    println!(
        "Total weight: {} (capacity {})",
        report.selection.total_weight,
        spec.capacity()
    );
    Ok(())
}
