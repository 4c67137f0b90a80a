//! Handler for the `cross` command.

use owo_colors::OwoColorize;

use crate::app;
use crate::cli::CrossArgs;
use crate::config::PuzzleFile;
use crate::error::Result;
use crate::model::PlanSpec;
use crate::solver::{HiGHSSolver, SolutionStatus};

/// Default horizon for the built-in puzzle.
const DEFAULT_HORIZON: usize = 20;

/// Execute the cross command.
pub fn execute(args: &CrossArgs) -> Result<()> {
    let mut spec = match &args.config {
        Some(path) => PuzzleFile::load(path)?.to_spec()?,
        None => PlanSpec::wolf_goat_cabbage(DEFAULT_HORIZON),
    };
    if let Some(horizon) = args.horizon {
        spec = spec.with_horizon(horizon);
    }

    if args.show_model {
        println!("{}", spec.build()?.ilp());
        println!();
    }

    let solver = HiGHSSolver::new();
    let report = app::solve_crossing(&spec, &solver)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Problem status: {}", SolutionStatus::Optimal.green());
    println!();
    print!("{}", report.trajectory.render(spec.roster()));
    println!();
    println!(
        "The ferry crosses the river {} times.",
        report.trajectory.crossings
    );
    println!("Objective value: {}", report.objective);
    Ok(())
}
