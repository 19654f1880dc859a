use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crucible_paths::{Crucible, FrontierKind, Grid, RunLimits, render_path, runs};

#[derive(Parser, Debug)]
#[command(name = "crucible")]
#[command(about = "Lowest heat loss for a crucible pushed through a city grid", long_about = None)]
#[command(version)]
struct Cli {
    /// Puzzle input: one row of digits per line.
    input: PathBuf,

    /// Which run limits to use when no custom limits are given.
    #[arg(long, value_enum, default_value_t = Variant::Both)]
    variant: Variant,

    /// Custom minimum run before turning or stopping.
    #[arg(long, requires = "max_run")]
    min_run: Option<u32>,

    /// Custom maximum straight run.
    #[arg(long)]
    max_run: Option<u32>,

    /// Priority structure used by the search.
    #[arg(long, value_enum, default_value_t = FrontierArg::Heap)]
    frontier: FrontierArg,

    /// Print the walked path over the grid.
    #[arg(long)]
    trace: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Variant {
    Standard,
    Ultra,
    Both,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FrontierArg {
    Heap,
    Buckets,
}

impl From<FrontierArg> for FrontierKind {
    fn from(arg: FrontierArg) -> Self {
        match arg {
            FrontierArg::Heap => FrontierKind::BinaryHeap,
            FrontierArg::Buckets => FrontierKind::Buckets,
        }
    }
}

impl Cli {
    /// Labelled limits to run, in output order.
    fn jobs(&self) -> Result<Vec<(&'static str, RunLimits)>> {
        if let Some(max_run) = self.max_run {
            let min_run = self.min_run.unwrap_or(0);
            let limits = RunLimits::new(min_run, max_run).context("invalid --min-run/--max-run")?;
            return Ok(vec![("custom", limits)]);
        }
        Ok(match self.variant {
            Variant::Standard => vec![("standard", RunLimits::STANDARD)],
            Variant::Ultra => vec![("ultra", RunLimits::ULTRA)],
            Variant::Both => vec![
                ("standard", RunLimits::STANDARD),
                ("ultra", RunLimits::ULTRA),
            ],
        })
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let grid = Grid::parse(&text)
        .with_context(|| format!("failed to parse grid from {}", cli.input.display()))?;
    log::debug!("loaded {}x{} grid", grid.width(), grid.height());

    for (label, limits) in cli.jobs()? {
        let solution = Crucible::new(&grid, limits)
            .with_frontier(cli.frontier.into())
            .search()
            .with_context(|| format!("{label} search failed"))?;
        log::info!("{label}: lowest heat loss = {}", solution.cost());
        println!("{label}: {}", solution.cost());

        if cli.trace {
            let path = solution.reconstruct_path();
            println!("{}", render_path(&grid, &path));
            let breakdown: Vec<String> = runs(&path)
                .iter()
                .map(|r| format!("{}{}", r.direction.glyph(), r.len))
                .collect();
            println!("runs: {}", breakdown.join(" "));
            log::debug!(
                "{label}: {} states settled, {} generated",
                solution.states_settled(),
                solution.states_generated()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_both_variants() {
        let cli = Cli::parse_from(["crucible", "input.txt"]);
        let jobs = cli.jobs().unwrap();
        assert_eq!(
            jobs,
            vec![
                ("standard", RunLimits::STANDARD),
                ("ultra", RunLimits::ULTRA)
            ]
        );
        assert_eq!(FrontierKind::from(cli.frontier), FrontierKind::BinaryHeap);
    }

    #[test]
    fn custom_limits_override_variant() {
        let cli = Cli::parse_from([
            "crucible",
            "input.txt",
            "--variant",
            "ultra",
            "--min-run",
            "2",
            "--max-run",
            "5",
        ]);
        assert_eq!(cli.jobs().unwrap(), vec![("custom", RunLimits::new(2, 5).unwrap())]);
    }

    #[test]
    fn bad_custom_limits_are_rejected() {
        let cli = Cli::parse_from(["crucible", "input.txt", "--max-run", "0"]);
        assert!(cli.jobs().is_err());
    }

    #[test]
    fn frontier_flag() {
        let cli = Cli::parse_from(["crucible", "input.txt", "--frontier", "buckets"]);
        assert_eq!(FrontierKind::from(cli.frontier), FrontierKind::Buckets);
    }
}
