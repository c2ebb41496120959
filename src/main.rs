use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use num_traits::Zero;
use sindh_routes::{
    annotate::{annotate_route, Offline},
    catalog::Catalog,
    graph::load_edges,
    PathResult, RoutePlanner,
};
use std::{fmt::{Debug, Display}, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sindh-routes")]
#[command(about = "Find the shortest and an alternative route between two locations.", long_about = None)]
struct Cli {
    /// Start location, an identifier (KHI) or a city name (Karachi)
    start: String,

    /// Destination, an identifier or a city name
    end: String,

    /// CSV edge list with a from,to,distance header, replaces the built-in network
    #[arg(short, long)]
    edges: Option<PathBuf>,

    /// Skip the alternative route search
    #[arg(long)]
    no_alternative: bool,

    /// Log search details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    match &cli.edges {
        Some(path) => {
            let edges = load_edges(path)
                .with_context(|| format!("loading edge list {}", path.display()))?;
            info!("using {} edges from {}", edges.len(), path.display());
            report(&RoutePlanner::new(&edges, Catalog::default()), &cli)
        }
        None => report(&RoutePlanner::sindh(), &cli),
    }
}

fn report<C>(planner: &RoutePlanner<C>, cli: &Cli) -> Result<()>
where
    C: Zero + PartialOrd + Copy + Debug + Display,
{
    info!("network has {} locations", planner.graph().len());

    let start = planner.resolve(&cli.start)?;
    let end = planner.resolve(&cli.end)?;

    let plan = if cli.no_alternative {
        planner.plan_primary(&start, &end)
    } else {
        planner.plan(&start, &end)
    };

    let Some(plan) = plan else {
        println!("No route from {} to {}", planner.catalog().name_of(&start), planner.catalog().name_of(&end));
        return Ok(());
    };

    print_route("Shortest route", planner, &plan.primary);
    println!("  settled:  {}", planner.display_names(&plan.primary.settled).join(", "));

    match &plan.alternative {
        Some(alternative) => print_route("Alternative route", planner, alternative),
        None if !cli.no_alternative => println!("No alternative route"),
        None => {}
    }

    let names = planner.display_names(&plan.primary.path);
    let annotations = annotate_route(&Offline, &names, plan.primary.total_distance);
    println!();
    println!("{}", annotations.insight);
    println!("{}", annotations.explanation);

    Ok(())
}

fn print_route<C: Display>(title: &str, planner: &RoutePlanner<C>, result: &PathResult<C>)
where
    C: Zero + PartialOrd + Copy + Debug,
{
    println!(
        "{title}: {} ({} km, {} legs)",
        planner.display_names(&result.path).join(" -> "),
        result.total_distance,
        result.hops()
    );
}
