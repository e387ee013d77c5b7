use clap::{Args as ClapArgs, Parser, Subcommand};
use mazing::search::{run_parallel_search, CheckpointPolicy, ParallelConfig, SearchConfig};
use mazing::{aggregate, maps, unfinished_pairs, CheckpointStore, GridMap};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "mazing")]
#[command(about = "mazing - longest maze search for tower-defence fields")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    search: SearchArgs,

    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ClapArgs)]
struct SearchArgs {
    /// Catalog map name (case-insensitive), or a label when --map-file is given
    #[arg(required = true)]
    map: Option<String>,
    /// Minutes each pair is searched for; fractions allowed
    #[arg(required = true)]
    minutes: Option<f64>,

    #[command(flatten)]
    source: MapSource,

    /// Maximum number of pairs searched at once [default: CPUs - 1]
    #[arg(short = 'j', long)]
    workers: Option<usize>,
    /// Seed for choosing which unfinished pairs to search
    #[arg(long)]
    seed: Option<u64>,
    /// Fail a pair whose checkpoint is unreadable instead of restarting it
    #[arg(long)]
    strict_checkpoints: bool,
}

/// Where the map and its checkpoints come from
#[derive(ClapArgs)]
struct MapSource {
    /// Load the map from a JSON file instead of the built-in catalog
    #[arg(long)]
    map_file: Option<PathBuf>,
    /// Directory holding checkpoint and result files
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate existing checkpoints without searching
    Report {
        /// Catalog map name (case-insensitive)
        map: String,
        #[command(flatten)]
        source: MapSource,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, default_filter),
    );

    match args.command {
        Some(Commands::Report { map, source }) => {
            let map = resolve_map(&map, source.map_file.as_deref())?;
            report(&map, &CheckpointStore::new(&source.dir))
        }
        None => search(args.search),
    }
}

fn resolve_map(name: &str, map_file: Option<&Path>) -> Result<GridMap, Box<dyn Error>> {
    let map = match map_file {
        Some(path) => maps::load_map_file(path)?,
        None => maps::lookup(name)?,
    };
    Ok(map)
}

fn search(args: SearchArgs) -> Result<(), Box<dyn Error>> {
    let (Some(name), Some(minutes)) = (args.map, args.minutes) else {
        return Err("a map and a time budget in minutes are required".into());
    };
    let map = resolve_map(&name, args.source.map_file.as_deref())?;

    let policy = if args.strict_checkpoints {
        CheckpointPolicy::Strict
    } else {
        CheckpointPolicy::Lenient
    };
    let search_config = SearchConfig::default()
        .with_minutes(minutes)?
        .with_checkpoint_dir(&args.source.dir)
        .with_checkpoint_policy(policy);
    let parallel_config = ParallelConfig::default()
        .with_workers_option(args.workers)
        .with_seed_option(args.seed);

    println!("Map: {}", map.name());
    let whole = minutes.trunc();
    println!(
        "Time: {} minutes {} seconds.",
        whole as u64,
        (60.0 * (minutes - whole)) as u64
    );

    fs::create_dir_all(&args.source.dir)?;
    let checkpoints = CheckpointStore::new(&args.source.dir);
    let mut rng = ChaCha8Rng::seed_from_u64(parallel_config.base_seed.unwrap_or_else(rand::random));

    let pairs = unfinished_pairs(&map, &checkpoints, parallel_config.num_workers, &mut rng);
    let mut failed = 0;
    if pairs.is_empty() {
        println!("Congratulations: the map {} has been solved!", map.name());
    } else {
        let result = run_parallel_search(&map, &pairs, &search_config);
        log::debug!("session statistics:\n{}", result.total_statistics.format_summary());
        for ((entry, exit), message) in &result.failures {
            eprintln!("Pair {entry} -> {exit} failed: {message}");
        }
        failed = result.failures.len();
    }

    report(&map, &checkpoints)?;
    if failed > 0 {
        return Err(format!("{failed} pair(s) failed").into());
    }
    Ok(())
}

/// Aggregate every pair of `map`, print the answer and save it.
fn report(map: &GridMap, checkpoints: &CheckpointStore) -> Result<(), Box<dyn Error>> {
    let result = aggregate(&map.pairs(), map, checkpoints);

    // moves from spawn to core, one less than the number of path cells
    println!("Longest path length: {}", result.best_length);
    match result.winning_paths.first() {
        Some(path) => {
            println!("Example path:");
            println!("{}", map.render(path));
        }
        None => println!("No complete path found yet."),
    }

    fs::create_dir_all(checkpoints.dir())?;
    checkpoints.save_aggregate(map.name(), &result)?;
    println!("Saved and done.");
    Ok(())
}
