#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use delivery_cli::extensions::solve::config::{Config, create_builder_from_config, create_environment, read_config};
use delivery_cli::extensions::solve::solve_problem;
use delivery_cli::format::solution::serialize_json;
use delivery_core::storage::InMemoryRepository;
use delivery_core::utils::Environment;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const CONFIG_ARG_NAME: &str = "config";
const CLUSTERS_ARG_NAME: &str = "clusters";
const MAX_CLUSTERS_ARG_NAME: &str = "max-clusters";
const MAX_DELIVERIES_ARG_NAME: &str = "max-deliveries";
const SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const COMPARE_ARG_NAME: &str = "compare";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Clusters orders, sequences routes and assigns them to couriers")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to optimizer configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CLUSTERS_ARG_NAME)
                .help("Specifies exact amount of clusters, estimated from amount of orders when omitted")
                .short('k')
                .long(CLUSTERS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_CLUSTERS_ARG_NAME)
                .help("Specifies max amount of estimated clusters")
                .long(MAX_CLUSTERS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_DELIVERIES_ARG_NAME)
                .help("Specifies amount of deliveries which makes a route fully efficient")
                .long(MAX_DELIVERIES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed used to select initial cluster centroids")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(COMPARE_ARG_NAME)
                .help("Compares result with manual and random dispatch")
                .long(COMPARE_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let problem_path = matches
        .get_one::<String>(PROBLEM_ARG_NAME)
        .ok_or_else(|| "problem file path is not specified".to_string())?;

    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| read_config(BufReader::new(open_file(path, "config"))))
        .transpose()?
        .unwrap_or_default();

    let cluster_count = parse_int_value::<usize>(matches, CLUSTERS_ARG_NAME, "clusters")?;
    let max_clusters = parse_int_value::<usize>(matches, MAX_CLUSTERS_ARG_NAME, "max clusters")?;
    let max_deliveries = parse_int_value::<usize>(matches, MAX_DELIVERIES_ARG_NAME, "max deliveries")?;
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;

    let mut builder = create_builder_from_config(&config);
    if cluster_count.is_some() {
        builder = builder.with_cluster_count(cluster_count);
    }
    if let Some(max_clusters) = max_clusters {
        builder = builder.with_max_clusters(max_clusters);
    }
    if let Some(max_deliveries) = max_deliveries {
        builder = builder.with_max_deliveries_per_route(max_deliveries);
    }
    if let Some(seed) = seed {
        builder = builder.with_clustering_seed(seed);
    }
    let optimizer_config = builder.build().map_err(|err| format!("invalid optimizer configuration: {err}"))?;

    let problem = read_problem(problem_path)?;
    let environment = get_environment(matches, &config);
    let compare = matches.get_flag(COMPARE_ARG_NAME);

    let mut repository = InMemoryRepository::default();

    let solution = solve_problem(&problem, optimizer_config, environment, compare, Some(&mut repository))
        .map_err(|err| format!("cannot optimize routes: {err}"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));

    serialize_json(out_writer_func(out_result), &solution).map_err(|err| err.to_string())
}

fn get_environment(matches: &ArgMatches, config: &Config) -> Environment {
    if matches.get_flag(LOG_ARG_NAME) { Environment::default() } else { create_environment(config) }
}
