#[cfg(test)]
#[path = "../../tests/unit/commands/route_test.rs"]
mod route_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use delivery_cli::extensions::route::{RouteQuery, SearchAlgorithm, find_route};
use delivery_cli::format::solution::serialize_json;
use delivery_core::algorithms::graph::DEFAULT_EXPANSION_LIMIT;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const FROM_ARG_NAME: &str = "from";
const TO_ARG_NAME: &str = "to";
const ALGORITHM_ARG_NAME: &str = "algorithm";
const TRACE_ARG_NAME: &str = "trace";
const TRACE_LIMIT_ARG_NAME: &str = "trace-limit";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_route_app() -> Command {
    Command::new("route")
        .about("Finds the shortest path between two locations")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(Arg::new(FROM_ARG_NAME).help("Specifies origin location id").short('f').long(FROM_ARG_NAME).required(true))
        .arg(Arg::new(TO_ARG_NAME).help("Specifies destination location id").short('t').long(TO_ARG_NAME).required(true))
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("Specifies search algorithm")
                .short('a')
                .long(ALGORITHM_ARG_NAME)
                .value_parser(["astar", "dijkstra"])
                .default_value("astar"),
        )
        .arg(
            Arg::new(TRACE_ARG_NAME)
                .help("Records every step of the search")
                .long(TRACE_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(TRACE_LIMIT_ARG_NAME)
                .help("Specifies max amount of expanded nodes in traced search")
                .long(TRACE_LIMIT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_route(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let problem_path = matches
        .get_one::<String>(PROBLEM_ARG_NAME)
        .ok_or_else(|| "problem file path is not specified".to_string())?;

    let from = parse_int_value::<i64>(matches, FROM_ARG_NAME, "from")?.ok_or("origin is not specified")?;
    let to = parse_int_value::<i64>(matches, TO_ARG_NAME, "to")?.ok_or("destination is not specified")?;
    let algorithm = matches
        .get_one::<String>(ALGORITHM_ARG_NAME)
        .map(|value| value.parse::<SearchAlgorithm>())
        .transpose()
        .map_err(|err| err.to_string())?
        .unwrap_or(SearchAlgorithm::AStar);
    let trace_limit = parse_int_value::<usize>(matches, TRACE_LIMIT_ARG_NAME, "trace limit")?;
    let trace_limit = matches.get_flag(TRACE_ARG_NAME).then(|| trace_limit.unwrap_or(DEFAULT_EXPANSION_LIMIT));

    let problem = read_problem(problem_path)?;
    let route = find_route(&problem, &RouteQuery { from, to, algorithm, trace_limit })
        .map_err(|err| format!("cannot find route: {err}"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));

    serialize_json(out_writer_func(out_result), &route).map_err(|err| err.to_string())
}
