use super::*;
use crate::helpers::{DummyWrite, GRAPH_PROBLEM_PATH};

fn run_route_with_out_writer(matches: &ArgMatches) -> Result<(), String> {
    run_route(matches, |_| BufWriter::new(Box::new(DummyWrite {})))
}

fn get_matches(params: &[&str]) -> ArgMatches {
    let args = [&["route", GRAPH_PROBLEM_PATH], params].concat();

    get_route_app().try_get_matches_from(args).unwrap()
}

#[test]
fn can_find_route_with_default_algorithm() {
    run_route_with_out_writer(&get_matches(&["--from", "1", "--to", "4"])).unwrap();
}

#[test]
fn can_find_route_with_trace() {
    run_route_with_out_writer(&get_matches(&["--from", "1", "--to", "4", "--trace", "--trace-limit", "10"])).unwrap();
}

#[test]
fn can_find_route_with_dijkstra() {
    run_route_with_out_writer(&get_matches(&["--from", "1", "--to", "5", "--algorithm", "dijkstra"])).unwrap();
}

#[test]
fn can_reject_unknown_algorithm() {
    let args = vec!["route", GRAPH_PROBLEM_PATH, "--from", "1", "--to", "4", "--algorithm", "bfs"];

    get_route_app().try_get_matches_from(args).unwrap_err();
}

#[test]
fn can_require_origin_and_destination() {
    get_route_app().try_get_matches_from(vec!["route", GRAPH_PROBLEM_PATH, "--from", "1"]).unwrap_err();
}

#[test]
fn can_reject_tracing_dijkstra() {
    let result = run_route_with_out_writer(&get_matches(&["--from", "1", "--to", "4", "-a", "dijkstra", "--trace"]));

    assert!(result.unwrap_err().contains("only for astar"));
}
