use super::*;
use crate::helpers::{DummyWrite, FULL_CONFIG_PATH, SIMPLE_PROBLEM_PATH};
use delivery_cli::format::solution::deserialize_solution;

fn run_solve_with_out_writer(matches: &ArgMatches) -> Result<(), String> {
    run_solve(matches, |_| BufWriter::new(Box::new(DummyWrite {})))
}

fn get_matches(params: &[&str]) -> ArgMatches {
    let args = [&["solve", SIMPLE_PROBLEM_PATH], params].concat();

    get_solve_app().try_get_matches_from(args).unwrap()
}

#[test]
fn can_solve_problem_with_defaults() {
    run_solve_with_out_writer(&get_matches(&[])).unwrap();
}

#[test]
fn can_solve_problem_with_config_and_comparison() {
    run_solve_with_out_writer(&get_matches(&["--config", FULL_CONFIG_PATH, "--compare"])).unwrap();
}

#[test]
fn can_require_problem_path() {
    get_solve_app().try_get_matches_from(vec!["solve"]).unwrap_err();
}

#[test]
fn can_reject_invalid_cluster_count() {
    let result = run_solve_with_out_writer(&get_matches(&["--clusters", "0"]));

    assert!(result.unwrap_err().contains("cluster count should be positive"));
}

#[test]
fn can_reject_non_numeric_argument() {
    let result = run_solve_with_out_writer(&get_matches(&["--max-deliveries", "many"]));

    assert!(result.unwrap_err().contains("cannot get integer value"));
}

#[test]
fn can_report_problem_errors() {
    let problem = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(problem.path(), r#"{ "locations": [{ "id": 1, "lat": 100.0, "lng": 0.0 }] }"#).unwrap();
    let path = problem.path().to_string_lossy().to_string();
    let matches = get_solve_app().try_get_matches_from(vec!["solve", path.as_str()]).unwrap();

    let err = run_solve_with_out_writer(&matches).unwrap_err();

    assert!(err.contains("E1001"));
}

#[test]
fn can_report_problem_without_orders() {
    let problem = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(problem.path(), r#"{ "locations": [{ "id": 0, "lat": 0.0, "lng": 0.0, "kind": "depot" }] }"#).unwrap();
    let path = problem.path().to_string_lossy().to_string();
    let matches = get_solve_app().try_get_matches_from(vec!["solve", path.as_str()]).unwrap();

    let err = run_solve_with_out_writer(&matches).unwrap_err();

    assert!(err.contains("no orders"));
}

#[test]
fn can_write_result_to_file() {
    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("solution.json");
    let out_path = out_path.to_string_lossy().to_string();
    let matches = get_matches(&["--out-result", out_path.as_str(), "--clusters", "3", "--seed", "11"]);

    run_solve(&matches, create_write_buffer).unwrap();

    let solution = deserialize_solution(BufReader::new(File::open(out_path.as_str()).unwrap())).unwrap();
    assert_eq!(solution.parameters.cluster_count, Some(3));
    assert_eq!(solution.run_id.map(|run_id| run_id.len()), Some(8));
    assert_eq!(solution.metrics.total_deliveries, 6);
    assert!(solution.clusters.len() <= 3);
}
