//! A command line interface to the delivery route optimizer.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

mod commands;

use crate::commands::create_write_buffer;
use crate::commands::route::{get_route_app, run_route};
use crate::commands::solve::{get_solve_app, run_solve};
use clap::Command;
use std::process;

fn get_app() -> Command {
    Command::new("Delivery Route Optimizer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to the delivery route optimizer")
        .subcommand(get_solve_app())
        .subcommand(get_route_app())
}

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("route", route_matches)) => run_route(route_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
