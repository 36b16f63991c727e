use clap::ArgMatches;

pub mod route;
pub mod solve;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::process;
use std::str::FromStr;
use delivery_cli::format::problem::DeliveryProblemReader;
use delivery_cli::get_errors_serialized;
use delivery_core::models::DeliveryProblem;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| {
        eprintln!("cannot open {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn read_problem(path: &str) -> Result<DeliveryProblem, String> {
    BufReader::new(open_file(path, "problem"))
        .read_delivery()
        .map_err(|errors| format!("cannot read problem:\n{}", get_errors_serialized(&errors)))
}
