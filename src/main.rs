// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

use std::env;
use std::process;
use std::time::Duration;

use clap::{App, Arg, ArgMatches};

use amphipod_solver::config::{Limits, Method};
use amphipod_solver::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("amphipod-solver")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("dijkstra")
                .short("d")
                .long("dijkstra")
                .help("search without the heuristic"),
        )
        .arg(
            Arg::with_name("status")
                .short("s")
                .long("status")
                .help("print status whenever a new depth is reached"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("print every state of the solution"),
        )
        .arg(
            Arg::with_name("max-visited")
                .long("max-visited")
                .value_name("N")
                .help("give up after visiting this many states")
                .validator(|value| validate::<usize>(&value)),
        )
        .arg(
            Arg::with_name("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("give up after this many seconds")
                .validator(|value| validate::<u64>(&value)),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let method = if matches.is_present("dijkstra") {
        Method::Dijkstra
    } else {
        Method::AStar
    };
    let limits = parse_limits(&matches);
    let print_status = matches.is_present("status");
    let verbose = matches.is_present("verbose");
    // clap validates required args
    let path = matches.value_of("file").unwrap();

    let level = path.load_level().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(current_dir) => println!(
                "Can't load level {} in {}: {}",
                path,
                current_dir.display(),
                err
            ),
            Err(_) => println!("Can't load level {}: {}", path, err),
        }
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver_ok = level
        .solve_with(method, limits, print_status)
        .unwrap_or_else(|err| {
            println!("Failed to solve: {}", err);
            process::exit(1);
        });
    println!("{}", solver_ok.stats);

    if verbose {
        println!("Found solution:");
        print!("{}", solver_ok.trace(&level));
    }
    println!("Moves: {}", solver_ok.moves.move_cnt());
    println!("Least energy required: {}", solver_ok.cost);
}

fn validate<T: std::str::FromStr>(value: &str) -> Result<(), String> {
    value
        .parse::<T>()
        .map(|_| ())
        .map_err(|_| format!("`{}` is not a valid number", value))
}

fn parse_limits(matches: &ArgMatches<'_>) -> Limits {
    // values were checked by the validators
    let max_visited = matches
        .value_of("max-visited")
        .and_then(|value| value.parse().ok());
    let timeout = matches
        .value_of("timeout")
        .and_then(|value| value.parse().ok())
        .map(Duration::from_secs);
    Limits::new(max_visited, timeout)
}
