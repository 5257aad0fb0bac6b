use std::process::{Command, Output};

use assert_cmd::prelude::*;

fn run(args: &[&str]) -> Output {
    Command::cargo_bin("amphipod-solver")
        .unwrap()
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn run_swap() {
    let output = run(&["levels/01-swap.txt"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let out = stdout(&output);
    assert!(out.starts_with("Solving levels/01-swap.txt...\n"));
    assert!(out.contains("States created total: "));
    assert!(out.contains("Unique visited total: "));
    assert!(!out.contains("Found solution:"));
    assert!(out.ends_with("Moves: 4\nLeast energy required: 46\n"));
}

#[test]
fn run_swap_verbose() {
    let output = run(&["--verbose", "levels/01-swap.txt"]);
    assert!(output.status.success());

    let out = stdout(&output);
    let trace = r"Found solution:
Step 0, energy: 0
#######
#.....#
##B#A##
 #####

Step 1, energy: 2 (A [2, 4] -> [1, 5] (2 steps, 2 energy))
#######
#....A#
##B#.##
 #####

Step 2, energy: 22 (B [2, 2] -> [1, 3] (2 steps, 20 energy))
#######
#..B.A#
##.#.##
 #####

Step 3, energy: 42 (B [1, 3] -> [2, 4] (2 steps, 20 energy))
#######
#....A#
##.#B##
 #####

Step 4, energy: 46 (A [1, 5] -> [2, 2] (4 steps, 4 energy))
#######
#.....#
##A#B##
 #####

Moves: 4
Least energy required: 46
";
    assert!(out.ends_with(trace), "{}", out);
}

#[test]
fn run_solved_status() {
    let output = run(&["-s", "-d", "levels/00-solved.txt"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains(
        "Visited new depth: 0
total created / unique visited / reached duplicates:
1               1               0
"
    ));
    assert!(out.contains("States created total: 1\n"));
    assert!(out.ends_with("Moves: 0\nLeast energy required: 0\n"));
}

#[test]
fn run_no_solution() {
    let output = run(&["levels/04-no-solution.txt"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("Failed to solve: Path not found"));
}

#[test]
fn run_visit_limit() {
    let output = run(&["--max-visited", "2", "levels/03-three-rooms.txt"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("Failed to solve: Gave up after visiting 2 states"));
}

#[test]
fn run_missing_file() {
    let output = run(&["levels/does-not-exist.txt"]);
    assert!(!output.status.success());
    assert!(stdout(&output).starts_with("Can't load level levels/does-not-exist.txt"));
}

#[test]
fn run_bad_args() {
    // clap complains on stderr, nothing should get solved
    let output = run(&["--max-visited", "many", "levels/01-swap.txt"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let output = run(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
