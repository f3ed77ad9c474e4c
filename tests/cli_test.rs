//! Tests for command dispatch

use clap::Parser;
use tempfile::TempDir;

use lectkit::cli::args::Cli;
use lectkit::cli::commands::{execute_command, execute_with_settings};
use lectkit::cli::CliError;
use lectkit::config::Settings;
use lectkit::exitcode;
use lectkit::lines::read_lines;
use lectkit::util::testing;

fn parse(args: &[&str]) -> Cli {
    testing::init_test_setup();
    Cli::parse_from(std::iter::once("lectkit").chain(args.iter().copied()))
}

/// Runs against compiled defaults, independent of the user's config and environment.
fn run(args: &[&str]) -> Result<(), CliError> {
    execute_with_settings(&parse(args), &Settings::default())
}

fn broken_config(temp: &TempDir) -> String {
    let path = temp.path().join("lectkit.toml");
    std::fs::write(&path, "directed = \"maybe\"\n").unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn given_file_write_without_lines_when_executed_then_sample_lines_written() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.txt");
    let path_str = path.to_str().unwrap();

    run(&["file", "write", "--path", path_str]).unwrap();
    assert_eq!(read_lines(&path).unwrap(), lectkit::demo::FILE_LINES);

    run(&["file", "read", path_str]).unwrap();
}

#[test]
fn given_missing_file_when_read_then_noinput_exit_code() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.txt");
    let err = run(&["file", "read", path.to_str().unwrap()]).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::NOINPUT);
}

#[test]
fn given_unknown_start_when_graph_then_dataerr() {
    let err = run(&["graph", "-e", "A-B", "--start", "Z"]).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_out_of_range_window_when_sort_then_dataerr() {
    let err = run(&["sort", "--range", "0", "9", "3", "2", "1"]).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_unsorted_input_when_binary_search_then_usage_error() {
    let err = run(&["search", "--method", "binary", "--target", "1", "3", "1", "2"]).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_defaults_when_running_demos_then_all_succeed() {
    run(&["tree"]).unwrap();
    run(&["tree", "--recursive"]).unwrap();
    run(&["graph"]).unwrap();
    run(&["graph", "--directed", "--recursive"]).unwrap();
    run(&["sort"]).unwrap();
    run(&["sort", "--algorithm", "bubble"]).unwrap();
    run(&["search"]).unwrap();
    run(&["search", "-m", "binary", "-t", "6"]).unwrap();
    run(&["config", "show"]).unwrap();
}

#[test]
fn given_broken_config_when_completion_then_succeeds() {
    let temp = TempDir::new().unwrap();
    let config = broken_config(&temp);
    execute_command(&parse(&["--config", &config, "completion", "bash"])).unwrap();
}

#[test]
fn given_broken_config_when_running_demo_then_config_exit_code() {
    let temp = TempDir::new().unwrap();
    let config = broken_config(&temp);
    let err = execute_command(&parse(&["--config", &config, "tree"])).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::CONFIG);
}

#[test]
fn given_config_file_settings_when_file_write_then_default_path_from_settings() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("lectkit.toml");
    let data_path = temp.path().join("dump.txt");
    std::fs::write(
        &config_path,
        format!("data_file = {:?}\n", data_path.to_str().unwrap()),
    )
    .unwrap();
    let settings = Settings::from_file(&config_path).unwrap();

    execute_with_settings(&parse(&["file", "write", "one", "two"]), &settings).unwrap();
    assert_eq!(read_lines(&data_path).unwrap(), vec!["one", "two"]);
}
