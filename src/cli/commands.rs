use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{
    Cli, Commands, ConfigCommands, FileCommands, SearchMethod, SortAlgorithm,
};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings, TraversalMode};
use crate::demo;
use crate::graph::Graph;
use crate::lines::{read_lines, write_lines};
use crate::search::{binary_search, linear_search};
use crate::sort::{bubble_sort, quick_sort};
use crate::tree_traits::TreeDisplay;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    // Completion scripts never depend on user configuration
    if let Some(Commands::Completion { shell }) = &cli.command {
        return _completion(*shell);
    }
    let settings = Settings::load(cli.config.as_deref())?;
    execute_with_settings(cli, &settings)
}

/// Dispatches `cli` against already resolved `settings`.
pub fn execute_with_settings(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { recursive }) => _tree(settings, *recursive),
        Some(Commands::Graph {
            directed,
            edges,
            start,
            recursive,
        }) => _graph(settings, *directed, edges, start.as_deref(), *recursive),
        Some(Commands::Sort {
            algorithm,
            range,
            numbers,
        }) => _sort(*algorithm, range.as_deref(), numbers),
        Some(Commands::Search {
            method,
            target,
            numbers,
        }) => _search(*method, *target, numbers),
        Some(Commands::File { command }) => match command {
            FileCommands::Write { path, lines } => {
                _file_write(data_path(settings, path.as_deref()), lines)
            }
            FileCommands::Read { path } => _file_read(data_path(settings, path.as_deref())),
        },
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(settings),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

fn traversal_mode(settings: &Settings, recursive_flag: bool) -> TraversalMode {
    if recursive_flag {
        TraversalMode::Recursive
    } else {
        settings.traversal
    }
}

fn data_path(settings: &Settings, path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(|| settings.data_file.clone())
}

#[instrument(skip(settings))]
fn _tree(settings: &Settings, recursive: bool) -> CliResult<()> {
    let tree = demo::sample_tree();
    output::header("Tree:");
    output::info(&tree.to_tree_string());

    let mode = traversal_mode(settings, recursive);
    debug!("tree traversal mode: {}", mode);
    output::header("Tree traversal:");
    let print = |value: &String| output::info(value);
    match mode {
        TraversalMode::Iterative => tree.traverse(Some(tree.root()), print),
        TraversalMode::Recursive => tree.traverse_recursive(Some(tree.root()), print),
    }

    output::sequence("Leaves", tree.root().leaf_values());
    output::sequence("Depth", [tree.root().depth()]);
    Ok(())
}

#[instrument(skip(settings))]
fn _graph(
    settings: &Settings,
    directed: bool,
    edges: &[(String, String)],
    start: Option<&str>,
    recursive: bool,
) -> CliResult<()> {
    let mut graph = Graph::new(directed || settings.directed);
    if edges.is_empty() {
        graph.extend(
            demo::GRAPH_EDGES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string())),
        );
    } else {
        graph.extend(edges.iter().cloned());
    }
    debug!(
        "graph: {} nodes, {} edges, directed={}",
        graph.node_count(),
        graph.edge_count(),
        graph.is_directed()
    );

    output::header("Graph representation:");
    graph
        .print_graph()
        .map_err(|e| CliError::io("write graph", e))?;

    let start = match start {
        Some(s) => s.to_string(),
        None => graph
            .nodes()
            .next()
            .cloned()
            .ok_or_else(|| CliError::InvalidArgs("graph has no nodes".into()))?,
    };

    output::header("DFS traversal:");
    let dfs = match traversal_mode(settings, recursive) {
        TraversalMode::Iterative => graph.dfs(&start)?,
        TraversalMode::Recursive => graph.dfs_recursive(&start, &mut HashSet::new())?,
    };
    dfs.iter().for_each(|node| output::info(node));

    output::header("BFS traversal:");
    graph.bfs(&start)?.iter().for_each(|node| output::info(node));
    Ok(())
}

#[instrument]
fn _sort(algorithm: SortAlgorithm, range: Option<&[usize]>, numbers: &[i64]) -> CliResult<()> {
    let mut data: Vec<i64> = if numbers.is_empty() {
        match algorithm {
            SortAlgorithm::Quick => demo::QUICK_SORT_INPUT.to_vec(),
            SortAlgorithm::Bubble => demo::BUBBLE_SORT_INPUT.to_vec(),
        }
    } else {
        numbers.to_vec()
    };
    output::sequence("Input", &data);

    match algorithm {
        SortAlgorithm::Quick => {
            let (left, right) = match range {
                Some([left, right]) => (*left, *right),
                Some(other) => {
                    return Err(CliError::InvalidArgs(format!(
                        "range needs LEFT RIGHT, got {:?}",
                        other
                    )))
                }
                None if data.is_empty() => return Ok(()),
                None => (0, data.len() - 1),
            };
            quick_sort(&mut data, left, right)?;
        }
        SortAlgorithm::Bubble => {
            if range.is_some() {
                output::warning("--range only applies to quicksort, sorting everything");
            }
            bubble_sort(&mut data);
        }
    }

    output::sequence("Sorted", &data);
    Ok(())
}

#[instrument]
fn _search(method: SearchMethod, target: Option<i64>, numbers: &[i64]) -> CliResult<()> {
    let data: Vec<i64> = if numbers.is_empty() {
        match method {
            SearchMethod::Linear => demo::LINEAR_SEARCH_INPUT.to_vec(),
            SearchMethod::Binary => demo::BINARY_SEARCH_INPUT.to_vec(),
        }
    } else {
        numbers.to_vec()
    };
    let target = target.unwrap_or(demo::SEARCH_TARGET);

    let found = match method {
        SearchMethod::Linear => linear_search(&data, &target),
        SearchMethod::Binary => {
            if !data.windows(2).all(|w| w[0] <= w[1]) {
                return Err(CliError::InvalidArgs(
                    "binary search needs ascending input".into(),
                ));
            }
            binary_search(&data, &target)
        }
    };

    match found {
        Some(idx) => output::success(&format!("Element {} found at index {}", target, idx)),
        None => output::failure(&format!("Element {} not found", target)),
    }
    Ok(())
}

#[instrument]
fn _file_write(path: PathBuf, lines: &[String]) -> CliResult<()> {
    if lines.is_empty() {
        write_lines(&path, &demo::FILE_LINES)?;
    } else {
        write_lines(&path, lines)?;
    }
    output::success(&format!("Data written to file: {}", path.display()));
    Ok(())
}

#[instrument]
fn _file_read(path: PathBuf) -> CliResult<()> {
    let lines = read_lines(&path)?;
    output::header("File contents:");
    lines.iter().for_each(|line| output::info(line));
    Ok(())
}

fn _config_show(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::warning("no config directory available on this platform"),
    }
    Ok(())
}
