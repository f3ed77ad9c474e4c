//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

/// Lecture sampler: tree and graph traversals, sorting, searching and line file I/O
#[derive(Parser, Debug)]
#[command(name = "lectkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(short, long, global = true, env = "LECTKIT_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the sample tree, draw it and walk it depth-first
    Tree {
        /// Walk with recursion instead of an explicit stack
        #[arg(long)]
        recursive: bool,
    },

    /// Build a graph, dump its adjacency lists and run DFS and BFS
    Graph {
        /// Edges only go one way
        #[arg(long)]
        directed: bool,
        /// Edge as FROM-TO, repeatable (default: sample graph A..E)
        #[arg(short, long = "edge", value_parser = parse_edge)]
        edges: Vec<(String, String)>,
        /// Start node for the traversals (default: first node)
        #[arg(short, long)]
        start: Option<String>,
        /// Walk DFS with recursion instead of an explicit stack
        #[arg(long)]
        recursive: bool,
    },

    /// Sort integers (default: sample input for the chosen algorithm)
    Sort {
        #[arg(short, long, value_enum, default_value_t = SortAlgorithm::Quick)]
        algorithm: SortAlgorithm,
        /// Inclusive window for quicksort as LEFT RIGHT (default: whole input)
        #[arg(long, num_args = 2, value_names = ["LEFT", "RIGHT"])]
        range: Option<Vec<usize>>,
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Search integers for a target
    Search {
        #[arg(short, long, value_enum, default_value_t = SearchMethod::Linear)]
        method: SearchMethod,
        /// Value to look for
        #[arg(short, long, allow_negative_numbers = true)]
        target: Option<i64>,
        /// Haystack; must be ascending for binary search
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Dump lines to or load lines from a text file
    File {
        #[command(subcommand)]
        command: FileCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum FileCommands {
    /// Write lines, replacing the file (default: sample lines)
    Write {
        /// Target file (default: data_file setting)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        path: Option<PathBuf>,
        lines: Vec<String>,
    },
    /// Print the lines of a file
    Read {
        /// Source file (default: data_file setting)
        #[arg(value_hint = ValueHint::FilePath)]
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Show the global config file location
    Path,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortAlgorithm {
    Quick,
    Bubble,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMethod {
    Linear,
    Binary,
}

/// Parses `FROM-TO` into an edge.
pub fn parse_edge(s: &str) -> Result<(String, String), String> {
    match s.split_once('-') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.to_string(), to.to_string()))
        }
        _ => Err(format!("expected FROM-TO, got '{}'", s)),
    }
}
