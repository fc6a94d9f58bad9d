//! Command-line argument definitions for the LinkMap CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global flags control configuration file selection and
//! logging verbosity; each [`Command`] names one pipeline stage.

use clap::{Parser, Subcommand};

/// Command-line arguments for the LinkMap tool
#[derive(Parser, Debug)]
#[command(name = "linkmap", author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Pipeline stage to run
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the collapsible display tree of a graph
    Tree {
        /// Path to the input graph JSON file
        input: String,

        /// Path to the output JSON file, stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Position every node of a graph around a root page
    Layout {
        /// Path to the input graph JSON file
        input: String,

        /// Url of the root page
        #[arg(long)]
        root_url: String,

        /// Path to the output JSON file, stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Build the display tree and position it radially
    LayoutTree {
        /// Path to the input graph JSON file
        input: String,

        /// Path to the output JSON file, stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Assemble a graph from crawled `{url, parent_url}` link records
    Assemble {
        /// Path to the input link records JSON file
        input: String,

        /// Seed url, numbered before any linked page (repeatable)
        #[arg(long = "seed")]
        seeds: Vec<String>,

        /// Drop records whose url was already recorded as a link target
        #[arg(long)]
        unique: bool,

        /// Path to the output JSON file, stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Command {
    /// Returns the input path of the command.
    pub fn input(&self) -> &str {
        match self {
            Command::Tree { input, .. }
            | Command::Layout { input, .. }
            | Command::LayoutTree { input, .. }
            | Command::Assemble { input, .. } => input,
        }
    }

    /// Returns the output path of the command, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Command::Tree { output, .. }
            | Command::Layout { output, .. }
            | Command::LayoutTree { output, .. }
            | Command::Assemble { output, .. } => output.as_deref(),
        }
    }
}
