//! LinkMap CLI library
//!
//! This module contains the core CLI logic for the LinkMap tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::{
    fs,
    io::{self, Write},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use linkmap::{LinkMap, LinkMapError, graph::GraphBuilder};

/// One crawled link: `parent_url` contains an anchor pointing at `url`.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkRecord {
    pub url: String,
    pub parent_url: String,
}

/// Run the LinkMap CLI application
///
/// This function reads the input file, runs the requested pipeline stage and
/// writes the resulting JSON to the output file, or to stdout when no output
/// path is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `LinkMapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed input JSON
/// - Tree building and layout errors
pub fn run(args: &Args) -> Result<(), LinkMapError> {
    info!(
        input_path = args.command.input(),
        output_path = args.command.output().unwrap_or("-");
        "Processing graph"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let source = fs::read_to_string(args.command.input())?;
    let linkmap = LinkMap::new(app_config);

    let json = match &args.command {
        Command::Tree { .. } => {
            let graph = linkmap.parse_graph(&source)?;
            to_json(&linkmap.build_tree(&graph)?)?
        }
        Command::Layout { root_url, .. } => {
            let graph = linkmap.parse_graph(&source)?;
            to_json(&linkmap.layout_radial(&graph, root_url)?)?
        }
        Command::LayoutTree { .. } => {
            let graph = linkmap.parse_graph(&source)?;
            let tree = linkmap.build_tree(&graph)?;
            to_json(&linkmap.layout_tree(&tree)?)?
        }
        Command::Assemble { seeds, unique, .. } => {
            let records: Vec<LinkRecord> = serde_json::from_str(&source)?;
            to_json(&assemble(seeds, &records, *unique))?
        }
    };

    write_output(args.command.output(), &json)?;

    info!(output = args.command.output().unwrap_or("-"); "JSON exported successfully");

    Ok(())
}

/// Assemble a graph from seed urls and crawled link records, in order.
pub fn assemble(seeds: &[String], records: &[LinkRecord], unique: bool) -> linkmap::graph::Graph {
    let mut builder = GraphBuilder::new().with_unique(unique);

    for seed in seeds {
        builder.add_seed(seed);
    }

    let mut dropped = 0usize;
    for record in records {
        if builder.add_link(&record.url, &record.parent_url).is_none() {
            dropped += 1;
        }
    }

    let graph = builder.build();
    debug!(
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        dropped;
        "Graph assembled"
    );
    graph
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, LinkMapError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

fn write_output(path: Option<&str>, json: &str) -> Result<(), LinkMapError> {
    match path {
        Some(path) => fs::write(path, json)?,
        None => io::stdout().lock().write_all(json.as_bytes())?,
    }
    Ok(())
}
