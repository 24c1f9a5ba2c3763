use crate::config::constants::STDIN_MARKER;
use clap::{Parser, Subcommand};
use dataproc_core::config::constants::SCAN_DIRECTORY;
use dataproc_core::util::{check_file, get_directory, path_expand};
use dataproc_core::{ManipulationStep, NodeList, PipeRegistry, execute, execute_from_json_str};
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Subcommand)]
pub enum Commands {
    /// Execute a manipulation document (JSON array of steps)
    Run {
        /// Manipulation file, `-` for stdin
        manipulation: PathBuf,
        /// Write the node list here instead of stdout
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
        /// Create the output directory without asking
        #[clap(short = 'y', long)]
        yes: bool,
    },

    /// Scan a directory tree for run and project nodes
    Scan {
        /// Root directory
        root: PathBuf,
        /// Whitelist patterns, tried in order
        #[clap(short = 'w', long = "whitelist", required = true)]
        whitelist: Vec<String>,
        /// Write the node list here instead of stdout
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
        /// Create the output directory without asking
        #[clap(short = 'y', long)]
        yes: bool,
    },

    /// List registered pipes
    Pipes,
}

/// Discover run and project directories and run node list manipulations
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Debug logging on stderr
    #[clap(short, long, global = true)]
    pub verbose: bool,
    /// Also write debug logs to this file
    #[clap(long, global = true)]
    pub log_file: Option<PathBuf>,
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Execute a manipulation document against the default pipes
pub fn run_command(manipulation: &Path, output: Option<&Path>, yes: bool) -> CliResult<()> {
    let document = read_manipulation(manipulation)?;
    let registry = PipeRegistry::with_default_pipes();
    let nodes = execute_from_json_str(&registry, &document)?;
    write_nodes(&nodes, output, yes)
}

/// Single-step manipulation running `scan_directory`
pub fn scan_command(
    root: &Path,
    whitelist: Vec<String>,
    output: Option<&Path>,
    yes: bool,
) -> CliResult<()> {
    let step = ManipulationStep::new(
        SCAN_DIRECTORY,
        vec![json!(root.to_string_lossy()), json!(whitelist)],
    );
    let registry = PipeRegistry::with_default_pipes();
    let nodes = execute(&registry, vec![step])?;
    write_nodes(&nodes, output, yes)
}

pub fn pipes_command() -> CliResult<()> {
    let registry = PipeRegistry::with_default_pipes();
    for pipe in registry.list_pipes() {
        let kwds = pipe
            .kwds()
            .map(|k| format!(" [{}]", k.join(", ")))
            .unwrap_or_default();
        println!(
            "{}({}){} - {}",
            pipe.name(),
            pipe.args().join(", "),
            kwds,
            pipe.description()
        );
    }
    Ok(())
}

fn read_manipulation(path: &Path) -> CliResult<String> {
    let mut document = String::new();
    if path.as_os_str() == STDIN_MARKER {
        debug!("Reading manipulation from stdin");
        std::io::stdin().read_to_string(&mut document)?;
    } else {
        let path = check_file(path)?;
        debug!("Reading manipulation from {}", path.display());
        document = std::fs::read_to_string(path)?;
    }
    Ok(document)
}

fn write_nodes(nodes: &NodeList, output: Option<&Path>, yes: bool) -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(nodes)?;
    match output {
        Some(path) => {
            let path = path_expand(path)?;
            if let Some(parent) = path.parent() {
                get_directory(parent, yes)?;
            }
            std::fs::write(&path, rendered)?;
            info!("Wrote {} nodes to {}", nodes.len(), path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataproc_core::{Node, NodeType};
    use std::fs;
    use tempfile::TempDir;

    fn sample_tree(root: &Path) {
        fs::create_dir_all(root.join("project/run_a")).unwrap();
        fs::create_dir_all(root.join("project/run_b")).unwrap();
        fs::write(root.join("project/run_a/out.conf"), "").unwrap();
        fs::write(root.join("project/run_b/out.conf"), "").unwrap();
    }

    fn read_nodes(path: &Path) -> Vec<Node> {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_scan_command_writes_nodes() {
        let tmp = TempDir::new().unwrap();
        sample_tree(tmp.path());
        let output = tmp.path().join("reports/nodes.json");

        scan_command(
            &tmp.path().join("project"),
            vec!["*.conf".to_string()],
            Some(output.as_path()),
            true,
        )
        .unwrap();

        let nodes = read_nodes(&output);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].node_type, NodeType::Project);
        assert_eq!(nodes[0].children.len(), 2);
        assert!(nodes[1..].iter().all(|n| n.is_run()));
    }

    #[test]
    fn test_run_command_reads_manipulation_file() {
        let tmp = TempDir::new().unwrap();
        sample_tree(tmp.path());
        let manip = tmp.path().join("manip.json");
        let output = tmp.path().join("nodes.json");
        let document = json!([
            {"name": "scan_directory", "args": [tmp.path().join("project"), ["*.conf"]]}
        ]);
        fs::write(&manip, document.to_string()).unwrap();

        run_command(&manip, Some(output.as_path()), true).unwrap();

        assert_eq!(read_nodes(&output).len(), 3);
    }

    #[test]
    fn test_run_command_missing_file() {
        let tmp = TempDir::new().unwrap();
        assert!(run_command(&tmp.path().join("absent.json"), None, true).is_err());
    }
}
