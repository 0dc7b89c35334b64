use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tailwind class merging CLI - Resolves conflicting utility classes in class strings
#[derive(Parser, Debug)]
#[command(name = "tailwind-merger-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge class strings given as arguments
    Merge(MergeArgs),
    /// Read class strings from stdin and write merged output to stdout
    Pipe(PipeArgs),
}

/// Arguments for the merge command
#[derive(Parser, Debug, Clone)]
pub struct MergeArgs {
    /// Class strings to merge
    #[arg(
        value_name = "CLASSES",
        required = true,
        num_args = 1..,
        help = "Class strings to merge, joined in order before conflict resolution"
    )]
    pub classes: Vec<String>,

    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file (YAML or JSON format)"
    )]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,
}

/// Arguments for the pipe command
#[derive(Parser, Debug, Clone)]
pub struct PipeArgs {
    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file (YAML or JSON format)"
    )]
    pub config: Option<PathBuf>,
}

impl MergeArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        // Check that at least one class string was provided
        if self.classes.is_empty() {
            return Err("At least one class string must be provided".to_string());
        }

        // Check that the class strings are not all blank
        if self.classes.iter().all(|s| s.trim().is_empty()) {
            return Err("Class strings must not all be blank".to_string());
        }

        Ok(())
    }
}
