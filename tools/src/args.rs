use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::Shell;
use srcfind_common::errors::*;
use srcfind_common::Distro;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Verbose logging
    #[arg(short, long, global = true, action(ArgAction::Count))]
    pub verbose: u8,
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Bypass tty detection and always use colors
    #[arg(short = 'C', long, global = true)]
    pub color: bool,
    #[command(subcommand)]
    pub subcommand: SubCommand,
}

#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Locate the source package of a binary package
    Find(Find),
    /// List the supported distributions
    Distros,
    /// Generate shell completions
    Completions(Completions),
}

#[derive(Debug, Parser)]
pub struct Find {
    #[arg(value_enum)]
    pub distro: Distro,
    pub name: String,
    pub version: String,

    /// Repository subdirectory to search (centos only, eg. `BaseOS`)
    #[arg(long = "repo")]
    pub repos: Vec<String>,
    /// Search the extended set of repository subdirectories (centos only)
    #[arg(long)]
    pub optimal: bool,
    /// Search this source repository instead of discovering them
    #[arg(long = "source-repo")]
    pub source_repos: Vec<String>,
    /// Search this binary repository instead of discovering them
    #[arg(long = "binary-repo")]
    pub binary_repos: Vec<String>,
    /// Architecture of the binary repositories
    #[arg(long)]
    pub arch: Option<String>,

    /// Download the source archive to this file
    #[arg(short = 'o', long, conflicts_with = "auto_output")]
    pub output: Option<PathBuf>,
    /// Download the source archive, named after the package
    #[arg(short = 'O', long)]
    pub auto_output: bool,
    /// Print the result as json
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct Completions {
    pub shell: Shell,
}

pub fn gen_completions(args: &Completions) -> Result<()> {
    clap_complete::generate(args.shell, &mut Args::command(), "srcfind", &mut io::stdout());
    Ok(())
}
