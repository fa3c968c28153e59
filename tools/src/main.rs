use crate::args::*;
use clap::Parser;
use colored::*;
use env_logger::Env;
use serde::Serialize;
use srcfind_common::config::ConfigFile;
use srcfind_common::errors::*;
use srcfind_common::{http, Distro};
use srcfind_finder::{DiscoveredSource, FinderOptions, PackageIdentity, RepoCache};
use std::fs::{self, File};
use std::io;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use std::process;
use std::rc::Rc;
use strum::IntoEnumIterator;

pub mod args;

fn print_json<S: Serialize>(x: &S) -> Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &x)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct FindOutput<'a> {
    distro: Distro,
    package: &'a PackageIdentity,
    source: &'a DiscoveredSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a Path>,
}

/// `{name}-{version}.{distro}{ext}`, path separators are replaced with `.`
fn auto_output_path(distro: Distro, package: &PackageIdentity, extension: &str) -> PathBuf {
    let filename = format!(
        "{}-{}.{}{}",
        package.name, package.version, distro, extension
    );
    PathBuf::from(filename.replace(['/', '\\'], "."))
}

fn write_archive(cache: &RepoCache, source: &DiscoveredSource, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| anyhow!("Failed to create output file {:?}", path))?;
    match source.make_archive(cache.transport(), &mut file) {
        Ok(bytes) => {
            info!("Wrote {} bytes to {:?}", bytes, path);
            Ok(())
        }
        Err(err) => {
            drop(file);
            if let Err(err) = fs::remove_file(path) {
                warn!("Failed to remove incomplete file {:?}: {:#}", path, err);
            }
            Err(err)
        }
    }
}

fn find(config: &ConfigFile, args: Find) -> Result<()> {
    let transport = http::client(&config.http)?;
    let cache = Rc::new(RepoCache::new(Box::new(transport)));

    let options = FinderOptions {
        repos: args.repos,
        optimal: args.optimal,
        source_repos: args.source_repos,
        binary_repos: args.binary_repos,
        arch: args.arch,
    };
    let package = PackageIdentity::new(args.name, args.version);
    let finder =
        srcfind_finder::factory(args.distro, package.clone(), config, &options, cache.clone())?;
    let source = finder.find()?;

    let output = if let Some(path) = args.output {
        Some(path)
    } else if args.auto_output {
        Some(auto_output_path(
            args.distro,
            &package,
            source.archive_extension(),
        ))
    } else {
        None
    };

    if let Some(path) = &output {
        write_archive(&cache, &source, path)?;
    }

    if args.json {
        print_json(&FindOutput {
            distro: args.distro,
            package: &package,
            source: &source,
            output: output.as_deref(),
        })?;
    } else if let Some(path) = &output {
        println!("{}", path.display());
    } else {
        println!("{}", source);
    }

    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = srcfind_common::config::load(args.config).context("Failed to load config file")?;

    match args.subcommand {
        SubCommand::Find(find_args) => find(&config, find_args)?,
        SubCommand::Distros => {
            let mut stdout = io::stdout();
            for distro in Distro::iter() {
                if writeln!(stdout, "{}", distro.as_ref().green()).is_err() {
                    break;
                }
            }
        }
        SubCommand::Completions(completions) => args::gen_completions(&completions)?,
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let logging = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    env_logger::init_from_env(Env::default().default_filter_or(logging));

    if args.color {
        debug!("Bypass tty detection and always use colors");
        colored::control::set_override(true);
    }

    if let Err(err) = run(args) {
        if err.is::<SourceNotFound>() {
            debug!("{:#}", err);
            eprintln!("{}", "source not found".red());
            process::exit(255);
        }
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        process::exit(1);
    }
}
