//! `lng` - check, query and browse `.lng` resource files.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lng_config::Config;
use lng_engine::{Key, io, load_file};
use std::{
    path::{Path, PathBuf},
    process,
};

mod browse;

#[derive(Parser)]
#[command(name = "lng")]
#[command(version)]
#[command(about = "Translator-friendly .lng resource files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a resource file and report whether every string resolves
    Check {
        /// Resource file
        file: PathBuf,
    },

    /// Print the resolved text of one string
    Get {
        /// Resource file
        file: PathBuf,

        /// String name
        key: String,
    },

    /// Print every string name in a resource file
    List {
        /// Resource file
        file: PathBuf,

        /// Show translator comments next to the names
        #[arg(short, long)]
        comments: bool,
    },

    /// List languages available in a resources directory
    Languages {
        /// Resources directory (defaults to the configured one)
        dir: Option<PathBuf>,
    },

    /// Remember a resources directory (and language) in the config file
    Init {
        /// Resources directory
        dir: PathBuf,

        /// Language code to open with by default
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Browse strings interactively, switching languages with Tab
    Browse {
        /// Resources directory (defaults to the configured one)
        dir: Option<PathBuf>,

        /// Language code to open with
        #[arg(short, long)]
        language: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log lines would scribble over the TUI
    let default_level = match cli.command {
        Commands::Browse { .. } => log::LevelFilter::Warn,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::from_default_env()
        .filter_level(default_level)
        .init();

    match cli.command {
        Commands::Check { file } => check(&file),
        Commands::Get { file, key } => get(&file, &key),
        Commands::List { file, comments } => list(&file, comments),
        Commands::Languages { dir } => languages(dir),
        Commands::Init { dir, language } => {
            let config_path = Config::config_path();
            let config = init(&config_path, &dir, language)?;
            println!(
                "Saved {} to {}",
                config.resources_path.display(),
                config_path.display()
            );
            Ok(())
        }
        Commands::Browse { dir, language } => {
            let (resources_path, configured) = resources_dir(dir)?;
            browse::run(resources_path, language.or(configured))
        }
    }
}

fn check(file: &Path) -> Result<()> {
    match load_file(file) {
        Ok(store) => {
            println!("{}: {} strings OK", file.display(), store.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn get(file: &Path, key: &str) -> Result<()> {
    let store = load_file(file)?;
    let key = Key::new(key)?;
    match store.get(&key) {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn list(file: &Path, comments: bool) -> Result<()> {
    let store = load_file(file)?;
    for name in store.names() {
        match store.comment(name) {
            Some(comment) if comments => println!("{name}\t; {comment}"),
            _ => println!("{name}"),
        }
    }
    Ok(())
}

fn languages(dir: Option<PathBuf>) -> Result<()> {
    let (resources_path, _) = resources_dir(dir)?;
    let available = io::available_languages(&resources_path)?;
    if available.is_empty() {
        log::warn!("No .lng files in {}", resources_path.display());
    }
    for lang in available {
        println!("{}\t{}", lang.code, lang.name);
    }
    Ok(())
}

/// Writes a config pointing at `dir`, which must be a valid resources directory.
fn init(config_path: &Path, dir: &Path, language: Option<String>) -> Result<Config> {
    io::validate_resources_dir(dir)?;
    let dir = dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", dir.display()))?;

    let config = Config {
        resources_path: dir,
        language: language.map(|code| lng_engine::languages::normalize_code(&code)),
    };
    config
        .save_to_path(config_path)
        .context("Failed to save config file")?;
    Ok(config)
}

/// The directory given on the command line, or the one from the config file.
fn resources_dir(dir: Option<PathBuf>) -> Result<(PathBuf, Option<String>)> {
    let config_path = Config::config_path();
    log::debug!("Config path: {}", config_path.display());

    let (path, language, from_config) = match dir {
        Some(dir) => (dir, None, false),
        None => match Config::load().context("Failed to load config file")? {
            Some(config) => (config.resources_path, config.language, true),
            None => bail!(
                "No resources directory given and no config file found; create one at {}",
                config_path.display()
            ),
        },
    };

    if let Err(e) = io::validate_resources_dir(&path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        bail!("Resources path '{}'{source} is invalid: {e}", path.display());
    }

    Ok((path, language))
}
