use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pirenea_core::setup::SetupCode;

mod commands;
mod interactive;

#[derive(Parser, Debug)]
#[command(
    name = "pirenea-files",
    version,
    about = "Batch prefix tagging for PIRENEA acquisition files"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Init {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
    Add {
        #[arg(long)]
        root: Option<PathBuf>,
        code: SetupCode,
    },
    Remove {
        #[arg(long)]
        root: Option<PathBuf>,
        code: SetupCode,
    },
    Scan {
        #[arg(long)]
        root: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    Config {
        #[arg(long)]
        print: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => interactive::run(cli.config),
        Some(Commands::Init { path, force }) => init_config(path, force),
        Some(Commands::Add { root, code }) => commands::rename::execute(
            cli.config,
            commands::rename::RenameAction::Add { root, code },
        ),
        Some(Commands::Remove { root, code }) => commands::rename::execute(
            cli.config,
            commands::rename::RenameAction::Remove { root, code },
        ),
        Some(Commands::Scan { root, json }) => commands::scan::execute(cli.config, root, json),
        Some(Commands::Config { print }) => {
            if print {
                commands::config::print_effective(cli.config)
            } else {
                Ok(())
            }
        }
    }
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let paths = pirenea_core::config::ConfigPaths::resolve()?;
    let config_path = path.unwrap_or(paths.config_path);
    if config_path.exists() && !force {
        return Err(anyhow::anyhow!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
    }
    let config = pirenea_core::config::Config::default_config();
    config.save(&config_path)?;
    println!("Config written to {}", config_path.display());
    Ok(())
}
