// src/main.rs
//
// Interactive Black-Scholes form. Reads the five market parameters from stdin,
// prices them once per cycle and prints the call and put prices.

use std::io;

use anyhow::Result;
use bs_pricer::{default_forms, FormConfig, FormShell};
use clap::{Parser, ValueEnum};
use log::info;

/// Built-in form layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// T up to 10 years, r and sigma in [0, 1]
    Standard,
    /// T up to 30 years, r from -0.05, sigma up to 2
    Wide,
}

impl Preset {
    fn config(self) -> FormConfig {
        match self {
            Preset::Standard => default_forms::standard(),
            Preset::Wide => default_forms::wide(),
        }
    }
}

#[derive(Parser)]
#[command(name = "bs-pricer")]
#[command(about = "Black-Scholes European option pricing form")]
struct Args {
    /// Path to form configuration file (TOML); overrides --preset
    #[arg(long, short)]
    config: Option<String>,

    /// Built-in form layout
    #[arg(long, value_enum, default_value_t = Preset::Standard)]
    preset: Preset,

    /// Print the default form configuration and exit
    #[arg(long)]
    generate_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.generate_config {
        println!("{}", FormConfig::default().to_toml_string()?);
        return Ok(());
    }

    let config = match args.config {
        Some(path) => FormConfig::load(&path)?,
        None => args.preset.config(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = FormShell::new(config, stdin.lock(), stdout.lock());
    let priced = shell.run()?;
    info!("Priced {} requests", priced);
    Ok(())
}
