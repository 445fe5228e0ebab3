//! Command-line surface (clap derive)
//!
//! Global flags (`--config`, `--url`, `--timeout-secs`, `--plot-out`,
//! `--json`) apply to both subcommands; `thalassemia` and `hemophilia`
//! carry the form fields and pedigree flags for their calculator.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "risk_cli", version, about = "Heredity genetic risk calculator CLI")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(long, global = true, help = "JSON config file (base_url, timeout_secs, busy_label)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Calculation service base URL")]
    pub url: Option<String>,

    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    #[arg(long, global = true, help = "Where to write the plot image when the service returns one")]
    pub plot_out: Option<PathBuf>,

    #[arg(long, global = true, default_value_t = false, help = "Print the request body and exit without calling the service")]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Autosomal recessive risk from populations, relation and family history
    Thalassemia(ThalassemiaArgs),
    /// X-linked recessive risk from the mother's status and the father's
    Hemophilia(HemophiliaArgs),
}

#[derive(Debug, Args)]
pub struct ThalassemiaArgs {
    #[arg(long, default_value = "south_asian")]
    pub mother_population: String,

    #[arg(long, default_value = "south_asian")]
    pub father_population: String,

    #[arg(long, default_value = "unrelated", help = "unrelated|second_cousins|first_cousins")]
    pub relation: String,

    #[arg(long, default_value_t = false)]
    pub male_affected: bool,

    #[arg(long, default_value_t = false)]
    pub female_affected: bool,

    #[arg(long, default_value_t = 0, help = "Number of affected grandparents (0-4)")]
    pub ancestors: usize,
}

#[derive(Debug, Args)]
pub struct HemophiliaArgs {
    #[arg(long, default_value = "none", help = "none|suspected|confirmed")]
    pub mother_carrier: String,

    #[arg(long, default_value = "none", help = "none|one_generation|multiple_generations")]
    pub mother_history: String,

    #[arg(long, default_value = "south_asian")]
    pub mother_population: String,

    #[arg(long, default_value = "not_affected", help = "affected|not_affected")]
    pub father_affected: String,
}
