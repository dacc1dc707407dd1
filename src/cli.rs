use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_DIR;
use crate::scenario::ScenarioInput;

#[derive(Parser, Debug)]
#[command(name = "roicalc")]
#[command(about = "Tier pricing and ROI calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding tiers.csv, shipping.csv and global_settings.csv
    #[arg(long, global = true, env = "ROICALC_CONFIG_DIR", default_value = DEFAULT_CONFIG_DIR)]
    pub config_dir: PathBuf,

    /// Session overrides (TOML) applied on top of the loaded catalogs
    #[arg(long, global = true)]
    pub overrides: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colors and emoji
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute ROI for one tier and order
    Calculate {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Append a comparison of every tier under the same order
        #[arg(long)]
        compare: bool,

        /// Output format (inferred from --output extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare every tier under one order
    Compare {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output format (inferred from --output extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List tiers and shipping options
    Tiers {
        /// Output format (inferred from --output extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a starter configuration directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Target directory (defaults to --config-dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

/// Order inputs shared by `calculate` and `compare`.
#[derive(Args, Debug, Clone, Default)]
pub struct ScenarioArgs {
    /// Tier name (defaults to the first tier)
    #[arg(short, long)]
    pub tier: Option<String>,

    /// Number of cases ordered (defaults to the tier's minimum)
    #[arg(short, long)]
    pub cases: Option<u32>,

    /// Price charged per treatment (defaults to the tier's default price)
    #[arg(short, long, allow_negative_numbers = true)]
    pub price: Option<f64>,

    /// Other cost per treatment (defaults to the tier's default)
    #[arg(long, allow_negative_numbers = true)]
    pub extra_cost: Option<f64>,

    /// Shipping option name (defaults to the first option)
    #[arg(short, long)]
    pub shipping: Option<String>,
}

impl From<ScenarioArgs> for ScenarioInput {
    fn from(args: ScenarioArgs) -> Self {
        Self {
            tier: args.tier,
            num_cases: args.cases,
            price_per_tx: args.price,
            extra_cost_per_tx: args.extra_cost,
            shipping: args.shipping,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}
