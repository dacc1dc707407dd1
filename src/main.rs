use anyhow::Result;
use clap::Parser;
use roicalc::cli::{Cli, Commands};
use roicalc::commands::{CalculateConfig, CompareConfig, TiersConfig};
use roicalc::formatting::{ColorMode, EmojiMode, FormattingConfig};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    roicalc::observability::init_logging(cli.verbosity);

    let formatting_config = create_formatting_config(cli.plain);

    match cli.command {
        Commands::Calculate {
            scenario,
            compare,
            format,
            output,
        } => roicalc::commands::handle_calculate(CalculateConfig {
            config_dir: cli.config_dir,
            overrides: cli.overrides,
            input: scenario.into(),
            compare,
            format,
            output,
            formatting_config,
        }),
        Commands::Compare {
            scenario,
            format,
            output,
        } => roicalc::commands::handle_compare(CompareConfig {
            config_dir: cli.config_dir,
            overrides: cli.overrides,
            input: scenario.into(),
            format,
            output,
            formatting_config,
        }),
        Commands::Tiers { format, output } => roicalc::commands::handle_tiers(TiersConfig {
            config_dir: cli.config_dir,
            overrides: cli.overrides,
            format,
            output,
            formatting_config,
        }),
        Commands::Init { force, dir } => {
            let dir = dir.unwrap_or(cli.config_dir);
            roicalc::commands::init_config(&dir, force)
        }
    }
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never, EmojiMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
