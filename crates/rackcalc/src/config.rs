//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use rackcalc_core::constants::MAX_RACK_TOTAL;
use rackcalc_core::{RackError, RackInputs, RawInputs};

/// Report format for CLI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Work out how servers spread across racks.
///
/// Field values are read as text. By default each takes its leading number
/// and falls back to 0 (so "2U" is 2 and "abc" is 0); --strict rejects them.
#[derive(Parser, Debug)]
#[command(name = "rackcalc", version, about)]
pub struct AppConfig {
    /// Total servers to place.
    #[arg(
        short = 's',
        long,
        default_value = "",
        env = "RACKCALC_SERVERS",
        allow_hyphen_values = true
    )]
    pub servers: String,

    /// Rack units taken by one server.
    #[arg(
        short = 'u',
        long,
        default_value = "",
        env = "RACKCALC_SERVER_RU",
        allow_hyphen_values = true
    )]
    pub server_ru: String,

    /// Number of racks.
    #[arg(
        short = 'r',
        long,
        default_value = "",
        env = "RACKCALC_RACKS",
        allow_hyphen_values = true
    )]
    pub racks: String,

    /// Rack units available in one rack.
    #[arg(
        short = 'p',
        long,
        default_value = "",
        env = "RACKCALC_RU_PER_RACK",
        allow_hyphen_values = true
    )]
    pub ru_per_rack: String,

    /// Reject values that are not complete numbers.
    #[arg(long)]
    pub strict: bool,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List the server count of every rack.
    #[arg(short = 'd', long)]
    pub show_distribution: bool,

    /// Also write the report to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only the per-rack counts).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Launch the interactive form.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The four field values as given.
    #[must_use]
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs::new(
            self.servers.as_str(),
            self.server_ru.as_str(),
            self.racks.as_str(),
            self.ru_per_rack.as_str(),
        )
    }

    /// Coerce the field values using the configured policy.
    pub fn inputs(&self) -> Result<RackInputs, RackError> {
        let raw = self.raw_inputs();
        let inputs = if self.strict {
            raw.to_inputs_strict()?
        } else {
            raw.to_inputs_lenient()
        };

        if inputs.rack_total > MAX_RACK_TOTAL {
            return Err(RackError::Config(format!(
                "rack total {} exceeds the supported maximum of {MAX_RACK_TOTAL}",
                inputs.rack_total
            )));
        }
        Ok(inputs)
    }

    /// Reject flag combinations that make no sense together.
    pub fn validate(&self) -> Result<(), RackError> {
        if self.tui && self.output.is_some() {
            return Err(RackError::Config(
                "--output cannot be combined with --tui".to_string(),
            ));
        }
        if self.tui && self.format == OutputFormat::Json {
            return Err(RackError::Config(
                "--format json cannot be combined with --tui".to_string(),
            ));
        }
        Ok(())
    }
}
