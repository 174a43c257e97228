use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for the `tickid` binary.
///
/// Region and machine default to the random tags the process-wide generator
/// picks on first use. When given, they are applied through the generator's
/// bounded setters before any identifier is created.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tickid",
    version,
    about = "Generate, inspect, and validate 96-bit tick identifiers"
)]
pub struct CliArgs {
    /// Region tag stamped on generated identifiers (0..=255).
    ///
    /// Environment variable: `TICKID_REGION`
    #[arg(
        long,
        global = true,
        env = "TICKID_REGION",
        allow_negative_numbers = true
    )]
    pub region: Option<i32>,

    /// Machine tag stamped on generated identifiers (0..=512).
    ///
    /// Environment variable: `TICKID_MACHINE`
    #[arg(
        long,
        global = true,
        env = "TICKID_MACHINE",
        allow_negative_numbers = true
    )]
    pub machine: Option<i32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print newly generated identifiers, one per line
    Generate {
        /// Number of identifiers to print.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Output encoding.
        #[arg(short, long, value_enum, default_value_t = Format::Compact)]
        format: Format,
    },
    /// Decode an identifier and print its fields
    Inspect {
        /// A 24 character hex or 16 character compact identifier.
        id: String,
    },
    /// Check one or more identifiers; exits non-zero if any is invalid
    Validate {
        /// Identifiers to check.
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// 16 characters from `0-9a-zA-Z-_`
    #[default]
    Compact,
    /// 24 lowercase hex characters
    Hex,
    /// The 12 raw bytes, `0x`-prefixed
    Bytes,
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub region: Option<i32>,
    pub machine: Option<i32>,
    pub command: Command,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if let Command::Generate { count: 0, .. } = args.command {
            bail!("--count must be greater than 0");
        }

        Ok(Self {
            region: args.region,
            machine: args.machine,
            command: args.command,
        })
    }
}
