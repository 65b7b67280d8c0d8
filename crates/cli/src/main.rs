mod config;

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::{Parser, Subcommand};
use prost::Message;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vuuid::{pb, ValidatedUuid};

use config::{CliConfig, UuidVersion};

#[derive(Parser)]
#[command(name = "vuuid")]
#[command(about = "Generate and validate non-nil UUIDs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate new identifiers
    New {
        /// How many identifiers to generate
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Generator to use (defaults to VUUID_DEFAULT_VERSION, then v4)
        #[arg(long = "uuid-version", value_enum)]
        version: Option<UuidVersion>,
    },
    /// Validate an identifier
    Check {
        /// Identifier to validate
        uuid: String,
    },
    /// Print an identifier as a JSON string
    Json {
        /// Identifier to convert
        uuid: String,
    },
    /// Print an identifier as a base64-encoded protobuf message
    Proto {
        /// Identifier to convert
        uuid: String,
    },
    /// Decode a base64-encoded protobuf message
    DecodeProto {
        /// Base64 of an encoded `vuuid.v1.Uuid` message
        message: String,
    },
}

/// Runs one command and returns the lines to print.
fn run(command: Commands, config: &CliConfig) -> anyhow::Result<Vec<String>> {
    match command {
        Commands::New { count, version } => {
            let version = version.unwrap_or(config.default_version());
            tracing::debug!("generating {} {:?} identifier(s)", count, version);
            Ok((0..count)
                .map(|_| match version {
                    UuidVersion::V4 => ValidatedUuid::new(),
                    UuidVersion::V7 => ValidatedUuid::new_v7(),
                })
                .map(|uuid| uuid.to_string())
                .collect())
        }
        Commands::Check { uuid } => {
            let parsed = parse_input(&uuid)?;
            Ok(vec![format!("ok: {}", parsed)])
        }
        Commands::Json { uuid } => {
            let parsed = parse_input(&uuid)?;
            Ok(vec![serde_json::to_string(&parsed)?])
        }
        Commands::Proto { uuid } => {
            let message = parse_input(&uuid)?.to_proto()?;
            Ok(vec![STANDARD.encode(message.encode_to_vec())])
        }
        Commands::DecodeProto { message } => {
            let bytes = STANDARD
                .decode(message.trim())
                .context("message is not valid base64")?;
            let decoded =
                pb::Uuid::decode(bytes.as_slice()).context("message is not a vuuid.v1.Uuid")?;
            let uuid = ValidatedUuid::from_proto(Some(&decoded))?;
            Ok(vec![uuid.to_string()])
        }
    }
}

fn parse_input(input: &str) -> anyhow::Result<ValidatedUuid> {
    ValidatedUuid::parse(input).with_context(|| format!("'{}' is not a valid identifier", input))
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("vuuid=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CliConfig::from_env()?;
    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            for line in run(command, &config)? {
                println!("{}", line);
            }
        }
        None => {
            println!("Use 'vuuid --help' for commands");
        }
    }

    Ok(())
}
