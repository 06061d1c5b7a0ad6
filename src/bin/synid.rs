//! synid command line tool
//!
//! ## Usage
//!
//! ```bash
//! synid generate --prefix api --shard eu1 --length 15 --encoding base62
//! synid generate --no-shard --count 5
//! synid decode api-usr-20240305123045-eu1-3f9a0c1b-1111
//! ```

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use synid::{Encoding, IdConfig, SynId, decode_id};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "synid", version, about = "Generate and decode synid identifiers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate identifiers
    Generate(GenerateArgs),
    /// Decode identifiers into JSON records
    Decode {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Debug, Args)]
struct GenerateArgs {
    #[arg(long, default_value = "")]
    prefix: String,
    #[arg(long = "type", default_value = "usr")]
    id_type: String,
    #[arg(long, default_value = "")]
    shard: String,
    /// Leave the shard segment out
    #[arg(long)]
    no_shard: bool,
    /// Leave the timestamp segment out
    #[arg(long)]
    no_timestamp: bool,
    /// Characters in the random segment
    #[arg(long, default_value_t = 8)]
    length: usize,
    /// hex, base64url or base62
    #[arg(long, default_value = "hex")]
    encoding: Encoding,
    #[arg(long, default_value_t = 1)]
    count: usize,
}

impl From<GenerateArgs> for IdConfig {
    fn from(args: GenerateArgs) -> Self {
        IdConfig {
            prefix: args.prefix,
            id_type: args.id_type,
            include_timestamp: !args.no_timestamp,
            shard: args.shard,
            include_shard: !args.no_shard,
            random_length: args.length,
            encoding: args.encoding,
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate(args) => cmd_generate(args),
        Command::Decode { ids } => cmd_decode(&ids),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_generate(args: GenerateArgs) -> Result<(), synid::BoxDynError> {
    let count = args.count;
    let generator = SynId::from_config(args.into())?;
    for _ in 0..count {
        println!("{}", generator.next_id()?);
    }
    Ok(())
}

fn cmd_decode(ids: &[String]) -> Result<(), synid::BoxDynError> {
    for id in ids {
        let decoded = decode_id(id)?;
        println!("{}", serde_json::to_string(&decoded)?);
    }
    Ok(())
}
