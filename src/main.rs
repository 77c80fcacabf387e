use clap::{Parser, Subcommand};
use libdms::{format::FormatOptions, version, Coordinate, Notation};
use std::error::Error;

#[derive(Parser)]
#[command(
    name = version::NAME,
    version = version::VERSION,
    about = "Convert coordinates between decimal degrees and DMS/DMM text"
)]
struct CliArgs {
    /// Print debug logs to stderr. RUST_LOG takes precedence when set.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a coordinate pair (latitude first) and print it as decimal degrees.
    Parse {
        text: String,

        /// Print a JSON `[longitude, latitude]` array instead of plain text.
        #[arg(long)]
        json: bool,
    },

    /// Format a longitude/latitude pair as text.
    #[command(allow_negative_numbers = true)]
    Format {
        longitude: f64,
        latitude: f64,

        /// Format template. Tokens: DD dd D d MM mm M m ss s - X
        #[arg(short, long, default_value = libdms::DEFAULT_FORMAT)]
        format: String,

        /// Decimal places for decimal degrees, minutes and seconds.
        #[arg(short = 'p', long)]
        decimal_places: Option<usize>,

        /// Text placed between the latitude and the longitude.
        #[arg(short, long)]
        separator: Option<String>,
    },

    /// Print the notation a coordinate pair is written in: dms, dmm or unknown.
    Classify { text: String },
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Parse { text, json } => {
            let coord = libdms::parse(&text)?;
            if json {
                println!("{}", serde_json::to_string(&coord)?);
            } else {
                println!("{} {}", coord.longitude, coord.latitude);
            }
        }

        Command::Format {
            longitude,
            latitude,
            format,
            decimal_places,
            separator,
        } => {
            let defaults = FormatOptions::default();
            let options = FormatOptions {
                decimal_places: decimal_places.unwrap_or(defaults.decimal_places),
                lat_lon_separator: separator.unwrap_or(defaults.lat_lon_separator),
            };
            tracing::debug!(?options, format = format.as_str(), "formatting coordinate");

            let text = Coordinate::new(longitude, latitude).to_dms(Some(&format), &options)?;
            println!("{}", text);
        }

        Command::Classify { text } => {
            let name = Notation::detect(&text).map_or("unknown", |n| n.name());
            println!("{}", name);
        }
    }

    Ok(())
}
