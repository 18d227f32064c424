use std::collections::BTreeSet;

use anyhow::{Context, Result};
use booking_engine::{parse_date, BookingSession, TherapistId};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod render;
mod source;

use render::Format;
use source::{source_for, DEFAULT_SOURCE};

#[derive(Parser)]
#[command(name = "booking", about = "Browse and filter therapist availability")]
struct Cli {
    /// Roster location: an http(s) URL or a path to a JSON file
    #[arg(long, global = true, default_value = DEFAULT_SOURCE)]
    source: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the therapists, dates, hour blocks and durations to choose from
    Options,
    /// Show bookable slots for the chosen filters
    Resolve {
        /// Therapist id (repeatable, at most 5)
        #[arg(short, long = "therapist", value_name = "ID")]
        therapists: Vec<TherapistId>,

        /// Calendar date, YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,

        /// Hour block start, 9-16 (repeatable)
        #[arg(long = "hour", value_name = "HOUR")]
        hours: Vec<u32>,

        /// Appointment length in minutes
        #[arg(long, default_value_t = 30)]
        duration: u32,

        /// Also list therapists with no matching slots
        #[arg(long)]
        show_empty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = source_for(&cli.source);
    let mut session = BookingSession::from_load(source.fetch().await);
    tracing::info!(
        source = %source.describe(),
        therapists = session.roster().len(),
        "roster ready"
    );

    let output = match cli.command {
        Commands::Options => render::options(session.options(), cli.format)?,
        Commands::Resolve {
            therapists,
            date,
            hours,
            duration,
            show_empty,
        } => {
            let selection = session.selection_mut();
            selection
                .set_therapists(therapists)
                .context("invalid --therapist")?;
            if let Some(date) = date {
                selection.select_date(parse_date(&date).context("invalid --date")?);
            }
            // Repeating an hour on the command line selects it once.
            for hour in hours.into_iter().collect::<BTreeSet<_>>() {
                selection.toggle_hour_block(hour).context("invalid --hour")?;
            }
            selection
                .select_duration(duration)
                .context("invalid --duration")?;

            if !session.resolve() {
                eprintln!("Choose at least one therapist with --therapist <ID>.");
                return Ok(());
            }
            match session.result() {
                Some(result) => render::result(result, cli.format, show_empty)?,
                None => String::new(),
            }
        }
    };

    print!("{output}");
    Ok(())
}
