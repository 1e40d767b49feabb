use clap::{Parser, Subcommand};
use review_events::export::json::{export_json_to_path, import_json};
use review_events::{Card, Config, ReviewEvent, ReviewStore, ServerClock};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "review-events")]
#[command(version, about = "Record and inspect flashcard review history", long_about = None)]
struct Args {
    /// SQLite database file (overrides REVIEW_EVENTS_DB)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Difference between server and local time in milliseconds
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    server_offset: i64,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record one review of a card
    Record {
        #[arg(long)]
        card: String,
        /// Level of the card before the review
        #[arg(long, default_value = review_events::models::card::DEFAULT_LEVEL)]
        level: String,
        /// User reply, Y or N
        #[arg(long)]
        reply: String,
    },
    /// Show the review history of a card
    List {
        #[arg(long)]
        card: String,
    },
    /// Write the review history of a card to a JSON file
    Export {
        #[arg(long)]
        card: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Load review events from a JSON file
    Import {
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete the review history of a card
    Delete {
        #[arg(long)]
        card: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().with_db_path(args.db);
    let mut store = ReviewStore::open(&config.db_path)?;
    let clock = ServerClock::new();
    clock.set_offset(args.server_offset);

    match args.command {
        Command::Record { card, level, reply } => {
            let card = Card::reference(card).with_level(level);
            let mut event = ReviewEvent::with_level_of(&card, &clock);
            event.set_reply(reply);
            let client_time = event.timestamp();

            store.save(&mut event, &clock)?;
            info!(?client_time, server_time = ?event.timestamp(), "recorded review");
            println!("{}", event);
        }
        Command::List { card } => {
            let events = store.list_for_card(&card)?;
            println!("{} review(s) for card '{}'", events.len(), card);
            for event in &events {
                println!("  - {}", event);
            }
        }
        Command::Export { card, out } => {
            let events = store.list_for_card(&card)?;
            export_json_to_path(&events, &out)?;
            println!("Exported {} review(s) to '{}'", events.len(), out.display());
        }
        Command::Import { file } => {
            let events = import_json(&file)?;
            store.restore_all(&events)?;
            println!("Imported {} review(s) from '{}'", events.len(), file.display());
        }
        Command::Delete { card } => {
            let deleted = store.delete_for_card(&card)?;
            println!("Deleted {} review(s) for card '{}'", deleted, card);
        }
    }

    Ok(())
}
