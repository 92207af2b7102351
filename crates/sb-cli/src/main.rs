//! CLI frontend for the Starboard reading engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "starboard",
    about = "Starboard: cast charms onto the twelve houses and read what they say",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory for saved readings and spins
    #[arg(long, global = true, default_value = ".starboard")]
    data_dir: PathBuf,

    /// Name used to keep one person's history apart from another's
    #[arg(long, global = true, default_value = "default")]
    user: String,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a full reading of twelve charms
    Cast {
        /// Question to ask (optional)
        question: Option<String>,

        /// RNG seed for a reproducible reading
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of charms to draw
        #[arg(short, long, default_value = "12")]
        count: usize,

        /// Reading style: direct, mystical, practical, poetic
        #[arg(long)]
        style: Option<String>,

        /// Lunar phase 0-29 (default: derived from today's date)
        #[arg(long)]
        lunar_phase: Option<u32>,

        /// Save the reading to history
        #[arg(long)]
        save: bool,

        /// Display name for the saved reading
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Read up to three charms of your own choosing
    Choose {
        /// Charm ids or names
        #[arg(required = true)]
        charms: Vec<String>,

        /// Question to ask
        #[arg(short, long, default_value = "")]
        question: String,

        /// RNG seed for reproducible text
        #[arg(short, long)]
        seed: Option<u64>,

        /// Save the reading to history
        #[arg(long)]
        save: bool,
    },

    /// List the charm catalog
    Charms {
        /// Filter by rarity: common, uncommon, rare
        #[arg(short, long)]
        rarity: Option<String>,

        /// Filter by category: growth, challenges, opportunities, transitions, insights
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the twelve houses, optionally relabelled for a question
    Houses {
        /// Question used to pick house keywords
        #[arg(short, long)]
        question: Option<String>,
    },

    /// List the charm combinations
    Combos {
        /// Only combinations that need this charm (id or name)
        #[arg(short, long)]
        charm: Option<String>,
    },

    /// Manage saved readings
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },

    /// Spin the daily fortune wheel
    Spin {
        /// RNG seed for a reproducible spin
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// List saved readings
    List,

    /// Show a saved reading
    Show {
        /// Reading id or id prefix
        id: String,
    },

    /// Rename a saved reading
    Rename {
        /// Reading id or id prefix
        id: String,

        /// New display name
        name: String,
    },

    /// Delete a saved reading
    Delete {
        /// Reading id or id prefix
        id: String,
    },

    /// Export all saved readings (json also includes spins)
    Export {
        /// Output format: md, text, json
        #[arg(short, long, default_value = "md")]
        format: String,
    },

    /// List past lucky spins
    Spins,

    /// Show reading totals, favourite charms, and the daily streak
    Stats,

    /// Delete every saved reading and spin for this user
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = commands::Store::new(cli.data_dir, &cli.user);

    let result = match cli.command {
        Commands::Cast {
            question,
            seed,
            count,
            style,
            lunar_phase,
            save,
            name,
        } => commands::cast::run(
            &store,
            &commands::cast::CastArgs {
                question: question.unwrap_or_default(),
                seed,
                count,
                style,
                lunar_phase,
                save,
                name,
            },
        ),
        Commands::Choose {
            charms,
            question,
            seed,
            save,
        } => commands::choose::run(&store, &charms, &question, seed, save),
        Commands::Charms { rarity, category } => {
            commands::charms::run(rarity.as_deref(), category.as_deref())
        }
        Commands::Houses { question } => commands::houses::run(question.as_deref()),
        Commands::Combos { charm } => commands::combos::run(charm.as_deref()),
        Commands::History { action } => match action {
            HistoryCommand::List => commands::history::list(&store),
            HistoryCommand::Show { id } => commands::history::show(&store, &id),
            HistoryCommand::Rename { id, name } => commands::history::rename(&store, &id, &name),
            HistoryCommand::Delete { id } => commands::history::delete(&store, &id),
            HistoryCommand::Export { format } => commands::history::export(&store, &format),
            HistoryCommand::Spins => commands::history::spins(&store),
            HistoryCommand::Stats => commands::history::stats(&store),
            HistoryCommand::Clear { yes } => commands::history::clear(&store, yes),
        },
        Commands::Spin { seed } => commands::spin::run(&store, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
