use colored::Colorize;
use sb_core::Catalog;
use sb_oracle::lunar::phase_name;
use sb_oracle::{Reader, ReaderConfig, ReadingStyle};

use super::Store;

pub struct CastArgs {
    pub question: String,
    pub seed: Option<u64>,
    pub count: usize,
    pub style: Option<String>,
    pub lunar_phase: Option<u32>,
    pub save: bool,
    pub name: Option<String>,
}

pub fn run(store: &Store, args: &CastArgs) -> Result<(), String> {
    let mut config = ReaderConfig::default().with_draw_count(args.count);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(style) = &args.style {
        let style = ReadingStyle::parse(style).ok_or_else(|| {
            format!("unknown style: \"{style}\". Use: direct, mystical, practical, poetic")
        })?;
        config = config.with_style(style);
    }
    if let Some(phase) = args.lunar_phase {
        config = config.with_lunar_phase(phase);
    }

    let mut reader = Reader::new(Catalog::standard(), config);
    let phase = reader.current_lunar_phase();
    let mut reading = reader.cast(&args.question).map_err(|e| e.to_string())?;
    reading.name = args.name.clone();

    println!("  {} ({phase})", phase_name(phase).dimmed());
    super::print_reading(&reading);

    if args.save {
        let record = store.save_reading(&reading, reader.config().history_capacity)?;
        println!(
            "  Saved as {} [{}]",
            record.name.bold(),
            record.short_id()
        );
    }

    Ok(())
}
