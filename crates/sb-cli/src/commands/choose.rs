use colored::Colorize;
use sb_core::Catalog;
use sb_oracle::{Reader, ReaderConfig};

use super::Store;

pub fn run(
    store: &Store,
    charms: &[String],
    question: &str,
    seed: Option<u64>,
    save: bool,
) -> Result<(), String> {
    let mut config = ReaderConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut reader = Reader::new(Catalog::standard(), config);
    let reading = reader
        .read_chosen(question, charms)
        .map_err(|e| e.to_string())?;

    super::print_reading(&reading);

    if save {
        let record = store.save_reading(&reading, reader.config().history_capacity)?;
        println!(
            "  Saved as {} [{}]",
            record.name.bold(),
            record.short_id()
        );
    }

    Ok(())
}
