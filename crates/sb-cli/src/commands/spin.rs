use colored::Colorize;
use sb_core::Catalog;
use sb_oracle::{Reader, ReaderConfig};

use super::Store;

pub fn run(store: &Store, seed: Option<u64>) -> Result<(), String> {
    let mut config = ReaderConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut reader = Reader::new(Catalog::standard(), config);

    let mut spins = store.load_spins()?;
    let today = sb_oracle::lunar::today();
    let record = reader
        .spin(today, spins.last_date())
        .map_err(|e| e.to_string())?;

    println!(
        "  {} {}",
        format!("[{}]", record.fortune.category).dimmed(),
        record.fortune.text.bold()
    );

    spins.push(record);
    store.save_spins(&spins)?;

    Ok(())
}
