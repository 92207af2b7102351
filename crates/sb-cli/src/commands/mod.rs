pub mod cast;
pub mod charms;
pub mod choose;
pub mod combos;
pub mod history;
pub mod houses;
pub mod spin;

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use serde::de::DeserializeOwned;

use sb_oracle::{DrawnReading, ReadingHistory, ReadingRecord, SpinLog};

/// Per-user JSON files under the data directory.
pub struct Store {
    dir: PathBuf,
    user: String,
}

impl Store {
    pub fn new(dir: PathBuf, user: &str) -> Self {
        let user = user
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        Self { dir, user }
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(format!("readings-{}.json", self.user))
    }

    pub fn spin_path(&self) -> PathBuf {
        self.dir.join(format!("spin-{}.json", self.user))
    }

    pub fn load_history(&self) -> Result<ReadingHistory, String> {
        Ok(read_json(&self.history_path())?.unwrap_or_default())
    }

    pub fn save_history(&self, history: &ReadingHistory) -> Result<(), String> {
        write_json(&self.history_path(), history)
    }

    pub fn load_spins(&self) -> Result<SpinLog, String> {
        Ok(read_json(&self.spin_path())?.unwrap_or_default())
    }

    pub fn save_spins(&self, spins: &SpinLog) -> Result<(), String> {
        write_json(&self.spin_path(), spins)
    }

    /// Remove this user's readings and spins. Returns how many files existed.
    pub fn clear(&self) -> Result<usize, String> {
        let mut removed = 0;
        for path in [self.history_path(), self.spin_path()] {
            if path.exists() {
                fs::remove_file(&path)
                    .map_err(|e| format!("cannot remove {}: {e}", path.display()))?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Append a reading to history, trimmed to `capacity`, and write it back.
    pub fn save_reading(
        &self,
        reading: &DrawnReading,
        capacity: usize,
    ) -> Result<ReadingRecord, String> {
        let mut history = self.load_history()?;
        history.set_capacity(capacity);
        let record = ReadingRecord::from_reading(reading);
        history.save(record.clone());
        self.save_history(&history)?;
        Ok(record)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| format!("corrupt data in {}: {e}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("cannot create {}: {e}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    fs::write(path, json).map_err(|e| format!("cannot write to {}: {e}", path.display()))
}

/// Print a drawn reading: the wheel, any combinations, and the text.
fn print_reading(reading: &DrawnReading) {
    if !reading.question.is_empty() {
        println!("  {} {}", "Question:".bold(), reading.question);
        println!();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["House", "Keyword", "Charm", "Rarity", "Category"]);
    for placement in reading.placements() {
        let keyword = reading
            .house(placement.house)
            .map(|h| h.display_keyword().to_string())
            .unwrap_or_default();
        table.add_row(vec![
            placement.house.to_string(),
            keyword,
            placement.charm.name.clone(),
            placement.charm.rarity.to_string(),
            placement.charm.category.to_string(),
        ]);
    }
    println!("{table}");
    println!();

    if !reading.combinations.is_empty() {
        println!("  {}", "Combinations".bold());
        for combo in &reading.combinations {
            println!(
                "  {} ({}): {}",
                combo.name.yellow(),
                combo.rarity,
                combo.description
            );
        }
        println!();
    }

    println!(
        "  {} [{} · {}]",
        "Reading".bold(),
        reading.synopsis.style,
        reading.synopsis.dominant
    );
    println!("  {}", reading.synopsis.text);
    println!();
}
