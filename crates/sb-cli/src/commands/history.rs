use chrono::{DateTime, Utc};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use sb_core::Catalog;
use sb_oracle::{HistoryStats, ReadingRecord, SpinRecord};

use super::Store;

/// Everything stored for one user, as written by `export --format json`.
#[derive(Serialize)]
struct UserExport<'a> {
    readings: Vec<&'a ReadingRecord>,
    spins: Vec<&'a SpinRecord>,
    exported_at: DateTime<Utc>,
}

pub fn list(store: &Store) -> Result<(), String> {
    let history = store.load_history()?;
    if history.is_empty() {
        println!("  No saved readings.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Date", "Question", "Charms"]);
    for record in history.iter() {
        let question = if record.question.is_empty() {
            "—".to_string()
        } else if record.question.chars().count() > 40 {
            let short: String = record.question.chars().take(37).collect();
            format!("{short}...")
        } else {
            record.question.clone()
        };
        table.add_row(vec![
            record.short_id(),
            record.name.clone(),
            record.date.format("%Y-%m-%d %H:%M").to_string(),
            question,
            record.charms.len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} readings", history.len());

    Ok(())
}

pub fn show(store: &Store, id: &str) -> Result<(), String> {
    let history = store.load_history()?;
    let id = history.resolve(id).map_err(|e| e.to_string())?;
    let record = history
        .get(id)
        .ok_or_else(|| format!("reading not found: {id}"))?;

    println!("  {} [{}]", record.name.bold(), record.short_id().dimmed());
    println!("  {}", record.date.format("%Y-%m-%d %H:%M UTC"));
    println!();
    if !record.question.is_empty() {
        println!("  {} {}", "Question:".bold(), record.question);
    }
    let charms: Vec<&str> = record.charms.iter().map(|c| c.as_str()).collect();
    println!("  {} {}", "Charms:".bold(), charms.join(", "));
    if !record.combinations.is_empty() {
        println!(
            "  {} {}",
            "Combinations:".bold(),
            record.combinations.join(", ").yellow()
        );
    }
    println!();
    println!("  {}", record.interpretation);

    Ok(())
}

pub fn rename(store: &Store, id: &str, name: &str) -> Result<(), String> {
    let mut history = store.load_history()?;
    let id = history.resolve(id).map_err(|e| e.to_string())?;
    history.rename(id, name).map_err(|e| e.to_string())?;
    store.save_history(&history)?;
    println!("  Renamed to {}", name.bold());
    Ok(())
}

pub fn delete(store: &Store, id: &str) -> Result<(), String> {
    let mut history = store.load_history()?;
    let id = history.resolve(id).map_err(|e| e.to_string())?;
    let removed = history.delete(id).map_err(|e| e.to_string())?;
    store.save_history(&history)?;
    println!("  Deleted {}", removed.name.bold());
    Ok(())
}

pub fn export(store: &Store, format: &str) -> Result<(), String> {
    let history = store.load_history()?;
    let content = match format {
        "markdown" | "md" => history.export_markdown(),
        "text" | "txt" => history.export_text(),
        "json" => {
            let spins = store.load_spins()?;
            let export = UserExport {
                readings: history.iter().collect(),
                spins: spins.iter().collect(),
                exported_at: Utc::now(),
            };
            serde_json::to_string_pretty(&export)
                .map_err(|e| format!("JSON serialization error: {e}"))?
        }
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: md, text, json"
            ));
        }
    };
    print!("{content}");
    Ok(())
}

pub fn spins(store: &Store) -> Result<(), String> {
    let spins = store.load_spins()?;
    if spins.is_empty() {
        println!("  No spins yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Date", "Category", "Fortune"]);
    for record in spins.iter() {
        table.add_row(vec![
            record.date.to_string(),
            record.fortune.category.to_string(),
            record.fortune.text.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} spins", spins.len());

    Ok(())
}

pub fn stats(store: &Store) -> Result<(), String> {
    let history = store.load_history()?;
    let spins = store.load_spins()?;
    let stats = HistoryStats::compute(&history, Utc::now().date_naive());
    let catalog = Catalog::standard();

    println!("  {} {}", "Readings:".bold(), stats.total_readings);
    println!("  {} {}", "Spins:".bold(), spins.len());
    println!("  {} {} days", "Streak:".bold(), stats.streak_days);
    if !stats.favorite_charms.is_empty() {
        let favorites: Vec<String> = stats
            .favorite_charms
            .iter()
            .map(|(id, count)| {
                let name = catalog.charm(id).map_or(id.as_str(), |c| c.name.as_str());
                format!("{name} ({count})")
            })
            .collect();
        println!("  {} {}", "Favorite charms:".bold(), favorites.join(", "));
    }

    Ok(())
}

pub fn clear(store: &Store, yes: bool) -> Result<(), String> {
    if !yes {
        return Err("this deletes every saved reading and spin; pass --yes to confirm".to_string());
    }
    let removed = store.clear()?;
    if removed == 0 {
        println!("  Nothing to clear.");
    } else {
        println!("  Cleared saved readings and spins.");
    }
    Ok(())
}
