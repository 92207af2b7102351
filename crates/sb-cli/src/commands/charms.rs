use comfy_table::{ContentArrangement, Table};
use sb_core::{Catalog, CharmCategory, CharmRarity};

pub fn run(rarity: Option<&str>, category: Option<&str>) -> Result<(), String> {
    let rarity = rarity
        .map(|r| {
            CharmRarity::parse(r)
                .ok_or_else(|| format!("unknown rarity: \"{r}\". Use: common, uncommon, rare"))
        })
        .transpose()?;
    let category = category
        .map(|c| {
            CharmCategory::parse(c).ok_or_else(|| {
                format!(
                    "unknown category: \"{c}\". Use: growth, challenges, opportunities, transitions, insights"
                )
            })
        })
        .transpose()?;

    let catalog = Catalog::standard();
    let charms: Vec<_> = catalog
        .charms()
        .iter()
        .filter(|c| rarity.is_none_or(|r| c.rarity == r))
        .filter(|c| category.is_none_or(|cat| c.category == cat))
        .collect();

    if charms.is_empty() {
        println!("  No charms found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Rarity", "Category", "Meaning"]);
    for charm in &charms {
        table.add_row(vec![
            charm.id.to_string(),
            charm.name.clone(),
            charm.rarity.to_string(),
            charm.category.to_string(),
            charm.description.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} charms", charms.len());

    Ok(())
}
