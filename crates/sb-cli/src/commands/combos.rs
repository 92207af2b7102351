use comfy_table::{ContentArrangement, Table};
use sb_core::Catalog;

pub fn run(charm: Option<&str>) -> Result<(), String> {
    let catalog = Catalog::standard();
    let required = match charm {
        Some(input) => Some(
            catalog
                .resolve(input)
                .map(|c| c.id.clone())
                .ok_or_else(|| format!("unknown charm: \"{input}\""))?,
        ),
        None => None,
    };
    let combos: Vec<_> = catalog
        .combinations()
        .iter()
        .filter(|combo| required.as_ref().is_none_or(|id| combo.requires(id)))
        .collect();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Charms", "Rarity", "Category", "Summary"]);
    for combo in &combos {
        let names: Vec<String> = combo
            .charms
            .iter()
            .map(|id| {
                catalog
                    .charm(id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| id.to_string())
            })
            .collect();
        table.add_row(vec![
            combo.name.clone(),
            names.join(" + "),
            combo.rarity.to_string(),
            combo.category.to_string(),
            combo.description.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} combinations", combos.len());

    Ok(())
}
