use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use sb_core::Catalog;
use sb_oracle::{detect_house_context, map_houses};

pub fn run(question: Option<&str>) -> Result<(), String> {
    let catalog = Catalog::standard();
    let question = question.unwrap_or_default();
    let houses = map_houses(question, catalog.houses());

    if let Some(ctx) = detect_house_context(question) {
        println!(
            "  Context: {} (matched \"{}\")",
            ctx.theme.to_string().bold(),
            ctx.trigger
        );
        println!();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "House", "Keyword", "Governs"]);
    for house in &houses {
        table.add_row(vec![
            house.ordinal.to_string(),
            house.name.clone(),
            house.display_keyword().to_string(),
            house.description.clone(),
        ]);
    }

    println!("{table}");

    Ok(())
}
