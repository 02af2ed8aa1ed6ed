//! Implementation of the `siteforge list` command.

use serde_json::json;

use crate::{
    cli::{CatalogKind, ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let catalog = super::resolve_catalog(&global, &config)?;

    // Rows of (key, display name, detail), already in registration order.
    let rows: Vec<(String, String, String)> = match args.kind {
        CatalogKind::Templates => catalog
            .templates
            .list()
            .into_iter()
            .map(|t| {
                (
                    t.id.clone(),
                    t.name.clone(),
                    format!("{} ({} components)", t.theme, t.components.len()),
                )
            })
            .collect(),
        CatalogKind::Components => catalog
            .components
            .list()
            .into_iter()
            .map(|c| {
                (
                    c.name.clone(),
                    c.category.to_string(),
                    format!("{} props", c.props.len()),
                )
            })
            .collect(),
        CatalogKind::Themes => catalog
            .themes
            .list()
            .into_iter()
            .map(|t| {
                (
                    t.name.clone(),
                    format!("{} colors", t.colors.len()),
                    format!("{} fonts", t.fonts.len()),
                )
            })
            .collect(),
    };

    match args.format {
        ListFormat::Table => {
            let label = match args.kind {
                CatalogKind::Templates => "Templates",
                CatalogKind::Components => "Components",
                CatalogKind::Themes => "Themes",
            };
            output.header(&format!("Available {label}:"))?;
            for (key, name, detail) in &rows {
                output.print(&format!("  {key:<20} {name:<24} {detail}"))?;
            }
            output.print("")?;
            output.print(&format!("  {} total", rows.len()))?;
        }
        ListFormat::List => {
            for (key, _, _) in &rows {
                println!("{key}");
            }
        }
        ListFormat::Json => {
            // Bypasses OutputManager because JSON output must be parseable
            // even in non-TTY pipes.
            let entries: Vec<_> = rows
                .iter()
                .map(|(key, name, detail)| json!({ "id": key, "name": name, "detail": detail }))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".into())
            );
        }
        ListFormat::Csv => {
            println!("id,name,detail");
            for (key, name, detail) in &rows {
                println!("{key},{name},{detail}");
            }
        }
    }

    Ok(())
}
