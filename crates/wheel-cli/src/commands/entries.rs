use comfy_table::{ContentArrangement, Table};
use wheel_core::Entry;

use crate::GlobalArgs;

pub fn list(global: &GlobalArgs) -> Result<(), String> {
    let session = super::load_session(global)?;
    let entries = session.entries();

    if entries.is_empty() {
        println!("  No entries. The wheel cannot spin until one is added.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Label", "Color", "Image"]);

    for (i, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            entry.label.clone(),
            entry.slice_color(i).to_string(),
            entry.image.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} entries", entries.len());

    Ok(())
}

pub fn add(
    global: &GlobalArgs,
    label: &str,
    image: Option<String>,
    color: Option<String>,
) -> Result<(), String> {
    let mut session = super::load_session(global)?;

    let mut entry = Entry::new(label);
    entry.image = image;
    entry.color = color;

    session.add_entry(entry).map_err(|e| e.to_string())?;
    super::save_session(&session)?;

    let index = session.entries().len() - 1;
    println!("  Added '{}' at slice {index}", label.trim());
    Ok(())
}

pub fn remove(global: &GlobalArgs, index: usize) -> Result<(), String> {
    let mut session = super::load_session(global)?;
    let removed = session.remove_entry(index).map_err(|e| e.to_string())?;
    super::save_session(&session)?;

    println!("  Removed '{}' ({} entries left)", removed.label, session.entries().len());
    Ok(())
}
