use comfy_table::{ContentArrangement, Table};

use crate::GlobalArgs;

pub fn run(global: &GlobalArgs, limit: usize) -> Result<(), String> {
    let session = super::load_session(global)?;
    let log = session.log();

    if log.is_empty() {
        println!("  No spins yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Winner"]);

    for record in log.recent(limit) {
        let time = record
            .time
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        table.add_row(vec![time, record.label.clone()]);
    }

    println!("{table}");
    println!();
    println!("  {} spins recorded", log.len());

    Ok(())
}
