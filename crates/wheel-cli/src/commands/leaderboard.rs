use comfy_table::{ContentArrangement, Table};

use crate::GlobalArgs;

pub fn run(global: &GlobalArgs, limit: usize) -> Result<(), String> {
    let session = super::load_session(global)?;
    let board = session.log().leaderboard();

    if board.is_empty() {
        println!("  No winners recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Label", "Wins"]);

    for (label, count) in board.iter().take(limit) {
        table.add_row(vec![label.clone(), format!("×{count}")]);
    }

    println!("{table}");
    println!();
    println!("  {} spins, {} distinct winners", session.log().len(), board.len());

    Ok(())
}
