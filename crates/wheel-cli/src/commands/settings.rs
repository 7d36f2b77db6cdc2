use colored::Colorize;

use crate::GlobalArgs;

pub fn run(global: &GlobalArgs, remove_after: Option<bool>) -> Result<(), String> {
    let mut session = super::load_session(global)?;

    if let Some(remove) = remove_after {
        session.set_remove_after(remove).map_err(|e| e.to_string())?;
        super::save_session(&session)?;
    }

    let mode = if session.is_admin() { "admin" } else { "viewer" };
    let remove = if session.effective_remove_after() { "on" } else { "off" };

    println!("  {} {}", "Mode:".bold(), mode);
    println!("  {} {}", "Remove winner after spin:".bold(), remove);
    if !session.is_admin() {
        println!(
            "  {}",
            "Viewers always spin at random and winners are always removed.".dimmed()
        );
    }
    println!("  {} {}", "Entries:".bold(), session.entries().len());

    Ok(())
}
