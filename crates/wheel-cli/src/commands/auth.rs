use colored::Colorize;

use crate::GlobalArgs;

pub fn login(global: &GlobalArgs, pin: &str) -> Result<(), String> {
    let mut session = super::load_session(global)?;
    session.login(pin).map_err(|e| e.to_string())?;
    super::save_session(&session)?;

    println!("  {} Admin controls unlocked", "OK".green().bold());
    Ok(())
}

pub fn logout(global: &GlobalArgs) -> Result<(), String> {
    let mut session = super::load_session(global)?;
    session.logout();
    super::save_session(&session)?;

    println!("  Admin controls locked");
    Ok(())
}
