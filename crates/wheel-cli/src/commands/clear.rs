use crate::GlobalArgs;

pub fn run(global: &GlobalArgs) -> Result<(), String> {
    let mut session = super::load_session(global)?;
    let cleared = session.log().len();
    session.clear_log();
    super::save_session(&session)?;

    println!("  Cleared {cleared} spins from the log");
    Ok(())
}
