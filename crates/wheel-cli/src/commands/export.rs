use std::path::Path;

use crate::GlobalArgs;

pub fn run(global: &GlobalArgs, output: Option<&Path>) -> Result<(), String> {
    let session = super::load_session(global)?;

    if let Some(path) = output {
        wheel_session::write_csv(session.log(), path).map_err(|e| e.to_string())?;
        println!("  Exported {} spins to {}", session.log().len(), path.display());
    } else {
        println!("{}", wheel_session::to_csv(session.log()));
    }

    Ok(())
}
