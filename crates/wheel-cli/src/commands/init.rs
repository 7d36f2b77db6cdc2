use wheel_session::SavedState;
use wheel_session::store::DEFAULT_LABELS;

use crate::GlobalArgs;

pub fn run(global: &GlobalArgs, force: bool) -> Result<(), String> {
    let path = &global.file;

    if path.exists() && !force {
        return Err(format!(
            "state file '{}' already exists (use --force to overwrite)",
            path.display()
        ));
    }

    SavedState::default()
        .save(path)
        .map_err(|e| e.to_string())?;

    println!("Created wheel '{}'", path.display());
    println!("  {} entries: {}", DEFAULT_LABELS.len(), DEFAULT_LABELS.join(", "));
    println!();
    println!("Get started:");
    println!("  wheel spin                 # Spin at random");
    println!("  wheel login <pin>          # Unlock admin controls");
    println!("  wheel entries add <label>  # Add a slice (admin)");
    println!("  wheel tui                  # Interactive wheel");

    Ok(())
}
