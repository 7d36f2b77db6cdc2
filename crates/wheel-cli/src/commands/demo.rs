use wheel_session::DemoWheel;

use crate::GlobalArgs;

pub fn run(global: &GlobalArgs, name: &str) -> Result<(), String> {
    let demo: DemoWheel = name.parse().map_err(|e: wheel_session::SessionError| e.to_string())?;

    let mut session = super::load_session(global)?;
    session.load_demo(demo).map_err(|e| e.to_string())?;
    super::save_session(&session)?;

    println!("  Loaded the {demo} wheel: {}", demo.labels().join(", "));
    Ok(())
}
