pub mod app;
pub mod clock;
pub mod gui;
pub mod scene;
pub mod sim;

pub use sim::{Params, Simulation};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;
pub const TITLE: &str = "CirAni - Circuit Animation";
pub const TARGET_FPS: u32 = 60;

/// Opens the window, runs the animation until a close request and releases
/// the window and GPU resources before returning.
pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let setup = pollster::block_on(app::setup(TITLE))?;
    app::start(setup)?;

    println!("Program exited normally");
    Ok(())
}
