//! Vacuum Chase entry point
//!
//! Native builds have no window backend; the loop runs headless against the
//! mesh renderer for the configured number of frames and logs a summary.

use vacuum_chase::platform::{ScriptedInput, SystemClock};
use vacuum_chase::renderer::MeshRenderer;
use vacuum_chase::{App, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Vacuum Chase (native) starting...");

    let settings = Settings::load()?;
    let frames = settings.headless_frames;
    let mut app = App::new(settings)?;

    let mut renderer = MeshRenderer::new();
    let mut clock = SystemClock::new();
    let mut input = ScriptedInput::close_after(frames);

    app.run(&mut renderer, &mut clock, &mut input);

    let last = renderer.last_frame();
    log::info!(
        "Last frame: {} triangles, {} labels, {} bytes of vertex data",
        last.triangle_count(),
        last.labels.len(),
        last.vertex_bytes().len()
    );
    Ok(())
}
