//! Headless tour of the city.
//!
//! Builds the scene, runs the sphere through two full loops at 60 fps while
//! nudging the orbit camera, and logs where the sphere is each second.
//!
//! ```text
//! RUST_LOG=info cargo run --example city_tour [settings.json]
//! ```

use glam::Vec2;
use lowpoly_city::app::{App, LogRenderer, PointerButton};
use lowpoly_city::settings::CitySettings;

const FPS: u32 = 60;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => CitySettings::load(path)?,
        None => CitySettings::default(),
    };

    let mut app = App::new(&settings, LogRenderer::new())?;
    let dt = 1.0 / FPS as f32;
    let loop_seconds = 11;

    // Drag the camera a little to the right during the first second.
    app.input.handle_button(PointerButton::Primary, true);
    for second in 0..2 * loop_seconds {
        for _ in 0..FPS {
            if second == 0 {
                app.input.handle_cursor_move(640.0 + app.frame_count() as f32 * 2.0, 360.0);
            }
            app.frame(dt)?;
        }
        if second == 0 {
            app.input.handle_button(PointerButton::Primary, false);
            app.input.handle_scroll(Vec2::new(0.0, 1.0));
        }

        let p = app.sphere_position()?;
        log::info!(
            "t = {:>5.2}s  sphere = ({:>6.2}, {:>5.2}, {:>6.2})  visible meshes = {}",
            app.elapsed(),
            p.x,
            p.y,
            p.z,
            app.renderer.last_visible()
        );
    }

    app.resize(1920, 1080);
    app.run_frames(FPS, dt)?;

    log::info!("Rendered {} frames", app.renderer.frames());
    Ok(())
}
