//! Snake Curve: Headless-Treiber.
//!
//! Simuliert den Frame-Loop: pro Frame ein Tick, danach werden Kurven-Textur
//! und Debug-Overlay aufgebaut, wie sie ein Renderer hochladen würde.

use snake_curve::{CurveTexture, DebugOverlay, SnakeController, SnakeOptions};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Snake Curve v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden oder anlegen; optional Pfad als erstes Argument
        let config_path = std::env::args_os()
            .nth(1)
            .map(std::path::PathBuf::from)
            .unwrap_or_else(SnakeOptions::config_path);
        let options = SnakeOptions::load_or_create(&config_path);

        let frame_count = options.frame_count;
        let delta = options.frame_delta();
        let mut controller = SnakeController::new(options)?;
        log::info!("Seed: {}", controller.seed());

        let mut texture = CurveTexture::default();
        let mut failed_frames = 0usize;

        for frame in 0..frame_count {
            match controller.advance(delta) {
                Ok(snake_frame) => {
                    texture = CurveTexture::from_points(&snake_frame.points);
                }
                Err(e) => {
                    // Frame überspringen, Zustand bleibt erhalten
                    failed_frames += 1;
                    log::error!("Frame {} fehlgeschlagen: {:#}", frame, e);
                    continue;
                }
            }

            if frame % 60 == 0 {
                let state = controller.state();
                log::info!(
                    "Frame {}: Kopf {:.3}, Schwanz {:.3}, {} Kreise",
                    frame,
                    state.head,
                    state.tail,
                    controller.curve().len()
                );
            }
        }

        let overlay = DebugOverlay::for_curve(controller.curve())?;
        log::info!(
            "Fertig: {} Frames ({} fehlgeschlagen), Textur {} Texel / {} Bytes, Overlay {} Dreiecke",
            frame_count,
            failed_frames,
            texture.width(),
            texture.as_bytes().len(),
            overlay.triangle_count()
        );

        Ok(())
    }
}
