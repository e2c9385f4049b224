//! Sweep the alpha angle and log the cross-section faces
//!
//! A minimal stand-in for the interactive presentation layer: it loads the
//! view parameters from config, sweeps alpha over a full turn, and logs how
//! many faces each slice produces and how many corners each face has.
//!
//! Run with: `RUST_LOG=info cargo run --example slice_sweep`

use std::f32::consts::PI;

use hyperslice::config::AppConfig;

fn main() {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let slicer = config.slice.slicer();
    let center = config.view.center_vec();

    let steps = 16;
    for i in 0..steps {
        let alpha = 2.0 * PI * i as f32 / steps as f32;
        match slicer.slice(center, alpha, config.view.beta) {
            Ok(faces) => {
                let corners: Vec<usize> = faces.iter().map(|f| f.points.len() - 1).collect();
                log::info!(
                    "alpha {:.3}: {} face(s), corners {:?}",
                    alpha,
                    faces.len(),
                    corners
                );
            }
            Err(e) => log::error!("alpha {:.3}: slice failed: {}", alpha, e),
        }
    }
}
