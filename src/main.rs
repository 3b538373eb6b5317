//! Headless demo binary: composes a plasma cell, drives a pointer
//! interaction, and runs a snapshot loop to report frame statistics.

use std::path::Path;

use plasmacyte::input::PointerEvent;
use plasmacyte::options::Options;
use plasmacyte::organelle::OrganelleId;
use plasmacyte::scene::Cell;
use plasmacyte::util::clock::PlaybackClock;
use plasmacyte::util::frame_timing::FrameTiming;

/// Frames to simulate in the headless demo.
const FRAME_COUNT: u32 = 600;

fn main() {
    env_logger::init();

    let opts = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(opts) => {
                log::info!("loaded options from {path}");
                opts
            }
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut cell = match Cell::new(42, opts) {
        Ok(cell) => cell,
        Err(e) => {
            log::error!("failed to compose cell: {e}");
            std::process::exit(1);
        }
    };

    let triangles: usize = cell
        .organelles()
        .iter()
        .flat_map(|o| o.meshes())
        .map(|m| m.mesh.triangle_count())
        .sum();
    log::info!(
        "composed {} organelles, {} triangles (membrane excluded)",
        cell.organelles().len(),
        triangles
    );

    // Walk through a selection the way the overlay would
    cell.handle_pointer(PointerEvent::Enter(OrganelleId::Golgi));
    cell.handle_pointer(PointerEvent::Click {
        hit: Some(OrganelleId::Golgi),
    });
    let frame = cell.frame(0.0);
    if let Some(label) = frame
        .organelles
        .iter()
        .find_map(|o| o.label.as_ref())
    {
        log::info!("selected: {}", label.text);
    }
    cell.reset_view();

    // Headless animation loop: snapshot frames as fast as they come and
    // report the sustained snapshot rate.
    let clock = PlaybackClock::new();
    let mut timing = FrameTiming::new(0);
    let mut visible_peak = 0usize;
    for _ in 0..FRAME_COUNT {
        let frame = cell.frame(clock.elapsed());
        let visible = frame
            .organelles
            .iter()
            .filter(|o| {
                matches!(
                    o.id,
                    OrganelleId::Vesicles | OrganelleId::Antibodies
                )
            })
            .flat_map(|o| &o.transforms)
            .flatten()
            .filter(|t| t.scale.x > 0.0)
            .count();
        visible_peak = visible_peak.max(visible);
        timing.end_frame();
    }
    log::info!(
        "{FRAME_COUNT} frames, {:.0} snapshots/s, peak {} particles visible",
        timing.fps(),
        visible_peak
    );
}
