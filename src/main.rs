use std::thread;
use std::time::Duration;

use mandelbrot_viewport::{BaseColour, PixelBuffer, Selection, ViewportController};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const GRID_SIZE: u32 = 400;
const TICK: Duration = Duration::from_millis(16);
const MAX_TICKS: u32 = 1_000;

/// Zooms toward the seahorse valley, each a fifth of the previous width.
fn zoom_script() -> Vec<Selection> {
    let (cx, cy) = (-0.745, 0.113);
    let mut width = 3.0;

    (0..5)
        .map(|_| {
            width /= 5.0;
            Selection::new(cx - width / 2.0, cy - width / 2.0, width, width)
        })
        .collect()
}

#[derive(Debug, Default, PartialEq)]
struct DisplayStats {
    frames_shown: u32,
    ticks: u32,
}

fn mean_brightness(frame: &PixelBuffer) -> f64 {
    let bytes = frame.as_bytes();
    let sum: u64 = bytes.iter().map(|&b| u64::from(b)).sum();
    sum as f64 / bytes.len().max(1) as f64
}

fn show(stats: &mut DisplayStats, frame: &PixelBuffer) {
    stats.frames_shown += 1;
    info!(
        frame = stats.frames_shown,
        tick = stats.ticks,
        mean_brightness = mean_brightness(frame),
        "frame displayed"
    );
}

/// Polls the controller once per tick like a display would, issuing the next
/// scripted zoom after each frame is shown.
///
/// The frame rendered at construction is shown up front, since starting the
/// worker clears its ready signal.
fn run_display_loop(
    controller: &ViewportController,
    script: &[Selection],
    tick: Duration,
    max_ticks: u32,
) -> Result<DisplayStats, Box<dyn std::error::Error>> {
    let mut stats = DisplayStats::default();
    let mut pending = script.iter();
    let mut awaiting_frame = false;

    show(&mut stats, &controller.pixel_buffer());

    while stats.ticks < max_ticks {
        stats.ticks += 1;

        if controller.is_updated() {
            show(&mut stats, &controller.pixel_buffer());
            awaiting_frame = false;
        }

        if !awaiting_frame {
            match pending.next() {
                Some(&selection) => {
                    if controller.request_viewport_change(selection)? {
                        awaiting_frame = true;
                    } else {
                        warn!("zoom request dropped");
                    }
                }
                None => return Ok(stats),
            }
        }

        thread::sleep(tick);
    }

    warn!(ticks = stats.ticks, "display loop hit its tick limit");
    Ok(stats)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let initial = Selection::new(-2.0, -1.5, 3.0, 3.0);
    let mut controller = ViewportController::new(initial, GRID_SIZE, BaseColour::default())?;
    controller.simulate()?;

    let stats = run_display_loop(&controller, &zoom_script(), TICK, MAX_TICKS)?;
    info!(
        frames = stats.frames_shown,
        generated = controller.frames_generated(),
        "display loop finished"
    );

    controller.shutdown()?;
    Ok(())
}
