//! Transition CLI commands.
//!
//! `sample` and `transform` are deterministic and never touch the clock.
//! `play` runs the real transition actor and streams the frames it publishes.

use std::time::Duration;

use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::types::{BoundsArg, ViewportArg};
use crate::cli::output;
use crate::config::get_config;
use crate::error::MotionError;
use crate::transition::actor::TransitionQuery;
use crate::transition::{
    Choreography, Frame, MotionTimings, MotionValues, OpenRequest, TransitionActor,
    TransitionOutcome, TransitionPhase, calculate_transform,
};

// ============================================================================
// Arguments
// ============================================================================

/// Geometry of the tapped thumbnail.
#[derive(Args, Debug, Clone)]
pub struct GeometryArgs {
    /// Thumbnail bounds as LEFT,TOP,WIDTH,HEIGHT.
    ///
    /// Omit to exercise the no-bounds fallback.
    #[arg(long, short, value_name = "L,T,W,H")]
    pub bounds: Option<BoundsArg>,

    /// Fullscreen viewport as WIDTHxHEIGHT.
    #[arg(long, short, value_name = "WxH")]
    pub viewport: ViewportArg,

    /// Thumbnail corner radius. Defaults to `thumbnail.cornerRadius`.
    #[arg(long, short)]
    pub radius: Option<f32>,
}

impl GeometryArgs {
    /// Builds the open request, filling the radius from configuration.
    #[must_use]
    pub fn to_request(&self) -> OpenRequest {
        let radius = self.radius.unwrap_or_else(|| get_config().thumbnail.corner_radius);
        OpenRequest::new(self.bounds.map(|b| b.0), self.viewport.0, radius)
    }
}

/// Arguments for `sample`.
#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// Sampling step in milliseconds.
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    pub step_ms: u64,

    /// Also sample the close transition after the open completes.
    #[arg(long)]
    pub close: bool,

    /// Output in JSON format instead of a table.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// Arguments for `transform`.
#[derive(Args, Debug, Clone)]
pub struct TransformArgs {
    /// Thumbnail bounds as LEFT,TOP,WIDTH,HEIGHT.
    #[arg(long, short, value_name = "L,T,W,H")]
    pub bounds: BoundsArg,

    /// Fullscreen viewport as WIDTHxHEIGHT.
    #[arg(long, short, value_name = "WxH")]
    pub viewport: ViewportArg,

    /// Transition progress, clamped to 0..=1.
    #[arg(long, short, allow_negative_numbers = true)]
    pub progress: f32,

    /// Scale multiplier applied at the end of the transition.
    #[arg(long, short, default_value_t = 1.0)]
    pub scale: f32,

    /// Output in JSON format instead of a table.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// Arguments for `play`.
#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// Close again after the open completes.
    #[arg(long)]
    pub close: bool,

    /// Time to stay fullscreen before closing, in milliseconds.
    #[arg(long, default_value_t = 0, requires = "close")]
    pub hold_ms: u64,

    /// Print each frame as a JSON line.
    #[arg(long, short = 'j')]
    pub json: bool,
}

// ============================================================================
// Sampling
// ============================================================================

/// One sampled frame with its offset from the start of the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampledFrame {
    pub elapsed_ms: u64,
    #[serde(flatten)]
    pub frame: Frame,
}

/// Samples the open transition, and optionally the close after it.
///
/// Follows the same rules as the transition actor: without bounds, with an
/// unmeasured viewport, or with animations disabled, each direction is a
/// single settled frame.
#[must_use]
pub fn sample_transition(
    request: &OpenRequest,
    timings: &MotionTimings,
    step: Duration,
    include_close: bool,
) -> Vec<SampledFrame> {
    let thumbnail = MotionValues::thumbnail(request.thumbnail_corner_radius.max(0.0));
    let frame_at = |elapsed: Duration,
                    values: MotionValues,
                    phase: TransitionPhase,
                    is_animating: bool| {
        let transform = request.bounds.and_then(|bounds| {
            calculate_transform(bounds, request.viewport, values.progress, values.scale_overshoot)
        });
        SampledFrame {
            elapsed_ms: millis(elapsed),
            frame: Frame { values, phase, is_animating, transform },
        }
    };

    let animated =
        request.bounds.is_some() && request.viewport.is_measured() && timings.enabled;
    if !animated {
        let mut frames =
            vec![frame_at(Duration::ZERO, MotionValues::FULLSCREEN, TransitionPhase::Open, false)];
        if include_close {
            frames.push(frame_at(Duration::ZERO, thumbnail, TransitionPhase::Idle, false));
        }
        return frames;
    }

    let open = Choreography::open(thumbnail, timings);
    let open_end = open.duration();
    let mut frames: Vec<SampledFrame> = open
        .frames(step)
        .into_iter()
        .map(|(elapsed, values)| {
            if elapsed >= open_end {
                frame_at(elapsed, values, TransitionPhase::Open, false)
            } else {
                frame_at(elapsed, values, TransitionPhase::Opening, true)
            }
        })
        .collect();

    if include_close {
        let close = Choreography::close(open.target(), timings, thumbnail.corner_radius);
        let close_end = close.duration();
        frames.extend(close.frames(step).into_iter().skip(1).map(|(elapsed, values)| {
            if elapsed >= close_end {
                frame_at(open_end + elapsed, values, TransitionPhase::Idle, false)
            } else {
                frame_at(open_end + elapsed, values, TransitionPhase::Closing, true)
            }
        }));
    }

    frames
}

fn millis(duration: Duration) -> u64 { u64::try_from(duration.as_millis()).unwrap_or(u64::MAX) }

#[derive(Tabled)]
struct FrameRow {
    #[tabled(rename = "ms")]
    elapsed: u64,
    #[tabled(rename = "Phase")]
    phase: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Overshoot")]
    overshoot: String,
    #[tabled(rename = "Scrim")]
    scrim: String,
    #[tabled(rename = "Radius")]
    radius: String,
    #[tabled(rename = "Translation")]
    translation: String,
    #[tabled(rename = "Scale")]
    scale: String,
    #[tabled(rename = "Animating")]
    animating: String,
}

/// Renders sampled frames as a table.
#[must_use]
pub fn render_frames_table(frames: &[SampledFrame]) -> String {
    let rows: Vec<FrameRow> = frames
        .iter()
        .map(|sample| {
            let values = sample.frame.values;
            let (translation, scale) = sample.frame.transform.map_or_else(
                || ("-".to_string(), "-".to_string()),
                |t| {
                    (
                        format!("{:.1}, {:.1}", t.translation_x, t.translation_y),
                        format!("{:.4}, {:.4}", t.scale_x, t.scale_y),
                    )
                },
            );
            FrameRow {
                elapsed: sample.elapsed_ms,
                phase: phase_label(sample.frame.phase),
                progress: format!("{:.4}", values.progress),
                overshoot: format!("{:.4}", values.scale_overshoot),
                scrim: format!("{:.4}", values.scrim_alpha),
                radius: format!("{:.2}", values.corner_radius),
                translation,
                scale,
                animating: output::format_bool(sample.frame.is_animating),
            }
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()))
        .with(Modify::new(Columns::new(2..8)).with(Alignment::right()))
        .with(Modify::new(Columns::last()).with(Alignment::center()))
        .to_string()
}

fn phase_label(phase: TransitionPhase) -> String {
    let name = phase_name(phase);
    match phase {
        TransitionPhase::Idle => name.dimmed().to_string(),
        TransitionPhase::Opening => name.cyan().to_string(),
        TransitionPhase::Open => name.green().to_string(),
        TransitionPhase::Closing => name.yellow().to_string(),
    }
}

// ============================================================================
// Execution
// ============================================================================

/// How long `play` waits for the actor to report its final state.
const SNAPSHOT_TIMEOUT: Duration = Duration::from_secs(1);

/// Execute the `sample` command.
///
/// # Errors
///
/// Returns an error if the frames cannot be serialized.
pub fn execute_sample(args: &SampleArgs) -> Result<(), MotionError> {
    let timings = MotionTimings::from_app_config();
    let request = args.geometry.to_request();
    let frames =
        sample_transition(&request, &timings, Duration::from_millis(args.step_ms), args.close);

    if args.json {
        output::print_highlighted_json(&serde_json::to_value(&frames)?);
        return Ok(());
    }

    if request.bounds.is_none() {
        println!("{}", "No bounds given, snapping to fullscreen.".dimmed());
    } else if !timings.enabled {
        println!("{}", "Animations are disabled in the configuration.".dimmed());
    }
    println!("{}", format!("Frames ({})", frames.len()).bold());
    println!("{}", render_frames_table(&frames));
    Ok(())
}

#[derive(Tabled)]
struct TransformRow {
    #[tabled(rename = "Translation")]
    translation: String,
    #[tabled(rename = "Scale")]
    scale: String,
    #[tabled(rename = "Covers")]
    covers: String,
}

fn validate_transform_args(args: &TransformArgs) -> Result<(), MotionError> {
    if !args.progress.is_finite() {
        return Err(MotionError::InvalidArguments(format!(
            "progress must be a finite number, got {}",
            args.progress
        )));
    }
    if !args.scale.is_finite() || args.scale <= 0.0 {
        return Err(MotionError::InvalidArguments(format!(
            "scale must be a positive number, got {}",
            args.scale
        )));
    }
    Ok(())
}

/// Execute the `transform` command.
///
/// # Errors
///
/// Returns an error if `progress` or `scale` is unusable or the viewport is
/// not measured.
pub fn execute_transform(args: &TransformArgs) -> Result<(), MotionError> {
    validate_transform_args(args)?;
    let viewport = args.viewport.0;
    let transform = calculate_transform(args.bounds.0, viewport, args.progress, args.scale)
        .ok_or_else(|| {
            MotionError::GeometryError(format!(
                "no valid transform for viewport {} and scale {}",
                args.viewport, args.scale
            ))
        })?;

    if args.json {
        output::print_highlighted_json(&serde_json::json!({
            "transform": transform,
            "affine": transform.to_affine(),
            "covers": transform.apply(viewport),
        }));
        return Ok(());
    }

    let covers = transform.apply(viewport);
    let row = TransformRow {
        translation: format!("{:.2}, {:.2}", transform.translation_x, transform.translation_y),
        scale: format!("{:.4}, {:.4}", transform.scale_x, transform.scale_y),
        covers: format!(
            "{:.1}, {:.1}, {:.1}x{:.1}",
            covers.left, covers.top, covers.width, covers.height
        ),
    };
    println!("{}", Table::new([row]).with(Style::rounded()));
    Ok(())
}

/// Execute the `play` command.
///
/// Drives a real transition actor on a current-thread runtime, printing
/// every published frame until the requested transitions finish.
///
/// # Errors
///
/// Returns an error if the runtime cannot start or the actor stops early.
pub fn execute_play(args: &PlayArgs) -> Result<(), MotionError> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build()?;
    let request = args.geometry.to_request();
    let json = args.json;

    runtime.block_on(async {
        let handle = TransitionActor::spawn_with_config();
        let mut frames = handle.subscribe_frames().await?;
        let started = tokio::time::Instant::now();

        let printer = async move {
            let mut count = 0usize;
            while let Some(frame) = frames.next().await {
                print_live_frame(millis(started.elapsed()), &frame, json);
                count += 1;
            }
            count
        };

        let driver = async move {
            let mut outcomes = vec![handle.open(request).await?];
            if args.close {
                tokio::time::sleep(Duration::from_millis(args.hold_ms)).await;
                outcomes.push(handle.close().await?);
            }
            let settled = handle
                .query_timeout(TransitionQuery::Snapshot, SNAPSHOT_TIMEOUT)
                .await?
                .into_snapshot()
                .map(|snapshot| snapshot.frame.phase);
            handle.shutdown()?;
            Ok::<_, MotionError>((outcomes, settled))
        };

        let (count, driven) = futures::join!(printer, driver);
        let (outcomes, settled) = driven?;

        if !json {
            let summary: Vec<&str> = outcomes.iter().copied().map(outcome_label).collect();
            let mut line = format!("{count} frames, {}", summary.join(" then "));
            if let Some(phase) = settled {
                line.push_str(&format!(", ends {}", phase_name(phase)));
            }
            println!("{}", line.bold());
        }
        Ok(())
    })
}

fn print_live_frame(elapsed_ms: u64, frame: &Frame, json: bool) {
    if json {
        let sample = SampledFrame { elapsed_ms, frame: *frame };
        if let Ok(line) = serde_json::to_string(&sample) {
            println!("{line}");
        }
        return;
    }

    let values = frame.values;
    println!(
        "{:>5} ms  {:<8} progress {:.4}  overshoot {:.4}  scrim {:.4}  radius {:>6.2}",
        elapsed_ms,
        phase_label(frame.phase),
        values.progress,
        values.scale_overshoot,
        values.scrim_alpha,
        values.corner_radius,
    );
}

const fn phase_name(phase: TransitionPhase) -> &'static str {
    match phase {
        TransitionPhase::Idle => "idle",
        TransitionPhase::Opening => "opening",
        TransitionPhase::Open => "open",
        TransitionPhase::Closing => "closing",
    }
}

const fn outcome_label(outcome: TransitionOutcome) -> &'static str {
    match outcome {
        TransitionOutcome::Completed => "completed",
        TransitionOutcome::Snapped => "snapped",
        TransitionOutcome::Cancelled => "cancelled",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{ScreenRect, Viewport};

    fn request(bounds: Option<ScreenRect>) -> OpenRequest {
        OpenRequest::new(bounds, Viewport::new(1080.0, 2280.0), 12.0)
    }

    fn bounds() -> Option<ScreenRect> { ScreenRect::new(40.0, 200.0, 300.0, 300.0).ok() }

    #[test]
    fn test_sample_open_starts_at_thumbnail() {
        let frames = sample_transition(
            &request(bounds()),
            &MotionTimings::default(),
            Duration::from_millis(50),
            false,
        );

        let first = frames[0];
        assert_eq!(first.elapsed_ms, 0);
        assert_eq!(first.frame.phase, TransitionPhase::Opening);
        let transform = first.frame.transform.unwrap();
        assert!((transform.translation_x - 40.0).abs() < 1e-3);
        assert!((transform.scale_x - 0.2778).abs() < 1e-4);

        let last = frames.last().copied().unwrap();
        assert_eq!(last.elapsed_ms, 350);
        assert_eq!(last.frame.phase, TransitionPhase::Open);
        assert!(!last.frame.is_animating);
        assert_eq!(last.frame.values, MotionValues::FULLSCREEN);
    }

    #[test]
    fn test_sample_with_close_ends_idle() {
        let frames = sample_transition(
            &request(bounds()),
            &MotionTimings::default(),
            Duration::from_millis(50),
            true,
        );

        let last = frames.last().copied().unwrap();
        assert_eq!(last.elapsed_ms, 650);
        assert_eq!(last.frame.phase, TransitionPhase::Idle);
        assert_eq!(last.frame.values, MotionValues::thumbnail(12.0));

        let elapsed: Vec<u64> = frames.iter().map(|f| f.elapsed_ms).collect();
        assert!(elapsed.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_without_bounds_snaps() {
        let frames = sample_transition(
            &request(None),
            &MotionTimings::default(),
            Duration::from_millis(16),
            false,
        );
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].frame.values, MotionValues::FULLSCREEN);
        assert!(frames[0].frame.transform.is_none());
        assert!(!frames[0].frame.is_animating);
    }

    #[test]
    fn test_sample_reduced_motion_snaps() {
        let timings = MotionTimings { enabled: false, ..MotionTimings::default() };
        let frames = sample_transition(&request(bounds()), &timings, Duration::from_millis(16), true);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].frame.phase, TransitionPhase::Idle);
    }

    #[test]
    fn test_render_frames_table_has_headers() {
        let frames = sample_transition(
            &request(bounds()),
            &MotionTimings::default(),
            Duration::from_millis(100),
            false,
        );
        let table = render_frames_table(&frames);
        assert!(table.contains("Progress"));
        assert!(table.contains("Overshoot"));
        assert!(table.contains("0.2778"));
    }

    #[test]
    fn test_sampled_frame_serializes_flat() {
        let frames = sample_transition(
            &request(None),
            &MotionTimings::default(),
            Duration::from_millis(16),
            false,
        );
        let json = serde_json::to_value(frames[0]).unwrap();
        assert_eq!(json["elapsedMs"], 0);
        assert_eq!(json["phase"], "open");
        assert_eq!(json["isAnimating"], false);
        assert!(json["transform"].is_null());
    }

    fn transform_args(progress: f32, scale: f32) -> TransformArgs {
        TransformArgs {
            bounds: BoundsArg(ScreenRect::new(40.0, 200.0, 300.0, 300.0).unwrap()),
            viewport: ViewportArg(Viewport::new(1080.0, 2280.0)),
            progress,
            scale,
            json: false,
        }
    }

    #[test]
    fn test_transform_rejects_non_finite_progress() {
        let result = execute_transform(&transform_args(f32::NAN, 1.0));
        assert!(matches!(
            result,
            Err(MotionError::InvalidArguments(msg)) if msg.contains("progress")
        ));
    }

    #[test]
    fn test_transform_rejects_non_positive_scale() {
        for scale in [0.0, -1.0, f32::INFINITY] {
            let result = execute_transform(&transform_args(0.5, scale));
            let message = match result {
                Err(MotionError::InvalidArguments(msg)) => msg,
                other => panic!("scale {scale} gave {other:?}"),
            };
            assert!(message.contains("scale"));
        }
    }

    #[test]
    fn test_transform_unmeasured_viewport_is_geometry_error() {
        let mut args = transform_args(0.5, 1.0);
        args.viewport = ViewportArg(Viewport::new(0.0, 0.0));
        assert!(matches!(execute_transform(&args), Err(MotionError::GeometryError(_))));
    }
}
