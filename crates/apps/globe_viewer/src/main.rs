use std::collections::VecDeque;
use std::path::PathBuf;

use clap::Parser;
use foundation::math::GeoCoordinate;
use globe::{Globe, GlobeConfig};
use gpu::HeadlessBackend;
use runtime::{FixedClock, FrameClock, FrameLoop, WallClock};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless globe driver: places markers and flies the camera")]
struct Args {
    /// JSON globe config; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Equirectangular texture image (path or URL)
    #[arg(long)]
    texture: Option<String>,

    /// Surface width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Surface height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Sphere radius in scene units
    #[arg(long)]
    radius: Option<f64>,

    /// Resume idle rotation after each camera flight
    #[arg(long)]
    resume_idle_rotation: bool,

    /// Marker as LAT,LON in degrees (repeatable)
    #[arg(long = "marker", value_parser = parse_marker, allow_hyphen_values = true)]
    markers: Vec<GeoCoordinate>,

    /// Frames between successive marker placements
    #[arg(long, default_value_t = 150)]
    marker_every: u64,

    /// Total frames to render
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Target frame rate; 0 runs a fixed 60 Hz step without sleeping
    #[arg(long, default_value_t = 0)]
    fps: u32,
}

fn parse_marker(raw: &str) -> Result<GeoCoordinate, String> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{raw}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("bad latitude '{lat}': {e}"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| format!("bad longitude '{lon}': {e}"))?;
    Ok(GeoCoordinate::new(lat, lon))
}

fn resolve_config(args: &Args) -> Result<GlobeConfig, Box<dyn std::error::Error>> {
    let mut config = match (&args.config, &args.texture) {
        (Some(path), _) => GlobeConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        (None, Some(texture)) => GlobeConfig::new(texture.as_str()),
        (None, None) => return Err("either --config or --texture is required".into()),
    };

    if let Some(texture) = &args.texture {
        config.texture_path = texture.clone();
    }
    if let Some(width) = args.width {
        config.surface_width = width;
    }
    if let Some(height) = args.height {
        config.surface_height = height;
    }
    if let Some(radius) = args.radius {
        config.radius = radius;
    }
    if args.resume_idle_rotation {
        config.resume_idle_rotation = true;
    }
    Ok(config)
}

fn drive<C: FrameClock>(
    globe: &mut Globe<HeadlessBackend>,
    clock: C,
    args: &Args,
) -> Result<u64, Box<dyn std::error::Error>> {
    let mut frame_loop = FrameLoop::new(clock);
    let handle = frame_loop.handle();
    let mut pending: VecDeque<GeoCoordinate> = args.markers.iter().copied().collect();
    let every = args.marker_every.max(1);
    let total = args.frames;
    if total == 0 {
        return Ok(0);
    }

    let rendered = globe.run(&mut frame_loop, |globe, frame| {
        if frame.index > 0
            && frame.index % every == 0
            && let Some(coordinate) = pending.pop_front()
        {
            match globe.place_marker(coordinate.latitude_deg, coordinate.longitude_deg) {
                Ok(placed) => info!(
                    frame = frame.index,
                    lat = coordinate.latitude_deg,
                    lon = coordinate.longitude_deg,
                    marker = placed.entity.index(),
                    "marker placed"
                ),
                Err(err) => warn!(frame = frame.index, "marker skipped: {err}"),
            }
        }
        if frame.index + 1 == total {
            handle.stop();
        }
    })?;

    if !pending.is_empty() {
        warn!(
            remaining = pending.len(),
            "run ended before every marker was placed"
        );
    }
    Ok(rendered)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    info!(?config, "starting globe viewer");

    let mut globe = Globe::new(config, HeadlessBackend::new());
    let surface = globe.build()?;
    info!(surface = surface.id, width = surface.width, height = surface.height, "surface ready");

    let rendered = if args.fps == 0 {
        drive(&mut globe, FixedClock::fps(60), &args)?
    } else {
        drive(&mut globe, WallClock::new(args.fps), &args)?
    };

    let camera = globe.camera().copied();
    let report = json!({
        "frames_rendered": rendered,
        "markers": globe.markers().len(),
        "is_animating": globe.is_animating(),
        "sphere_rotation": globe.sphere_rotation().map(|r| [r.x, r.y, r.z]),
        "camera": camera.map(|c| json!({
            "position": c.position,
            "look_at": c.target,
        })),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_marker;

    #[test]
    fn parses_signed_pairs() {
        let c = parse_marker("-33.9, 151.2").expect("valid marker");
        assert_eq!(c.latitude_deg, -33.9);
        assert_eq!(c.longitude_deg, 151.2);
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_marker("45").is_err());
        assert!(parse_marker("north,90").is_err());
    }
}
