use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hyperview::config::{parse_speed_override, presets, Preset, ViewInput};
use hyperview::prelude::*;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod svg;

use svg::SvgSurface;

#[derive(Parser)]
#[command(name = "hyperview-cli")]
#[command(about = "Headless renderer for rotating, morphing 4D polytopes")]
struct Cmd {
    /// Log per-frame events (shape switches, resizes)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// List catalog shapes with vertex and edge counts
    Shapes {
        #[arg(long)]
        json: bool,
    },
    /// List rotation speed presets
    Presets,
    /// Run the frame loop headlessly and write the final frame as SVG
    Render(RenderArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug, Default)]
struct RenderArgs {
    /// JSON file with `shape`, `preset`, `speeds`, `playing`, `scale`
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    shape: Option<String>,
    #[arg(long)]
    preset: Option<String>,
    /// Per-plane override, e.g. `--speed xw=0.02` (repeatable)
    #[arg(long = "speed", value_name = "PLANE=VALUE", conflicts_with = "surprise")]
    speeds: Vec<String>,
    #[arg(long)]
    scale: Option<f64>,
    /// Freeze rotation; morphing still runs
    #[arg(long)]
    paused: bool,
    /// Random shape and speeds from this seed (forces playback)
    #[arg(long)]
    surprise: Option<u64>,
    /// Shape to morph into during the run
    #[arg(long)]
    switch_to: Option<String>,
    /// Frame index at which the switch happens
    #[arg(long, default_value_t = 60, requires = "switch_to")]
    switch_at: u64,
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u64).range(1..))]
    frames: u64,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
    #[arg(long, default_value = "hyperview.svg")]
    out: PathBuf,
}

/// Validated render plan.
#[derive(Debug, PartialEq)]
struct Plan {
    cfg: FrameConfig,
    switch: Option<(u64, ShapeKind)>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Shapes { json } => shapes(json),
        Action::Presets => list_presets(),
        Action::Render(args) => render(args),
        Action::Report => report(),
    }
}

fn shapes(json: bool) -> Result<()> {
    let catalog = Catalog::global();
    if json {
        let rows: Vec<_> = catalog
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.kind.id(),
                    "name": p.name,
                    "vertices": p.vertex_count(),
                    "edges": p.edge_count(),
                    "description": p.description,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for p in catalog.iter() {
            println!(
                "{:<14} {:>3}v {:>3}e  {}",
                p.kind.id(),
                p.vertex_count(),
                p.edge_count(),
                p.name
            );
        }
    }
    Ok(())
}

fn list_presets() -> Result<()> {
    let rows: Vec<_> = Preset::ALL
        .iter()
        .map(|p| serde_json::json!({ "id": p.id(), "label": p.label(), "speeds": p.speeds() }))
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn load_input(path: &Path) -> Result<ViewInput> {
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Merge file input with flags (flags win) and validate everything up front.
fn plan(args: &RenderArgs) -> Result<Plan> {
    let mut input = match &args.config {
        Some(path) => load_input(path)?,
        None => ViewInput::default(),
    };
    if args.shape.is_some() {
        input.shape = args.shape.clone();
    }
    if args.preset.is_some() {
        input.preset = args.preset.clone();
    }
    if args.scale.is_some() {
        input.scale = args.scale;
    }
    if args.paused {
        input.playing = Some(false);
    }
    let mut cfg = input.validate()?;
    for raw in &args.speeds {
        let (plane, value) = parse_speed_override(raw)?;
        cfg.speeds[plane] = value;
    }
    if let Some(seed) = args.surprise {
        let draw = presets::surprise(seed);
        tracing::info!(seed, shape = draw.shape.id(), "surprise");
        cfg = draw.apply(cfg);
    }
    let switch = match &args.switch_to {
        Some(s) => Some((args.switch_at, s.parse::<ShapeKind>()?)),
        None => None,
    };
    Ok(Plan { cfg, switch })
}

/// Id of the preset whose speeds are in effect, or "custom" after any tweak.
fn preset_label(speeds: &RotationSpeeds) -> &'static str {
    Preset::matching(speeds).map_or("custom", Preset::id)
}

fn render(args: RenderArgs) -> Result<()> {
    let Plan { cfg, switch } = plan(&args)?;
    tracing::info!(
        shape = cfg.shape.id(),
        frames = args.frames,
        playing = cfg.playing,
        scale = cfg.scale.get(),
        "render"
    );

    let mut scheduler = FrameScheduler::new(cfg.shape);
    let mut surface = SvgSurface::new(Viewport::new(args.width, args.height));
    let mut driver = FixedStepDriver::new(args.frames);
    let handle = FrameHandle::new();
    let mut controller = |tick: FrameTick| match switch {
        Some((at, to)) if tick.index >= at => cfg.with_shape(to),
        _ => cfg,
    };
    let last = animate(&mut driver, &handle, &mut scheduler, &mut surface, &mut controller);

    let out = &args.out;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, surface.to_svg()).with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "config": cfg,
        "switch": switch.map(|(at, to)| serde_json::json!({ "at": at, "to": to })),
        "frames": args.frames,
        "viewport": Viewport::new(args.width, args.height),
    });
    provenance::write_sidecar(out, params)?;

    let summary = serde_json::json!({
        "frames": driver.frames_issued(),
        "shape": last.as_ref().map(|l| l.shape),
        "lines": last.as_ref().map(DrawList::line_count),
        "points": last.as_ref().map(DrawList::point_count),
        "preset": preset_label(&cfg.speeds),
        "slots": scheduler.morph().len(),
        "angles": scheduler.angles(),
        "out": out,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": hyperview::VERSION,
        "shapes": ShapeKind::ALL.iter().map(|k| k.id()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperview::rotation::Plane;
    use tempfile::tempdir;

    fn try_parse(args: &[&str]) -> Result<RenderArgs, clap::Error> {
        let argv = ["hyperview-cli", "render"].into_iter().chain(args.iter().copied());
        match Cmd::try_parse_from(argv)?.action {
            Action::Render(a) => Ok(a),
            _ => unreachable!(),
        }
    }

    fn parse(args: &[&str]) -> RenderArgs {
        try_parse(args).unwrap()
    }

    #[test]
    fn flags_build_a_validated_plan() {
        let args = parse(&[
            "--shape", "24-cell", "--preset", "fast", "--speed", "xw=-0.1", "--paused",
            "--switch-to", "tetraPrism", "--switch-at", "10",
        ]);
        let p = plan(&args).unwrap();
        assert_eq!(p.cfg.shape, ShapeKind::TwentyFourCell);
        assert!(!p.cfg.playing);
        assert_eq!(p.cfg.speeds[Plane::XW], -0.1);
        assert_eq!(p.cfg.speeds[Plane::XY], 0.02);
        assert_eq!(p.switch, Some((10, ShapeKind::TetrahedralPrism)));
    }

    #[test]
    fn invalid_flags_are_rejected_before_rendering() {
        assert!(plan(&parse(&["--shape", "dodecaplex"])).is_err());
        assert!(plan(&parse(&["--scale", "0"])).is_err());
        assert!(plan(&parse(&["--speed", "xw=nan"])).is_err());
        assert!(plan(&parse(&["--switch-to", "cube"])).is_err());
    }

    #[test]
    fn conflicting_or_empty_flag_combinations_fail_to_parse() {
        assert!(try_parse(&["--switch-at", "10"]).is_err());
        assert!(try_parse(&["--surprise", "7", "--speed", "xw=0.1"]).is_err());
        assert!(try_parse(&["--frames", "0"]).is_err());
        assert_eq!(parse(&["--frames", "1"]).frames, 1);
        assert_eq!(parse(&["--switch-to", "16-cell"]).switch_at, 60);
    }

    #[test]
    fn config_file_is_merged_under_flags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("view.json");
        std::fs::write(&path, r#"{"shape": "pentachoron", "scale": 1.5, "playing": false}"#).unwrap();
        let args = parse(&["--config", path.to_str().unwrap(), "--shape", "16-cell"]);
        let p = plan(&args).unwrap();
        assert_eq!(p.cfg.shape, ShapeKind::SixteenCell);
        assert_eq!(p.cfg.scale.get(), 1.5);
        assert!(!p.cfg.playing);
    }

    #[test]
    fn surprise_overrides_shape_and_forces_playback() {
        let p = plan(&parse(&["--paused", "--surprise", "42"])).unwrap();
        let draw = presets::surprise(42);
        assert!(p.cfg.playing);
        assert_eq!(p.cfg.shape, draw.shape);
        assert_eq!(p.cfg.speeds, draw.speeds);
    }

    #[test]
    fn summary_names_the_preset_until_a_speed_is_tweaked() {
        let chaotic = plan(&parse(&["--preset", "chaotic"])).unwrap();
        assert_eq!(preset_label(&chaotic.cfg.speeds), "chaotic");
        assert_eq!(preset_label(&plan(&parse(&[])).unwrap().cfg.speeds), "normal");
        let tweaked = plan(&parse(&["--preset", "fast", "--speed", "yz=0.021"])).unwrap();
        assert_eq!(preset_label(&tweaked.cfg.speeds), "custom");
    }

    #[test]
    fn render_writes_svg_and_provenance() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("renders").join("frame.svg");
        let mut args = parse(&["--frames", "30", "--switch-to", "pentachoron", "--switch-at", "5"]);
        args.out = out.clone();
        render(args).unwrap();
        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.contains("<svg"));
        assert!(dir.path().join("renders").join("frame.provenance.json").exists());
    }
}
