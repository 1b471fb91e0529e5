//! Headless run of the soap film experiment.
//!
//! Dips the chosen shape, clicks the straw once the internal film has formed
//! and lets the blow finish, printing the film at each stage. Time is driven
//! by a manual clock at 60 frames per second.
//!
//! Usage:
//! ```text
//! cargo run --example headless                       # tetrahedron
//! cargo run --example headless -- cube
//! cargo run --example headless -- octahedron my.toml # with a config file
//! ```

use soapfilm::film::FilmRole;
use soapfilm::geometry::ShapeKind;
use soapfilm::interaction::{PointerEvent, PointerOutcome};
use soapfilm::scene::{PerspectiveViewport, SceneGraph};
use soapfilm::simulation::{ExperimentPhase, ManualClock};
use soapfilm::{Experiment, ExperimentConfig, Result};

const FRAME_MS: u64 = 16;

type Headless = Experiment<SceneGraph, ManualClock, PerspectiveViewport>;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for soapfilm.
    // Override with RUST_LOG env var (e.g. RUST_LOG=soapfilm=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("headless=info".parse().unwrap_or_default())
        .add_directive("soapfilm=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let kind = ShapeKind::resolve(&args.next().unwrap_or_default());
    let config = match args.next() {
        Some(path) => ExperimentConfig::load(path)?,
        None => ExperimentConfig::default(),
    };

    let clock = ManualClock::new();
    let viewport = PerspectiveViewport::new(1280.0, 720.0)?;
    let mut exp = Experiment::new(SceneGraph::new(), clock.clone(), viewport, config)?;
    exp.select_shape(kind);

    exp.dip();
    run_until(&mut exp, &clock, ExperimentPhase::InternalFilm)?;
    report(&exp);

    let outcome = click_straw(&mut exp)?;
    tracing::info!(?outcome, "straw clicked");
    if outcome != PointerOutcome::Blew {
        return Ok(());
    }
    run_until(&mut exp, &clock, ExperimentPhase::SurfaceFilm)?;
    report(&exp);
    Ok(())
}

fn run_until(exp: &mut Headless, clock: &ManualClock, phase: ExperimentPhase) -> Result<()> {
    let mut frames = 0_u32;
    while exp.simulation().phase() != phase && exp.simulation().is_animating() {
        clock.advance_ms(FRAME_MS);
        exp.frame()?;
        frames += 1;
    }
    tracing::info!(frames, phase = %exp.simulation().phase(), "animation settled");
    Ok(())
}

fn click_straw(exp: &mut Headless) -> Result<PointerOutcome> {
    let Some(tip) = exp.simulation().straw().map(|s| s.tip_center()) else {
        return Ok(PointerOutcome::Ignored);
    };
    let Some(at) = exp.viewport().world_to_screen(&tip, exp.camera())? else {
        return Ok(PointerOutcome::Ignored);
    };
    exp.pointer(PointerEvent::Down(at))?;
    exp.pointer(PointerEvent::Up(at))
}

fn report(exp: &Headless) {
    let sim = exp.simulation();
    println!("{} / {}", sim.shape_kind(), sim.phase());
    if let Some(film) = sim.internal_film() {
        let c = film.transform.transform_point(&film.centroid);
        println!("  centroid      ({:.3}, {:.3}, {:.3}) world", c.x, c.y, c.z);
        println!("  fan triangles {}", film.count(FilmRole::FanTriangle));
        println!("  vertex lines  {}", film.count(FilmRole::RadiatingLine));
    }
    println!("  drawables     {}", sim.scene().len());
    println!("  frames        {}", sim.scene().frames_rendered());
}
