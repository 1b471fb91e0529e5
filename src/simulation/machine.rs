use crate::config::ExperimentConfig;
use crate::error::{Result, SceneError};
use crate::film::{BuildInternalFilm, BuildSurfaceFilm, FilmParams, InternalFilm};
use crate::geometry::ShapeKind;
use crate::math::easing::dip_height;
use crate::math::{Point3, Ray, Transform};
use crate::operations::creation::MakePolyhedron;
use crate::operations::query::{Centroid, UniqueVertices};
use crate::scene::{Basin, Camera, Drawable, DrawableId, Scene, ShapeObject, StrawTool};

use super::{Animation, AnimationKind, Clock, ExperimentPhase, FilmKind};

/// Everything the simulation knows, in one record.
///
/// Transition validity depends on the joint value of these fields, so they
/// are never split across independent flags.
#[derive(Debug, Clone, Default)]
pub struct ExperimentState {
    pub phase: ExperimentPhase,
    pub shape_kind: ShapeKind,
    pub shape: Option<DrawableId>,
    pub internal_film: Option<DrawableId>,
    pub surface_film: Option<DrawableId>,
    pub straw: Option<DrawableId>,
    pub basin: Option<DrawableId>,
    pub animation: Option<Animation>,
}

impl ExperimentState {
    /// Which film currently exists.
    #[must_use]
    pub fn film_kind(&self) -> FilmKind {
        if self.internal_film.is_some() {
            FilmKind::Internal
        } else if self.surface_film.is_some() {
            FilmKind::Surface
        } else {
            FilmKind::None
        }
    }
}

/// The experiment state machine.
///
/// ```text
/// Idle --dip--> Dipping --(dip done)--> InternalFilm --blow--> Blowing
///   ^                                                             |
///   +---- reset / select_shape (from any phase) <-- SurfaceFilm <-+ (blow done)
/// ```
///
/// Commands issued in the wrong phase are ignored and return `false`.
pub struct Simulation<S: Scene, C: Clock> {
    scene: S,
    clock: C,
    config: ExperimentConfig,
    params: FilmParams,
    state: ExperimentState,
}

impl<S: Scene, C: Clock> Simulation<S, C> {
    /// Creates a simulation for the default shape. Nothing is added to the
    /// scene until [`Simulation::mount`].
    ///
    /// `config` is taken as is; run [`ExperimentConfig::validate`] first when
    /// it does not come from [`ExperimentConfig::load`].
    #[must_use]
    pub fn new(scene: S, clock: C, config: ExperimentConfig) -> Self {
        let params = FilmParams::from(&config);
        Self {
            scene,
            clock,
            config,
            params,
            state: ExperimentState::default(),
        }
    }

    /// Populates the scene with the basin, the hidden straw and the shape.
    ///
    /// Calling it again is a no-op. A shape already placed by
    /// [`Simulation::select_shape`] is kept.
    pub fn mount(&mut self) {
        if self.state.straw.is_some() {
            return;
        }
        self.state.basin = Some(self.scene.add(Drawable::Basin(Basin::default())));
        self.state.straw = Some(self.scene.add(Drawable::Straw(StrawTool::default())));
        if self.state.shape.is_none() {
            self.spawn_shape();
        }
        tracing::info!(shape = %self.state.shape_kind, "experiment mounted");
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    #[must_use]
    pub fn phase(&self) -> ExperimentPhase {
        self.state.phase
    }

    #[must_use]
    pub fn shape_kind(&self) -> ShapeKind {
        self.state.shape_kind
    }

    #[must_use]
    pub fn film_kind(&self) -> FilmKind {
        self.state.film_kind()
    }

    #[must_use]
    pub fn state(&self) -> &ExperimentState {
        &self.state
    }

    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    #[must_use]
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Whether a dip or blow animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.animation.is_some()
    }

    /// Pose of the shape, if mounted.
    #[must_use]
    pub fn shape_transform(&self) -> Option<Transform> {
        self.state
            .shape
            .and_then(|id| self.scene.get(id))
            .map(|d| *d.transform())
    }

    /// The internal film, while it exists.
    #[must_use]
    pub fn internal_film(&self) -> Option<&InternalFilm> {
        match self.state.internal_film.and_then(|id| self.scene.get(id)) {
            Some(Drawable::InternalFilm(film)) => Some(film),
            _ => None,
        }
    }

    /// Whether the straw is currently shown.
    #[must_use]
    pub fn straw_visible(&self) -> bool {
        self.straw().is_some_and(|s| s.visible)
    }

    /// The straw, if mounted.
    #[must_use]
    pub fn straw(&self) -> Option<&StrawTool> {
        match self.state.straw.and_then(|id| self.scene.get(id)) {
            Some(Drawable::Straw(straw)) => Some(straw),
            _ => None,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────────────

    /// Switches to another polyhedron, discarding any film or animation.
    pub fn select_shape(&mut self, kind: ShapeKind) {
        self.clear_films();
        if let Some(id) = self.state.shape.take() {
            self.scene.remove(id);
        }
        self.state.shape_kind = kind;
        self.spawn_shape();
        self.state.phase = ExperimentPhase::Idle;
        tracing::info!(shape = %kind, "shape selected");
    }

    /// Starts dipping the shape into the solution.
    pub fn dip(&mut self) -> bool {
        if self.state.phase != ExperimentPhase::Idle || self.film_kind() != FilmKind::None {
            tracing::debug!(phase = %self.state.phase, "dip ignored");
            return false;
        }
        let Some(shape) = self.state.shape.filter(|&id| self.scene.contains(id)) else {
            tracing::debug!("dip ignored: no shape");
            return false;
        };

        self.state.animation = Some(Animation::new(
            AnimationKind::Dip {
                shape,
                start_y: self.config.rest_height,
                end_y: self.config.submerged_height,
            },
            self.clock.now(),
            self.config.dip_duration(),
        ));
        self.state.phase = ExperimentPhase::Dipping;
        tracing::info!(shape = %self.state.shape_kind, "dipping");
        true
    }

    /// Starts blowing the internal film into a surface film.
    pub fn blow(&mut self) -> bool {
        if self.state.phase != ExperimentPhase::InternalFilm {
            tracing::debug!(phase = %self.state.phase, "blow ignored");
            return false;
        }
        let Some(film) = self.state.internal_film.filter(|&id| self.scene.contains(id)) else {
            tracing::debug!("blow ignored: no internal film");
            return false;
        };

        self.state.animation = Some(Animation::new(
            AnimationKind::Blow { film },
            self.clock.now(),
            self.config.blow_duration(),
        ));
        self.state.phase = ExperimentPhase::Blowing;
        tracing::info!("blowing");
        true
    }

    /// Removes every film and returns to [`ExperimentPhase::Idle`].
    ///
    /// Only a film phase can be reset. Returns `false` from
    /// [`ExperimentPhase::Idle`] and while the dip is still running.
    pub fn reset(&mut self) -> bool {
        if matches!(
            self.state.phase,
            ExperimentPhase::Idle | ExperimentPhase::Dipping
        ) {
            tracing::debug!(phase = %self.state.phase, "reset ignored");
            return false;
        }
        self.clear_films();
        self.state.phase = ExperimentPhase::Idle;
        tracing::info!("experiment reset");
        true
    }

    // ── Interaction hooks ────────────────────────────────────────────────────

    /// Whether `ray` touches the visible straw.
    #[must_use]
    pub fn hit_straw(&self, ray: &Ray) -> bool {
        self.straw().is_some_and(|s| s.visible && s.hit_test(ray))
    }

    /// Moves the straw to `(x, y)` at its current depth.
    pub fn move_straw(&mut self, x: f64, y: f64) {
        if let Some(Drawable::Straw(straw)) = self.state.straw.and_then(|id| self.scene.get_mut(id)) {
            straw.move_to(x, y);
        }
    }

    /// Adds `yaw` and `pitch` (radians) to the shape's rotation.
    pub fn rotate_shape(&mut self, yaw: f64, pitch: f64) {
        if let Some(shape) = self.state.shape.and_then(|id| self.scene.get_mut(id)) {
            let rotation = &mut shape.transform_mut().rotation;
            rotation.y += yaw;
            rotation.x += pitch;
        }
    }

    // ── Frame ────────────────────────────────────────────────────────────────

    /// Advances one frame.
    ///
    /// Polls the running animation, spins the shape when `auto_rotate` is set
    /// and keeps the films aligned with the shape.
    ///
    /// # Errors
    ///
    /// Returns an error if a film cannot be built at the end of an animation.
    /// The simulation is back in [`ExperimentPhase::Idle`] when that happens.
    pub fn tick(&mut self, auto_rotate: bool) -> Result<()> {
        self.advance_animation()?;

        let rate = self.config.auto_rotation_per_frame;
        let Some(shape_id) = self.state.shape else {
            return Ok(());
        };
        let Some(shape) = self.scene.get_mut(shape_id) else {
            return Ok(());
        };
        if auto_rotate {
            shape.transform_mut().rotation.y += rate;
        }
        let rotation = shape.transform().rotation;

        for film in [self.state.internal_film, self.state.surface_film]
            .into_iter()
            .flatten()
        {
            if let Some(drawable) = self.scene.get_mut(film) {
                drawable.transform_mut().rotation = rotation;
            }
        }
        Ok(())
    }

    /// Renders the scene from `camera`.
    pub fn render(&mut self, camera: &Camera) {
        self.scene.render_frame(camera);
    }

    fn advance_animation(&mut self) -> Result<()> {
        let Some(animation) = self.state.animation else {
            return Ok(());
        };
        let now = self.clock.now();
        let progress = animation.progress(now);

        match animation.kind {
            AnimationKind::Dip {
                shape,
                start_y,
                end_y,
            } => {
                let Some(drawable) = self.scene.get_mut(shape) else {
                    self.abandon_animation("dip target vanished");
                    return Ok(());
                };
                drawable.transform_mut().position.y = dip_height(start_y, end_y, progress);
                if animation.is_complete(now) {
                    self.state.animation = None;
                    self.finish_dip()?;
                }
            }
            AnimationKind::Blow { film } => {
                let Some(Drawable::InternalFilm(internal)) = self.scene.get_mut(film) else {
                    self.abandon_animation("blow target vanished");
                    return Ok(());
                };
                internal.apply_fade(progress, &self.params);
                if animation.is_complete(now) {
                    self.state.animation = None;
                    self.finish_blow();
                }
            }
        }
        Ok(())
    }

    fn abandon_animation(&mut self, reason: &'static str) {
        tracing::debug!(reason, "animation abandoned");
        self.state.animation = None;
    }

    fn finish_dip(&mut self) -> Result<()> {
        let Some(pose) = self.shape_transform() else {
            self.state.phase = ExperimentPhase::Idle;
            return Err(SceneError::DrawableNotFound("shape").into());
        };

        let film = match self.build_internal_film(pose) {
            Ok(film) => film,
            Err(err) => {
                tracing::warn!(%err, "internal film could not be built");
                self.state.phase = ExperimentPhase::Idle;
                return Err(err);
            }
        };
        self.state.internal_film = Some(self.scene.add(Drawable::InternalFilm(film)));
        self.set_straw_visible(true);
        self.state.phase = ExperimentPhase::InternalFilm;
        tracing::info!(shape = %self.state.shape_kind, "internal film formed");
        Ok(())
    }

    fn build_internal_film(&self, pose: Transform) -> Result<InternalFilm> {
        let mesh = MakePolyhedron::new(self.state.shape_kind).execute();
        let vertices = UniqueVertices::new(&mesh)
            .with_precision(self.params.dedup_precision)
            .execute();
        let centroid = Centroid::new(&vertices).execute()?;
        BuildInternalFilm::new(&mesh, centroid, pose)
            .with_params(self.params)
            .execute()
    }

    fn finish_blow(&mut self) {
        let Some(id) = self.state.internal_film.take() else {
            return;
        };
        let rotation = self
            .scene
            .remove(id)
            .map(|d| d.transform().rotation)
            .unwrap_or_default();
        let position = self
            .shape_transform()
            .map_or_else(Point3::origin, |t| t.position);

        let mesh = MakePolyhedron::new(self.state.shape_kind).execute();
        let film = BuildSurfaceFilm::new(mesh, position, rotation)
            .with_opacity(self.params.surface_opacity)
            .execute();
        self.state.surface_film = Some(self.scene.add(Drawable::SurfaceFilm(film)));
        self.set_straw_visible(false);
        self.state.phase = ExperimentPhase::SurfaceFilm;
        tracing::info!(shape = %self.state.shape_kind, "surface film formed");
    }

    fn spawn_shape(&mut self) {
        let shape = ShapeObject::build(self.state.shape_kind, self.config.rest_height, &self.params);
        self.state.shape = Some(self.scene.add(Drawable::Shape(shape)));
    }

    /// Drops both films, the running animation and the straw.
    fn clear_films(&mut self) {
        self.state.animation = None;
        for id in [self.state.internal_film.take(), self.state.surface_film.take()]
            .into_iter()
            .flatten()
        {
            self.scene.remove(id);
        }
        self.set_straw_visible(false);
    }

    fn set_straw_visible(&mut self, visible: bool) {
        if let Some(Drawable::Straw(straw)) = self.state.straw.and_then(|id| self.scene.get_mut(id)) {
            straw.visible = visible;
        }
    }
}
