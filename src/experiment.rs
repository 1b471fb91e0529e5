//! Frame driver tying the simulation, the pointer controller and the view
//! together.
//!
//! A host calls [`Experiment::frame`] once per display frame and
//! [`Experiment::pointer`] for each pointer event, both on the same thread.

use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::geometry::ShapeKind;
use crate::interaction::{InteractionController, PointerEvent, PointerOutcome};
use crate::scene::{Camera, Scene, Viewport};
use crate::simulation::{Clock, Simulation};

/// A mounted experiment with its view and input handling.
pub struct Experiment<S: Scene, C: Clock, V: Viewport> {
    simulation: Simulation<S, C>,
    controller: InteractionController,
    viewport: V,
    camera: Camera,
}

impl<S: Scene, C: Clock, V: Viewport> Experiment<S, C, V> {
    /// Validates `config`, then creates and mounts an experiment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConfigError::Invalid`] if `config` fails
    /// [`ExperimentConfig::validate`].
    pub fn new(scene: S, clock: C, viewport: V, config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        let controller = InteractionController::new(&config);
        let mut simulation = Simulation::new(scene, clock, config);
        simulation.mount();
        Ok(Self {
            simulation,
            controller,
            viewport,
            camera: Camera::default(),
        })
    }

    /// Replaces the camera.
    #[must_use]
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Advances and renders one frame.
    ///
    /// # Errors
    ///
    /// Propagates film build failures from [`Simulation::tick`].
    pub fn frame(&mut self) -> Result<()> {
        let auto_rotate = !self.controller.is_dragging();
        let ticked = self.simulation.tick(auto_rotate);
        self.simulation.render(&self.camera);
        ticked
    }

    /// Feeds one pointer event.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport cannot build a ray for the pointer.
    pub fn pointer(&mut self, event: PointerEvent) -> Result<PointerOutcome> {
        self.controller
            .handle(event, &mut self.simulation, &self.viewport, &self.camera)
    }

    /// Selects another polyhedron.
    pub fn select_shape(&mut self, kind: ShapeKind) {
        self.simulation.select_shape(kind);
    }

    /// Dips the shape.
    pub fn dip(&mut self) -> bool {
        self.simulation.dip()
    }

    /// Starts over with the current shape.
    pub fn reset(&mut self) -> bool {
        self.simulation.reset()
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation<S, C> {
        &self.simulation
    }

    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    #[must_use]
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access to the viewport, for resizing with the host surface.
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}
