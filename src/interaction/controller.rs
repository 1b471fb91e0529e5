use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::math::intersect_3d::ray_plane_intersect;
use crate::math::{Plane, Point2};
use crate::scene::{Camera, Scene, Viewport};
use crate::simulation::{Clock, FilmKind, Simulation};

/// A raw pointer event in viewport pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point2),
    Move(Point2),
    Up(Point2),
}

/// What the pointer is currently holding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Grab {
    #[default]
    None,
    /// Dragging the straw; `down_at` is where the press happened.
    Straw { down_at: Point2 },
    /// Free-rotating the shape.
    Shape,
}

/// Cursor to show while hovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    /// Over the straw.
    Pointer,
}

/// Result of handling one pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    GrabbedStraw,
    GrabbedShape,
    MovedStraw,
    RotatedShape { yaw: f64, pitch: f64 },
    Hover(Cursor),
    /// A straw click started the blow.
    Blew,
    Released,
    Ignored,
}

/// Turns pointer events into straw drags, shape rotation and blow clicks.
#[derive(Debug, Clone)]
pub struct InteractionController {
    grab: Grab,
    last_pointer: Option<Point2>,
    click_threshold_px: f64,
    rotation_scale: f64,
    drag_plane: Plane,
}

impl InteractionController {
    /// Creates a controller using the thresholds from `config`.
    #[must_use]
    pub fn new(config: &ExperimentConfig) -> Self {
        Self {
            grab: Grab::None,
            last_pointer: None,
            click_threshold_px: config.click_threshold_px,
            rotation_scale: config.drag_rotation_scale,
            drag_plane: Plane::xy(),
        }
    }

    /// Current grab.
    #[must_use]
    pub fn grab(&self) -> Grab {
        self.grab
    }

    /// Whether either drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grab != Grab::None
    }

    /// Handles one pointer event against the simulation.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport cannot build a ray for the pointer.
    pub fn handle<S, C, V>(
        &mut self,
        event: PointerEvent,
        sim: &mut Simulation<S, C>,
        viewport: &V,
        camera: &Camera,
    ) -> Result<PointerOutcome>
    where
        S: Scene,
        C: Clock,
        V: Viewport + ?Sized,
    {
        match event {
            PointerEvent::Down(at) => self.on_down(at, sim, viewport, camera),
            PointerEvent::Move(at) => self.on_move(at, sim, viewport, camera),
            PointerEvent::Up(at) => Ok(self.on_up(at, sim)),
        }
    }

    fn on_down<S: Scene, C: Clock, V: Viewport + ?Sized>(
        &mut self,
        at: Point2,
        sim: &Simulation<S, C>,
        viewport: &V,
        camera: &Camera,
    ) -> Result<PointerOutcome> {
        self.last_pointer = Some(at);

        if sim.straw_visible() {
            let ray = viewport.ray_from_pointer(at.x, at.y, camera)?;
            if sim.hit_straw(&ray) {
                self.grab = Grab::Straw { down_at: at };
                return Ok(PointerOutcome::GrabbedStraw);
            }
        }

        if sim.is_animating() {
            return Ok(PointerOutcome::Ignored);
        }
        self.grab = Grab::Shape;
        Ok(PointerOutcome::GrabbedShape)
    }

    fn on_move<S: Scene, C: Clock, V: Viewport + ?Sized>(
        &mut self,
        at: Point2,
        sim: &mut Simulation<S, C>,
        viewport: &V,
        camera: &Camera,
    ) -> Result<PointerOutcome> {
        let previous = self.last_pointer.replace(at);

        let outcome = match self.grab {
            Grab::Straw { .. } => {
                let ray = viewport.ray_from_pointer(at.x, at.y, camera)?;
                match ray_plane_intersect(&ray, &self.drag_plane) {
                    Some(hit) => {
                        sim.move_straw(hit.x, hit.y);
                        PointerOutcome::MovedStraw
                    }
                    None => PointerOutcome::Ignored,
                }
            }
            Grab::Shape => {
                let Some(previous) = previous else {
                    return Ok(PointerOutcome::Ignored);
                };
                let delta = at - previous;
                let yaw = delta.x * self.rotation_scale;
                let pitch = delta.y * self.rotation_scale;
                sim.rotate_shape(yaw, pitch);
                PointerOutcome::RotatedShape { yaw, pitch }
            }
            Grab::None => {
                let over_straw = sim.straw_visible() && {
                    let ray = viewport.ray_from_pointer(at.x, at.y, camera)?;
                    sim.hit_straw(&ray)
                };
                PointerOutcome::Hover(if over_straw {
                    Cursor::Pointer
                } else {
                    Cursor::Grab
                })
            }
        };
        Ok(outcome)
    }

    fn on_up<S: Scene, C: Clock>(&mut self, at: Point2, sim: &mut Simulation<S, C>) -> PointerOutcome {
        let grab = std::mem::take(&mut self.grab);
        self.last_pointer = Some(at);

        match grab {
            Grab::Straw { down_at } => {
                let distance = (at - down_at).norm();
                if distance < self.click_threshold_px
                    && sim.film_kind() == FilmKind::Internal
                    && sim.blow()
                {
                    PointerOutcome::Blew
                } else {
                    PointerOutcome::Released
                }
            }
            Grab::Shape => PointerOutcome::Released,
            Grab::None => PointerOutcome::Ignored,
        }
    }
}
