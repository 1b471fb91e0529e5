//! The rendering side of the experiment, seen from the simulation.
//!
//! A [`Scene`] stores drawables and renders frames; the simulation only ever
//! holds [`DrawableId`] handles into it. Handles are generational, so a handle
//! whose drawable was removed never resolves again.

mod basin;
mod camera;
mod graph;
mod shape_object;
mod straw;

pub use basin::Basin;
pub use camera::{Camera, PerspectiveViewport, Viewport};
pub use graph::SceneGraph;
pub use shape_object::ShapeObject;
pub use straw::StrawTool;

use crate::film::{InternalFilm, SurfaceFilm};
use crate::math::Transform;

slotmap::new_key_type! {
    /// Handle to a drawable held by a [`Scene`].
    pub struct DrawableId;
}

/// Everything the simulation puts into a scene.
#[derive(Debug, Clone)]
pub enum Drawable {
    /// Polyhedron wireframe with vertex markers.
    Shape(ShapeObject),
    InternalFilm(InternalFilm),
    SurfaceFilm(SurfaceFilm),
    Straw(StrawTool),
    /// Basin of solution the shape is dipped into.
    Basin(Basin),
}

impl Drawable {
    /// Short name of the variant, for logs.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Shape(_) => "shape",
            Self::InternalFilm(_) => "internal film",
            Self::SurfaceFilm(_) => "surface film",
            Self::Straw(_) => "straw",
            Self::Basin(_) => "basin",
        }
    }

    /// Pose of the drawable.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        match self {
            Self::Shape(s) => &s.transform,
            Self::InternalFilm(f) => &f.transform,
            Self::SurfaceFilm(f) => &f.transform,
            Self::Straw(s) => &s.transform,
            Self::Basin(b) => &b.transform,
        }
    }

    /// Mutable pose of the drawable.
    pub fn transform_mut(&mut self) -> &mut Transform {
        match self {
            Self::Shape(s) => &mut s.transform,
            Self::InternalFilm(f) => &mut f.transform,
            Self::SurfaceFilm(f) => &mut f.transform,
            Self::Straw(s) => &mut s.transform,
            Self::Basin(b) => &mut b.transform,
        }
    }
}

/// A surface that can hold drawables and render them.
pub trait Scene {
    /// Adds a drawable and returns its handle.
    fn add(&mut self, drawable: Drawable) -> DrawableId;

    /// Removes a drawable. Removing an absent handle is a no-op returning `None`.
    fn remove(&mut self, id: DrawableId) -> Option<Drawable>;

    /// Looks up a drawable.
    fn get(&self, id: DrawableId) -> Option<&Drawable>;

    /// Looks up a drawable for mutation.
    fn get_mut(&mut self, id: DrawableId) -> Option<&mut Drawable>;

    /// Whether the handle still resolves.
    fn contains(&self, id: DrawableId) -> bool {
        self.get(id).is_some()
    }

    /// Renders one frame from `camera`.
    fn render_frame(&mut self, camera: &Camera);
}
