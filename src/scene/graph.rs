use slotmap::SlotMap;

use super::{Camera, Drawable, DrawableId, Scene};

/// In-memory [`Scene`] backed by a generational arena.
///
/// Rendering only counts frames; it is the scene used by the headless demo
/// and by tests.
#[derive(Debug, Default)]
pub struct SceneGraph {
    drawables: SlotMap<DrawableId, Drawable>,
    frames_rendered: u64,
}

impl SceneGraph {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of drawables present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Whether the scene holds no drawables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Number of drawables whose [`Drawable::kind_name`] is `kind`.
    #[must_use]
    pub fn count_kind(&self, kind: &str) -> usize {
        self.drawables
            .values()
            .filter(|d| d.kind_name() == kind)
            .count()
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl Scene for SceneGraph {
    fn add(&mut self, drawable: Drawable) -> DrawableId {
        tracing::trace!(kind = drawable.kind_name(), "scene add");
        self.drawables.insert(drawable)
    }

    fn remove(&mut self, id: DrawableId) -> Option<Drawable> {
        let removed = self.drawables.remove(id);
        if let Some(d) = &removed {
            tracing::trace!(kind = d.kind_name(), "scene remove");
        }
        removed
    }

    fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.drawables.get(id)
    }

    fn get_mut(&mut self, id: DrawableId) -> Option<&mut Drawable> {
        self.drawables.get_mut(id)
    }

    fn render_frame(&mut self, _camera: &Camera) {
        self.frames_rendered += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Basin, StrawTool};

    #[test]
    fn remove_is_idempotent() {
        let mut scene = SceneGraph::new();
        let id = scene.add(Drawable::Basin(Basin::default()));
        assert!(scene.remove(id).is_some());
        assert!(scene.remove(id).is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn stale_handle_does_not_resolve_to_new_drawable() {
        let mut scene = SceneGraph::new();
        let old = scene.add(Drawable::Basin(Basin::default()));
        scene.remove(old);
        let new = scene.add(Drawable::Straw(StrawTool::default()));
        assert!(!scene.contains(old));
        assert!(scene.contains(new));
    }

    #[test]
    fn counts_by_kind() {
        let mut scene = SceneGraph::new();
        scene.add(Drawable::Basin(Basin::default()));
        scene.add(Drawable::Straw(StrawTool::default()));
        assert_eq!(scene.count_kind("straw"), 1);
        assert_eq!(scene.count_kind("surface film"), 0);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn render_counts_frames() {
        let mut scene = SceneGraph::new();
        scene.render_frame(&Camera::default());
        scene.render_frame(&Camera::default());
        assert_eq!(scene.frames_rendered(), 2);
    }
}
