use crate::error::{GeometryError, Result};
use crate::math::{Point2, Point3, Ray, Vector3, TOLERANCE};

/// A perspective camera looking at a target point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point3,
    pub target: Point3,
    pub up: Vector3,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3::new(5.0, 5.0, 8.0),
            target: Point3::origin(),
            up: Vector3::y(),
            fov_y_deg: 50.0,
        }
    }
}

impl Camera {
    /// Orthonormal `(forward, right, up)` basis of the view.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera sits on its target or looks along `up`.
    pub fn basis(&self) -> Result<(Vector3, Vector3, Vector3)> {
        let forward = self.target - self.position;
        let len = forward.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let forward = forward / len;
        let right = forward.cross(&self.up);
        let right_len = right.norm();
        if right_len < TOLERANCE {
            return Err(GeometryError::Degenerate("camera looks along its up vector".into()).into());
        }
        let right = right / right_len;
        let up = right.cross(&forward);
        Ok((forward, right, up))
    }
}

/// Turns screen positions into world-space rays.
pub trait Viewport {
    /// Ray from the camera through the pixel `(x, y)`, origin top-left.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera basis is degenerate.
    fn ray_from_pointer(&self, x: f64, y: f64, camera: &Camera) -> Result<Ray>;
}

/// A pixel viewport of a given size rendered through a perspective camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveViewport {
    width: f64,
    height: f64,
}

impl PerspectiveViewport {
    /// Creates a viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not positive.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        check_size(width, height)?;
        Ok(Self { width, height })
    }

    /// Changes the pixel size, as after a host window resize.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not positive. The viewport is
    /// left unchanged in that case.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        check_size(width, height)?;
        self.width = width;
        self.height = height;
        tracing::debug!(width, height, "viewport resized");
        Ok(())
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Viewport width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Pixel position of a world point, or `None` if it is behind the camera.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera basis is degenerate.
    pub fn world_to_screen(&self, point: &Point3, camera: &Camera) -> Result<Option<Point2>> {
        let (forward, right, up) = camera.basis()?;
        let v = point - camera.position;
        let depth = v.dot(&forward);
        if depth <= TOLERANCE {
            return Ok(None);
        }
        let tan = (camera.fov_y_deg.to_radians() / 2.0).tan();
        let ndc_x = v.dot(&right) / (depth * tan * self.aspect());
        let ndc_y = v.dot(&up) / (depth * tan);
        Ok(Some(Point2::new(
            (ndc_x + 1.0) / 2.0 * self.width,
            (1.0 - ndc_y) / 2.0 * self.height,
        )))
    }
}

fn check_size(width: f64, height: f64) -> Result<()> {
    if width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::Degenerate(format!("viewport size {width}x{height} must be positive")).into())
    }
}

impl Viewport for PerspectiveViewport {
    fn ray_from_pointer(&self, x: f64, y: f64, camera: &Camera) -> Result<Ray> {
        let (forward, right, up) = camera.basis()?;
        let ndc_x = x / self.width * 2.0 - 1.0;
        let ndc_y = -(y / self.height) * 2.0 + 1.0;
        let tan = (camera.fov_y_deg.to_radians() / 2.0).tan();
        let direction = forward + right * (ndc_x * tan * self.aspect()) + up * (ndc_y * tan);
        Ray::new(camera.position, direction)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn center_pixel_looks_at_target() {
        let camera = Camera::default();
        let viewport = PerspectiveViewport::new(800.0, 600.0).unwrap();
        let ray = viewport.ray_from_pointer(400.0, 300.0, &camera).unwrap();
        let expected = (camera.target - camera.position).normalize();
        assert_relative_eq!(*ray.direction(), expected, epsilon = 1e-12);
    }

    #[test]
    fn projection_inverts_ray_casting() {
        let camera = Camera::default();
        let viewport = PerspectiveViewport::new(800.0, 600.0).unwrap();
        let world = Point3::new(2.1, 2.9, 2.0);
        let pixel = viewport.world_to_screen(&world, &camera).unwrap().unwrap();
        let ray = viewport.ray_from_pointer(pixel.x, pixel.y, &camera).unwrap();
        let to_point = (world - ray.origin()).normalize();
        assert_relative_eq!(*ray.direction(), to_point, epsilon = 1e-9);
    }

    #[test]
    fn top_of_screen_points_up() {
        let camera = Camera::default();
        let viewport = PerspectiveViewport::new(800.0, 600.0).unwrap();
        let top = viewport.ray_from_pointer(400.0, 0.0, &camera).unwrap();
        let bottom = viewport.ray_from_pointer(400.0, 600.0, &camera).unwrap();
        assert!(top.direction().y > bottom.direction().y);
    }

    #[test]
    fn point_behind_camera_has_no_pixel() {
        let camera = Camera::default();
        let viewport = PerspectiveViewport::new(800.0, 600.0).unwrap();
        let behind = Point3::new(10.0, 10.0, 16.0);
        assert!(viewport.world_to_screen(&behind, &camera).unwrap().is_none());
    }

    #[test]
    fn degenerate_inputs_rejected() {
        assert!(PerspectiveViewport::new(0.0, 600.0).is_err());
        let camera = Camera {
            target: Point3::new(5.0, 5.0, 8.0),
            ..Camera::default()
        };
        let viewport = PerspectiveViewport::new(800.0, 600.0).unwrap();
        assert!(viewport.ray_from_pointer(1.0, 1.0, &camera).is_err());
    }

    #[test]
    fn resize_updates_aspect_and_keeps_projection_consistent() {
        let camera = Camera::default();
        let mut viewport = PerspectiveViewport::new(800.0, 600.0).unwrap();
        let world = Point3::new(2.1, 2.9, 2.0);
        let before = viewport.world_to_screen(&world, &camera).unwrap().unwrap();

        viewport.resize(1200.0, 400.0).unwrap();
        assert_relative_eq!(viewport.aspect(), 3.0);
        let pixel = viewport.world_to_screen(&world, &camera).unwrap().unwrap();
        assert!((pixel - before).norm() > 1.0);

        let ray = viewport.ray_from_pointer(pixel.x, pixel.y, &camera).unwrap();
        let to_point = (world - ray.origin()).normalize();
        assert_relative_eq!(*ray.direction(), to_point, epsilon = 1e-9);
    }

    #[test]
    fn bad_resize_keeps_size() {
        let mut viewport = PerspectiveViewport::new(800.0, 600.0).unwrap();
        assert!(viewport.resize(0.0, 300.0).is_err());
        assert!(viewport.resize(640.0, f64::NAN).is_err());
        assert_relative_eq!(viewport.width(), 800.0);
        assert_relative_eq!(viewport.height(), 600.0);
    }
}
