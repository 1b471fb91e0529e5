use crate::error::{GeometryError, Result};

use super::{Point3, Vector3, TOLERANCE};

/// A half-line `origin + t * direction` for `t >= 0`, with unit direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
}

impl Ray {
    /// Creates a ray, normalizing the direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Returns the ray origin.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

/// An infinite plane through `origin` with unit `normal`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    origin: Point3,
    normal: Vector3,
}

impl Plane {
    /// The `z = 0` plane, facing +Z.
    #[must_use]
    pub fn xy() -> Self {
        Self {
            origin: Point3::origin(),
            normal: Vector3::z(),
        }
    }
}

/// Relationship of a line with a plane.
#[derive(Debug)]
pub enum LinePlaneRelation {
    /// Line intersects the plane at a single point.
    Point { point: Point3, t: f64 },
    /// Line is parallel to the plane (does not intersect).
    Parallel,
    /// Line lies entirely on the plane.
    OnPlane,
}

/// Computes the intersection of a line `origin + t * dir` with a plane.
#[must_use]
pub fn line_plane_intersect(origin: &Point3, dir: &Vector3, plane: &Plane) -> LinePlaneRelation {
    let denom = plane.normal.dot(dir);
    let numer = plane.normal.dot(&(plane.origin - origin));

    if denom.abs() < TOLERANCE {
        if numer.abs() < TOLERANCE {
            LinePlaneRelation::OnPlane
        } else {
            LinePlaneRelation::Parallel
        }
    } else {
        let t = numer / denom;
        LinePlaneRelation::Point {
            point: origin + dir * t,
            t,
        }
    }
}

/// Where a ray crosses a plane, if it does so in front of its origin.
#[must_use]
pub fn ray_plane_intersect(ray: &Ray, plane: &Plane) -> Option<Point3> {
    match line_plane_intersect(&ray.origin, &ray.direction, plane) {
        LinePlaneRelation::Point { point, t } if t >= 0.0 => Some(point),
        LinePlaneRelation::OnPlane => Some(ray.origin),
        _ => None,
    }
}

/// Distance along the ray to the nearest hit with a sphere.
///
/// A ray starting inside the sphere reports `0.0`.
#[must_use]
pub fn ray_sphere_intersect(ray: &Ray, center: &Point3, radius: f64) -> Option<f64> {
    let oc = ray.origin - center;
    let b = oc.dot(&ray.direction);
    let c = oc.norm_squared() - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Closest approach between a ray and the segment `a..b`.
///
/// Returns `(distance, t)` where `t` is the ray parameter of the closest point.
#[must_use]
pub fn ray_segment_distance(ray: &Ray, a: &Point3, b: &Point3) -> (f64, f64) {
    let d1 = ray.direction;
    let d2 = b - a;
    let r = ray.origin - a;
    let e = d2.norm_squared();
    let c = d1.dot(&r);

    let (s, t) = if e < TOLERANCE {
        ((-c).max(0.0), 0.0)
    } else {
        let f = d2.dot(&r);
        let bb = d1.dot(&d2);
        // |d1| == 1, so a*e - b^2 reduces to e - b^2.
        let denom = e - bb * bb;
        let mut s = if denom > TOLERANCE {
            ((bb * f - c * e) / denom).max(0.0)
        } else {
            0.0
        };
        let mut t = (bb * s + f) / e;
        if t < 0.0 {
            t = 0.0;
            s = (-c).max(0.0);
        } else if t > 1.0 {
            t = 1.0;
            s = (bb - c).max(0.0);
        }
        (s, t)
    };

    let on_ray = ray.point_at(s);
    let on_segment = a + d2 * t;
    ((on_ray - on_segment).norm(), s)
}

/// Whether a ray passes through a capsule of `radius` around the segment `a..b`.
#[must_use]
pub fn ray_hits_capsule(ray: &Ray, a: &Point3, b: &Point3, radius: f64) -> bool {
    ray_segment_distance(ray, a, b).0 <= radius
}
