use std::time::Duration;

use crate::scene::DrawableId;

/// What an animation drives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationKind {
    /// Vertical there-and-back path of the shape.
    Dip {
        shape: DrawableId,
        start_y: f64,
        end_y: f64,
    },
    /// Opacity fade of the internal film.
    Blow { film: DrawableId },
}

/// A timed task, evaluated as a pure function of elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub kind: AnimationKind,
    pub started_at: Duration,
    pub duration: Duration,
}

impl Animation {
    #[must_use]
    pub fn new(kind: AnimationKind, started_at: Duration, duration: Duration) -> Self {
        Self {
            kind,
            started_at,
            duration,
        }
    }

    /// Fraction of the duration elapsed at `now`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Whether the animation has run its full duration at `now`.
    #[must_use]
    pub fn is_complete(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use slotmap::KeyData;

    use super::*;

    fn blow(start_ms: u64, duration_ms: u64) -> Animation {
        let film = DrawableId::from(KeyData::from_ffi(1));
        Animation::new(
            AnimationKind::Blow { film },
            Duration::from_millis(start_ms),
            Duration::from_millis(duration_ms),
        )
    }

    #[test]
    fn progress_is_linear_in_elapsed_time() {
        let anim = blow(1000, 1500);
        assert_relative_eq!(anim.progress(Duration::from_millis(1000)), 0.0);
        assert_relative_eq!(anim.progress(Duration::from_millis(1750)), 0.5);
        assert_relative_eq!(anim.progress(Duration::from_millis(9000)), 1.0);
    }

    #[test]
    fn completes_exactly_at_duration() {
        let anim = blow(0, 1500);
        assert!(!anim.is_complete(Duration::from_millis(1499)));
        assert!(anim.is_complete(Duration::from_millis(1500)));
    }

    #[test]
    fn time_before_start_counts_as_zero() {
        let anim = blow(500, 1000);
        assert_relative_eq!(anim.progress(Duration::from_millis(100)), 0.0);
    }
}
