use crate::geometry::{Pose, Quat, Vec3};

/// Trait for types that can be linearly interpolated.
///
/// A fraction of `0.0` yields `self`, `1.0` yields `target`.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Vec3 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Vec3::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
            self.z.lerp(&target.z, fraction),
        )
    }
}

impl Lerp for Quat {
    /// Normalized lerp along the shortest arc.
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        if fraction <= 0.0 {
            return *self;
        }
        if fraction >= 1.0 {
            return *target;
        }
        let sign = if self.dot(*target) < 0.0 { -1.0 } else { 1.0 };
        Quat::from_xyzw(
            self.x.lerp(&(target.x * sign), fraction),
            self.y.lerp(&(target.y * sign), fraction),
            self.z.lerp(&(target.z * sign), fraction),
            self.w.lerp(&(target.w * sign), fraction),
        )
        .normalize()
    }
}

impl Lerp for Pose {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Pose {
            position: self.position.lerp(&target.position, fraction),
            rotation: self.rotation.lerp(&target.rotation, fraction),
        }
    }
}
