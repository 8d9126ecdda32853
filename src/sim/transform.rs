//! Entity transforms
//!
//! Every entity embeds one `Transform` and owns it exclusively. The world
//! matrix is a pure function of the three vectors, recomputed on demand;
//! with at most 41 transforms per frame there is nothing worth caching.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position, rotation (XYZ Euler, radians) and scale of one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Transform with uniform scale at the origin
    pub fn with_scale(scale: f32) -> Self {
        Self {
            scale: Vec3::splat(scale),
            ..Self::default()
        }
    }

    /// Derive the world matrix from scale, rotation and translation
    pub fn world_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.world_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_translation_lands_in_last_column() {
        let mut t = Transform::default();
        t.translation = Vec3::new(1.0, 2.0, 3.0);
        let m = t.world_matrix();
        assert_eq!(m.w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_scale_applies_to_axes() {
        let t = Transform::with_scale(0.5);
        let m = t.world_matrix();
        assert!((m.x_axis.x - 0.5).abs() < 1e-6);
        assert!((m.y_axis.y - 0.5).abs() < 1e-6);
        assert!((m.z_axis.z - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_matrix_is_pure_function_of_fields() {
        let mut t = Transform::with_scale(0.3);
        t.translation = Vec3::new(-2.0, 0.0, 7.5);
        t.rotation = Vec3::new(1.2, 0.0, 0.0);
        assert_eq!(t.world_matrix(), t.world_matrix());
    }
}
