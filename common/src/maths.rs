use nalgebra::{Matrix4, Vector3};

pub fn raw_matrix(matrix: Matrix4<f32>) -> [[f32; 4]; 4] {
    <[[f32; 4]; 4]>::from(matrix)
}

/// Rotation of `angle` radians about +Z, counter-clockwise when looking down the axis.
pub fn rotation_z(angle: f32) -> Matrix4<f32> {
    Matrix4::from_axis_angle(&Vector3::z_axis(), angle)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector4};

    use super::*;

    #[test]
    fn rotation_z_zero_is_identity() {
        assert_relative_eq!(rotation_z(0.0), Matrix4::identity());
    }

    #[test]
    fn rotation_z_quarter_turn() {
        let rotated = rotation_z(FRAC_PI_2).transform_point(&Point3::new(1.0, 0.0, 0.0));

        assert_relative_eq!(rotated, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn rotation_z_keeps_depth_and_w() {
        let rotated = rotation_z(PI * 0.75) * Vector4::new(0.3, -0.2, 0.5, 1.0);

        assert_relative_eq!(rotated.z, 0.5);
        assert_relative_eq!(rotated.w, 1.0);
        assert_relative_eq!(
            rotated.xy().norm(),
            Vector4::new(0.3_f32, -0.2, 0.0, 0.0).norm(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn rotation_z_full_turn_returns_to_start() {
        assert_relative_eq!(rotation_z(2.0 * PI), Matrix4::identity(), epsilon = 1e-6);
    }

    #[test]
    fn raw_matrix_is_column_major() {
        let translation = Matrix4::new_translation(&Vector3::new(1.0, 2.0, 3.0));

        let raw = raw_matrix(translation);

        assert_eq!(raw[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(raw_matrix(Matrix4::identity())[0], [1.0, 0.0, 0.0, 0.0]);
    }
}
