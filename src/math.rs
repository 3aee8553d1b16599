//! Matrix helpers for the transform and lighting pipeline.
//!
//! Vector and matrix value types come from [`glam`]; this module adds the
//! pieces glam does not provide in the form the pipeline needs:
//!
//! - [`normal_matrix`]: the inverse-transpose of the linear (upper 3×3)
//!   block of a model-view matrix, with a `None` sentinel for singular input
//! - [`compose_model`]: the fixed translate/rotate/scale composition used
//!   by every shape instance
//! - [`wrap_angle`]: orbital angle wraparound into `[0, 2π)`
//!
//! All angles taken in degrees are converted to radians internally; callers
//! store slider-facing degree values untouched.

use glam::{Mat3, Mat4, Vec3};

/// Computes the normal matrix for a model-view transform.
///
/// Normals are not preserved by a non-uniform scale, so they must be
/// transformed by `transpose(inverse(M₃))` where `M₃` is the linear block of
/// the model-view matrix. Translation never enters the linear block, so the
/// 3×3 inverse here equals the upper 3×3 of the full affine inverse.
///
/// Returns `None` when the determinant is exactly zero (a zero scale on any
/// axis is a reachable slider input). Callers should keep the previous
/// normal matrix for that frame instead of propagating NaN into shading.
pub fn normal_matrix(model_view: Mat4) -> Option<Mat3> {
    let linear = Mat3::from_mat4(model_view);
    if linear.determinant() == 0.0 {
        return None;
    }
    Some(linear.inverse().transpose())
}

/// Rotation about X, then Y, then Z, with angles in degrees.
pub fn rotation_xyz_degrees(theta: Vec3) -> Mat4 {
    Mat4::from_rotation_x(theta.x.to_radians())
        * Mat4::from_rotation_y(theta.y.to_radians())
        * Mat4::from_rotation_z(theta.z.to_radians())
}

/// Composes a model matrix as `Translate · Rx · Ry · Rz · Scale`.
///
/// Translation is outermost and scale innermost; swapping rotation and scale
/// would shear under non-uniform scale, so the order is load-bearing.
pub fn compose_model(distance: Vec3, theta_degrees: Vec3, size: Vec3) -> Mat4 {
    Mat4::from_translation(distance) * rotation_xyz_degrees(theta_degrees) * Mat4::from_scale(size)
}

/// Wraps an angle in radians into `[0, 2π)`.
pub fn wrap_angle(theta: f32) -> f32 {
    theta.rem_euclid(std::f32::consts::TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn normal_matrix_of_identity_is_identity() {
        let nm = normal_matrix(Mat4::IDENTITY).unwrap();
        assert!(nm.abs_diff_eq(Mat3::IDENTITY, 1e-6));
    }

    #[test]
    fn normal_matrix_rejects_singular_input() {
        let squashed = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
        assert!(normal_matrix(squashed).is_none());
    }

    #[test]
    fn normal_matrix_corrects_non_uniform_scale() {
        // A surface normal of a plane scaled 2x along X must stay
        // perpendicular to the stretched surface.
        let m = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        let nm = normal_matrix(m).unwrap();
        let n = (nm * Vec3::new(1.0, 1.0, 0.0)).normalize();
        // The surface tangent (1, -1, 0) maps to (2, -1, 0) under the
        // scale; the transformed normal must stay orthogonal to it.
        let tangent = Vec3::new(2.0, -1.0, 0.0);
        assert!(approx(n.dot(tangent.normalize()), 0.0));
    }

    #[test]
    fn normal_matrix_ignores_translation() {
        let a = normal_matrix(Mat4::from_translation(Vec3::new(3.0, -2.0, 9.0))).unwrap();
        assert!(a.abs_diff_eq(Mat3::IDENTITY, 1e-6));
    }

    #[test]
    fn transpose_round_trips() {
        let m = compose_model(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(30.0, 60.0, 90.0),
            Vec3::new(1.5, 0.5, 2.0),
        );
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn inverse_round_trips() {
        let m = compose_model(
            Vec3::new(-4.0, 0.5, 2.0),
            Vec3::new(10.0, 200.0, 45.0),
            Vec3::new(2.0, 3.0, 0.25),
        );
        assert!(m.inverse().inverse().abs_diff_eq(m, 1e-4));
    }

    #[test]
    fn model_matrix_applies_scale_rotate_translate_in_order() {
        // Scale 2x, rotate 90 degrees about Z, then translate +5 on Z:
        // (1,0,0) -> (2,0,0) -> (0,2,0) -> (0,2,5).
        let m = compose_model(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, 90.0),
            Vec3::splat(2.0),
        );
        let p = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!(approx(p.x, 0.0) && approx(p.y, 2.0) && approx(p.z, 5.0) && approx(p.w, 1.0));
    }

    #[test]
    fn wrap_angle_stays_in_full_turn() {
        let tau = std::f32::consts::TAU;
        assert!(approx(wrap_angle(tau + 0.5), 0.5));
        // 3·TAU is not exactly representable; rem_euclid can land just
        // under the boundary, so either side of the wrap is valid.
        let w = wrap_angle(3.0 * tau);
        assert!(w < 1e-4 || tau - w < 1e-4);
        let w = wrap_angle(-0.25);
        assert!(w >= 0.0 && w < tau);
    }
}
