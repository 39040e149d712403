// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinhole-style camera mapping world points onto the drawing surface.

use glam::{DAffine3, DMat3, DVec3};
use kurbo::{Point, Size};

/// Camera state passed explicitly into the draw step.
///
/// The projection is `P = K · R · [I | -C]`, where `K` is [`Camera::intrinsics`],
/// `R` the rotation built from the Euler angles and `C` [`Camera::center`].
/// Projected points are not divided by their depth; the viewer draws an
/// orthographic view with the origin at the middle of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Intrinsic matrix `K`.
    pub intrinsics: DMat3,
    /// Rotation about z, in radians.
    pub theta: f64,
    /// Rotation about y, in radians.
    pub psi: f64,
    /// Rotation about x, in radians.
    pub phi: f64,
    /// Camera center `C` in world coordinates.
    pub center: DVec3,
    /// Size of the drawing surface.
    pub viewport: Size,
}

impl Camera {
    /// Identity camera at the world origin looking at a viewport of the given size.
    pub fn new(viewport: Size) -> Self {
        Self {
            intrinsics: DMat3::IDENTITY,
            theta: 0.0,
            psi: 0.0,
            phi: 0.0,
            center: DVec3::ZERO,
            viewport,
        }
    }

    /// `R = Rz(theta) · Ry(psi) · Rx(phi)`.
    pub fn rotation(&self) -> DMat3 {
        DMat3::from_rotation_z(self.theta)
            * DMat3::from_rotation_y(self.psi)
            * DMat3::from_rotation_x(self.phi)
    }

    /// The 3×4 projection `K · R · [I | -C]` as an affine map.
    pub fn projection(&self) -> DAffine3 {
        let kr = self.intrinsics * self.rotation();
        DAffine3::from_mat3_translation(kr, -(kr * self.center))
    }

    /// [`Camera::projection`] as three rows of a 3×4 matrix.
    pub fn projection_matrix(&self) -> [[f64; 4]; 3] {
        let p = self.projection();
        let m = p.matrix3;
        [0, 1, 2].map(|r| [m.x_axis[r], m.y_axis[r], m.z_axis[r], p.translation[r]])
    }

    /// Project a world point onto the viewport.
    pub fn project(&self, point: DVec3) -> Point {
        let p = self.projection().transform_point3(point);
        Point::new(
            p.x + self.viewport.width * 0.5,
            p.y + self.viewport.height * 0.5,
        )
    }

    /// Add to the Euler angles, in radians.
    pub fn rotate(&mut self, d_theta: f64, d_psi: f64, d_phi: f64) {
        self.theta += d_theta;
        self.psi += d_psi;
        self.phi += d_phi;
    }

    /// Add to the Euler angles, in degrees.
    pub fn rotate_degrees(&mut self, d_theta: f64, d_psi: f64, d_phi: f64) {
        self.rotate(d_theta.to_radians(), d_psi.to_radians(), d_phi.to_radians());
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Size::new(1000.0, 1000.0))
    }
}
