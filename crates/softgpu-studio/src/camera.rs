use std::f32::consts::FRAC_PI_2;

use softgpu_engine::math::{Mat4, Vec3};

/// Camera orbiting `target` at `distance`.
///
/// `yaw` rotates around +Y, `pitch` lifts towards +Y; both in radians.
/// At zero angles the eye sits on +Z looking down -Z.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::zero(),
            distance: 1.5,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl OrbitCamera {
    /// World-space eye position.
    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.pitch.sin_cos();
        let (sin_y, cos_y) = self.yaw.sin_cos();
        self.target + Vec3::new(cos_p * sin_y, sin_p, cos_p * cos_y) * self.distance
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at(self.eye(), self.target, Vec3::new(0.0, 1.0, 0.0))
    }
}

/// Perspective projection parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    pub fovy: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(aspect: f32) -> Self {
        Self {
            fovy: FRAC_PI_2,
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective(self.fovy, self.aspect, self.near, self.far)
    }
}
