//! Orbit camera for the 3D point view.

use std::f32::consts::{FRAC_PI_4, FRAC_PI_6};

use eframe::egui::{Pos2, Rect};
use nalgebra::{Matrix4, Perspective3, Point3, Vector3};

/// Pitch stays short of the poles so the Z-up basis never degenerates.
const PITCH_LIMIT: f32 = 1.55;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pose {
    target: Point3<f32>,
    distance: f32,
    yaw: f32,
    pitch: f32,
}

/// A point placed on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub pos: Pos2,
    /// Distance along the view axis; larger is farther.
    pub depth: f32,
}

/// Camera circling a target point with Z up.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pose: Pose,
    home: Pose,
    fov: f32,
    scene_radius: f32,
}

impl OrbitCamera {
    /// Frame a sphere of `radius` around `target` from an isometric-style angle.
    pub fn framing(target: Point3<f32>, radius: f32) -> Self {
        let fov = FRAC_PI_4;
        let scene_radius = if radius.is_finite() && radius > 0.0 {
            radius
        } else {
            1.0
        };
        let pose = Pose {
            target,
            distance: scene_radius / (fov / 2.0).sin() * 1.2,
            yaw: -FRAC_PI_4,
            pitch: FRAC_PI_6,
        };
        Self {
            pose,
            home: pose,
            fov,
            scene_radius,
        }
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Point3<f32> {
        let Pose {
            target,
            distance,
            yaw,
            pitch,
        } = self.pose;
        let dir = Vector3::new(pitch.cos() * yaw.cos(), pitch.cos() * yaw.sin(), pitch.sin());
        target + dir * distance
    }

    /// Rotate around the target by screen-space drag angles (radians).
    pub fn orbit(&mut self, horizontal: f32, vertical: f32) {
        self.pose.yaw -= horizontal;
        self.pose.pitch = (self.pose.pitch + vertical).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Scale the distance to the target; `factor < 1` moves closer.
    pub fn zoom(&mut self, factor: f32) {
        let min = self.scene_radius * 0.01;
        let max = self.scene_radius * 100.0;
        self.pose.distance = (self.pose.distance * factor).clamp(min, max);
    }

    /// Back to the initial framing.
    pub fn reset(&mut self) {
        self.pose = self.home;
    }

    /// Combined projection · view matrix for a viewport of the given aspect.
    pub fn view_projection(&self, aspect: f32) -> Matrix4<f32> {
        let near = (self.pose.distance - self.scene_radius * 2.0).max(self.pose.distance * 1e-3);
        let far = self.pose.distance + self.scene_radius * 2.0;
        let projection = Perspective3::new(aspect.max(1e-3), self.fov, near, far);
        let view = Matrix4::look_at_rh(&self.eye(), &self.pose.target, &Vector3::z());
        projection.as_matrix() * view
    }

    /// Place `point` inside `rect`, or `None` if it falls outside the view
    /// volume along the depth axis.
    pub fn project(&self, view_projection: &Matrix4<f32>, point: &Point3<f32>, rect: Rect) -> Option<Projected> {
        let clip = view_projection * point.to_homogeneous();
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        if !(-1.0..=1.0).contains(&ndc.z) {
            return None;
        }
        let center = rect.center();
        Some(Projected {
            pos: Pos2::new(
                center.x + ndc.x * rect.width() / 2.0,
                center.y - ndc.y * rect.height() / 2.0,
            ),
            depth: clip.w,
        })
    }
}
