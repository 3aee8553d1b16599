//! Orbiting scene lights and their per-material lighting products.
//!
//! A light orbits in a vertical circle offset along X, feeding the shader
//! three precomputed products per material (ambient, diffuse, specular).
//! Hiding a light zeroes its products on the CPU side; the shader never
//! branches on visibility.

use glam::Vec4;

use crate::color::Color;
use crate::math::wrap_angle;

/// Whether the light position is a direction (w = 0) or a point (w = 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    Directional,
    Positional,
}

/// An orbiting light with ambient/diffuse/specular colors and a strength
/// dial.
#[derive(Clone, Debug)]
pub struct Light {
    pub kind: LightKind,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub strength: f32,
    /// Orbit angle in radians, kept in `[0, 2π)` while animating.
    pub theta: f32,
    /// Orbit plane tilt; the stock scenes keep it at zero.
    pub phi: f32,
    pub radius: f32,
    /// Offset of the orbit along the X axis.
    pub x_offset: f32,
    /// Angle advanced per frame while animating.
    pub step: f32,
    pub visible: bool,
    pub animated: bool,
}

impl Light {
    /// A light at orbit angle `theta`, offset `x_offset` along X.
    ///
    /// Diffuse and specular start random so two freshly created lights are
    /// distinguishable; ambient starts as a dim gray.
    pub fn new(kind: LightKind, theta: f32, x_offset: f32) -> Self {
        Self {
            kind,
            ambient: Color::rgba(0.2, 0.2, 0.2, 1.0),
            diffuse: Color::random(),
            specular: Color::random(),
            strength: 0.8,
            theta,
            phi: 0.0,
            radius: 10.0,
            x_offset,
            step: std::f32::consts::PI / 200.0,
            visible: true,
            animated: true,
        }
    }

    fn product(&self, light_color: Color, material: Color) -> Vec4 {
        if self.visible {
            light_color
                .modulate(material)
                .scale_rgb(self.strength)
                .to_vec4()
        } else {
            Vec4::new(0.0, 0.0, 0.0, 1.0)
        }
    }

    /// `ambient × material`, scaled by strength; `[0, 0, 0, 1]` when hidden.
    pub fn ambient_product(&self, material: Color) -> Vec4 {
        self.product(self.ambient, material)
    }

    pub fn diffuse_product(&self, material: Color) -> Vec4 {
        self.product(self.diffuse, material)
    }

    pub fn specular_product(&self, material: Color) -> Vec4 {
        self.product(self.specular, material)
    }

    /// Homogeneous light position for the current orbit angle.
    pub fn position(&self) -> Vec4 {
        let w = match self.kind {
            LightKind::Directional => 0.0,
            LightKind::Positional => 1.0,
        };
        Vec4::new(
            self.x_offset,
            self.radius * self.theta.cos(),
            self.radius * self.theta.sin() * self.phi.cos(),
            w,
        )
    }

    /// Advances the orbit by one step when animation is on.
    pub fn advance(&mut self) {
        if self.animated {
            self.theta = wrap_angle(self.theta + self.step);
        }
    }

    pub fn set_ambient(&mut self, color: Color) {
        self.ambient.set_rgb(color);
    }

    pub fn set_diffuse(&mut self, color: Color) {
        self.diffuse.set_rgb(color);
    }

    pub fn set_specular(&mut self, color: Color) {
        self.specular.set_rgb(color);
    }

    /// Dialing strength also re-shows a hidden light, matching the control
    /// surface where the strength slider doubles as an "on" switch.
    pub fn set_strength(&mut self, strength: f32) {
        self.strength = strength;
        self.visible = true;
    }

    /// Flips visibility; turning the light off also zeroes its strength so
    /// the slider reads as off.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if !self.visible {
            self.strength = 0.0;
        }
    }

    /// Flips animation; resuming restarts the orbit from angle zero.
    pub fn toggle_animation(&mut self) {
        self.animated = !self.animated;
        if self.animated {
            self.theta = 0.0;
        }
    }

    /// Manually positioning the light stops the orbit animation.
    pub fn set_theta(&mut self, theta: f32) {
        self.animated = false;
        self.theta = theta;
    }

    pub fn set_x_offset(&mut self, x_offset: f32) {
        self.x_offset = x_offset;
    }
}
