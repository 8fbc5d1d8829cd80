//! Geometry for painting the wheel.
//!
//! Angles in a [`WheelFrame`] are in radians, measured clockwise from the
//! pointer at the top of the wheel. Wedge `i` starts at `i * width + rotation`.
//! Canvas APIs measure from 3 o'clock instead; use [`to_canvas_angle`] when
//! painting. Keeping the pointer at angle zero is what lets
//! `Wheel::segment_index_at` agree with what is on screen.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::shared_wheel_game::Wheel;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: String,
    pub label: String,
}

impl Wedge {
    pub fn bisector(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    fn contains(&self, angle: f64) -> bool {
        let offset = (angle - self.start_angle).rem_euclid(TAU);
        offset < self.end_angle - self.start_angle
    }
}

/// Triangle fixed above the wheel, independent of rotation.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub tip: Point,
    pub left: Point,
    pub right: Point,
}

/// Everything needed to paint one frame of the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelFrame {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub radius: f64,
    pub hub_radius: f64,
    pub label_radius: f64,
    pub wedges: Vec<Wedge>,
    pub pointer: Pointer,
}

impl WheelFrame {
    pub fn new(wheel: &Wheel, rotation_degrees: f64, width: f64, height: f64) -> Self {
        let center = Point {
            x: width / 2.0,
            y: height / 2.0,
        };
        let radius = (center.x.min(center.y) - WHEEL_RIM_MARGIN).max(0.0);
        let span = TAU / wheel.len() as f64;
        let offset = rotation_degrees.to_radians();

        let wedges = wheel
            .segments()
            .iter()
            .enumerate()
            .map(|(index, segment)| Wedge {
                index,
                start_angle: index as f64 * span + offset,
                end_angle: (index + 1) as f64 * span + offset,
                color: segment.color.clone(),
                label: segment.label.clone(),
            })
            .collect();

        let pointer = Pointer {
            tip: Point {
                x: center.x,
                y: center.y - radius - WHEEL_POINTER_SIZE,
            },
            left: Point {
                x: center.x - WHEEL_POINTER_SIZE,
                y: center.y - radius + WHEEL_POINTER_SIZE,
            },
            right: Point {
                x: center.x + WHEEL_POINTER_SIZE,
                y: center.y - radius + WHEEL_POINTER_SIZE,
            },
        };

        Self {
            width,
            height,
            center,
            radius,
            hub_radius: WHEEL_HUB_RADIUS,
            label_radius: radius - WHEEL_LABEL_INSET,
            wedges,
            pointer,
        }
    }

    /// Index of the wedge drawn under the pointer.
    pub fn wedge_under_pointer(&self) -> Option<usize> {
        self.wedges.iter().find(|w| w.contains(0.0)).map(|w| w.index)
    }
}

pub fn to_canvas_angle(angle: f64) -> f64 {
    angle - FRAC_PI_2
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_frame_geometry() {
        let frame = WheelFrame::new(&Wheel::default(), 0.0, 300.0, 300.0);
        assert_eq!(frame.center, Point { x: 150.0, y: 150.0 });
        assert_eq!(frame.radius, 140.0);
        assert_eq!(frame.label_radius, 130.0);
        assert_eq!(frame.wedges.len(), 8);
        assert!((frame.wedges[1].start_angle - PI / 4.0).abs() < 1e-12);
        assert!((frame.wedges[7].end_angle - TAU).abs() < 1e-12);
        assert_eq!(frame.wedges[4].label, "10 XP");
    }

    #[test]
    fn test_rotation_offsets_every_wedge() {
        let wheel = Wheel::default();
        let still = WheelFrame::new(&wheel, 0.0, 300.0, 300.0);
        let turned = WheelFrame::new(&wheel, 90.0, 300.0, 300.0);
        for (a, b) in still.wedges.iter().zip(&turned.wedges) {
            assert!((b.start_angle - a.start_angle - FRAC_PI_2).abs() < 1e-12);
            assert!((b.bisector() - a.bisector() - FRAC_PI_2).abs() < 1e-12);
        }
        // the pointer does not move with the wheel
        assert_eq!(still.pointer, turned.pointer);
    }

    #[test]
    fn test_pointer_agrees_with_resolution() {
        let wheel = Wheel::default();
        for rotation in [0.5, 23.0, 46.0, 100.0, 181.3, 271.0, 359.5] {
            let frame = WheelFrame::new(&wheel, rotation, 300.0, 300.0);
            assert_eq!(
                frame.wedge_under_pointer(),
                Some(wheel.segment_index_at(rotation)),
                "rotation {}",
                rotation
            );
        }
    }

    #[test]
    fn test_canvas_angle_starts_at_top() {
        assert_eq!(to_canvas_angle(0.0), -FRAC_PI_2);
        assert!((to_canvas_angle(PI) - FRAC_PI_2).abs() < 1e-12);
    }
}
