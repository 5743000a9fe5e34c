//! Eyes Layer
//!
//! Two pairs of eyes drawn over the window whose pupils follow the cursor.

use crate::constants::{MORTY_EYES, PUPIL_RATIO, RICK_EYES};
use crate::domain::{EyePair, EyeSpec, Point};
use gpui::{Context, Window, div, prelude::*, px, rgb};

const PAIRS: [EyePair; 2] = [RICK_EYES, MORTY_EYES];

/// Cursor-following eyes overlay
pub struct EyesLayer {
    offsets: [Point; 2],
}

impl EyesLayer {
    pub fn new() -> Self {
        Self {
            offsets: [Point::default(); 2],
        }
    }

    /// Feed a cursor position; re-renders only when a pupil actually moves
    pub fn track(&mut self, cursor: Point, cx: &mut Context<Self>) {
        if self.update(cursor) {
            cx.notify();
        }
    }

    fn update(&mut self, cursor: Point) -> bool {
        let offsets = PAIRS.map(|pair| pair.pupil_offset(cursor));
        if offsets == self.offsets {
            return false;
        }
        self.offsets = offsets;
        true
    }

    fn render_eye(eye: EyeSpec, offset: Point) -> impl IntoElement {
        let pupil = eye.width * PUPIL_RATIO;

        div()
            .absolute()
            .left(px(eye.x))
            .top(px(eye.y))
            .w(px(eye.width))
            .h(px(eye.height))
            .rounded_full()
            .bg(rgb(0xffffff))
            .border_1()
            .border_color(rgb(0x000000))
            .child(
                div()
                    .absolute()
                    .left(px((eye.width - pupil) / 2.0 + offset.x))
                    .top(px((eye.height - pupil) / 2.0 + offset.y))
                    .size(px(pupil))
                    .rounded_full()
                    .bg(rgb(0x000000)),
            )
    }
}

impl Default for EyesLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for EyesLayer {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let eyes = PAIRS
            .iter()
            .zip(self.offsets)
            .flat_map(|(pair, offset)| {
                [
                    Self::render_eye(pair.left, offset),
                    Self::render_eye(pair.right, offset),
                ]
            });

        div().absolute().inset_0().size_full().children(eyes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_reports_pupil_movement() {
        let mut layer = EyesLayer::new();
        let far_right = Point::new(5000.0, 0.0);

        assert!(layer.update(far_right));
        assert!(!layer.update(far_right));
        assert!(layer.update(Point::new(-5000.0, 0.0)));
    }

    #[test]
    fn test_offsets_stay_within_radius() {
        let mut layer = EyesLayer::new();
        layer.update(Point::new(-300.0, 1200.0));

        for (pair, offset) in PAIRS.iter().zip(layer.offsets) {
            let distance = offset.x.hypot(offset.y);
            assert!(distance <= pair.left.radius + 1e-3);
        }
    }
}
