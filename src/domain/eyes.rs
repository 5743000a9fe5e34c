//! Eyes - Cursor-Tracking Pupil Geometry
//!
//! A pair of eyes shares one pupil offset. The offset points from the pair's
//! center toward the cursor and is clamped to the eye's movement radius.

/// A point in window coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Placement of a single eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeSpec {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// How far the pupil may travel from the center
    pub radius: f32,
}

impl EyeSpec {
    pub const fn new(x: f32, y: f32, size: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            width: size,
            height: size,
            radius,
        }
    }
}

/// Two eyes that look in the same direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyePair {
    pub left: EyeSpec,
    pub right: EyeSpec,
}

impl EyePair {
    /// Shared center both pupils orbit around
    pub fn center(&self) -> Point {
        Point {
            x: (self.left.x + self.right.x + self.left.width) / 2.0,
            y: (self.left.y + self.right.y + self.left.height) / 2.0,
        }
    }

    /// Pupil translation for a cursor at `cursor`
    pub fn pupil_offset(&self, cursor: Point) -> Point {
        let center = self.center();
        let pupil = limit_movement(cursor, center, self.left.radius);
        Point {
            x: pupil.x - center.x,
            y: pupil.y - center.y,
        }
    }
}

/// Clamp `target` to the circle of `radius` around `center`
pub fn limit_movement(target: Point, center: Point, radius: f32) -> Point {
    let dx = target.x - center.x;
    let dy = target.y - center.y;
    let distance = dx.hypot(dy);

    if distance > radius {
        let angle = dy.atan2(dx);
        Point {
            x: center.x + angle.cos() * radius,
            y: center.y + angle.sin() * radius,
        }
    } else {
        target
    }
}
