//! Axis-aligned collision detection
//!
//! Pure predicates only: nothing in here mutates state or raises events.
//! The overlap test uses strict inequalities, so rectangles that merely
//! touch edges do not collide.

use serde::{Deserialize, Serialize};

use super::state::{Bird, Pipe};
use crate::consts::{BIRD_HEIGHT, CANVAS_HEIGHT, GROUND_HEIGHT};

/// An axis-aligned rectangle in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Separating-axis check on two rectangles: overlap iff both axes' intervals
/// intersect strictly
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Does the bird currently intersect the world or any live pipe?
///
/// Order: ground, ceiling, then each pipe's two barriers; returns on the
/// first overlap found. Ground and ceiling use the full sprite extent; pipe
/// checks use the inset hitbox.
pub fn bird_collides(bird: &Bird, pipes: &[Pipe]) -> bool {
    if bird.pos.y + BIRD_HEIGHT >= CANVAS_HEIGHT - GROUND_HEIGHT {
        return true;
    }
    if bird.pos.y <= 0.0 {
        return true;
    }

    let hitbox = bird.hitbox();
    for pipe in pipes {
        if rects_overlap(&hitbox, &pipe.top_rect()) || rects_overlap(&hitbox, &pipe.bottom_rect()) {
            return true;
        }
    }

    false
}
