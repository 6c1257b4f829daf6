//! Exit-ray collision detection
//!
//! The tricky part of Snake Logic: deciding whether a snake can slide off
//! the board. A ray is cast from the head along the heading, well past the
//! board edge, and tested against every body segment of every other snake.
//! Bodies have visual width, so segments count as hit within a tolerance of
//! half the stroke width; segments touching exactly at the head do not.
//!
//! This single primitive backs move legality at play time, board validation
//! during generation, and the hint query.

use glam::Vec2;

use super::snake::{Heading, Snake};
use crate::consts::{RAY_REACH, STROKE_WIDTH};

/// Half the body thickness, shrunk by an epsilon so flush parallel
/// neighbors one grid lane apart never register.
const BODY_TOLERANCE: f32 = STROKE_WIDTH / 2.0 - 0.5;

/// Gap past the head before a segment counts as "ahead" - keeps a segment
/// that merely touches the head point from blocking the exit.
const ORIGIN_GAP: f32 = 1.0;

/// Whether `snake`'s forward exit ray intersects any body segment of
/// `others`. Returns on the first hit; produces no geometry beyond the
/// boolean.
pub fn collides<'a, I>(snake: &Snake, others: I) -> bool
where
    I: IntoIterator<Item = &'a Snake>,
{
    let head = snake.head();
    let heading = snake.heading;

    for other in others {
        for (p1, p2) in other.segments() {
            if ray_hits_segment(head, heading, p1, p2, BODY_TOLERANCE) {
                return true;
            }
        }
    }
    false
}

/// Ray/segment intersection for axis-aligned geometry.
///
/// Case split on orientation: parallel runs must share the perpendicular
/// coordinate within tolerance and overlap strictly ahead of the origin;
/// perpendicular runs must cross the ray line within tolerance, strictly
/// ahead of the origin.
fn ray_hits_segment(origin: Vec2, heading: Heading, s1: Vec2, s2: Vec2, tolerance: f32) -> bool {
    let seg_horizontal = (s1.y - s2.y).abs() < 0.1;

    if heading.is_horizontal() {
        if seg_horizontal {
            // Both horizontal: same row within tolerance, overlap ahead
            if (origin.y - s1.y).abs() > tolerance {
                return false;
            }
            let (s_min, s_max) = (s1.x.min(s2.x), s1.x.max(s2.x));
            match heading {
                Heading::Right => s_max > origin.x + ORIGIN_GAP && s_min < origin.x + RAY_REACH,
                _ => s_min < origin.x - ORIGIN_GAP && s_max > origin.x - RAY_REACH,
            }
        } else {
            // Horizontal ray, vertical segment: crossing x strictly ahead
            let (s_min, s_max) = (s1.y.min(s2.y), s1.y.max(s2.y));
            if origin.y < s_min - tolerance || origin.y > s_max + tolerance {
                return false;
            }
            match heading {
                Heading::Right => s1.x > origin.x + ORIGIN_GAP && s1.x < origin.x + RAY_REACH,
                _ => s1.x < origin.x - ORIGIN_GAP && s1.x > origin.x - RAY_REACH,
            }
        }
    } else if !seg_horizontal {
        // Both vertical: same column within tolerance, overlap ahead
        if (origin.x - s1.x).abs() > tolerance {
            return false;
        }
        let (s_min, s_max) = (s1.y.min(s2.y), s1.y.max(s2.y));
        match heading {
            Heading::Down => s_max > origin.y + ORIGIN_GAP && s_min < origin.y + RAY_REACH,
            _ => s_min < origin.y - ORIGIN_GAP && s_max > origin.y - RAY_REACH,
        }
    } else {
        // Vertical ray, horizontal segment: crossing y strictly ahead
        let (s_min, s_max) = (s1.x.min(s2.x), s1.x.max(s2.x));
        if origin.x < s_min - tolerance || origin.x > s_max + tolerance {
            return false;
        }
        match heading {
            Heading::Down => s1.y > origin.y + ORIGIN_GAP && s1.y < origin.y + RAY_REACH,
            _ => s1.y < origin.y - ORIGIN_GAP && s1.y > origin.y - RAY_REACH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(id: u32, points: &[(f32, f32)], heading: Heading) -> Snake {
        Snake::new(
            id,
            points.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
            heading,
            0,
        )
    }

    #[test]
    fn test_independent_pieces_are_both_free() {
        let a = snake(1, &[(100.0, 100.0), (100.0, 200.0)], Heading::Down);
        let b = snake(2, &[(200.0, 150.0), (300.0, 150.0)], Heading::Right);
        assert!(!collides(&a, [&b]));
        assert!(!collides(&b, [&a]));
    }

    #[test]
    fn test_perpendicular_segment_ahead_blocks() {
        let a = snake(1, &[(100.0, 100.0), (200.0, 100.0)], Heading::Right);
        // Vertical segment crossing the ray at x=250, spanning the ray's row
        let b = snake(2, &[(250.0, 50.0), (250.0, 150.0)], Heading::Down);
        assert!(collides(&a, [&b]));
    }

    #[test]
    fn test_segment_behind_head_does_not_block() {
        let a = snake(1, &[(100.0, 100.0), (200.0, 100.0)], Heading::Right);
        // Same crossing segment, but behind the head (x=150 < 200)
        let b = snake(2, &[(150.0, 50.0), (150.0, 150.0)], Heading::Down);
        assert!(!collides(&a, [&b]));
    }

    #[test]
    fn test_parallel_same_row_ahead_blocks() {
        let a = snake(1, &[(100.0, 100.0), (200.0, 100.0)], Heading::Right);
        let b = snake(2, &[(240.0, 100.0), (320.0, 100.0)], Heading::Right);
        assert!(collides(&a, [&b]));
        // One grid lane over is outside the body tolerance
        let c = snake(3, &[(240.0, 140.0), (320.0, 140.0)], Heading::Right);
        assert!(!collides(&a, [&c]));
    }

    #[test]
    fn test_body_tolerance_edges() {
        let a = snake(1, &[(100.0, 100.0), (200.0, 100.0)], Heading::Right);
        // 8 px off the ray line: within the 8.5 tolerance
        let near = snake(2, &[(260.0, 108.0), (320.0, 108.0)], Heading::Right);
        assert!(collides(&a, [&near]));
        // 10 px off: outside
        let far = snake(3, &[(260.0, 110.0), (320.0, 110.0)], Heading::Right);
        assert!(!collides(&a, [&far]));
    }

    #[test]
    fn test_vertical_ray_cases() {
        let a = snake(1, &[(100.0, 100.0), (100.0, 200.0)], Heading::Down);
        // Same column, ahead
        let below = snake(2, &[(100.0, 240.0), (100.0, 320.0)], Heading::Down);
        assert!(collides(&a, [&below]));
        // Same column, behind
        let above = snake(3, &[(100.0, 0.0), (100.0, 80.0)], Heading::Down);
        assert!(!collides(&a, [&above]));
        // Horizontal segment crossing below the head
        let crossing = snake(4, &[(40.0, 280.0), (160.0, 280.0)], Heading::Right);
        assert!(collides(&a, [&crossing]));
        // Horizontal segment whose x-range misses the ray column
        let aside = snake(5, &[(160.0, 280.0), (240.0, 280.0)], Heading::Right);
        assert!(!collides(&a, [&aside]));
    }

    #[test]
    fn test_up_and_left_headings() {
        let up = snake(1, &[(100.0, 300.0), (100.0, 200.0)], Heading::Up);
        let blocker = snake(2, &[(40.0, 120.0), (160.0, 120.0)], Heading::Right);
        assert!(collides(&up, [&blocker]));

        let left = snake(3, &[(300.0, 100.0), (200.0, 100.0)], Heading::Left);
        let wall = snake(4, &[(120.0, 40.0), (120.0, 160.0)], Heading::Down);
        assert!(collides(&left, [&wall]));
        assert!(!collides(&left, [&blocker]));
    }

    #[test]
    fn test_no_others_never_collides() {
        let a = snake(1, &[(100.0, 100.0), (200.0, 100.0)], Heading::Right);
        assert!(!collides(&a, []));
    }
}
