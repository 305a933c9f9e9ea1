//! Content collision
//!
//! The face a particle came through is judged from its previous position,
//! recovered as `pos - vel` rather than stored. Only one correction is
//! applied per frame: the first rect and first axis that classify win.
//! When no face classifies (deep overlap, corner entry) nothing is
//! corrected and the particle is allowed to pass through.

use crate::core::{Rng, Vec2};
use crate::domain::ContentRect;

use super::body::Particle;
use super::types::{ContentHit, Face};

/// Resolve against viewport-space `rects`; returns the correction applied, if any
pub fn resolve_content_collision(
    p: &mut Particle,
    rects: &[ContentRect],
    damping: f32,
    push_force: f32,
    rng: &mut Rng,
) -> Option<ContentHit> {
    for (rect_index, rect) in rects.iter().enumerate() {
        if !p.overlaps(rect) {
            continue;
        }

        let prev = p.pos - p.vel;
        let Some(face) = classify_face(prev, p.size(), rect) else {
            continue;
        };

        apply_face(p, face, rect, damping, push_force, rng);
        return Some(ContentHit { rect_index, face });
    }
    None
}

/// Vertical faces are checked before horizontal ones
fn classify_face(prev: Vec2, size: f32, rect: &ContentRect) -> Option<Face> {
    let spans_x = prev.x + size > rect.left() && prev.x - size < rect.right();
    if spans_x {
        if prev.y + size <= rect.top() {
            return Some(Face::Top);
        }
        if prev.y - size >= rect.bottom() {
            return Some(Face::Bottom);
        }
    }

    let spans_y = prev.y + size > rect.top() && prev.y - size < rect.bottom();
    if spans_y {
        if prev.x + size <= rect.left() {
            return Some(Face::Left);
        }
        if prev.x - size >= rect.right() {
            return Some(Face::Right);
        }
    }

    None
}

fn apply_face(
    p: &mut Particle,
    face: Face,
    rect: &ContentRect,
    damping: f32,
    push_force: f32,
    rng: &mut Rng,
) {
    let size = p.size();
    match face {
        Face::Top => {
            p.pos.y = rect.top() - size;
            p.vel.y *= -damping;
            // Sideways kick so particles slide off flat tops instead of piling up
            p.vel.x += rng.sign() * push_force;
        }
        Face::Bottom => {
            p.pos.y = rect.bottom() + size;
            p.vel.y *= -damping;
        }
        Face::Left => {
            p.pos.x = rect.left() - size;
            p.vel.x *= -damping;
        }
        Face::Right => {
            p.pos.x = rect.right() + size;
            p.vel.x *= -damping;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(pos: Vec2, vel: Vec2) -> Particle {
        Particle::new(pos, vel, 2.0, [0, 0, 0])
    }

    #[test]
    fn falling_onto_top_face() {
        let rect = ContentRect::new(50.0, 100.0, 100.0, 50.0);
        // prev bottom = 95 + 2 <= 100
        let mut p = particle(Vec2::new(100.0, 101.0), Vec2::new(0.0, 6.0));
        let mut rng = Rng::new(1);

        let hit = resolve_content_collision(&mut p, &[rect], 0.9, 3.0, &mut rng);

        assert_eq!(hit, Some(ContentHit { rect_index: 0, face: Face::Top }));
        assert_eq!(p.pos.y, 98.0);
        assert!((p.vel.y + 5.4).abs() < 1e-5);
        assert_eq!(p.vel.x.abs(), 3.0);
    }

    #[test]
    fn rising_into_bottom_face() {
        let rect = ContentRect::new(50.0, 100.0, 100.0, 50.0);
        let mut p = particle(Vec2::new(100.0, 149.0), Vec2::new(0.0, -5.0));
        let mut rng = Rng::new(1);

        let hit = resolve_content_collision(&mut p, &[rect], 0.9, 3.0, &mut rng);

        assert_eq!(hit.map(|h| h.face), Some(Face::Bottom));
        assert_eq!(p.pos.y, 152.0);
        assert!((p.vel.y - 4.5).abs() < 1e-5);
        assert_eq!(p.vel.x, 0.0);
    }

    #[test]
    fn side_hits() {
        let rect = ContentRect::new(50.0, 100.0, 100.0, 50.0);
        let mut rng = Rng::new(1);

        let mut from_left = particle(Vec2::new(49.0, 120.0), Vec2::new(4.0, 0.0));
        let hit = resolve_content_collision(&mut from_left, &[rect], 0.9, 3.0, &mut rng);
        assert_eq!(hit.map(|h| h.face), Some(Face::Left));
        assert_eq!(from_left.pos.x, 48.0);
        assert!((from_left.vel.x + 3.6).abs() < 1e-5);

        let mut from_right = particle(Vec2::new(151.0, 120.0), Vec2::new(-4.0, 0.0));
        let hit = resolve_content_collision(&mut from_right, &[rect], 0.9, 3.0, &mut rng);
        assert_eq!(hit.map(|h| h.face), Some(Face::Right));
        assert_eq!(from_right.pos.x, 152.0);
        assert!((from_right.vel.x - 3.6).abs() < 1e-5);
    }

    #[test]
    fn deep_overlap_is_left_alone() {
        let rect = ContentRect::new(0.0, 0.0, 100.0, 100.0);
        let mut p = particle(Vec2::new(50.0, 50.0), Vec2::new(1.0, 1.0));
        let before = p.clone();
        let mut rng = Rng::new(1);

        assert_eq!(resolve_content_collision(&mut p, &[rect], 0.9, 3.0, &mut rng), None);
        assert_eq!(p, before);
    }

    #[test]
    fn diagonal_corner_entry_is_left_alone() {
        let rect = ContentRect::new(100.0, 100.0, 50.0, 50.0);
        // prev (95, 95): neither extent overlapped the rect
        let mut p = particle(Vec2::new(99.0, 99.0), Vec2::new(4.0, 4.0));
        let before = p.clone();
        let mut rng = Rng::new(1);

        assert_eq!(resolve_content_collision(&mut p, &[rect], 0.9, 3.0, &mut rng), None);
        assert_eq!(p, before);
    }

    #[test]
    fn first_resolving_rect_wins() {
        // Two adjacent tops; the particle straddles both
        let a = ContentRect::new(0.0, 100.0, 100.0, 20.0);
        let b = ContentRect::new(100.0, 100.0, 100.0, 20.0);
        let mut p = particle(Vec2::new(100.0, 101.0), Vec2::new(0.0, 4.0));
        let mut rng = Rng::new(3);

        let hit = resolve_content_collision(&mut p, &[a, b], 0.9, 3.0, &mut rng);
        assert_eq!(hit, Some(ContentHit { rect_index: 0, face: Face::Top }));
    }

    #[test]
    fn unresolved_rect_falls_through_to_next() {
        let swallowed = ContentRect::new(0.0, 0.0, 500.0, 500.0);
        let ledge = ContentRect::new(80.0, 100.0, 40.0, 10.0);
        let mut p = particle(Vec2::new(100.0, 99.0), Vec2::new(0.0, 3.0));
        let mut rng = Rng::new(3);

        let hit = resolve_content_collision(&mut p, &[swallowed, ledge], 0.9, 3.0, &mut rng);
        assert_eq!(hit, Some(ContentHit { rect_index: 1, face: Face::Top }));
    }
}
