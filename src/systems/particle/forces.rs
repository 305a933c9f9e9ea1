use crate::core::Vec2;

use super::body::Particle;

/// Smallest radius a particle may have
pub const MIN_SIZE: f32 = 0.01;

/// Gravity scaled by mass: heavier particles fall faster
#[inline(always)]
pub(super) fn apply_gravity(p: &mut Particle, gravity: f32) {
    p.vel.y += gravity * p.mass();
}

/// Friction damps horizontal motion only; vertical speed is lost to bounces
#[inline(always)]
pub(super) fn apply_friction(p: &mut Particle, friction: f32) {
    p.vel.x *= friction;
}

#[inline(always)]
pub(super) fn integrate(p: &mut Particle) {
    p.pos += p.vel;
}

pub(super) fn jump(p: &mut Particle, force: f32) {
    p.vel.y -= force / p.mass();
}

pub(super) fn push(p: &mut Particle, origin: Vec2, force: f32, radius: f32) -> bool {
    let distance = p.pos.distance(origin);

    if !(distance < radius) {
        return false;
    }

    // atan2(0, 0) == 0: a particle exactly under the click is pushed along +x
    let offset = p.pos - origin;
    let angle = offset.y.atan2(offset.x);
    let strength = force * (1.0 - distance / radius);
    p.vel += Vec2::new(angle.cos(), angle.sin()) * strength;
    true
}

/// Jump force for an upward scroll of `delta` pixels, capped at `max_force`
#[inline]
pub fn jump_force(delta: f32, scale: f32, max_force: f32) -> f32 {
    max_force.min(delta.abs() * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::zero(), 2.0, [0, 0, 0])
    }

    #[test]
    fn gravity_scales_with_mass() {
        let mut light = Particle::new(Vec2::zero(), Vec2::zero(), 1.0, [0, 0, 0]);
        let mut heavy = Particle::new(Vec2::zero(), Vec2::zero(), 4.0, [0, 0, 0]);
        apply_gravity(&mut light, 0.15);
        apply_gravity(&mut heavy, 0.15);
        assert!(heavy.vel.y > light.vel.y);
        assert!((heavy.vel.y - 0.3).abs() < 1e-6);
    }

    #[test]
    fn friction_leaves_vertical_alone() {
        let mut p = particle_at(0.0, 0.0);
        p.vel = Vec2::new(10.0, 10.0);
        apply_friction(&mut p, 0.5);
        assert_eq!(p.vel, Vec2::new(5.0, 10.0));
    }

    #[test]
    fn jump_divides_by_mass() {
        let mut p = particle_at(0.0, 0.0); // mass 1
        jump(&mut p, 10.0);
        assert_eq!(p.vel.y, -10.0);

        let mut light = Particle::new(Vec2::zero(), Vec2::zero(), 1.0, [0, 0, 0]); // mass 0.5
        jump(&mut light, 10.0);
        assert_eq!(light.vel.y, -20.0);
    }

    #[test]
    fn jump_force_is_capped() {
        assert_eq!(jump_force(1.0, 50.0, 80.0), 50.0);
        assert_eq!(jump_force(-1.0, 50.0, 80.0), 50.0);
        assert_eq!(jump_force(10.0, 50.0, 80.0), 80.0);
    }

    #[test]
    fn push_decays_linearly() {
        let origin = Vec2::new(100.0, 100.0);
        let mut p = particle_at(140.0, 100.0);
        assert!(push(&mut p, origin, 15.0, 80.0));
        // d = 40, R = 80 -> half strength, straight along +x
        assert!((p.vel.x - 7.5).abs() < 1e-4);
        assert!(p.vel.y.abs() < 1e-4);
    }

    #[test]
    fn push_points_away_from_origin() {
        let origin = Vec2::new(100.0, 100.0);
        let mut p = particle_at(100.0, 70.0);
        push(&mut p, origin, 15.0, 80.0);
        assert!(p.vel.y < 0.0);
        assert!(p.vel.x.abs() < 1e-4);
    }

    #[test]
    fn push_outside_radius_is_noop() {
        let origin = Vec2::new(0.0, 0.0);
        let mut p = particle_at(80.0, 0.0);
        p.vel = Vec2::new(1.0, -1.0);
        assert!(!push(&mut p, origin, 15.0, 80.0));
        assert_eq!(p.vel, Vec2::new(1.0, -1.0));

        let mut far = particle_at(300.0, 300.0);
        assert!(!push(&mut far, origin, 15.0, 80.0));
        assert_eq!(far.vel, Vec2::zero());
    }
}
