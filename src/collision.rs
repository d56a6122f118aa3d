// --- File: collision.rs ---
use crate::agent::Agent;
use crate::constants::RESTITUTION;
use crate::utils::normalize_or;
use glam::Vec2;

// Used when two centres coincide and the real normal is undefined.
const FALLBACK_NORMAL: Vec2 = Vec2::X;

#[inline]
pub fn overlaps(a: &Agent, b: &Agent, distance: f32) -> bool {
    distance <= a.radius() + b.radius()
}

/// Resolves contact between `a` and `b` given their centre distance.
///
/// Radius stands in for inverse mass in the impulse. Only directions change;
/// speeds are untouched. Afterwards both discs are pushed apart along the
/// normal by half the overlap each. Returns true if an impulse was applied.
pub fn resolve(a: &mut Agent, b: &mut Agent, distance: f32) -> bool {
    if a.is_dead() || b.is_dead() || !overlaps(a, b, distance) {
        return false;
    }

    let normal = if distance > 0.0 {
        normalize_or(a.position() - b.position(), FALLBACK_NORMAL)
    } else {
        FALLBACK_NORMAL
    };

    let relative_velocity = a.velocity() - b.velocity();
    let velocity_along_normal = relative_velocity.dot(normal);
    // Separating or resting: nothing to do.
    if velocity_along_normal >= 0.0 {
        return false;
    }

    let inv_a = inverse_radius(a.radius());
    let inv_b = inverse_radius(b.radius());
    let j = -(1.0 + RESTITUTION) * velocity_along_normal / (inv_a + inv_b);
    let impulse = normal * j;

    // A direction cancelled to zero by the impulse falls back to the normal.
    let new_a = normalize_or(a.direction() + impulse * inv_a, normal);
    let new_b = normalize_or(b.direction() - impulse * inv_b, -normal);
    a.set_direction(new_a);
    b.set_direction(new_b);

    let overlap = 0.5 * (a.radius() + b.radius() - distance);
    a.set_position(a.position() + normal * overlap);
    b.set_position(b.position() - normal * overlap);
    true
}

/// Distance-computing convenience wrapper around [`resolve`].
pub fn check_collision(a: &mut Agent, b: &mut Agent) -> bool {
    let distance = a.position().distance(b.position());
    resolve(a, b, distance)
}

fn inverse_radius(radius: f32) -> f32 {
    if radius > f32::EPSILON {
        1.0 / radius
    } else {
        1.0 / f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::HealthState;
    use crate::boundary::Arena;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_head_on_collision_separates() {
        let mut a = Agent::new(Vec2::new(0.0, 0.0), Vec2::X, 10.0, 70.0);
        let mut b = Agent::new(Vec2::new(15.0, 0.0), -Vec2::X, 10.0, 70.0);

        assert!(check_collision(&mut a, &mut b));

        let normal = (a.position() - b.position()).normalize();
        let separating = (a.velocity() - b.velocity()).dot(normal);
        assert!(separating >= 0.0);
        assert!(a.position().distance(b.position()) >= 20.0 - EPS);
        assert!((a.direction() - -Vec2::X).length() < EPS);
        assert!((b.direction() - Vec2::X).length() < EPS);
        assert_eq!(a.speed(), 70.0);
        assert_eq!(b.speed(), 70.0);
    }

    #[test]
    fn test_separating_pair_is_left_alone() {
        let mut a = Agent::new(Vec2::new(0.0, 0.0), -Vec2::X, 10.0, 70.0);
        let mut b = Agent::new(Vec2::new(15.0, 0.0), Vec2::X, 10.0, 70.0);
        assert!(!check_collision(&mut a, &mut b));
        assert_eq!(a.position(), Vec2::ZERO);
        assert_eq!(b.direction(), Vec2::X);
    }

    #[test]
    fn test_distant_pair_is_left_alone() {
        let mut a = Agent::new(Vec2::new(0.0, 0.0), Vec2::X, 10.0, 70.0);
        let mut b = Agent::new(Vec2::new(25.0, 0.0), -Vec2::X, 10.0, 70.0);
        assert!(!check_collision(&mut a, &mut b));
    }

    #[test]
    fn test_coincident_centres_stay_finite() {
        let mut a = Agent::new(Vec2::new(5.0, 5.0), -Vec2::X, 10.0, 70.0);
        let mut b = Agent::new(Vec2::new(5.0, 5.0), Vec2::X, 10.0, 70.0);
        assert!(check_collision(&mut a, &mut b));
        assert!(a.position().is_finite() && b.position().is_finite());
        assert!(a.direction().is_finite() && b.direction().is_finite());
        assert!((a.direction().length() - 1.0).abs() < EPS);
        assert!(a.position().distance(b.position()) >= 20.0 - EPS);
    }

    #[test]
    fn test_dead_agents_do_not_collide() {
        let mut rng = StdRng::seed_from_u64(9);
        let arena = Arena::new(-100.0, -100.0, 100.0, 100.0);
        let mut dead = Agent::new(Vec2::new(0.0, 0.0), Vec2::X, 10.0, 70.0);
        dead.infect(0.0, 100.0);
        dead.update(0.1, &arena, 1.0, &mut rng);
        dead.update(5.0, &arena, 1.0, &mut rng);
        assert_eq!(dead.state(), HealthState::Dead);

        let mut mover = Agent::new(dead.position() + Vec2::new(12.0, 0.0), -Vec2::X, 10.0, 70.0);
        let before = dead.position();
        assert!(!check_collision(&mut dead, &mut mover));
        assert_eq!(dead.position(), before);
        assert_eq!(mover.direction(), -Vec2::X);
    }
}
// --- End of File: collision.rs ---
