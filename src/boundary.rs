// --- File: boundary.rs ---
use crate::agent::Agent;
use crate::utils::{clamp_span, random_unit_vector};
use glam::Vec2;
use rand::Rng;

/// Axis-aligned rectangle agents must stay within. `top < bottom` (screen space).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arena {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Arena {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: right.max(left),
            bottom: bottom.max(top),
        }
    }

    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Clamps a disc centre so the whole disc lies inside the arena.
    pub fn clamp_inside(&self, position: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            clamp_span(position.x, self.left + radius, self.right - radius),
            clamp_span(position.y, self.top + radius, self.bottom - radius),
        )
    }
}

/// Which edges a disc currently touches or crosses.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct EdgeContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl EdgeContact {
    pub fn detect(arena: &Arena, position: Vec2, radius: f32) -> Self {
        let left = position.x - radius <= arena.left;
        let top = position.y - radius <= arena.top;
        Self {
            left,
            right: !left && position.x + radius >= arena.right,
            top,
            bottom: !top && position.y + radius >= arena.bottom,
        }
    }

    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }

    pub fn vertical(&self) -> bool {
        self.top || self.bottom
    }

    pub fn any(&self) -> bool {
        self.horizontal() || self.vertical()
    }

    /// Points `direction` away from every touched edge.
    fn turn_inward(&self, mut direction: Vec2) -> Vec2 {
        if self.left {
            direction.x = direction.x.abs();
        } else if self.right {
            direction.x = -direction.x.abs();
        }
        if self.top {
            direction.y = direction.y.abs();
        } else if self.bottom {
            direction.y = -direction.y.abs();
        }
        direction
    }
}

/// In-update reflection: flips the direction component of each touched axis
/// and clamps the position back inside the arena.
pub fn reflect_off_edges(agent: &mut Agent, arena: &Arena) {
    let contact = EdgeContact::detect(arena, agent.position(), agent.radius());
    if !contact.any() {
        return;
    }
    let mut direction = agent.direction();
    if contact.horizontal() {
        direction.x = -direction.x;
    }
    if contact.vertical() {
        direction.y = -direction.y;
    }
    agent.set_direction(direction);
    agent.set_position(arena.clamp_inside(agent.position(), agent.radius()));
}

/// Post-pairwise pass for one agent. Returns true if the agent was stuck.
///
/// A stuck agent is pushed inside, its direction is turned inward, and then it
/// gets a fresh random heading that keeps pointing away from the touched edges.
/// Dead agents are left alone.
pub fn resolve_sticking<R: Rng + ?Sized>(agent: &mut Agent, arena: &Arena, rng: &mut R) -> bool {
    if agent.is_dead() {
        return false;
    }
    let contact = EdgeContact::detect(arena, agent.position(), agent.radius());
    if !contact.any() {
        return false;
    }
    agent.set_position(arena.clamp_inside(agent.position(), agent.radius()));

    // Anti-jitter: fresh random heading, flipped inward on each touched axis.
    let jitter = contact.turn_inward(random_unit_vector(rng));
    agent.set_direction(jitter);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn arena() -> Arena {
        Arena::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_arena_normalizes_inverted_bounds() {
        let a = Arena::new(100.0, 50.0, 0.0, 0.0);
        assert_eq!(a.left, 0.0);
        assert_eq!(a.right, 100.0);
        assert_eq!(a.top, 0.0);
        assert_eq!(a.bottom, 50.0);
        assert_eq!(a.width(), 100.0);
        assert_eq!(a.height(), 50.0);
    }

    #[test]
    fn test_edge_contact_detects_corner() {
        let contact = EdgeContact::detect(&arena(), Vec2::new(5.0, 98.0), 5.0);
        assert!(contact.left);
        assert!(contact.bottom);
        assert!(!contact.right);
        assert!(!contact.top);
    }

    #[test]
    fn test_reflect_off_edges_flips_and_clamps() {
        let mut agent = Agent::new(Vec2::new(103.0, 50.0), Vec2::X, 10.0, 70.0);
        reflect_off_edges(&mut agent, &arena());
        assert_eq!(agent.position(), Vec2::new(90.0, 50.0));
        assert!(agent.direction().x < 0.0);
    }

    #[test]
    fn test_resolve_sticking_points_inward() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let mut agent = Agent::new(Vec2::new(-4.0, -2.0), Vec2::new(-1.0, -1.0), 10.0, 70.0);
            assert!(resolve_sticking(&mut agent, &arena(), &mut rng));
            assert_eq!(agent.position(), Vec2::new(10.0, 10.0));
            assert!(agent.direction().x >= 0.0);
            assert!(agent.direction().y >= 0.0);
            assert!((agent.direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_resolve_sticking_ignores_free_agents() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut agent = Agent::new(Vec2::new(50.0, 50.0), Vec2::X, 10.0, 70.0);
        assert!(!resolve_sticking(&mut agent, &arena(), &mut rng));
        assert_eq!(agent.direction(), Vec2::X);
    }

    #[test]
    fn test_tiny_arena_does_not_panic() {
        let tiny = Arena::new(0.0, 0.0, 4.0, 4.0);
        let mut agent = Agent::new(Vec2::new(1.0, 3.0), Vec2::X, 10.0, 70.0);
        reflect_off_edges(&mut agent, &tiny);
        assert_eq!(agent.position(), Vec2::new(2.0, 2.0));
    }
}
// --- End of File: boundary.rs ---
