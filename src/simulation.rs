// --- File: simulation.rs ---
use crate::agent::{Agent, HealthState};
use crate::boundary::{self, Arena};
use crate::collision;
use crate::config::{SimulationParams, sanitize};
use crate::constants::*;
use crate::infection;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type SimRng = StdRng;

/// Per-category totals for display. Carrier and Infected share `infected`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct HealthCounts {
    pub healthy: usize,
    pub infected: usize,
    pub recovered: usize,
    pub dead: usize,
}

impl HealthCounts {
    pub fn from_agents<'a, I>(agents: I) -> Self
    where
        I: IntoIterator<Item = &'a Agent>,
    {
        let mut counts = Self::default();
        for agent in agents {
            match agent.state() {
                HealthState::Healthy => counts.healthy += 1,
                HealthState::Carrier | HealthState::Infected => counts.infected += 1,
                HealthState::Recovered => counts.recovered += 1,
                HealthState::Dead => counts.dead += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.healthy + self.infected + self.recovered + self.dead
    }
}

/// Owns the population, the arena and the tunables, and advances them one
/// tick at a time. Single-threaded; every random draw comes from `rng`.
pub struct SimulationWorld {
    agents: Vec<Agent>,
    rng: SimRng,
    arena: Arena,
    params: SimulationParams,
    agent_radius: f32,
    counts: HealthCounts,
    elapsed: f32,
}

impl SimulationWorld {
    /// An empty world. `seed` makes every run reproducible; `None` seeds from entropy.
    pub fn new(arena: Arena, params: SimulationParams, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SimRng::seed_from_u64(seed),
            None => SimRng::from_entropy(),
        };
        Self {
            agents: Vec::new(),
            rng,
            arena,
            params: params.sanitized(),
            agent_radius: DEFAULT_AGENT_RADIUS,
            counts: HealthCounts::default(),
            elapsed: 0.0,
        }
    }

    pub fn with_agent_radius(mut self, radius: f32) -> Self {
        self.agent_radius = sanitize("agent_radius", radius, self.agent_radius, 0.0, f32::MAX);
        self
    }

    /// Replaces the population with `population_size` fresh Healthy agents and
    /// infects the first few of them.
    pub fn initialize(&mut self, population_size: usize) {
        self.set_population_size(population_size);
        let count = self.params.population_size;

        self.agents.clear();
        self.agents.reserve(count);
        self.elapsed = 0.0;

        for _ in 0..count {
            let position = self.find_spawn_position();
            let agent = Agent::spawn(&mut self.rng, position, self.agent_radius, self.params.speed);
            self.agents.push(agent);
        }

        let (incubation, infection) = (self.params.incubation_period, self.params.infection_period);
        for agent in self.agents.iter_mut().take(INITIAL_INFECTED_COUNT) {
            agent.infect(incubation, infection);
        }

        self.recount();
        log::info!(
            "Initialized {} agents in {:.0}x{:.0} arena ({} infected)",
            count,
            self.arena.width(),
            self.arena.height(),
            self.counts.infected
        );
    }

    /// Clears every agent and restores the documented default parameters.
    pub fn reset(&mut self) {
        self.agents.clear();
        self.params = SimulationParams::default();
        self.elapsed = 0.0;
        self.recount();
        log::info!("Simulation reset to defaults");
    }

    /// Best-effort non-overlapping spawn point; after `MAX_SPAWN_ATTEMPTS`
    /// misses the last candidate is used anyway.
    fn find_spawn_position(&mut self) -> Vec2 {
        let radius = self.agent_radius;
        let mut candidate = self.random_position(radius);
        for attempt in 1..=MAX_SPAWN_ATTEMPTS {
            let clear = self
                .agents
                .iter()
                .all(|other| candidate.distance(other.position()) > radius + other.radius());
            if clear {
                return candidate;
            }
            if attempt < MAX_SPAWN_ATTEMPTS {
                candidate = self.random_position(radius);
            }
        }
        log::debug!(
            "No free spawn spot after {} attempts, placing overlapping agent at {:?}",
            MAX_SPAWN_ATTEMPTS,
            candidate
        );
        candidate
    }

    fn random_position(&mut self, radius: f32) -> Vec2 {
        Vec2::new(
            sample_axis(&mut self.rng, self.arena.left + radius, self.arena.right - radius),
            sample_axis(&mut self.rng, self.arena.top + radius, self.arena.bottom - radius),
        )
    }

    /// Advances the world by `dt` seconds.
    ///
    /// Order: agent updates, then the all-pairs collision and infection pass,
    /// then boundary sticking, then the recount. `dt == 0` changes nothing.
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::warn!("Ignoring invalid tick duration {}", dt);
            0.0
        };
        if dt <= 0.0 {
            self.recount();
            return;
        }
        self.elapsed += dt;

        // --- Agent updates ---
        let death_chance = self.params.death_chance;
        for (index, agent) in self.agents.iter_mut().enumerate() {
            if agent.update(dt, &self.arena, death_chance, &mut self.rng) == Some(HealthState::Dead) {
                log::debug!("Agent {} died at t={:.2}s", index, self.elapsed);
            }
        }

        // --- Pairwise pass (each unordered pair once) ---
        let count = self.agents.len();
        for i in 0..count {
            let (head, tail) = self.agents.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                let distance = a.position().distance(b.position());
                collision::resolve(a, b, distance);
                infection::check_pair(a, b, distance, &self.params, &mut self.rng);
            }
        }

        // --- Boundary sticking ---
        for agent in self.agents.iter_mut() {
            boundary::resolve_sticking(agent, &self.arena, &mut self.rng);
        }

        self.recount();
    }

    fn recount(&mut self) {
        self.counts = HealthCounts::from_agents(&self.agents);
    }

    /// Adds a hand-built agent, e.g. for scripted scenarios.
    pub fn add_agent(&mut self, agent: Agent) {
        self.agents.push(agent);
        self.recount();
    }

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn counts(&self) -> HealthCounts {
        self.counts
    }

    #[inline]
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    #[inline]
    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Simulated seconds since the last initialize/reset.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// True once no Carrier or Infected agent is left.
    pub fn is_settled(&self) -> bool {
        self.counts.infected == 0
    }

    // --- Parameter mutators (sanitized, never fail) ---

    pub fn set_infection_chance(&mut self, value: f32) {
        self.params.infection_chance = sanitize(
            "infection_chance",
            value,
            self.params.infection_chance,
            MIN_CHANCE,
            MAX_CHANCE,
        );
    }

    pub fn set_death_chance(&mut self, value: f32) {
        self.params.death_chance = sanitize(
            "death_chance",
            value,
            self.params.death_chance,
            MIN_CHANCE,
            MAX_CHANCE,
        );
    }

    pub fn set_infection_radius(&mut self, value: f32) {
        self.params.infection_radius = sanitize(
            "infection_radius",
            value,
            self.params.infection_radius,
            MIN_INFECTION_RADIUS,
            MAX_INFECTION_RADIUS,
        );
    }

    /// Also applied to every living agent right away.
    pub fn set_speed(&mut self, value: f32) {
        let speed = sanitize("speed", value, self.params.speed, MIN_SPEED, MAX_SPEED);
        self.params.speed = speed;
        for agent in self.agents.iter_mut().filter(|a| !a.is_dead()) {
            agent.set_speed(speed);
        }
    }

    /// Only agents infected from now on use the new value.
    pub fn set_incubation_period(&mut self, value: f32) {
        self.params.incubation_period = sanitize(
            "incubation_period",
            value,
            self.params.incubation_period,
            MIN_INCUBATION_PERIOD,
            MAX_PERIOD,
        );
    }

    /// Only agents infected from now on use the new value.
    pub fn set_infection_period(&mut self, value: f32) {
        self.params.infection_period = sanitize(
            "infection_period",
            value,
            self.params.infection_period,
            MIN_INFECTION_PERIOD,
            MAX_PERIOD,
        );
    }

    /// Takes effect on the next `initialize`.
    pub fn set_population_size(&mut self, value: usize) {
        if value > MAX_POPULATION_SIZE {
            log::warn!(
                "Clamped population_size from {} to {}",
                value,
                MAX_POPULATION_SIZE
            );
        }
        self.params.population_size = value.min(MAX_POPULATION_SIZE);
    }
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min < max {
        rng.gen_range(min..=max)
    } else {
        (min + max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(seed: u64) -> SimulationWorld {
        SimulationWorld::new(
            Arena::new(0.0, 0.0, 800.0, 600.0),
            SimulationParams::default(),
            Some(seed),
        )
    }

    #[test]
    fn test_initialize_seeds_three_carriers() {
        let mut world = world(1);
        world.initialize(70);
        assert_eq!(world.agents().len(), 70);
        let carriers = world
            .agents()
            .iter()
            .filter(|a| a.state() == HealthState::Carrier)
            .count();
        assert_eq!(carriers, 3);
        assert_eq!(world.counts().healthy, 67);
        assert_eq!(world.counts().infected, 3);
    }

    #[test]
    fn test_initialize_small_population() {
        let mut world = world(2);
        world.initialize(2);
        assert_eq!(world.counts().infected, 2);
        assert_eq!(world.counts().healthy, 0);

        world.initialize(0);
        assert!(world.agents().is_empty());
        assert_eq!(world.counts(), HealthCounts::default());
        world.tick(0.1);
        assert_eq!(world.counts().total(), 0);
    }

    #[test]
    fn test_spawn_positions_inside_arena() {
        let mut world = world(3);
        world.initialize(150);
        let arena = world.arena();
        for agent in world.agents() {
            let p = agent.position();
            assert!(p.x - agent.radius() >= arena.left && p.x + agent.radius() <= arena.right);
            assert!(p.y - agent.radius() >= arena.top && p.y + agent.radius() <= arena.bottom);
            assert!((agent.direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut world = world(4);
        world.initialize(30);
        let before: Vec<_> = world.agents().iter().map(|a| (a.position(), a.state())).collect();
        world.tick(0.0);
        world.tick(-1.0);
        world.tick(f32::NAN);
        let after: Vec<_> = world.agents().iter().map(|a| (a.position(), a.state())).collect();
        assert_eq!(before, after);
        assert_eq!(world.elapsed(), 0.0);
    }

    #[test]
    fn test_setters_clamp_values() {
        let mut world = world(5);
        world.set_infection_chance(2.0);
        world.set_death_chance(-1.0);
        world.set_infection_radius(f32::NAN);
        world.set_population_size(MAX_POPULATION_SIZE * 2);
        assert_eq!(world.params().infection_chance, 1.0);
        assert_eq!(world.params().death_chance, 0.0);
        assert_eq!(world.params().infection_radius, DEFAULT_INFECTION_RADIUS);
        assert_eq!(world.params().population_size, MAX_POPULATION_SIZE);
    }

    #[test]
    fn test_set_speed_reaches_living_agents() {
        let mut world = world(6);
        world.initialize(10);
        world.set_speed(120.0);
        assert!(world.agents().iter().all(|a| a.speed() == 120.0));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut world = world(7);
        world.set_infection_chance(0.9);
        world.set_population_size(5);
        world.initialize(5);
        world.reset();
        assert!(world.agents().is_empty());
        assert_eq!(world.params(), &SimulationParams::default());
        assert_eq!(world.counts().total(), 0);
    }

    #[test]
    fn test_counts_cover_every_agent() {
        let mut world = world(8);
        world.initialize(60);
        for _ in 0..300 {
            world.tick(FIXED_TIMESTEP * 4.0);
            assert_eq!(world.counts().total(), world.agents().len());
        }
    }
}
// --- End of File: simulation.rs ---
