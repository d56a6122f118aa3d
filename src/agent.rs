// --- File: agent.rs ---
use crate::boundary::{Arena, reflect_off_edges};
use crate::constants::DEATH_CHECK_INTERVAL;
use crate::utils::{normalize_or, random_unit_vector};
use glam::Vec2;
use rand::Rng;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HealthState {
    Healthy,
    Carrier,
    Infected,
    Recovered,
    Dead,
}

impl HealthState {
    /// Carrier and Infected agents can pass the contagion on.
    pub fn is_infectious(self) -> bool {
        matches!(self, HealthState::Carrier | HealthState::Infected)
    }

    pub fn is_alive(self) -> bool {
        self != HealthState::Dead
    }
}

/// One mobile individual.
///
/// `direction` is kept at unit length by every setter; speed is tracked
/// separately. Timers are only meaningful in the state that uses them.
#[derive(Debug, Clone)]
pub struct Agent {
    position: Vec2,
    direction: Vec2,
    speed: f32,
    radius: f32,
    state: HealthState,
    incubation_remaining: f32,
    infection_remaining: f32,
    time_since_last_death_check: f32,
}

impl Agent {
    /// A Healthy agent. A zero `direction` is replaced by +X.
    pub fn new(position: Vec2, direction: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            position,
            direction: normalize_or(direction, Vec2::X),
            speed: speed.max(0.0),
            radius: radius.max(0.0),
            state: HealthState::Healthy,
            incubation_remaining: 0.0,
            infection_remaining: 0.0,
            time_since_last_death_check: 0.0,
        }
    }

    /// A Healthy agent heading in a random direction.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, position: Vec2, radius: f32, speed: f32) -> Self {
        Self::new(position, random_unit_vector(rng), radius, speed)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn state(&self) -> HealthState {
        self.state
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.state == HealthState::Dead
    }

    pub fn velocity(&self) -> Vec2 {
        self.direction * self.speed
    }

    pub fn incubation_remaining(&self) -> f32 {
        self.incubation_remaining
    }

    pub fn infection_remaining(&self) -> f32 {
        self.infection_remaining
    }

    pub fn set_position(&mut self, position: Vec2) {
        if position.is_finite() {
            self.position = position;
        }
    }

    /// Stores the normalized `direction`; a degenerate vector keeps the current heading.
    pub fn set_direction(&mut self, direction: Vec2) {
        self.direction = normalize_or(direction, self.direction);
    }

    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_finite() {
            self.speed = speed.max(0.0);
        }
    }

    /// Healthy -> Carrier. Any other state is left untouched.
    ///
    /// Both periods are captured here, so later parameter changes never touch an
    /// in-progress countdown. Returns whether the agent was infected.
    pub fn infect(&mut self, incubation_period: f32, infection_period: f32) -> bool {
        if self.state != HealthState::Healthy {
            return false;
        }
        self.state = HealthState::Carrier;
        self.incubation_remaining = incubation_period.max(0.0);
        self.infection_remaining = infection_period.max(0.0);
        self.time_since_last_death_check = 0.0;
        true
    }

    /// Advances timers, runs the state machine, then moves the agent and
    /// reflects it off the arena edges. Dead agents do nothing.
    ///
    /// Returns the state entered during this update, if any.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        arena: &Arena,
        death_chance: f32,
        rng: &mut R,
    ) -> Option<HealthState> {
        if self.is_dead() {
            return None;
        }

        let mut entered = None;
        match self.state {
            HealthState::Carrier => {
                self.incubation_remaining -= dt;
                if self.incubation_remaining <= 0.0 {
                    self.incubation_remaining = 0.0;
                    self.state = HealthState::Infected;
                    entered = Some(HealthState::Infected);
                }
            }
            HealthState::Infected => {
                self.infection_remaining -= dt;
                self.time_since_last_death_check += dt;

                // Every full interval of accumulated infected time is one check;
                // the remainder carries over to the next update.
                let checks = (self.time_since_last_death_check / DEATH_CHECK_INTERVAL).floor();
                if checks >= 1.0 {
                    self.time_since_last_death_check =
                        self.time_since_last_death_check.rem_euclid(DEATH_CHECK_INTERVAL);
                    if rng.gen_range(0.0f32..1.0) < death_probability(death_chance, checks) {
                        self.state = HealthState::Dead;
                        return Some(HealthState::Dead);
                    }
                }

                if self.infection_remaining <= 0.0 {
                    self.infection_remaining = 0.0;
                    self.state = HealthState::Recovered;
                    entered = Some(HealthState::Recovered);
                }
            }
            HealthState::Healthy | HealthState::Recovered | HealthState::Dead => {}
        }

        self.position += self.direction * self.speed * dt;
        reflect_off_edges(self, arena);
        entered
    }
}

/// Chance that at least one of `checks` independent rolls at `death_chance` hits.
fn death_probability(death_chance: f32, checks: f32) -> f32 {
    let p = death_chance.clamp(0.0, 1.0);
    if checks <= 1.0 {
        return p;
    }
    (1.0 - (1.0 - p as f64).powf(checks as f64)) as f32
}

// --- End of File: agent.rs ---
