// --- File: infection.rs ---
use crate::agent::{Agent, HealthState};
use crate::config::SimulationParams;
use rand::Rng;

/// Whether `source` may infect `target` at `distance` (before the dice roll).
///
/// Only strictly Healthy targets qualify; Recovered agents are immune.
#[inline]
pub fn can_transmit(source: &Agent, target: &Agent, distance: f32, infection_radius: f32) -> bool {
    source.state().is_infectious()
        && target.state() == HealthState::Healthy
        && distance < infection_radius
}

/// One directional transmission attempt. Rolls only when eligible, and on
/// success infects `target` with the periods current at this moment.
pub fn try_transmit<R: Rng + ?Sized>(
    source: &Agent,
    target: &mut Agent,
    distance: f32,
    params: &SimulationParams,
    rng: &mut R,
) -> bool {
    if !can_transmit(source, target, distance, params.infection_radius) {
        return false;
    }
    if rng.gen_range(0.0f32..1.0) < params.infection_chance {
        target.infect(params.incubation_period, params.infection_period)
    } else {
        false
    }
}

/// Evaluates both directions of a pair. At most one can be eligible since one
/// side has to be Healthy and the other infectious. Returns the number of new
/// infections (0 or 1).
pub fn check_pair<R: Rng + ?Sized>(
    a: &mut Agent,
    b: &mut Agent,
    distance: f32,
    params: &SimulationParams,
    rng: &mut R,
) -> usize {
    let mut infections = 0;
    if try_transmit(a, b, distance, params, rng) {
        infections += 1;
    }
    if try_transmit(b, a, distance, params, rng) {
        infections += 1;
    }
    infections
}

// --- End of File: infection.rs ---
