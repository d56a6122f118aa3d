// --- File: config.rs ---
use crate::constants::*;

/// A tunable rejected by [`SimulationParams::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("{name} must be a finite number")]
    NotFinite { name: &'static str },

    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// The externally tunable parameters of a simulation run.
///
/// Owned by the world and passed explicitly into the agent methods that need
/// them. Periods are in simulated seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub infection_chance: f32,
    pub death_chance: f32,
    pub infection_radius: f32,
    pub speed: f32,
    pub incubation_period: f32,
    pub infection_period: f32,
    pub population_size: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            infection_chance: DEFAULT_INFECTION_CHANCE,
            death_chance: DEFAULT_DEATH_CHANCE,
            infection_radius: DEFAULT_INFECTION_RADIUS,
            speed: DEFAULT_SPEED,
            incubation_period: DEFAULT_INCUBATION_PERIOD,
            infection_period: DEFAULT_INFECTION_PERIOD,
            population_size: DEFAULT_POPULATION_SIZE,
        }
    }
}

impl SimulationParams {
    /// Reports the first parameter that is non-finite or outside its sane range.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_range("infection_chance", self.infection_chance, MIN_CHANCE, MAX_CHANCE)?;
        check_range("death_chance", self.death_chance, MIN_CHANCE, MAX_CHANCE)?;
        check_range(
            "infection_radius",
            self.infection_radius,
            MIN_INFECTION_RADIUS,
            MAX_INFECTION_RADIUS,
        )?;
        check_range("speed", self.speed, MIN_SPEED, MAX_SPEED)?;
        check_range(
            "incubation_period",
            self.incubation_period,
            MIN_INCUBATION_PERIOD,
            MAX_PERIOD,
        )?;
        check_range(
            "infection_period",
            self.infection_period,
            MIN_INFECTION_PERIOD,
            MAX_PERIOD,
        )?;
        if self.population_size > MAX_POPULATION_SIZE {
            return Err(ParamError::OutOfRange {
                name: "population_size",
                value: self.population_size as f64,
                min: 0.0,
                max: MAX_POPULATION_SIZE as f64,
            });
        }
        Ok(())
    }

    /// Returns a copy with every parameter forced into its sane range.
    /// Non-finite values fall back to the documented default.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            infection_chance: sanitize(
                "infection_chance",
                self.infection_chance,
                defaults.infection_chance,
                MIN_CHANCE,
                MAX_CHANCE,
            ),
            death_chance: sanitize(
                "death_chance",
                self.death_chance,
                defaults.death_chance,
                MIN_CHANCE,
                MAX_CHANCE,
            ),
            infection_radius: sanitize(
                "infection_radius",
                self.infection_radius,
                defaults.infection_radius,
                MIN_INFECTION_RADIUS,
                MAX_INFECTION_RADIUS,
            ),
            speed: sanitize("speed", self.speed, defaults.speed, MIN_SPEED, MAX_SPEED),
            incubation_period: sanitize(
                "incubation_period",
                self.incubation_period,
                defaults.incubation_period,
                MIN_INCUBATION_PERIOD,
                MAX_PERIOD,
            ),
            infection_period: sanitize(
                "infection_period",
                self.infection_period,
                defaults.infection_period,
                MIN_INFECTION_PERIOD,
                MAX_PERIOD,
            ),
            population_size: self.population_size.min(MAX_POPULATION_SIZE),
        }
    }
}

fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), ParamError> {
    if !value.is_finite() {
        return Err(ParamError::NotFinite { name });
    }
    if value < min || value > max {
        return Err(ParamError::OutOfRange {
            name,
            value: value as f64,
            min: min as f64,
            max: max as f64,
        });
    }
    Ok(())
}

/// Clamps `value` into `[min, max]`, falling back to `previous` when it is not
/// a number. Anything that had to change is logged.
pub(crate) fn sanitize(name: &str, value: f32, previous: f32, min: f32, max: f32) -> f32 {
    if !value.is_finite() {
        log::warn!("Ignoring non-finite {}: {}, keeping {}", name, value, previous);
        return previous;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("Clamped {} from {} to {}", name, value, clamped);
    }
    clamped
}

// --- End of File: config.rs ---
