// --- File: constants.rs ---
// --- Documented simulation defaults (restored by `reset`) ---
pub const DEFAULT_INFECTION_CHANCE: f32 = 0.3;
pub const DEFAULT_DEATH_CHANCE: f32 = 0.05;
pub const DEFAULT_INFECTION_RADIUS: f32 = 30.0;
pub const DEFAULT_SPEED: f32 = 70.0;
pub const DEFAULT_INCUBATION_PERIOD: f32 = 5.0; // seconds
pub const DEFAULT_INFECTION_PERIOD: f32 = 10.0; // seconds
pub const DEFAULT_POPULATION_SIZE: usize = 70;

// Agents are discs of this radius unless the world is built with another one.
pub const DEFAULT_AGENT_RADIUS: f32 = 10.0;

// --- State machine ---
// Accumulated infected time between two death rolls.
pub const DEATH_CHECK_INTERVAL: f32 = 5.0;
// Agents infected unconditionally by `initialize`.
pub const INITIAL_INFECTED_COUNT: usize = 3;

// --- Collision ---
// 1.0 = perfectly elastic.
pub const RESTITUTION: f32 = 1.0;

// --- Spawning ---
// Random placements tried per agent before accepting an overlapping spot.
pub const MAX_SPAWN_ATTEMPTS: usize = 32;

// --- Sane parameter ranges (values outside are clamped) ---
pub const MIN_CHANCE: f32 = 0.0;
pub const MAX_CHANCE: f32 = 1.0;
pub const MIN_INFECTION_RADIUS: f32 = 0.1;
pub const MAX_INFECTION_RADIUS: f32 = 10_000.0;
pub const MIN_SPEED: f32 = 0.1;
pub const MAX_SPEED: f32 = 10_000.0;
pub const MIN_INCUBATION_PERIOD: f32 = 0.0;
pub const MIN_INFECTION_PERIOD: f32 = 0.1;
pub const MAX_PERIOD: f32 = 3_600.0;
pub const MAX_POPULATION_SIZE: usize = 10_000;

// --- Headless driver ---
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
pub const ARENA_WIDTH: f32 = 1000.0;
pub const ARENA_HEIGHT: f32 = 600.0;
pub const REPORT_INTERVAL_SECS: f32 = 5.0;
// --- End of File: constants.rs ---
