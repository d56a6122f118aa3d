use clap::Parser;
use contagion::constants::*;
use contagion::{Arena, HealthCounts, SimulationParams, SimulationWorld};

/// Headless driver: runs the contagion model at a fixed timestep and logs the
/// health counts as it goes.
#[derive(Parser, Debug)]
#[command(name = "contagion", version, about = "Agent-based contagion simulation", long_about = None)]
struct Cli {
    /// Number of agents
    #[arg(short = 'n', long, default_value_t = DEFAULT_POPULATION_SIZE)]
    population: usize,
    /// Simulated seconds to run (stops early once nobody is infectious)
    #[arg(short = 't', long, default_value_t = 120.0)]
    seconds: f32,
    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Probability of transmission per contact check
    #[arg(long, default_value_t = DEFAULT_INFECTION_CHANCE)]
    infection_chance: f32,
    /// Probability of dying at each death check
    #[arg(long, default_value_t = DEFAULT_DEATH_CHANCE)]
    death_chance: f32,
    /// Transmission distance between agent centres
    #[arg(long, default_value_t = DEFAULT_INFECTION_RADIUS)]
    infection_radius: f32,
    /// Agent speed in units per second
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    speed: f32,
    /// Carrier phase length in seconds
    #[arg(long, default_value_t = DEFAULT_INCUBATION_PERIOD)]
    incubation_period: f32,
    /// Infected phase length in seconds
    #[arg(long, default_value_t = DEFAULT_INFECTION_PERIOD)]
    infection_period: f32,
    #[arg(long, default_value_t = ARENA_WIDTH)]
    width: f32,
    #[arg(long, default_value_t = ARENA_HEIGHT)]
    height: f32,
    /// Simulated seconds between count reports
    #[arg(long, default_value_t = REPORT_INTERVAL_SECS)]
    report_interval: f32,
}

impl Cli {
    fn params(&self) -> SimulationParams {
        SimulationParams {
            infection_chance: self.infection_chance,
            death_chance: self.death_chance,
            infection_radius: self.infection_radius,
            speed: self.speed,
            incubation_period: self.incubation_period,
            infection_period: self.infection_period,
            population_size: self.population,
        }
    }
}

fn report(elapsed: f32, counts: HealthCounts) {
    log::info!(
        "t={:>7.2}s  healthy={:<4} infected={:<4} recovered={:<4} dead={:<4}",
        elapsed,
        counts.healthy,
        counts.infected,
        counts.recovered,
        counts.dead
    );
}

// --- Main Function ---
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let params = cli.params();
    params.validate()?;

    let arena = Arena::from_size(cli.width, cli.height);
    let mut world = SimulationWorld::new(arena, params, cli.seed);
    world.initialize(cli.population);
    report(world.elapsed(), world.counts());

    let mut since_report = 0.0;
    while world.elapsed() < cli.seconds {
        world.tick(FIXED_TIMESTEP);
        since_report += FIXED_TIMESTEP;
        if since_report >= cli.report_interval {
            since_report -= cli.report_interval;
            report(world.elapsed(), world.counts());
        }
        if world.is_settled() {
            log::info!("No infectious agents left after {:.2}s", world.elapsed());
            break;
        }
    }

    let counts = world.counts();
    report(world.elapsed(), counts);
    println!(
        "healthy={} infected={} recovered={} dead={}",
        counts.healthy, counts.infected, counts.recovered, counts.dead
    );
    Ok(())
}
