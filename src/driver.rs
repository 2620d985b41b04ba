//! Autoplay driver: steps a simulation on a fixed delay

use crate::game_of_life::Simulation;
use std::ops::ControlFlow;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Repeatedly steps a simulation, waiting `interval` after each completed step
///
/// The delay is re-armed once a step and its callback finish, so ticks never
/// overlap and slow callbacks push later ticks back.
#[derive(Debug, Clone)]
pub struct Autoplay {
    interval: Duration,
    limit: Option<u64>,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            limit: None,
        }
    }
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            limit: None,
        }
    }

    /// Stop after `generations` steps
    pub fn with_limit(mut self, generations: Option<u64>) -> Self {
        self.limit = generations;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Drive `simulation`, calling `on_tick` after every step.
    ///
    /// Returns the number of steps taken. Stops when the limit is reached or
    /// `on_tick` returns `ControlFlow::Break`.
    pub fn run<F>(&self, simulation: &mut Simulation, mut on_tick: F) -> u64
    where
        F: FnMut(&Simulation) -> ControlFlow<()>,
    {
        info!(interval_ms = self.interval.as_millis() as u64, limit = ?self.limit, "autoplay started");
        let mut steps = 0;

        loop {
            if self.limit.is_some_and(|limit| steps >= limit) {
                break;
            }

            simulation.step();
            steps += 1;

            if on_tick(simulation).is_break() {
                debug!(steps, "autoplay stopped by caller");
                break;
            }

            if self.limit.is_some_and(|limit| steps >= limit) {
                break;
            }
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }

        info!(steps, generation = simulation.generation(), "autoplay finished");
        steps
    }
}
