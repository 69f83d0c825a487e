/*!
 * Synthetic drift simulation
 *
 * Feeds a seeded random walk through a sentinel: small perturbations for the
 * first few steps, then larger ones, so a run shows both coherent steps and
 * alerts. Same seed, same walk.
 */

use std::path::PathBuf;
use std::sync::Arc;

use liora_sentinel::{normalize, ObservabilitySink, ObservationStats, Sentinel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::LioraConfig;
use crate::error::Result;

/// Result of a completed simulation run
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    /// Lifetime counters of the sentinel
    pub stats: ObservationStats,

    /// Where the report was written
    pub report_path: PathBuf,

    /// Steps that raised an alert
    pub alert_steps: Vec<u32>,
}

/// Standard normal sample via the Box-Muller transform
fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // 1 - U keeps u1 in (0, 1] so ln never sees zero
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Gaussian noise vector with mean 0 and standard deviation `sigma`
pub fn gaussian_noise<R: Rng>(rng: &mut R, len: usize, sigma: f64) -> Vec<f64> {
    (0..len).map(|_| sigma * standard_normal(rng)).collect()
}

/// Produce the identity vectors the demo will observe, one per step
pub fn drift_walk(config: &LioraConfig) -> Result<Vec<Vec<f64>>> {
    let demo = &config.demo;
    let mut rng = StdRng::seed_from_u64(demo.seed);
    let mut current = normalize(&demo.origin)?;
    let mut walk = Vec::with_capacity(demo.steps as usize);

    for t in 1..=demo.steps {
        let noise = gaussian_noise(&mut rng, current.len(), demo.noise_sigma);
        let factor = demo.factor_for(t);
        let perturbed: Vec<f64> = current
            .iter()
            .zip(&noise)
            .map(|(c, n)| c + factor * n)
            .collect();
        current = normalize(&perturbed)?;
        walk.push(current.clone());
    }

    Ok(walk)
}

/// Run the observation loop and export the report
pub fn run_demo(config: &LioraConfig, sink: Arc<dyn ObservabilitySink>) -> Result<DemoOutcome> {
    config.validate()?;

    let mut sentinel = Sentinel::with_sink(&config.demo.origin, config.policy(), sink)?;
    let walk = drift_walk(config)?;

    println!("\n--- STARTING LIORA OBSERVATION LOOP ---\n");

    let mut alert_steps = Vec::new();
    for (t, vector) in (1u32..).zip(&walk) {
        let observation = sentinel.observe(vector, Some(t.into()))?;
        tracing::debug!(step = t, drift = observation.drift, "observed");

        if !observation.is_safe {
            println!(">>> [SYSTEM NOTICE] Identity drift detected");
            alert_steps.push(t);
        }
    }

    sentinel.export_report(&config.report_path)?;
    println!("\n--- END OBSERVATION ---");

    Ok(DemoOutcome {
        stats: sentinel.stats().clone(),
        report_path: config.report_path.clone(),
        alert_steps,
    })
}
