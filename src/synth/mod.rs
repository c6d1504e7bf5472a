//! Synthetic monthly sales data generation.
//!
//! Produces a seasonal, trending demonstration series with uniform
//! multiplicative noise. Randomness is isolated behind a seed or an
//! injected [`Rng`] so the rest of the pipeline stays deterministic
//! and testable.

use crate::core::{MonthlySeries, Observation, Period};
use crate::error::{AnalyticsError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for the synthetic sales series generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Baseline monthly sales volume.
    pub base_volume: f64,
    /// First calendar year of the generated span.
    pub start_year: i32,
    /// Number of full years to generate.
    pub years: u32,
    /// Multiplicative growth applied per elapsed year.
    pub yearly_growth: f64,
    /// Lower bound of the per-point uniform noise factor.
    pub noise_low: f64,
    /// Upper bound of the per-point uniform noise factor.
    pub noise_high: f64,
    /// Random seed for reproducibility (None for entropy).
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_volume: 20_000.0,
            start_year: 2022,
            years: 2,
            yearly_growth: 1.15,
            noise_low: 0.85,
            noise_high: 1.15,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Create the default two-year configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the baseline monthly volume.
    pub fn with_base_volume(mut self, base_volume: f64) -> Self {
        self.base_volume = base_volume;
        self
    }

    /// Set the first calendar year.
    pub fn with_start_year(mut self, start_year: i32) -> Self {
        self.start_year = start_year;
        self
    }

    /// Set the number of full years to generate.
    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    /// Generate a series, seeding an internal RNG from `seed` (or
    /// entropy when no seed is set).
    pub fn generate(&self) -> Result<MonthlySeries> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with(&mut rng)
    }

    /// Generate a series drawing noise from the supplied source.
    ///
    /// Each point is
    /// `round(base * seasonal_factor(month) * yearly_growth^year_index
    /// * uniform(noise_low..=noise_high) * (1 + (month-1)*0.02))`,
    /// plus a decorative trend-line annotation
    /// `round(base + index*150 + sin(index*0.5)*2000)` that no other
    /// computation consumes.
    pub fn generate_with(&self, rng: &mut impl Rng) -> Result<MonthlySeries> {
        if !(self.base_volume.is_finite() && self.base_volume > 0.0) {
            return Err(AnalyticsError::InvalidParameter(format!(
                "base volume must be finite and positive, got {}",
                self.base_volume
            )));
        }
        if self.years == 0 {
            return Err(AnalyticsError::InvalidParameter(
                "years must be positive".to_string(),
            ));
        }
        if !(self.noise_low > 0.0 && self.noise_low <= self.noise_high) {
            return Err(AnalyticsError::InvalidParameter(format!(
                "noise bounds must satisfy 0 < low <= high, got {}..{}",
                self.noise_low, self.noise_high
            )));
        }

        let months = self.years as usize * 12;
        let mut observations = Vec::with_capacity(months);

        for index in 0..months {
            let year_index = (index / 12) as u32;
            let month = (index % 12) as u32 + 1;

            let growth = self.yearly_growth.powi(year_index as i32);
            let noise = rng.gen_range(self.noise_low..=self.noise_high);
            let month_ramp = 1.0 + (month - 1) as f64 * 0.02;
            let value =
                (self.base_volume * seasonal_factor(month) * growth * noise * month_ramp).round();

            let trend_line =
                (self.base_volume + index as f64 * 150.0 + (index as f64 * 0.5).sin() * 2000.0)
                    .round();

            observations.push(Observation {
                period: Period::new(self.start_year + year_index as i32, month)?,
                value,
                trend_line: Some(trend_line),
            });
        }

        MonthlySeries::new(observations)
    }
}

/// Fixed four-tier seasonal table. The tiers are mutually exclusive and
/// exhaustive over months 1..=12: summer-peak {12,1,2}, moderate {3,4,5},
/// low {6,7,8}, moderate-high {9,10,11}.
fn seasonal_factor(month: u32) -> f64 {
    match month {
        12 | 1 | 2 => 1.4,
        3..=5 => 1.1,
        6..=8 => 0.7,
        _ => 1.2,
    }
}
