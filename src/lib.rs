//! # salescast
//!
//! Sales-forecasting analytics for monthly time series.
//!
//! Provides synthetic seasonal series generation, descriptive trend
//! statistics, seasonal index estimation, a simplified seasonal-trend
//! forecaster with confidence bounds, and small statistical utilities
//! (moving averages, z-score outlier detection).
//!
//! Everything is a pure, stateless computation over value types: a
//! caller obtains a [`core::MonthlySeries`] (real or synthetic), runs
//! [`analysis::analyze_trends`] and [`models::compute_forecast`], and
//! hands the resulting records to whatever presentation layer consumes
//! them.
//!
//! ```
//! use salescast::prelude::*;
//!
//! let series = GeneratorConfig::new().with_seed(7).generate()?;
//! let trends = analyze_trends(&series).expect("series is non-empty");
//! let forecast = compute_forecast(&series, 12)?;
//!
//! assert_eq!(series.len(), 24);
//! assert_eq!(forecast.len(), 12);
//! assert!(trends.average_monthly > 0.0);
//! # Ok::<(), salescast::AnalyticsError>(())
//! ```

pub mod analysis;
pub mod core;
pub mod detection;
pub mod error;
pub mod models;
pub mod synth;
pub mod transform;
pub mod utils;

pub use error::{AnalyticsError, Result};

pub mod prelude {
    pub use crate::analysis::{
        analyze_trends, monthly_profile, quarterly_profile, seasonal_indices, MonthProfile,
        QuarterProfile, TrendSummary,
    };
    pub use crate::core::{ForecastPoint, MonthlySeries, Observation, Period};
    pub use crate::detection::{detect_outliers, detect_outliers_default, OutlierPoint};
    pub use crate::error::{AnalyticsError, Result};
    pub use crate::models::{compute_forecast, ForecastOrigin, SeasonalTrend};
    pub use crate::synth::GeneratorConfig;
    pub use crate::transform::moving_average;
}
