//! End-to-end pipeline scenarios: generate -> analyze -> forecast,
//! plus serialization round-trips across the public records.

use salescast::prelude::*;

#[test]
fn full_pipeline_on_synthetic_data() {
    let series = GeneratorConfig::new().with_seed(2024).generate().unwrap();

    // Generated shape: exactly two contiguous years, non-negative values
    assert_eq!(series.len(), 24);
    assert_eq!(series.first_period(), Some(Period::new(2022, 1).unwrap()));
    assert_eq!(series.last_period(), Some(Period::new(2023, 12).unwrap()));
    assert!(series.values().iter().all(|&v| v >= 0.0));

    // Trend analysis is defined on the full two-year window
    let trends = analyze_trends(&series).expect("non-empty series");
    assert!(trends.average_monthly > 0.0);
    assert!(trends.std_deviation >= 0.0);
    assert!(trends.year_over_year_growth.is_finite());
    assert!(trends.total > 0.0);
    assert!(trends.min <= trends.max);

    // The generator builds in 15% year-over-year growth; noise is ±15%,
    // so the measured growth should land well inside a generous band.
    assert!(trends.year_over_year_growth > 0.0);
    assert!(trends.year_over_year_growth < 0.4);

    // Forecast continues the calendar and brackets every point
    let forecast = compute_forecast(&series, 12).unwrap();
    assert_eq!(forecast.len(), 12);
    assert_eq!(forecast[0].period, Period::new(2024, 1).unwrap());
    for point in &forecast {
        assert!(point.lower <= point.value && point.value <= point.upper);
        assert!(point.value >= 0.0);
    }

    // Auxiliary utilities accept the raw values directly
    let values = series.values();
    let smoothed = moving_average(&values, 3);
    assert_eq!(smoothed.len(), 22);

    let report = detect_outliers_default(&values);
    assert_eq!(report.len(), 24);
}

#[test]
fn forecast_respects_seasonal_structure() {
    // The seasonal table peaks in summer months {12,1,2}; the forecast
    // for those positions should sit above the trough months {6,7,8}.
    let series = GeneratorConfig::new().with_seed(11).generate().unwrap();
    let forecast = compute_forecast(&series, 12).unwrap();

    let by_month = |m: u32| {
        forecast
            .iter()
            .find(|p| p.period.month() == m)
            .map(|p| p.value)
            .unwrap()
    };

    let peak = (by_month(12) + by_month(1) + by_month(2)) / 3.0;
    let trough = (by_month(6) + by_month(7) + by_month(8)) / 3.0;
    assert!(peak > trough);
}

#[test]
fn single_year_series_degrades_without_crashing() {
    // 12 months of month*1000 for one year only
    let values: Vec<f64> = (1..=12).map(|m| m as f64 * 1000.0).collect();
    let series = MonthlySeries::from_values(Period::new(2023, 1).unwrap(), values).unwrap();

    let trends = analyze_trends(&series).expect("non-empty series");
    assert!(trends.year_over_year_growth.is_nan());
    assert!(trends.average_monthly.is_finite());

    let forecast = compute_forecast(&series, 12).unwrap();
    assert_eq!(forecast.len(), 12);
    assert_eq!(forecast[0].period, Period::new(2024, 1).unwrap());
}

#[test]
fn profiles_summarize_the_generated_calendar() {
    let series = GeneratorConfig::new().with_seed(3).generate().unwrap();

    let months = monthly_profile(&series);
    assert_eq!(months.len(), 12);
    assert!(months.iter().all(|m| m.count == 2));

    let quarters = quarterly_profile(&series);
    assert_eq!(quarters.len(), 4);
    assert!(quarters.iter().all(|q| q.count == 6));

    let quarter_total: f64 = quarters.iter().map(|q| q.total).sum();
    let month_total: f64 = months.iter().map(|m| m.total).sum();
    assert!((quarter_total - month_total).abs() < 1e-6);
}

#[test]
fn series_round_trips_through_json() {
    let series = GeneratorConfig::new().with_seed(8).generate().unwrap();

    let json = serde_json::to_string(&series).unwrap();
    assert!(json.contains("\"2022-01\""));
    assert!(json.contains("\"2023-12\""));

    let back: MonthlySeries = serde_json::from_str(&json).unwrap();
    assert_eq!(back, series);
}

#[test]
fn analysis_records_round_trip_through_json() {
    let series = GeneratorConfig::new().with_seed(8).generate().unwrap();

    let trends = analyze_trends(&series).unwrap();
    let json = serde_json::to_string(&trends).unwrap();
    let back: TrendSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, trends);

    let forecast = compute_forecast(&series, 12).unwrap();
    let json = serde_json::to_string(&forecast).unwrap();
    let back: Vec<ForecastPoint> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, forecast);

    let report = detect_outliers_default(&series.values());
    let json = serde_json::to_string(&report).unwrap();
    let back: Vec<OutlierPoint> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn deserialization_rejects_corrupted_period_keys() {
    let json = r#"[{"period":"2022-1","value":10.0}]"#;
    assert!(serde_json::from_str::<MonthlySeries>(json).is_err());
}
