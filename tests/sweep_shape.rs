//! Sweep structure: point counts, retention, and report alignment.

use dgauss_bench::samplers::VARIANT_LABELS;
use dgauss_bench::{sweep_points, Config, Harness};

#[test]
fn default_sweep_covers_250_scale_values() {
    let points = sweep_points(&Config::default()).unwrap();
    assert_eq!(points.len(), 250);
    assert!((points[0].epsilon - 0.01).abs() < 1e-12);
    assert!((points[249].epsilon - 4.99).abs() < 1e-12);
    // Tighter budgets need less noise.
    assert!(points[0].mechanism.scale() > points[249].mechanism.scale());
}

#[test]
fn short_sweep_report_is_aligned_across_variants() {
    let config = Config {
        epsilon_start_hundredths: 40,
        epsilon_end_hundredths: 200,
        epsilon_step_hundredths: 80,
        draws: 40,
        warmup: 10,
        seed: Some(3),
        ..Config::default()
    };
    assert_eq!(config.point_count(), 2);

    let report = Harness::new(config).run().unwrap();
    assert_eq!(report.points.len(), 2);
    let sigmas = report.sigmas();
    assert!(sigmas[0] > sigmas[1]);

    for label in VARIANT_LABELS {
        let series = report.variant_series(label);
        assert_eq!(series.len(), 2, "{label}");
    }
    for point in &report.points {
        for variant in &point.variants {
            assert_eq!(variant.retained, 30);
        }
    }
}

#[test]
fn custom_retention_follows_draws_minus_warmup() {
    let config = Config {
        draws: 25,
        warmup: 7,
        seed: Some(8),
        ..Config::single_point(100)
    };
    let report = Harness::new(config).run().unwrap();
    for variant in &report.points[0].variants {
        assert_eq!(variant.retained, 18);
    }
}
