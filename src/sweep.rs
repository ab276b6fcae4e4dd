//! Sweep generation: privacy parameters to scale values.

use crate::config::Config;
use crate::error::Result;
use crate::mechanism::GaussianDiscrete;

/// One point of the sweep: an epsilon value and the mechanism derived
/// from it (which carries the scale the samplers run at).
#[derive(Debug, Clone)]
pub struct SweepPoint {
    pub epsilon: f64,
    pub mechanism: GaussianDiscrete,
}

/// Materialise the full sweep up front.
///
/// Scale derivation failures abort the whole sweep; a partial sweep is
/// not a meaningful experiment.
///
/// # Errors
///
/// Propagates the first scale-derivation failure.
pub fn sweep_points(config: &Config) -> Result<Vec<SweepPoint>> {
    config
        .epsilons()
        .map(|epsilon| {
            let mechanism = GaussianDiscrete::new(epsilon, config.delta)?;
            Ok(SweepPoint { epsilon, mechanism })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point_sweep() {
        let config = Config::single_point(100);
        let points = sweep_points(&config).unwrap();
        assert_eq!(points.len(), 1);
        assert!((points[0].epsilon - 1.0).abs() < 1e-12);
        assert!(points[0].mechanism.scale() > 0.0);
    }

    #[test]
    fn test_scales_decrease_along_sweep() {
        let config = Config {
            epsilon_start_hundredths: 10,
            epsilon_end_hundredths: 200,
            epsilon_step_hundredths: 50,
            ..Config::default()
        };
        let points = sweep_points(&config).unwrap();
        assert_eq!(points.len(), 4);
        for pair in points.windows(2) {
            assert!(pair[0].mechanism.scale() > pair[1].mechanism.scale());
        }
    }

    #[test]
    fn test_default_sweep_point_count() {
        // Count only; deriving 250 scales is cheap, drawing samples is not.
        let config = Config::default();
        let points = sweep_points(&config).unwrap();
        assert_eq!(points.len(), 250);
    }
}
