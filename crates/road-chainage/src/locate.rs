//! Coordinate lookup at a chainage

use crate::{ChainageError, Config, Metric, Polyline, Result, units};
use geo::Coord;

/// Native walk target for a km chainage on a polyline of native length `total`
///
/// The range check happens in km against the reported length, so a chainage equal to
/// [`LinearReference::length_km`](crate::LinearReference::length_km) is always accepted.
/// The converted target is clamped to `total` to absorb the km/native round trip.
pub(crate) fn native_target(chainage_km: f64, total: f64, config: &Config) -> Result<f64> {
    let length_km = config.native_to_km(total);
    if chainage_km > length_km {
        return Err(ChainageError::OutOfRange {
            requested_km: chainage_km,
            length_km,
        });
    }
    if chainage_km == length_km {
        return Ok(total);
    }
    Ok(config.km_to_native(chainage_km).min(total))
}

/// Coordinate at `chainage_km` along the polyline
///
/// Chainage 0 is the first vertex and the total length is the last vertex.
pub(crate) fn point_at<M: Metric + ?Sized>(
    polyline: &Polyline,
    chainage_km: f64,
    metric: &M,
    config: &Config,
) -> Result<Coord<f64>> {
    if !units::is_valid_distance(chainage_km) {
        return Err(ChainageError::InvalidInput(format!(
            "chainage must be finite and non-negative, got {chainage_km}"
        )));
    }

    let total = metric.total_length(polyline.coords());
    let target = native_target(chainage_km, total, config)?;

    metric
        .interpolate_at(polyline.coords(), target)
        .ok_or(ChainageError::OutOfRange {
            requested_km: chainage_km,
            length_km: config.native_to_km(total),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Planar;

    fn unit_config() -> Config {
        Config {
            meters_per_degree: 1000.0,
        }
    }

    fn elbow() -> Polyline {
        Polyline::from_points([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]).unwrap()
    }

    #[test]
    fn test_point_at_ends() {
        let config = unit_config();
        assert_eq!(
            point_at(&elbow(), 0.0, &Planar, &config).unwrap(),
            Coord { x: 0.0, y: 0.0 }
        );
        assert_eq!(
            point_at(&elbow(), 20.0, &Planar, &config).unwrap(),
            Coord { x: 10.0, y: 10.0 }
        );
    }

    #[test]
    fn test_point_at_vertex_and_interior() {
        let config = unit_config();
        assert_eq!(
            point_at(&elbow(), 10.0, &Planar, &config).unwrap(),
            Coord { x: 10.0, y: 0.0 }
        );
        assert_eq!(
            point_at(&elbow(), 12.5, &Planar, &config).unwrap(),
            Coord { x: 10.0, y: 2.5 }
        );
    }

    #[test]
    fn test_point_at_default_constant() {
        let point = point_at(&elbow(), 2.0, &Planar, &Config::default()).unwrap();
        assert!((point.x - 0.017_966_2).abs() < 1e-7);
        assert_eq!(point.y, 0.0);
    }

    #[test]
    fn test_beyond_length_fails() {
        let result = point_at(&elbow(), 20.001, &Planar, &unit_config());
        assert!(matches!(
            result,
            Err(ChainageError::OutOfRange { length_km, .. }) if (length_km - 20.0).abs() < 1e-12
        ));
    }

    #[test]
    fn test_negative_or_non_finite_fails() {
        for chainage in [-0.5, f64::NAN, f64::INFINITY] {
            let result = point_at(&elbow(), chainage, &Planar, &unit_config());
            assert!(matches!(result, Err(ChainageError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_reported_length_maps_to_last_vertex() {
        let config = Config::default();
        for i in 1..200 {
            let x = i as f64 * 0.0137;
            let polyline =
                Polyline::from_points([(0.0, 0.0), (x, 0.3 * x), (1.7 * x, 0.9 * x)]).unwrap();
            let length_km = config.native_to_km(Planar.total_length(polyline.coords()));

            let point = point_at(&polyline, length_km, &Planar, &config).unwrap();
            assert_eq!(point, polyline.last(), "polyline {i}");
        }
    }

    #[test]
    fn test_native_target_clamps() {
        let config = Config::default();
        let total = 0.3;
        let length_km = config.native_to_km(total);

        assert_eq!(native_target(length_km, total, &config), Ok(total));
        assert!(native_target(length_km * 0.5, total, &config).unwrap() <= total);
        assert_eq!(native_target(0.0, total, &config), Ok(0.0));
        assert!(matches!(
            native_target(length_km + 1e-6, total, &config),
            Err(ChainageError::OutOfRange { .. })
        ));
    }
}
