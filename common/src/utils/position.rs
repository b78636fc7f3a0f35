use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Random position anywhere on the globe
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            lat: rng.gen_range(-90.0..=90.0),
            lon: rng.gen_range(-180.0..=180.0),
        }
    }
}

/// Rectangular area given by two opposite corners.
///
/// The order of the corners is not normalized: `corner1` is usually the
/// north-west corner, but nothing checks it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub corner1: Position,
    pub corner2: Position,
}

impl BoundingBox {
    pub fn new(corner1: Position, corner2: Position) -> Self {
        Self { corner1, corner2 }
    }

    /// Midpoint of both corners, regardless of their order
    pub fn center(&self) -> Position {
        Position {
            lat: (self.corner1.lat + self.corner2.lat) / 2.0,
            lon: (self.corner1.lon + self.corner2.lon) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_midpoint() {
        let bbox = BoundingBox::new(
            Position::new(55.79443, 12.511368),
            Position::new(55.779566, 12.527933),
        );
        let center = bbox.center();

        assert!((center.lat - 55.786998).abs() < 1e-9);
        assert!((center.lon - 12.5196505).abs() < 1e-9);
    }

    #[test]
    fn test_center_ignores_corner_order() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(3.0, 4.0);

        assert_eq!(
            BoundingBox::new(a, b).center(),
            BoundingBox::new(b, a).center()
        );
    }

    #[test]
    fn test_random_is_in_range() {
        for _ in 0..100 {
            let p = Position::random();
            assert!((-90.0..=90.0).contains(&p.lat));
            assert!((-180.0..=180.0).contains(&p.lon));
        }
    }
}
