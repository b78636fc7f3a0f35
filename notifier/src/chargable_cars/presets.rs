use common::utils::position::{BoundingBox, Position};

/// Names accepted by [`preset_area`]
pub const PRESET_AREAS: [&str; 3] = ["DTU", "Lundto", "Bagsvaerd"];

/// Areas watched by the scheduled notifier
pub fn preset_area(name: &str) -> Option<BoundingBox> {
    let (corner1, corner2) = match name {
        "DTU" => (
            Position::new(55.794430, 12.511368),
            Position::new(55.779566, 12.527933),
        ),
        "Lundto" => (
            Position::new(55.794551, 12.520745),
            Position::new(55.792620, 12.529628),
        ),
        "Bagsvaerd" => (
            Position::new(55.759287, 12.451061),
            Position::new(55.753806, 12.458088),
        ),
        _ => return None,
    };

    Some(BoundingBox::new(corner1, corner2))
}
