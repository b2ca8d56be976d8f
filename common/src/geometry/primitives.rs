use super::{ColoredVertex, PositionVertex};

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];

/// Left half of the screen, one primary color per corner.
pub const COLORED_TRIANGLE_LEFT: [ColoredVertex; 3] = [
    ColoredVertex::new([-0.9, -0.5, 0.0], RED),
    ColoredVertex::new([0.0, -0.5, 0.0], GREEN),
    ColoredVertex::new([-0.45, 0.5, 0.0], BLUE),
];

/// Right half of the screen, mirrors `COLORED_TRIANGLE_LEFT`.
pub const PLAIN_TRIANGLE_RIGHT: [PositionVertex; 3] = [
    PositionVertex::new([0.0, -0.5, 0.0]),
    PositionVertex::new([0.9, -0.5, 0.0]),
    PositionVertex::new([0.45, 0.5, 0.0]),
];

pub const COLORED_TRIANGLE_CENTERED: [ColoredVertex; 3] = [
    ColoredVertex::new([-0.5, -0.5, 0.0], RED),
    ColoredVertex::new([0.5, -0.5, 0.0], GREEN),
    ColoredVertex::new([0.0, 0.5, 0.0], BLUE),
];

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn in_clip_space(position: [f32; 3]) -> bool {
        position.iter().all(|component| (-1.0..=1.0).contains(component))
    }

    // Twice the signed area in the xy plane, positive when counter-clockwise
    fn signed_area(positions: [[f32; 3]; 3]) -> f32 {
        let [a, b, c] = positions;
        (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])
    }

    #[test]
    fn triangles_are_visible() {
        assert!(COLORED_TRIANGLE_LEFT.iter().all(|vertex| in_clip_space(vertex.position)));
        assert!(PLAIN_TRIANGLE_RIGHT.iter().all(|vertex| in_clip_space(vertex.position)));
        assert!(COLORED_TRIANGLE_CENTERED.iter().all(|vertex| in_clip_space(vertex.position)));
    }

    #[test]
    fn triangles_wind_counter_clockwise() {
        assert!(signed_area(COLORED_TRIANGLE_LEFT.map(|vertex| vertex.position)) > 0.0);
        assert!(signed_area(PLAIN_TRIANGLE_RIGHT.map(|vertex| vertex.position)) > 0.0);
        assert!(signed_area(COLORED_TRIANGLE_CENTERED.map(|vertex| vertex.position)) > 0.0);
    }

    #[test]
    fn side_by_side_triangles_meet_at_origin() {
        assert_relative_eq!(COLORED_TRIANGLE_LEFT[1].position[0], 0.0);
        assert_relative_eq!(PLAIN_TRIANGLE_RIGHT[0].position[0], 0.0);

        for (left, right) in COLORED_TRIANGLE_LEFT.iter().zip(PLAIN_TRIANGLE_RIGHT.iter()) {
            assert_relative_eq!(left.position[1], right.position[1]);
        }
    }

    #[test]
    fn colored_corners_are_primaries() {
        let colors = COLORED_TRIANGLE_CENTERED.map(|vertex| vertex.color);

        assert_eq!(colors, [RED, GREEN, BLUE]);
        assert_eq!(colors, COLORED_TRIANGLE_LEFT.map(|vertex| vertex.color));
    }
}
