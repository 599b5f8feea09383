pub type Point = [f32; 2];

pub const LINE_HIT_EPSILON: f32 = 1.0;

pub fn distance(a: Point, b: Point) -> f32 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}

pub fn point_in_bounding_box(p: Point, corner1: Point, corner2: Point) -> bool {
    let min_x = corner1[0].min(corner2[0]);
    let max_x = corner1[0].max(corner2[0]);
    let min_y = corner1[1].min(corner2[1]);
    let max_y = corner1[1].max(corner2[1]);

    p[0] >= min_x && p[0] <= max_x && p[1] >= min_y && p[1] <= max_y
}

pub fn point_near_segment(p: Point, a: Point, b: Point, epsilon: f32) -> bool {
    let offset = distance(a, b) - (distance(a, p) + distance(b, p));
    offset.abs() < epsilon
}

pub fn is_finite_point(p: Point) -> bool {
    p[0].is_finite() && p[1].is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert!((distance([0.0, 0.0], [3.0, 4.0]) - 5.0).abs() < 0.001);
        assert_eq!(distance([2.0, 2.0], [2.0, 2.0]), 0.0);
    }

    #[test]
    fn test_bounding_box_inclusive_edges() {
        assert!(point_in_bounding_box([10.0, 10.0], [10.0, 10.0], [50.0, 30.0]));
        assert!(point_in_bounding_box([50.0, 30.0], [10.0, 10.0], [50.0, 30.0]));
        assert!(point_in_bounding_box([30.0, 20.0], [10.0, 10.0], [50.0, 30.0]));
        assert!(!point_in_bounding_box([51.0, 20.0], [10.0, 10.0], [50.0, 30.0]));
        assert!(!point_in_bounding_box([30.0, 9.0], [10.0, 10.0], [50.0, 30.0]));
    }

    #[test]
    fn test_bounding_box_corner_order_symmetric() {
        let corners = [
            ([10.0, 10.0], [50.0, 30.0]),
            ([50.0, 10.0], [10.0, 30.0]),
            ([-5.0, 40.0], [5.0, -40.0]),
        ];
        let probes = [
            [0.0, 0.0],
            [30.0, 20.0],
            [10.0, 30.0],
            [-6.0, 0.0],
            [60.0, 60.0],
        ];

        for (a, b) in corners {
            for p in probes {
                assert_eq!(point_in_bounding_box(p, a, b), point_in_bounding_box(p, b, a));
            }
        }
    }

    #[test]
    fn test_point_near_segment() {
        let a = [0.0, 0.0];
        let b = [10.0, 0.0];
        assert!(point_near_segment([5.0, 0.0], a, b, LINE_HIT_EPSILON));
        assert!(point_near_segment([0.0, 0.0], a, b, LINE_HIT_EPSILON));
        assert!(!point_near_segment([5.0, 3.0], a, b, LINE_HIT_EPSILON));
        // Collinear but past the end.
        assert!(!point_near_segment([12.0, 0.0], a, b, LINE_HIT_EPSILON));
    }

    #[test]
    fn test_point_near_degenerate_segment() {
        let a = [4.0, 4.0];
        assert!(point_near_segment([4.0, 4.0], a, a, LINE_HIT_EPSILON));
        assert!(point_near_segment([4.3, 4.0], a, a, LINE_HIT_EPSILON));
        assert!(!point_near_segment([6.0, 4.0], a, a, LINE_HIT_EPSILON));
    }

    #[test]
    fn test_is_finite_point() {
        assert!(is_finite_point([1.0, -2.0]));
        assert!(!is_finite_point([f32::NAN, 0.0]));
        assert!(!is_finite_point([0.0, f32::INFINITY]));
    }
}
