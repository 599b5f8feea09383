use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bridge::RenderBridge;
use crate::mesh::Mesh;
use std::f32::consts::{PI, TAU};

#[derive(Debug, Clone)]
pub struct RoughOptions {
    pub roughness: f32,
    pub bowing: f32,
    pub stroke_width: f32,
    pub max_randomness_offset: f32,
    pub curve_step_count: u32,
    pub curve_tightness: f32,
    pub disable_multi_stroke: bool,
}

impl Default for RoughOptions {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            stroke_width: 2.0,
            max_randomness_offset: 2.0,
            curve_step_count: 9,
            curve_tightness: 0.0,
            disable_multi_stroke: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoughShape {
    Line { start: [f32; 2], end: [f32; 2] },
    Rectangle { position: [f32; 2], size: [f32; 2] },
    Ellipse { center: [f32; 2], size: [f32; 2] },
}

#[derive(Debug, Clone)]
pub struct RoughDrawable {
    pub shape: RoughShape,
    pub strokes: Vec<Vec<[f32; 2]>>,
}

pub struct RoughGenerator {
    rng: StdRng,
    options: RoughOptions,
}

impl RoughGenerator {
    pub fn new(options: RoughOptions, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng, options }
    }

    pub fn options(&self) -> &RoughOptions {
        &self.options
    }

    fn random(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn offset(&mut self, min: f32, max: f32, gain: f32) -> f32 {
        self.options.roughness * gain * (self.random() * (max - min) + min)
    }

    fn offset_opt(&mut self, x: f32, gain: f32) -> f32 {
        self.offset(-x, x, gain)
    }

    pub fn line(&mut self, start: [f32; 2], end: [f32; 2]) -> RoughDrawable {
        let strokes = self.double_stroke(start, end);
        RoughDrawable {
            shape: RoughShape::Line { start, end },
            strokes,
        }
    }

    pub fn rectangle(&mut self, position: [f32; 2], size: [f32; 2]) -> RoughDrawable {
        let corners = [
            position,
            [position[0] + size[0], position[1]],
            [position[0] + size[0], position[1] + size[1]],
            [position[0], position[1] + size[1]],
        ];

        let mut strokes = Vec::new();
        for i in 0..4 {
            strokes.extend(self.double_stroke(corners[i], corners[(i + 1) % 4]));
        }

        RoughDrawable {
            shape: RoughShape::Rectangle { position, size },
            strokes,
        }
    }

    pub fn ellipse(&mut self, center: [f32; 2], size: [f32; 2]) -> RoughDrawable {
        let rx = size[0] / 2.0;
        let ry = size[1] / 2.0;
        let steps = self.options.curve_step_count.max(4);
        let increment = TAU / steps as f32;

        let mut strokes = vec![self.ellipse_stroke(center, rx, ry, increment, 1.0)];
        if !self.options.disable_multi_stroke {
            strokes.push(self.ellipse_stroke(center, rx, ry, increment, 1.5));
        }

        RoughDrawable {
            shape: RoughShape::Ellipse { center, size },
            strokes,
        }
    }

    fn double_stroke(&mut self, start: [f32; 2], end: [f32; 2]) -> Vec<Vec<[f32; 2]>> {
        let mut strokes = vec![self.stroke(start, end, false)];
        if !self.options.disable_multi_stroke {
            strokes.push(self.stroke(start, end, true));
        }
        strokes
    }

    fn stroke(&mut self, start: [f32; 2], end: [f32; 2], overlay: bool) -> Vec<[f32; 2]> {
        let length_sq = (start[0] - end[0]).powi(2) + (start[1] - end[1]).powi(2);
        let length = length_sq.sqrt();

        let gain = if length < 200.0 {
            1.0
        } else if length > 500.0 {
            0.4
        } else {
            -0.0016668 * length + 1.233334
        };

        let mut offset = self.options.max_randomness_offset;
        if offset * offset * 100.0 > length_sq {
            offset = length / 10.0;
        }
        let half = offset / 2.0;

        let diverge = 0.2 + self.random() * 0.2;
        let bow = self.options.bowing * self.options.max_randomness_offset / 200.0;
        let mut mid_x = bow * (end[1] - start[1]);
        let mut mid_y = bow * (start[0] - end[0]);
        mid_x += self.offset_opt(mid_x, gain);
        mid_y += self.offset_opt(mid_y, gain);

        // The overlay pass wanders half as far so the two strokes stay close.
        let reach = if overlay { half } else { offset };

        let p0 = [
            start[0] + self.offset_opt(reach, gain),
            start[1] + self.offset_opt(reach, gain),
        ];
        let cp1 = [
            mid_x + start[0] + (end[0] - start[0]) * diverge + self.offset_opt(reach, gain),
            mid_y + start[1] + (end[1] - start[1]) * diverge + self.offset_opt(reach, gain),
        ];
        let cp2 = [
            mid_x + start[0] + 2.0 * (end[0] - start[0]) * diverge + self.offset_opt(reach, gain),
            mid_y + start[1] + 2.0 * (end[1] - start[1]) * diverge + self.offset_opt(reach, gain),
        ];
        let p3 = [
            end[0] + self.offset_opt(reach, gain),
            end[1] + self.offset_opt(reach, gain),
        ];

        let mut points = vec![p0];
        points.extend(bezier(p0, cp1, cp2, p3, 10));
        points
    }

    fn ellipse_stroke(
        &mut self,
        center: [f32; 2],
        rx: f32,
        ry: f32,
        increment: f32,
        jitter: f32,
    ) -> Vec<[f32; 2]> {
        let rad_offset = self.offset_opt(0.5, 1.0) - PI / 2.0;
        let overlap = increment * (0.1 + self.random() * 0.3);
        let end_angle = rad_offset + TAU + overlap;

        let mut points = Vec::new();
        let mut angle = rad_offset;
        while angle <= end_angle {
            let px = rx + self.offset_opt(rx.abs() * 0.02 * jitter, 1.0);
            let py = ry + self.offset_opt(ry.abs() * 0.02 * jitter, 1.0);
            points.push([center[0] + px * angle.cos(), center[1] + py * angle.sin()]);
            angle += increment;
        }

        self.curve_through_points(&points)
    }

    fn curve_through_points(&self, points: &[[f32; 2]]) -> Vec<[f32; 2]> {
        if points.len() < 3 {
            return points.to_vec();
        }

        let s = 1.0 - self.options.curve_tightness;
        let mut padded = Vec::with_capacity(points.len() + 2);
        padded.push(points[0]);
        padded.extend_from_slice(points);
        padded.push(points[points.len() - 1]);

        let mut curve = vec![padded[1]];
        for i in 1..padded.len() - 2 {
            let (p0, p1, p2, p3) = (padded[i - 1], padded[i], padded[i + 1], padded[i + 2]);
            let cp1 = [
                p1[0] + s * (p2[0] - p0[0]) / 6.0,
                p1[1] + s * (p2[1] - p0[1]) / 6.0,
            ];
            let cp2 = [
                p2[0] + s * (p1[0] - p3[0]) / 6.0,
                p2[1] + s * (p1[1] - p3[1]) / 6.0,
            ];
            curve.extend(bezier(p1, cp1, cp2, p2, 6));
        }
        curve
    }
}

fn bezier(p0: [f32; 2], p1: [f32; 2], p2: [f32; 2], p3: [f32; 2], segments: u32) -> Vec<[f32; 2]> {
    (1..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let u = 1.0 - t;
            let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
            [
                a * p0[0] + b * p1[0] + c * p2[0] + d * p3[0],
                a * p0[1] + b * p1[1] + c * p2[1] + d * p3[1],
            ]
        })
        .collect()
}

pub struct RoughBridge {
    generator: RoughGenerator,
    color: [f32; 4],
}

impl RoughBridge {
    pub fn new(generator: RoughGenerator, color: [f32; 4]) -> Self {
        Self { generator, color }
    }
}

impl RenderBridge for RoughBridge {
    type Descriptor = RoughDrawable;
    type Surface = Mesh;

    fn make_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> RoughDrawable {
        self.generator.line([x1, y1], [x2, y2])
    }

    fn make_box(&mut self, x: f32, y: f32, width: f32, height: f32) -> RoughDrawable {
        self.generator.rectangle([x, y], [width, height])
    }

    fn make_ellipse(&mut self, x: f32, y: f32, width: f32, height: f32) -> RoughDrawable {
        self.generator
            .ellipse([x + width / 2.0, y + height / 2.0], [width, height])
    }

    fn clear(&self, surface: &mut Mesh) {
        surface.clear();
    }

    fn draw(&self, surface: &mut Mesh, descriptor: &RoughDrawable) {
        let width = self.generator.options().stroke_width;
        for stroke in &descriptor.strokes {
            surface.add_polyline(stroke, self.color, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::distance;

    fn generator(seed: u64) -> RoughGenerator {
        RoughGenerator::new(RoughOptions::default(), Some(seed))
    }

    #[test]
    fn test_seeded_output_is_deterministic() {
        let a = generator(7).rectangle([10.0, 10.0], [40.0, 20.0]);
        let b = generator(7).rectangle([10.0, 10.0], [40.0, 20.0]);
        assert_eq!(a.strokes, b.strokes);
    }

    #[test]
    fn test_line_stays_near_endpoints() {
        let drawable = generator(1).line([0.0, 0.0], [100.0, 0.0]);
        assert_eq!(drawable.strokes.len(), 2);

        for stroke in &drawable.strokes {
            assert_eq!(stroke.len(), 11);
            assert!(distance(stroke[0], [0.0, 0.0]) < 3.0);
            assert!(distance(stroke[stroke.len() - 1], [100.0, 0.0]) < 3.0);
        }
    }

    #[test]
    fn test_single_stroke_option() {
        let options = RoughOptions {
            disable_multi_stroke: true,
            ..RoughOptions::default()
        };
        let mut generator = RoughGenerator::new(options, Some(3));

        assert_eq!(generator.line([0.0, 0.0], [5.0, 5.0]).strokes.len(), 1);
        assert_eq!(generator.rectangle([0.0, 0.0], [5.0, 5.0]).strokes.len(), 4);
        assert_eq!(generator.ellipse([0.0, 0.0], [5.0, 5.0]).strokes.len(), 1);
    }

    #[test]
    fn test_rectangle_has_two_strokes_per_side() {
        let drawable = generator(2).rectangle([0.0, 0.0], [50.0, 30.0]);
        assert_eq!(drawable.strokes.len(), 8);
        assert_eq!(
            drawable.shape,
            RoughShape::Rectangle {
                position: [0.0, 0.0],
                size: [50.0, 30.0]
            }
        );
    }

    #[test]
    fn test_ellipse_points_hug_the_curve() {
        let drawable = generator(5).ellipse([50.0, 50.0], [100.0, 60.0]);
        for stroke in &drawable.strokes {
            assert!(stroke.len() > 10);
            for p in stroke {
                let nx = (p[0] - 50.0) / 50.0;
                let ny = (p[1] - 50.0) / 30.0;
                let r = (nx * nx + ny * ny).sqrt();
                assert!(r > 0.8 && r < 1.2, "point {:?} off the ellipse", p);
            }
        }
    }

    #[test]
    fn test_degenerate_shapes_stay_finite() {
        let mut generator = generator(9);
        let drawables = [
            generator.line([4.0, 4.0], [4.0, 4.0]),
            generator.rectangle([4.0, 4.0], [0.0, 0.0]),
            generator.ellipse([4.0, 4.0], [0.0, 0.0]),
        ];

        for drawable in &drawables {
            for stroke in &drawable.strokes {
                assert!(stroke.iter().all(|p| p[0].is_finite() && p[1].is_finite()));
            }
        }
    }

    #[test]
    fn test_bridge_paints_mesh() {
        let mut bridge = RoughBridge::new(generator(11), [0.0, 0.0, 0.0, 1.0]);
        let line = bridge.make_line(0.0, 0.0, 30.0, 0.0);
        let ellipse = bridge.make_ellipse(0.0, 0.0, 20.0, 10.0);
        assert_eq!(
            ellipse.shape,
            RoughShape::Ellipse {
                center: [10.0, 5.0],
                size: [20.0, 10.0]
            }
        );

        let mut mesh = Mesh::new();
        bridge.draw(&mut mesh, &line);
        let after_line = mesh.indices.len();
        assert!(after_line > 0);
        bridge.draw(&mut mesh, &ellipse);
        assert!(mesh.indices.len() > after_line);

        bridge.clear(&mut mesh);
        assert!(mesh.is_empty());
    }
}
