use crate::vertex::Vertex;

#[derive(Debug, Default, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn add_polyline(&mut self, points: &[[f32; 2]], color: [f32; 4], width: f32) {
        for pair in points.windows(2) {
            let (p1, p2) = (pair[0], pair[1]);
            let dx = p2[0] - p1[0];
            let dy = p2[1] - p1[1];
            let len = (dx * dx + dy * dy).sqrt();
            if len > 0.0 {
                let nx = -dy / len * width * 0.5;
                let ny = dx / len * width * 0.5;
                self.add_quad(
                    [
                        [p1[0] - nx, p1[1] - ny],
                        [p1[0] + nx, p1[1] + ny],
                        [p2[0] + nx, p2[1] + ny],
                        [p2[0] - nx, p2[1] - ny],
                    ],
                    color,
                );
            }
        }
    }

    pub fn add_quad(&mut self, corners: [[f32; 2]; 4], color: [f32; 4]) {
        let base = self.vertices.len() as u32;
        self.vertices
            .extend(corners.iter().map(|&position| Vertex { position, color }));
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    pub fn add_rect(&mut self, position: [f32; 2], size: [f32; 2], color: [f32; 4]) {
        self.add_quad(
            [
                position,
                [position[0] + size[0], position[1]],
                [position[0] + size[0], position[1] + size[1]],
                [position[0], position[1] + size[1]],
            ],
            color,
        );
    }

    pub fn add_triangle(&mut self, points: [[f32; 2]; 3], color: [f32; 4]) {
        let base = self.vertices.len() as u32;
        self.vertices
            .extend(points.iter().map(|&position| Vertex { position, color }));
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    pub fn append(&mut self, other: &Mesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_polyline_quads() {
        let mut mesh = Mesh::new();
        mesh.add_polyline(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]], BLACK, 2.0);

        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices.len(), 12);
        assert_eq!(mesh.vertices[0].position, [0.0, -1.0]);
        assert_eq!(mesh.vertices[1].position, [0.0, 1.0]);
        assert_eq!(&mesh.indices[6..], &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_zero_length_segments_skipped() {
        let mut mesh = Mesh::new();
        mesh.add_polyline(&[[3.0, 3.0], [3.0, 3.0]], BLACK, 2.0);
        mesh.add_polyline(&[[3.0, 3.0]], BLACK, 2.0);
        assert!(mesh.is_empty());
        assert!(mesh.vertices.iter().all(|v| v.position[0].is_finite()));
    }

    #[test]
    fn test_append_offsets_indices() {
        let mut a = Mesh::new();
        a.add_rect([0.0, 0.0], [1.0, 1.0], BLACK);
        let mut b = Mesh::new();
        b.add_triangle([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], BLACK);

        a.append(&b);
        assert_eq!(a.vertices.len(), 7);
        assert_eq!(&a.indices[6..], &[4, 5, 6]);

        a.clear();
        assert!(a.is_empty());
        assert!(a.vertices.is_empty());
    }
}
