use crate::drawing::Tool;
use crate::mesh::Mesh;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarHit {
    Tool(Tool),
    Clear,
}

struct Button {
    hit: ToolbarHit,
    position: [f32; 2],
    size: [f32; 2],
}

impl Button {
    fn contains(&self, pos: [f32; 2]) -> bool {
        pos[0] >= self.position[0]
            && pos[0] <= self.position[0] + self.size[0]
            && pos[1] >= self.position[1]
            && pos[1] <= self.position[1] + self.size[1]
    }

    fn center(&self) -> [f32; 2] {
        [
            self.position[0] + self.size[0] / 2.0,
            self.position[1] + self.size[1] / 2.0,
        ]
    }
}

const BACKGROUND: [f32; 4] = [0.95, 0.95, 0.95, 0.9];
const SELECTED: [f32; 4] = [0.5, 0.7, 1.0, 1.0];
const IDLE: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
const ICON: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
const BUTTON_SIZE: f32 = 40.0;

pub struct Toolbar {
    buttons: Vec<Button>,
    bounds: ([f32; 2], [f32; 2]),
}

impl Toolbar {
    pub fn new() -> Self {
        let hits = [
            ToolbarHit::Tool(Tool::Selection),
            ToolbarHit::Tool(Tool::Line),
            ToolbarHit::Tool(Tool::Rectangle),
            ToolbarHit::Tool(Tool::Ellipse),
            ToolbarHit::Clear,
        ];
        let buttons: Vec<Button> = hits
            .into_iter()
            .enumerate()
            .map(|(i, hit)| Button {
                hit,
                position: [10.0 + i as f32 * (BUTTON_SIZE + 10.0), 10.0],
                size: [BUTTON_SIZE, BUTTON_SIZE],
            })
            .collect();
        let width = buttons.len() as f32 * (BUTTON_SIZE + 10.0) + 10.0;

        Self {
            buttons,
            bounds: ([5.0, 5.0], [width, BUTTON_SIZE + 10.0]),
        }
    }

    pub fn is_mouse_over(&self, pos: [f32; 2]) -> bool {
        let (origin, size) = self.bounds;
        pos[0] >= origin[0]
            && pos[0] <= origin[0] + size[0]
            && pos[1] >= origin[1]
            && pos[1] <= origin[1] + size[1]
    }

    pub fn handle_click(&self, pos: [f32; 2]) -> Option<ToolbarHit> {
        self.buttons
            .iter()
            .find(|button| button.contains(pos))
            .map(|button| button.hit)
    }

    pub fn build(&self, current_tool: Tool, mesh: &mut Mesh) {
        let (origin, size) = self.bounds;
        mesh.add_rect(origin, size, BACKGROUND);

        for button in &self.buttons {
            let fill = if button.hit == ToolbarHit::Tool(current_tool) {
                SELECTED
            } else {
                IDLE
            };
            mesh.add_rect(button.position, button.size, fill);

            let c = button.center();
            match button.hit {
                ToolbarHit::Tool(Tool::Selection) => mesh.add_triangle(
                    [[c[0] - 5.0, c[1] - 8.0], [c[0] + 5.0, c[1]], [c[0], c[1] + 8.0]],
                    ICON,
                ),
                ToolbarHit::Tool(Tool::Line) => {
                    mesh.add_polyline(&[[c[0] - 8.0, c[1] + 8.0], [c[0] + 8.0, c[1] - 8.0]], ICON, 2.0)
                }
                ToolbarHit::Tool(Tool::Rectangle) => mesh.add_polyline(
                    &[
                        [c[0] - 8.0, c[1] - 6.0],
                        [c[0] + 8.0, c[1] - 6.0],
                        [c[0] + 8.0, c[1] + 6.0],
                        [c[0] - 8.0, c[1] + 6.0],
                        [c[0] - 8.0, c[1] - 6.0],
                    ],
                    ICON,
                    2.0,
                ),
                ToolbarHit::Tool(Tool::Ellipse) => {
                    const SEGMENTS: usize = 16;
                    let ring: Vec<[f32; 2]> = (0..=SEGMENTS)
                        .map(|i| {
                            let angle = i as f32 * std::f32::consts::TAU / SEGMENTS as f32;
                            [c[0] + angle.cos() * 9.0, c[1] + angle.sin() * 6.0]
                        })
                        .collect();
                    mesh.add_polyline(&ring, ICON, 2.0);
                }
                ToolbarHit::Clear => {
                    mesh.add_polyline(&[[c[0] - 7.0, c[1] - 7.0], [c[0] + 7.0, c[1] + 7.0]], ICON, 2.0);
                    mesh.add_polyline(&[[c[0] - 7.0, c[1] + 7.0], [c[0] + 7.0, c[1] - 7.0]], ICON, 2.0);
                }
            }
        }
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_picks_buttons() {
        let toolbar = Toolbar::new();
        assert_eq!(toolbar.handle_click([30.0, 30.0]), Some(ToolbarHit::Tool(Tool::Selection)));
        assert_eq!(toolbar.handle_click([80.0, 30.0]), Some(ToolbarHit::Tool(Tool::Line)));
        assert_eq!(toolbar.handle_click([180.0, 30.0]), Some(ToolbarHit::Tool(Tool::Ellipse)));
        assert_eq!(toolbar.handle_click([230.0, 30.0]), Some(ToolbarHit::Clear));
        // Gap between buttons.
        assert_eq!(toolbar.handle_click([55.0, 30.0]), None);
        assert_eq!(toolbar.handle_click([30.0, 300.0]), None);
    }

    #[test]
    fn test_mouse_over_covers_gaps() {
        let toolbar = Toolbar::new();
        assert!(toolbar.is_mouse_over([55.0, 30.0]));
        assert!(!toolbar.is_mouse_over([400.0, 30.0]));
        assert!(!toolbar.is_mouse_over([30.0, 100.0]));
    }

    #[test]
    fn test_build_highlights_current_tool() {
        let toolbar = Toolbar::new();
        let mut mesh = Mesh::new();
        toolbar.build(Tool::Rectangle, &mut mesh);

        let highlighted = mesh.vertices.iter().filter(|v| v.color == SELECTED).count();
        assert_eq!(highlighted, 4);
    }
}
