use crate::bridge::RenderBridge;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Selection,
    Line,
    Rectangle,
    Ellipse,
}

impl Tool {
    pub fn from_name(name: &str) -> Tool {
        match name.trim().to_ascii_lowercase().as_str() {
            "line" => Tool::Line,
            "rectangle" | "rect" => Tool::Rectangle,
            "ellipse" => Tool::Ellipse,
            "selection" | "select" => Tool::Selection,
            other => {
                log::warn!("Unknown tool {:?}, falling back to selection", other);
                Tool::Selection
            }
        }
    }

    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            Tool::Selection => None,
            Tool::Line => Some(ElementKind::Line),
            Tool::Rectangle => Some(ElementKind::Rectangle),
            Tool::Ellipse => Some(ElementKind::Ellipse),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Line,
    Rectangle,
    Ellipse,
}

#[derive(Debug, Clone)]
pub struct Element<D> {
    id: usize,
    kind: ElementKind,
    start: Point,
    end: Point,
    descriptor: D,
}

impl<D> Element<D> {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn coords(&self) -> [f32; 4] {
        [self.start[0], self.start[1], self.end[0], self.end[1]]
    }

    pub fn descriptor(&self) -> &D {
        &self.descriptor
    }
}

/// Builds an element and its render descriptor from raw anchors.
///
/// Boxes are normalized before they reach the bridge, so it never sees a
/// negative width or height; the stored anchors keep their original order.
pub fn create_element<B: RenderBridge>(
    bridge: &mut B,
    id: usize,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    kind: ElementKind,
) -> Element<B::Descriptor> {
    let descriptor = match kind {
        ElementKind::Line => bridge.make_line(x1, y1, x2, y2),
        ElementKind::Rectangle => {
            let (x, y, w, h) = normalized_box(x1, y1, x2, y2);
            bridge.make_box(x, y, w, h)
        }
        ElementKind::Ellipse => {
            let (x, y, w, h) = normalized_box(x1, y1, x2, y2);
            bridge.make_ellipse(x, y, w, h)
        }
    };

    Element {
        id,
        kind,
        start: [x1, y1],
        end: [x2, y2],
        descriptor,
    }
}

fn normalized_box(x1: f32, y1: f32, x2: f32, y2: f32) -> (f32, f32, f32, f32) {
    (x1.min(x2), y1.min(y2), (x2 - x1).abs(), (y2 - y1).abs())
}
