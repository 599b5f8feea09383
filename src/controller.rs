use crate::bridge::RenderBridge;
use crate::drawing::{Element, ElementKind, Tool, create_element};
use crate::geometry::{Point, is_finite_point};
use crate::hit::find_at_position;
use crate::store::ElementStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Drawing,
    Moving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Redraw,
    SetCursor(CursorHint),
}

#[derive(Debug, Clone)]
pub struct SelectedElement<D> {
    pub element: Element<D>,
    pub offset: [f32; 2],
}

pub struct InteractionController<B: RenderBridge> {
    bridge: B,
    store: ElementStore<B::Descriptor>,
    tool: Tool,
    state: InteractionState,
    selected: Option<SelectedElement<B::Descriptor>>,
    last_pointer: Option<Point>,
}

impl<B: RenderBridge> InteractionController<B> {
    pub fn new(bridge: B) -> Self {
        Self {
            bridge,
            store: ElementStore::new(),
            tool: Tool::default(),
            state: InteractionState::Idle,
            selected: None,
            last_pointer: None,
        }
    }

    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tool = tool;
        self
    }

    pub fn set_tool(&mut self, tool: Tool) -> Action {
        self.tool = tool;
        match tool {
            Tool::Selection => Action::None,
            _ => Action::SetCursor(CursorHint::Default),
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn store(&self) -> &ElementStore<B::Descriptor> {
        &self.store
    }

    pub fn selected(&self) -> Option<&SelectedElement<B::Descriptor>> {
        self.selected.as_ref()
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> Action {
        let Some(pos) = self.sanitize([x, y]) else {
            return Action::None;
        };
        self.selected = None;

        match self.tool.element_kind() {
            None => {
                let Some(element) = find_at_position(pos, self.store.all()) else {
                    self.state = InteractionState::Idle;
                    return Action::None;
                };
                let start = element.start();
                log::debug!("Selected element {} at {:?}", element.id(), pos);
                self.selected = Some(SelectedElement {
                    element: element.clone(),
                    offset: [pos[0] - start[0], pos[1] - start[1]],
                });
                self.state = InteractionState::Moving;
                Action::None
            }
            Some(kind) => {
                let id = self.store.next_id();
                let element =
                    create_element(&mut self.bridge, id, pos[0], pos[1], pos[0], pos[1], kind);
                if let Err(e) = self.store.append(element) {
                    log::warn!("Dropping new element: {}", e);
                    return Action::None;
                }
                log::debug!("Drawing {:?} {} from {:?}", kind, id, pos);
                self.state = InteractionState::Drawing;
                Action::Redraw
            }
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> Action {
        let Some(pos) = self.sanitize([x, y]) else {
            return Action::None;
        };

        match self.state {
            InteractionState::Drawing => {
                let Some(last) = self.store.last() else {
                    return Action::None;
                };
                let (id, kind, start) = (last.id(), last.kind(), last.start());
                self.rebuild(id, kind, start, pos)
            }
            InteractionState::Moving => {
                let Some(selected) = &self.selected else {
                    return Action::None;
                };
                let original = &selected.element;
                let [x1, y1, x2, y2] = original.coords();
                let new_x1 = pos[0] - selected.offset[0];
                let new_y1 = pos[1] - selected.offset[1];
                let (id, kind) = (original.id(), original.kind());
                self.rebuild(
                    id,
                    kind,
                    [new_x1, new_y1],
                    [new_x1 + (x2 - x1), new_y1 + (y2 - y1)],
                )
            }
            InteractionState::Idle if self.tool == Tool::Selection => {
                if find_at_position(pos, self.store.all()).is_some() {
                    Action::SetCursor(CursorHint::Move)
                } else {
                    Action::SetCursor(CursorHint::Default)
                }
            }
            InteractionState::Idle => Action::None,
        }
    }

    pub fn pointer_up(&mut self) -> Action {
        if self.state != InteractionState::Idle {
            log::debug!("Gesture finished ({:?})", self.state);
        }
        self.state = InteractionState::Idle;
        self.selected = None;
        Action::None
    }

    pub fn clear(&mut self) -> Action {
        log::info!("Clearing {} elements", self.store.len());
        self.store.clear();
        self.state = InteractionState::Idle;
        self.selected = None;
        Action::Redraw
    }

    pub fn redraw(&self, surface: &mut B::Surface) {
        self.bridge.clear(surface);
        for element in self.store.all() {
            self.bridge.draw(surface, element.descriptor());
        }
    }

    fn rebuild(&mut self, id: usize, kind: ElementKind, start: Point, end: Point) -> Action {
        let extent = [end[0] - start[0], end[1] - start[1]];
        if !(is_finite_point(start) && is_finite_point(end) && is_finite_point(extent)) {
            log::warn!("Ignoring non-finite geometry {:?} -> {:?} for element {}", start, end, id);
            return Action::None;
        }
        let element = create_element(&mut self.bridge, id, start[0], start[1], end[0], end[1], kind);
        match self.store.replace_at(id, element) {
            Ok(()) => Action::Redraw,
            Err(e) => {
                log::warn!("Ignoring update: {}", e);
                Action::None
            }
        }
    }

    fn sanitize(&mut self, pos: Point) -> Option<Point> {
        if is_finite_point(pos) {
            self.last_pointer = Some(pos);
            return Some(pos);
        }
        log::warn!("Non-finite pointer position {:?}", pos);
        self.last_pointer
    }
}
