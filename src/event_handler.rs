use crate::app_state::State;
use crate::controller::{Action, CursorHint};
use crate::drawing::Tool;
use crate::state::ScreenUniforms;
use crate::ui::ToolbarHit;

use winit::event::*;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::CursorIcon;

impl State {
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.gpu.config.width = new_size.width;
            self.gpu.config.height = new_size.height;
            self.gpu
                .surface
                .configure(&self.gpu.device, &self.gpu.config);

            let uniforms = ScreenUniforms {
                screen_size: [new_size.width as f32, new_size.height as f32],
                _padding: [0.0, 0.0],
            };
            self.gpu
                .queue
                .write_buffer(&self.screen.uniform, 0, bytemuck::cast_slice(&[uniforms]));
        }
    }

    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                match state {
                    ElementState::Pressed => {
                        let pos = self.input.mouse_pos;
                        if let Some(hit) = self.toolbar.handle_click(pos) {
                            match hit {
                                ToolbarHit::Tool(tool) => self.select_tool(tool),
                                ToolbarHit::Clear => self.clear_drawing(),
                            }
                            return true;
                        }
                        if self.toolbar.is_mouse_over(pos) {
                            return true;
                        }

                        self.input.gesture_active = true;
                        let action = self.controller.pointer_down(pos[0], pos[1]);
                        self.apply(action);
                    }
                    ElementState::Released => {
                        if self.input.gesture_active {
                            self.input.gesture_active = false;
                            let action = self.controller.pointer_up();
                            self.apply(action);
                        }
                    }
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.mouse_pos = [position.x as f32, position.y as f32];
                let pos = self.input.mouse_pos;

                if !self.input.gesture_active && self.toolbar.is_mouse_over(pos) {
                    self.apply(Action::SetCursor(CursorHint::Default));
                    return true;
                }
                let action = self.controller.pointer_move(pos[0], pos[1]);
                self.apply(action);
                true
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => match code {
                KeyCode::Digit1 => {
                    self.select_tool(Tool::Selection);
                    true
                }
                KeyCode::Digit2 => {
                    self.select_tool(Tool::Line);
                    true
                }
                KeyCode::Digit3 => {
                    self.select_tool(Tool::Rectangle);
                    true
                }
                KeyCode::Digit4 => {
                    self.select_tool(Tool::Ellipse);
                    true
                }
                KeyCode::Delete | KeyCode::Backspace => {
                    self.clear_drawing();
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    fn select_tool(&mut self, tool: Tool) {
        if self.controller.tool() != tool {
            log::debug!("Tool changed to {:?}", tool);
            let action = self.controller.set_tool(tool);
            self.apply(action);
            self.frame_dirty = true;
            self.window.request_redraw();
        }
    }

    fn clear_drawing(&mut self) {
        self.input.gesture_active = false;
        let action = self.controller.clear();
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Redraw => {
                self.scene_dirty = true;
                self.window.request_redraw();
            }
            Action::SetCursor(CursorHint::Move) => self.window.set_cursor(CursorIcon::Move),
            Action::SetCursor(CursorHint::Default) => self.window.set_cursor(CursorIcon::Default),
        }
    }
}
