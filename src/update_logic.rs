use crate::app_state::State;
use wgpu::util::DeviceExt;

impl State {
    pub fn update(&mut self) {
        if self.scene_dirty {
            self.controller.redraw(&mut self.scene);
            self.scene_dirty = false;
            self.frame_dirty = true;
        }
        if !self.frame_dirty {
            return;
        }

        self.frame.clear();
        self.frame.append(&self.scene);
        self.toolbar.build(self.controller.tool(), &mut self.frame);
        self.frame_dirty = false;

        if self.frame.is_empty() {
            self.geometry.vertex = None;
            self.geometry.index = None;
            self.geometry.count = 0;
            return;
        }

        self.geometry.vertex = Some(self.gpu.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Sketch Vertex Buffer"),
                contents: bytemuck::cast_slice(&self.frame.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
        self.geometry.index = Some(self.gpu.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Sketch Index Buffer"),
                contents: bytemuck::cast_slice(&self.frame.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));
        self.geometry.count = self.frame.indices.len() as u32;
    }
}
