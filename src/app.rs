use crate::app_state::State;
use crate::config::SketchConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

struct App {
    config: SketchConfig,
    proxy: Option<EventLoopProxy<State>>,
    state: Option<State>,
}

impl App {
    fn new(config: SketchConfig, event_loop: &EventLoop<State>) -> Self {
        Self {
            config,
            proxy: Some(event_loop.create_proxy()),
            state: None,
        }
    }
}

impl ApplicationHandler<State> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // The proxy is taken on first resume so the GPU state is only built once.
        let Some(proxy) = self.proxy.take() else {
            return;
        };

        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes().with_title("roughsketch");

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::WindowAttributesExtWebSys;
            window_attributes = window_attributes.with_append(true);
        }

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        let config = self.config.clone();

        cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                wasm_bindgen_futures::spawn_local(async move {
                    match State::new(window, &config).await {
                        Ok(state) => {
                            if proxy.send_event(state).is_err() {
                                log::error!("Event loop closed before the canvas was ready");
                            }
                        }
                        Err(e) => log::error!("{:#}", e),
                    }
                });
            } else {
                match pollster::block_on(State::new(window, &config)) {
                    Ok(state) => {
                        if proxy.send_event(state).is_err() {
                            log::error!("Event loop closed before the canvas was ready");
                        }
                    }
                    Err(e) => {
                        log::error!("{:#}", e);
                        event_loop.exit();
                    }
                }
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, mut state: State) {
        let size = state.window().inner_size();
        state.resize(size);
        state.window().request_redraw();
        self.state = Some(state);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };
        if window_id != state.window().id() || state.input(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(physical_size) => {
                log::info!("WindowEvent::Resized: {}x{}", physical_size.width, physical_size.height);
                state.resize(physical_size);
                state.window().request_redraw();
            }
            WindowEvent::RedrawRequested => {
                state.update();
                match state.render() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        state.resize(state.size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of GPU memory");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("Dropped frame: {:?}", e),
                }
            }
            _ => {}
        }
    }
}

pub fn run() -> Result<()> {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            console_log::init_with_level(log::Level::Info).context("failed to init logger")?;
        } else {
            env_logger::init();
        }
    }

    let config = SketchConfig::from_env();
    let event_loop = EventLoop::<State>::with_user_event()
        .build()
        .context("failed to create event loop")?;
    let mut app = App::new(config, &event_loop);

    event_loop.run_app(&mut app).context("event loop failed")?;
    Ok(())
}
