use crate::app_state::State;
use crate::settings::Settings;
use anyhow::Context;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

struct App {
    settings: Settings,
    state: Option<State>,
}

impl App {
    fn create_state(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<State> {
        let window_attributes = Window::default_attributes()
            .with_title("wtransform")
            .with_inner_size(winit::dpi::LogicalSize::new(800.0, 600.0));

        let window = event_loop
            .create_window(window_attributes)
            .context("failed to create window")?;

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::WindowExtWebSys;

            let canvas = window.canvas().map(web_sys::Element::from);
            let attached = web_sys::window()
                .and_then(|win| win.document())
                .zip(canvas)
                .and_then(|(doc, canvas)| {
                    let dst = doc.get_element_by_id("wasm-example")?;
                    dst.append_child(&canvas).ok()?;
                    Some(())
                });
            if attached.is_none() {
                log::warn!("Couldn't append canvas to document body");
            }
        }

        log::info!(
            "Window created: {}x{}",
            window.inner_size().width,
            window.inner_size().height
        );
        log::info!("Settings: {}", self.settings.to_json()?);

        pollster::block_on(State::new(Arc::new(window), self.settings))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_none() {
            match self.create_state(event_loop) {
                Ok(state) => self.state = Some(state),
                Err(e) => {
                    log::error!("Startup failed: {:#}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            if window_id == state.window().id() {
                if !state.input(&event) {
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
                        }
                        WindowEvent::RedrawRequested => {
                            state.update();
                            match state.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    state.resize(state.size)
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    log::error!("Out of GPU memory");
                                    event_loop.exit()
                                }
                                Err(e) => log::error!("Render failed: {:?}", e),
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window().request_redraw();
        }
    }
}

pub async fn run(settings: Settings) {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            let _ = console_log::init_with_level(log::Level::Info);
        } else {
            env_logger::init();
        }
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };
    let mut app = App {
        settings,
        state: None,
    };

    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop terminated: {}", e);
    }
}
