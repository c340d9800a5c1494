use std::{sync::Arc, time::Instant};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowAttributes},
};

use crate::{
    game::{GameController, GameInput},
    gfx::RenderEngine,
    ui::UiManager,
};

/// Window, GPU and event loop around a loaded [`GameController`]
pub struct GameApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    controller: GameController,
    last_frame: Option<Instant>,
    init_error: Option<anyhow::Error>,
}

impl GameApp {
    pub fn new(controller: GameController) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new()?;

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                controller,
                last_frame: None,
                init_error: None,
            },
        })
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) -> anyhow::Result<()> {
        let Some(event_loop) = self.event_loop.take() else {
            anyhow::bail!("Event loop already consumed");
        };
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self.app_state)?;
        self.app_state.take_init_error()
    }
}

impl AppState {
    /// Keeps a startup failure so `run` can report it after the loop exits
    fn record_init_error(&mut self, error: anyhow::Error) {
        log::error!("Failed to initialize graphics: {:#}", error);
        self.init_error = Some(error);
    }

    fn take_init_error(&mut self) -> anyhow::Result<()> {
        match self.init_error.take() {
            Some(error) => Err(error.context("Startup failed")),
            None => Ok(()),
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window_config = &self.controller.config().window;
        let window = event_loop.create_window(
            WindowAttributes::default()
                .with_title(window_config.title.clone())
                .with_inner_size(winit::dpi::PhysicalSize::new(
                    window_config.width,
                    window_config.height,
                )),
        )?;
        let window_handle = Arc::new(window);

        grab_cursor(&window_handle);

        let (width, height) = window_handle.inner_size().into();
        let clear_color = window_config.clear_color;

        let window_clone = window_handle.clone();
        let renderer = pollster::block_on(async move {
            RenderEngine::new(window_clone, width, height, clear_color).await
        })?;

        self.controller.resize(width, height);
        self.controller
            .scene
            .init_gpu_resources(renderer.device(), renderer.transform_layout());

        let ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window_handle,
        );

        self.window = Some(window_handle);
        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        Ok(())
    }
}

/// Hides the cursor and keeps it inside the window for mouse look
fn grab_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(e) = grabbed {
        log::warn!("Could not grab cursor: {}", e);
    }
    window.set_cursor_visible(false);
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            self.record_init_error(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let (Some(render_engine), Some(ui_manager), Some(window)) = (
            self.render_engine.as_mut(),
            self.ui_manager.as_mut(),
            self.window.as_ref(),
        ) else {
            return;
        };

        let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
            window_id,
            event: event.clone(),
        };
        ui_manager.handle_event(window, &ui_event);

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(input) = GameInput::from_key(key_code, state) {
                    self.controller.push_input(input);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.controller.push_input(GameInput::Interact);
            }
            WindowEvent::Focused(focused) => {
                if focused {
                    grab_cursor(window);
                } else {
                    self.controller.push_input(GameInput::FocusLost);
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.controller.resize(width, height);
                render_engine.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = self
                    .last_frame
                    .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
                self.last_frame = Some(now);

                self.controller.frame(dt);
                if self.controller.exit_requested() {
                    log::info!("Exit requested");
                    event_loop.exit();
                    return;
                }

                render_engine.update(
                    self.controller.camera_manager.camera.uniform,
                    &self.controller.lighting(),
                    &self.controller.scene,
                );

                let (width, height) = render_engine.get_surface_size();
                let lines = self.controller.hud_lines([width as f32, height as f32]);

                let window_clone = window.clone();
                let result = render_engine.render_frame_with_ui(
                    &self.controller.scene,
                    |device, queue, encoder, color_attachment| {
                        ui_manager.draw(
                            device,
                            queue,
                            encoder,
                            &window_clone,
                            color_attachment,
                            &lines,
                        );
                    },
                );

                match result {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_engine.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Surface out of memory");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("Dropped frame: {}", e),
                }
            }
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.controller.push_input(GameInput::Look { dx, dy });
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
