use crate::controllers::interactive::{FrameDriver, InputEvent};
use crate::core::actions::render_frame::backend::RayonBackend;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::view::settings::ViewSettings;
use crate::input::gui::app::keyboard_input::KeyboardInput;
use crate::input::gui::app::overlay::{OverlayData, draw_overlay};
use crate::input::gui::app::pointer_input::PointerInput;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::presenters::telemetry::latest::LatestTelemetry;
use crate::presenters::telemetry::log_sink::LogTelemetrySink;
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::time::Instant;
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::keyboard::PhysicalKey;
use winit::window::Window;

pub type GuiTelemetry = (LogTelemetrySink, LatestTelemetry);

pub struct GuiApp<P: GuiPresenterPort> {
    window: &'static Window,
    driver: FrameDriver<RayonBackend, P, GuiTelemetry>,
    keyboard: KeyboardInput,
    pointer: PointerInput,
    clock: Instant,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        driver: FrameDriver<RayonBackend, P, GuiTelemetry>,
        settings: &ViewSettings,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            window,
            driver,
            keyboard: KeyboardInput::new(settings.zoom_in(), settings.zoom_out()),
            pointer: PointerInput::new(settings.zoom_in(), settings.zoom_out()),
            clock: Instant::now(),
            egui_ctx,
            egui_state,
        }
    }

    /// Runs until the window closes or a frame fails.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        let mut fatal = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == self.window.id() => {
                if let Err(err) = self.handle_window_event(event, elwt) {
                    log::error!("{}", err);
                    fatal = Some(err);
                    elwt.exit();
                }
            }
            // one frame per display refresh
            Event::AboutToWait => self.window.request_redraw(),
            _ => {}
        })?;

        match fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        elwt: &EventLoopWindowTarget<()>,
    ) -> Result<(), GuiError> {
        let response = self.egui_state.on_window_event(self.window, event);

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => self.redraw()?,
            WindowEvent::Resized(size) => {
                log::debug!("resized to {}x{}", size.width, size.height);
                self.driver.display_mut().resize(size.width, size.height)?;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.driver.display_mut().resize(size.width, size.height)?;
            }
            WindowEvent::Focused(false) => self.release_input(),
            WindowEvent::CursorLeft { .. } => self.pointer.cursor_left(),
            WindowEvent::CursorMoved { position, .. } => {
                let point = ScreenPoint::new(position.x, position.y);
                if let Some(input) = self.pointer.cursor_moved(point) {
                    self.driver.handle_event(input);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let pressed = *state == ElementState::Pressed;
                if pressed && (response.consumed || self.egui_ctx.wants_pointer_input()) {
                    return Ok(());
                }
                self.pointer.set_dragging(pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if response.consumed || self.egui_ctx.wants_pointer_input() {
                    return Ok(());
                }

                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(position) => position.y,
                };
                if let Some(input) = self.pointer.wheel(scroll) {
                    self.driver.handle_event(input);
                }
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if self.egui_ctx.wants_keyboard_input() {
                    if let Some(input) = self.keyboard.release_all() {
                        self.driver.handle_event(input);
                    }
                    return Ok(());
                }

                if let PhysicalKey::Code(key_code) = key_event.physical_key {
                    let input =
                        self.keyboard
                            .handle_key_event(key_code, key_event.state, key_event.repeat);
                    if let Some(input) = input {
                        self.driver.handle_event(input);
                    }
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        let now = self.clock.elapsed().as_secs_f64();
        self.driver
            .tick(now)
            .map_err(|err| GuiError::Frame(Box::new(err)))?;

        let data = OverlayData {
            viewport: *self.driver.viewport(),
            surface: self.driver.display().surface_size(),
            telemetry: self.driver.telemetry().1.latest(),
        };

        let raw_input = self.egui_state.take_egui_input(self.window);
        let mut reset_clicked = false;
        let mut egui_output = self.egui_ctx.run(raw_input, |ctx| {
            reset_clicked = draw_overlay(ctx, &data);
        });

        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if reset_clicked {
            self.driver.handle_event(InputEvent::Reset);
        }

        self.driver
            .display_mut()
            .render(egui_output, &self.egui_ctx)?;

        Ok(())
    }

    fn release_input(&mut self) {
        self.pointer.cursor_left();
        if let Some(input) = self.keyboard.release_all() {
            self.driver.handle_event(input);
        }
    }
}
