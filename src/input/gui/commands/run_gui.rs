use crate::config::ExplorerConfig;
use crate::controllers::interactive::FrameDriver;
use crate::core::actions::render_frame::backend::RayonBackend;
use crate::core::view::controller::ViewportController;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::presenters::telemetry::latest::LatestTelemetry;
use crate::presenters::telemetry::log_sink::LogTelemetrySink;
use std::marker::PhantomData;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;
        let window_config = &self.config.window;

        // pixels needs a 'static window; it lives until the process exits
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(window_config.title.as_str())
                .with_inner_size(LogicalSize::new(
                    f64::from(window_config.width),
                    f64::from(window_config.height),
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window)?;
        let backend = RayonBackend::new(self.config.compute.thread_count())?;
        let driver = FrameDriver::new(
            backend,
            presenter,
            (LogTelemetrySink::default(), LatestTelemetry::default()),
            ViewportController::new(self.config.view),
            0.0,
        );

        GuiApp::new(window, &event_loop, driver, &self.config.view).run(event_loop)
    }
}
