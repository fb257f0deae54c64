use mandelbrot_explorer::{
    ExplorerConfig, FrameDriver, LogTelemetrySink, PpmFileSurface, RayonBackend, TickOutcome,
    ViewportController,
};
use std::error::Error;

/// Renders the configured view once and writes it as a PPM snapshot.
fn run(config: &ExplorerConfig) -> Result<TickOutcome, Box<dyn Error>> {
    let snapshot = &config.snapshot;
    let backend = RayonBackend::new(config.compute.thread_count())?;
    let display = PpmFileSurface::new(&snapshot.output_path, snapshot.surface());
    let controller = ViewportController::with_viewport(snapshot.viewport()?, config.view);

    let mut driver = FrameDriver::new(
        backend,
        display,
        LogTelemetrySink::default(),
        controller,
        0.0,
    );

    Ok(driver.tick(0.0)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    mandelbrot_explorer::init_logging();

    let config = ExplorerConfig::from_env().inspect_err(|err| log::error!("{}", err))?;
    run(&config).inspect_err(|err| log::error!("{}", err))?;

    Ok(())
}
