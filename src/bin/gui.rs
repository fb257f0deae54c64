use mandelbrot_explorer::{ExplorerConfig, PixelsPresenterFactory, RunGuiCommand};
use std::process::ExitCode;

fn main() -> ExitCode {
    mandelbrot_explorer::init_logging();

    let config = match ExplorerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config);

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
