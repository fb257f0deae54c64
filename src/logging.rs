/// Installs `env_logger` as the `log` backend.
///
/// Defaults to `info`; `RUST_LOG` overrides it. Safe to call more than once,
/// later calls are ignored.
pub fn init_logging() {
    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .try_init();

    if result.is_err() {
        log::debug!("logger already initialised");
    }
}
