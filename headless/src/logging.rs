use log::LevelFilter;

/// Info by default; `RUST_LOG` overrides (e.g. `RUST_LOG=debug` for every bounce)
pub fn init_logging() {
    env_logger::builder()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init()
}
