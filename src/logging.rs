use flexi_logger::Logger;

/// Initialize the logger for the CLI. Level comes from `RUST_LOG` when set,
/// otherwise the given default.
pub fn setup_logging(default_level: &str) -> crate::Result<()> {
    Logger::try_with_env_or_str(default_level)
        .map_err(|e| crate::EngineError::Config(e.to_string()))?
        .start()
        .map_err(|e| crate::EngineError::Config(e.to_string()))?;
    Ok(())
}
