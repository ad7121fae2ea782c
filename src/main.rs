fn main() -> anyhow::Result<()> {
    // Logs go to stderr and stay off unless asked for, the terminal
    // itself is the UI
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp_millis()
        .init();

    attune::app_core::Attune::new().run()?;
    Ok(())
}
