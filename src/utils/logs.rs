pub fn setup_tracing(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        // stdout belongs to the console menu.
        .with_writer(std::io::stderr)
        .init();
}
