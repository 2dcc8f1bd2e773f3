pub mod auth;
pub mod browse;
pub mod config;
pub mod habit;
pub mod stats;

/// Single-threaded runtime for driving the async store client.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// The caller's current calendar date.
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
