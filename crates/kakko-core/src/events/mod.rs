use tracing::{error, info};

/// Log the application startup event.
pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log a command failure that is about to be reported to the user.
pub fn log_app_error(e: &dyn std::error::Error) {
    error!(event = "core.app.error_occurred", error = %e);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_app_startup_without_subscriber() {
        log_app_startup();
    }

    #[test]
    fn test_log_app_error_without_subscriber() {
        let e = std::io::Error::other("boom");
        log_app_error(&e);
    }
}
