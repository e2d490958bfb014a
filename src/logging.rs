use std::error::Error;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Sink for unexpected failures the API layer cannot report to the client.
pub trait ErrorLogger: Send + Sync {
    fn error(&self, err: &(dyn Error + 'static));
}

/// Forwards errors, including their source chain, to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogErrorLogger;

impl ErrorLogger for LogErrorLogger {
    fn error(&self, err: &(dyn Error + 'static)) {
        log::error!("{}", describe(err));
    }
}

/// Render an error followed by each of its sources, separated by `: `
pub fn describe(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        // thiserror variants often repeat the source inline
        if !message.ends_with(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

/// Initialise env_logger. `RUST_LOG` overrides the default level.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("sqlx", LevelFilter::Warn)
        .try_init();
}
