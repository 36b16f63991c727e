use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the optimizer.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific settings which are shared by the optimizer components.
#[derive(Clone)]
pub struct Environment {
    /// A logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment` with given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates a new instance of `Environment` which swallows all log messages.
    pub fn new_silent() -> Self {
        Self { logger: Arc::new(|_| {}) }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|msg: &str| eprintln!("{msg}")))
    }
}
