use thiserror::Error;

/// The window system refused to cooperate.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot create window: {0}")]
    Window(String),
    #[error("cannot start stopwatch: {0}")]
    Stopwatch(String),
    #[error("cannot bind to canvas element {id:?}: {message}")]
    Canvas { id: &'static str, message: String },
}
