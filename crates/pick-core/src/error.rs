use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickError {
    /// The renderer behind the scene could not be brought up; startup aborts.
    #[error("scene engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColor(String),
}
