/// Errors raised by render backends. All of them end the frame.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("matrix stack overflow (limit {limit})")]
    StackOverflow { limit: usize },
    #[error("matrix stack underflow")]
    StackUnderflow,
    #[error("backend error: {0}")]
    Backend(String),
}
