/// Errors that end a front-end session.
///
/// Everything the user can recover from (bad files, failed analyses,
/// typos) is shown on screen instead; only a broken terminal stream stops
/// the loop.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for session results.
pub type SessionResult<T> = Result<T, SessionError>;
