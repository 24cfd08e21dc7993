use thiserror::Error;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("Error: Failed to spawn {0}")]
    SpawnFailed(String, #[source] std::io::Error),
    #[error("Error: {0} exited with {1}")]
    CommandFailed(String, String),
    #[error("Error: No result at position {0} ({1} available)")]
    NoSuchResult(usize, usize),
    #[error("Error: Unrecognized event '{0}'")]
    MalformedEvent(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::LauncherError;

    #[test]
    fn command_failed_names_the_program() {
        let err = LauncherError::CommandFailed("pass".into(), "exit status: 1".into());
        assert_eq!(err.to_string(), "Error: pass exited with exit status: 1");
    }

    #[test]
    fn no_such_result_reports_bounds() {
        let err = LauncherError::NoSuchResult(7, 5);
        assert_eq!(err.to_string(), "Error: No result at position 7 (5 available)");
    }
}
