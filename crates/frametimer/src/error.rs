use std::fmt;

/// Error returned when a `FrameTimer` is given an unusable window size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameTimerError {
    /// Capacity must be at least 1.
    InvalidCapacity { requested: usize },
}

impl fmt::Display for FrameTimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { requested } => {
                write!(f, "invalid frame timer capacity {requested}: must be at least 1")
            }
        }
    }
}

impl std::error::Error for FrameTimerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_requested_capacity() {
        let err = FrameTimerError::InvalidCapacity { requested: 0 };
        assert_eq!(
            err.to_string(),
            "invalid frame timer capacity 0: must be at least 1"
        );
    }
}
