use thiserror::Error;

/// Fatal conditions of a benchmark run. None of them is retried.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Failed to allocate {what} buffer of {len} elements")]
    Allocation { what: &'static str, len: usize },

    #[error("Failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl BenchError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_display() {
        let error = BenchError::Allocation {
            what: "symbol",
            len: 100,
        };
        let display = format!("{}", error);
        assert!(display.contains("symbol"));
        assert!(display.contains("100 elements"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = BenchError::invalid("threads", "must be at least 1");
        let display = format!("{}", error);
        assert!(display.contains("'threads'"));
        assert!(display.contains("must be at least 1"));
    }
}
