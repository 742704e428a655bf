//! Shared components for CLI commands
//!
//! This module contains the logging setup and input-resolution helpers used
//! by both commands.

use crate::{Error, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trail_decoder={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Resolve the input text for a command
///
/// Priority: the positional argument, then the `--input` file, then stdin.
/// The system boundary is "raw text in"; whichever source provides it, the
/// text reaches the pipeline unchanged.
pub fn read_input_text(positional: Option<&str>, input: Option<&Path>) -> Result<String> {
    if let Some(text) = positional {
        return Ok(text.to_string());
    }

    if let Some(path) = input {
        debug!("Reading input from file: {}", path.display());
        return std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read input file '{}'", path.display()), e)
        });
    }

    debug!("Reading input from stdin");
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| Error::io("Failed to read from stdin".to_string(), e))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_input_text_prefers_positional() {
        let text = read_input_text(Some("from-arg"), None).unwrap();
        assert_eq!(text, "from-arg");
    }

    #[test]
    fn test_read_input_text_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "from-file").unwrap();

        let text = read_input_text(None, Some(file.path())).unwrap();
        assert_eq!(text, "from-file");
    }

    #[test]
    fn test_read_input_text_missing_file() {
        let result = read_input_text(None, Some(Path::new("/nonexistent/export.txt")));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
