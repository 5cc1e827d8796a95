//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(DomainError::InvalidArgument(_)) => {
                        crate::exitcode::USAGE
                    }
                    ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
                    ApplicationError::AlreadyExists { .. } => crate::exitcode::CANTCREAT,
                    ApplicationError::IoFailure { .. } => crate::exitcode::IOERR,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                },
            },
        }
    }

    /// Whether the usage line should accompany the message.
    pub fn is_usage(&self) -> bool {
        self.exit_code() == crate::exitcode::USAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use crate::exitcode;

    #[test]
    fn given_empty_name_error_then_usage_exit_code() {
        let err: CliError =
            ApplicationError::from(DomainError::InvalidArgument("empty".into())).into();
        assert_eq!(err.exit_code(), exitcode::USAGE);
        assert!(err.is_usage());
    }

    #[test]
    fn given_already_exists_then_cantcreat() {
        let err: CliError = ApplicationError::AlreadyExists {
            path: PathBuf::from("/tmp/demo"),
            is_dir: true,
        }
        .into();
        assert_eq!(err.exit_code(), exitcode::CANTCREAT);
        assert!(err.to_string().contains("/tmp/demo"));
    }

    #[test]
    fn given_io_failure_then_ioerr() {
        let err: CliError = ApplicationError::IoFailure {
            path: PathBuf::from("/tmp/demo/src"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(err.exit_code(), exitcode::IOERR);
    }

    #[test]
    fn given_config_error_then_config_exit_code() {
        let err: CliError = ApplicationError::Config {
            message: "bad".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exitcode::CONFIG);
        assert!(!err.is_usage());
    }
}
