use std::path::PathBuf;
use thiserror::Error;

/// All errors that rendering or exporting a label can generate
#[derive(Error, Debug)]
pub enum LabelError {
    /// An optional output capability was not compiled into this build
    #[error("{capability} support is not available.\n{hint}")]
    MissingCapability {
        capability: &'static str,
        hint: &'static str,
    },

    /// There is no destination address to put on the label
    #[error("Please enter a destination address.")]
    EmptyInput,

    /// Writing an output file failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    /// An I/O error occurred while rendering in memory
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// The system browser could not be launched
    Browser(#[from] opener::OpenError),
}

impl LabelError {
    pub(crate) fn write<P: Into<PathBuf>>(path: P, source: std::io::Error) -> LabelError {
        LabelError::Write {
            path: path.into(),
            source,
        }
    }

    /// Whether the error is a warning about user input rather than a failure
    pub fn is_warning(&self) -> bool {
        matches!(self, LabelError::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_errors_name_the_path() {
        let err = LabelError::write(
            "/nowhere/label.pdf",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to write /nowhere/label.pdf: denied");
        assert!(!err.is_warning());
    }

    #[test]
    fn empty_input_is_a_warning() {
        assert!(LabelError::EmptyInput.is_warning());
        assert_eq!(
            LabelError::EmptyInput.to_string(),
            "Please enter a destination address."
        );
    }
}
