use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sheet '{sheet}': {message}")]
    Sheet { sheet: String, message: String },
}

impl ConvertError {
    /// Build a sheet-scoped error
    pub fn sheet(sheet: impl Into<String>, message: impl Into<String>) -> Self {
        ConvertError::Sheet {
            sheet: sheet.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_error_display() {
        let err = ConvertError::sheet("WS2025", "worksheet could not be read");
        assert_eq!(
            err.to_string(),
            "Sheet 'WS2025': worksheet could not be read"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConvertError = io.into();
        assert!(matches!(err, ConvertError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }
}
