//! Upload panel state for CSV and e-defter XML imports.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use finansrisk::types::MessageResponse;
use finansrisk::{ApiClient, ApiError, Upload};

/// Which financial-data import a panel drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    Csv,
    Edefter,
}

impl UploadKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Csv => "Upload financial data (CSV)",
            Self::Edefter => "Upload e-defter (XML)",
        }
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept(self) -> &'static str {
        match self {
            Self::Csv => ".csv,text/csv",
            Self::Edefter => ".xml,application/xml,text/xml",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            Self::Csv => "csv-file",
            Self::Edefter => "edefter-file",
        }
    }

    fn missing_file_message(self) -> &'static str {
        match self {
            Self::Csv => "Please choose a CSV file.",
            Self::Edefter => "Please choose an e-defter XML file.",
        }
    }

    pub fn success_fallback(self) -> &'static str {
        match self {
            Self::Csv => "Financial data uploaded.",
            Self::Edefter => "E-defter uploaded.",
        }
    }

    pub fn error_fallback(self) -> &'static str {
        match self {
            Self::Csv => "Failed to upload the CSV file.",
            Self::Edefter => "Failed to upload the e-defter file.",
        }
    }

    pub fn build(self, file_name: String, bytes: Vec<u8>) -> Upload {
        match self {
            Self::Csv => Upload::csv(file_name, bytes),
            Self::Edefter => Upload::edefter_xml(file_name, bytes),
        }
    }

    /// Post `upload` to the endpoint matching this kind.
    pub async fn send(self, api: &ApiClient, firma_id: i64, upload: Upload) -> Result<MessageResponse, ApiError> {
        match self {
            Self::Csv => api.upload_financials_csv(firma_id, upload).await,
            Self::Edefter => api.upload_edefter_xml(firma_id, upload).await,
        }
    }
}

/// File name from a file input's `value`, which browsers report as a
/// `C:\fakepath\` path.
pub fn file_name_from_input(value: &str) -> Option<String> {
    let name = value.rsplit(['\\', '/']).next().unwrap_or(value).trim();
    (!name.is_empty()).then(|| name.to_owned())
}

#[derive(Clone, Debug, Default)]
pub struct UploadState {
    /// Name of the file currently chosen in the input.
    pub selected_file: Option<String>,
    pub busy: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl UploadState {
    pub fn select(&mut self, file_name: Option<String>) {
        self.selected_file = file_name.filter(|name| !name.is_empty());
        self.error = None;
        self.success = None;
    }

    /// Validate and mark the upload as started.
    ///
    /// # Errors
    ///
    /// Returns the message to display when no file has been chosen.
    pub fn begin(&mut self, kind: UploadKind) -> Result<(), &'static str> {
        if self.busy {
            return Err("An upload is already in progress.");
        }
        if self.selected_file.is_none() {
            self.error = Some(kind.missing_file_message().to_owned());
            return Err(kind.missing_file_message());
        }
        self.busy = true;
        self.error = None;
        self.success = None;
        Ok(())
    }

    pub fn succeed(&mut self, message: String) {
        self.busy = false;
        self.selected_file = None;
        self.success = Some(message);
    }

    pub fn fail(&mut self, message: String) {
        self.busy = false;
        self.error = Some(message);
    }
}
