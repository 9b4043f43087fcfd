use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Display, PartialEq)]
pub enum RegistryError {
    /// A standalone candidate that is not a `.js` script.
    #[display("Invalid mod {_0}")]
    InvalidMod(String),
    /// `module.json` exists but is not a usable JSON document.
    #[display("Invalid module.json: {_0}")]
    ManifestParseError(String),
    /// Deprecated `category` field with a value other than `network` or `client`.
    #[display("Invalid mod category {_0}")]
    InvalidCategory(String),
    /// Config side-file access on a mod without a structured manifest.
    #[display("Trying to change configuration for incompatible module {_0}!")]
    IncompatibleModule(String),
    #[display("IO error: {_0}")]
    IOError(String),
    #[display("Parse error: {_0}")]
    ParseError(String),
    #[display("File or directory not found: {_0}")]
    FileOrDirectoryNotFound(String),
}

impl std::error::Error for RegistryError {}

impl From<std::io::Error> for RegistryError {
    fn from(e: std::io::Error) -> Self {
        RegistryError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        RegistryError::ParseError(e.to_string())
    }
}
