// Error types shared by the library modules.
//
// Every step of the upload workflow has its own variant so the binary can
// print a message that says which stage failed. Nothing here is retried.

use reqwest::StatusCode;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to load config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("Config file {path} is missing a value for {key}")]
    MissingConfigKey { path: PathBuf, key: &'static str },

    #[error("Config file {path} has an invalid {key} value: {value}")]
    InvalidConfigValue {
        path: PathBuf,
        key: &'static str,
        value: String,
    },

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to send authentication request")]
    Authentication(#[source] reqwest::Error),

    #[error("Authentication token is not valid UTF-8")]
    AuthenticationToken(#[source] std::string::FromUtf8Error),

    #[error("Authentication request returned status code: {0}")]
    AuthenticationStatus(StatusCode),

    #[error("Failed to read photo file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to send new photo")]
    Upload(#[source] reqwest::Error),

    #[error("Error POSTing new photo: {0}")]
    UploadStatus(StatusCode),

    #[error("Failed to parse new photo response")]
    ResponseParse(#[source] reqwest::Error),

    #[error("Failed to update info for photo {id}")]
    MetadataUpdate {
        id: i64,
        #[source]
        source: reqwest::Error,
    },
}
