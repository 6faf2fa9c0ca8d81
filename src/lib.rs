// Library root
// -----------
// The binary (`main.rs`) is a thin wrapper around these modules.
//
// Module responsibilities:
// - `config`: Loads the blog URL and shared secret from the INI config file.
// - `api`: Blocking HTTP calls to the blog backend (authenticate, create
//   photo, update photo info).
// - `uploader`: Runs those calls in order for one photo.
// - `cli`: Command line flags.
// - `ui`: Optional prompts and progress spinner for `--interactive`.
// - `error`: Error type returned by every fallible function above.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;
pub mod uploader;

pub use api::ApiClient;
pub use config::BlogConfig;
pub use error::{Error, Result};
pub use uploader::{upload_photo, PhotoRecord};
