// Upload workflow: authenticate, send the image, then set its title and
// description. Each step needs the previous one to have succeeded, so the
// first failure ends the run. A photo that was created before a later step
// failed stays on the server as it is.

use crate::api::{ApiClient, PhotoInfo};
use crate::error::{Error, Result};
use std::path::Path;

/// Local copy of the photo the server created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Publish the image at `photo_path` with the given title and description.
///
/// A fresh token is requested on every call and dropped when it returns.
/// The file is read only after authentication succeeded.
pub fn upload_photo(
    api: &ApiClient,
    photo_path: &Path,
    title: &str,
    description: &str,
) -> Result<PhotoRecord> {
    let token = api.authenticate()?;

    let image = std::fs::read(photo_path).map_err(|source| Error::FileRead {
        path: photo_path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %photo_path.display(), bytes = image.len(), "read photo");

    let created = api.create_photo(&token, image)?;

    let info = PhotoInfo {
        name: title.to_string(),
        description: description.to_string(),
    };
    let status = api.update_photo(&token, created.id, &info)?;
    if !status.is_success() {
        tracing::info!(id = created.id, %status, "photo info update was not accepted");
    }

    Ok(PhotoRecord {
        id: created.id,
        name: info.name,
        description: info.description,
    })
}
