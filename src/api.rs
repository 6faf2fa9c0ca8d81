// API client module: a small blocking HTTP client for the photo blog
// backend. Each method is one request; `uploader` chains them together.
//
// Endpoints:
// - POST /api/authenticate  {"password": ...}        -> raw token body
// - POST /api/photos        image bytes + token      -> {"Id": ...}
// - PUT  /api/photo/{id}    {"name", "description"}  -> status ignored

use crate::config::BlogConfig;
use crate::error::{Error, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Header carrying the token returned by `/api/authenticate`.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

const PHOTO_CONTENT_TYPE: &str = "image/jpeg";

/// Client bound to one blog backend. Holds the config for the lifetime of a
/// single upload and nothing else; tokens are never stored on it.
pub struct ApiClient {
    client: Client,
    config: BlogConfig,
}

#[derive(Serialize, Debug)]
pub struct AuthRequest<'a> {
    pub password: &'a str,
}

/// Body of a successful `POST /api/photos`. The `Id` key is matched
/// without regard to case; when it appears more than once the last wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoResponse {
    pub id: i64,
}

impl<'de> Deserialize<'de> for PhotoResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PhotoResponseVisitor;

        impl<'de> Visitor<'de> for PhotoResponseVisitor {
            type Value = PhotoResponse;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with an Id field")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<PhotoResponse, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut id = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case("id") {
                        id = Some(map.next_value::<i64>()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                let id = id.ok_or_else(|| de::Error::missing_field("Id"))?;
                Ok(PhotoResponse { id })
            }
        }

        deserializer.deserialize_map(PhotoResponseVisitor)
    }
}

/// Metadata sent with `PUT /api/photo/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoInfo {
    pub name: String,
    pub description: String,
}

impl ApiClient {
    /// Build a client for `config`. A configured timeout applies to every
    /// request; without one requests may block indefinitely.
    pub fn new(config: BlogConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::HttpClient)?;
        Ok(ApiClient { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.url, path)
    }

    /// Exchange the shared secret for a token. Only status 200 counts as
    /// success and the whole response body is the token, byte for byte.
    pub fn authenticate(&self) -> Result<String> {
        let url = self.endpoint("/api/authenticate");
        tracing::debug!(%url, "authenticating");

        let res = self
            .client
            .post(&url)
            .json(&AuthRequest {
                password: &self.config.password,
            })
            .send()
            .map_err(Error::Authentication)?;

        if res.status() != StatusCode::OK {
            return Err(Error::AuthenticationStatus(res.status()));
        }
        let body = res.bytes().map_err(Error::Authentication)?;
        String::from_utf8(body.to_vec()).map_err(Error::AuthenticationToken)
    }

    /// POST the raw image bytes and return the id the server assigned.
    pub fn create_photo(&self, token: &str, image: Vec<u8>) -> Result<PhotoResponse> {
        let url = self.endpoint("/api/photos");
        tracing::debug!(%url, bytes = image.len(), "uploading photo");

        let res = self
            .client
            .post(&url)
            .header(AUTH_TOKEN_HEADER, token)
            .header(CONTENT_TYPE, PHOTO_CONTENT_TYPE)
            .body(image)
            .send()
            .map_err(Error::Upload)?;

        if res.status() != StatusCode::OK {
            return Err(Error::UploadStatus(res.status()));
        }
        res.json().map_err(Error::ResponseParse)
    }

    /// PUT the title and description onto photo `id`.
    ///
    /// Only transport failures are errors. The response status is returned
    /// to the caller but a non-success status is not turned into an error.
    pub fn update_photo(&self, token: &str, id: i64, info: &PhotoInfo) -> Result<StatusCode> {
        let url = self.endpoint(&format!("/api/photo/{id}"));
        tracing::debug!(%url, "updating photo info");

        let res = self
            .client
            .put(&url)
            .header(AUTH_TOKEN_HEADER, token)
            .json(info)
            .send()
            .map_err(|source| Error::MetadataUpdate { id, source })?;

        Ok(res.status())
    }
}
