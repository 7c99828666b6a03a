// API client module: a small blocking HTTP client that posts study records
// to the My Study backend. One request per run, so it stays synchronous.

use crate::config::Config;
use crate::error::{Result, StudyError};
use crate::report::StudyRecord;
use log::debug;
use reqwest::blocking::{Client, Request};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

pub const STUDIES_PATH: &str = "/api/studies";

/// Holds the reqwest blocking client, the API base URL and the token
/// sent with every request.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Build a client from the loaded config.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| StudyError::Network {
                url: config.url.clone(),
                source,
            })?;
        Ok(ApiClient {
            client,
            base_url: config.url.clone(),
            token: config.token.clone(),
        })
    }

    /// `<base url>/api/studies`, without doubling the slash when the base
    /// URL already ends in one.
    pub fn studies_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), STUDIES_PATH)
    }

    fn auth_value(&self) -> String {
        format!("JWT {}", self.token)
    }

    /// Build the POST for `record` without sending it.
    pub fn study_request(&self, record: &StudyRecord) -> Result<Request> {
        let url = self.studies_url();
        let body = serde_json::to_vec(record)?;
        self.client
            .post(&url)
            .header(AUTHORIZATION, self.auth_value())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()
            .map_err(|source| StudyError::Network { url, source })
    }

    /// POST `record` and return the response body. Any HTTP status counts
    /// as a completed round trip; only transport failures are errors.
    pub fn submit(&self, record: &StudyRecord) -> Result<String> {
        let request = self.study_request(record)?;
        let url = request.url().to_string();
        debug!("POST {}", url);

        let res = self
            .client
            .execute(request)
            .map_err(|source| StudyError::Network {
                url: url.clone(),
                source,
            })?;
        debug!("{} responded {}", url, res.status());

        res.text().map_err(|source| StudyError::Network { url, source })
    }
}
