//! HTTP transport for the device's REST API.

use std::net::Ipv4Addr;

use log::{debug, warn};
use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Issues requests against `http://<ip>:<port>/api/v1/<token>/` and
/// classifies every response the same way, no matter which accessor
/// triggered the call.
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: String,
}

impl Transport {
    pub(crate) fn new(ip: Ipv4Addr, port: u16, auth_token: &str) -> Self {
        Transport {
            http: reqwest::Client::new(),
            base_url: format!("http://{ip}:{port}/api/v1/{auth_token}/"),
        }
    }

    pub(crate) async fn get(&self, endpoint: &str) -> Result<Option<Value>> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {url}");
        let response = self.http.get(&url).send().await;
        classify(response).await
    }

    pub(crate) async fn put(
        &self,
        endpoint: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<Option<Value>> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("PUT {url}");
        let response = self.http.put(&url).json(body).send().await;
        classify(response).await
    }

    pub(crate) async fn delete(&self, endpoint: &str) -> Result<Option<Value>> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("DELETE {url}");
        let response = self.http.delete(&url).send().await;
        classify(response).await
    }
}

/// Map a response, or the failure to obtain one, onto the uniform
/// outcome: payload, no payload, or a named error.
async fn classify(response: reqwest::Result<Response>) -> Result<Option<Value>> {
    let response = match response {
        Ok(response) => response,
        Err(err) => {
            warn!("request failed before reaching the device: {err}");
            return Err(Error::Network(err));
        }
    };

    let status = response.status();
    match status {
        StatusCode::OK => {
            let body = response.text().await.map_err(Error::Network)?;
            if body.is_empty() {
                // Firmware 1.5.0 answers delete-user with an empty 200
                // instead of 204.
                return Ok(None);
            }
            serde_json::from_str(&body).map(Some).map_err(Error::JsonLoad)
        }
        StatusCode::NO_CONTENT => Ok(None),
        _ => {
            let err = match status.as_u16() {
                401 => Error::NotAuthorized,
                403 => Error::BadRequest,
                404 => Error::NotFound,
                422 => Error::UnprocessableEntity,
                500 => Error::DeviceInternal,
                code => Error::UnexpectedStatus(code),
            };
            warn!("device answered {status}: {err}");
            Err(err)
        }
    }
}
