// SPDX-FileCopyrightText: 2026 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::api_error;
use crate::common::{DenarConfig, Error};
use hyper::header::{HeaderMap, HeaderValue};
use hyper::{Method, StatusCode};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

fn default_endpoint() -> String {
    "https://api.stripe.com".to_string()
}

/// Payments HTTP client.
pub struct PaymentsClient {
    client: reqwest::Client,
    debug: bool,
    endpoint: String,
}

impl PaymentsClient {
    /// Create a payments HTTP client from the `[payments]` configuration
    /// table (`secret_key` required, `endpoint` optional).
    pub fn new(config: &DenarConfig) -> Result<Self, Error> {
        #[derive(Deserialize)]
        struct PaymentsConfig {
            secret_key: String,
            #[serde(default = "default_endpoint")]
            endpoint: String,
        }
        #[derive(Deserialize)]
        struct ConfigToml {
            payments: PaymentsConfig,
        }
        let ConfigToml {
            payments:
                PaymentsConfig {
                    secret_key,
                    endpoint,
                },
        } = config.get()?;

        let mut default_headers = HeaderMap::new();
        let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", secret_key))
            .map_err(|e| Error::String(format!("secret key: {e}")))?;
        auth_header.set_sensitive(true);
        default_headers.insert(reqwest::header::AUTHORIZATION, auth_header);

        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .default_headers(default_headers)
            .build()
            .map_err(|e| Error::String(format!("http client: {e}")))?;
        Ok(Self {
            client,
            debug: config.debug(),
            endpoint,
        })
    }

    /// Post a URL encoded form to the API. Returns the request URL, the
    /// success status, and the response body parsed as JSON; non-success
    /// responses become structured API errors.
    pub(crate) async fn post_form(
        &self,
        path: &str,
        params: &[(String, String)],
        idempotency_key: Option<&str>,
    ) -> Result<(StatusCode, serde_json::Value, String), Error> {
        let request_path = format!("{}/v1/{path}", self.endpoint);
        if self.debug {
            println!(">> POST {request_path}\n{params:?}");
        }
        let mut request = self
            .client
            .request(Method::POST, &request_path)
            .form(params);
        if let Some(idempotency_key) = idempotency_key {
            request = request.header("Idempotency-Key", idempotency_key);
        }
        match request.send().await {
            Ok(r) => {
                let status = r.status();
                if status.is_success() {
                    match r.json::<serde_json::Value>().await {
                        Ok(json) => {
                            if self.debug {
                                println!("{json} (code {status})");
                            }
                            Ok((status, json, request_path))
                        }
                        Err(e) => Err(Error::Transport(format!("POST {request_path}: {e}"))),
                    }
                } else {
                    match r.text().await {
                        Ok(body) => Err(api_error::from_response(status, &body)),
                        Err(e) => Err(Error::Transport(format!("POST {request_path}: {e}"))),
                    }
                }
            }
            Err(e) => Err(Error::Transport(format!("POST {request_path}: {e}"))),
        }
    }
}

/// Create a payments client.
pub fn new_payments_client(config: &DenarConfig) -> Result<PaymentsClient, Error> {
    PaymentsClient::new(config)
}
