//! HTTP Response Utilities
//!
//! Helper functions for processing responses from the technology service.
//! Every failure maps to [`Error::TechnologyService`]; 4xx and 5xx are not
//! told apart.

use capacity_domain::error::{Error, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse the JSON body
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `endpoint` - Endpoint path for error messages
    ///
    /// # Returns
    /// Parsed body on success, or a technology service error
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        endpoint: &str,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(Error::technology_service(format!(
                "{endpoint} request failed ({code}): {error_text}"
            )));
        }

        response.json().await.map_err(|e| {
            Error::technology_service_with_source(format!("{endpoint} response parse failed"), e)
        })
    }

    /// Map a transport failure to a technology service error
    pub fn request_error(endpoint: &str, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::technology_service_with_source(
                format!(
                    "{endpoint}: {}",
                    crate::constants::ERROR_MSG_REQUEST_TIMEOUT
                ),
                error,
            )
        } else {
            Error::technology_service_with_source(format!("{endpoint}: HTTP request failed"), error)
        }
    }
}
