use serde::{Deserialize, Serialize};

// https://core.telegram.org/bots/api#making-requests

/// The envelope every Bot API response is wrapped in.
///
/// On success `ok` is `true` and `result` holds the payload. On failure `ok`
/// is `false` and `error_code` / `description` explain why.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

/// Extra information attached to some failed responses.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with this id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds left to wait before the request can be repeated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

/// A request the platform answered with `"ok": false`.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("api error {code}: {description}")]
pub struct ApiError {
    pub code: i64,
    pub description: String,
    pub parameters: Option<ResponseParameters>,
}

impl<T> ApiResponse<T> {
    /// Turns an `"ok": false` envelope into an [`ApiError`].
    pub fn check(&self) -> Result<(), ApiError> {
        if self.ok {
            return Ok(());
        }

        Err(ApiError {
            code: self.error_code.unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            parameters: self.parameters,
        })
    }

    /// Checks the envelope and takes the payload out of it.
    pub fn into_result(self) -> Result<T, ApiError> {
        self.check()?;

        match self.result {
            Some(result) => Ok(result),
            None => Err(ApiError {
                code: self.error_code.unwrap_or_default(),
                description: "missing result".to_string(),
                parameters: self.parameters,
            }),
        }
    }
}
