//! Response envelope shared by every mock endpoint and the typed services.

use serde::{Deserialize, Serialize};

use crate::pagination::PageMeta;

/// Wrapper carrying a success discriminator alongside payload or error detail.
///
/// A successful envelope carries `data` unless it answers a void operation; a
/// failed one always carries `error` or `message`. Build envelopes through the
/// constructors to keep that shape.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
}

/// Failure detail extracted from an envelope with `success: false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiFailure {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ApiFailure {
    /// Best human-readable description of the failure.
    pub fn describe(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            pagination: None,
        }
    }

    /// Success without payload, used by void operations such as deletes.
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: Some(message.into()),
            pagination: None,
        }
    }

    pub fn fail(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: Some(message.into()),
            pagination: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_pagination(mut self, pagination: PageMeta) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Checks the envelope invariant on a received value.
    ///
    /// `void` tells whether the answering operation is allowed to omit `data`.
    pub fn is_well_formed(&self, void: bool) -> bool {
        if self.success {
            void || self.data.is_some()
        } else {
            self.error.is_some() || self.message.is_some()
        }
    }

    pub fn into_result(self) -> Result<Option<T>, ApiFailure> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiFailure {
                error: self.error,
                message: self.message,
            })
        }
    }
}
