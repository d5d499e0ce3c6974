//! Generic request service shared by the typed services.

use log::{error, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dto::api::ApiResponse;
use crate::models::config::ServerConfig;
use crate::services::auth::AuthService;
use crate::services::customers::CustomerService;
use crate::services::dashboard::DashboardService;
use crate::services::projects::ProjectService;
use crate::services::{ServiceError, ServiceResult};
use crate::transport::{
    ApiReply, ApiRequest, HttpTransport, RetryPolicy, STATUS_NOT_FOUND, STATUS_UNAUTHORIZED,
    Transport, TransportError,
};

/// Decoded envelope together with the status it arrived with.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiOutcome<T> {
    pub status: u16,
    pub response: ApiResponse<T>,
}

impl<T> ApiOutcome<T> {
    fn failure(self) -> ServiceError {
        match self.status {
            STATUS_UNAUTHORIZED => ServiceError::Unauthorized,
            STATUS_NOT_FOUND => ServiceError::NotFound,
            _ => {
                let description = self
                    .response
                    .into_result()
                    .err()
                    .map(|failure| failure.describe())
                    .unwrap_or_else(|| "Unknown error".to_string());
                ServiceError::Api(description)
            }
        }
    }

    /// Payload of a successful envelope.
    pub fn into_data(self) -> ServiceResult<T> {
        if !self.response.success {
            return Err(self.failure());
        }
        self.response
            .data
            .ok_or_else(|| ServiceError::Api("Response carried no data".to_string()))
    }

    /// Like [`ApiOutcome::into_data`], but a not-found envelope reads as `None`.
    pub fn into_optional(self) -> ServiceResult<Option<T>> {
        match self.into_data() {
            Ok(data) => Ok(Some(data)),
            Err(ServiceError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Succeeds for any `success: true` envelope, with or without data.
    pub fn into_unit(self) -> ServiceResult<()> {
        if self.response.success {
            Ok(())
        } else {
            Err(self.failure())
        }
    }
}

/// Sends requests over a [`Transport`] and decodes the envelopes they return.
///
/// Reads are retried according to the [`RetryPolicy`]; mutations are sent
/// exactly once.
pub struct ApiService<T> {
    transport: T,
    retry: RetryPolicy,
}

impl<T: Transport> ApiService<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            retry: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn customers(&self) -> CustomerService<'_, T> {
        CustomerService::new(self)
    }

    pub fn projects(&self) -> ProjectService<'_, T> {
        ProjectService::new(self)
    }

    pub fn dashboard(&self) -> DashboardService<'_, T> {
        DashboardService::new(self)
    }

    pub fn auth(&self) -> AuthService<'_, T> {
        AuthService::new(self)
    }

    /// Sends a request, retrying it only when it is a read.
    pub async fn fetch(&self, request: ApiRequest) -> Result<ApiReply, TransportError> {
        if request.method.is_idempotent_read() {
            self.retry
                .execute(|| self.transport.send(request.clone()))
                .await
        } else {
            self.transport.send(request).await
        }
    }

    /// Sends a request and decodes the envelope of its reply.
    pub async fn call<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> ServiceResult<ApiOutcome<R>> {
        let method = request.method;
        let path = request.path.clone();

        let reply = self.fetch(request).await.map_err(|err| {
            error!("{method} {path} failed: {err}");
            ServiceError::from(err)
        })?;

        let status = reply.status;
        let response: ApiResponse<R> = serde_json::from_value(reply.body).map_err(|err| {
            error!("{method} {path} returned an unexpected body: {err}");
            ServiceError::Transport(TransportError::Client(format!(
                "Malformed response: {err}"
            )))
        })?;

        if !response.is_well_formed(true) {
            warn!("{method} {path} answered {status} with an incomplete envelope");
        } else if !response.success {
            warn!("{method} {path} answered {status} without success");
        }

        Ok(ApiOutcome { status, response })
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> ServiceResult<ApiOutcome<R>> {
        self.call(ApiRequest::get(path).query(query)).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ServiceResult<ApiOutcome<R>> {
        self.call(ApiRequest::post(path).json(to_body(body)?)).await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ServiceResult<ApiOutcome<R>> {
        self.call(ApiRequest::put(path).json(to_body(body)?)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ServiceResult<ApiOutcome<R>> {
        self.call(ApiRequest::delete(path)).await
    }
}

impl ApiService<HttpTransport> {
    /// Service talking to the backend at the configured `api_base_url`.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(HttpTransport::new(config.api_base_url.as_str()))
    }
}

fn to_body<B: Serialize>(body: &B) -> ServiceResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|err| ServiceError::Form(err.to_string()))
}
