//! Mock transport for exercising services without a backend.

use async_trait::async_trait;
use mockall::mock;

use crate::transport::{ApiReply, ApiRequest, Transport, TransportError};

mock! {
    pub Backend {}

    #[async_trait]
    impl Transport for Backend {
        async fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError>;
    }
}
