//! Adapter exposing the [`MockRouter`] over actix-web.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web};
use log::warn;
use serde_json::Value;

use crate::API_SCOPE;
use crate::dto::api::ApiResponse;
use crate::mock::MockRouter;
use crate::transport::{ApiRequest, Method};

fn failure(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::<()>::fail(error, message))
}

/// Translates an incoming HTTP request into an [`ApiRequest`].
///
/// The `/api` scope prefix is stripped so paths line up with the route table.
pub fn to_api_request(req: &HttpRequest, body: &[u8]) -> Result<ApiRequest, HttpResponse> {
    let method: Method = req.method().as_str().parse().map_err(|_| {
        failure(
            StatusCode::NOT_FOUND,
            "Not found",
            format!("No mock route for {} {}", req.method(), req.path()),
        )
    })?;

    let path = req.path().strip_prefix(API_SCOPE).unwrap_or(req.path());
    let path = if path.is_empty() { "/" } else { path };

    let query = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();

    let mut request = ApiRequest::new(method, path).query(query);

    if !body.is_empty() {
        let json: Value = serde_json::from_slice(body).map_err(|err| {
            failure(
                StatusCode::BAD_REQUEST,
                "Bad request",
                format!("Malformed JSON body: {err}"),
            )
        })?;
        request = request.json(json);
    }

    if let Some(authorization) = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    {
        request = request.authorization(authorization);
    }

    Ok(request)
}

/// Default service of the `/api` scope: every request goes through the mock
/// route table.
pub async fn intercept<R>(
    req: HttpRequest,
    body: web::Bytes,
    router: web::Data<MockRouter<R>>,
) -> HttpResponse
where
    R: 'static,
{
    let request = match to_api_request(&req, &body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match router.dispatch(&request).await {
        Some(reply) => {
            let status =
                StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status).json(reply.body)
        }
        None => {
            warn!("No mock route for {} {}", request.method, request.path);
            failure(
                StatusCode::NOT_FOUND,
                "Not found",
                format!("No mock route for {} {}", request.method, request.path),
            )
        }
    }
}
