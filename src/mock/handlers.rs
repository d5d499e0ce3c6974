//! Endpoint handlers of the mock CRM backend.
//!
//! "Not found" and "unauthorized" are answered with ordinary replies carrying a
//! `success: false` envelope and the matching status code.

use chrono::Utc;
use log::{error, warn};
use serde_json::{Map, Value};
use validator::Validate;

use crate::domain::customer::{CustomerStatus, NewCustomer};
use crate::domain::types::{CustomerId, ProjectId};
use crate::dto::api::ApiResponse;
use crate::dto::auth::{LoginData, is_mock_bearer, issue_mock_token};
use crate::forms::auth::LoginForm;
use crate::forms::customers::CustomerForm;
use crate::mock::{MockContext, RouteParams, RouteTable};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, PageMeta};
use crate::repository::errors::RepositoryError;
use crate::repository::{
    CustomerListQuery, CustomerReader, DashboardReader, ProjectListQuery, ProjectReader,
    UserReader,
};
use crate::transport::{
    ApiReply, ApiRequest, Method, STATUS_BAD_REQUEST, STATUS_CREATED,
    STATUS_INTERNAL_SERVER_ERROR, STATUS_NOT_FOUND, STATUS_OK, STATUS_UNAUTHORIZED,
};

/// The CRM endpoints in evaluation order.
pub fn route_table<R>() -> RouteTable<R>
where
    R: CustomerReader + ProjectReader + DashboardReader + UserReader,
{
    RouteTable::new()
        .route(Method::Get, "/customers", list_customers::<R>)
        .route(Method::Get, "/customers/:id", get_customer::<R>)
        .route(Method::Post, "/customers", create_customer::<R>)
        .route(Method::Put, "/customers/:id", update_customer::<R>)
        .route(Method::Delete, "/customers/:id", delete_customer::<R>)
        .route(Method::Get, "/dashboard/stats", dashboard_stats::<R>)
        .route(Method::Get, "/projects", list_projects::<R>)
        .route(Method::Get, "/projects/:id", get_project::<R>)
        .route(Method::Post, "/auth/login", login::<R>)
        .route(Method::Post, "/auth/logout", logout::<R>)
        .route(Method::Get, "/auth/me", me::<R>)
}

fn failure(status: u16, error: &str, message: impl Into<String>) -> ApiReply {
    ApiReply::envelope(status, &ApiResponse::<()>::fail(error, message))
}

fn not_found(entity: &str) -> ApiReply {
    failure(STATUS_NOT_FOUND, "Not found", format!("{entity} not found"))
}

fn bad_request(message: impl Into<String>) -> ApiReply {
    failure(STATUS_BAD_REQUEST, "Bad request", message)
}

fn unauthorized(message: &str) -> ApiReply {
    failure(STATUS_UNAUTHORIZED, "Unauthorized", message)
}

fn repository_failure(err: RepositoryError) -> ApiReply {
    error!("Mock repository failure: {err}");
    failure(
        STATUS_INTERNAL_SERVER_ERROR,
        "Internal error",
        err.to_string(),
    )
}

fn parse_query<T: std::str::FromStr>(
    request: &ApiRequest,
    name: &str,
) -> Result<Option<T>, ApiReply> {
    let value = request
        .query_param(name)
        .map(str::trim)
        .filter(|value| !value.is_empty());
    match value {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| bad_request(format!("Invalid value for {name}: {value}"))),
        None => Ok(None),
    }
}

pub fn list_customers<R: CustomerReader>(
    ctx: &MockContext<R>,
    request: &ApiRequest,
    _params: &RouteParams,
) -> ApiReply {
    let (status, page, per_page) = match (
        parse_query::<CustomerStatus>(request, "status"),
        parse_query::<usize>(request, "page"),
        parse_query::<usize>(request, "perPage"),
    ) {
        (Ok(status), Ok(page), Ok(per_page)) => (status, page, per_page),
        (Err(reply), _, _) | (_, Err(reply), _) | (_, _, Err(reply)) => return reply,
    };
    let per_page = per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE);

    let mut query = CustomerListQuery::new();
    if let Some(search) = request.query_param("search") {
        query = query.search(search);
    }
    if let Some(status) = status {
        query = query.status(status);
    }
    if let Some(page) = page {
        query = query.paginate(page, per_page);
    }

    match ctx.repo.list_customers(&query) {
        Ok((total, customers)) => {
            let mut envelope = ApiResponse::ok(customers);
            if let Some(page) = page {
                envelope = envelope.with_pagination(PageMeta::new(page, per_page, total));
            }
            ApiReply::envelope(STATUS_OK, &envelope)
        }
        Err(err) => repository_failure(err),
    }
}

pub fn get_customer<R: CustomerReader>(
    ctx: &MockContext<R>,
    _request: &ApiRequest,
    params: &RouteParams,
) -> ApiReply {
    let Some(id) = params.parse::<CustomerId>("id") else {
        return not_found("Customer");
    };

    match ctx.repo.get_customer_by_id(id) {
        Ok(Some(customer)) => ApiReply::envelope(STATUS_OK, &ApiResponse::ok(customer)),
        Ok(None) => {
            warn!("Customer {id} not found");
            not_found("Customer")
        }
        Err(err) => repository_failure(err),
    }
}

pub fn create_customer<R: CustomerReader>(
    ctx: &MockContext<R>,
    request: &ApiRequest,
    _params: &RouteParams,
) -> ApiReply {
    let Some(body) = request.body.clone() else {
        return bad_request("Request body is required");
    };
    let form: CustomerForm = match serde_json::from_value(body) {
        Ok(form) => form,
        Err(err) => return bad_request(format!("Malformed customer: {err}")),
    };
    let new_customer = match NewCustomer::try_from(form) {
        Ok(new_customer) => new_customer,
        Err(err) => {
            warn!("Rejected customer payload: {err}");
            return bad_request(err.to_string());
        }
    };

    let id = match ctx.next_customer_id() {
        Ok(id) => id,
        Err(err) => return repository_failure(err),
    };
    let customer = new_customer.into_customer(id, Utc::now());

    ApiReply::envelope(
        STATUS_CREATED,
        &ApiResponse::ok(customer).with_message("Customer created"),
    )
}

pub fn update_customer<R>(
    _ctx: &MockContext<R>,
    request: &ApiRequest,
    params: &RouteParams,
) -> ApiReply {
    let Some(id) = params.parse::<CustomerId>("id") else {
        return not_found("Customer");
    };
    let mut fields: Map<String, Value> = match &request.body {
        Some(Value::Object(fields)) => fields.clone(),
        _ => return bad_request("Request body must be a JSON object"),
    };

    fields.insert("id".to_string(), Value::from(id.get()));
    fields.insert(
        "lastContact".to_string(),
        Value::String(Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
    );

    ApiReply::envelope(
        STATUS_OK,
        &ApiResponse::ok(Value::Object(fields)).with_message("Customer updated"),
    )
}

pub fn delete_customer<R>(
    _ctx: &MockContext<R>,
    _request: &ApiRequest,
    _params: &RouteParams,
) -> ApiReply {
    ApiReply::envelope(STATUS_OK, &ApiResponse::<()>::ok_empty("Customer deleted"))
}

pub fn dashboard_stats<R: DashboardReader>(
    ctx: &MockContext<R>,
    _request: &ApiRequest,
    _params: &RouteParams,
) -> ApiReply {
    match ctx.repo.get_dashboard_stats() {
        Ok(stats) => ApiReply::envelope(STATUS_OK, &ApiResponse::ok(stats)),
        Err(err) => repository_failure(err),
    }
}

pub fn list_projects<R: ProjectReader>(
    ctx: &MockContext<R>,
    request: &ApiRequest,
    _params: &RouteParams,
) -> ApiReply {
    let customer_id = match parse_query::<CustomerId>(request, "customerId") {
        Ok(customer_id) => customer_id,
        Err(reply) => return reply,
    };

    let mut query = ProjectListQuery::new();
    if let Some(customer_id) = customer_id {
        query = query.customer_id(customer_id);
    }

    match ctx.repo.list_projects(&query) {
        Ok(projects) => ApiReply::envelope(STATUS_OK, &ApiResponse::ok(projects)),
        Err(err) => repository_failure(err),
    }
}

pub fn get_project<R: ProjectReader>(
    ctx: &MockContext<R>,
    _request: &ApiRequest,
    params: &RouteParams,
) -> ApiReply {
    let Some(id) = params.parse::<ProjectId>("id") else {
        return not_found("Project");
    };

    match ctx.repo.get_project_by_id(id) {
        Ok(Some(project)) => ApiReply::envelope(STATUS_OK, &ApiResponse::ok(project)),
        Ok(None) => {
            warn!("Project {id} not found");
            not_found("Project")
        }
        Err(err) => repository_failure(err),
    }
}

pub fn login<R: UserReader>(
    ctx: &MockContext<R>,
    request: &ApiRequest,
    _params: &RouteParams,
) -> ApiReply {
    let form: LoginForm = match request.body.clone().map(serde_json::from_value) {
        Some(Ok(form)) => form,
        Some(Err(err)) => return bad_request(format!("Malformed credentials: {err}")),
        None => return bad_request("Request body is required"),
    };
    if let Err(err) = form.validate() {
        return bad_request(err.to_string());
    }

    match ctx
        .repo
        .find_user_by_credentials(&form.username, &form.password)
    {
        Ok(Some(user)) => {
            let data = LoginData {
                token: issue_mock_token(Utc::now().timestamp_millis()),
                user,
            };
            ApiReply::envelope(
                STATUS_OK,
                &ApiResponse::ok(data).with_message("Login successful"),
            )
        }
        Ok(None) => {
            warn!("Rejected login for {}", form.username);
            unauthorized("Invalid username or password")
        }
        Err(err) => repository_failure(err),
    }
}

pub fn logout<R>(
    _ctx: &MockContext<R>,
    _request: &ApiRequest,
    _params: &RouteParams,
) -> ApiReply {
    ApiReply::envelope(STATUS_OK, &ApiResponse::<()>::ok_empty("Logged out"))
}

pub fn me<R: UserReader>(
    ctx: &MockContext<R>,
    request: &ApiRequest,
    _params: &RouteParams,
) -> ApiReply {
    if !request.authorization.as_deref().is_some_and(is_mock_bearer) {
        return unauthorized("Missing or invalid token");
    }

    match ctx.repo.get_demo_user() {
        Ok(Some(user)) => ApiReply::envelope(STATUS_OK, &ApiResponse::ok(user)),
        Ok(None) => unauthorized("Unknown user"),
        Err(err) => repository_failure(err),
    }
}
