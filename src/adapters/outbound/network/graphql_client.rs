use super::queries;
use super::transport::{ApiTokenAuth, RequestDecorator, UserAgent, TRACE_ID_HEADER};
use crate::catalog::domain::{Component, ProductListing, ProjectStatus};
use crate::ports::outbound::{CatalogApi, Envelope, Page};
use crate::shared::error::{ProductctlError, ResponseError};
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::time::Duration;

/// Fields the backend owns; sending them back in a mutation input is rejected.
const SERVER_MANAGED_FIELDS: &[&str] = &["_id", "creation_date", "last_update_date", "org_id"];

/// Catalog GraphQL client
///
/// Every operation is a single POST of `{query, variables}` to the endpoint.
/// Registered decorators (user agent, API key) are applied to each request in
/// order.
///
/// # Security
/// - Implements timeout (30 seconds)
/// - Does not retry failed requests
/// - Never logs the API key; request bodies are logged at debug level only
pub struct PyxisGraphQlClient {
    client: Client,
    endpoint: String,
    decorators: Vec<Box<dyn RequestDecorator>>,
}

impl PyxisGraphQlClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for `endpoint` authenticating with `api_token`.
    pub fn new(endpoint: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            decorators: vec![
                Box::new(UserAgent::default()),
                Box::new(ApiTokenAuth::new(api_token)),
            ],
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn execute<T: DeserializeOwned>(
        &self,
        field: &str,
        query: String,
        variables: Value,
    ) -> Result<OperationResponse<T>> {
        let body = serde_json::to_string(&GraphQlRequest { query, variables })?;
        tracing::debug!(endpoint = %self.endpoint, body = %body, "sending catalog request");

        let request = self.decorators.iter().fold(
            self.client
                .post(&self.endpoint)
                .header(CONTENT_TYPE, "application/json")
                .body(body),
            |request, decorator| decorator.decorate(request),
        );
        let response = request.send()?;

        let status = response.status();
        match response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            Some(trace_id) => {
                tracing::debug!(status = %status, trace_id, "catalog response received")
            }
            None => tracing::debug!(status = %status, "catalog response received"),
        }

        let text = response.text()?;
        if !status.is_success() {
            anyhow::bail!("catalog API returned status code {status}: {text}");
        }

        parse_response(field, &text)
    }
}

#[derive(Serialize)]
struct GraphQlRequest {
    query: String,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

/// The `{data, error, total}` object every catalog operation returns.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct OperationResponse<T> {
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    error: Option<ResponseError>,
    #[serde(default)]
    total: Option<usize>,
}

impl<T> OperationResponse<T> {
    fn into_envelope(self) -> Envelope<T> {
        Envelope {
            data: self.data,
            error: self.error,
        }
    }
}

/// Extracts the operation object named `field` from a GraphQL response body.
fn parse_response<T: DeserializeOwned>(field: &str, body: &str) -> Result<OperationResponse<T>> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        return Err(ProductctlError::GraphQl {
            messages: errors.into_iter().map(|e| e.message).collect(),
        }
        .into());
    }

    let mut value = response
        .data
        .and_then(|mut data| data.remove(field))
        .filter(|value| !value.is_null())
        .ok_or_else(|| ProductctlError::EmptyResponse {
            operation: field.to_string(),
        })?;
    strip_nulls(&mut value);

    Ok(serde_json::from_value(value)?)
}

/// Drops null-valued object keys so unset fields fall back to their defaults.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

fn strip_fields(mut value: Value, fields: &[&str]) -> Value {
    if let Value::Object(map) = &mut value {
        for field in fields {
            map.remove(*field);
        }
    }
    value
}

/// Mutation input for a component. `certification_date` is also set by the
/// backend.
fn component_input(component: &Component) -> Result<Value> {
    let value = strip_fields(serde_json::to_value(component)?, SERVER_MANAGED_FIELDS);
    Ok(strip_fields(value, &["certification_date"]))
}

fn listing_input(listing: &ProductListing) -> Result<Value> {
    Ok(strip_fields(
        serde_json::to_value(listing)?,
        SERVER_MANAGED_FIELDS,
    ))
}

impl CatalogApi for PyxisGraphQlClient {
    fn create_component(&self, component: &Component) -> Result<Envelope<Component>> {
        let variables = json!({ "input": component_input(component)? });
        Ok(self
            .execute("create_certification_project", queries::create_component(), variables)?
            .into_envelope())
    }

    fn apply_component(&self, component: &Component) -> Result<Envelope<Component>> {
        let variables = json!({
            "id": component.id,
            "input": component_input(component)?,
        });
        Ok(self
            .execute("update_certification_project", queries::update_component(), variables)?
            .into_envelope())
    }

    fn archive_component(&self, component_id: &str) -> Result<Envelope<Component>> {
        let variables = json!({
            "id": component_id,
            "input": { "project_status": ProjectStatus::Archived },
        });
        Ok(self
            .execute("update_certification_project", queries::update_component(), variables)?
            .into_envelope())
    }

    fn components_for_listing(
        &self,
        listing_id: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Envelope<Page<Component>>> {
        let variables = json!({
            "id": listing_id,
            "page": page,
            "page_size": page_size,
        });
        let response: OperationResponse<Vec<Component>> = self.execute(
            "find_product_listing_certification_projects",
            queries::components_for_listing(),
            variables,
        )?;

        let total = response.total;
        Ok(Envelope {
            data: response.data.map(|items| Page {
                total: total.unwrap_or(items.len()),
                items,
            }),
            error: response.error,
        })
    }

    fn listing_by_id(&self, listing_id: &str) -> Result<Envelope<ProductListing>> {
        Ok(self
            .execute(
                "get_product_listing",
                queries::get_listing(),
                json!({ "id": listing_id }),
            )?
            .into_envelope())
    }

    fn create_listing(&self, listing: &ProductListing) -> Result<Envelope<ProductListing>> {
        let variables = json!({ "input": listing_input(listing)? });
        Ok(self
            .execute("create_product_listing", queries::create_listing(), variables)?
            .into_envelope())
    }

    fn apply_listing(&self, listing: &ProductListing) -> Result<Envelope<ProductListing>> {
        let variables = json!({
            "id": listing.id,
            "input": listing_input(listing)?,
        });
        Ok(self
            .execute("update_product_listing", queries::update_listing(), variables)?
            .into_envelope())
    }

    fn set_components_for_listing(
        &self,
        listing_id: &str,
        component_ids: &[String],
    ) -> Result<Envelope<ProductListing>> {
        let variables = json!({
            "id": listing_id,
            "input": { "cert_projects": component_ids },
        });
        Ok(self
            .execute("update_product_listing", queries::update_listing(), variables)?
            .into_envelope())
    }

    fn delete_listing(&self, listing_id: &str) -> Result<Envelope<ProductListing>> {
        let variables = json!({
            "id": listing_id,
            "input": { "deleted": true },
        });
        Ok(self
            .execute("update_product_listing", queries::update_listing(), variables)?
            .into_envelope())
    }
}
