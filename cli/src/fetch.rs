use hasura_introspection::{IntrospectionResult, INTROSPECTION_QUERY};
use reqwest::header::USER_AGENT;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("the introspection request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("the introspection query returned errors: {0}")]
    GraphqlErrors(String),
    #[error("the introspection response contains no data")]
    MissingData,
    #[error("could not decode the introspection response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, serde::Serialize)]
struct Request {
    query: &'static str,
}

#[derive(Debug, serde::Deserialize)]
struct Response {
    data: Option<serde_json::Value>,
    errors: Option<Vec<serde_json::Value>>,
}

/// POSTs the introspection query and returns the typed payload together
/// with the raw JSON, which gets persisted alongside the generated client
/// for runtime inspection.
pub(crate) async fn introspect(
    url: &str,
    headers: &[(&str, &str)],
) -> Result<(IntrospectionResult, serde_json::Value), FetchError> {
    tracing::debug!(url, "introspecting schema");

    let request = Request {
        query: INTROSPECTION_QUERY,
    };

    let mut request_builder = reqwest::Client::new()
        .post(url)
        .header(USER_AGENT, "hasura-codegen")
        .header("Accept", "application/json")
        .json(&request);

    for (name, value) in headers {
        request_builder = request_builder.header(*name, *value);
    }

    let response = request_builder.send().await?.error_for_status()?;
    let response: Response = response.json().await?;

    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        return Err(FetchError::GraphqlErrors(
            serde_json::Value::Array(errors).to_string(),
        ));
    }

    let raw = response.data.ok_or(FetchError::MissingData)?;
    let introspection = serde_json::from_value(raw.clone())?;

    Ok((introspection, raw))
}
