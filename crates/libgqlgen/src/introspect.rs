use crate::ast;
use cynic::QueryBuilder;
use cynic::http::ReqwestExt;
use cynic_introspection::IntrospectionQuery;
use reqwest::header::USER_AGENT;
use thiserror::Error;

/// Errors fetching a remote schema or converting the introspection result.
///
/// All of these are fatal for the run: there are no retries and no partial
/// results.
#[derive(Debug, Error)]
pub enum IntrospectError {
    #[error("Introspection request failed: {0}")]
    Transport(#[from] cynic::http::CynicReqwestError),

    #[error("Endpoint returned GraphQL errors: {0:?}")]
    GraphQl(Vec<cynic::GraphQlError>),

    #[error("Introspection response carried no data")]
    MissingData,

    #[error("Introspection result could not be converted to a schema: {0}")]
    Schema(#[from] cynic_introspection::SchemaError),
}

#[derive(Debug, Error)]
#[error("Printed SDL failed to re-parse: {0}")]
pub struct SchemaParseError(#[from] ast::schema::ParseError);

/// Fetch the schema of the GraphQL service at `url` and return its SDL text.
///
/// Sends the standard introspection query in a single POST, then round-trips
/// the result through canonical printed SDL, discarding introspection-only
/// metadata that SDL cannot express.
pub async fn fetch_sdl(url: &str) -> Result<String, IntrospectError> {
    log::debug!("Introspecting `{url}`...");

    let response = reqwest::Client::new()
        .post(url)
        .header(USER_AGENT, "gqlgen")
        .header("Accept", "application/json")
        .run_graphql(IntrospectionQuery::build(()))
        .await?;

    if let Some(errors) = response.errors
        && !errors.is_empty() {
        return Err(IntrospectError::GraphQl(errors));
    }

    let data = response.data.ok_or(IntrospectError::MissingData)?;
    let sdl = data.into_schema()?.to_sdl();
    log::debug!("Introspection of `{url}` produced {} bytes of SDL.", sdl.len());

    Ok(sdl)
}

/// Re-parse printed SDL into a schema document.
pub fn parse_sdl(sdl: &str) -> Result<ast::schema::Document, SchemaParseError> {
    Ok(ast::schema::parse(sdl)?)
}
