use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use greg_core::compose;
use greg_core::execute::{self, ExecutionResult};
use greg_core::knowledge::Domain;
use greg_core::memory::Message;
use greg_core::viz::{self, ChartSuggestion, FieldMetadata};

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 100;
const MAX_LIMIT: usize = 1000;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/knowledge/domains", get(list_domains))
        .route("/knowledge/domains/:name", get(get_domain))
        .route("/knowledge/search/tables", get(search_tables))
        .route("/query/prepare", post(prepare_query))
        .route("/query/execute", post(execute_query))
        .route("/viz/suggest", post(suggest_charts))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "greg-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn list_domains(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.knowledge.domain_names())
}

async fn get_domain(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Domain>, ApiError> {
    state
        .knowledge
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or(ApiError::DomainNotFound(name))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: String,
}

async fn search_tables(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let q = non_blank(&params.q, "search query")?;
    Ok(Json(state.knowledge.search_tables(q)))
}

#[derive(Debug, Deserialize)]
struct PrepareRequest {
    question: String,
    #[serde(default)]
    conversation_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct PrepareResponse {
    proposed_sql: String,
    explanation: String,
    referenced_domains: Vec<String>,
    conversation_id: String,
    history: Vec<Message>,
}

async fn prepare_query(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PrepareRequest>,
) -> Result<Json<PrepareResponse>, ApiError> {
    let question = non_blank(&req.question, "question")?;
    tracing::info!(question, "preparing query");

    let hints = state.classifier.classify(question, &state.knowledge);
    let proposed = compose::compose_with_hints(question, &hints);

    let conversation_id = state.memory.ensure(req.conversation_id);
    state.memory.append(&conversation_id, "user", question);
    state.memory.append(
        &conversation_id,
        "assistant",
        &format!("SQL proposed:\n{}\nExplanation: {}", proposed.sql, proposed.explanation),
    );

    let history = state.memory.history(&conversation_id);

    Ok(Json(PrepareResponse {
        proposed_sql: proposed.sql,
        explanation: proposed.explanation,
        referenced_domains: proposed.referenced_domains,
        conversation_id,
        history,
    }))
}

#[derive(Debug, Deserialize)]
struct ExecuteRequest {
    sql: String,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

async fn execute_query(
    Json(req): Json<ExecuteRequest>,
) -> Result<Json<ExecutionResult>, ApiError> {
    let sql = non_blank(&req.sql, "sql")?;
    let limit = validated_limit(req.limit)?;
    Ok(Json(execute::execute(sql, limit)))
}

#[derive(Debug, Deserialize)]
struct VizRequest {
    #[serde(default)]
    fields: Option<Vec<FieldMetadata>>,
    #[serde(default)]
    columns: Option<Vec<String>>,
    #[serde(default)]
    sample_row: Option<Vec<Value>>,
}

#[derive(Debug, Serialize)]
struct VizResponse {
    suggestions: Vec<ChartSuggestion>,
    sample_figure: Value,
}

async fn suggest_charts(Json(req): Json<VizRequest>) -> Result<Json<VizResponse>, ApiError> {
    let profiles = match (&req.fields, &req.columns) {
        (Some(fields), _) if !fields.is_empty() => viz::profile_fields(fields),
        (_, Some(columns)) if !columns.is_empty() => {
            let sample_row = req.sample_row.clone().unwrap_or_default();
            viz::profile_columns(columns, &sample_row)
        }
        _ => {
            return Err(ApiError::Validation(
                "either 'fields' or 'columns' must be supplied".to_string(),
            ))
        }
    };

    let suggestions = viz::suggest(&profiles);
    let sample_figure = suggestions
        .first()
        .map(|s| s.config.clone())
        .unwrap_or(Value::Null);

    Ok(Json(VizResponse {
        suggestions,
        sample_figure,
    }))
}

fn non_blank<'a>(value: &'a str, what: &str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("{what} must not be empty")));
    }
    Ok(trimmed)
}

fn validated_limit(limit: usize) -> Result<usize, ApiError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(ApiError::Validation(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_inputs_are_rejected() {
        assert!(non_blank("  ", "question").is_err());
        assert_eq!(non_blank(" ok ", "question").unwrap(), "ok");
    }

    #[test]
    fn limit_bounds_are_enforced() {
        assert!(validated_limit(0).is_err());
        assert!(validated_limit(1001).is_err());
        assert_eq!(validated_limit(1).unwrap(), 1);
        assert_eq!(validated_limit(1000).unwrap(), 1000);
    }
}
