//! AI station recommendation flow
//!
//! Snapshots the station directory, reduces each station to the fields the
//! model needs, renders one prompt and forwards it to the hosted completion
//! endpoint. The reply must be a JSON object with exactly the two fields the
//! UI displays. No caching, no retry, no fallback.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::station::Station;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::llm::CompletionModel;

/// User constraints for a recommendation
#[derive(Debug, Clone)]
pub struct RecommendationQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Desired charging time, ISO 8601
    pub time: String,
    /// Forwarded to the model verbatim (e.g. "CCS", "Tesla")
    pub connector_type: String,
}

/// The model's two-field reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub station_name: String,
    pub reason: String,
}

/// Reduced station projection serialized into the prompt
#[derive(Serialize)]
struct StationSnapshot<'a> {
    name: &'a str,
    address: &'a str,
    available_chargers: i32,
    total_chargers: i32,
    connectors: Vec<&'static str>,
    rating: f64,
    latitude: f64,
    longitude: f64,
}

impl<'a> From<&'a Station> for StationSnapshot<'a> {
    fn from(s: &'a Station) -> Self {
        Self {
            name: &s.name,
            address: &s.address,
            available_chargers: s.available_chargers,
            total_chargers: s.total_chargers,
            connectors: s.connectors.iter().map(|c| c.connector_type.as_str()).collect(),
            rating: s.rating,
            latitude: s.latitude,
            longitude: s.longitude,
        }
    }
}

/// Service for AI-backed station recommendations
pub struct RecommendationService {
    repos: Arc<dyn RepositoryProvider>,
    model: Arc<dyn CompletionModel>,
}

impl RecommendationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, model: Arc<dyn CompletionModel>) -> Self {
        Self { repos, model }
    }

    pub async fn recommend(&self, query: RecommendationQuery) -> DomainResult<Recommendation> {
        let stations = self.repos.stations().find_all().await?;
        if stations.is_empty() {
            return Err(DomainError::Validation(
                "no stations available to recommend from".into(),
            ));
        }

        let snapshots: Vec<StationSnapshot<'_>> = stations.iter().map(Into::into).collect();
        let stations_json = serde_json::to_string(&snapshots)
            .map_err(|e| DomainError::RecommendationUnavailable(e.to_string()))?;

        let prompt = render_prompt(&query, &stations_json, &Utc::now().to_rfc3339());
        debug!(prompt_len = prompt.len(), "Requesting station recommendation");

        let reply = self.model.complete(&prompt).await.map_err(|e| {
            error!("Completion request failed: {}", e);
            DomainError::RecommendationUnavailable(e.to_string())
        })?;

        parse_reply(&reply)
    }
}

fn render_prompt(query: &RecommendationQuery, stations_json: &str, current_time: &str) -> String {
    format!(
        "You are an expert EV charging station recommender.\n\
         Based on the user's location (latitude: {lat}, longitude: {lng}),\n\
         the time they want to charge ({time}), and their connector type ({connector}),\n\
         recommend the best EV charging station for them from the following list of available stations:\n\
         \n\
         {stations}\n\
         \n\
         The current time is {now}. Consider the user's desired time, current availability, distance, and station ratings.\n\
         Provide a concise, user-friendly reason for your recommendation.\n\
         \n\
         Reply with a JSON object with exactly two fields: \
         \"station_name\" (the name of the recommended station) and \
         \"reason\" (the reasoning behind the recommendation). No other text.",
        lat = query.latitude,
        lng = query.longitude,
        time = query.time,
        connector = query.connector_type,
        stations = stations_json,
        now = current_time,
    )
}

/// Parse the model reply, tolerating a Markdown code fence around the JSON.
fn parse_reply(reply: &str) -> DomainResult<Recommendation> {
    let trimmed = reply.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(body).map_err(|e| {
        DomainError::RecommendationUnavailable(format!("malformed model reply: {}", e))
    })
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::InMemoryRepos;
    use crate::application::services::{StationDraft, StationService};
    use crate::domain::station::{Connector, ConnectorType};
    use crate::infrastructure::llm::CompletionError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedModel {
        reply: Result<String, ()>,
        last_prompt: Mutex<Option<String>>,
    }

    impl CannedModel {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                last_prompt: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(()),
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl CompletionModel for CannedModel {
        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            self.reply
                .clone()
                .map_err(|_| CompletionError::EmptyReply)
        }
    }

    async fn repos_with_station() -> Arc<InMemoryRepos> {
        let repos = Arc::new(InMemoryRepos::new());
        StationService::new(repos.clone())
            .create(StationDraft {
                name: "Westend Mall Statiq Station".into(),
                address: "Parihar Chowk, Aundh, Pune".into(),
                latitude: 18.5678,
                longitude: 73.8015,
                connectors: vec![Connector {
                    connector_type: ConnectorType::Chademo,
                    power_kw: 50.0,
                }],
                price_per_kwh: 18.0,
                total_chargers: 4,
                available_chargers: 3,
                rating: 4.7,
            })
            .await
            .unwrap();
        repos
    }

    fn query() -> RecommendationQuery {
        RecommendationQuery {
            latitude: 18.52,
            longitude: 73.85,
            time: "2026-08-10T14:00:00Z".into(),
            connector_type: "CHAdeMO".into(),
        }
    }

    #[tokio::test]
    async fn prompt_carries_stations_and_constraints() {
        let repos = repos_with_station().await;
        let model = Arc::new(CannedModel::replying(
            r#"{"station_name":"Westend Mall Statiq Station","reason":"closest with free CHAdeMO"}"#,
        ));
        let service = RecommendationService::new(repos, model.clone());

        let rec = service.recommend(query()).await.unwrap();
        assert_eq!(rec.station_name, "Westend Mall Statiq Station");

        let prompt = model.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Westend Mall Statiq Station"));
        assert!(prompt.contains("CHAdeMO"));
        assert!(prompt.contains("latitude: 18.52"));
    }

    #[tokio::test]
    async fn fenced_reply_is_accepted() {
        let repos = repos_with_station().await;
        let model = Arc::new(CannedModel::replying(
            "```json\n{\"station_name\":\"X\",\"reason\":\"Y\"}\n```",
        ));
        let service = RecommendationService::new(repos, model);
        let rec = service.recommend(query()).await.unwrap();
        assert_eq!(rec.station_name, "X");
        assert_eq!(rec.reason, "Y");
    }

    #[tokio::test]
    async fn malformed_reply_is_unavailable() {
        let repos = repos_with_station().await;
        let model = Arc::new(CannedModel::replying("sorry, I cannot help with that"));
        let service = RecommendationService::new(repos, model);
        let err = service.recommend(query()).await.unwrap_err();
        assert!(matches!(err, DomainError::RecommendationUnavailable(_)));
    }

    #[tokio::test]
    async fn transport_failure_is_unavailable() {
        let repos = repos_with_station().await;
        let service = RecommendationService::new(repos, Arc::new(CannedModel::failing()));
        let err = service.recommend(query()).await.unwrap_err();
        assert!(matches!(err, DomainError::RecommendationUnavailable(_)));
    }

    #[tokio::test]
    async fn empty_directory_is_validation_error() {
        let repos = Arc::new(InMemoryRepos::new());
        let model = Arc::new(CannedModel::replying("{}"));
        let service = RecommendationService::new(repos, model);
        let err = service.recommend(query()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
