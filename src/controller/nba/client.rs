use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::NbaApiClient;
use crate::error::CoreError;
use crate::model::RawTeam;

pub const DEFAULT_API_HOST: &str = "api-nba-v1.p.rapidapi.com";
pub const DEFAULT_API_BASE_URL: &str = "https://api-nba-v1.p.rapidapi.com";

#[derive(Clone, Debug)]
pub struct NbaApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_host: String,
}

/// Body of `GET /teams`. A body without a `response` array does not decode.
#[derive(Deserialize, Debug)]
pub struct TeamsEnvelope {
    response: Vec<RawTeam>,
}

impl TeamsEnvelope {
    /// # Errors
    ///
    /// Will return `Err` with `Upstream` if the body is not a teams envelope
    pub fn from_body(body: &str) -> Result<Self, CoreError> {
        serde_json::from_str(body)
            .map_err(|e| CoreError::Upstream(format!("malformed teams response: {e}")))
    }

    #[must_use]
    pub fn first(self) -> Option<RawTeam> {
        self.response.into_iter().next()
    }

    #[must_use]
    pub fn nba_franchises(self) -> Vec<RawTeam> {
        self.response
            .into_iter()
            .filter(|team| team.nba_franchise)
            .collect()
    }
}

#[derive(Clone)]
pub struct RapidApiNbaClient {
    client: Client,
    config: NbaApiConfig,
}

impl RapidApiNbaClient {
    #[must_use]
    pub fn new(config: NbaApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn teams_url(&self) -> String {
        format!("{}/teams", self.config.base_url.trim_end_matches('/'))
    }

    async fn get_teams(&self, query: &[(&str, &str)]) -> Result<TeamsEnvelope, CoreError> {
        let url = self.teams_url();
        debug!(%url, ?query, "requesting teams");
        let resp = self
            .client
            .get(&url)
            .query(query)
            .header("x-rapidapi-key", &self.config.api_key)
            .header("x-rapidapi-host", &self.config.api_host)
            .send()
            .await?
            .error_for_status()?;
        TeamsEnvelope::from_body(&resp.text().await?)
    }
}

#[async_trait]
impl NbaApiClient for RapidApiNbaClient {
    async fn list_teams(&self) -> Result<Vec<RawTeam>, CoreError> {
        Ok(self.get_teams(&[]).await?.nba_franchises())
    }

    async fn find_team_by_name(&self, name: &str) -> Result<Option<RawTeam>, CoreError> {
        Ok(self.get_teams(&[("name", name)]).await?.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_keeps_only_nba_franchises() {
        let body = r#"{
            "get": "teams/",
            "results": 3,
            "response": [
                {"id": 1, "name": "Atlanta Hawks", "nickname": "Hawks", "city": "Atlanta", "code": "ATL", "nbaFranchise": true},
                {"id": 3, "name": "Brisbane Bullets", "nickname": "Bullets", "city": "Brisbane", "code": "BNE", "nbaFranchise": false},
                {"id": 2, "name": "Boston Celtics", "nickname": "Celtics", "city": "Boston", "code": "BOS", "nbaFranchise": true}
            ]
        }"#;
        let envelope = TeamsEnvelope::from_body(body).unwrap();
        let names: Vec<_> = envelope
            .nba_franchises()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names, vec!["Atlanta Hawks", "Boston Celtics"]);
    }

    #[test]
    fn body_without_response_is_an_upstream_error() {
        let err = TeamsEnvelope::from_body(r#"{"message":"You are not subscribed to this API."}"#)
            .unwrap_err();
        assert!(matches!(err, CoreError::Upstream(_)));

        let err = TeamsEnvelope::from_body(r#"{"response": null}"#).unwrap_err();
        assert!(matches!(err, CoreError::Upstream(_)));
    }

    #[test]
    fn empty_response_array_is_not_an_error() {
        let envelope = TeamsEnvelope::from_body(r#"{"response": []}"#).unwrap();
        assert!(envelope.first().is_none());
    }

    #[test]
    fn teams_url_ignores_trailing_slash() {
        let client = RapidApiNbaClient::new(NbaApiConfig {
            base_url: "https://example.test/".into(),
            api_key: "k".into(),
            api_host: DEFAULT_API_HOST.into(),
        });
        assert_eq!(client.teams_url(), "https://example.test/teams");
    }
}
