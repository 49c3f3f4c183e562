//! Airtable REST client.
//!
//! Implements [`DataProvider`] and [`PlanStore`] against one record base.
//! Listings are paginated with the `offset` continuation token and sorted
//! server-side; deletions run in batches of 10 (the API maximum per
//! request). The client is constructed per run — no process-wide store
//! handle.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::records::{CreateRecord, PlanFields, Record, RecordPage};
use super::{records, upcoming_only, DataProvider, PlanStore};
use crate::error::{Error, Result};
use crate::models::{Actor, Character, Plan, Scene, Session};

const API_BASE: &str = "https://api.airtable.com/v0";
const PAGE_SIZE: usize = 100;
const DELETE_BATCH_SIZE: usize = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for one show's record base.
pub struct AirtableClient {
    client: Client,
    token: String,
    base_id: String,
}

impl AirtableClient {
    /// Creates a client for a base, authenticated with a bearer token.
    pub fn new(token: impl Into<String>, base_id: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            token: token.into(),
            base_id: base_id.into(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{API_BASE}/{}/{table}", self.base_id)
    }

    /// Fetches every record of a table, following pagination to the end.
    async fn list_all<F: DeserializeOwned>(
        &self,
        table: &str,
        sort_field: Option<&str>,
    ) -> Result<Vec<Record<F>>> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(self.table_url(table))
                .bearer_auth(&self.token)
                .query(&[("pageSize", PAGE_SIZE.to_string())]);
            if let Some(field) = sort_field {
                request = request.query(&[
                    ("sort[0][field]", field),
                    ("sort[0][direction]", "asc"),
                ]);
            }
            if let Some(ref token) = offset {
                request = request.query(&[("offset", token.as_str())]);
            }

            let response = check_status(request.send().await?, table).await?;
            let page: RecordPage<F> = response.json().await?;

            records.extend(page.records);
            debug!(table, total = records.len(), "fetched record page");

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        Ok(records)
    }
}

/// Maps non-success responses to [`Error::Api`] with a truncated body.
async fn check_status(response: Response, table: &str) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api {
        table: table.to_string(),
        status,
        message: body.chars().take(200).collect(),
    })
}

#[async_trait]
impl DataProvider for AirtableClient {
    async fn load_actors(&self) -> Result<Vec<Actor>> {
        let records = self
            .list_all::<records::ActorFields>("Actor", Some("Name"))
            .await?;
        Ok(records.into_iter().map(Actor::from).collect())
    }

    async fn load_sessions(&self, include_past: bool) -> Result<Vec<Session>> {
        let records = self
            .list_all::<records::SessionFields>("Session", Some("Date"))
            .await?;
        let sessions: Vec<Session> = records.into_iter().map(Session::from).collect();
        if include_past {
            Ok(sessions)
        } else {
            Ok(upcoming_only(sessions, Local::now().date_naive()))
        }
    }

    async fn load_scenes(&self) -> Result<Vec<Scene>> {
        let records = self
            .list_all::<records::SceneFields>("Scene", Some("Number"))
            .await?;
        Ok(records.into_iter().map(Scene::from).collect())
    }

    async fn load_characters(&self) -> Result<Vec<Character>> {
        let records = self
            .list_all::<records::CharacterFields>("Character", Some("Name"))
            .await?;
        Ok(records.into_iter().map(Character::from).collect())
    }
}

#[async_trait]
impl PlanStore for AirtableClient {
    async fn clear_plans(&self) -> Result<()> {
        // Only the record ids are needed; the fields stay opaque.
        let records = self
            .list_all::<serde_json::Value>("Plan", None)
            .await?;
        let ids: Vec<String> = records.into_iter().map(|r| r.id).collect();

        for batch in ids.chunks(DELETE_BATCH_SIZE) {
            let params: Vec<(&str, &str)> =
                batch.iter().map(|id| ("records[]", id.as_str())).collect();
            let response = self
                .client
                .delete(self.table_url("Plan"))
                .bearer_auth(&self.token)
                .query(&params)
                .send()
                .await?;
            check_status(response, "Plan").await?;
            debug!(deleted = batch.len(), "deleted plan record batch");
        }

        Ok(())
    }

    async fn create_plan(&self, plan: &Plan) -> Result<()> {
        let body = CreateRecord {
            fields: PlanFields::from(plan),
        };
        let response = self
            .client
            .post(self.table_url("Plan"))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        check_status(response, "Plan").await?;
        Ok(())
    }
}
