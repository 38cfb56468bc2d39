//! Worklog Calls
//!
//! List/create under `/cards/{id}/worklogs`, update/delete under
//! `/worklogs/{id}`. After any mutation the caller reloads the full list
//! and recomputes the total; nothing is patched incrementally.

use chrono::NaiveDate;
use gloo_net::http::Request;
use serde::Serialize;

use crate::models::Worklog;
use crate::session::Session;

use super::{authorized, decode_json, fail_on_status, unreachable, ApiClient, ApiResult};

/// Payload for both create and update
#[derive(Serialize)]
pub struct WorklogArgs<'a> {
    pub hours: f64,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'a str>,
}

impl ApiClient {
    pub async fn list_worklogs(&self, session: &Session, card_id: u32) -> ApiResult<Vec<Worklog>> {
        let url = self.url(&format!("/cards/{}/worklogs", card_id));
        let resp = authorized(Request::get(&url), session)?
            .send()
            .await
            .map_err(unreachable)?;
        decode_json(fail_on_status(resp).await?).await
    }

    pub async fn create_worklog(
        &self,
        session: &Session,
        card_id: u32,
        args: &WorklogArgs<'_>,
    ) -> ApiResult<Worklog> {
        let url = self.url(&format!("/cards/{}/worklogs", card_id));
        let resp = authorized(Request::post(&url), session)?
            .json(args)
            .map_err(unreachable)?
            .send()
            .await
            .map_err(unreachable)?;
        decode_json(fail_on_status(resp).await?).await
    }

    pub async fn update_worklog(
        &self,
        session: &Session,
        worklog_id: u32,
        args: &WorklogArgs<'_>,
    ) -> ApiResult<Worklog> {
        let url = self.url(&format!("/worklogs/{}", worklog_id));
        let resp = authorized(Request::patch(&url), session)?
            .json(args)
            .map_err(unreachable)?
            .send()
            .await
            .map_err(unreachable)?;
        decode_json(fail_on_status(resp).await?).await
    }

    pub async fn delete_worklog(&self, session: &Session, worklog_id: u32) -> ApiResult<()> {
        let url = self.url(&format!("/worklogs/{}", worklog_id));
        let resp = authorized(Request::delete(&url), session)?
            .send()
            .await
            .map_err(unreachable)?;
        fail_on_status(resp).await?;
        Ok(())
    }
}
