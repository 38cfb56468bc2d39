//! Card Calls
//!
//! CRUD against `/cards/`, plus the column-move PATCH issued after an
//! optimistic drag (see DESIGN.md on move persistence).

use chrono::NaiveDate;
use gloo_net::http::Request;
use serde::Serialize;

use crate::models::{CardDto, Column};
use crate::session::Session;

use super::{authorized, decode_json, fail_on_status, unreachable, ApiClient, ApiResult};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateCardArgs<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub board_id: u32,
}

#[derive(Serialize, Default)]
pub struct UpdateCardArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<u32>,
}

// ========================
// Calls
// ========================

impl ApiClient {
    pub async fn list_cards(&self, session: &Session, board_id: u32) -> ApiResult<Vec<CardDto>> {
        let url = self.url(&format!("/cards/?board_id={}", board_id));
        let resp = authorized(Request::get(&url), session)?
            .send()
            .await
            .map_err(unreachable)?;
        decode_json(fail_on_status(resp).await?).await
    }

    pub async fn create_card(
        &self,
        session: &Session,
        args: &CreateCardArgs<'_>,
    ) -> ApiResult<CardDto> {
        let url = self.url("/cards/");
        let resp = authorized(Request::post(&url), session)?
            .json(args)
            .map_err(unreachable)?
            .send()
            .await
            .map_err(unreachable)?;
        decode_json(fail_on_status(resp).await?).await
    }

    pub async fn update_card(
        &self,
        session: &Session,
        card_id: u32,
        args: &UpdateCardArgs<'_>,
    ) -> ApiResult<CardDto> {
        let url = self.url(&format!("/cards/{}", card_id));
        let resp = authorized(Request::patch(&url), session)?
            .json(args)
            .map_err(unreachable)?
            .send()
            .await
            .map_err(unreachable)?;
        decode_json(fail_on_status(resp).await?).await
    }

    pub async fn delete_card(&self, session: &Session, card_id: u32) -> ApiResult<()> {
        let url = self.url(&format!("/cards/{}", card_id));
        let resp = authorized(Request::delete(&url), session)?
            .send()
            .await
            .map_err(unreachable)?;
        fail_on_status(resp).await?;
        Ok(())
    }

    /// Persist a drag's column change. The local move already happened;
    /// callers surface a failure but do not roll back.
    pub async fn move_card(
        &self,
        session: &Session,
        card_id: u32,
        column: Column,
    ) -> ApiResult<CardDto> {
        let args = UpdateCardArgs {
            list_id: Some(column.id()),
            ..Default::default()
        };
        self.update_card(session, card_id, &args).await
    }
}
