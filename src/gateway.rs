//! Persistence gateway contract and HTTP client.
//!
//! The engine consumes this boundary; it never implements it. All calls are
//! keyed by element/template id and carry JSON bodies. Local state is
//! authoritative for the editing session: callers fire these requests after
//! the local mutation has already been applied, reconcile the response via
//! the engine's `apply_remote_*` entry points, and surface failures on their
//! own error channel without rolling local edits back.
//!
//! ERROR HANDLING
//! ==============
//! Transport and non-2xx responses both land in [`GatewayError`]; nothing
//! here panics or retries. Dropping an in-flight future is safe because every
//! write is an idempotent id-scoped operation.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::{Deserialize, Serialize};

use crate::config::env_string;
use crate::element::{Element, ElementId, ElementKind, ElementProps, PartialElement, Position, TemplateId};
use crate::layout::{Alignment, Direction};

/// Default gateway base URL, overridable via `DRAFTBOARD_GATEWAY_URL`.
const DEFAULT_GATEWAY_URL: &str = "http://localhost:3000";

/// Error returned by gateway calls.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a response (DNS, connect, timeout, body).
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The gateway answered with a non-success status.
    #[error("gateway rejected {endpoint}: status {status}")]
    Rejected { endpoint: &'static str, status: u16 },
}

/// One entry of a batch z-order write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZEntry {
    pub id: ElementId,
    pub z_index: i64,
}

#[derive(Debug, Serialize)]
struct CreateElementRequest<'a> {
    kind: ElementKind,
    position: Position,
    props: &'a ElementProps,
}

#[derive(Debug, Serialize)]
struct AlignRequest<'a> {
    ids: &'a [ElementId],
    alignment: Alignment,
}

#[derive(Debug, Serialize)]
struct DistributeRequest<'a> {
    ids: &'a [ElementId],
    direction: Direction,
}

/// The persistence boundary the engine's host drives. Implemented over HTTP
/// by [`HttpGateway`]; tests substitute in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// Persist a newly created element; the response carries authoritative
    /// id/z-index.
    async fn create_element(
        &self,
        template_id: TemplateId,
        kind: ElementKind,
        position: Position,
        props: &ElementProps,
    ) -> Result<Element, GatewayError>;

    /// Persist a sparse update; the response is the full updated element.
    async fn update_element(&self, id: ElementId, fields: &PartialElement) -> Result<Element, GatewayError>;

    /// Delete one element. Idempotent server-side.
    async fn delete_element(&self, id: ElementId) -> Result<(), GatewayError>;

    /// Persist new z-indexes for many elements in one call.
    async fn reorder_elements(&self, entries: &[(ElementId, i64)]) -> Result<(), GatewayError>;

    /// Server-side mirror of alignment for canonical recomputation.
    async fn align_elements(&self, ids: &[ElementId], alignment: Alignment) -> Result<Vec<Element>, GatewayError>;

    /// Server-side mirror of distribution for canonical recomputation.
    async fn distribute_elements(&self, ids: &[ElementId], direction: Direction)
    -> Result<Vec<Element>, GatewayError>;

    /// Fetch the full element collection of a template (hydration / re-sync).
    async fn fetch_elements(&self, template_id: TemplateId) -> Result<Vec<Element>, GatewayError>;
}

/// Delete many elements in parallel, joined all-or-nothing: the first failure
/// fails the whole batch, but deletes that already landed are not undone.
///
/// # Errors
///
/// Returns the first [`GatewayError`] produced by any delete in the batch.
pub async fn delete_many<G: Gateway>(gateway: &G, ids: &[ElementId]) -> Result<(), GatewayError> {
    futures::future::try_join_all(ids.iter().map(|id| gateway.delete_element(*id)))
        .await
        .map(|_deleted| ())
}

/// HTTP implementation of the gateway contract.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Build a gateway client against the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), base_url: base_url.into() }
    }

    /// Build a gateway client from `DRAFTBOARD_GATEWAY_URL`, falling back to
    /// the compiled-in default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env_string("DRAFTBOARD_GATEWAY_URL", DEFAULT_GATEWAY_URL))
    }

    /// The base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn check(endpoint: &'static str, resp: &reqwest::Response) -> Result<(), GatewayError> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::Rejected { endpoint, status: status.as_u16() })
        }
    }
}

impl Gateway for HttpGateway {
    async fn create_element(
        &self,
        template_id: TemplateId,
        kind: ElementKind,
        position: Position,
        props: &ElementProps,
    ) -> Result<Element, GatewayError> {
        let body = CreateElementRequest { kind, position, props };
        let resp = self
            .client
            .post(self.url(&format!("/api/templates/{template_id}/elements")))
            .json(&body)
            .send()
            .await?;
        Self::check("create_element", &resp)?;
        Ok(resp.json::<Element>().await?)
    }

    async fn update_element(&self, id: ElementId, fields: &PartialElement) -> Result<Element, GatewayError> {
        let resp = self
            .client
            .patch(self.url(&format!("/api/elements/{id}")))
            .json(fields)
            .send()
            .await?;
        Self::check("update_element", &resp)?;
        Ok(resp.json::<Element>().await?)
    }

    async fn delete_element(&self, id: ElementId) -> Result<(), GatewayError> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/elements/{id}")))
            .send()
            .await?;
        Self::check("delete_element", &resp)
    }

    async fn reorder_elements(&self, entries: &[(ElementId, i64)]) -> Result<(), GatewayError> {
        let body: Vec<ZEntry> = entries.iter().map(|&(id, z_index)| ZEntry { id, z_index }).collect();
        let resp = self
            .client
            .post(self.url("/api/elements/reorder"))
            .json(&body)
            .send()
            .await?;
        Self::check("reorder_elements", &resp)
    }

    async fn align_elements(&self, ids: &[ElementId], alignment: Alignment) -> Result<Vec<Element>, GatewayError> {
        let body = AlignRequest { ids, alignment };
        let resp = self
            .client
            .post(self.url("/api/elements/align"))
            .json(&body)
            .send()
            .await?;
        Self::check("align_elements", &resp)?;
        Ok(resp.json::<Vec<Element>>().await?)
    }

    async fn distribute_elements(
        &self,
        ids: &[ElementId],
        direction: Direction,
    ) -> Result<Vec<Element>, GatewayError> {
        let body = DistributeRequest { ids, direction };
        let resp = self
            .client
            .post(self.url("/api/elements/distribute"))
            .json(&body)
            .send()
            .await?;
        Self::check("distribute_elements", &resp)?;
        Ok(resp.json::<Vec<Element>>().await?)
    }

    async fn fetch_elements(&self, template_id: TemplateId) -> Result<Vec<Element>, GatewayError> {
        let resp = self
            .client
            .get(self.url(&format!("/api/templates/{template_id}/elements")))
            .send()
            .await?;
        Self::check("fetch_elements", &resp)?;
        Ok(resp.json::<Vec<Element>>().await?)
    }
}
