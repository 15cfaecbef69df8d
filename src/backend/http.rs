//! HTTP implementation of the case backend collaborator
//!
//! Thin reqwest client over the portal REST API. Responses are deserialized
//! into strongly-typed wire DTOs and validated into domain records at this
//! boundary, so the engine never handles loosely-typed payloads. Writes are
//! issued exactly once; retry affordances belong to the caller.

use crate::backend::{BackendError, CaseBackend};
use crate::config::PortalConfig;
use crate::domain::{Agent, Case, CaseStatus, PortalRole, TransferRequest};
use crate::error::sanitize_message;
use crate::session::Session;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP backend configuration
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Portal REST API client
pub struct HttpCaseBackend {
    config: HttpBackendConfig,
    client: Client,
}

impl HttpCaseBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Build a backend from loaded portal configuration
    pub fn from_config(config: &PortalConfig) -> Result<Self, BackendError> {
        Self::new(HttpBackendConfig {
            base_url: config.backend.base_url.clone(),
            timeout: Duration::from_secs(config.backend.request_timeout_secs),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = sanitize_message(&body);
        warn!(status = status.as_u16(), "backend rejected request");
        Err(BackendError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
    ) -> Result<T, BackendError> {
        let response = self
            .client
            .get(self.endpoint(path))
            .bearer_auth(session.bearer())
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Self::check_status(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl CaseBackend for HttpCaseBackend {
    async fn fetch_agents(&self, session: &Session) -> Result<Vec<Agent>, BackendError> {
        let users: Vec<UserDto> = self
            .get_json(session, "users?capability=case-handling")
            .await?;

        // The query already filters server-side; re-filter here so a lax
        // backend cannot smuggle clients or deactivated users into ranking.
        let agents: Vec<Agent> = users
            .into_iter()
            .filter(|u| u.active && u.role.can_handle_cases())
            .map(Agent::from)
            .collect();

        debug!(count = agents.len(), "fetched agent roster");
        Ok(agents)
    }

    async fn fetch_cases(&self, session: &Session) -> Result<Vec<Case>, BackendError> {
        let cases: Vec<CaseDto> = self.get_json(session, "cases").await?;
        debug!(count = cases.len(), "fetched case collection");
        Ok(cases.into_iter().map(Case::from).collect())
    }

    async fn assign_case(
        &self,
        session: &Session,
        case_id: &str,
        agent_id: &str,
    ) -> Result<(), BackendError> {
        debug!(case_id, agent_id, "dispatching assign command");
        let response = self
            .client
            .put(self.endpoint(&format!("cases/{case_id}/assign")))
            .bearer_auth(session.bearer())
            .json(&AssignBody { agent_id })
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn transfer_case(
        &self,
        session: &Session,
        request: &TransferRequest,
    ) -> Result<(), BackendError> {
        debug!(
            case_id = %request.case_id,
            new_agent_id = %request.new_agent_id,
            reason = request.reason.as_str(),
            "dispatching transfer command"
        );
        let response = self
            .client
            .post(self.endpoint(&format!("cases/{}/transfer", request.case_id)))
            .bearer_auth(session.bearer())
            .json(&TransferBody::from(request))
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }
}

// Wire DTOs: the portal API speaks camelCase JSON.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: String,
    name: String,
    email: String,
    #[serde(default = "default_active")]
    active: bool,
    role: PortalRole,
}

fn default_active() -> bool {
    true
}

impl From<UserDto> for Agent {
    fn from(dto: UserDto) -> Self {
        Agent {
            id: dto.id,
            name: dto.name,
            email: dto.email,
            active: dto.active,
            role: dto.role,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaseDto {
    id: String,
    reference_code: String,
    status: CaseStatus,
    #[serde(default)]
    assigned_agent_id: Option<String>,
    submitted_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CaseDto> for Case {
    fn from(dto: CaseDto) -> Self {
        Case {
            id: dto.id,
            reference: dto.reference_code,
            status: dto.status,
            assigned_agent_id: dto.assigned_agent_id,
            submitted_at: dto.submitted_at,
            updated_at: dto.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignBody<'a> {
    agent_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferBody<'a> {
    new_agent_id: &'a str,
    reason: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    handover_notes: Option<&'a str>,
    notify_client: bool,
    notify_agent: bool,
}

impl<'a> From<&'a TransferRequest> for TransferBody<'a> {
    fn from(request: &'a TransferRequest) -> Self {
        Self {
            new_agent_id: &request.new_agent_id,
            reason: request.reason.as_str(),
            handover_notes: request.handover_notes.as_deref(),
            notify_client: request.notify_client,
            notify_agent: request.notify_agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransferReason;

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let backend = HttpCaseBackend::new(HttpBackendConfig {
            base_url: "http://localhost:8080/api/".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        assert_eq!(backend.endpoint("cases"), "http://localhost:8080/api/cases");
    }

    #[test]
    fn test_user_dto_parses_and_converts() {
        let json = r#"{"id":"u-1","name":"Asha Rao","email":"asha@example.com","role":"agent"}"#;
        let dto: UserDto = serde_json::from_str(json).unwrap();
        let agent = Agent::from(dto);
        assert_eq!(agent.id, "u-1");
        assert!(agent.active); // defaulted
        assert_eq!(agent.role, PortalRole::Agent);
    }

    #[test]
    fn test_case_dto_parses_and_converts() {
        let json = r#"{
            "id": "c-9",
            "referenceCode": "IMM-2026-0009",
            "status": "under_review",
            "assignedAgentId": "u-1",
            "submittedAt": "2026-01-10T09:00:00Z",
            "updatedAt": "2026-01-12T16:30:00Z"
        }"#;
        let case = Case::from(serde_json::from_str::<CaseDto>(json).unwrap());
        assert_eq!(case.reference, "IMM-2026-0009");
        assert_eq!(case.status, CaseStatus::UnderReview);
        assert_eq!(case.assigned_agent_id.as_deref(), Some("u-1"));
    }

    #[test]
    fn test_transfer_body_wire_shape() {
        let request = TransferRequest::new("c-1", "a-2", TransferReason::Coverage)
            .with_notes("deadline next week")
            .notifying(true, true);
        let body = serde_json::to_value(TransferBody::from(&request)).unwrap();
        assert_eq!(body["newAgentId"], "a-2");
        assert_eq!(body["reason"], "coverage");
        assert_eq!(body["handoverNotes"], "deadline next week");
        assert_eq!(body["notifyClient"], true);
        assert_eq!(body["notifyAgent"], true);
    }

    #[test]
    fn test_transfer_body_omits_absent_notes() {
        let request = TransferRequest::new("c-1", "a-2", TransferReason::Other);
        let body = serde_json::to_value(TransferBody::from(&request)).unwrap();
        assert!(body.get("handoverNotes").is_none());
    }
}
