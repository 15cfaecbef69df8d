//! Domain model for the case-assignment engine
//!
//! These are read-only snapshots of entities owned by the portal backend.
//! The engine never mutates an [`Agent`] or [`Case`]; it derives metrics
//! from them and issues assignment commands back to the backend.

pub mod agent;
pub mod case;
pub mod transfer;

pub use agent::{Agent, PortalRole};
pub use case::{Case, CaseStatus};
pub use transfer::{TransferReason, TransferRequest};
