//! Member list endpoint.

use axum::Json;
use serde::Serialize;

/// Member names in display order.
pub static MEMBERS: [&str; 3] = ["Member1", "Member2", "Member3"];

#[derive(Debug, Serialize)]
pub struct MembersResponse {
    pub members: &'static [&'static str],
}

/// GET /api — returns the member list.
///
/// The body is compact JSON: `{"members":["Member1","Member2","Member3"]}`.
pub async fn list() -> Json<MembersResponse> {
    Json(MembersResponse { members: &MEMBERS })
}
