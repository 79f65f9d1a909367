//! Shared response bodies for handlers that report an outcome rather than
//! return an entity.

use serde::Serialize;
use tabula_core::types::DbId;

/// `{ "message": ..., "id": ... }` acknowledgement body.
///
/// `id` is omitted from the JSON unless set with [`MessageResponse::with_id`].
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message, id: None }
    }

    /// Attach the id of the row the message refers to.
    pub fn with_id(mut self, id: DbId) -> Self {
        self.id = Some(id);
        self
    }
}
