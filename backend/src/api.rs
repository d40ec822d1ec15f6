use crate::booking::{BookingError, BookingRequest, Field};
use serde::{Deserialize, Serialize};

/// Body of `POST /agendar` and `POST /api/booking`.
#[derive(Debug, Default, Deserialize)]
pub struct BookingPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub message: Option<String>,
}

impl From<BookingPayload> for BookingRequest {
    fn from(payload: BookingPayload) -> Self {
        Self {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            date: payload.date,
            time: payload.time,
            message: payload.message.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DispatchResponse {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RejectionResponse {
    pub error: String,
    /// Absent when the body could not be read at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    pub message: String,
}

impl RejectionResponse {
    pub fn malformed(detail: String) -> Self {
        Self {
            error: "malformed_body".to_string(),
            field: None,
            message: detail,
        }
    }
}

impl From<BookingError> for RejectionResponse {
    fn from(e: BookingError) -> Self {
        Self {
            error: e.kind().to_string(),
            field: Some(e.field()),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactLinks {
    pub whatsapp: String,
    pub email: String,
}
