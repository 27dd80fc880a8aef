use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, Res};

pub struct Success;
impl Success {
    pub fn created<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Created().json(body))
    }
    pub fn ok<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Ok().json(body))
    }
}

/// JSON body settings shared by every route: malformed bodies and missing required
/// fields are answered with a 400 in the usual error shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Structured reply of the creation-style and transition endpoints:
/// `{success, message?, error?, ...payload}`.
///
/// A failed outcome is still a 200 response; callers branch on `success`.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Outcome {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
            payload: Map::new(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            error: None,
            payload: Map::new(),
        }
    }

    /// Success without a message, carrying only the payload.
    pub fn with_payload<T: Serialize>(key: &str, value: &T) -> Res<Self> {
        Self {
            success: true,
            message: None,
            error: None,
            payload: Map::new(),
        }
        .with(key, value)
    }

    pub fn with<T: Serialize>(mut self, key: &str, value: &T) -> Res<Self> {
        let value = serde_json::to_value(value)
            .map_err(|e| AppError::Internal(format!("Serialization error: {}", e)))?;
        self.payload.insert(key.to_string(), value);
        Ok(self)
    }

    pub fn caused_by(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn respond(self) -> Res<impl Responder> {
        Success::ok(self)
    }
}
