use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::richtext::bullets::bullet_segments;
use crate::richtext::{segment_value, Segment};

#[derive(Debug, Deserialize)]
pub struct SegmentRequest {
    /// Any JSON value; non-strings are coerced to text first.
    #[serde(default)]
    pub text: Value,
}

#[derive(Debug, Serialize)]
pub struct SegmentResponse {
    pub segments: Vec<Segment>,
}

/// POST /api/v1/text/segments
pub async fn handle_segments(
    req: Result<Json<SegmentRequest>, JsonRejection>,
) -> Result<Json<SegmentResponse>, AppError> {
    let Json(req) = req.map_err(AppError::from)?;
    Ok(Json(SegmentResponse {
        segments: segment_value(&req.text),
    }))
}

#[derive(Debug, Deserialize)]
pub struct BulletsRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct BulletsResponse {
    pub bullets: Vec<Vec<Segment>>,
}

/// POST /api/v1/text/bullets
pub async fn handle_bullets(
    req: Result<Json<BulletsRequest>, JsonRejection>,
) -> Result<Json<BulletsResponse>, AppError> {
    let Json(req) = req.map_err(AppError::from)?;
    Ok(Json(BulletsResponse {
        bullets: bullet_segments(&req.description),
    }))
}
