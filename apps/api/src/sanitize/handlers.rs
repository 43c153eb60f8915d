use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::sanitize::clean;
use crate::sanitize::ocr::preprocess_content;

/// POST /api/v1/resumes/clean
/// Returns the cleaned record, or `null` when nothing survives.
pub async fn handle_clean(
    record: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(record) = record.map_err(AppError::from)?;
    Ok(Json(clean(&record).unwrap_or(Value::Null)))
}

#[derive(Debug, Deserialize)]
pub struct PreprocessRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct PreprocessResponse {
    pub content: String,
}

/// POST /api/v1/text/preprocess
pub async fn handle_preprocess(
    req: Result<Json<PreprocessRequest>, JsonRejection>,
) -> Result<Json<PreprocessResponse>, AppError> {
    let Json(req) = req.map_err(AppError::from)?;
    Ok(Json(PreprocessResponse {
        content: preprocess_content(&req.content),
    }))
}
