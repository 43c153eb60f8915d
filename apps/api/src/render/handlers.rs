use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::layout::LayoutChoice;
use crate::render::render_resume;
use crate::state::AppState;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

// RFC 5987 attr-char: everything else in `filename*` is percent-encoded.
const FILENAME_ATTR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

const FALLBACK_FILE_NAME: &str = "resume.docx";

#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    #[serde(default)]
    pub layout: LayoutChoice,
}

/// POST /api/v1/resumes/docx?layout=single|multi|auto
pub async fn handle_render_docx(
    State(state): State<AppState>,
    query: Result<Query<RenderQuery>, QueryRejection>,
    record: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(AppError::from)?;
    let Json(record) = record.map_err(AppError::from)?;
    let template = state.template.clone();
    let assets = state.assets.clone();

    // CPU-bound document assembly, off the async executor.
    let rendered = tokio::task::spawn_blocking(move || {
        render_resume(&record, &template, &assets, query.layout)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))??;

    info!(
        "Rendered {} ({:?}, {} bytes)",
        rendered.file_name,
        rendered.mode,
        rendered.bytes.len()
    );

    let disposition = content_disposition(&rendered.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        rendered.bytes,
    )
        .into_response())
}

/// `attachment` disposition with an ASCII `filename` and, for names outside
/// ASCII, an RFC 6266 `filename*` carrying the UTF-8 name.
pub fn content_disposition(file_name: &str) -> String {
    if file_name.is_ascii() {
        return format!("attachment; filename=\"{file_name}\"");
    }

    let ascii: String = file_name.chars().filter(char::is_ascii).collect();
    let ascii_stem = ascii.strip_suffix(".docx").unwrap_or(&ascii);
    let fallback = if ascii_stem.trim_matches(|c| c == '_' || c == '.').is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        ascii
    };

    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        utf8_percent_encode(file_name, FILENAME_ATTR)
    )
}
