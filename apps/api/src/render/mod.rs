//! DOCX rendering of a resume record in the branded template.
//!
//! `render_resume` is synchronous and CPU-bound; handlers call it from
//! `tokio::task::spawn_blocking`. The record is cleaned first, so callers may
//! pass raw client JSON.

pub mod blocks;
pub mod chrome;
pub mod handlers;
pub mod multi_page;
pub mod single_page;

use std::io::Cursor;

use docx_rs::{Docx, PageMargin};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::layout::template::inches_to_twips;
use crate::layout::{estimate_content_size, resolve_layout, LayoutChoice, LayoutMode};
use crate::layout::{TemplateAssets, TemplateConfig};
use crate::models::resume::ResumeView;
use crate::render::blocks::Styler;
use crate::sanitize::clean;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("resume record must be a JSON object")]
    InvalidRecord,

    #[error("failed to package document: {0}")]
    Pack(String),
}

/// A packed `.docx` archive and the name to offer it under.
#[derive(Debug, Clone)]
pub struct RenderedDocx {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mode: LayoutMode,
}

pub fn render_resume(
    record: &Value,
    template: &TemplateConfig,
    assets: &TemplateAssets,
    choice: LayoutChoice,
) -> Result<RenderedDocx, RenderError> {
    let Some(Value::Object(cleaned)) = clean(record) else {
        return Err(RenderError::InvalidRecord);
    };

    let view = ResumeView::from_record(&cleaned, &template.limits);
    let mode = resolve_layout(choice, &view, &template.limits);
    debug!(
        "Rendering resume: layout={choice:?} mode={mode:?} size={}",
        estimate_content_size(&view)
    );

    let styler = Styler::new(template, mode);
    let docx = page_setup(template)
        .header(chrome::build_header(&styler, assets))
        .footer(chrome::build_footer(&styler));

    let docx = match mode {
        LayoutMode::Compact => docx.add_table(single_page::build_body(&styler, &view)),
        LayoutMode::Flowing => multi_page::build_body(&styler, &view)
            .into_iter()
            .fold(docx, Docx::add_paragraph),
    };

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| RenderError::Pack(e.to_string()))?;

    Ok(RenderedDocx {
        bytes: buf.into_inner(),
        file_name: format!("{}.docx", view.file_stem()),
        mode,
    })
}

fn page_setup(template: &TemplateConfig) -> Docx {
    let page = &template.page;
    let margin = inches_to_twips(page.margin_in);
    Docx::new()
        .page_size(
            inches_to_twips(page.width_in) as u32,
            inches_to_twips(page.height_in) as u32,
        )
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin)
                .header(inches_to_twips(page.header_distance_in))
                .footer(inches_to_twips(page.footer_distance_in)),
        )
}
