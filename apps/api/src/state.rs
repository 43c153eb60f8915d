use std::sync::Arc;

use crate::layout::{TemplateAssets, TemplateConfig};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable template description, built once at startup.
    pub template: Arc<TemplateConfig>,
    /// Decoded logos and watermark; missing images are `None`.
    pub assets: Arc<TemplateAssets>,
}
