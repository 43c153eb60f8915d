// Template description, template images and layout selection.
// Nothing here touches the document model; `render` consumes these.

pub mod assets;
pub mod estimate;
pub mod template;

// Re-export the public API consumed by the renderer and handlers.
pub use assets::{ImageAsset, TemplateAssets};
pub use estimate::{estimate_content_size, resolve_layout, LayoutChoice, LayoutMode};
pub use template::{default_template, TemplateConfig};
