//! Content-size estimate and layout selection.
//!
//! The compact template is a single page with a fixed two-column table; long
//! resumes overflow it. The estimate is a coarse unit count, not a measurement:
//! a skill line is ~2 units, an education entry ~4, a certification ~3, and a
//! project is 5 for its title plus 2 per description line.

use serde::{Deserialize, Serialize};

use crate::layout::template::ContentLimits;
use crate::models::resume::ResumeView;

/// Layout requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutChoice {
    /// Always the one-page two-column template.
    #[default]
    Single,
    /// Always the flowing single-column template.
    Multi,
    /// Flowing when the estimate exceeds the template threshold.
    Auto,
}

/// Layout actually rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Compact,
    Flowing,
}

const SKILL_UNITS: usize = 2;
const EDUCATION_UNITS: usize = 4;
const CERTIFICATION_UNITS: usize = 3;
const PROJECT_TITLE_UNITS: usize = 5;
const PROJECT_LINE_UNITS: usize = 2;

/// Estimates how much vertical space the view's content needs.
pub fn estimate_content_size(view: &ResumeView) -> usize {
    let projects: usize = view
        .projects
        .iter()
        .map(|project| {
            let lines: usize = project
                .description
                .iter()
                .map(|d| d.split('\n').filter(|line| !line.trim().is_empty()).count())
                .sum();
            PROJECT_TITLE_UNITS + PROJECT_LINE_UNITS * lines
        })
        .sum();

    SKILL_UNITS * view.skills.len()
        + EDUCATION_UNITS * view.education.len()
        + CERTIFICATION_UNITS * view.certifications.len()
        + projects
}

/// Resolves the caller's choice into the mode to render.
pub fn resolve_layout(choice: LayoutChoice, view: &ResumeView, limits: &ContentLimits) -> LayoutMode {
    match choice {
        LayoutChoice::Single => LayoutMode::Compact,
        LayoutChoice::Multi => LayoutMode::Flowing,
        LayoutChoice::Auto => {
            if estimate_content_size(view) > limits.multi_page_threshold {
                LayoutMode::Flowing
            } else {
                LayoutMode::Compact
            }
        }
    }
}
