//! Flowing single-column body for resumes that overflow one page.

use docx_rs::{AlignmentType, Paragraph};

use crate::models::resume::ResumeView;
use crate::render::blocks::{indented, spaced, Styler};
use crate::richtext::segment;

/// Centered name and title, then summary, projects, skills, education and
/// certifications as plain paragraphs that break across pages freely.
pub fn build_body(styler: &Styler<'_>, view: &ResumeView) -> Vec<Paragraph> {
    let template = styler.template();
    let typography = styler.typography();

    let mut paragraphs = vec![spaced(indented(Paragraph::new(), 12.0), 0.0, 6.0)];

    let name = view.name.as_deref().unwrap_or_default();
    paragraphs.push(spaced(
        Paragraph::new()
            .add_run(styler.run(name, typography.name_pt, &template.palette.accent, true))
            .align(AlignmentType::Center),
        20.0,
        6.0,
    ));

    let title_segments = view.title.as_deref().map(segment).unwrap_or_default();
    if !title_segments.is_empty() {
        let title = styler
            .segment_runs(&title_segments, typography.title_pt, true)
            .into_iter()
            .fold(Paragraph::new(), Paragraph::add_run);
        paragraphs.push(spaced(title.align(AlignmentType::Center), 0.0, 20.0));
    }

    paragraphs.extend(styler.summary_section(view.summary.as_deref()));
    paragraphs.extend(styler.projects_section(&view.projects, "KEY RESPONSIBILITIES"));
    paragraphs.extend(styler.skills_section(&view.skills));
    paragraphs.extend(styler.education_section(&view.education));
    paragraphs.extend(styler.certifications_section(&view.certifications));
    paragraphs
}
