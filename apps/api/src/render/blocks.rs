//! Paragraph and run builders shared by both page layouts.
//!
//! A [`Styler`] binds the template to one layout mode so section builders can
//! ask for "a heading" or "a bullet item" without repeating font, size and
//! color plumbing. Section builders return plain `Vec<Paragraph>`; the caller
//! decides whether they land in a table cell or the document body.

use docx_rs::{BreakType, LineSpacing, Paragraph, Run, RunFonts};

use crate::layout::template::{points_to_half_points, points_to_twips, TemplateConfig, Typography};
use crate::layout::LayoutMode;
use crate::models::resume::{CertificationEntry, EducationEntry, ProjectEntry};
use crate::richtext::bullets::bullet_segments;
use crate::richtext::{segment, Segment};

/// Indents and gaps (points) that differ between the two layouts.
#[derive(Debug, Clone, Copy)]
struct Spacing {
    heading_indent: f32,
    item_indent: f32,
    heading_before: f32,
    heading_after: f32,
    item_after: f32,
    project_before: f32,
}

const COMPACT_SPACING: Spacing = Spacing {
    heading_indent: 12.0,
    item_indent: 28.0,
    heading_before: 10.0,
    heading_after: 2.0,
    item_after: 3.0,
    project_before: 6.0,
};

const FLOWING_SPACING: Spacing = Spacing {
    heading_indent: 12.0,
    item_indent: 34.0,
    heading_before: 18.0,
    heading_after: 4.0,
    item_after: 6.0,
    project_before: 10.0,
};

pub struct Styler<'a> {
    template: &'a TemplateConfig,
    typography: &'a Typography,
    spacing: Spacing,
}

impl<'a> Styler<'a> {
    pub fn new(template: &'a TemplateConfig, mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::Compact => Styler {
                template,
                typography: &template.compact,
                spacing: COMPACT_SPACING,
            },
            LayoutMode::Flowing => Styler {
                template,
                typography: &template.flowing,
                spacing: FLOWING_SPACING,
            },
        }
    }

    pub fn template(&self) -> &TemplateConfig {
        self.template
    }

    pub fn typography(&self) -> &Typography {
        self.typography
    }

    // ── Runs ────────────────────────────────────────────────────────────────

    fn fonts(&self) -> RunFonts {
        let family = self.template.font_family.as_str();
        RunFonts::new()
            .ascii(family)
            .hi_ansi(family)
            .east_asia(family)
            .cs(family)
    }

    /// One run in the template font.
    pub fn run(&self, text: &str, size_pt: f32, color: &str, bold: bool) -> Run {
        let run = Run::new()
            .add_text(text)
            .fonts(self.fonts())
            .size(points_to_half_points(size_pt))
            .color(color);
        if bold {
            run.bold()
        } else {
            run
        }
    }

    /// Body-sized runs for `segments`; `force_bold` overrides the segment flag.
    pub fn body_runs(&self, segments: &[Segment], force_bold: bool) -> Vec<Run> {
        self.segment_runs(segments, self.typography.body_pt, force_bold)
    }

    pub fn segment_runs(&self, segments: &[Segment], size_pt: f32, force_bold: bool) -> Vec<Run> {
        let color = self.template.palette.body_text.as_str();
        segments
            .iter()
            .map(|s| self.run(&s.text, size_pt, color, force_bold || s.bold))
            .collect()
    }

    fn glyph_run(&self) -> Run {
        self.run(
            &self.template.branding.bullet_glyph,
            self.typography.glyph_pt,
            &self.template.palette.accent,
            true,
        )
    }

    // ── Paragraphs ──────────────────────────────────────────────────────────

    /// Accent, bold, heading-sized section label.
    pub fn heading(&self, label: &str) -> Paragraph {
        let run = self.run(
            label,
            self.typography.heading_pt,
            &self.template.palette.accent,
            true,
        );
        spaced(
            indented(Paragraph::new().add_run(run), self.spacing.heading_indent),
            self.spacing.heading_before,
            self.spacing.heading_after,
        )
    }

    /// Body paragraph at heading indent, e.g. the summary text.
    pub fn text_block(&self, segments: &[Segment]) -> Paragraph {
        let paragraph = self
            .body_runs(segments, false)
            .into_iter()
            .fold(Paragraph::new(), Paragraph::add_run);
        spaced(
            indented(paragraph, self.spacing.heading_indent),
            0.0,
            self.spacing.item_after + 2.0,
        )
    }

    /// A glyph-led item whose lines are separated by soft breaks.
    /// Returns `None` when no line carries any run.
    pub fn glyph_item(&self, lines: Vec<Vec<Run>>) -> Option<Paragraph> {
        let mut lines = lines.into_iter().filter(|line| !line.is_empty()).peekable();
        lines.peek()?;

        let mut paragraph = Paragraph::new().add_run(self.glyph_run());
        let mut first = true;
        for line in lines {
            if !first {
                paragraph = paragraph.add_run(Run::new().add_break(BreakType::TextWrapping));
            }
            first = false;
            paragraph = line.into_iter().fold(paragraph, Paragraph::add_run);
        }
        Some(spaced(
            indented(paragraph, self.spacing.item_indent),
            0.0,
            self.spacing.item_after,
        ))
    }

    // ── Sections ────────────────────────────────────────────────────────────

    pub fn summary_section(&self, summary: Option<&str>) -> Vec<Paragraph> {
        let segments = summary.map(segment).unwrap_or_default();
        if segments.is_empty() {
            return Vec::new();
        }
        vec![self.heading("SUMMARY"), self.text_block(&segments)]
    }

    pub fn skills_section(&self, skills: &[String]) -> Vec<Paragraph> {
        let items: Vec<Paragraph> = skills
            .iter()
            .filter_map(|skill| self.glyph_item(vec![self.body_runs(&segment(skill), false)]))
            .collect();
        with_heading(self.heading("SKILLS"), items)
    }

    pub fn education_section(&self, education: &[EducationEntry]) -> Vec<Paragraph> {
        let items: Vec<Paragraph> = education
            .iter()
            .filter_map(|entry| self.glyph_item(self.education_lines(entry)))
            .collect();
        with_heading(self.heading("EDUCATION"), items)
    }

    /// Degree (bold per segment), then institution forced bold on its own line.
    fn education_lines(&self, entry: &EducationEntry) -> Vec<Vec<Run>> {
        match entry {
            EducationEntry::Structured {
                degree,
                institution,
            } => vec![
                self.optional_runs(degree.as_deref(), false),
                self.optional_runs(institution.as_deref(), true),
            ],
            EducationEntry::Plain(text) => vec![self.body_runs(&segment(text), false)],
        }
    }

    pub fn certifications_section(&self, certifications: &[CertificationEntry]) -> Vec<Paragraph> {
        let items: Vec<Paragraph> = certifications
            .iter()
            .filter_map(|entry| self.glyph_item(self.certification_lines(entry)))
            .collect();
        with_heading(self.heading("CERTIFICATIONS"), items)
    }

    /// Title first. The issuer (forced bold) goes on a new line after a title,
    /// or becomes the main text without one. The year is appended on its own
    /// line only when something was written before it.
    fn certification_lines(&self, entry: &CertificationEntry) -> Vec<Vec<Run>> {
        match entry {
            CertificationEntry::Structured {
                title,
                issuer,
                year,
            } => {
                let mut lines = Vec::new();
                let title_runs = self.optional_runs(title.as_deref(), false);
                if !title_runs.is_empty() {
                    lines.push(title_runs);
                }
                let issuer_runs = self.optional_runs(issuer.as_deref(), true);
                if !issuer_runs.is_empty() {
                    lines.push(issuer_runs);
                }
                if let Some(year) = year.as_deref().filter(|y| !y.trim().is_empty()) {
                    if !lines.is_empty() {
                        let color = self.template.palette.body_text.as_str();
                        lines.push(vec![self.run(year, self.typography.body_pt, color, false)]);
                    }
                }
                lines
            }
            CertificationEntry::Plain(text) => vec![self.body_runs(&segment(text), false)],
        }
    }

    /// `label` heading, then per project an optional `Project N: title` line
    /// and one glyph item per description bullet.
    pub fn projects_section(&self, projects: &[ProjectEntry], label: &str) -> Vec<Paragraph> {
        if projects.is_empty() {
            return Vec::new();
        }
        let mut paragraphs = vec![self.heading(label)];
        for (idx, project) in projects.iter().enumerate() {
            if let Some(title) = self.project_title(idx + 1, project.title.as_deref()) {
                paragraphs.push(title);
            }
            for description in &project.description {
                paragraphs.extend(
                    bullet_segments(description)
                        .iter()
                        .filter_map(|bullet| self.glyph_item(vec![self.body_runs(bullet, false)])),
                );
            }
        }
        paragraphs
    }

    fn project_title(&self, number: usize, title: Option<&str>) -> Option<Paragraph> {
        let segments = segment(title?);
        if segments.is_empty() {
            return None;
        }
        let accent = self.template.palette.accent.as_str();
        let size = self.typography.heading_pt;
        let paragraph = segments.iter().fold(
            Paragraph::new().add_run(self.run(&format!("Project {number}: "), size, accent, true)),
            |p, s| p.add_run(self.run(&s.text, size, accent, true)),
        );
        Some(spaced(
            indented(paragraph, self.spacing.heading_indent),
            self.spacing.project_before,
            self.spacing.heading_after,
        ))
    }

    fn optional_runs(&self, text: Option<&str>, force_bold: bool) -> Vec<Run> {
        text.map(|t| self.body_runs(&segment(t), force_bold))
            .unwrap_or_default()
    }
}

fn with_heading(heading: Paragraph, items: Vec<Paragraph>) -> Vec<Paragraph> {
    if items.is_empty() {
        return items;
    }
    std::iter::once(heading).chain(items).collect()
}

/// Space before/after in points.
pub fn spaced(paragraph: Paragraph, before_pt: f32, after_pt: f32) -> Paragraph {
    paragraph.line_spacing(
        LineSpacing::new()
            .before(points_to_twips(before_pt) as u32)
            .after(points_to_twips(after_pt) as u32),
    )
}

/// Left indent in points.
pub fn indented(paragraph: Paragraph, left_pt: f32) -> Paragraph {
    paragraph.indent(Some(points_to_twips(left_pt)), None, None, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::template::default_template;

    fn run_count(lines: &[Vec<Run>]) -> Vec<usize> {
        lines.iter().map(Vec::len).collect()
    }

    #[test]
    fn test_certification_issuer_without_title_is_main_text() {
        let template = default_template();
        let styler = Styler::new(&template, LayoutMode::Compact);
        let lines = styler.certification_lines(&CertificationEntry::Structured {
            title: None,
            issuer: Some("AWS".into()),
            year: Some("2022".into()),
        });
        assert_eq!(run_count(&lines), vec![1, 1]);
    }

    #[test]
    fn test_certification_year_alone_is_not_written() {
        let template = default_template();
        let styler = Styler::new(&template, LayoutMode::Compact);
        let lines = styler.certification_lines(&CertificationEntry::Structured {
            title: None,
            issuer: None,
            year: Some("2022".into()),
        });
        assert!(lines.is_empty());
        assert!(styler.glyph_item(lines).is_none());
    }

    #[test]
    fn test_certification_full_entry_has_three_lines() {
        let template = default_template();
        let styler = Styler::new(&template, LayoutMode::Compact);
        let lines = styler.certification_lines(&CertificationEntry::Structured {
            title: Some("Solutions <strong>Architect</strong>".into()),
            issuer: Some("AWS".into()),
            year: Some("2022".into()),
        });
        assert_eq!(run_count(&lines), vec![2, 1, 1]);
    }

    #[test]
    fn test_empty_sections_have_no_heading() {
        let template = default_template();
        let styler = Styler::new(&template, LayoutMode::Flowing);
        assert!(styler.skills_section(&[]).is_empty());
        assert!(styler.skills_section(&["<p> </p>".to_string()]).is_empty());
        assert!(styler.summary_section(None).is_empty());
        assert!(styler.projects_section(&[], "KEY RESPONSIBILITIES").is_empty());
    }

    #[test]
    fn test_projects_section_counts_paragraphs() {
        let template = default_template();
        let styler = Styler::new(&template, LayoutMode::Compact);
        let projects = vec![
            ProjectEntry {
                title: Some("Lake".into()),
                description: vec!["Built it. Ran it.".into()],
            },
            ProjectEntry {
                title: None,
                description: vec!["Only bullet".into()],
            },
        ];
        // heading + title + 2 bullets + 1 bullet
        assert_eq!(styler.projects_section(&projects, "KEY RESPONSIBILITIES:").len(), 5);
    }
}
