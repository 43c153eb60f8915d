//! Template configuration: the fixed visual identity of the branded resume.
//!
//! Everything the renderer needs to know about colors, fonts, page geometry
//! and branding lives in one immutable [`TemplateConfig`] that is built once at
//! startup and shared read-only.
//!
//! Units: lengths are stored in inches or points as the template describes
//! them; the helpers at the bottom convert to the OOXML units `docx-rs` wants
//! (twips, EMUs, half-points).

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Configuration types
// ────────────────────────────────────────────────────────────────────────────

/// Hex colors (no leading `#`) used across the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Headings, bullet glyphs, the name, the page frame and the footer band.
    pub accent: String,
    pub body_text: String,
    /// Fallback label for the right-hand partner logo.
    pub muted_text: String,
    /// Background of the name/title panel.
    pub panel_fill: String,
    /// Vertical rule between the two columns.
    pub column_divider: String,
    pub footer_text: String,
}

/// Page size, margins and column geometry, in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width_in: f32,
    pub height_in: f32,
    pub margin_in: f32,
    pub header_distance_in: f32,
    pub footer_distance_in: f32,
    pub content_width_in: f32,
    pub left_column_in: f32,
    pub right_column_in: f32,
    /// Width of each of the three header cells.
    pub header_cell_in: f32,
    pub footer_width_in: f32,
    /// Page frame stroke, in eighths of a point.
    pub frame_size: usize,
}

/// Font sizes (points) and logo heights (inches) for one layout mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub name_pt: f32,
    pub title_pt: f32,
    pub heading_pt: f32,
    pub body_pt: f32,
    pub glyph_pt: f32,
    pub footer_pt: f32,
    pub left_logo_height_in: f32,
    pub right_logo_height_in: f32,
}

/// Caps applied to record content before layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentLimits {
    pub max_skills: usize,
    pub max_certifications: usize,
    /// Estimated content size above which `auto` layout switches to the flowing template.
    pub multi_page_threshold: usize,
}

/// Brand strings printed into the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branding {
    pub footer_text: String,
    pub left_logo_fallback: String,
    pub right_logo_fallback: String,
    pub bullet_glyph: String,
    /// Watermark opacity in 0.0..=1.0, baked into the image alpha at load time.
    pub watermark_opacity: f32,
}

/// The complete, immutable template description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub font_family: String,
    pub palette: Palette,
    pub page: PageGeometry,
    /// Sizes for the one-page two-column layout.
    pub compact: Typography,
    /// Sizes for the single-column multi-page layout.
    pub flowing: Typography,
    pub limits: ContentLimits,
    pub branding: Branding,
}

/// Returns the branded template: Montserrat on US letter with a coral accent.
pub fn default_template() -> TemplateConfig {
    TemplateConfig {
        font_family: "Montserrat".to_string(),
        palette: Palette {
            accent: "F25D5D".to_string(),
            body_text: "222222".to_string(),
            muted_text: "666666".to_string(),
            panel_fill: "F2F2F2".to_string(),
            column_divider: "CCCCCC".to_string(),
            footer_text: "FFFFFF".to_string(),
        },
        page: PageGeometry {
            width_in: 8.5,
            height_in: 11.0,
            margin_in: 0.2,
            header_distance_in: 0.15,
            footer_distance_in: 0.15,
            content_width_in: 8.1,
            left_column_in: 2.8,
            right_column_in: 5.3,
            header_cell_in: 2.7,
            footer_width_in: 8.0,
            frame_size: 6,
        },
        compact: Typography {
            name_pt: 17.0,
            title_pt: 13.0,
            heading_pt: 11.0,
            body_pt: 10.0,
            glyph_pt: 11.0,
            footer_pt: 10.0,
            left_logo_height_in: 0.35,
            right_logo_height_in: 0.45,
        },
        flowing: Typography {
            name_pt: 24.0,
            title_pt: 16.0,
            heading_pt: 13.0,
            body_pt: 12.0,
            glyph_pt: 13.0,
            footer_pt: 10.0,
            left_logo_height_in: 0.5,
            right_logo_height_in: 0.6,
        },
        limits: ContentLimits {
            max_skills: 18,
            max_certifications: 5,
            multi_page_threshold: 65,
        },
        branding: Branding {
            footer_text: "© www.shorthills.ai".to_string(),
            left_logo_fallback: "ShorthillsAI".to_string(),
            right_logo_fallback: "Microsoft Partner".to_string(),
            bullet_glyph: "▶ ".to_string(),
            watermark_opacity: 0.17,
        },
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        default_template()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Unit conversions
// ────────────────────────────────────────────────────────────────────────────

pub const TWIPS_PER_INCH: f32 = 1440.0;
pub const TWIPS_PER_POINT: f32 = 20.0;
pub const EMU_PER_INCH: f32 = 914_400.0;

pub fn inches_to_twips(inches: f32) -> i32 {
    (inches * TWIPS_PER_INCH).round() as i32
}

pub fn points_to_twips(points: f32) -> i32 {
    (points * TWIPS_PER_POINT).round() as i32
}

pub fn inches_to_emu(inches: f32) -> u32 {
    (inches * EMU_PER_INCH).round() as u32
}

/// Run sizes in OOXML are half-points.
pub fn points_to_half_points(points: f32) -> usize {
    (points * 2.0).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_fill_content_width() {
        let t = default_template();
        let sum = t.page.left_column_in + t.page.right_column_in;
        assert!((sum - t.page.content_width_in).abs() < 1e-4);
    }

    #[test]
    fn test_content_fits_between_margins() {
        let t = default_template();
        let usable = t.page.width_in - 2.0 * t.page.margin_in;
        assert!(t.page.content_width_in <= usable + 1e-4);
        assert!(3.0 * t.page.header_cell_in <= usable + 1e-4);
    }

    #[test]
    fn test_flowing_type_is_larger_than_compact() {
        let t = default_template();
        assert!(t.flowing.name_pt > t.compact.name_pt);
        assert!(t.flowing.body_pt > t.compact.body_pt);
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(inches_to_twips(8.5), 12240);
        assert_eq!(inches_to_twips(0.2), 288);
        assert_eq!(points_to_twips(12.0), 240);
        assert_eq!(inches_to_emu(1.0), 914_400);
        assert_eq!(points_to_half_points(10.0), 20);
        assert_eq!(points_to_half_points(17.0), 34);
    }

    #[test]
    fn test_default_limits() {
        let limits = default_template().limits;
        assert_eq!(limits.max_skills, 18);
        assert_eq!(limits.max_certifications, 5);
        assert_eq!(limits.multi_page_threshold, 65);
    }
}
