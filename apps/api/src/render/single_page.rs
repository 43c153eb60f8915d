//! One-page, two-column body.
//!
//! A single fixed-layout row: the left cell carries the shaded name/title panel
//! and the short lists, the right cell the summary and projects. The accent
//! frame is the table's outer border and the column divider is the left
//! cell's right border.

use docx_rs::{
    BorderType, Paragraph, Shading, ShdType, Table, TableBorder, TableBorderPosition, TableCell,
    TableCellBorder, TableCellBorderPosition, TableLayoutType, TableRow, WidthType,
};

use crate::layout::template::inches_to_twips;
use crate::models::resume::ResumeView;
use crate::render::blocks::{indented, spaced, Styler};
use crate::richtext::segment;

const PANEL_INDENT_PT: f32 = 8.0;
const DIVIDER_SIZE: usize = 8;

pub fn build_body(styler: &Styler<'_>, view: &ResumeView) -> Table {
    let template = styler.template();
    let page = &template.page;
    let left_twips = inches_to_twips(page.left_column_in) as usize;
    let right_twips = inches_to_twips(page.right_column_in) as usize;

    let left = left_column(styler, view, left_twips)
        .width(left_twips, WidthType::Dxa)
        .set_border(
            TableCellBorder::new(TableCellBorderPosition::Right)
                .border_type(BorderType::Single)
                .size(DIVIDER_SIZE)
                .color(template.palette.column_divider.as_str()),
        );
    let right = right_column(styler, view).width(right_twips, WidthType::Dxa);

    let frame = |position| {
        TableBorder::new(position)
            .border_type(BorderType::Single)
            .size(page.frame_size)
            .color(template.palette.accent.as_str())
    };

    Table::new(vec![TableRow::new(vec![left, right])])
        .set_grid(vec![left_twips, right_twips])
        .layout(TableLayoutType::Fixed)
        .width(left_twips + right_twips, WidthType::Dxa)
        .clear_all_border()
        .set_border(frame(TableBorderPosition::Top))
        .set_border(frame(TableBorderPosition::Left))
        .set_border(frame(TableBorderPosition::Bottom))
        .set_border(frame(TableBorderPosition::Right))
}

fn left_column(styler: &Styler<'_>, view: &ResumeView, width_twips: usize) -> TableCell {
    let padding = indented(Paragraph::new(), 12.0);
    let cell = TableCell::new()
        .add_paragraph(padding)
        .add_table(name_panel(styler, view, width_twips));

    styler
        .skills_section(&view.skills)
        .into_iter()
        .chain(styler.education_section(&view.education))
        .chain(styler.certifications_section(&view.certifications))
        // A cell may not end with a nested table.
        .chain(std::iter::once(Paragraph::new()))
        .fold(cell, TableCell::add_paragraph)
}

/// Two shaded rows: the name in accent, the title in bold body text.
fn name_panel(styler: &Styler<'_>, view: &ResumeView, width_twips: usize) -> Table {
    let template = styler.template();
    let typography = styler.typography();

    let name = view.name.as_deref().unwrap_or_default();
    let name_paragraph = Paragraph::new().add_run(styler.run(
        name,
        typography.name_pt,
        &template.palette.accent,
        true,
    ));

    let title_runs = view
        .title
        .as_deref()
        .map(|t| styler.segment_runs(&segment(t), typography.title_pt, true))
        .unwrap_or_default();
    let title_paragraph = title_runs.into_iter().fold(Paragraph::new(), Paragraph::add_run);

    let shaded = |paragraph: Paragraph, after_pt: f32| {
        TableRow::new(vec![TableCell::new()
            .add_paragraph(spaced(indented(paragraph, PANEL_INDENT_PT), 0.0, after_pt))
            .width(width_twips, WidthType::Dxa)
            .shading(
                Shading::new()
                    .shd_type(ShdType::Clear)
                    .color("auto")
                    .fill(template.palette.panel_fill.as_str()),
            )])
    };

    Table::new(vec![shaded(name_paragraph, 2.0), shaded(title_paragraph, 10.0)])
        .set_grid(vec![width_twips])
        .layout(TableLayoutType::Fixed)
        .width(width_twips, WidthType::Dxa)
        .clear_all_border()
}

fn right_column(styler: &Styler<'_>, view: &ResumeView) -> TableCell {
    let padding = indented(Paragraph::new(), 12.0);
    std::iter::once(padding)
        .chain(styler.summary_section(view.summary.as_deref()))
        .chain(styler.projects_section(&view.projects, "KEY RESPONSIBILITIES:"))
        .fold(TableCell::new(), TableCell::add_paragraph)
}
