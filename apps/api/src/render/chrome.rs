//! Page chrome: the logo header, the background watermark and the footer band.

use docx_rs::{
    AlignmentType, Footer, Header, Paragraph, Pic, RelativeFromHType, RelativeFromVType, Run,
    Shading, ShdType, Table, TableCell, TableLayoutType, TableRow, WidthType,
};

use crate::layout::{ImageAsset, TemplateAssets};
use crate::layout::template::{inches_to_emu, inches_to_twips, points_to_twips};
use crate::render::blocks::{indented, spaced, Styler};

const LOGO_INSET_PT: f32 = 12.0;
const FALLBACK_LABEL_PT: f32 = 10.0;

/// Three equal borderless cells: left logo, spacer, right logo. The watermark,
/// when present, is anchored to the header's last paragraph so it repeats on
/// every page.
pub fn build_header(styler: &Styler<'_>, assets: &TemplateAssets) -> Header {
    let template = styler.template();
    let typography = styler.typography();
    let cell_twips = inches_to_twips(template.page.header_cell_in) as usize;

    let left = match &assets.left_logo {
        Some(logo) => logo_run(logo, typography.left_logo_height_in),
        None => styler.run(
            &template.branding.left_logo_fallback,
            FALLBACK_LABEL_PT,
            &template.palette.accent,
            true,
        ),
    };
    let right = match &assets.right_logo {
        Some(logo) => logo_run(logo, typography.right_logo_height_in),
        None => styler.run(
            &template.branding.right_logo_fallback,
            FALLBACK_LABEL_PT,
            &template.palette.muted_text,
            false,
        ),
    };

    let left_paragraph = spaced(
        indented(Paragraph::new().add_run(left), LOGO_INSET_PT),
        2.0,
        0.0,
    )
    .align(AlignmentType::Left);
    let right_paragraph = spaced(
        Paragraph::new()
            .add_run(right)
            .align(AlignmentType::Right)
            .indent(None, None, Some(points_to_twips(LOGO_INSET_PT)), None),
        2.0,
        0.0,
    );

    let row = TableRow::new(vec![
        TableCell::new()
            .add_paragraph(left_paragraph)
            .width(cell_twips, WidthType::Dxa),
        TableCell::new()
            .add_paragraph(Paragraph::new())
            .width(cell_twips, WidthType::Dxa),
        TableCell::new()
            .add_paragraph(right_paragraph)
            .width(cell_twips, WidthType::Dxa),
    ]);
    let table = Table::new(vec![row])
        .set_grid(vec![cell_twips; 3])
        .layout(TableLayoutType::Fixed)
        .width(cell_twips * 3, WidthType::Dxa)
        .clear_all_border();

    let header = Header::new().add_table(table);
    match &assets.background {
        Some(background) => header.add_paragraph(watermark_paragraph(styler, background)),
        None => header,
    }
}

fn logo_run(logo: &ImageAsset, height_in: f32) -> Run {
    let height = inches_to_emu(height_in);
    Run::new().add_image(picture(logo).size(logo.width_for_height(height), height))
}

fn picture(asset: &ImageAsset) -> Pic {
    Pic::new_with_dimensions(asset.png_data.clone(), asset.width_px, asset.height_px)
}

/// A floating picture covering the whole page, anchored at the page origin
/// with no text wrapping and the lowest z-order.
fn watermark_paragraph(styler: &Styler<'_>, background: &ImageAsset) -> Paragraph {
    let page = &styler.template().page;
    let pic = picture(background)
        .size(inches_to_emu(page.width_in), inches_to_emu(page.height_in))
        .floating()
        .overlapping()
        .relative_from_h(RelativeFromHType::Page)
        .relative_from_v(RelativeFromVType::Page)
        .offset_x(0)
        .offset_y(0)
        .relative_height(0);
    spaced(
        Paragraph::new()
            .add_run(Run::new().add_image(pic))
            .align(AlignmentType::Center),
        0.0,
        0.0,
    )
}

/// Full-width accent band with the centered footer text.
pub fn build_footer(styler: &Styler<'_>) -> Footer {
    let template = styler.template();
    let width = inches_to_twips(template.page.footer_width_in) as usize;

    let text = styler.run(
        &template.branding.footer_text,
        styler.typography().footer_pt,
        &template.palette.footer_text,
        false,
    );
    let paragraph = spaced(
        Paragraph::new().add_run(text).align(AlignmentType::Center),
        6.0,
        6.0,
    );
    let cell = TableCell::new()
        .add_paragraph(paragraph)
        .width(width, WidthType::Dxa)
        .shading(
            Shading::new()
                .shd_type(ShdType::Clear)
                .color("auto")
                .fill(template.palette.accent.as_str()),
        );

    Footer::new().add_table(
        Table::new(vec![TableRow::new(vec![cell])])
            .set_grid(vec![width])
            .layout(TableLayoutType::Fixed)
            .width(width, WidthType::Dxa)
            .clear_all_border(),
    )
}
