use color_eyre::eyre::{eyre, Result};
use printpdf::{
    path::PaintMode, BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument,
    PdfLayerReference, Pt, Rect, Rgb,
};

use crate::domain::{CardRenderer, Member};

// A4 in PostScript points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;

const TITLE: &str = "SOCIAL CARE MEMBERSHIP";
const TAGLINE: &str = "Together We Serve Humanity";
const DETAILS_HEADING: &str = "MEMBER DETAILS";
const MISSION_HEADING: &str = "OUR MISSION";
const MISSION_LINES: [&str; 3] = [
    "- Education for underprivileged children",
    "- Care & support for handicapped individuals",
    "- Empowering poor families & communities",
];
const FOOTER_LINE: &str = "Thank you for being a part of social change";

const BACKGROUND: (f32, f32, f32) = (0.95, 0.97, 1.0);
const BANNER: (f32, f32, f32) = (0.1, 0.4, 0.8);
const DETAILS_PANEL: (f32, f32, f32) = (1.0, 1.0, 1.0);
const MISSION_PANEL: (f32, f32, f32) = (0.9, 0.95, 0.9);
const MISSION_INK: (f32, f32, f32) = (0.1, 0.5, 0.1);
const WHITE: (f32, f32, f32) = (1.0, 1.0, 1.0);
const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);

/// Draws the membership card onto a single A4 page. Every coordinate,
/// colour and font is a constant; the member fields are the only variable
/// content, so identical input yields an identical page.
pub struct PdfCardRenderer;

impl CardRenderer for PdfCardRenderer {
    #[tracing::instrument(name = "Rendering membership card", skip_all)]
    fn render(&self, member: &Member) -> Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            "Membership Card",
            pt(PAGE_WIDTH),
            pt(PAGE_HEIGHT),
            "card",
        );
        let layer = doc.get_page(page).get_layer(layer);

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| eyre!(e))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| eyre!(e))?;
        let oblique = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| eyre!(e))?;

        fill_rect(&layer, BACKGROUND, 0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT);

        // Header banner
        fill_rect(&layer, BANNER, 0.0, 760.0, PAGE_WIDTH, 82.0);
        text(&layer, &bold, WHITE, 26.0, 126.0, 795.0, TITLE);
        text(&layer, &regular, WHITE, 14.0, 208.0, 770.0, TAGLINE);

        // Card border
        stroke_rect(&layer, BANNER, 3.0, 40.0, 120.0, 515.0, 620.0);

        // Member details
        fill_rect(&layer, DETAILS_PANEL, 80.0, 500.0, 435.0, 200.0);
        text(&layer, &bold, BLACK, 16.0, 100.0, 670.0, DETAILS_HEADING);
        let details = [
            format!("Member ID: {}", member.id.as_ref()),
            format!("Name: {}", member.name),
            format!("Email: {}", member.email),
            format!("Phone: {}", member.phone),
        ];
        for (i, line) in details.iter().enumerate() {
            let y = 630.0 - 30.0 * i as f32;
            text(&layer, &regular, BLACK, 14.0, 100.0, y, line);
        }

        // Mission statement
        fill_rect(&layer, MISSION_PANEL, 80.0, 320.0, 435.0, 140.0);
        text(&layer, &bold, MISSION_INK, 16.0, 100.0, 430.0, MISSION_HEADING);
        for (i, line) in MISSION_LINES.iter().enumerate() {
            let y = 400.0 - 25.0 * i as f32;
            text(&layer, &regular, BLACK, 13.0, 100.0, y, line);
        }

        // Footer banner
        fill_rect(&layer, BANNER, 0.0, 0.0, PAGE_WIDTH, 80.0);
        text(&layer, &oblique, WHITE, 12.0, 170.0, 45.0, FOOTER_LINE);

        doc.save_to_bytes().map_err(|e| eyre!(e))
    }
}

fn pt(value: f32) -> Mm {
    Mm::from(Pt(value))
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn fill_rect(
    layer: &PdfLayerReference,
    color: (f32, f32, f32),
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) {
    layer.set_fill_color(rgb(color));
    layer.add_rect(
        Rect::new(pt(x), pt(y), pt(x + width), pt(y + height))
            .with_mode(PaintMode::Fill),
    );
}

fn stroke_rect(
    layer: &PdfLayerReference,
    color: (f32, f32, f32),
    thickness: f32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(thickness);
    layer.add_rect(
        Rect::new(pt(x), pt(y), pt(x + width), pt(y + height))
            .with_mode(PaintMode::Stroke),
    );
}

fn text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    color: (f32, f32, f32),
    size: f32,
    x: f32,
    y: f32,
    content: &str,
) {
    layer.set_fill_color(rgb(color));
    layer.use_text(content, size, pt(x), pt(y), font);
}
