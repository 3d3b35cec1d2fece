//! SVG serialization of a [`DiagramScene`].
//!
//! Layout units are inches, mapped at 96 px per inch; font sizes and line
//! widths are points (96/72 px each).

use std::fmt::Write;

use crate::scene::{Connector, DiagramScene, SceneItem, Shape, ShapeKind};

/// Pixels per layout unit.
pub const PX_PER_INCH: f64 = 96.0;
/// Pixels per typographic point.
const PX_PER_POINT: f64 = 96.0 / 72.0;
/// Corner radius of rounded rectangles, in inches.
const CORNER_RADIUS: f64 = 0.12;
/// Line height as a multiple of the font size.
const LINE_HEIGHT: f64 = 1.2;

/// Media type of the rendered document.
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

/// Render a scene as a standalone SVG document.
pub fn render(scene: &DiagramScene) -> String {
    let mut out = String::new();
    let w = px(scene.width);
    let h = px(scene.height);
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.2}" height="{h:.2}" viewBox="0 0 {w:.2} {h:.2}">"#
    );
    let _ = writeln!(out, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);

    for item in &scene.items {
        match item {
            SceneItem::Connector(c) => write_connector(&mut out, c),
            SceneItem::Shape(s) => write_shape(&mut out, s),
        }
    }

    out.push_str("</svg>\n");
    out
}

fn write_connector(out: &mut String, c: &Connector) {
    let _ = writeln!(
        out,
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.2}"/>"#,
        px(c.from.x),
        px(c.from.y),
        px(c.to.x),
        px(c.to.y),
        c.color.hex(),
        c.width * PX_PER_POINT,
    );
}

fn write_shape(out: &mut String, s: &Shape) {
    let cx = px(s.center.x);
    let cy = px(s.center.y);
    let w = px(s.width);
    let h = px(s.height);
    let fill = s.fill.hex();
    let stroke = s.stroke.hex();

    let _ = match s.kind {
        ShapeKind::Cloud => writeln!(
            out,
            r#"<ellipse cx="{cx:.2}" cy="{cy:.2}" rx="{:.2}" ry="{:.2}" fill="{fill}" stroke="{stroke}"/>"#,
            w / 2.0,
            h / 2.0,
        ),
        ShapeKind::RoundedRectangle | ShapeKind::Rectangle => {
            let rx = if s.kind == ShapeKind::RoundedRectangle { px(CORNER_RADIUS) } else { 0.0 };
            writeln!(
                out,
                r#"<rect x="{:.2}" y="{:.2}" width="{w:.2}" height="{h:.2}" rx="{rx:.2}" fill="{fill}" stroke="{stroke}"/>"#,
                cx - w / 2.0,
                cy - h / 2.0,
            )
        }
    };

    if s.text.is_empty() {
        return;
    }

    let font_px = s.font_size * PX_PER_POINT;
    let line_px = font_px * LINE_HEIGHT;
    let first_baseline = cy - line_px * (s.text.len() as f64 - 1.0) / 2.0 + font_px * 0.35;
    let family = s
        .font_family
        .map(|f| format!(r#" font-family="{}""#, escape(f)))
        .unwrap_or_default();

    let _ = write!(
        out,
        r#"<text text-anchor="middle" font-size="{font_px:.2}" fill="{}"{family}>"#,
        s.text_color.hex(),
    );
    for (i, line) in s.text.iter().enumerate() {
        let _ = write!(
            out,
            r#"<tspan x="{cx:.2}" y="{:.2}">{}</tspan>"#,
            first_baseline + line_px * i as f64,
            escape(line),
        );
    }
    out.push_str("</text>\n");
}

fn px(inches: f64) -> f64 {
    inches * PX_PER_INCH
}

/// Escape text for XML content and attribute values.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
