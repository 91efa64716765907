use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use tessera_engine::coords::{Matrix, Point, Viewport};
use tessera_engine::paint::{BrushStyle, DrawStyle, PenStyle};
use tessera_engine::render::{DrawCmd, DrawList};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Fill opacity standing in for a hatch pattern.
const HATCH_OPACITY: f32 = 0.4;

/// Renders a recorded frame as a standalone SVG document.
///
/// The list is expected to be recorded in device space, i.e. with the
/// viewport's scene-to-device transform as its base.
pub fn render(list: &DrawList, viewport: Viewport) -> String {
    let (w, h) = (viewport.width, viewport.height);
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(out, r#"  <rect width="100%" height="100%" fill="white"/>"#);

    for cmd in list.iter() {
        let paint = paint_attrs(cmd.style());
        let _ = match cmd {
            DrawCmd::Polygon(poly) => {
                let points = points_attr(&poly.points);
                writeln!(out, r#"  <polygon points="{points}" {paint}/>"#)
            }
            DrawCmd::Line(line) => writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {paint}/>"#,
                line.from.x,
                line.from.y,
                line.to.x,
                line.to.y,
            ),
            DrawCmd::Ellipse(ellipse) => {
                let center = ellipse.bounds.center();
                let radii = ellipse.bounds.radii();
                writeln!(
                    out,
                    r#"  <ellipse cx="{}" cy="{}" rx="{}" ry="{}" {} {paint}/>"#,
                    center.x,
                    center.y,
                    radii.x,
                    radii.y,
                    transform_attrs(&ellipse.transform),
                )
            }
        };
    }

    out.push_str("</svg>\n");
    out
}

/// Writes [`render`] output to `path`.
pub fn write(list: &DrawList, viewport: Viewport, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, render(list, viewport))
        .with_context(|| format!("failed to write SVG to {}", path.display()))?;
    log::info!("wrote {} draw commands to {}", list.len(), path.display());
    Ok(())
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The ellipse keeps its full affine mapping; strokes stay at pen width.
fn transform_attrs(m: &Matrix) -> String {
    let [a, b, c, d, e, f] = m.to_array();
    format!(r#"transform="matrix({a} {b} {c} {d} {e} {f})" vector-effect="non-scaling-stroke""#)
}

fn paint_attrs(style: &DrawStyle) -> String {
    let color = style.brush.color;
    let mut attrs = match style.brush.style {
        BrushStyle::Hollow => r#"fill="none""#.to_string(),
        BrushStyle::Solid => format!(r#"fill="{color}""#),
        BrushStyle::Hatched(_) => {
            format!(r#"fill="{color}" fill-opacity="{HATCH_OPACITY}""#)
        }
    };

    if !style.strokes() {
        attrs.push_str(r#" stroke="none""#);
        return attrs;
    }

    let w = style.pen.width;
    let _ = write!(attrs, r#" stroke="{}" stroke-width="{w}""#, style.pen.color);
    let _ = match style.pen.style {
        PenStyle::Dash => write!(attrs, r#" stroke-dasharray="{} {}""#, w * 3.0, w * 2.0),
        PenStyle::Dot => write!(attrs, r#" stroke-dasharray="{w} {w}""#),
        PenStyle::DashDot => write!(attrs, r#" stroke-dasharray="{} {w} {w} {w}""#, w * 3.0),
        PenStyle::Solid | PenStyle::Null => Ok(()),
    };
    attrs
}
