// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal SVG canvas.

use std::fmt::{self, Write as _};

use kurbo::Join;
use peniko::Brush;
use spendpie_core::{Canvas, PathMark, TextAnchor, TextBaseline, TextMark, TextOnPathMark};

/// A [`Canvas`] that serializes draw calls into an SVG document.
#[derive(Clone, Debug, Default)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    defs: String,
    body: String,
    next_path_id: usize,
}

impl SvgCanvas {
    /// Creates a canvas for a view of `width` x `height`.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Number of elements drawn so far.
    pub fn element_count(&self) -> usize {
        self.body.lines().count()
    }

    /// Returns the complete SVG document.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = write!(
            out,
            r#"viewBox="0 0 {} {}" width="{}" height="{}">"#,
            self.width, self.height, self.width, self.height
        );
        out.push('\n');
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            out.push_str(&self.defs);
            out.push_str("</defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Canvas for SvgCanvas {
    fn draw_path(&mut self, mark: &PathMark) {
        let out = &mut self.body;
        let _ = write!(out, r#"<path d="{}""#, mark.path.to_svg());
        Paint::of(&mark.fill).write_attrs(out, "fill");
        if mark.stroke_width > 0.0 {
            Paint::of(&mark.stroke).write_attrs(out, "stroke");
            let _ = write!(
                out,
                r#" stroke-width="{}" stroke-linejoin="{}""#,
                mark.stroke_width,
                svg_join(mark.stroke_join)
            );
        }
        out.push_str("/>\n");
    }

    fn draw_text(&mut self, mark: &TextMark) {
        let out = &mut self.body;
        let baseline = match mark.baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
            TextBaseline::Hanging => "hanging",
        };
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}" text-anchor="{}""#,
            mark.pos.x,
            mark.pos.y,
            mark.font_size,
            baseline,
            svg_anchor(mark.anchor)
        );
        Paint::of(&mark.fill).write_attrs(out, "fill");
        let _ = writeln!(out, ">{}</text>", Escaped(&mark.text));
    }

    fn draw_text_on_path(&mut self, mark: &TextOnPathMark) {
        let id = format!("arc{}", self.next_path_id);
        self.next_path_id += 1;
        let _ = writeln!(self.defs, r#"<path id="{id}" d="{}"/>"#, mark.path.to_svg());

        let out = &mut self.body;
        let _ = write!(
            out,
            r#"<text font-size="{}" text-anchor="{}""#,
            mark.font_size,
            svg_anchor(mark.anchor)
        );
        Paint::of(&mark.fill).write_attrs(out, "fill");
        let _ = writeln!(
            out,
            r##"><textPath href="#{id}" startOffset="{}%">{}</textPath></text>"##,
            mark.start_offset * 100.0,
            Escaped(&mark.text)
        );
    }
}

fn svg_anchor(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn svg_join(join: Join) -> &'static str {
    match join {
        Join::Bevel => "bevel",
        Join::Miter => "miter",
        Join::Round => "round",
    }
}

/// A brush as SVG paint.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Paint {
    /// Gradients and images have no flat SVG equivalent here.
    None,
    Rgba([u8; 4]),
}

impl Paint {
    fn of(brush: &Brush) -> Self {
        match brush {
            Brush::Solid(color) => {
                let c = color.to_rgba8();
                Self::Rgba([c.r, c.g, c.b, c.a])
            }
            _ => Self::None,
        }
    }

    /// Writes ` {attr}="..."`, plus ` {attr}-opacity="..."` for translucent colors.
    fn write_attrs(self, out: &mut String, attr: &str) {
        match self {
            Self::None => {
                let _ = write!(out, r#" {attr}="none""#);
            }
            Self::Rgba([r, g, b, a]) => {
                let _ = write!(out, r##" {attr}="#{r:02x}{g:02x}{b:02x}""##);
                if a != u8::MAX {
                    let _ = write!(out, r#" {attr}-opacity="{}""#, f64::from(a) / 255.0);
                }
            }
        }
    }
}

/// Text escaped for XML character data and attribute values.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(at) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..at])?;
            f.write_str(match rest.as_bytes()[at] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&apos;",
            })?;
            rest = &rest[at + 1..];
        }
        f.write_str(rest)
    }
}
