use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::export::errors::ExportError;
use crate::controllers::export::format::ExportFormat;
use crate::controllers::export::size::ExportSize;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::drawable_path::{DrawablePath, PathCommand};
use crate::core::data::scene::{Paint, Scene};

const TITLE: &str = "Cantor Set";
const DESCRIPTION: &str = "Generated by Cantor Explorer";

#[derive(Debug, Default)]
pub struct SvgFilePresenter {}

impl SvgFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for SvgFilePresenter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Svg
    }

    fn present(&self, scene: &Scene, size: ExportSize, filepath: &Path) -> Result<(), ExportError> {
        let mut file = BufWriter::new(File::create(filepath)?);

        write_svg(scene, size, &mut file)?;
        file.flush()?;

        Ok(())
    }
}

/// Shortest decimal form with at most three fractional digits.
fn number(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "-0" | "" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

fn path_data(path: &DrawablePath) -> String {
    let mut data = String::new();

    for command in path.commands() {
        let piece = match *command {
            PathCommand::MoveTo(p) => format!("M{} {}", number(p.x), number(p.y)),
            PathCommand::LineTo(p) => format!("L{} {}", number(p.x), number(p.y)),
            PathCommand::Rect(r) => format!(
                "M{} {}h{}v{}h{}Z",
                number(r.x),
                number(r.y),
                number(r.width),
                number(r.height),
                number(-r.width)
            ),
        };
        data.push_str(&piece);
    }

    data
}

/// Writes `scene` as a standalone SVG document.
///
/// The view box is the scene bounds, so geometry stays in scene units and
/// `size` only sets the nominal document size.
fn write_svg(scene: &Scene, size: ExportSize, out: &mut impl Write) -> std::io::Result<()> {
    let bounds = scene.bounds;

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}" height="{}" viewBox="{} {} {} {}">"#,
        size.width,
        size.height,
        number(bounds.x),
        number(bounds.y),
        number(bounds.width),
        number(bounds.height)
    )?;
    writeln!(out, "<title>{TITLE}</title>")?;
    writeln!(out, "<desc>{DESCRIPTION}</desc>")?;
    writeln!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        number(bounds.x),
        number(bounds.y),
        number(bounds.width),
        number(bounds.height),
        scene.background
    )?;

    for item in &scene.items {
        if item.path.is_empty() {
            continue;
        }

        let data = path_data(&item.path);
        match item.paint {
            Paint::Stroke(colour) => writeln!(
                out,
                r#"<path d="{data}" fill="none" stroke="{colour}" stroke-width="{}" stroke-linecap="square"/>"#,
                number(item.path.stroke_width().unwrap_or(1.0))
            )?,
            Paint::Fill(colour) => {
                writeln!(out, r#"<path d="{data}" fill="{colour}" stroke="none"/>"#)?
            }
        }
    }

    writeln!(out, "</svg>")
}
