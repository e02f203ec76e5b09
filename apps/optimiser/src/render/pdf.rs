//! Serialises a [`RenderedDocument`] to a PDF file with printpdf.
//!
//! Prefers the Times TrueType files under the configured font directory;
//! when they are absent the builtin Times faces are used instead and the
//! run continues. A missing typeface is the only recovered error.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, Point, Pt,
};
use tracing::warn;

use crate::errors::AppError;
use crate::render::layout::{DrawOp, RenderedDocument};

const ROMAN_FILE: &str = "times.ttf";
const BOLD_FILE: &str = "timesbd.ttf";

struct Faces {
    roman: IndirectFontRef,
    bold: IndirectFontRef,
}

fn load_faces(pdf: &PdfDocumentReference, font_dir: Option<&Path>) -> Result<Faces, AppError> {
    if let Some(dir) = font_dir {
        match load_external_faces(pdf, dir) {
            Ok(faces) => return Ok(faces),
            Err(e) => warn!(
                "Styling typefaces unavailable under {}: {e}; falling back to builtin Times",
                dir.display()
            ),
        }
    }
    let roman = pdf
        .add_builtin_font(BuiltinFont::TimesRoman)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to register builtin font: {e}")))?;
    let bold = pdf
        .add_builtin_font(BuiltinFont::TimesBold)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to register builtin font: {e}")))?;
    Ok(Faces { roman, bold })
}

fn load_external_faces(pdf: &PdfDocumentReference, dir: &Path) -> anyhow::Result<Faces> {
    let roman = pdf
        .add_external_font(File::open(dir.join(ROMAN_FILE))?)
        .map_err(|e| anyhow::anyhow!("{ROMAN_FILE}: {e}"))?;
    let bold = pdf
        .add_external_font(File::open(dir.join(BOLD_FILE))?)
        .map_err(|e| anyhow::anyhow!("{BOLD_FILE}: {e}"))?;
    Ok(Faces { roman, bold })
}

fn mm(pt: f64) -> Mm {
    Mm::from(Pt(pt as f32))
}

/// Writes the document to `path`. Returns nothing on success; the caller
/// reports the output path.
pub fn write_pdf(
    document: &RenderedDocument,
    path: &Path,
    font_dir: Option<&Path>,
) -> Result<(), AppError> {
    let geometry = document.geometry;
    let (pdf, first_page, first_layer) = PdfDocument::new(
        "Optimised Resume",
        mm(geometry.width),
        mm(geometry.height),
        "Layer 1",
    );

    let faces = load_faces(&pdf, font_dir)?;

    let mut page_refs = vec![(first_page, first_layer)];
    for _ in 1..document.pages.len() {
        page_refs.push(pdf.add_page(mm(geometry.width), mm(geometry.height), "Layer 1"));
    }

    for (page, (page_idx, layer_idx)) in document.pages.iter().zip(page_refs) {
        let layer = pdf.get_page(page_idx).get_layer(layer_idx);
        for op in &page.ops {
            match op {
                DrawOp::Text {
                    x,
                    y,
                    size,
                    bold,
                    content,
                } => {
                    let font = if *bold { &faces.bold } else { &faces.roman };
                    layer.use_text(content.clone(), *size as f32, mm(*x), mm(*y), font);
                }
                DrawOp::Rule {
                    x1,
                    x2,
                    y,
                    thickness,
                } => {
                    layer.set_outline_thickness(*thickness as f32);
                    layer.add_line(Line {
                        points: vec![
                            (Point::new(mm(*x1), mm(*y)), false),
                            (Point::new(mm(*x2), mm(*y)), false),
                        ],
                        is_closed: false,
                    });
                }
            }
        }
    }

    let file = File::create(path)?;
    pdf.save(&mut BufWriter::new(file))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to write PDF: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::layout::{layout, PageGeometry};

    #[test]
    fn test_write_pdf_with_builtin_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let document = layout("SUMMARY\nA short body line.", PageGeometry::a4());

        write_pdf(&document, &path, None).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output should be a PDF file");
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_missing_font_dir_degrades_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let document = layout("EXPERIENCE", PageGeometry::a4());

        // Directory exists but holds no typefaces — the run must continue.
        let empty_fonts = tempfile::tempdir().unwrap();
        write_pdf(&document, &path, Some(empty_fonts.path())).unwrap();
        assert!(path.exists());
    }
}
