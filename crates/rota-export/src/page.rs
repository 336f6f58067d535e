//! Low-level page writer.
//!
//! Cursor model over PDF content streams: origin at the top-left corner,
//! units in mm, cells laid down left to right, bands top to bottom.
//! Nothing in here knows about exam schedules; the drawing surface is
//! cells, line breaks and page breaks.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};

use crate::encoding;
use crate::error::ExportError;
use crate::metrics;
use crate::styles::TableStyles;

/// A4 portrait page size, mm.
pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;

pub const MM_TO_PT: f64 = 72.0 / 25.4;

/// Horizontal padding between a cell border and its text, mm.
pub const CELL_PADDING: f64 = 1.0;

/// Text alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// How a single cell is drawn.
#[derive(Debug, Clone, Copy)]
pub struct CellStyle {
    /// Font size in points.
    pub size: f64,
    pub align: Align,
    pub border: bool,
    /// Fill color behind the text, RGB 0–255.
    pub fill: Option<[u8; 3]>,
    /// Text color, RGB 0–255.
    pub color: [u8; 3],
}

/// Accumulates drawing operations page by page and assembles the final
/// document on [`PageWriter::finish`].
pub struct PageWriter {
    styles: TableStyles,
    pages: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    x: f64,
    y: f64,
}

impl PageWriter {
    pub fn new(styles: TableStyles) -> Self {
        let x = styles.margin;
        let y = styles.top_margin;
        Self {
            styles,
            pages: Vec::new(),
            ops: Vec::new(),
            x,
            y,
        }
    }

    /// Y position of the next band, mm from the top of the page.
    pub fn cursor_y(&self) -> f64 {
        self.y
    }

    /// Lowest Y a band may reach before it must move to a fresh page.
    pub fn break_at(&self) -> f64 {
        PAGE_HEIGHT - self.styles.bottom_margin
    }

    /// Pages laid down so far, counting the one in progress.
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// Return to the left margin and move down by `height` mm.
    pub fn line_break(&mut self, height: f64) {
        self.x = self.styles.margin;
        self.y += height;
    }

    /// Move the cursor to the left margin at `y` mm from the page top.
    pub fn set_y(&mut self, y: f64) {
        self.x = self.styles.margin;
        self.y = y;
    }

    /// Close the current page and start a new one at the top margin.
    pub fn page_break(&mut self) {
        self.pages.push(std::mem::take(&mut self.ops));
        self.x = self.styles.margin;
        self.y = self.styles.top_margin;
    }

    /// Draw one single-line cell at the cursor and advance right by `width`.
    ///
    /// A `width` of zero spans from the cursor to the right margin. Text is
    /// vertically centered in the cell.
    pub fn cell(&mut self, width: f64, height: f64, text: &str, style: CellStyle) {
        let width = if width == 0.0 {
            PAGE_WIDTH - self.styles.margin - self.x
        } else {
            width
        };
        self.rect(self.x, self.y, width, height, style);
        let baseline = self.y + 0.5 * height + 0.3 * style.size / MM_TO_PT;
        self.text_line(text, self.x, width, baseline, style);
        self.x += width;
    }

    /// Draw one cell containing several stacked lines, `line_height` mm
    /// each, and advance right by `width`. The border spans all lines.
    pub fn multi_cell(&mut self, width: f64, line_height: f64, lines: &[String], style: CellStyle) {
        let height = line_height * lines.len() as f64;
        self.rect(self.x, self.y, width, height, style);
        for (i, line) in lines.iter().enumerate() {
            let top = self.y + line_height * i as f64;
            let baseline = top + 0.5 * line_height + 0.3 * style.size / MM_TO_PT;
            self.text_line(line, self.x, width, baseline, style);
        }
        self.x += width;
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: CellStyle) {
        if style.fill.is_none() && !style.border {
            return;
        }
        if let Some([r, g, b]) = style.fill {
            self.ops.push(Operation::new(
                "rg",
                vec![channel(r), channel(g), channel(b)],
            ));
        }
        self.ops.push(Operation::new(
            "re",
            vec![
                real(x * MM_TO_PT),
                real((PAGE_HEIGHT - y - h) * MM_TO_PT),
                real(w * MM_TO_PT),
                real(h * MM_TO_PT),
            ],
        ));
        let paint = match (style.fill.is_some(), style.border) {
            (true, true) => "B",
            (true, false) => "f",
            _ => "S",
        };
        self.ops.push(Operation::new(paint, vec![]));
    }

    fn text_line(&mut self, text: &str, x: f64, width: f64, baseline: f64, style: CellStyle) {
        if text.is_empty() {
            return;
        }
        let text_width = metrics::text_width(text, style.size);
        let inner = width - 2.0 * CELL_PADDING;
        let tx = match style.align {
            Align::Left => x + CELL_PADDING,
            Align::Center => x + CELL_PADDING + (inner - text_width).max(0.0) / 2.0,
            Align::Right => x + CELL_PADDING + (inner - text_width).max(0.0),
        };
        let [r, g, b] = style.color;
        self.ops.push(Operation::new("BT", vec![]));
        self.ops
            .push(Operation::new("Tf", vec!["F1".into(), real(style.size)]));
        self.ops.push(Operation::new(
            "rg",
            vec![channel(r), channel(g), channel(b)],
        ));
        self.ops.push(Operation::new(
            "Td",
            vec![
                real(tx * MM_TO_PT),
                real((PAGE_HEIGHT - baseline) * MM_TO_PT),
            ],
        ));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(
                encoding::encode_text(text),
                StringFormat::Literal,
            )],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    /// Consume the writer and assemble the document: one font resource
    /// shared by all pages, one content stream per page, stable object
    /// order so identical input yields identical bytes.
    pub fn finish(mut self) -> Result<Document, ExportError> {
        self.pages.push(std::mem::take(&mut self.ops));

        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let differences: Vec<Object> = encoding::TURKISH_DIFFERENCES
            .iter()
            .flat_map(|(code, glyph)| {
                [
                    Object::Integer(i64::from(*code)),
                    Object::Name(glyph.as_bytes().to_vec()),
                ]
            })
            .collect();
        let encoding_id = doc.add_object(dictionary! {
            "Type" => "Encoding",
            "BaseEncoding" => "WinAnsiEncoding",
            "Differences" => differences,
        });
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => encoding_id,
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for operations in self.pages {
            let content = Content { operations };
            let encoded = content
                .encode()
                .map_err(|e| ExportError::Pdf(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    real(PAGE_WIDTH * MM_TO_PT),
                    real(PAGE_HEIGHT * MM_TO_PT),
                ],
                "Resources" => resources_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        Ok(doc)
    }
}

/// Two-decimal PDF number; keeps content streams small and deterministic.
fn real(v: f64) -> Object {
    Object::Real(((v * 100.0).round() / 100.0) as f32)
}

/// One RGB channel scaled to the 0–1 range PDF color operators take.
fn channel(v: u8) -> Object {
    real(f64::from(v) / 255.0)
}
