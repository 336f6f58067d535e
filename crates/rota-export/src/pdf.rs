//! Schedule table assembly: title, column-header, body and footer bands.

use std::path::Path;

use tracing::info;

use rota_core::models::exam::ExamRow;

use crate::error::ExportError;
use crate::layout::{COLUMNS, LINE_HEIGHT, TITLE_GAP};
use crate::metrics;
use crate::page::{Align, CELL_PADDING, CellStyle, PAGE_HEIGHT, PageWriter};
use crate::styles::TableStyles;

const BLACK: [u8; 3] = [0, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];

/// Render the schedule table as a complete PDF byte stream.
///
/// An empty `rows` slice still yields a valid one-page document carrying
/// the title and column-header bands. Identical input produces identical
/// bytes.
pub fn render_schedule(rows: &[ExamRow], title: &str) -> Result<Vec<u8>, ExportError> {
    let styles = TableStyles::default();
    let mut writer = PageWriter::new(styles.clone());

    draw_title(&mut writer, title, &styles);
    draw_header(&mut writer, &styles);

    let body = CellStyle {
        size: styles.body_size,
        align: Align::Center,
        border: true,
        fill: None,
        color: BLACK,
    };
    let name_column = COLUMNS[4];
    for row in rows {
        let lines = metrics::wrap(
            row.name(),
            styles.body_size,
            name_column.width - 2.0 * CELL_PADDING,
        );
        let band_height = LINE_HEIGHT * lines.len() as f64;
        if writer.cursor_y() + band_height > writer.break_at() {
            draw_footer(&mut writer, title, &styles);
            writer.page_break();
        }
        writer.cell(COLUMNS[0].width, band_height, &row.date, body);
        writer.cell(COLUMNS[1].width, band_height, &row.start_time, body);
        writer.cell(COLUMNS[2].width, band_height, &row.end_time, body);
        writer.cell(COLUMNS[3].width, band_height, row.code(), body);
        writer.multi_cell(name_column.width, LINE_HEIGHT, &lines, body);
        writer.line_break(band_height);
    }

    draw_footer(&mut writer, title, &styles);
    let pages = writer.page_count();

    let mut doc = writer.finish()?;
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    info!(
        rows = rows.len(),
        pages,
        bytes = buffer.len(),
        "schedule rendered"
    );
    Ok(buffer)
}

/// Render the schedule and write the single output artifact, overwriting
/// any previous export at `path`.
pub fn write_schedule(
    path: impl AsRef<Path>,
    rows: &[ExamRow],
    title: &str,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let bytes = render_schedule(rows, title)?;
    std::fs::write(path, &bytes).map_err(|source| ExportError::Write {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), "schedule artifact written");
    Ok(())
}

fn draw_title(writer: &mut PageWriter, title: &str, styles: &TableStyles) {
    let style = CellStyle {
        size: styles.title_size,
        align: Align::Center,
        border: false,
        fill: None,
        color: BLACK,
    };
    writer.cell(0.0, LINE_HEIGHT, title, style);
    writer.line_break(LINE_HEIGHT + TITLE_GAP);
}

fn draw_header(writer: &mut PageWriter, styles: &TableStyles) {
    let style = CellStyle {
        size: styles.body_size,
        align: Align::Center,
        border: true,
        fill: Some(styles.header_fill),
        color: WHITE,
    };
    for column in &COLUMNS {
        writer.cell(column.width, LINE_HEIGHT, column.label, style);
    }
    writer.line_break(LINE_HEIGHT);
}

/// Footer band near the bottom edge: the document title at the left
/// margin, the page number at the right. Drawn once per page, just before
/// the page closes.
fn draw_footer(writer: &mut PageWriter, title: &str, styles: &TableStyles) {
    let page = writer.page_count();
    let style = CellStyle {
        size: styles.footer_size,
        align: Align::Left,
        border: false,
        fill: None,
        color: BLACK,
    };

    writer.set_y(PAGE_HEIGHT - styles.bottom_margin);
    writer.cell(0.0, LINE_HEIGHT, title, style);

    writer.set_y(PAGE_HEIGHT - styles.bottom_margin);
    let right = CellStyle {
        align: Align::Right,
        ..style
    };
    writer.cell(0.0, LINE_HEIGHT, &format!("Sayfa {page}"), right);
}
