//! Fixed table geometry. Labels and widths never vary per call.

/// One column of the schedule table.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    /// Column width in mm.
    pub width: f64,
    /// Whether cell content word-wraps instead of assuming it fits.
    pub wrap: bool,
}

/// The five schedule columns, left to right.
pub const COLUMNS: [Column; 5] = [
    Column {
        label: "Tarih",
        width: 35.0,
        wrap: false,
    },
    Column {
        label: "Başlangıç",
        width: 25.0,
        wrap: false,
    },
    Column {
        label: "Bitiş",
        width: 25.0,
        wrap: false,
    },
    Column {
        label: "Ders Kodu",
        width: 45.0,
        wrap: false,
    },
    Column {
        label: "Ders Adı",
        width: 60.0,
        wrap: true,
    },
];

/// Height of one text line inside a band, mm.
pub const LINE_HEIGHT: f64 = 10.0;

/// Vertical gap between the title band and the column-header band, mm.
pub const TITLE_GAP: f64 = 5.0;
