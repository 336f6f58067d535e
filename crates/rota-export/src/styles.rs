use serde::{Deserialize, Serialize};

/// Visual configuration for the schedule document.
///
/// The exporter always renders with [`TableStyles::default`]; the struct
/// exists so the numbers live in one place and can be inspected by tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStyles {
    /// Title band font size in points.
    pub title_size: f64,

    /// Header and body font size in points.
    pub body_size: f64,

    /// Footer font size in points.
    pub footer_size: f64,

    /// Header band fill color, RGB 0–255.
    pub header_fill: [u8; 3],

    /// Left and right page margin in mm.
    pub margin: f64,

    /// Top page margin in mm.
    pub top_margin: f64,

    /// Bottom margin in mm; body bands never cross into it.
    pub bottom_margin: f64,
}

impl Default for TableStyles {
    fn default() -> Self {
        Self {
            title_size: 14.0,
            body_size: 10.0,
            footer_size: 8.0,
            header_fill: [0, 51, 102],
            margin: 10.0,
            top_margin: 20.0,
            bottom_margin: 20.0,
        }
    }
}
