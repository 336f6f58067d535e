use rota_export::layout::COLUMNS;
use rota_export::page::PAGE_WIDTH;
use rota_export::styles::TableStyles;

#[test]
fn column_labels_and_widths_are_the_fixed_schedule_layout() {
    let labels: Vec<_> = COLUMNS.iter().map(|c| c.label).collect();
    assert_eq!(
        labels,
        ["Tarih", "Başlangıç", "Bitiş", "Ders Kodu", "Ders Adı"]
    );

    let widths: Vec<_> = COLUMNS.iter().map(|c| c.width).collect();
    assert_eq!(widths, [35.0, 25.0, 25.0, 45.0, 60.0]);
}

#[test]
fn only_the_course_name_column_wraps() {
    let wrapping: Vec<_> = COLUMNS.iter().filter(|c| c.wrap).map(|c| c.label).collect();
    assert_eq!(wrapping, ["Ders Adı"]);
}

#[test]
fn columns_fill_the_printable_width_exactly() {
    let styles = TableStyles::default();
    let total: f64 = COLUMNS.iter().map(|c| c.width).sum();
    assert_eq!(total, PAGE_WIDTH - 2.0 * styles.margin);
}
