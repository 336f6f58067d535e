use rota_export::metrics::{text_width, wrap};

const SIZE: f64 = 10.0;
const WIDTH: f64 = 58.0;

#[test]
fn short_text_stays_on_one_line() {
    assert_eq!(wrap("Fizik II", SIZE, WIDTH), ["Fizik II"]);
}

#[test]
fn empty_text_yields_one_empty_line() {
    assert_eq!(wrap("", SIZE, WIDTH), [""]);
}

#[test]
fn long_text_wraps_at_word_boundaries() {
    let name = "Bilgisayar Muhendisligine Giris ve Programlamanin Temelleri";
    let lines = wrap(name, SIZE, WIDTH);

    assert!(lines.len() > 1);
    for line in &lines {
        assert!(text_width(line, SIZE) <= WIDTH, "line too wide: {line}");
    }
    assert_eq!(lines.join(" "), name);
}

#[test]
fn oversized_single_word_is_broken_mid_word() {
    let word = "X".repeat(120);
    let lines = wrap(&word, SIZE, WIDTH);

    assert!(lines.len() > 1);
    for line in &lines {
        assert!(text_width(line, SIZE) <= WIDTH);
    }
    assert_eq!(lines.concat(), word);
}

#[test]
fn wider_text_measures_wider() {
    assert!(text_width("WWW", SIZE) > text_width("iii", SIZE));
    assert!(text_width("Matematik", SIZE) > text_width("Mat", SIZE));
}
