use rota_export::encoding::{TURKISH_DIFFERENCES, encode_char, encode_text};

#[test]
fn ascii_passes_through_unchanged() {
    assert_eq!(encode_text("MAT101 - Matematik I"), b"MAT101 - Matematik I");
}

#[test]
fn turkish_letters_land_on_their_latin5_positions() {
    assert_eq!(encode_char('Ğ'), 0xD0);
    assert_eq!(encode_char('İ'), 0xDD);
    assert_eq!(encode_char('Ş'), 0xDE);
    assert_eq!(encode_char('ğ'), 0xF0);
    assert_eq!(encode_char('ı'), 0xFD);
    assert_eq!(encode_char('ş'), 0xFE);
}

#[test]
fn latin1_letters_keep_their_winansi_positions() {
    assert_eq!(encode_char('ü'), 0xFC);
    assert_eq!(encode_char('ö'), 0xF6);
    assert_eq!(encode_char('ç'), 0xE7);
    assert_eq!(encode_char('Ü'), 0xDC);
}

#[test]
fn displaced_latin1_characters_are_replaced() {
    // The six positions the Turkish glyphs took over no longer hold their
    // Latin-1 occupants.
    for c in ['Ð', 'Ý', 'Þ', 'ð', 'ý', 'þ'] {
        assert_eq!(encode_char(c), b'?');
    }
}

#[test]
fn unencodable_characters_become_question_marks() {
    assert_eq!(encode_char('你'), b'?');
    assert_eq!(encode_text("Sınav 数学"), vec![b'S', 0xFD, b'n', b'a', b'v', b' ', b'?', b'?']);
}

#[test]
fn differences_table_covers_exactly_the_six_turkish_slots() {
    let codes: Vec<u8> = TURKISH_DIFFERENCES.iter().map(|(code, _)| *code).collect();
    assert_eq!(codes, [0xD0, 0xDD, 0xDE, 0xF0, 0xFD, 0xFE]);
}
