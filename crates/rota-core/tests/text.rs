use rota_core::text::first_segment;

#[test]
fn delimited_field_yields_part_before_first_delimiter() {
    assert_eq!(first_segment("A;B;C", ';'), "A");
}

#[test]
fn undelimited_field_is_returned_unchanged() {
    assert_eq!(first_segment("MAT101", ';'), "MAT101");
}

#[test]
fn leading_delimiter_yields_empty_segment() {
    assert_eq!(first_segment(";MAT101", ';'), "");
}

#[test]
fn empty_field_stays_empty() {
    assert_eq!(first_segment("", ';'), "");
}

#[test]
fn only_the_first_delimiter_counts() {
    assert_eq!(first_segment("BIL202;BIL202L;BIL202P", ';'), "BIL202");
}
