use super::*;

#[test]
fn test_compact_code()
{
    let code = CompactCode::from_right_justified(0x0500, 2);

    assert_eq!(code.len(), 1);
    assert_eq!(code.bytes(), vec![0x05]);
    assert_eq!(code.format(), "05");

    let jamo = CompactCode::from_right_justified(0x05_07_10, 3);

    assert_eq!(jamo.len(), 3);
    assert_eq!(jamo, CompactCode::from_bytes(&[0x05, 0x07, 0x10]));

    // короткий вес меньше любого своего продолжения
    assert!(code < CompactCode::from_bytes(&[0x05, 0x05]));
    assert!(CompactCode::from_bytes(&[0x05, 0xFD]) < CompactCode::from_bytes(&[0x06]));

    assert!(CompactCode::ABSENT.is_absent());
    assert_eq!(CompactCode::ABSENT.len(), 0);
    assert!(!CompactCode::ABSENT.has_forbidden_bytes());

    assert!(CompactCode::from_bytes(&[0x05, 0x02]).has_forbidden_bytes());
    assert!(CompactCode::from_bytes(&[0x05, 0xFF]).has_forbidden_bytes());
    assert!(!CompactCode::from_bytes(&[0x05, 0x03]).has_forbidden_bytes());
}

#[test]
fn test_sort_key()
{
    // U+00E1 = a + COMBINING ACUTE ACCENT
    let elements = [
        CollationElement::new(0x1C47, 0x0020, 0x0002),
        CollationElement::new(0x0000, 0x0024, 0x0002),
    ];

    assert_eq!(
        sort_key(&elements),
        vec![0x1C47, 0, 0x0020, 0x0024, 0, 0x0002, 0x0002]
    );

    let mut entries = vec![
        TableEntry::new(&[0x00E1], &elements),
        TableEntry::new(&[0x0062], &[CollationElement::new(0x1C60, 0x0020, 0x0002)]),
        TableEntry::new(&[0x0061], &[CollationElement::new(0x1C47, 0x0020, 0x0002)]),
    ];

    canonical_order(&mut entries);

    let codes: Vec<u32> = entries.iter().map(|e| e.codes[0]).collect();
    assert_eq!(codes, vec![0x0061, 0x00E1, 0x0062]);
}

#[test]
fn test_format()
{
    assert_eq!(format_codes(&[0x61, 0x301]), "0061 0301");
    assert_eq!(
        CollationElement::new(0x1C47, 0x20, 0x2).format(),
        "[.1C47.0020.0002]"
    );

    let element = FractionalElement {
        primary: CompactCode::from_bytes(&[0x29]),
        secondary: CompactCode::from_bytes(&[0x05]),
        tertiary: CompactCode::ABSENT,
        is_implicit: false,
    };

    assert_eq!(element.format(), "[29, 05, ]");
}
