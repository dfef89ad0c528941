use super::*;
use crate::source::MemorySource;
use crate::weights::{CollationElement, TableEntry};

#[test]
fn test_scan()
{
    let source = MemorySource::new(
        vec![
            TableEntry::new(&[0x0300], &[CollationElement::new(0, 0x25, 0x02)]),
            TableEntry::new(&[0x0061], &[CollationElement::new(0x1C47, 0x20, 0x02)]),
            TableEntry::new(&[0x0041], &[CollationElement::new(0x1C47, 0x20, 0x08)]),
            TableEntry::new(
                &[0x00E6],
                &[
                    CollationElement::new(0x1C47, 0x20, 0x04),
                    CollationElement::new(0, 0x110, 0x04),
                    CollationElement::new(0x1CAA, 0x20, 0x04),
                ],
            ),
            // U+4E00: пара вычисляемых весов
            TableEntry::new(
                &[0x4E00],
                &[
                    CollationElement::new(0xFB40, 0x20, 0x03),
                    CollationElement::new(0xCE00, 0, 0),
                ],
            ),
        ],
        0,
    );

    let used = UsedWeights::scan(&source).unwrap();

    assert_eq!(
        used.get(Level::Primary),
        &[0x1C47, 0x1CAA].into_iter().collect::<BTreeSet<u16>>()
    );
    assert_eq!(
        used.get(Level::Secondary),
        &[0x20, 0x25, 0x110].into_iter().collect::<BTreeSet<u16>>()
    );
    // третичный вес первого элемента пары учитывается
    assert_eq!(
        used.get(Level::Tertiary),
        &[0x02, 0x03, 0x04, 0x08].into_iter().collect::<BTreeSet<u16>>()
    );

    assert!(!used.contains(Level::Primary, 0xFB40));
    assert!(!used.contains(Level::Primary, 0xCE00));
    assert!(!used.contains(Level::Primary, 0));
}

#[test]
fn test_insert()
{
    let mut used = UsedWeights::default();

    used.insert(Level::Secondary, 0x40);
    used.insert(Level::Secondary, 0);

    assert_eq!(used.get(Level::Secondary).len(), 1);
    assert!(used.contains(Level::Secondary, 0x40));
}

#[test]
fn test_truncated_implicit()
{
    let source = MemorySource::new(
        vec![TableEntry::new(
            &[0x4E00],
            &[CollationElement::new(0xFB40, 0x20, 0x02)],
        )],
        0,
    );

    assert!(matches!(
        UsedWeights::scan(&source),
        Err(BakeError::TruncatedImplicit { lead: 0xFB40, .. })
    ));
}
