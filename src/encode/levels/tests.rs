use super::*;
use crate::config::SecondaryGap;

#[test]
fn test_secondary_ranks()
{
    let double_start = 0xD0;

    assert_eq!(compact_secondary_rank(0, &[], double_start), 0);
    assert_eq!(compact_secondary_rank(1, &[], double_start), 0x0500);
    assert_eq!(compact_secondary_rank(2, &[], double_start), 0x8700);
    assert_eq!(compact_secondary_rank(3, &[], double_start), 0x8900);
    assert_eq!(compact_secondary_rank(0x26, &[], double_start), 0xCF00);

    // 2-байтовая форма
    assert_eq!(compact_secondary_rank(0x27, &[], double_start), 0xD00D);
    assert_eq!(compact_secondary_rank(0x28, &[], double_start), 0xD01D);

    // промежуток после ранга 0x27
    assert_eq!(
        compact_secondary_rank(0x28, &[(0x27, 256)], double_start),
        0xD225
    );
    assert_eq!(
        compact_secondary_rank(0x27, &[(0x27, 256)], double_start),
        0xD00D
    );
}

#[test]
fn test_legal_secondary()
{
    for value in [0x0000, 0x0500, 0x8700, 0xCF00, 0xD00D, 0xEFFD] {
        assert!(is_legal_secondary(value, 0xEF), "{:04X}", value);
    }

    for value in [0x0300, 0x0700, 0x8800, 0xD00C, 0xD003, 0xD0FF, 0xF00D] {
        assert!(!is_legal_secondary(value, 0xEF), "{:04X}", value);
    }
}

#[test]
fn test_secondary_compaction()
{
    let used: BTreeSet<u16> = [0].into_iter().chain(0x20 ..= 0x60).collect();

    let config = SecondaryConfig {
        gaps: vec![
            SecondaryGap {
                after: 0x50,
                width: 256,
            },
            // меньше всех используемых весов - пропускается
            SecondaryGap {
                after: 0x10,
                width: 64,
            },
        ],
        ..Default::default()
    };

    let compaction = SecondaryCompaction::build(&used, &config).unwrap();

    assert_eq!(compaction.len(), 0x41);
    assert_eq!(compaction.rank(0x20), Some(1));
    assert_eq!(compaction.rank(0x50), Some(49));

    assert_eq!(compaction.compact(0).unwrap(), CompactCode::ABSENT);
    assert_eq!(
        compaction.compact(0x20).unwrap(),
        CompactCode::from_bytes(&[0x05])
    );
    assert_eq!(
        compaction.compact(0x21).unwrap(),
        CompactCode::from_bytes(&[0x87])
    );
    assert_eq!(
        compaction.compact(0x50).unwrap(),
        CompactCode::from_bytes(&[0xD0, 0xAD])
    );
    // без промежутка было бы D0 BD
    assert_eq!(
        compaction.compact(0x51).unwrap(),
        CompactCode::from_bytes(&[0xD2, 0xC5])
    );

    assert!(matches!(
        compaction.compact(0x61),
        Err(BakeError::UnknownWeight {
            level: Level::Secondary,
            raw: 0x61
        })
    ));
}

#[test]
fn test_tertiary()
{
    let compaction = TertiaryCompaction::new(&TertiaryConfig::default());

    for (raw, value) in [
        (0x00, 0x00),
        (0x02, 0x05),
        (0x03, 0x07),
        (0x06, 0x0D),
        // 7 пропускается, 8 - прописная буква
        (0x08, 0x8F),
        (0x0D, 0x19),
        (0x1D, 0xB9),
        (0x1E, 0x3B),
        (0x1F, 0x3D),
    ] {
        assert_eq!(compaction.value(raw).unwrap(), value, "{:02X}", raw);
    }

    assert_eq!(
        compaction.compact(0x08).unwrap(),
        CompactCode::from_bytes(&[0x8F])
    );

    for raw in [0x01, 0x07] {
        assert!(matches!(
            compaction.value(raw),
            Err(BakeError::IllegalWeight {
                level: Level::Tertiary,
                ..
            })
        ));
    }

    assert!(matches!(
        compaction.value(0x20),
        Err(BakeError::OutOfRange {
            level: Level::Tertiary,
            ..
        })
    ));
}

#[test]
fn test_check_layout()
{
    assert!(check_layout(&SecondaryConfig::default(), &TertiaryConfig::default()).is_ok());

    // наибольшие ранги не помещаются под старший байт D2
    let secondary = SecondaryConfig {
        max_lead: 0xD2,
        ..Default::default()
    };

    assert!(matches!(
        check_layout(&secondary, &TertiaryConfig::default()),
        Err(BakeError::OutOfRange {
            level: Level::Secondary,
            ..
        })
    ));
}
