use crate::config::BakeConfig;
use crate::source::{Category, MemoryCharacters, MemorySource};
use crate::validate::Invariant;
use crate::weights::{CollationElement, CompactCode, TableEntry};
use crate::{bake, BakeError};

fn ce(primary: u16, secondary: u16, tertiary: u16) -> CollationElement
{
    CollationElement::new(primary, secondary, tertiary)
}

fn entries() -> Vec<TableEntry>
{
    vec![
        TableEntry::new(&[0x0301], &[ce(0, 0x24, 0x02)]),
        TableEntry::new(&[0x0020], &[ce(0x0209, 0x20, 0x02)]),
        TableEntry::new(&[0x0030], &[ce(0x1F98, 0x20, 0x02)]),
        TableEntry::new(&[0x0061], &[ce(0x1FA2, 0x20, 0x02)]),
        TableEntry::new(&[0x00E1], &[ce(0x1FA2, 0x20, 0x02), ce(0, 0x24, 0x02)]),
        TableEntry::new(&[0x03B1], &[ce(0x2100, 0x20, 0x02)]),
        TableEntry::new(&[0x03B2], &[ce(0x2101, 0x20, 0x02)]),
        TableEntry::new(&[0x9FA5], &[ce(0xFB41, 0x20, 0x02), ce(0x9FA5, 0, 0)]),
        TableEntry::new(&[0xFFFD], &[ce(0xFFFD, 0x20, 0x02)]),
    ]
}

#[test]
fn test_bake()
{
    let source = MemorySource::new(entries(), 0x0209);
    // альфа открывает греческое письмо
    let characters = MemoryCharacters::new().with([0x03B1, 0x03B2], 14, Category::LowercaseLetter);

    let bake = bake(&source, &characters, &BakeConfig::default(), false).unwrap();

    assert!(bake.report.is_well_formed(), "{:?}", bake.report.violations);
    assert_eq!(bake.table.entries.len(), 9);
    assert!(bake.table.gaps.script_firsts.contains(&0x2100));
    assert!(!bake.table.gaps.script_firsts.contains(&0x2101));

    let alpha = bake.table.entry(&[0x03B1]).unwrap().elements[0].primary;
    let beta = bake.table.entry(&[0x03B2]).unwrap().elements[0].primary;

    assert!(alpha < beta);

    // хвостовой вес остаётся ниже вычисляемых весов
    let replacement = bake.table.entry(&[0xFFFD]).unwrap().elements[0].primary;

    assert!(replacement < CompactCode::from_left_justified(0xE0000000));
    assert_eq!(bake.report.count(Invariant::TrailingRegion), 0);
}

#[test]
fn test_bake_config_check()
{
    let source = MemorySource::new(entries(), 0x0209);
    let characters = MemoryCharacters::new();

    let mut config = BakeConfig::default();
    config.primary.step = 0;

    assert!(matches!(
        bake(&source, &characters, &config, false),
        Err(BakeError::Config(_))
    ));
}

#[test]
fn test_bake_reports_violations()
{
    let mut entries = entries();
    // первичный вес без вторичного
    entries.push(TableEntry::new(&[0x0062], &[ce(0x1FB0, 0, 0x02)]));

    let source = MemorySource::new(entries, 0x0209);
    let bake = bake(&source, &MemoryCharacters::new(), &BakeConfig::default(), false).unwrap();

    assert!(!bake.report.is_well_formed());
    assert_eq!(bake.report.count(Invariant::Wf11), 1);
}

#[test]
fn test_bake_large_table()
{
    // объём порядка DUCET: 23 тысячи первичных весов, 150 письменностей
    let mut entries = vec![TableEntry::new(&[0x0020], &[ce(0x0209, 0x20, 0x02)])];

    entries.extend(
        (0 .. 23_000u32).map(|i| TableEntry::new(&[0x3400 + i], &[ce(0x0300 + i as u16, 0x20, 0x02)])),
    );

    let source = MemorySource::new(entries, 0x0209);

    let characters = (0 .. 150u32).fold(MemoryCharacters::new(), |characters, script| {
        let first = 0x3400 + script * 150;
        characters.with(first .. first + 150, script as u16 + 1, Category::OtherLetter)
    });

    let bake = bake(&source, &characters, &BakeConfig::default(), false).unwrap();

    assert!(bake.report.is_well_formed(), "{:?}", bake.report.violations);
    assert_eq!(bake.report.count(Invariant::TrailingRegion), 0);
    assert_eq!(bake.table.primary.len(), 23_001);
    assert!(bake.table.gaps.script_firsts.len() >= 150);
    assert!(bake.table.primary.first_wide().is_some());

    let last = bake.table.entry(&[0x3400 + 22_999]).unwrap().elements[0].primary;

    assert_eq!(last.len(), 3);
    assert!(last < CompactCode::from_left_justified(0xE0000000));
}
