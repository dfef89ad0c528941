use super::*;
use crate::config::BakeConfig;
use crate::source::{MemoryCharacters, MemorySource};
use crate::weights::TableEntry;

fn ce(primary: u16, secondary: u16, tertiary: u16) -> CollationElement
{
    CollationElement::new(primary, secondary, tertiary)
}

/// небольшая согласованная таблица
fn consistent_entries() -> Vec<TableEntry>
{
    vec![
        TableEntry::new(&[0x0300], &[ce(0, 0x25, 0x02)]),
        TableEntry::new(&[0x0020], &[ce(0x0209, 0x20, 0x02)]),
        TableEntry::new(&[0x0061], &[ce(0x1C47, 0x20, 0x02)]),
        TableEntry::new(&[0x0041], &[ce(0x1C47, 0x20, 0x08)]),
        TableEntry::new(&[0x0062], &[ce(0x1C60, 0x20, 0x02)]),
        TableEntry::new(
            &[0x00E6],
            &[ce(0x1C47, 0x20, 0x04), ce(0, 0x110, 0x04), ce(0x1CAA, 0x20, 0x04)],
        ),
        TableEntry::new(&[0x0061, 0x0300], &[ce(0x1C47, 0x20, 0x02), ce(0, 0x25, 0x02)]),
        TableEntry::new(&[0x4E00], &[ce(0xFB40, 0x20, 0x02), ce(0xCE00, 0, 0)]),
        TableEntry::new(&[0x3400], &[ce(0xFB80, 0x20, 0x02), ce(0xB400, 0, 0)]),
    ]
}

fn validate(entries: Vec<TableEntry>, config: &BakeConfig) -> ValidationReport
{
    let source = MemorySource::new(entries, 0x0209);
    let characters = MemoryCharacters::new();
    let table = FractionalTable::build(&source, &characters, config).unwrap();

    WellFormednessValidator::new(&table).validate()
}

#[test]
fn test_consistent_table()
{
    let report = validate(consistent_entries(), &BakeConfig::default());

    assert!(report.is_well_formed(), "{:?}", report.violations);
    assert_eq!(report.error_count(), 0);

    assert_eq!(
        report.min_primary_ignorable_secondary,
        Some(MinimumSample {
            weight: 0x25,
            codes: vec![0x0300]
        })
    );
    assert_eq!(report.min_secondary_ignorable_tertiary, None);
}

#[test]
fn test_wf11()
{
    // первичный вес без вторичного
    let mut entries = consistent_entries();
    entries.push(TableEntry::new(&[0x0063], &[ce(0x0005, 0, 0x02)]));

    let report = validate(entries, &BakeConfig::default());

    assert_eq!(report.error_count(), 1);
    assert_eq!(report.count(Invariant::Wf11), 1);

    let violation = &report.violations[0];

    assert_eq!(violation.codes, vec![0x0063]);
    assert_eq!(violation.index, 0);
    assert!(violation.format().starts_with("WF1.1\t0063\t"));
}

#[test]
fn test_wf12_wf2()
{
    let mut entries = consistent_entries();

    // вторичный вес без третичного
    entries.push(TableEntry::new(&[0x0064], &[ce(0x1D00, 0x20, 0)]));
    // вторичный вес неигнорируемого элемента не меньше наименьшего вторичного веса игнорируемых
    entries.push(TableEntry::new(&[0x0065], &[ce(0x1D10, 0x25, 0x02)]));
    // элемент, игнорируемый на вторичном уровне
    entries.push(TableEntry::new(&[0x0600], &[ce(0, 0, 0x02)]));

    let report = validate(entries, &BakeConfig::default());

    assert_eq!(report.count(Invariant::Wf12), 1);
    assert_eq!(report.count(Invariant::Wf22), 1);
    assert_eq!(
        report
            .min_secondary_ignorable_tertiary
            .as_ref()
            .map(|m| m.weight),
        Some(0x02)
    );

    // третичный вес 02 у элемента, игнорируемого на вторичном уровне, не меньше третичных весов
    // остальных элементов: нарушение для каждого элемента с ненулевыми вторичным и третичным
    // весами (12 в согласованной таблице и U+0065), второй элемент пары не проверяется
    assert_eq!(report.count(Invariant::Wf23), 13);
    assert_eq!(report.count(Invariant::Wf11), 0);
    assert_eq!(report.examples(Invariant::Wf22, 5).count(), 1);
}

#[test]
fn test_implicit_region()
{
    let mut entries = consistent_entries();
    entries.push(TableEntry::new(
        &[0x4E01],
        &[ce(0xFB40, 0x20, 0x02), ce(0xCE01, 0x20, 0x02)],
    ));

    let report = validate(entries, &BakeConfig::default());

    assert_eq!(report.error_count(), 1);
    assert_eq!(report.count(Invariant::ImplicitRegion), 1);
    assert_eq!(report.violations[0].codes, vec![0x4E01]);
}

#[test]
fn test_trailing_region()
{
    // шаг в целый байт: старший байт сжатого веса растёт на 1 с каждым весом
    let entries: Vec<TableEntry> = (1 ..= 0xDC)
        .map(|i: u16| TableEntry::new(&[0x1000 + i as u32], &[ce(i, 0x20, 0x02)]))
        .collect();

    let mut config = BakeConfig::default();
    config.primary.step = 0xFF;
    config.primary.widen = false;

    let source = MemorySource::new(entries.clone(), 0xFFFF);
    let characters = MemoryCharacters::new();
    let table = FractionalTable::build(&source, &characters, &config).unwrap();

    assert_eq!(
        table.primary.compact(0xDB).unwrap().bytes(),
        vec![0xE0, 0x05]
    );

    let report = WellFormednessValidator::new(&table).validate();

    assert_eq!(report.count(Invariant::TrailingRegion), 2);
    assert_eq!(report.error_count(), 2);

    // те же веса, объявленные хвостовыми
    config.trailing_primary_start = 0xDB;

    let table = FractionalTable::build(&source, &characters, &config).unwrap();
    let report = WellFormednessValidator::new(&table).validate();

    assert!(report.is_well_formed());

    // с 3-байтовой формой веса остаются ниже вычисляемых и без хвостовой области
    let mut config = BakeConfig::default();
    config.primary.step = 0xFF;

    let table = FractionalTable::build(&source, &characters, &config).unwrap();

    assert!(table.primary.first_wide().is_some());
    assert!(table.primary.compact(0xDC).unwrap().lead_byte() < 0xE0);

    let report = WellFormednessValidator::new(&table).validate();

    assert_eq!(report.count(Invariant::TrailingRegion), 0);
    assert!(report.is_well_formed());
}
