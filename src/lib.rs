//! дробные веса UCA: сжатие исходных весов DUCET/CLDR в компактные байтовые последовательности,
//! вычисляемые веса идеограмм и прочих кодпоинтов, проверка корректности полученной таблицы

use config::BakeConfig;
use encode::{implicit, levels};
use source::{CharacterDatabase, ReferenceCollationSource};
use tables::FractionalTable;
use validate::{ValidationReport, WellFormednessValidator};

pub use error::{BakeError, Result};

pub mod config;
pub mod encode;
pub mod error;
pub mod output;
pub mod scan;
pub mod source;
pub mod stats;
pub mod tables;
pub mod validate;
pub mod weights;

#[cfg(test)]
mod tests;

/// результат запекания: таблица и отчёт о её проверке
pub struct Bake<'a>
{
    pub table: FractionalTable<'a>,
    pub report: ValidationReport,
}

/// запечь таблицу дробных весов
///
/// самопроверки (вычисляемые веса всех кодпоинтов, раскладка вторичных и третичных весов)
/// выполняются до запекания, нарушения корректности таблицы не прерывают работу и попадают в отчёт
pub fn bake<'a>(
    source: &'a dyn ReferenceCollationSource,
    characters: &dyn CharacterDatabase,
    config: &BakeConfig,
    check_implicit: bool,
) -> Result<Bake<'a>>
{
    config.check()?;

    if check_implicit {
        implicit::check_implicit()?;
    }

    levels::check_layout(&config.secondary, &config.tertiary)?;

    let table = FractionalTable::build(source, characters, config)?;
    let report = WellFormednessValidator::new(&table).validate();

    Ok(Bake { table, report })
}
