use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::stats::BakeStats;
use crate::tables::FractionalTable;
use crate::validate::ValidationReport;

use format::*;

pub mod format;


fn create(filename: impl AsRef<Path>) -> io::Result<BufWriter<File>>
{
    if let Some(dir) = filename.as_ref().parent() {
        std::fs::create_dir_all(dir)?;
    }

    Ok(BufWriter::new(File::create(filename.as_ref())?))
}

/// записать таблицу дробных весов
pub fn write_fractional(filename: impl AsRef<Path>, table: &FractionalTable) -> io::Result<()>
{
    let mut file = create(filename)?;

    write!(file, "{}", format_fractional_header(table))?;
    writeln!(file)?;

    for entry in table.entries.iter() {
        writeln!(file, "{}", format_entry(entry))?;
    }

    file.flush()
}

/// записать сводку: промежутки, количество весов, вычисляемые веса граничных кодпоинтов
pub fn write_summary(filename: impl AsRef<Path>, table: &FractionalTable) -> io::Result<()>
{
    let mut file = create(filename)?;

    write!(file, "{}", format_summary(table))?;

    file.flush()
}

/// записать отчёт о проверке таблицы
pub fn write_validation(filename: impl AsRef<Path>, report: &ValidationReport) -> io::Result<()>
{
    let mut file = create(filename)?;

    write!(file, "{}", format_validation(report))?;

    file.flush()
}

/// записать статистику по запечённым строкам
pub fn write_stats(filename: impl AsRef<Path>, stats: &BakeStats) -> io::Result<()>
{
    let mut file = create(filename)?;

    write!(file, "{}", format_stats(stats))?;

    file.flush()
}
