use crate::encode::implicit::{self, *};
use crate::stats::BakeStats;
use crate::tables::{BakedEntry, FractionalTable};
use crate::validate::{Invariant, ValidationReport};
use crate::weights::{format_codes, CompactCode, Level};

/// сколько примеров нарушений каждого свойства выводится в отчёт
pub const VIOLATION_EXAMPLES: usize = 50;

/// кодпоинты, вычисляемые веса которых (и их соседей) выводятся в сводку
pub const IMPLICIT_CUSPS: [(&str, u32); 11] = [
    ("First CJK", CJK_BASE),
    ("Last CJK", CJK_LIMIT - 1),
    ("First CJK-compat", CJK_COMPAT_USED_BASE),
    ("Last CJK-compat", CJK_COMPAT_USED_LIMIT - 1),
    ("First CJK_A", CJK_A_BASE),
    ("Last CJK_A", CJK_A_LIMIT - 1),
    ("First CJK_B", CJK_B_BASE),
    ("Last CJK_B", CJK_B_LIMIT - 1),
    ("First Other Implicit", 0),
    ("Last Other Implicit", 0x10FFFF),
    ("Boundary", IMPLICIT_4BYTE_BOUNDARY),
];

/// вычисляемый вес кодпоинта в виде "E0 03 03", для некорректных - пустая строка
fn implicit_bytes(code: u32) -> String
{
    implicit::implicit_primary(code)
        .map(|p| CompactCode::from_left_justified(p).format())
        .unwrap_or_default()
}

/// строка таблицы: "0061; [0A, 05, 05]"
pub fn format_entry(entry: &BakedEntry) -> String
{
    format!(
        "{}; {}",
        format_codes(&entry.codes),
        entry
            .elements
            .iter()
            .map(|e| e.format())
            .collect::<String>()
    )
}

/// заголовок таблицы дробных весов
pub fn format_fractional_header(table: &FractionalTable) -> String
{
    let mut header = String::new();

    if let Some(top) = table.primary.first_regular() {
        header.push_str(&format!("[variable top = {}]\n", top.format()));
    }

    header.push_str(&format!(
        "[first implicit [{}]]\n",
        implicit_bytes(CJK_BASE)
    ));
    header.push_str(&format!(
        "[last implicit [{}]]\n",
        implicit_bytes(0x10FFFF)
    ));

    header
}

/// вычисляемые веса граничных кодпоинтов
pub fn format_implicit_cusps() -> String
{
    let mut lines = vec![];

    for (title, code) in IMPLICIT_CUSPS {
        for (suffix, code) in [
            ("-1", code.checked_sub(1)),
            ("", Some(code)),
            ("+1", Some(code + 1)),
        ] {
            let code = match code {
                Some(code) if code <= 0x10FFFF => code,
                _ => continue,
            };

            lines.push(format!(
                "# {}{}: U+{:04X} => [{}]",
                title,
                suffix,
                code,
                implicit_bytes(code)
            ));
        }
    }

    lines.join("\n") + "\n"
}

/// сводка по сжатию весов
pub fn format_summary(table: &FractionalTable) -> String
{
    let mut summary = String::new();

    summary.push_str(&format!(
        "variable high: {:04X}\n",
        table.gaps.variable_high
    ));

    if let Some(top) = table.primary.first_regular() {
        summary.push_str(&format!("variable top: [{}]\n", top.format()));
    }

    if let Some(raw) = table.primary.first_wide() {
        summary.push_str(&format!("3-byte primaries from: {:04X}\n", raw));
    }

    summary.push_str(&format!(
        "primary: {}\nsecondary: {}\ntertiary: {}\n",
        table.primary.len(),
        table.secondary.len(),
        table.used.get(Level::Tertiary).len()
    ));

    summary.push_str(&format!(
        "singles: {}\nscript firsts: {}\nold jamo ranges: {}\n",
        hex_list(table.gaps.singles.iter()),
        hex_list(table.gaps.script_firsts.iter()),
        table
            .gaps
            .old_jamo
            .iter()
            .map(|r| format!("{:04X}..{:04X}", r.start(), r.end()))
            .collect::<Vec<String>>()
            .join(" ")
    ));

    summary.push('\n');
    summary.push_str(&format_implicit_cusps());

    summary.push_str("\n# primary weights\n");

    for (raw, code) in table.primary.iter() {
        summary.push_str(&format!("{:04X} => [{}]\n", raw, code.format()));
    }

    summary
}

fn hex_list<'a>(weights: impl Iterator<Item = &'a u16>) -> String
{
    weights
        .map(|w| format!("{:04X}", w))
        .collect::<Vec<String>>()
        .join(" ")
}

/// отчёт о проверке таблицы
pub fn format_validation(report: &ValidationReport) -> String
{
    let mut output = String::new();

    for invariant in Invariant::ALL {
        let count = report.count(invariant);

        output.push_str(&format!("{}: {}\n", invariant.label(), count));

        for violation in report.examples(invariant, VIOLATION_EXAMPLES) {
            output.push_str(&format!("  {}\n", violation.format()));
        }
    }

    output.push('\n');

    if let Some(min) = &report.min_primary_ignorable_secondary {
        output.push_str(&format!(
            "minimum secondary in primary ignorable = {:04X} from {}\n",
            min.weight,
            format_codes(&min.codes)
        ));
    }

    if let Some(min) = &report.min_secondary_ignorable_tertiary {
        output.push_str(&format!(
            "minimum tertiary in secondary ignorable = {:04X} from {}\n",
            min.weight,
            format_codes(&min.codes)
        ));
    }

    output.push_str(&format!(
        "well-formedness errors: {}\n",
        report.error_count()
    ));

    output
}

/// статистика: сначала список блоков, затем содержимое каждого
pub fn format_stats(stats: &BakeStats) -> String
{
    let mut output = String::new();
    let blocks = stats.ordered();

    for (header, block) in blocks.iter() {
        let widths = block
            .widths
            .iter()
            .map(|(width, count)| format!("{}:{}", width, count))
            .collect::<Vec<String>>()
            .join(" ");

        output.push_str(&format!(
            "{}. {} ({}) [{}]\n",
            block.order, header, block.count, widths
        ));
    }

    output.push('\n');

    for (header, block) in blocks.iter() {
        output.push_str(&format!("{}. {} ({})\n\n", block.order, header, block.count));

        let mut codes: Vec<&Vec<u32>> = block.entries.keys().collect();
        codes.sort();

        for code in codes {
            output.push_str(&format!(
                "{} - {}\n",
                format_codes(code),
                block.entries[code]
            ));
        }

        output.push('\n');
    }

    output
}
