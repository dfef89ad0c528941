use crate::encode::implicit::{self, IMPLICIT_BASE_BYTE};
use crate::encode::CompactWeight;
use crate::tables::FractionalTable;
use crate::weights::{format_codes, format_elements, CollationElement, CompactCode};

#[cfg(test)]
mod tests;

/// проверяемые свойства таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Invariant
{
    /// ненулевой первичный вес - ненулевой вторичный
    Wf11,
    /// ненулевой вторичный вес - ненулевой третичный
    Wf12,
    /// вторичные веса неигнорируемых элементов меньше вторичных весов игнорируемых
    Wf22,
    /// третичные веса элементов с ненулевым вторичным весом меньше третичных весов
    /// элементов, игнорируемых на вторичном уровне
    Wf23,
    /// пара вычисляемых весов корректна и соответствует кодпоинту
    ImplicitRegion,
    /// сжатые первичные веса не заходят в область вычисляемых весов
    TrailingRegion,
}

impl Invariant
{
    pub const ALL: [Invariant; 6] = [
        Invariant::Wf11,
        Invariant::Wf12,
        Invariant::Wf22,
        Invariant::Wf23,
        Invariant::ImplicitRegion,
        Invariant::TrailingRegion,
    ];

    pub fn label(&self) -> &'static str
    {
        match self {
            Invariant::Wf11 => "WF1.1",
            Invariant::Wf12 => "WF1.2",
            Invariant::Wf22 => "WF2.2",
            Invariant::Wf23 => "WF2.3",
            Invariant::ImplicitRegion => "IMPLICIT",
            Invariant::TrailingRegion => "TRAILING",
        }
    }
}

/// нарушение свойства в строке таблицы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation
{
    pub invariant: Invariant,
    pub codes: Vec<u32>,
    pub elements: Vec<CollationElement>,
    /// номер элемента сопоставления в строке
    pub index: usize,
}

impl Violation
{
    pub fn format(&self) -> String
    {
        format!(
            "{}\t{}\t{} (#{})",
            self.invariant.label(),
            format_codes(&self.codes),
            format_elements(&self.elements),
            self.index
        )
    }
}

/// наименьший вес и строка, в которой он встретился
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumSample
{
    pub weight: u16,
    pub codes: Vec<u32>,
}

/// результат проверки таблицы
#[derive(Debug, Clone, Default)]
pub struct ValidationReport
{
    pub violations: Vec<Violation>,
    /// наименьший вторичный вес среди элементов с нулевым первичным весом
    pub min_primary_ignorable_secondary: Option<MinimumSample>,
    /// наименьший третичный вес среди элементов с нулевыми первичным и вторичным весами
    pub min_secondary_ignorable_tertiary: Option<MinimumSample>,
}

impl ValidationReport
{
    /// общее количество нарушений
    pub fn error_count(&self) -> usize
    {
        self.violations.len()
    }

    /// количество нарушений свойства
    pub fn count(&self, invariant: Invariant) -> usize
    {
        self.violations
            .iter()
            .filter(|v| v.invariant == invariant)
            .count()
    }

    /// первые нарушения свойства
    pub fn examples(&self, invariant: Invariant, limit: usize) -> impl Iterator<Item = &Violation>
    {
        self.violations
            .iter()
            .filter(move |v| v.invariant == invariant)
            .take(limit)
    }

    pub fn is_well_formed(&self) -> bool
    {
        self.violations.is_empty()
    }
}

/// проверка корректности запечённой таблицы
///
/// нарушения не прерывают проверку, а накапливаются в отчёте
pub struct WellFormednessValidator<'t, 'a>
{
    table: &'t FractionalTable<'a>,
}

impl<'t, 'a> WellFormednessValidator<'t, 'a>
{
    pub fn new(table: &'t FractionalTable<'a>) -> Self
    {
        Self { table }
    }

    /// два прохода по исходной таблице: сбор наименьших весов игнорируемых элементов, затем проверки
    pub fn validate(&self) -> ValidationReport
    {
        let mut report = ValidationReport::default();

        self.collect_minimums(&mut report);

        let min_ps = report
            .min_primary_ignorable_secondary
            .as_ref()
            .map(|m| m.weight);

        let min_pst = report
            .min_secondary_ignorable_tertiary
            .as_ref()
            .map(|m| m.weight);

        let source = self.table.source();

        for entry in source.entries() {
            let mut violation = |invariant: Invariant, index: usize| {
                report.violations.push(Violation {
                    invariant,
                    codes: entry.codes.clone(),
                    elements: entry.elements.clone(),
                    index,
                });
            };

            let elements = &entry.elements;
            let mut i = 0;

            while i < elements.len() {
                let element = elements[i];
                let (p, s, t) = (element.primary, element.secondary, element.tertiary);

                if p != 0 && s == 0 {
                    violation(Invariant::Wf11, i);
                }

                if s != 0 && t == 0 {
                    violation(Invariant::Wf12, i);
                }

                if p != 0 && min_ps.map_or(false, |min| s >= min) {
                    violation(Invariant::Wf22, i);
                }

                if s != 0 && min_pst.map_or(false, |min| t >= min) {
                    violation(Invariant::Wf23, i);
                }

                if source.is_implicit_lead(p) {
                    // второй элемент пары проверяется только здесь
                    if !self.is_valid_implicit(p, elements.get(i + 1)) {
                        violation(Invariant::ImplicitRegion, i);
                    }

                    i += 2;
                    continue;
                }

                if p != 0 {
                    let is_overflow = self
                        .table
                        .primary
                        .compact(p)
                        .map(|code| code >= CompactCode::from_bytes(&[IMPLICIT_BASE_BYTE]))
                        .unwrap_or(false);

                    if is_overflow && !self.table.is_trailing(p) {
                        violation(Invariant::TrailingRegion, i);
                    }
                }

                i += 1;
            }
        }

        match report.is_well_formed() {
            true => log::info!("well-formedness: ok"),
            false => log::warn!("well-formedness: {} errors", report.error_count()),
        }

        report
    }

    /// первый проход
    fn collect_minimums(&self, report: &mut ValidationReport)
    {
        let source = self.table.source();

        for entry in source.entries() {
            let mut elements = entry.elements.iter();

            while let Some(element) = elements.next() {
                if source.is_implicit_lead(element.primary) {
                    elements.next();
                    continue;
                }

                if !element.is_primary_ignorable() {
                    continue;
                }

                let (slot, weight) = match element.is_secondary_ignorable() {
                    true => (&mut report.min_secondary_ignorable_tertiary, element.tertiary),
                    false => (&mut report.min_primary_ignorable_secondary, element.secondary),
                };

                if weight == 0 {
                    continue;
                }

                if slot.as_ref().map_or(true, |m| weight < m.weight) {
                    *slot = Some(MinimumSample {
                        weight,
                        codes: entry.codes.clone(),
                    });
                }
            }
        }
    }

    /// пара вычисляемых весов: второй элемент без вторичного и третичного весов, пара
    /// соответствует кодпоинту, вычисляемый вес которого обратим
    fn is_valid_implicit(&self, lead: u16, trail: Option<&CollationElement>) -> bool
    {
        let trail = match trail {
            Some(trail) if trail.secondary == 0 && trail.tertiary == 0 => trail,
            _ => return false,
        };

        let code = match self.table.source().implicit_code_point(lead, trail.primary) {
            Some(code) => code,
            None => return false,
        };

        implicit::implicit_primary(code)
            .and_then(implicit::implicit_code_point)
            .map_or(false, |decoded| decoded == code)
    }
}
