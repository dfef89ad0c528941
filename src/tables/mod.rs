use crate::config::BakeConfig;
use crate::encode::implicit;
use crate::encode::levels::{SecondaryCompaction, TertiaryCompaction};
use crate::encode::primary::{GapReservation, PrimaryCompaction};
use crate::encode::CompactWeight;
use crate::error::{BakeError, Result};
use crate::scan::UsedWeights;
use crate::source::{CharacterDatabase, ReferenceCollationSource};
use crate::stats::BakeStats;
use crate::weights::{
    format_elements, CollationElement, CompactCode, FractionalElement, Level, TableEntry,
};


/// запечённая строка таблицы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakedEntry
{
    pub codes: Vec<u32>,
    /// исходные элементы сопоставления
    pub raw: Vec<CollationElement>,
    /// сжатые элементы, пара вычисляемых весов заменяется одним элементом
    pub elements: Vec<FractionalElement>,
}

/// таблица дробных весов
pub struct FractionalTable<'a>
{
    pub used: UsedWeights,
    pub gaps: GapReservation,
    pub primary: PrimaryCompaction,
    pub secondary: SecondaryCompaction,
    pub tertiary: TertiaryCompaction,
    pub entries: Vec<BakedEntry>,
    pub stats: BakeStats,
    trailing_primary_start: u16,
    source: &'a dyn ReferenceCollationSource,
}

impl<'a> FractionalTable<'a>
{
    /// сканирование исходной таблицы, сжатие весов всех уровней, запекание строк
    pub fn build(
        source: &'a dyn ReferenceCollationSource,
        characters: &dyn CharacterDatabase,
        config: &BakeConfig,
    ) -> Result<Self>
    {
        let mut used = UsedWeights::scan(source)?;

        for &weight in config.secondary.extra_used.iter() {
            if !used.contains(Level::Secondary, weight) {
                log::debug!("extra secondary {:04X}", weight);
                used.insert(Level::Secondary, weight);
            }
        }

        let gaps = GapReservation::build(source, characters, &config.primary);
        let primary = PrimaryCompaction::build(
            used.get(Level::Primary),
            &gaps,
            config.primary.step,
            config.primary.widen,
        )?;
        let secondary = SecondaryCompaction::build(used.get(Level::Secondary), &config.secondary)?;
        let tertiary = TertiaryCompaction::new(&config.tertiary);

        let mut table = Self {
            used,
            gaps,
            primary,
            secondary,
            tertiary,
            entries: vec![],
            stats: BakeStats::new(),
            trailing_primary_start: config.trailing_primary_start,
            source,
        };

        table.bake_entries()?;

        Ok(table)
    }

    /// запечь все строки исходной таблицы
    fn bake_entries(&mut self) -> Result<()>
    {
        let mut entries = Vec::with_capacity(self.source.entries().len());
        let mut stats = BakeStats::new();

        for entry in self.source.entries() {
            let elements = self.compact_elements(&entry.elements)?;

            let description = format!(
                "{} => {}",
                format_elements(&entry.elements),
                elements.iter().map(|e| e.format()).collect::<String>()
            );

            let width = elements.first().map(|e| e.primary.len()).unwrap_or(0);

            stats
                .touch(self.category(entry, &elements))
                .inc(&entry.codes, width, description);

            entries.push(BakedEntry {
                codes: entry.codes.clone(),
                raw: entry.elements.clone(),
                elements,
            });
        }

        log::info!("baked {} entries", entries.len());

        self.entries = entries;
        self.stats = stats;

        Ok(())
    }

    /// группа строки для статистики
    fn category(&self, entry: &TableEntry, elements: &[FractionalElement]) -> &'static str
    {
        let first = entry.elements.first().copied().unwrap_or_default();

        if entry.codes.len() > 1 {
            return "последовательности кодпоинтов";
        }

        if elements.iter().any(|e| e.is_implicit) {
            return "вычисляемые веса";
        }

        if elements.iter().all(|e| e.primary.is_absent()) {
            return "игнорируемые";
        }

        if self.source.is_variable(&first) {
            return "переменные веса";
        }

        if self.is_trailing(first.primary) {
            return "хвостовые веса";
        }

        match elements.len() {
            1 => "одинарные веса",
            _ => "расширения",
        }
    }

    /// сжатый элемент сопоставления (не из пары вычисляемых весов)
    pub fn compact(&self, element: &CollationElement) -> Result<FractionalElement>
    {
        Ok(FractionalElement {
            primary: self.primary.compact(element.primary)?,
            secondary: self.secondary.compact(element.secondary)?,
            tertiary: self.tertiary.compact(element.tertiary)?,
            is_implicit: false,
        })
    }

    /// сжатая цепочка элементов сопоставления
    ///
    /// пара вычисляемых весов [.AAAA.ssss.tttt][.BBBB.0000.0000] становится одним элементом с
    /// вычисляемым первичным весом кодпоинта и сжатыми вторичным и третичным весами первого элемента
    pub fn compact_elements(&self, elements: &[CollationElement]) -> Result<Vec<FractionalElement>>
    {
        let mut result = Vec::with_capacity(elements.len());
        let mut iter = elements.iter();

        while let Some(element) = iter.next() {
            if !self.source.is_implicit_lead(element.primary) {
                result.push(self.compact(element)?);
                continue;
            }

            let lead = element.primary;
            let trail = match iter.next() {
                Some(trail) => trail.primary,
                None => {
                    return Err(BakeError::TruncatedImplicit {
                        codes: format_elements(elements),
                        lead,
                    })
                }
            };

            let code = self
                .source
                .implicit_code_point(lead, trail)
                .ok_or(BakeError::UnmappedImplicit { lead, trail })?;

            result.push(FractionalElement {
                primary: self.implicit_primary(code)?,
                secondary: self.secondary.compact(element.secondary)?,
                tertiary: self.tertiary.compact(element.tertiary)?,
                is_implicit: true,
            });
        }

        Ok(result)
    }

    /// вычисляемый первичный вес кодпоинта
    pub fn implicit_primary(&self, code: u32) -> Result<CompactCode>
    {
        Ok(CompactCode::from_left_justified(implicit::implicit_primary(code)?))
    }

    /// исходный первичный вес относится к хвостовым
    pub fn is_trailing(&self, primary: u16) -> bool
    {
        primary >= self.trailing_primary_start
    }

    /// исходная таблица
    pub fn source(&self) -> &'a dyn ReferenceCollationSource
    {
        self.source
    }

    /// запечённая строка по кодпоинтам
    pub fn entry(&self, codes: &[u32]) -> Option<&BakedEntry>
    {
        self.entries.iter().find(|e| e.codes == codes)
    }
}
