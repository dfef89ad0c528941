use std::collections::BTreeSet;

use crate::error::{BakeError, Result};
use crate::source::ReferenceCollationSource;
use crate::weights::{format_codes, Level};

#[cfg(test)]
mod tests;

/// используемые в таблице исходные веса по уровням
///
/// нулевой вес не хранится. пары вычисляемых весов не дают первичных весов, но вторичный и
/// третичный веса первого элемента пары учитываются
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedWeights
{
    primary: BTreeSet<u16>,
    secondary: BTreeSet<u16>,
    tertiary: BTreeSet<u16>,
}

impl UsedWeights
{
    /// один проход по строкам исходной таблицы
    pub fn scan(source: &dyn ReferenceCollationSource) -> Result<Self>
    {
        let mut used = Self::default();
        let mut implicit_pairs = 0;

        for entry in source.entries() {
            let mut elements = entry.elements.iter();

            while let Some(element) = elements.next() {
                if source.is_implicit_lead(element.primary) {
                    // второй элемент пары - младшие биты кодпоинта, а не вес
                    if elements.next().is_none() {
                        return Err(BakeError::TruncatedImplicit {
                            codes: format_codes(&entry.codes),
                            lead: element.primary,
                        });
                    }

                    implicit_pairs += 1;
                } else {
                    used.insert(Level::Primary, element.primary);
                }

                used.insert(Level::Secondary, element.secondary);
                used.insert(Level::Tertiary, element.tertiary);
            }
        }

        log::info!(
            "used weights: {} primary, {} secondary, {} tertiary, {} implicit pairs",
            used.primary.len(),
            used.secondary.len(),
            used.tertiary.len(),
            implicit_pairs
        );

        Ok(used)
    }

    /// используемые веса уровня
    pub fn get(&self, level: Level) -> &BTreeSet<u16>
    {
        match level {
            Level::Primary => &self.primary,
            Level::Secondary => &self.secondary,
            Level::Tertiary => &self.tertiary,
        }
    }

    /// добавить вес (нулевой вес игнорируется)
    pub fn insert(&mut self, level: Level, weight: u16)
    {
        if weight == 0 {
            return;
        }

        match level {
            Level::Primary => self.primary.insert(weight),
            Level::Secondary => self.secondary.insert(weight),
            Level::Tertiary => self.tertiary.insert(weight),
        };
    }

    /// вес используется
    pub fn contains(&self, level: Level, weight: u16) -> bool
    {
        self.get(level).contains(&weight)
    }
}
