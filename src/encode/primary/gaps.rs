use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use crate::config::PrimaryConfig;
use crate::source::{Category, CharacterDatabase, ReferenceCollationSource};

/// чем является исходный первичный вес с точки зрения резервирования промежутков
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GapKind
{
    /// старые чамо хангыль - 3-байтовая форма
    OldJamo,
    /// одиночная буква - промежуток в целый байт
    Single
    {
        widened: bool
    },
    /// наименьший вес письменности
    ScriptFirst,
    /// без особенностей
    Plain,
}

/// места, где при сжатии первичных весов оставляются промежутки
///
/// вычисляется один раз перед сжатием и далее не изменяется
#[derive(Debug, Clone, Default)]
pub struct GapReservation
{
    /// наибольший переменный первичный вес
    pub variable_high: u16,
    /// веса одиночных букв
    pub singles: BTreeSet<u16>,
    /// вес одиночной буквы с дополнительным промежутком
    pub widened_single: Option<u16>,
    /// наименьшие веса письменностей
    pub script_firsts: BTreeSet<u16>,
    /// диапазоны весов старых чамо
    pub old_jamo: Vec<RangeInclusive<u16>>,
}

impl GapReservation
{
    /// вычислить промежутки по исходной таблице и свойствам символов
    pub fn build(
        source: &dyn ReferenceCollationSource,
        characters: &dyn CharacterDatabase,
        config: &PrimaryConfig,
    ) -> Self
    {
        let variable_high = source.variable_high();
        let primary_of = |code: u32| {
            source
                .collation_elements(code)
                .and_then(|elements| elements.first())
                .map(|element| element.primary)
                .filter(|&primary| primary != 0)
        };

        // одиночные буквы

        let mut singles = BTreeSet::new();

        for &letter in config.singles.iter() {
            match primary_of(letter as u32) {
                Some(primary) => {
                    singles.insert(primary);
                }
                None => log::warn!("single {:?} has no explicit primary", letter),
            }
        }

        let widened_single = config
            .widened_single
            .and_then(|letter| primary_of(letter as u32));

        // наименьшие веса письменностей

        let mut scripts: BTreeMap<u16, (u16, u32)> = BTreeMap::new();

        for code in 0 .. 0xFFFF {
            let primary = match primary_of(code) {
                Some(primary) => primary,
                None => continue,
            };

            if primary < variable_high || source.is_implicit_lead(primary) {
                continue;
            }

            let like = config
                .script_overrides
                .iter()
                .find(|o| o.code == code)
                .map(|o| o.like)
                .unwrap_or(code);

            let script = match characters.script(like) {
                Some(script) => script,
                None => continue,
            };

            let category = characters.category(like);

            if !category.is_letter() || category == Category::ModifierLetter {
                continue;
            }

            let first = scripts.entry(script).or_insert((primary, code));

            if primary < first.0 {
                *first = (primary, code);
            }
        }

        for (script, (primary, code)) in scripts.iter() {
            log::debug!(
                "script {}: first primary {:04X} (U+{:04X})",
                script,
                primary,
                code
            );
        }

        let mut script_firsts: BTreeSet<u16> = scripts.values().map(|&(p, _)| p).collect();
        script_firsts.extend(config.fixed_script_firsts.iter().copied());

        // старые чамо

        let anchors: Vec<Option<u16>> = config
            .old_jamo_anchors
            .iter()
            .map(|&code| {
                let primary = primary_of(code);

                if primary.is_none() {
                    log::warn!("old jamo anchor U+{:04X} has no explicit primary", code);
                }

                primary
            })
            .collect();

        let old_jamo = old_jamo_ranges(&anchors);

        log::info!(
            "gaps: {} singles, {} script firsts, {} old jamo ranges",
            singles.len(),
            script_firsts.len(),
            old_jamo.len()
        );

        Self {
            variable_high,
            singles,
            widened_single,
            script_firsts,
            old_jamo,
        }
    }

    /// классификация исходного первичного веса
    pub fn classify(&self, primary: u16) -> GapKind
    {
        if self.old_jamo.iter().any(|range| range.contains(&primary)) {
            return GapKind::OldJamo;
        }

        if self.singles.contains(&primary) {
            return GapKind::Single {
                widened: self.widened_single == Some(primary),
            };
        }

        if self.script_firsts.contains(&primary) {
            return GapKind::ScriptFirst;
        }

        GapKind::Plain
    }
}

/// по весам опорных кодпоинтов: (1, 2) и (3, 4) без границ, (5, 6] - включая верхнюю
fn old_jamo_ranges(anchors: &[Option<u16>]) -> Vec<RangeInclusive<u16>>
{
    let mut ranges = vec![];

    for (i, pair) in anchors.chunks(2).enumerate() {
        if let [Some(low), Some(high)] = *pair {
            let last = match i {
                2 => high,
                _ => high.saturating_sub(1),
            };

            if low < last {
                ranges.push(low + 1 ..= last);
            }
        }
    }

    ranges
}
