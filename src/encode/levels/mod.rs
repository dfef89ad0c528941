use std::collections::{BTreeMap, BTreeSet};

use super::implicit::LAST_COUNT;
use super::{check_sequence, CompactWeight};
use crate::config::{SecondaryConfig, TertiaryConfig};
use crate::error::{BakeError, Result};
use crate::weights::{CompactCode, Level, COMMON};

#[cfg(test)]
mod tests;

/// наименьший старший байт вторичного веса после COMMON
pub const FIRST_SECONDARY_TOP: u32 = 0x80 + COMMON as u32 + 2;
/// наибольший значащий байт вторичного веса
pub const MAX_SECONDARY_BOTTOM: u32 = 0xFD;
/// третичные веса меньше этого значения (без бита регистра)
pub const TERTIARY_LIMIT: u8 = 0x3E;
/// бит регистра третичного веса
pub const CASE_BIT: u8 = 0x80;

/// последний ранг, проверяемый при самопроверке вторичных весов
const SECONDARY_LAYOUT_CHECK: u32 = 0x16E;
/// последний исходный вес, проверяемый при самопроверке третичных весов
const TERTIARY_LAYOUT_CHECK: u16 = 0x1E;

/// вторичный вес по рангу исходного веса: (старший байт << 8) | младший байт
///
/// ранг 0 - отсутствующий вес, ранг 1 - COMMON, далее нечётные значения начиная с 87,
/// после double_start - 2 байта. gaps - пары (ранг, ширина): всем рангам выше заданного
/// добавляется промежуток указанной ширины
pub fn compact_secondary_rank(rank: u32, gaps: &[(u32, u32)], double_start: u32) -> u32
{
    let mut top = rank;
    let mut bottom = 0;

    match rank {
        0 => (),
        1 => top = COMMON as u32,
        _ => {
            // промежуток между соседними значениями
            top = top * 2 + FIRST_SECONDARY_TOP - 4;

            if top > double_start {
                top = (top - double_start) * 4;

                for &(after, width) in gaps {
                    if rank > after {
                        top += width;
                    }
                }

                bottom = (top % LAST_COUNT) * 2 + COMMON as u32;
                top = top / LAST_COUNT + double_start;
            }
        }
    }

    (top << 8) | bottom
}

/// вторичный вес попадает в допустимый диапазон
pub fn is_legal_secondary(value: u32, max_lead: u8) -> bool
{
    let top = value >> 8;
    let bottom = value & 0xFF;
    let common = COMMON as u32;

    let bad_top = top != 0 && (top < common || top > max_lead as u32);
    let bad_gap = top > common && top < FIRST_SECONDARY_TOP;
    let bad_bottom = bottom != 0 && (bottom % 2 == 0 || bottom < common || bottom > MAX_SECONDARY_BOTTOM);
    let bad_single = bottom == 0 && top != 0 && top % 2 == 0;

    !(bad_top || bad_gap || bad_bottom || bad_single)
}

/// сжатые вторичные веса
#[derive(Debug, Clone)]
pub struct SecondaryCompaction
{
    ranks: BTreeMap<u16, u32>,
    gaps: Vec<(u32, u32)>,
    double_start: u32,
}

impl SecondaryCompaction
{
    /// ранжировать используемые исходные веса и проверить результат
    pub fn build(used: &BTreeSet<u16>, config: &SecondaryConfig) -> Result<Self>
    {
        let ranks: BTreeMap<u16, u32> = used
            .iter()
            .filter(|&&w| w != 0)
            .enumerate()
            .map(|(i, &w)| (w, i as u32 + 1))
            .collect();

        // промежуток - после наибольшего используемого веса, не превосходящего заданный
        let mut gaps = vec![];

        for gap in config.gaps.iter() {
            match ranks.range(..= gap.after).next_back() {
                Some((&weight, &rank)) => {
                    log::debug!(
                        "secondary gap {} after {:04X} (rank {})",
                        gap.width,
                        weight,
                        rank
                    );
                    gaps.push((rank, gap.width));
                }
                None => log::warn!("secondary gap after {:04X}: no such weight", gap.after),
            }
        }

        let compaction = Self {
            ranks,
            gaps,
            double_start: config.double_start as u32,
        };

        for (&raw, &rank) in compaction.ranks.iter() {
            let value = compact_secondary_rank(rank, &compaction.gaps, compaction.double_start);

            if !is_legal_secondary(value, config.max_lead) {
                return Err(BakeError::OutOfRange {
                    level: Level::Secondary,
                    raw,
                    value: format!("{:04X}", value),
                });
            }
        }

        check_sequence(
            Level::Secondary,
            compaction
                .ranks
                .keys()
                .map(|&raw| (raw, compaction.code(raw).unwrap_or_default())),
        )?;

        log::info!(
            "secondary: {} weights, {} gaps",
            compaction.ranks.len(),
            compaction.gaps.len()
        );

        Ok(compaction)
    }

    /// ранг исходного веса
    pub fn rank(&self, raw: u16) -> Option<u32>
    {
        match raw {
            0 => Some(0),
            _ => self.ranks.get(&raw).copied(),
        }
    }

    fn code(&self, raw: u16) -> Option<CompactCode>
    {
        let rank = self.rank(raw)?;

        Some(CompactCode::from_right_justified(
            compact_secondary_rank(rank, &self.gaps, self.double_start),
            2,
        ))
    }

    /// количество сжатых весов
    pub fn len(&self) -> usize
    {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.ranks.is_empty()
    }
}

impl CompactWeight for SecondaryCompaction
{
    fn level(&self) -> Level
    {
        Level::Secondary
    }

    fn compact(&self, raw: u16) -> Result<CompactCode>
    {
        self.code(raw).ok_or(BakeError::UnknownWeight {
            level: self.level(),
            raw,
        })
    }
}

/// сжатые третичные веса - не зависят от используемых значений
#[derive(Debug, Clone)]
pub struct TertiaryCompaction
{
    upper: BTreeSet<u16>,
    illegal: BTreeSet<u16>,
}

impl TertiaryCompaction
{
    pub fn new(config: &TertiaryConfig) -> Self
    {
        Self {
            upper: config.upper.iter().copied().collect(),
            illegal: config.illegal.iter().copied().collect(),
        }
    }

    /// сжатый третичный вес (байт, включая бит регистра)
    pub fn value(&self, raw: u16) -> Result<u8>
    {
        if raw == 0 {
            return Ok(0);
        }

        if self.illegal.contains(&raw) {
            return Err(BakeError::IllegalWeight {
                level: Level::Tertiary,
                raw,
            });
        }

        // 2 -> COMMON, значение 7 не используется и пропускается
        let y = match raw < 7 {
            true => raw as u32,
            false => raw as u32 - 1,
        };

        let value = 2 * y.saturating_sub(2) + COMMON as u32;

        if raw < 2 || value >= TERTIARY_LIMIT as u32 {
            return Err(BakeError::OutOfRange {
                level: Level::Tertiary,
                raw,
                value: format!("{:02X}", value),
            });
        }

        let mut value = value as u8;

        if self.upper.contains(&raw) {
            value |= CASE_BIT;
        }

        Ok(value)
    }
}

impl CompactWeight for TertiaryCompaction
{
    fn level(&self) -> Level
    {
        Level::Tertiary
    }

    fn compact(&self, raw: u16) -> Result<CompactCode>
    {
        Ok(CompactCode::from_right_justified(self.value(raw)? as u32, 1))
    }
}

/// самопроверка раскладки вторичных и третичных весов без учёта промежутков
pub fn check_layout(secondary: &SecondaryConfig, tertiary: &TertiaryConfig) -> Result<()>
{
    let mut last = None;

    for rank in 0 ..= SECONDARY_LAYOUT_CHECK {
        let value = compact_secondary_rank(rank, &[], secondary.double_start as u32);

        if let Some(last) = last {
            if value <= last {
                return Err(BakeError::Unordered {
                    level: Level::Secondary,
                    raw: rank as u16,
                    previous: format!("{:04X}", last),
                    current: format!("{:04X}", value),
                });
            }
        }

        if !is_legal_secondary(value, secondary.max_lead) {
            return Err(BakeError::OutOfRange {
                level: Level::Secondary,
                raw: rank as u16,
                value: format!("{:04X}", value),
            });
        }

        last = Some(value);
    }

    let compaction = TertiaryCompaction::new(tertiary);
    let mut last = None;

    for raw in 0 ..= TERTIARY_LAYOUT_CHECK {
        if compaction.illegal.contains(&raw) {
            continue;
        }

        // без бита регистра
        let value = compaction.value(raw)? & !CASE_BIT;

        if let Some(last) = last {
            if value <= last {
                return Err(BakeError::Unordered {
                    level: Level::Tertiary,
                    raw,
                    previous: format!("{:02X}", last),
                    current: format!("{:02X}", value),
                });
            }
        }

        if value != 0 && (value % 2 == 0 || value < COMMON || value >= TERTIARY_LIMIT) {
            return Err(BakeError::OutOfRange {
                level: Level::Tertiary,
                raw,
                value: format!("{:02X}", value),
            });
        }

        last = Some(value);
    }

    log::info!("secondary / tertiary layout: ok");

    Ok(())
}
