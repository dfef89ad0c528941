use std::collections::{BTreeMap, BTreeSet};

use super::implicit::IMPLICIT_BASE_BYTE;
use super::{check_sequence, CompactWeight};
use crate::error::{BakeError, Result};
use crate::weights::{CompactCode, Level, COMMON};

pub use gaps::{GapKind, GapReservation};

mod gaps;


/// промежуток после одиночной буквы, запоминаемый для следующего веса
const SINGLE_BUMP: u32 = 0x40;
/// ширина обычных весов до перехода в 3-байтовую форму
const NARROW: usize = 2;
/// ширина обычных весов после перехода
const WIDE: usize = 3;
/// переход в 3-байтовую форму не выполняется
const NEVER_WIDE: u32 = u32::MAX;
/// ограничение старшего байта без перехода в 3-байтовую форму: любое значение байта
const ANY_LEAD: u32 = 0x100;

/// сжатые первичные веса
///
/// 2-байтовые веса: XX YY, где младший байт не принимает значений 00 ..= 04 и FF,
/// одиночные буквы получают XX 00 (т.е. 1 байт). старые чамо - на байт длиннее обычных весов.
/// когда 2-байтовых значений не хватает, чтобы остаться ниже вычисляемых весов (E0), веса
/// начиная с некоторого старшего байта записываются в форме XX YY ZZ
#[derive(Debug, Clone, Default)]
pub struct PrimaryCompaction
{
    values: BTreeMap<u16, CompactCode>,
    first_regular: Option<CompactCode>,
    first_wide: Option<u16>,
}

/// состояние прохода по исходным весам
#[derive(Debug, Clone, Copy)]
struct Accumulator
{
    /// текущее значение обычного веса
    subtotal: u32,
    /// ширина текущего значения в байтах
    width: usize,
    /// последнее выданное значение и его ширина в байтах
    last: (u32, usize),
    /// дополнительный промежуток для следующего веса
    bump_next: u32,
    /// переход в область непеременных весов уже выполнен
    regular: bool,
    /// старший байт, начиная с которого обычные веса получают 3-байтовую форму
    wide_from: u32,
    /// старший байт любого веса должен быть меньше этого значения
    lead_limit: u32,
}

impl Accumulator
{
    fn new(wide_from: u32, lead_limit: u32) -> Self
    {
        Self {
            subtotal: ((COMMON as u32) << 8) + COMMON as u32,
            width: NARROW,
            last: (0, NARROW),
            bump_next: 0,
            regular: false,
            wide_from,
            lead_limit,
        }
    }

    /// следующий вес: значение, его ширина и признак первого непеременного веса
    fn next(
        &mut self,
        raw: u16,
        kind: GapKind,
        above_variable: bool,
        step: u32,
    ) -> Result<(u32, usize, bool)>
    {
        let mut first_regular = false;

        if kind == GapKind::OldJamo {
            let width = self.width + 1;

            let value = match self.last {
                (last, last_width) if last_width == width => skip_forbidden(last + 3, width),
                _ => {
                    // промежуток после одиночной буквы сохраняется и перед старыми чамо
                    self.subtotal += step;
                    self.subtotal = match self.bump_next {
                        0 => skip_forbidden(self.subtotal, self.width),
                        _ => self.bumped(),
                    };

                    self.check_lead(raw, self.subtotal, self.width)?;

                    (self.subtotal << 8) + 0x10
                }
            };

            self.check_lead(raw, value, width)?;
            self.last = (value, width);

            return Ok((value, width, false));
        }

        self.subtotal += step;

        self.subtotal = match kind {
            GapKind::Single { widened } => {
                let mut value = (self.subtotal & !0xFF) + 0x100;

                if widened {
                    value += 0x200;
                }

                // между двумя одиночными буквами тоже должен оставаться промежуток
                if self.bump_next == SINGLE_BUMP {
                    value += 0x100;
                }

                self.bump_next = SINGLE_BUMP;

                skip_forbidden_above_low(value, self.width)
            }
            _ if above_variable && !self.regular => {
                let value = (self.subtotal & !0xFF) + 0x320 + self.bump_next;

                self.bump_next = 0;
                self.regular = true;
                first_regular = true;

                skip_forbidden_above_low(value, self.width)
            }
            _ if self.bump_next > 0 || kind == GapKind::ScriptFirst => self.bumped(),
            _ => skip_forbidden(self.subtotal, self.width),
        };

        // 2-байтовое значение продолжается третьим байтом
        if self.width == NARROW && self.subtotal >> 8 >= self.wide_from {
            self.subtotal = skip_forbidden((self.subtotal << 8) | COMMON as u32, WIDE);
            self.width = WIDE;
        }

        self.check_lead(raw, self.subtotal, self.width)?;
        self.last = (self.subtotal, self.width);

        Ok((self.subtotal, self.width, first_regular))
    }

    /// промежуток перед началом письменности или после одиночной буквы
    fn bumped(&mut self) -> u32
    {
        let value = ((self.subtotal + 0x20) & !0xFF) + 0x120 + self.bump_next;
        self.bump_next = 0;

        skip_forbidden_above_low(value, self.width)
    }

    fn check_lead(&self, raw: u16, value: u32, width: usize) -> Result<()>
    {
        let lead = value as u64 >> (8 * (width - 1));

        match lead < self.lead_limit as u64 {
            true => Ok(()),
            false => Err(BakeError::OutOfRange {
                level: Level::Primary,
                raw,
                value: format!("{:X}", value),
            }),
        }
    }
}

/// пропустить запрещённые значения незначимых (не старших) байт: 00 ..= 04 заменяются на 05,
/// FF - переносом в старший разряд
fn skip_forbidden(value: u32, width: usize) -> u32
{
    let mut value = value as u64;

    'check: loop {
        for position in (0 .. width - 1).rev() {
            let shift = 8 * position as u64;
            let byte = ((value >> shift) & 0xFF) as u8;

            if byte >= COMMON && byte != 0xFF {
                continue;
            }

            // старшие байты (с переносом, если было FF), текущий и младшие заполняются COMMON
            let mut high = value >> (shift + 8);

            if byte == 0xFF {
                high += 1;
            }

            value = (high << (shift + 8)) | common_fill(position + 1);

            continue 'check;
        }

        return value as u32;
    }
}

/// то же для всех байт, кроме младшего: он задаёт промежуток и может быть нулевым
fn skip_forbidden_above_low(value: u32, width: usize) -> u32
{
    (skip_forbidden(value >> 8, width - 1) << 8) | (value & 0xFF)
}

/// n байт со значением COMMON
fn common_fill(n: usize) -> u64
{
    (0 .. n).fold(0, |acc, _| (acc << 8) | COMMON as u64)
}

impl PrimaryCompaction
{
    /// сжать используемые исходные первичные веса (по возрастанию)
    ///
    /// widen: если 2-байтовых значений не хватает, чтобы все веса остались ниже вычисляемых,
    /// часть весов получает 3-байтовую форму. старший байт перехода подбирается сверху вниз, так
    /// что 2-байтовыми остаются как можно больше весов. без widen старшие байты ничем не
    /// ограничены и попадание в область вычисляемых весов выявляется при проверке таблицы
    pub fn build(used: &BTreeSet<u16>, gaps: &GapReservation, step: u32, widen: bool) -> Result<Self>
    {
        if !widen {
            let compaction = Self::fold(used, gaps, step, Accumulator::new(NEVER_WIDE, ANY_LEAD))?;
            compaction.report();

            return Ok(compaction);
        }

        let lead_limit = IMPLICIT_BASE_BYTE as u32;
        let mut result = Self::fold(used, gaps, step, Accumulator::new(NEVER_WIDE, lead_limit));
        let mut wide_from = lead_limit;

        while result.is_err() && wide_from > COMMON as u32 + 1 {
            wide_from -= 1;
            result = Self::fold(used, gaps, step, Accumulator::new(wide_from, lead_limit));
        }

        let compaction = result?;
        compaction.report();

        Ok(compaction)
    }

    /// один проход по весам с заданным состоянием
    fn fold(
        used: &BTreeSet<u16>,
        gaps: &GapReservation,
        step: u32,
        mut accumulator: Accumulator,
    ) -> Result<Self>
    {
        let mut values = BTreeMap::new();
        let mut first_regular = None;
        let mut first_wide = None;

        for &raw in used.iter().filter(|&&w| w != 0) {
            let kind = gaps.classify(raw);
            let last_width = accumulator.last.1;
            let was_wide = accumulator.width == WIDE;

            let (value, width, is_first_regular) =
                accumulator.next(raw, kind, raw > gaps.variable_high, step)?;

            let code = CompactCode::from_right_justified(value, width);

            if kind == GapKind::OldJamo && last_width != width {
                log::debug!("old jamo run starts at {:04X} => {}", raw, code.format());
            }

            if !was_wide && accumulator.width == WIDE {
                first_wide = Some(raw);
            }

            if is_first_regular {
                first_regular = Some(code);
            }

            values.insert(raw, code);
        }

        check_sequence(
            Level::Primary,
            values.iter().map(|(&raw, &code)| (raw, code)),
        )?;

        Ok(Self {
            values,
            first_regular,
            first_wide,
        })
    }

    fn report(&self)
    {
        log::info!(
            "primary: {} weights, last {}",
            self.values.len(),
            self.values
                .values()
                .last()
                .map(|c| c.format())
                .unwrap_or_default()
        );

        if let Some(raw) = self.first_wide {
            let lead = self.values.get(&raw).map(|c| c.lead_byte()).unwrap_or_default();

            log::info!("primary: 3-byte form from {:04X} (lead byte {:02X})", raw, lead);
        }
    }

    /// сжатый вес первого непеременного первичного веса
    pub fn first_regular(&self) -> Option<CompactCode>
    {
        self.first_regular
    }

    /// исходный вес, с которого обычные веса записываются 3 байтами
    pub fn first_wide(&self) -> Option<u16>
    {
        self.first_wide
    }

    /// количество сжатых весов
    pub fn len(&self) -> usize
    {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.values.is_empty()
    }

    /// пары (исходный вес, сжатый вес) по возрастанию
    pub fn iter(&self) -> impl Iterator<Item = (u16, CompactCode)> + '_
    {
        self.values.iter().map(|(&raw, &code)| (raw, code))
    }
}

impl CompactWeight for PrimaryCompaction
{
    fn level(&self) -> Level
    {
        Level::Primary
    }

    fn compact(&self, raw: u16) -> Result<CompactCode>
    {
        if raw == 0 {
            return Ok(CompactCode::ABSENT);
        }

        self.values
            .get(&raw)
            .copied()
            .ok_or(BakeError::UnknownWeight {
                level: self.level(),
                raw,
            })
    }
}
