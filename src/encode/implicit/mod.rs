// вычисляемые первичные веса в дробном виде
//
// кодпоинт переводится в порядковый номер, который записывается в смешанной системе счисления
// так, чтобы ни один байт не принимал значения 00, 01, 02:
//
//  - 3 байта: E0 xx yy 00, последний значащий байт чётный относительно 03 (промежуток в 1),
//  - 4 байта: E1 ..= E3 xx xx zz, последний байт кратен 21 относительно 03.
//
// все иероглифы основного блока получают общий первый байт, что позволяет сжимать ключи

use crate::error::{BakeError, Result};

pub mod raw;


/// запрещённые значения байт: 00, 01, 02
pub const BYTES_TO_AVOID: u32 = 3;
/// количество значений байта
pub const OTHER_COUNT: u32 = 256 - BYTES_TO_AVOID;
/// количество значений последнего байта 3-байтовой формы
pub const LAST_COUNT: u32 = OTHER_COUNT / 2;
/// количество значений последнего байта 4-байтовой формы
pub const LAST_COUNT2: u32 = OTHER_COUNT / 20;
/// количество первых байт 3-байтовой формы
pub const IMPLICIT_3BYTE_COUNT: u32 = 1;

pub const IMPLICIT_BASE_BYTE: u8 = 0xE0;
/// 1 первый байт для 3-байтовой формы и 3 для 4-байтовой
pub const IMPLICIT_LIMIT_BYTE: u8 = IMPLICIT_BASE_BYTE + 4;

/// первый порядковый номер, записываемый 4 байтами
pub const IMPLICIT_4BYTE_BOUNDARY: u32 = IMPLICIT_3BYTE_COUNT * OTHER_COUNT * LAST_COUNT;
pub const LAST_MULTIPLIER: u32 = OTHER_COUNT / LAST_COUNT;
pub const LAST2_MULTIPLIER: u32 = OTHER_COUNT / LAST_COUNT2;

pub const IMPLICIT_BASE_3BYTE: u32 = ((IMPLICIT_BASE_BYTE as u32) << 24) + 0x030300;
pub const IMPLICIT_BASE_4BYTE: u32 =
    ((IMPLICIT_BASE_BYTE as u32 + IMPLICIT_3BYTE_COUNT) << 24) + 0x030303;

/// CJK Unified Ideographs
pub const CJK_BASE: u32 = 0x4E00;
pub const CJK_LIMIT: u32 = 0xA000;
/// используемая часть CJK Compatibility Ideographs
pub const CJK_COMPAT_USED_BASE: u32 = 0xFA0E;
pub const CJK_COMPAT_USED_LIMIT: u32 = 0xFA30;
/// CJK Unified Ideographs Extension A
pub const CJK_A_BASE: u32 = 0x3400;
pub const CJK_A_LIMIT: u32 = 0x4DC0;
/// CJK Unified Ideographs Extension B
pub const CJK_B_BASE: u32 = 0x20000;
pub const CJK_B_LIMIT: u32 = 0x2A6E0;

/// смещение прочих кодпоинтов, помещающее их после всех иероглифов
pub const OTHER_OFFSET: u32 = 0x110000;

const CJK_COUNT: u32 = CJK_LIMIT - CJK_BASE;
const CJK_COMPAT_USED_COUNT: u32 = CJK_COMPAT_USED_LIMIT - CJK_COMPAT_USED_BASE;
const CJK_A_COUNT: u32 = CJK_A_LIMIT - CJK_A_BASE;

/// группа кодпоинтов, внутри которой вычисляемые веса возрастают вместе с кодпоинтами
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Batch
{
    /// основной блок и используемые иероглифы совместимости
    Cjk,
    /// расширения A и B
    CjkExtension,
    /// все остальные кодпоинты
    Other,
}

impl Batch
{
    pub const ALL: [Batch; 3] = [Batch::Cjk, Batch::CjkExtension, Batch::Other];
}

/// CJK Unified Ideographs или используемые иероглифы совместимости
#[inline(always)]
pub fn is_cjk(code: u32) -> bool
{
    (CJK_BASE .. CJK_LIMIT).contains(&code)
        || (CJK_COMPAT_USED_BASE .. CJK_COMPAT_USED_LIMIT).contains(&code)
}

/// расширения A, B
#[inline(always)]
pub fn is_cjk_extension(code: u32) -> bool
{
    (CJK_A_BASE .. CJK_A_LIMIT).contains(&code) || (CJK_B_BASE .. CJK_B_LIMIT).contains(&code)
}

/// группа кодпоинта
pub fn batch(code: u32) -> Batch
{
    match code {
        code if is_cjk(code) => Batch::Cjk,
        code if is_cjk_extension(code) => Batch::CjkExtension,
        _ => Batch::Other,
    }
}

/// основной блок идёт первым, за ним - иероглифы совместимости, затем расширение A
///
/// значения вне этих блоков (в т.ч. расширение B и смещённые прочие кодпоинты) лежат выше
/// блока совместимости и сдвигаются вместе с ним
fn swap_cjk(i: u32) -> u32
{
    if i >= CJK_COMPAT_USED_BASE {
        return i - CJK_COMPAT_USED_BASE + CJK_COUNT;
    }

    if i >= CJK_BASE {
        return i - CJK_BASE;
    }

    i - CJK_A_BASE + CJK_COUNT + CJK_COMPAT_USED_COUNT
}

/// порядковый номер кодпоинта
pub fn ordinal(code: u32) -> Result<u32>
{
    if code > 0x10FFFF {
        return Err(BakeError::InvalidCodePoint(code));
    }

    let code = match is_cjk(code) || is_cjk_extension(code) {
        true => code,
        false => code + OTHER_OFFSET,
    };

    Ok(swap_cjk(code))
}

/// кодпоинт по порядковому номеру
pub fn code_point(ordinal: u32) -> Result<u32>
{
    if ordinal < CJK_COUNT {
        return Ok(ordinal + CJK_BASE);
    }

    if ordinal < CJK_COUNT + CJK_COMPAT_USED_COUNT {
        return Ok(ordinal - CJK_COUNT + CJK_COMPAT_USED_BASE);
    }

    if ordinal < CJK_COUNT + CJK_COMPAT_USED_COUNT + CJK_A_COUNT {
        return Ok(ordinal - CJK_COUNT - CJK_COMPAT_USED_COUNT + CJK_A_BASE);
    }

    let i = ordinal + CJK_COMPAT_USED_BASE - CJK_COUNT;

    if (CJK_B_BASE .. CJK_B_LIMIT).contains(&i) {
        return Ok(i);
    }

    if i >= OTHER_OFFSET {
        let code = i - OTHER_OFFSET;

        if code <= 0x10FFFF && !is_cjk(code) && !is_cjk_extension(code) {
            return Ok(code);
        }
    }

    Err(BakeError::InvalidOrdinal(ordinal))
}

/// первичный вес (выровненный по старшему байту) по порядковому номеру
pub fn encode_ordinal(n: u32) -> u32
{
    if n < IMPLICIT_4BYTE_BOUNDARY {
        let last0 = n % LAST_COUNT;
        let last1 = (n / LAST_COUNT) % OTHER_COUNT;
        let last2 = n / LAST_COUNT / OTHER_COUNT;

        return IMPLICIT_BASE_3BYTE + (last2 << 24) + (last1 << 16) + ((last0 * LAST_MULTIPLIER) << 8);
    }

    let n = n - IMPLICIT_4BYTE_BOUNDARY;

    let last0 = n % LAST_COUNT2;
    let last1 = (n / LAST_COUNT2) % OTHER_COUNT;
    let last2 = (n / LAST_COUNT2 / OTHER_COUNT) % OTHER_COUNT;
    let last3 = n / LAST_COUNT2 / OTHER_COUNT / OTHER_COUNT;

    IMPLICIT_BASE_4BYTE + (last3 << 24) + (last2 << 16) + (last1 << 8) + last0 * LAST2_MULTIPLIER
}

/// порядковый номер по первичному весу
pub fn decode_ordinal(primary: u32) -> Result<u32>
{
    let [b0, b1, b2, b3] = primary.to_be_bytes();

    if !(IMPLICIT_BASE_BYTE .. IMPLICIT_LIMIT_BYTE).contains(&b0) {
        return Err(BakeError::NotImplicit(primary));
    }

    let lead = (b0 - IMPLICIT_BASE_BYTE) as u32;
    let digit = |b: u8| match (b as u32) < BYTES_TO_AVOID {
        true => Err(BakeError::NotImplicit(primary)),
        false => Ok(b as u32 - BYTES_TO_AVOID),
    };

    // 3-байтовая форма
    if lead < IMPLICIT_3BYTE_COUNT {
        let last1 = digit(b1)?;
        let last0 = digit(b2)?;

        if b3 != 0 || last0 % LAST_MULTIPLIER != 0 || last0 / LAST_MULTIPLIER >= LAST_COUNT {
            return Err(BakeError::NotImplicit(primary));
        }

        return Ok((lead * OTHER_COUNT + last1) * LAST_COUNT + last0 / LAST_MULTIPLIER);
    }

    // 4-байтовая форма
    let lead = lead - IMPLICIT_3BYTE_COUNT;
    let last2 = digit(b1)?;
    let last1 = digit(b2)?;
    let last0 = digit(b3)?;

    if last0 % LAST2_MULTIPLIER != 0 || last0 / LAST2_MULTIPLIER >= LAST_COUNT2 {
        return Err(BakeError::NotImplicit(primary));
    }

    let n = ((lead * OTHER_COUNT + last2) * OTHER_COUNT + last1) * LAST_COUNT2
        + last0 / LAST2_MULTIPLIER;

    Ok(n + IMPLICIT_4BYTE_BOUNDARY)
}

/// вычисляемый первичный вес кодпоинта
pub fn implicit_primary(code: u32) -> Result<u32>
{
    Ok(encode_ordinal(ordinal(code)?))
}

/// кодпоинт по вычисляемому первичному весу
pub fn implicit_code_point(primary: u32) -> Result<u32>
{
    code_point(decode_ordinal(primary)?)
}

/// значения байт вычисляемого веса допустимы
fn has_legal_bytes(primary: u32) -> bool
{
    let [b0, b1, b2, b3] = primary.to_be_bytes();

    (IMPLICIT_BASE_BYTE .. IMPLICIT_LIMIT_BYTE).contains(&b0)
        && b1 >= 3
        && b2 >= 3
        && b3 != 1
        && b3 != 2
}

/// проверка вычисляемых весов на всём диапазоне кодпоинтов: строгое возрастание внутри групп и
/// при переходе от одной группы к следующей, допустимые значения байт, обратимость
pub fn check_implicit() -> Result<()>
{
    log::info!("implicit primaries: checking");

    let mut previous: Option<(u32, u32)> = None;

    for batch_kind in Batch::ALL {
        for code in (0 ..= 0x10FFFF).filter(|&c| batch(c) == batch_kind) {
            let primary = implicit_primary(code)?;

            if let Some((previous_code, previous_primary)) = previous {
                if primary <= previous_primary {
                    return Err(BakeError::ImplicitOrder {
                        previous_code,
                        previous: previous_primary,
                        code,
                        current: primary,
                    });
                }
            }

            if !has_legal_bytes(primary) {
                return Err(BakeError::ImplicitByte { code, primary });
            }

            let decoded = implicit_code_point(primary)?;

            if decoded != code {
                return Err(BakeError::ImplicitRoundTrip {
                    code,
                    primary,
                    decoded,
                });
            }

            previous = Some((code, primary));
        }

        log::debug!(
            "implicit primaries: {:?} done, last {:08X}",
            batch_kind,
            previous.map(|(_, p)| p).unwrap_or(0)
        );
    }

    log::info!("implicit primaries: ok");

    Ok(())
}
