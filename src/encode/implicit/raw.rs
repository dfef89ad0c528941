// вычисляемые веса исходной таблицы
//
// см. https://www.unicode.org/reports/tr10/tr10-49.html#Implicit_Weights
//
// кодпоинты без явно заданных весов получают пару элементов сопоставления:
// [.AAAA.0020.0002][.BBBB.0000.0000], где AAAA - базовое значение для группы кодпоинтов
// (+ старшие биты кодпоинта), BBBB - младшие 15 бит кодпоинта (или смещение в блоке) с
// установленным старшим битом
//
// в таблице весов явно записаны иероглифы из блока совместимости, относящиеся к основным -
// их пары вычисляются по той же формуле, поэтому здесь они считаются основными

/// базовые значения первого веса пары
pub const BASE_TANGUT: u16 = 0xFB00;
pub const BASE_NUSHU: u16 = 0xFB01;
pub const BASE_KHITAN: u16 = 0xFB02;
pub const BASE_HAN_CORE: u16 = 0xFB40;
pub const BASE_HAN_OTHER: u16 = 0xFB80;
pub const BASE_UNASSIGNED: u16 = 0xFBC0;

/// пара исходных вычисляемых весов кодпоинта: первичные веса первого и второго элементов
pub fn raw_implicit_weights(code: u32) -> [u16; 2]
{
    let high = (code >> 15) as u16;
    let low = ((code & 0x7FFF) | 0x8000) as u16;

    // сначала проверим хань

    if is_han_core(code) {
        return [BASE_HAN_CORE + high, low];
    }

    if is_han_other(code) {
        return [BASE_HAN_OTHER + high, low];
    }

    // вымершие письменности

    if is_tangut(code) {
        return [BASE_TANGUT, ((code - 0x17000) | 0x8000) as u16];
    }

    if is_nushu(code) {
        return [BASE_NUSHU, ((code - 0x1B170) | 0x8000) as u16];
    }

    if is_khitan(code) {
        return [BASE_KHITAN, ((code - 0x18B00) | 0x8000) as u16];
    }

    // любой другой кодпоинт
    [BASE_UNASSIGNED + high, low]
}

/// первичный вес - первый вес пары вычисляемых весов
pub fn is_implicit_lead(primary: u16) -> bool
{
    (BASE_TANGUT ..= BASE_KHITAN).contains(&primary) || (BASE_HAN_CORE ..= 0xFBFF).contains(&primary)
}

/// кодпоинт по паре вычисляемых весов
pub fn implicit_code_point(lead: u16, trail: u16) -> Option<u32>
{
    if trail & 0x8000 == 0 {
        return None;
    }

    let offset = (trail & 0x7FFF) as u32;

    let code = match lead {
        BASE_TANGUT => offset + 0x17000,
        BASE_NUSHU => offset + 0x1B170,
        BASE_KHITAN => offset + 0x18B00,
        BASE_HAN_CORE ..= 0xFB7F => (((lead - BASE_HAN_CORE) as u32) << 15) | offset,
        BASE_HAN_OTHER ..= 0xFBBF => (((lead - BASE_HAN_OTHER) as u32) << 15) | offset,
        BASE_UNASSIGNED ..= 0xFBFF => (((lead - BASE_UNASSIGNED) as u32) << 15) | offset,
        _ => return None,
    };

    match code <= 0x10FFFF {
        true => Some(code),
        false => None,
    }
}

/// Тангутское письмо (вымершая письменность)
/// https://ru.wikipedia.org/wiki/Тангутское_письмо
///
/// Tangut:
///     назначенные: U+17000 ..= U+187F7
///     блок: U+17000 ..= U+187FF
/// Tangut Components Range:
///     U+18800 ..= U+18AFF
/// Tangut Supplement:
///     назначенные: U+18D00 ..= U+18D08,
///     блок: U+18D00 ..= U+18D7F
///
/// TR10: Assigned code points in Block=Tangut OR Block=Tangut_Components OR Block=Tangut_Supplement
pub fn is_tangut(code: u32) -> bool
{
    [
        (0x17000 ..= 0x187F7),
        (0x18800 ..= 0x18AFF),
        (0x18D00 ..= 0x18D08),
    ]
    .iter()
    .any(|range| range.contains(&code))
}

/// Нюй-шу
///
/// TR10: Assigned code points in Block=Nushu
pub fn is_nushu(code: u32) -> bool
{
    (0x1B170 ..= 0x1B2FB).contains(&code)
}

/// Киданьская письменность
///
/// TR10: Assigned code points in Block=Khitan_Small_Script
pub fn is_khitan(code: u32) -> bool
{
    (0x18B00 ..= 0x18CD5).contains(&code)
}

/// Основные иероглифы унификации Хань: U+4E00 ..= U+9FFF и 12 иероглифов блока совместимости
///
/// TR10: Unified_Ideograph=True AND ((Block=CJK_Unified_Ideograph) OR (Block=CJK_Compatibility_Ideographs))
pub fn is_han_core(code: u32) -> bool
{
    (0x4E00 ..= 0x9FFF).contains(&code)
        || [
            0xFA0E, 0xFA0F, 0xFA11, 0xFA13, 0xFA14, 0xFA1F, 0xFA21, 0xFA23, 0xFA24, 0xFA27, 0xFA28,
            0xFA29,
        ]
        .contains(&code)
}

/// Иероглифы унификации Хань (прочие): расширения A ..= H
///
/// TR10: Unified_Ideograph=True AND NOT ((Block=CJK_Unified_Ideograph) OR (Block=CJK_Compatibility_Ideographs))
pub fn is_han_other(code: u32) -> bool
{
    [
        (0x3400 ..= 0x4DBF),
        (0x20000 ..= 0x2A6DF),
        (0x2A700 ..= 0x2B739),
        (0x2B740 ..= 0x2B81D),
        (0x2B820 ..= 0x2CEA1),
        (0x2CEB0 ..= 0x2EBE0),
        (0x2EBF0 ..= 0x2EE5D),
        (0x30000 ..= 0x3134A),
        (0x31350 ..= 0x323AF),
    ]
    .iter()
    .any(|range| range.contains(&code))
}
