use core::fmt::Debug;

pub use compact::{CompactCode, FractionalElement};

mod compact;

#[cfg(test)]
mod tests;

/// наименьшее значение незапрещённого байта веса
pub const COMMON: u8 = 0x05;

/// байт веса не может принимать значения 00, 01, 02 (отсутствие веса и служебные значения синтаксиса
/// правил) и FF (ограничитель)
#[inline(always)]
pub fn is_forbidden_byte(byte: u8) -> bool
{
    byte <= 0x02 || byte == 0xFF
}

/// уровень сравнения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level
{
    Primary = 1,
    Secondary = 2,
    Tertiary = 3,
}

impl Level
{
    pub const ALL: [Level; 3] = [Level::Primary, Level::Secondary, Level::Tertiary];
}

/// элемент сопоставления в том виде, в котором он записан в исходной таблице
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CollationElement
{
    pub primary: u16,
    pub secondary: u16,
    pub tertiary: u16,
}

impl CollationElement
{
    pub const fn new(primary: u16, secondary: u16, tertiary: u16) -> Self
    {
        Self {
            primary,
            secondary,
            tertiary,
        }
    }

    /// вес на заданном уровне
    #[inline(always)]
    pub fn weight(&self, level: Level) -> u16
    {
        match level {
            Level::Primary => self.primary,
            Level::Secondary => self.secondary,
            Level::Tertiary => self.tertiary,
        }
    }

    /// первичный вес равен нулю
    pub fn is_primary_ignorable(&self) -> bool
    {
        self.primary == 0
    }

    /// первичный и вторичный веса равны нулю
    pub fn is_secondary_ignorable(&self) -> bool
    {
        self.primary == 0 && self.secondary == 0
    }

    /// в виде, в котором веса представлены в allkeys
    pub fn format(&self) -> String
    {
        format!(
            "[.{:04X}.{:04X}.{:04X}]",
            self.primary, self.secondary, self.tertiary
        )
    }
}

impl Debug for CollationElement
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.write_str(self.format().as_str())
    }
}

/// строка таблицы: кодпоинт (или последовательность кодпоинтов) и его элементы сопоставления
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry
{
    pub codes: Vec<u32>,
    pub elements: Vec<CollationElement>,
}

impl TableEntry
{
    pub fn new(codes: &[u32], elements: &[CollationElement]) -> Self
    {
        Self {
            codes: codes.to_vec(),
            elements: elements.to_vec(),
        }
    }
}

/// ключ сортировки без игнорирования: ненулевые веса каждого уровня, уровни разделены нулём
///
/// именно в этом порядке проходятся строки таблицы при запекании и проверках
pub fn sort_key(elements: &[CollationElement]) -> Vec<u16>
{
    let mut key = vec![];

    for (i, level) in Level::ALL.iter().enumerate() {
        if i != 0 {
            key.push(0);
        }

        key.extend(
            elements
                .iter()
                .map(|e| e.weight(*level))
                .filter(|&w| w != 0),
        );
    }

    key
}

/// упорядочить строки таблицы: по ключу сортировки, затем по кодпоинтам
pub fn canonical_order(entries: &mut [TableEntry])
{
    entries.sort_by_cached_key(|entry| (sort_key(&entry.elements), entry.codes.clone()));
}

/// строка кодпоинтов вида "0061 0301"
pub fn format_codes(codes: &[u32]) -> String
{
    codes
        .iter()
        .map(|c| format!("{:04X}", c))
        .collect::<Vec<String>>()
        .join(" ")
}

/// цепочка элементов сопоставления вида "[.0000.0000.0000][...]"
pub fn format_elements(elements: &[CollationElement]) -> String
{
    elements.iter().map(|e| e.format()).collect()
}
