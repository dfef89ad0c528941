use core::fmt::Debug;

use super::is_forbidden_byte;

/// сжатый вес: от 1 до 4 значимых байт, выровненных по старшему байту u32
///
/// 1111 1111  2222 2222    3333 3333  4444 4444
///
/// незначимые младшие байты равны нулю, поэтому сравнение u32 совпадает с побайтовым сравнением
/// строк весов. нулевое значение - вес отсутствует
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CompactCode(u32);

impl CompactCode
{
    pub const ABSENT: Self = Self(0);

    /// значение, уже выровненное по старшему байту
    pub const fn from_left_justified(value: u32) -> Self
    {
        Self(value)
    }

    /// значение шириной width байт, записанное в младших байтах
    pub fn from_right_justified(value: u32, width: usize) -> Self
    {
        assert!((1 ..= 4).contains(&width));

        match width {
            4 => Self(value),
            _ => Self(value << (8 * (4 - width))),
        }
    }

    /// из последовательности байт (не более 4)
    pub fn from_bytes(bytes: &[u8]) -> Self
    {
        assert!(bytes.len() <= 4);

        let value = bytes
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, &b)| acc | ((b as u32) << (24 - 8 * i)));

        Self(value)
    }

    #[inline(always)]
    pub fn is_absent(&self) -> bool
    {
        self.0 == 0
    }

    /// количество значимых байт
    pub fn len(&self) -> usize
    {
        match self.0 {
            0 => 0,
            value => 4 - (value.trailing_zeros() / 8) as usize,
        }
    }

    /// старший байт
    #[inline(always)]
    pub fn lead_byte(&self) -> u8
    {
        (self.0 >> 24) as u8
    }

    /// значимые байты
    pub fn bytes(&self) -> Vec<u8>
    {
        self.0.to_be_bytes()[.. self.len()].to_vec()
    }

    /// среди значимых байт есть запрещённые значения
    pub fn has_forbidden_bytes(&self) -> bool
    {
        self.bytes().into_iter().any(is_forbidden_byte)
    }

    /// запись вида "05 A3"
    pub fn format(&self) -> String
    {
        self.bytes()
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl Debug for CompactCode
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "[{}]", self.format())
    }
}

/// запечённый элемент сопоставления
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FractionalElement
{
    pub primary: CompactCode,
    pub secondary: CompactCode,
    pub tertiary: CompactCode,
    /// первичный вес вычислен по кодпоинту и заменяет пару исходных элементов сопоставления
    pub is_implicit: bool,
}

impl FractionalElement
{
    /// запись вида "[05 A3, 05, 05]", нулевые веса не выводятся
    pub fn format(&self) -> String
    {
        format!(
            "[{}, {}, {}]",
            self.primary.format(),
            self.secondary.format(),
            self.tertiary.format()
        )
    }
}

impl Debug for FractionalElement
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.write_str(self.format().as_str())
    }
}
