use crate::encode::implicit::raw;
use crate::weights::{CollationElement, TableEntry};

pub use memory::{MemoryCharacters, MemorySource};
pub use ucd::IcuCharacters;

pub mod cldr;
mod memory;
mod ucd;

/// исходная таблица весов (DUCET, корневая коллация CLDR или синтетическая таблица)
pub trait ReferenceCollationSource
{
    /// строки таблицы в порядке, заданном ключами сортировки
    fn entries(&self) -> &[TableEntry];

    /// элементы сопоставления одиночного кодпоинта, явно записанного в таблице
    fn collation_elements(&self, code: u32) -> Option<&[CollationElement]>;

    /// наибольший первичный вес переменных элементов сопоставления
    fn variable_high(&self) -> u16;

    /// элемент сопоставления - переменный
    fn is_variable(&self, element: &CollationElement) -> bool
    {
        element.primary != 0 && element.primary <= self.variable_high()
    }

    /// первичный вес - первый из пары вычисляемых весов
    fn is_implicit_lead(&self, primary: u16) -> bool
    {
        raw::is_implicit_lead(primary)
    }

    /// кодпоинт, которому соответствует пара вычисляемых весов
    fn implicit_code_point(&self, lead: u16, trail: u16) -> Option<u32>
    {
        raw::implicit_code_point(lead, trail)
    }
}

/// свойства символов, необходимые для поиска границ письменностей
pub trait CharacterDatabase
{
    /// письменность кодпоинта, None - неизвестна
    fn script(&self, code: u32) -> Option<u16>;

    /// общая категория кодпоинта
    fn category(&self, code: u32) -> Category;
}

/// интересующие нас общие категории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category
{
    /// Lu
    UppercaseLetter,
    /// Ll
    LowercaseLetter,
    /// Lt
    TitlecaseLetter,
    /// Lm
    ModifierLetter,
    /// Lo
    OtherLetter,
    /// всё остальное
    Other,
}

impl Category
{
    /// буква (любая из категорий L*)
    pub fn is_letter(&self) -> bool
    {
        !matches!(self, Category::Other)
    }
}
