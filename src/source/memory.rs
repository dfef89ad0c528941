use std::collections::HashMap;

use super::{Category, CharacterDatabase, ReferenceCollationSource};
use crate::weights::{canonical_order, CollationElement, TableEntry};

/// таблица весов, целиком находящаяся в памяти
#[derive(Debug, Clone)]
pub struct MemorySource
{
    entries: Vec<TableEntry>,
    singles: HashMap<u32, usize>,
    variable_high: u16,
}

impl MemorySource
{
    /// строки упорядочиваются по ключам сортировки
    pub fn new(mut entries: Vec<TableEntry>, variable_high: u16) -> Self
    {
        canonical_order(&mut entries);

        let singles = entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.codes.len() == 1)
            .map(|(i, entry)| (entry.codes[0], i))
            .collect();

        Self {
            entries,
            singles,
            variable_high,
        }
    }

    /// количество строк
    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }
}

impl ReferenceCollationSource for MemorySource
{
    fn entries(&self) -> &[TableEntry]
    {
        &self.entries
    }

    fn collation_elements(&self, code: u32) -> Option<&[CollationElement]>
    {
        self.singles
            .get(&code)
            .map(|&i| self.entries[i].elements.as_slice())
    }

    fn variable_high(&self) -> u16
    {
        self.variable_high
    }
}

/// свойства символов, заданные вручную
#[derive(Debug, Clone, Default)]
pub struct MemoryCharacters
{
    properties: HashMap<u32, (u16, Category)>,
}

impl MemoryCharacters
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// задать письменность и категорию кодпоинтам из диапазона
    pub fn with(mut self, codes: impl IntoIterator<Item = u32>, script: u16, category: Category) -> Self
    {
        for code in codes {
            self.properties.insert(code, (script, category));
        }

        self
    }
}

impl CharacterDatabase for MemoryCharacters
{
    fn script(&self, code: u32) -> Option<u16>
    {
        self.properties.get(&code).map(|&(script, _)| script)
    }

    fn category(&self, code: u32) -> Category
    {
        self.properties
            .get(&code)
            .map(|&(_, category)| category)
            .unwrap_or(Category::Other)
    }
}
