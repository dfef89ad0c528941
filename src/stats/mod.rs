use std::collections::{BTreeMap, HashMap};

/// статистика, собираемая при запекании строк таблицы
#[derive(Debug, Clone, Default)]
pub struct BakeStats
{
    pub blocks: HashMap<String, BakeStatsBlock>,
}

#[derive(Debug, Clone)]
pub struct BakeStatsBlock
{
    pub count: usize,
    pub order: usize,
    pub entries: HashMap<Vec<u32>, String>,
    /// количество строк по длине (в байтах) первого сжатого первичного веса
    pub widths: BTreeMap<usize, usize>,
}

impl BakeStats
{
    pub fn new() -> Self
    {
        Self {
            blocks: HashMap::new(),
        }
    }

    /// добавляем ключ
    pub fn touch(&mut self, key: impl AsRef<str>) -> &mut BakeStatsBlock
    {
        let order = self.blocks.values().map(|e| e.order).max().unwrap_or(0) + 1;

        self.blocks
            .entry(key.as_ref().to_string())
            .or_insert(BakeStatsBlock {
                count: 0,
                order,
                entries: HashMap::new(),
                widths: BTreeMap::new(),
            })
    }

    /// блоки в порядке их появления
    pub fn ordered(&self) -> Vec<(&String, &BakeStatsBlock)>
    {
        let mut blocks: Vec<(&String, &BakeStatsBlock)> = self.blocks.iter().collect();
        blocks.sort_by_key(|(_, block)| block.order);

        blocks
    }

    /// общее количество строк
    pub fn total(&self) -> usize
    {
        self.blocks.values().map(|b| b.count).sum()
    }
}

impl BakeStatsBlock
{
    /// увеличить счётчик блока, добавить описание строки
    pub fn inc(&mut self, codes: &[u32], width: usize, description: impl AsRef<str>)
    {
        self.count += 1;
        *self.widths.entry(width).or_insert(0) += 1;
        self.entries
            .insert(codes.to_vec(), description.as_ref().to_string());
    }
}
