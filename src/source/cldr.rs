use std::collections::HashMap;

use unicode_data::{TrieNode, Weights};

use super::MemorySource;
use crate::weights::{CollationElement, TableEntry};

lazy_static::lazy_static! {
    /// корневая коллация CLDR (und), развёрнутая из префиксного дерева в список строк
    pub static ref CLDR_UND: MemorySource = from_trie(&unicode_data::CLDR_UND_TRIE);
}

/// развернуть префиксное дерево весов в таблицу
///
/// наибольший первичный вес переменных элементов становится границей переменных весов
pub fn from_trie(trie: &HashMap<u32, TrieNode>) -> MemorySource
{
    let mut entries = vec![];
    let mut variable_high = 0;

    for (&code, node) in trie.iter() {
        flatten(&mut vec![code], node, &mut entries, &mut variable_high);
    }

    log::info!(
        "reference table: {} entries, variable high {:04X}",
        entries.len(),
        variable_high
    );

    MemorySource::new(entries, variable_high)
}

/// рекурсивный обход узла дерева: сам узел, затем продолжения последовательности
fn flatten(
    codes: &mut Vec<u32>,
    node: &TrieNode,
    entries: &mut Vec<TableEntry>,
    variable_high: &mut u16,
)
{
    if !node.weights.is_empty() {
        let elements: Vec<CollationElement> = node
            .weights
            .iter()
            .map(|weights| {
                if weights.is_variable {
                    *variable_high = (*variable_high).max(weights.l1 as u16);
                }

                element(weights)
            })
            .collect();

        entries.push(TableEntry::new(codes, &elements));
    }

    if let Some(children) = &node.children {
        for (&code, child) in children.iter() {
            codes.push(code);
            flatten(codes, child, entries, variable_high);
            codes.pop();
        }
    }
}

fn element(weights: &Weights) -> CollationElement
{
    CollationElement::new(
        weights.l1 as u16,
        weights.l2 as u16,
        weights.l3 as u16,
    )
}
