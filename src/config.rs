use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BakeError, Result};

/// параметры запекания
///
/// значения по умолчанию повторяют исторические исключения генератора дробных весов; все они
/// привязаны к конкретной версии таблицы весов и должны сверяться с текущей версией UCA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeConfig
{
    pub primary: PrimaryConfig,
    pub secondary: SecondaryConfig,
    pub tertiary: TertiaryConfig,
    /// первичные веса начиная с этого считаются "хвостовыми" и могут выходить за пределы
    /// поддерживаемого диапазона сжатых весов
    pub trailing_primary_start: u16,
}

impl Default for BakeConfig
{
    fn default() -> Self
    {
        Self {
            primary: PrimaryConfig::default(),
            secondary: SecondaryConfig::default(),
            tertiary: TertiaryConfig::default(),
            trailing_primary_start: 0xFFFD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryConfig
{
    /// шаг между соседними первичными весами
    pub step: u32,
    /// одиночные буквы, перед которыми оставляется промежуток в целый байт
    pub singles: Vec<char>,
    /// одиночная буква с дополнительным промежутком
    pub widened_single: Option<char>,
    /// исходные первичные веса, всегда считающиеся границей письменности
    /// (0x089A - наименьший непеременный вес, 0x4E00 - наименьший вес ключей Канси)
    pub fixed_script_firsts: Vec<u16>,
    /// шесть опорных кодпоинтов старых чамо: веса строго между 1-м и 2-м, 3-м и 4-м,
    /// а также после 5-го и до 6-го включительно получают 3-байтовую форму
    pub old_jamo_anchors: Vec<u32>,
    /// кодпоинты, классифицируемые по письменности и категории другого кодпоинта
    pub script_overrides: Vec<ScriptOverride>,
    /// продолжать первичные веса 3-байтовой формой, если 2-байтовые не помещаются ниже
    /// вычисляемых весов; false - историческое поведение без ограничения старшего байта
    pub widen: bool,
}

impl Default for PrimaryConfig
{
    fn default() -> Self
    {
        Self {
            step: 2,
            singles: ('a' ..= 'z').chain([' ']).collect(),
            widened_single: Some('a'),
            fixed_script_firsts: vec![0x089A, 0x4E00],
            old_jamo_anchors: vec![0x1112, 0x1161, 0x1175, 0x11A8, 0x11C2, 0x11F9],
            script_overrides: vec![
                // TIBETAN SIGN RJES SU NGA RO, TIBETAN SIGN RNAM BCAD -> TIBETAN LETTER KA
                ScriptOverride {
                    code: 0x0F7E,
                    like: 0x0F40,
                },
                ScriptOverride {
                    code: 0x0F7F,
                    like: 0x0F40,
                },
            ],
            widen: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptOverride
{
    pub code: u32,
    pub like: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryConfig
{
    /// вторичные веса, считающиеся использованными независимо от содержимого таблицы
    pub extra_used: Vec<u16>,
    /// дополнительные промежутки после заданных исходных вторичных весов
    pub gaps: Vec<SecondaryGap>,
    /// начиная с этого значения вторичные веса становятся 2-байтовыми
    pub double_start: u8,
    /// наибольшее значение старшего байта
    pub max_lead: u8,
}

impl Default for SecondaryConfig
{
    fn default() -> Self
    {
        Self {
            extra_used: vec![0x0040],
            gaps: vec![
                // COMBINING ENCLOSING KEYCAP
                SecondaryGap {
                    after: 0x0153,
                    width: 256,
                },
                // RUNIC LETTER SHORT-TWIG-AR A
                SecondaryGap {
                    after: 0x0157,
                    width: 64,
                },
            ],
            double_start: 0xD0,
            max_lead: 0xEF,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryGap
{
    pub after: u16,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TertiaryConfig
{
    /// исходные третичные веса прописных букв и вариантов письменности - получают бит регистра
    pub upper: Vec<u16>,
    /// исходные третичные веса, которые не могут встречаться в таблице
    pub illegal: Vec<u16>,
}

impl Default for TertiaryConfig
{
    fn default() -> Self
    {
        Self {
            upper: vec![0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0E, 0x11, 0x12, 0x1D],
            illegal: vec![0x01, 0x07],
        }
    }
}

impl BakeConfig
{
    /// прочитать параметры из TOML-файла
    pub fn load(path: impl AsRef<Path>) -> Result<Self>
    {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&text)?;

        config.check()?;

        Ok(config)
    }

    /// проверка согласованности параметров
    pub fn check(&self) -> Result<()>
    {
        if self.primary.step == 0 || self.primary.step > 0xFF {
            return Err(BakeError::Config(format!(
                "primary step must be within 1 ..= 255, got {}",
                self.primary.step
            )));
        }

        if !self.primary.old_jamo_anchors.is_empty() && self.primary.old_jamo_anchors.len() != 6 {
            return Err(BakeError::Config(format!(
                "expected 6 old jamo anchors, got {}",
                self.primary.old_jamo_anchors.len()
            )));
        }

        if let Some(widened) = self.primary.widened_single {
            if !self.primary.singles.contains(&widened) {
                return Err(BakeError::Config(format!(
                    "widened single {:?} is not listed among singles",
                    widened
                )));
            }
        }

        if self.secondary.double_start <= 0x87 || self.secondary.max_lead < self.secondary.double_start {
            return Err(BakeError::Config(format!(
                "secondary lead bytes {:02X} ..= {:02X} are inconsistent",
                self.secondary.double_start, self.secondary.max_lead
            )));
        }

        if let Some(&raw) = self.tertiary.upper.iter().find(|&&t| t > 0x1F) {
            return Err(BakeError::Config(format!(
                "upper tertiary {:02X} is outside of 00 ..= 1F",
                raw
            )));
        }

        Ok(())
    }
}
