use icu_properties::{maps, GeneralCategory, Script};

use super::{Category, CharacterDatabase};

/// свойства символов из скомпилированных данных ICU4X
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuCharacters;

impl CharacterDatabase for IcuCharacters
{
    fn script(&self, code: u32) -> Option<u16>
    {
        let script = maps::script().get32(code);

        match script == Script::Unknown {
            true => None,
            false => Some(script.0),
        }
    }

    fn category(&self, code: u32) -> Category
    {
        match maps::general_category().get32(code) {
            GeneralCategory::UppercaseLetter => Category::UppercaseLetter,
            GeneralCategory::LowercaseLetter => Category::LowercaseLetter,
            GeneralCategory::TitlecaseLetter => Category::TitlecaseLetter,
            GeneralCategory::ModifierLetter => Category::ModifierLetter,
            GeneralCategory::OtherLetter => Category::OtherLetter,
            _ => Category::Other,
        }
    }
}
