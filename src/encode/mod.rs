use crate::error::{BakeError, Result};
use crate::weights::{CompactCode, Level};

pub mod implicit;
pub mod levels;
pub mod primary;

/// сжатие исходных весов одного уровня
pub trait CompactWeight
{
    /// уровень, веса которого сжимаются
    fn level(&self) -> Level;

    /// сжатый вес для исходного, 0 соответствует отсутствующему весу
    fn compact(&self, raw: u16) -> Result<CompactCode>;
}

/// сжатые веса строго возрастают вместе с исходными и не содержат запрещённых байт
///
/// исходные веса должны идти по возрастанию, нулевой вес пропускается
pub fn check_sequence(level: Level, values: impl IntoIterator<Item = (u16, CompactCode)>) -> Result<()>
{
    let mut previous = CompactCode::ABSENT;

    for (raw, value) in values {
        if raw == 0 {
            continue;
        }

        if value <= previous {
            return Err(BakeError::Unordered {
                level,
                raw,
                previous: previous.format(),
                current: value.format(),
            });
        }

        if value.has_forbidden_bytes() {
            return Err(BakeError::OutOfRange {
                level,
                raw,
                value: value.format(),
            });
        }

        previous = value;
    }

    Ok(())
}
