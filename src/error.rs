use crate::weights::Level;

pub type Result<T, E = BakeError> = std::result::Result<T, E>;

/// ошибки запекания таблицы
///
/// любая из них означает, что таблица не может быть записана: порядок весов нарушен
/// или вес попал на запрещённое значение
#[derive(Debug, thiserror::Error)]
pub enum BakeError
{
    #[error("U+{code:04X}: implicit primary {current:08X} is not above {previous:08X} (U+{previous_code:04X})")]
    ImplicitOrder
    {
        previous_code: u32,
        previous: u32,
        code: u32,
        current: u32,
    },

    #[error("U+{code:04X}: illegal byte value in implicit primary {primary:08X}")]
    ImplicitByte
    {
        code: u32,
        primary: u32,
    },

    #[error("U+{code:04X}: implicit primary {primary:08X} decodes to U+{decoded:04X}")]
    ImplicitRoundTrip
    {
        code: u32,
        primary: u32,
        decoded: u32,
    },

    #[error("not an implicit primary: {0:08X}")]
    NotImplicit(u32),

    #[error("ordinal {0:X} does not belong to any code point")]
    InvalidOrdinal(u32),

    #[error("U+{0:04X} is outside of the code point range")]
    InvalidCodePoint(u32),

    #[error("{level:?} weight {raw:04X}: compact value {current} is not above {previous}")]
    Unordered
    {
        level: Level,
        raw: u16,
        previous: String,
        current: String,
    },

    #[error("{level:?} weight {raw:04X}: compact value {value} is outside of the legal range")]
    OutOfRange
    {
        level: Level,
        raw: u16,
        value: String,
    },

    #[error("{level:?} weight {raw:04X} never occurs in a well-formed table")]
    IllegalWeight
    {
        level: Level,
        raw: u16,
    },

    #[error("{level:?} weight {raw:04X} was not collected by the weight scan")]
    UnknownWeight
    {
        level: Level,
        raw: u16,
    },

    #[error("{codes}: implicit lead primary {lead:04X} is not followed by a trailing element")]
    TruncatedImplicit
    {
        codes: String,
        lead: u16,
    },

    #[error("implicit pair [{lead:04X}, {trail:04X}] does not map to a code point")]
    UnmappedImplicit
    {
        lead: u16,
        trail: u16,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
