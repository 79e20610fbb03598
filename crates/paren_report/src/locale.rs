//! Report languages and their labels.

/// Language of the text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Russian,
}

/// Fixed strings used by the text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub sequence: &'static str,
    pub mask: &'static str,
    pub balanced: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub moves: &'static str,
}

static ENGLISH: Labels = Labels {
    sequence: "Sequence",
    mask: "Mask",
    balanced: "Balanced?",
    yes: "yes",
    no: "no",
    moves: "Moves to balance",
};

// "ПСП" is the usual abbreviation for a correct bracket sequence.
static RUSSIAN: Labels = Labels {
    sequence: "Последовательность",
    mask: "Маска",
    balanced: "Возможность ПСП?",
    yes: "да",
    no: "нет",
    moves: "Ходов для изменения в ПСП",
};

impl Locale {
    /// Parse from a command line or environment value.
    ///
    /// Accepts language codes and English names, case-insensitively.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "ru" | "rus" | "russian" => Some(Self::Russian),
            _ => None,
        }
    }

    /// Short language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Self::English => &ENGLISH,
            Self::Russian => &RUSSIAN,
        }
    }
}
