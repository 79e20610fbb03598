//! The two-symbol bracket alphabet.

/// A recognized bracket symbol.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Bracket {
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Bracket {
    /// Classify a character, returning `None` for anything outside the alphabet.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Bracket::Open),
            ')' => Some(Bracket::Close),
            _ => None,
        }
    }

    /// Signed contribution of this bracket to the running balance.
    #[inline]
    pub const fn delta(self) -> i64 {
        match self {
            Bracket::Open => 1,
            Bracket::Close => -1,
        }
    }

    /// The character this bracket is written as.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Bracket::Open => '(',
            Bracket::Close => ')',
        }
    }
}

impl TryFrom<char> for Bracket {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Bracket::from_char(c).ok_or(c)
    }
}

impl std::fmt::Display for Bracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
