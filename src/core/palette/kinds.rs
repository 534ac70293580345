#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseColour {
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Orange,
}

impl BaseColour {
    pub const ALL: &'static [Self] = &[
        Self::White,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Cyan,
        Self::Magenta,
        Self::Orange,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Cyan => "Cyan",
            Self::Magenta => "Magenta",
            Self::Orange => "Orange",
        }
    }
}

impl Default for BaseColour {
    fn default() -> Self {
        Self::White
    }
}

impl std::fmt::Display for BaseColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
