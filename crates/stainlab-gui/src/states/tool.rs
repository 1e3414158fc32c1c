use std::fmt;

/// Which tool owns the central panel.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Tool {
    #[default]
    Binary,
    Intensity,
    SquareSelector,
}

impl Tool {
    pub const ALL: &[Self] = &[Self::Binary, Self::Intensity, Self::SquareSelector];

    /// Tools that work on the analyzer slots.
    pub fn is_analyzer(&self) -> bool {
        matches!(self, Self::Binary | Self::Intensity)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "Binary Analysis"),
            Self::Intensity => write!(f, "Intensity Analysis"),
            Self::SquareSelector => write!(f, "Square Selector"),
        }
    }
}
