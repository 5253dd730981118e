#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum PaletteKinds {
    #[default]
    RandomisedScaled,
    GradientScaled,
}

impl PaletteKinds {
    pub const ALL: &'static [Self] = &[Self::RandomisedScaled, Self::GradientScaled];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RandomisedScaled => "Randomised scaled",
            Self::GradientScaled => "Gradient scaled",
        }
    }
}

impl std::fmt::Display for PaletteKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
