//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods
//! grouped into bracketing and open families.

/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] methods maintain a sign-changing interval
/// - [`Algorithm::Open`] methods evolve one or two point estimates
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
    RegulaFalsi,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Secant,
    FixedPoint,
    Newton,
    Halley,
}

impl Algorithm {
    /// Algorithm name reported in [`super::report::RootReport::algorithm`].
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)   => "bisection",
            Algorithm::Bracket(BracketFamily::RegulaFalsi) => "regula_falsi",
            Algorithm::Open(OpenFamily::Secant)            => "secant",
            Algorithm::Open(OpenFamily::FixedPoint)        => "fixed_point",
            Algorithm::Open(OpenFamily::Newton)            => "newton",
            Algorithm::Open(OpenFamily::Halley)            => "halley",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
