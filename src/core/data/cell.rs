use crate::core::data::complex::Complex;

/// Whether a cell's orbit is still inside the escape radius.
///
/// `Escaped` is terminal: the iterator never touches an escaped cell again
/// until the grid is refilled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Escape {
    #[default]
    Bounded,
    Escaped,
}

impl Escape {
    #[must_use]
    pub fn is_bounded(self) -> bool {
        self == Self::Bounded
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Cell {
    z: Complex,
    escape: Escape,
}

impl Cell {
    /// A freshly filled cell: the first iterate is `c` itself, not zero.
    #[must_use]
    pub fn seeded(c: Complex) -> Self {
        Self {
            z: c,
            escape: Escape::Bounded,
        }
    }

    #[must_use]
    pub fn z(&self) -> Complex {
        self.z
    }

    #[must_use]
    pub fn escape(&self) -> Escape {
        self.escape
    }

    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.escape.is_bounded()
    }

    pub(crate) fn record(&mut self, z: Complex, escape: Escape) {
        self.z = z;
        self.escape = escape;
    }
}
