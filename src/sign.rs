use std::fmt::{Debug, Display, Formatter};

/// Signedness of a machine integer.
///
/// Fixed per value and per interval: combining values of different
/// signedness (or different bit width) is a contract violation, checked
/// with an assert at the call site. Signedness only affects how the raw
/// two's-complement residue is read back as an integer.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl Signedness {
    pub const fn is_signed(self) -> bool {
        matches!(self, Signedness::Signed)
    }

    pub const fn is_unsigned(self) -> bool {
        matches!(self, Signedness::Unsigned)
    }

    /// The other signedness at the same width.
    pub const fn flipped(self) -> Self {
        match self {
            Signedness::Signed => Signedness::Unsigned,
            Signedness::Unsigned => Signedness::Signed,
        }
    }
}

impl Display for Signedness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Signedness::Signed => write!(f, "i"),
            Signedness::Unsigned => write!(f, "u"),
        }
    }
}

impl Debug for Signedness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Signedness::Signed => write!(f, "Signed"),
            Signedness::Unsigned => write!(f, "Unsigned"),
        }
    }
}
