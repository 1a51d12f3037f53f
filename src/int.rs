use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};

use num_bigint::BigInt;

use crate::sign::Signedness;

/// Exact machine integer: one two's-complement residue at a fixed
/// `(bit_width, signedness)`.
///
/// The stored value is kept normalized inside the representable window
/// (`[-2^(w-1), 2^(w-1)-1]` if signed, `[0, 2^w-1]` if unsigned), so the
/// derived equality and plain `BigInt` comparison implement the order
/// declared by the instance's own signedness.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct MachineInt {
    value: BigInt,
    width: u32,
    sign: Signedness,
}

/// `2^width`, the number of residues at this width.
pub(crate) fn modulus(width: u32) -> BigInt {
    BigInt::from(1) << width
}

/// Smallest representable value at `(width, sign)`, as a plain integer.
pub(crate) fn window_min(width: u32, sign: Signedness) -> BigInt {
    match sign {
        Signedness::Signed => -(BigInt::from(1) << (width - 1)),
        Signedness::Unsigned => BigInt::ZERO,
    }
}

/// Largest representable value at `(width, sign)`, as a plain integer.
pub(crate) fn window_max(width: u32, sign: Signedness) -> BigInt {
    match sign {
        Signedness::Signed => (BigInt::from(1) << (width - 1)) - 1,
        Signedness::Unsigned => modulus(width) - 1,
    }
}

/// Wraps an arbitrary integer into the representable window, i.e. picks
/// the unique residue mod `2^width` that the window contains.
pub(crate) fn wrap(value: &BigInt, width: u32, sign: Signedness) -> BigInt {
    let m = modulus(width);
    // BigInt `%` truncates toward zero; fold into [0, m).
    let mut r = ((value % &m) + &m) % &m;
    if sign.is_signed() && r > window_max(width, sign) {
        r -= &m;
    }
    r
}

// Constructors
impl MachineInt {
    /// Creates a machine integer from any integer, wrapping it mod
    /// `2^width` into the representable window.
    ///
    /// # Panics
    ///
    /// Panics if `width == 0`.
    pub fn new(value: impl Into<BigInt>, width: u32, sign: Signedness) -> Self {
        assert!(width >= 1, "Bit width must be at least 1");
        let value = wrap(&value.into(), width, sign);
        Self { value, width, sign }
    }

    pub fn zero(width: u32, sign: Signedness) -> Self {
        Self::new(0, width, sign)
    }

    /// `0` if unsigned, `-2^(w-1)` if signed.
    pub fn min_value(width: u32, sign: Signedness) -> Self {
        assert!(width >= 1, "Bit width must be at least 1");
        Self {
            value: window_min(width, sign),
            width,
            sign,
        }
    }

    /// `2^w - 1` if unsigned, `2^(w-1) - 1` if signed.
    pub fn max_value(width: u32, sign: Signedness) -> Self {
        assert!(width >= 1, "Bit width must be at least 1");
        Self {
            value: window_max(width, sign),
            width,
            sign,
        }
    }
}

// Getters
impl MachineInt {
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    pub fn to_bigint(&self) -> BigInt {
        self.value.clone()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn sign(&self) -> Signedness {
        self.sign
    }
}

// Checks
impl MachineInt {
    pub fn is_zero(&self) -> bool {
        self.value == BigInt::ZERO
    }

    pub fn is_min(&self) -> bool {
        self.value == window_min(self.width, self.sign)
    }

    pub fn is_max(&self) -> bool {
        self.value == window_max(self.width, self.sign)
    }

    pub(crate) fn assert_compatible(&self, other: &Self) {
        assert_eq!(
            self.width, other.width,
            "Bit width mismatch: {} vs {}",
            self.width, other.width
        );
        assert_eq!(
            self.sign, other.sign,
            "Signedness mismatch: {:?} vs {:?}",
            self.sign, other.sign
        );
    }
}

impl PartialOrd for MachineInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MachineInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.assert_compatible(other);
        self.value.cmp(&other.value)
    }
}

impl Display for MachineInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Debug for MachineInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.value, self.sign, self.width)
    }
}
