use std::cmp::{max, min};
use std::fmt::{Debug, Display, Formatter};

use num_bigint::BigInt;

/// Arbitrary-precision integer interval: `bottom` or `[lb, ub]` with no
/// modulus attached.
///
/// This is the exact side of the domain: every fixed-width operator lifts
/// its operands here, computes the classical interval-arithmetic result,
/// and lowers the result back through the wrap/trunc conversion in
/// [`Interval`][crate::interval::Interval]. All operations are exact; the
/// precision loss of the machine domain happens only on the way back down.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum ZInterval {
    Bottom,
    Range { lb: BigInt, ub: BigInt },
}

// Constructors
impl ZInterval {
    /// An empty pair (`lb > ub`) collapses to bottom.
    pub fn new(lb: impl Into<BigInt>, ub: impl Into<BigInt>) -> Self {
        let lb = lb.into();
        let ub = ub.into();
        if lb > ub {
            ZInterval::Bottom
        } else {
            ZInterval::Range { lb, ub }
        }
    }

    pub fn singleton(value: impl Into<BigInt>) -> Self {
        let value = value.into();
        ZInterval::Range {
            lb: value.clone(),
            ub: value,
        }
    }

    pub fn bottom() -> Self {
        ZInterval::Bottom
    }
}

// Getters
impl ZInterval {
    /// # Panics
    ///
    /// Panics on bottom.
    pub fn lb(&self) -> &BigInt {
        match self {
            ZInterval::Bottom => panic!("lb() on bottom ZInterval"),
            ZInterval::Range { lb, .. } => lb,
        }
    }

    /// # Panics
    ///
    /// Panics on bottom.
    pub fn ub(&self) -> &BigInt {
        match self {
            ZInterval::Bottom => panic!("ub() on bottom ZInterval"),
            ZInterval::Range { ub, .. } => ub,
        }
    }

    /// Number of integers in the interval (`ub - lb + 1`); zero on bottom.
    pub fn size(&self) -> BigInt {
        match self {
            ZInterval::Bottom => BigInt::ZERO,
            ZInterval::Range { lb, ub } => ub - lb + 1,
        }
    }
}

// Checks
impl ZInterval {
    pub fn is_bottom(&self) -> bool {
        matches!(self, ZInterval::Bottom)
    }

    pub fn is_singleton(&self) -> bool {
        matches!(self, ZInterval::Range { lb, ub } if lb == ub)
    }

    pub fn contains(&self, value: &BigInt) -> bool {
        match self {
            ZInterval::Bottom => false,
            ZInterval::Range { lb, ub } => lb <= value && value <= ub,
        }
    }
}

// Lattice
impl ZInterval {
    /// Interval union (the convex hull of both operands).
    pub fn hull(&self, other: &Self) -> Self {
        match (self, other) {
            (ZInterval::Bottom, _) => other.clone(),
            (_, ZInterval::Bottom) => self.clone(),
            (ZInterval::Range { lb: a, ub: b }, ZInterval::Range { lb: c, ub: d }) => {
                ZInterval::Range {
                    lb: min(a, c).clone(),
                    ub: max(b, d).clone(),
                }
            }
        }
    }

    pub fn meet(&self, other: &Self) -> Self {
        match (self, other) {
            (ZInterval::Bottom, _) | (_, ZInterval::Bottom) => ZInterval::Bottom,
            (ZInterval::Range { lb: a, ub: b }, ZInterval::Range { lb: c, ub: d }) => {
                ZInterval::new(max(a, c).clone(), min(b, d).clone())
            }
        }
    }
}

fn corners_hull(corners: impl IntoIterator<Item = BigInt>) -> ZInterval {
    let mut iter = corners.into_iter();
    let first = match iter.next() {
        Some(c) => c,
        None => return ZInterval::Bottom,
    };
    let mut lb = first.clone();
    let mut ub = first;
    for c in iter {
        if c < lb {
            lb = c;
        } else if c > ub {
            ub = c;
        }
    }
    ZInterval::Range { lb, ub }
}

// Exact arithmetic
impl ZInterval {
    pub fn add(&self, other: &Self) -> Self {
        match (self, other) {
            (ZInterval::Bottom, _) | (_, ZInterval::Bottom) => ZInterval::Bottom,
            (ZInterval::Range { lb: a, ub: b }, ZInterval::Range { lb: c, ub: d }) => {
                ZInterval::Range { lb: a + c, ub: b + d }
            }
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        match (self, other) {
            (ZInterval::Bottom, _) | (_, ZInterval::Bottom) => ZInterval::Bottom,
            (ZInterval::Range { lb: a, ub: b }, ZInterval::Range { lb: c, ub: d }) => {
                ZInterval::Range { lb: a - d, ub: b - c }
            }
        }
    }

    pub fn neg(&self) -> Self {
        match self {
            ZInterval::Bottom => ZInterval::Bottom,
            ZInterval::Range { lb, ub } => ZInterval::Range { lb: -ub, ub: -lb },
        }
    }

    pub fn mul(&self, other: &Self) -> Self {
        match (self, other) {
            (ZInterval::Bottom, _) | (_, ZInterval::Bottom) => ZInterval::Bottom,
            (ZInterval::Range { lb: a, ub: b }, ZInterval::Range { lb: c, ub: d }) => {
                corners_hull([a * c, a * d, b * c, b * d])
            }
        }
    }

    /// Truncating (toward-zero) division, with `0` removed from the divisor
    /// range first. Bottom if the divisor contains nothing but `0`.
    pub fn tdiv(&self, other: &Self) -> Self {
        let (nlb, nub) = match self {
            ZInterval::Bottom => return ZInterval::Bottom,
            ZInterval::Range { lb, ub } => (lb, ub),
        };
        let (dlb, dub) = match other {
            ZInterval::Bottom => return ZInterval::Bottom,
            ZInterval::Range { lb, ub } => (lb, ub),
        };

        // Split the divisor into its negative and positive parts; within a
        // part the quotient extrema sit at the corners.
        let mut result = ZInterval::Bottom;
        let neg_part = ZInterval::new(dlb.clone(), min(dub.clone(), BigInt::from(-1)));
        let pos_part = ZInterval::new(max(dlb.clone(), BigInt::from(1)), dub.clone());
        for part in [neg_part, pos_part] {
            if let ZInterval::Range { lb: p, ub: q } = part {
                let corners = corners_hull([nlb / &p, nlb / &q, nub / &p, nub / &q]);
                result = result.hull(&corners);
            }
        }
        result
    }

    /// Multiplication by `2^s` for `s` ranging over `shift`.
    ///
    /// The shift range must be non-negative (callers clamp it to the
    /// feasible window first).
    pub fn shl_pow2(&self, shift: &Self) -> Self {
        match (self, shift) {
            (ZInterval::Bottom, _) | (_, ZInterval::Bottom) => ZInterval::Bottom,
            (ZInterval::Range { lb, ub }, ZInterval::Range { lb: s0, ub: s1 }) => {
                assert!(*s0 >= BigInt::ZERO, "Negative shift amount");
                let s0 = u32::try_from(s0).expect("Shift amount out of range");
                let s1 = u32::try_from(s1).expect("Shift amount out of range");
                corners_hull([lb << s0, lb << s1, ub << s0, ub << s1])
            }
        }
    }

    /// Floor division by `2^s` for `s` ranging over `shift`.
    ///
    /// `BigInt`'s `>>` floors, which is exactly arithmetic shift.
    pub fn shr_floor(&self, shift: &Self) -> Self {
        match (self, shift) {
            (ZInterval::Bottom, _) | (_, ZInterval::Bottom) => ZInterval::Bottom,
            (ZInterval::Range { lb, ub }, ZInterval::Range { lb: s0, ub: s1 }) => {
                assert!(*s0 >= BigInt::ZERO, "Negative shift amount");
                let s0 = u32::try_from(s0).expect("Shift amount out of range");
                let s1 = u32::try_from(s1).expect("Shift amount out of range");
                corners_hull([lb >> s0, lb >> s1, ub >> s0, ub >> s1])
            }
        }
    }
}

impl Display for ZInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ZInterval::Bottom => write!(f, "⊥"),
            ZInterval::Range { lb, ub } => write!(f, "[{}, {}]", lb, ub),
        }
    }
}

impl Debug for ZInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
