use std::cmp::{max, min};
use std::fmt::{Debug, Display, Formatter};

use log::debug;
use num_bigint::BigInt;

use crate::int::{modulus, window_max, window_min, wrap, MachineInt};
use crate::sign::Signedness;
use crate::zint::ZInterval;

/// Policy for lowering an arbitrary-precision interval back into a fixed
/// bit width.
///
/// - `Wrap` models modular instruction semantics: the conversion always
///   produces a value, falling back to `top` when no single shift by a
///   multiple of `2^w` can represent the range.
/// - `Trunc` models no-wrap/exact instruction semantics: the out-of-window
///   portion of the range is an infeasible (undefined-behavior) outcome
///   and is discarded, falling back to `bottom` when nothing remains.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OverflowPolicy {
    Wrap,
    Trunc,
}

/// Machine-integer interval: `bottom` or `[lb, ub]` over one fixed
/// `(bit_width, signedness)`, ordered under that signedness.
///
/// Plain value type: operators are pure functions returning new values;
/// the only mutators are [`set_to_bottom`][Interval::set_to_bottom] and
/// [`set_to_top`][Interval::set_to_top]. Combining intervals of different
/// width or signedness is a contract violation and panics.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Interval {
    width: u32,
    sign: Signedness,
    // `None` is bottom; bounds are normalized into the representable
    // window with `lb <= ub`.
    bounds: Option<(BigInt, BigInt)>,
}

// Constructors
impl Interval {
    /// Singleton interval `[x, x]`.
    pub fn singleton(x: MachineInt) -> Self {
        let width = x.width();
        let sign = x.sign();
        let v = x.to_bigint();
        Self {
            width,
            sign,
            bounds: Some((v.clone(), v)),
        }
    }

    /// Interval `[lb, ub]`; collapses to bottom if `lb > ub` under the
    /// declared order. That is a valid input, not an error.
    pub fn new(lb: MachineInt, ub: MachineInt) -> Self {
        lb.assert_compatible(&ub);
        let width = lb.width();
        let sign = lb.sign();
        if lb > ub {
            Self::bottom(width, sign)
        } else {
            Self {
                width,
                sign,
                bounds: Some((lb.to_bigint(), ub.to_bigint())),
            }
        }
    }

    /// The full representable window `[min_value, max_value]`.
    pub fn top(width: u32, sign: Signedness) -> Self {
        assert!(width >= 1, "Bit width must be at least 1");
        Self {
            width,
            sign,
            bounds: Some((window_min(width, sign), window_max(width, sign))),
        }
    }

    pub fn bottom(width: u32, sign: Signedness) -> Self {
        assert!(width >= 1, "Bit width must be at least 1");
        Self {
            width,
            sign,
            bounds: None,
        }
    }

    // Bounds already normalized and ordered.
    pub(crate) fn from_raw_bounds(lb: BigInt, ub: BigInt, width: u32, sign: Signedness) -> Self {
        debug_assert!(lb <= ub);
        debug_assert!(lb >= window_min(width, sign));
        debug_assert!(ub <= window_max(width, sign));
        Self {
            width,
            sign,
            bounds: Some((lb, ub)),
        }
    }
}

// Getters
impl Interval {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn sign(&self) -> Signedness {
        self.sign
    }

    /// Lower bound.
    ///
    /// # Panics
    ///
    /// Panics on bottom.
    pub fn lb(&self) -> MachineInt {
        let (lb, _) = self.bounds.as_ref().expect("lb() on bottom interval");
        MachineInt::new(lb.clone(), self.width, self.sign)
    }

    /// Upper bound.
    ///
    /// # Panics
    ///
    /// Panics on bottom.
    pub fn ub(&self) -> MachineInt {
        let (_, ub) = self.bounds.as_ref().expect("ub() on bottom interval");
        MachineInt::new(ub.clone(), self.width, self.sign)
    }

    pub(crate) fn raw_bounds(&self) -> Option<(&BigInt, &BigInt)> {
        self.bounds.as_ref().map(|(lb, ub)| (lb, ub))
    }

    /// `Some(x)` iff the interval is exactly `[x, x]`.
    pub fn singleton_value(&self) -> Option<MachineInt> {
        match &self.bounds {
            Some((lb, ub)) if lb == ub => Some(MachineInt::new(lb.clone(), self.width, self.sign)),
            _ => None,
        }
    }
}

// Checks
impl Interval {
    pub fn is_bottom(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn is_top(&self) -> bool {
        match &self.bounds {
            None => false,
            Some((lb, ub)) => {
                *lb == window_min(self.width, self.sign) && *ub == window_max(self.width, self.sign)
            }
        }
    }

    /// False on bottom, else `lb <= x <= ub`.
    pub fn contains(&self, x: &MachineInt) -> bool {
        assert_eq!(self.width, x.width(), "Bit width mismatch");
        assert_eq!(self.sign, x.sign(), "Signedness mismatch");
        match &self.bounds {
            None => false,
            Some((lb, ub)) => lb <= x.value() && x.value() <= ub,
        }
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

// Mutators
impl Interval {
    pub fn set_to_bottom(&mut self) {
        self.bounds = None;
    }

    pub fn set_to_top(&mut self) {
        self.bounds = Some((
            window_min(self.width, self.sign),
            window_max(self.width, self.sign),
        ));
    }
}

// The ZInterval bridge: the one conversion every operator routes through.
impl Interval {
    /// Reinterprets the interval as an arbitrary-precision range, honoring
    /// the interval's own signedness, with no modulus.
    pub fn to_z_interval(&self) -> ZInterval {
        match &self.bounds {
            None => ZInterval::Bottom,
            Some((lb, ub)) => ZInterval::Range {
                lb: lb.clone(),
                ub: ub.clone(),
            },
        }
    }

    /// Lowers an arbitrary-precision interval into `(width, sign)` under
    /// the given [`OverflowPolicy`].
    pub fn from_z_interval(
        z: &ZInterval,
        width: u32,
        sign: Signedness,
        policy: OverflowPolicy,
    ) -> Self {
        assert!(width >= 1, "Bit width must be at least 1");
        let (zlb, zub) = match z {
            ZInterval::Bottom => return Self::bottom(width, sign),
            ZInterval::Range { lb, ub } => (lb, ub),
        };
        match policy {
            OverflowPolicy::Wrap => {
                if z.size() > modulus(width) {
                    debug!("from_z({}, w={}, {:?}, Wrap): spans the modulus -> top", z, width, sign);
                    return Self::top(width, sign);
                }
                // Shift both endpoints by the unique multiple of 2^w that
                // puts the lower one inside the window.
                let lb = wrap(zlb, width, sign);
                let ub = &lb + (zub - zlb);
                if ub > window_max(width, sign) {
                    debug!("from_z({}, w={}, {:?}, Wrap): straddles the window -> top", z, width, sign);
                    Self::top(width, sign)
                } else {
                    Self::from_raw_bounds(lb, ub, width, sign)
                }
            }
            OverflowPolicy::Trunc => {
                let lb = max(zlb.clone(), window_min(width, sign));
                let ub = min(zub.clone(), window_max(width, sign));
                if lb > ub {
                    debug!("from_z({}, w={}, {:?}, Trunc): fully infeasible -> bottom", z, width, sign);
                    Self::bottom(width, sign)
                } else {
                    Self::from_raw_bounds(lb, ub, width, sign)
                }
            }
        }
    }
}

// Lattice core
impl Interval {
    /// Partial order: `self` is contained in `other`.
    pub fn leq(&self, other: &Self) -> bool {
        self.assert_compatible(other);
        match (&self.bounds, &other.bounds) {
            (None, _) => true,
            (_, None) => false,
            (Some((a, b)), Some((c, d))) => c <= a && b <= d,
        }
    }

    pub fn equals(&self, other: &Self) -> bool {
        self.leq(other) && other.leq(self)
    }

    /// Least upper bound, routed through the ZInterval bridge with `Wrap`
    /// semantics (a union that cannot be represented in one window
    /// collapses to top).
    pub fn join(&self, other: &Self) -> Self {
        self.assert_compatible(other);
        if self.is_bottom() {
            return other.clone();
        }
        if other.is_bottom() {
            return self.clone();
        }
        let hull = self.to_z_interval().hull(&other.to_z_interval());
        let result = Self::from_z_interval(&hull, self.width, self.sign, OverflowPolicy::Wrap);
        debug!("join({}, {}) = {}", self, other, result);
        result
    }

    /// Greatest lower bound.
    pub fn meet(&self, other: &Self) -> Self {
        self.assert_compatible(other);
        match (&self.bounds, &other.bounds) {
            (None, _) | (_, None) => Self::bottom(self.width, self.sign),
            (Some((a, b)), Some((c, d))) => {
                let lb = max(a, c).clone();
                let ub = min(b, d).clone();
                if lb > ub {
                    Self::bottom(self.width, self.sign)
                } else {
                    Self::from_raw_bounds(lb, ub, self.width, self.sign)
                }
            }
        }
    }
}

// Widening and narrowing
impl Interval {
    /// Standard interval widening: a bound that moved snaps to its
    /// representable extreme, a stable bound is kept.
    pub fn widening(&self, other: &Self) -> Self {
        self.assert_compatible(other);
        let (a, b) = match &self.bounds {
            None => return other.clone(),
            Some(bounds) => bounds,
        };
        let (c, d) = match &other.bounds {
            None => return self.clone(),
            Some(bounds) => bounds,
        };
        let lb = if c < a {
            window_min(self.width, self.sign)
        } else {
            a.clone()
        };
        let ub = if d > b {
            window_max(self.width, self.sign)
        } else {
            b.clone()
        };
        let result = Self::from_raw_bounds(lb, ub, self.width, self.sign);
        debug!("widening({}, {}) = {}", self, other, result);
        result
    }

    /// Widening guided by a single threshold constant: a bound that moved
    /// jumps to the threshold when the threshold still covers it, and to
    /// the representable extreme otherwise.
    pub fn widening_threshold(&self, other: &Self, threshold: &MachineInt) -> Self {
        self.assert_compatible(other);
        assert_eq!(self.width, threshold.width(), "Bit width mismatch");
        assert_eq!(self.sign, threshold.sign(), "Signedness mismatch");
        let (a, b) = match &self.bounds {
            None => return other.clone(),
            Some(bounds) => bounds,
        };
        let (c, d) = match &other.bounds {
            None => return self.clone(),
            Some(bounds) => bounds,
        };
        let t = threshold.value();
        let lb = if c < a {
            if t <= c {
                t.clone()
            } else {
                window_min(self.width, self.sign)
            }
        } else {
            a.clone()
        };
        let ub = if d > b {
            if t >= d {
                t.clone()
            } else {
                window_max(self.width, self.sign)
            }
        } else {
            b.clone()
        };
        let result = Self::from_raw_bounds(lb, ub, self.width, self.sign);
        debug!("widening_threshold({}, {}, t={}) = {}", self, other, threshold, result);
        result
    }

    /// Standard interval narrowing: refines a bound only when it sits at
    /// its representable extreme.
    pub fn narrowing(&self, other: &Self) -> Self {
        self.assert_compatible(other);
        let (a, b) = match &self.bounds {
            None => return Self::bottom(self.width, self.sign),
            Some(bounds) => bounds,
        };
        let (c, d) = match &other.bounds {
            None => return Self::bottom(self.width, self.sign),
            Some(bounds) => bounds,
        };
        let lb = if *a == window_min(self.width, self.sign) {
            c.clone()
        } else {
            a.clone()
        };
        let ub = if *b == window_max(self.width, self.sign) {
            d.clone()
        } else {
            b.clone()
        };
        if lb > ub {
            Self::bottom(self.width, self.sign)
        } else {
            Self::from_raw_bounds(lb, ub, self.width, self.sign)
        }
    }

    /// Narrowing that refuses to cross a threshold constant: a bound moves
    /// toward `other`'s improved bound but stops at the threshold coming
    /// from this side, so a known anchor constant is never erased.
    pub fn narrowing_threshold(&self, other: &Self, threshold: &MachineInt) -> Self {
        self.assert_compatible(other);
        assert_eq!(self.width, threshold.width(), "Bit width mismatch");
        assert_eq!(self.sign, threshold.sign(), "Signedness mismatch");
        let (a, b) = match &self.bounds {
            None => return Self::bottom(self.width, self.sign),
            Some(bounds) => bounds,
        };
        let (c, d) = match &other.bounds {
            None => return Self::bottom(self.width, self.sign),
            Some(bounds) => bounds,
        };
        let t = threshold.value();
        let lb = if c > a {
            // Improvement; clamp at the threshold if it lies on the way.
            if t >= a && t < c {
                t.clone()
            } else {
                c.clone()
            }
        } else {
            a.clone()
        };
        let ub = if d < b {
            if t <= b && t > d {
                t.clone()
            } else {
                d.clone()
            }
        } else {
            b.clone()
        };
        if lb > ub {
            Self::bottom(self.width, self.sign)
        } else {
            Self::from_raw_bounds(lb, ub, self.width, self.sign)
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.bounds {
            None => write!(f, "⊥"),
            Some((lb, ub)) => write!(f, "[{}, {}]", lb, ub),
        }
    }
}

impl Debug for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.bounds {
            None => write!(f, "⊥{}{}", self.sign, self.width),
            Some((lb, ub)) => write!(f, "[{}, {}]{}{}", lb, ub, self.sign, self.width),
        }
    }
}
