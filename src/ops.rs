//! Wrap-around arithmetic and bitwise operators on [`Interval`].
//!
//! Every operator follows the same pipeline: lift both operands to
//! [`ZInterval`], compute the exact unbounded result, and lower it back
//! through [`Interval::from_z_interval`]. The wrapping operators lower
//! with [`OverflowPolicy::Wrap`]; the `*_no_wrap` / `*_exact` variants
//! lower with [`OverflowPolicy::Trunc`], discarding the portion of the
//! result that models an undefined-behavior outcome.

use std::cmp::{max, min};

use log::debug;
use num_bigint::BigInt;

use crate::int::{modulus, MachineInt};
use crate::interval::{Interval, OverflowPolicy};
use crate::zint::ZInterval;

/// `ceil(x / 2^s)`, via `ceil(x/d) = -floor(-x/d)`.
fn ceil_shr(x: &BigInt, s: u32) -> BigInt {
    -((-x) >> s)
}

impl Interval {
    fn lift2<F>(&self, other: &Self, policy: OverflowPolicy, op: F) -> Self
    where
        F: FnOnce(&ZInterval, &ZInterval) -> ZInterval,
    {
        self.assert_compatible(other);
        if self.is_bottom() || other.is_bottom() {
            return Self::bottom(self.width(), self.sign());
        }
        let z = op(&self.to_z_interval(), &other.to_z_interval());
        Self::from_z_interval(&z, self.width(), self.sign(), policy)
    }

    fn lift1<F>(&self, policy: OverflowPolicy, op: F) -> Self
    where
        F: FnOnce(&ZInterval) -> ZInterval,
    {
        if self.is_bottom() {
            return Self::bottom(self.width(), self.sign());
        }
        let z = op(&self.to_z_interval());
        Self::from_z_interval(&z, self.width(), self.sign(), policy)
    }

    /// The shift amounts of `shift` that are feasible at this width
    /// (non-negative and `< width`), read under the shift operand's own
    /// signedness. Bottom when every shift in the range is poison.
    fn feasible_shifts(&self, shift: &Self) -> ZInterval {
        shift
            .to_z_interval()
            .meet(&ZInterval::new(0, i64::from(self.width()) - 1))
    }

    /// The operand range reinterpreted as unsigned bit patterns, widened
    /// to the full window when the reinterpretation is not contiguous.
    fn unsigned_view_z(&self) -> ZInterval {
        let (lb, ub) = match self.raw_bounds() {
            None => return ZInterval::Bottom,
            Some(bounds) => bounds,
        };
        if *lb >= BigInt::ZERO {
            return ZInterval::new(lb.clone(), ub.clone());
        }
        let m = modulus(self.width());
        if *ub < BigInt::ZERO {
            ZInterval::new(lb + &m, ub + &m)
        } else {
            // Straddles zero: the unsigned image is two disjoint pieces.
            ZInterval::new(BigInt::ZERO, m - 1)
        }
    }

    /// The operand range reinterpreted as signed values, widened to the
    /// full window when the reinterpretation is not contiguous.
    fn signed_view_z(&self) -> ZInterval {
        let (lb, ub) = match self.raw_bounds() {
            None => return ZInterval::Bottom,
            Some(bounds) => bounds,
        };
        let half = modulus(self.width()) >> 1;
        if *ub < half {
            return ZInterval::new(lb.clone(), ub.clone());
        }
        let m = modulus(self.width());
        if *lb >= half {
            ZInterval::new(lb - &m, ub - &m)
        } else {
            // Straddles the sign bit.
            ZInterval::new(-&half, half - 1)
        }
    }
}

// Additive and multiplicative operators
impl Interval {
    /// Modular addition.
    pub fn add(&self, other: &Self) -> Self {
        let result = self.lift2(other, OverflowPolicy::Wrap, |a, b| a.add(b));
        debug!("add({}, {}) = {}", self, other, result);
        result
    }

    /// Addition whose overflowing outcomes are infeasible (`add nsw/nuw`).
    pub fn add_no_wrap(&self, other: &Self) -> Self {
        self.lift2(other, OverflowPolicy::Trunc, |a, b| a.add(b))
    }

    /// Modular subtraction.
    pub fn sub(&self, other: &Self) -> Self {
        let result = self.lift2(other, OverflowPolicy::Wrap, |a, b| a.sub(b));
        debug!("sub({}, {}) = {}", self, other, result);
        result
    }

    /// Subtraction whose overflowing outcomes are infeasible.
    pub fn sub_no_wrap(&self, other: &Self) -> Self {
        self.lift2(other, OverflowPolicy::Trunc, |a, b| a.sub(b))
    }

    /// Modular multiplication.
    pub fn mul(&self, other: &Self) -> Self {
        let result = self.lift2(other, OverflowPolicy::Wrap, |a, b| a.mul(b));
        debug!("mul({}, {}) = {}", self, other, result);
        result
    }

    /// Multiplication whose overflowing outcomes are infeasible.
    pub fn mul_no_wrap(&self, other: &Self) -> Self {
        self.lift2(other, OverflowPolicy::Trunc, |a, b| a.mul(b))
    }

    /// Truncating (toward-zero) division. A divisor that is exactly `{0}`
    /// cannot execute and yields bottom; a divisor range merely containing
    /// zero has the zero excluded.
    pub fn div(&self, other: &Self) -> Self {
        let result = self.lift2(other, OverflowPolicy::Wrap, |a, b| a.tdiv(b));
        debug!("div({}, {}) = {}", self, other, result);
        result
    }

    /// Division with a known-exact quotient (`sdiv exact` / `udiv exact`):
    /// an inexact singleton division is infeasible.
    pub fn div_exact(&self, other: &Self) -> Self {
        self.assert_compatible(other);
        if let (Some(n), Some(d)) = (self.singleton_value(), other.singleton_value()) {
            if d.is_zero() {
                return Self::bottom(self.width(), self.sign());
            }
            if n.value() % d.value() != BigInt::ZERO {
                return Self::bottom(self.width(), self.sign());
            }
        }
        self.lift2(other, OverflowPolicy::Trunc, |a, b| a.tdiv(b))
    }

    /// Truncating remainder (the sign of a non-zero result follows the
    /// dividend). A divisor that is exactly `{0}` yields bottom.
    pub fn rem(&self, other: &Self) -> Self {
        self.assert_compatible(other);
        let width = self.width();
        let sign = self.sign();
        let (nlb, nub) = match self.raw_bounds() {
            None => return Self::bottom(width, sign),
            Some(bounds) => bounds,
        };
        let (dlb, dub) = match other.raw_bounds() {
            None => return Self::bottom(width, sign),
            Some(bounds) => bounds,
        };

        if *dlb == BigInt::ZERO && *dub == BigInt::ZERO {
            debug!("rem({}, {}): divisor is exactly zero -> bottom", self, other);
            return Self::bottom(width, sign);
        }

        // Exact when both operands are known.
        if let (Some(n), Some(d)) = (self.singleton_value(), other.singleton_value()) {
            let r = n.value() % d.value();
            return Self::singleton(MachineInt::new(r, width, sign));
        }

        // |result| <= max(|d|) - 1, and the result sign follows the
        // dividend when the dividend's sign is known.
        let mag = max(dlb.magnitude().clone(), dub.magnitude().clone());
        let bound = BigInt::from(mag) - 1;
        let lb = if *nlb >= BigInt::ZERO {
            BigInt::ZERO
        } else {
            max(nlb.clone(), -&bound)
        };
        let ub = if *nub <= BigInt::ZERO {
            BigInt::ZERO
        } else {
            min(nub.clone(), bound)
        };
        let result = Self::from_z_interval(&ZInterval::new(lb, ub), width, sign, OverflowPolicy::Wrap);
        debug!("rem({}, {}) = {}", self, other, result);
        result
    }

    /// Modular negation (`sub 0, x`); negating the minimum wraps.
    pub fn neg(&self) -> Self {
        self.lift1(OverflowPolicy::Wrap, |z| z.neg())
    }
}

// Shift operators
impl Interval {
    /// Modular left shift. Shift amounts outside `[0, w-1]` are poison on
    /// every path they occur and are discarded before lifting.
    pub fn shl(&self, shift: &Self) -> Self {
        self.assert_compatible(shift);
        let feasible = self.feasible_shifts(shift);
        let result = self.lift2(shift, OverflowPolicy::Wrap, |a, _| a.shl_pow2(&feasible));
        debug!("shl({}, {}) = {}", self, shift, result);
        result
    }

    /// Left shift whose overflowing outcomes are infeasible (`shl nsw/nuw`).
    pub fn shl_no_wrap(&self, shift: &Self) -> Self {
        self.assert_compatible(shift);
        let feasible = self.feasible_shifts(shift);
        self.lift2(shift, OverflowPolicy::Trunc, |a, _| a.shl_pow2(&feasible))
    }

    /// Logical right shift: acts on the unsigned reading of the bit
    /// pattern.
    pub fn lshr(&self, shift: &Self) -> Self {
        self.assert_compatible(shift);
        if self.is_bottom() || shift.is_bottom() {
            return Self::bottom(self.width(), self.sign());
        }
        let feasible = self.feasible_shifts(shift);
        let z = self.unsigned_view_z().shr_floor(&feasible);
        let result = Self::from_z_interval(&z, self.width(), self.sign(), OverflowPolicy::Wrap);
        debug!("lshr({}, {}) = {}", self, shift, result);
        result
    }

    /// Logical right shift that requires the shifted-out bits to be zero
    /// (`lshr exact`): inexact outcomes are infeasible.
    pub fn lshr_exact(&self, shift: &Self) -> Self {
        self.assert_compatible(shift);
        if self.is_bottom() || shift.is_bottom() {
            return Self::bottom(self.width(), self.sign());
        }
        let feasible = self.feasible_shifts(shift);
        let z = exact_shr(&self.unsigned_view_z(), &feasible);
        Self::from_z_interval(&z, self.width(), self.sign(), OverflowPolicy::Trunc)
    }

    /// Arithmetic right shift: acts on the signed reading of the bit
    /// pattern.
    pub fn ashr(&self, shift: &Self) -> Self {
        self.assert_compatible(shift);
        if self.is_bottom() || shift.is_bottom() {
            return Self::bottom(self.width(), self.sign());
        }
        let feasible = self.feasible_shifts(shift);
        let z = self.signed_view_z().shr_floor(&feasible);
        let result = Self::from_z_interval(&z, self.width(), self.sign(), OverflowPolicy::Wrap);
        debug!("ashr({}, {}) = {}", self, shift, result);
        result
    }

    /// Arithmetic right shift that requires the shifted-out bits to be
    /// zero (`ashr exact`).
    pub fn ashr_exact(&self, shift: &Self) -> Self {
        self.assert_compatible(shift);
        if self.is_bottom() || shift.is_bottom() {
            return Self::bottom(self.width(), self.sign());
        }
        let feasible = self.feasible_shifts(shift);
        let z = exact_shr(&self.signed_view_z(), &feasible);
        Self::from_z_interval(&z, self.width(), self.sign(), OverflowPolicy::Trunc)
    }
}

/// Quotients of the exactly-divisible values of `z` under a shift.
/// With a known shift amount only the multiples of `2^s` survive; a shift
/// range falls back to the floor result, which covers every exact outcome.
fn exact_shr(z: &ZInterval, feasible: &ZInterval) -> ZInterval {
    match feasible {
        ZInterval::Bottom => ZInterval::Bottom,
        ZInterval::Range { lb: s0, ub: s1 } if s0 == s1 => {
            if z.is_bottom() {
                return ZInterval::Bottom;
            }
            let s = u32::try_from(s0).expect("Shift amount out of range");
            ZInterval::new(ceil_shr(z.lb(), s), z.ub() >> s)
        }
        _ => z.shr_floor(feasible),
    }
}

// Bitwise operators
impl Interval {
    /// Bitwise AND.
    ///
    /// Exact for two known values; classical unsigned bounds when both
    /// ranges are wholly non-negative; top otherwise (an ambiguous sign
    /// bit makes the operator non-monotonic over the linear order).
    pub fn and_(&self, other: &Self) -> Self {
        self.bitwise(other, "and", |a, b| a & b, |_, ub_a, ub_b| {
            ZInterval::new(BigInt::ZERO, min(ub_a, ub_b).clone())
        })
    }

    /// Bitwise OR; same precision table as [`and_`][Interval::and_].
    pub fn or_(&self, other: &Self) -> Self {
        self.bitwise(other, "or", |a, b| a | b, |w, ub_a, ub_b| {
            ZInterval::new(BigInt::ZERO, bit_ceiling(max(ub_a, ub_b), w))
        })
    }

    /// Bitwise XOR; same precision table as [`and_`][Interval::and_].
    pub fn xor_(&self, other: &Self) -> Self {
        self.bitwise(other, "xor", |a, b| a ^ b, |w, ub_a, ub_b| {
            ZInterval::new(BigInt::ZERO, bit_ceiling(max(ub_a, ub_b), w))
        })
    }

    /// Bitwise complement: exactly `-x - 1` at every width.
    pub fn not_(&self) -> Self {
        self.lift1(OverflowPolicy::Wrap, |z| {
            z.neg().sub(&ZInterval::singleton(1))
        })
    }

    fn bitwise<E, R>(&self, other: &Self, name: &str, exact: E, ranged: R) -> Self
    where
        E: FnOnce(&BigInt, &BigInt) -> BigInt,
        R: FnOnce(u32, &BigInt, &BigInt) -> ZInterval,
    {
        self.assert_compatible(other);
        let width = self.width();
        let sign = self.sign();
        if self.is_bottom() || other.is_bottom() {
            return Self::bottom(width, sign);
        }

        if let (Some(a), Some(b)) = (self.singleton_value(), other.singleton_value()) {
            // BigInt bitwise ops use infinite two's complement, which
            // agrees with the fixed width on in-window values.
            let r = exact(a.value(), b.value());
            return Self::singleton(MachineInt::new(r, width, sign));
        }

        let (lb_a, ub_a) = self.raw_bounds().unwrap();
        let (lb_b, ub_b) = other.raw_bounds().unwrap();
        if *lb_a >= BigInt::ZERO && *lb_b >= BigInt::ZERO {
            let z = ranged(width, ub_a, ub_b);
            return Self::from_z_interval(&z, width, sign, OverflowPolicy::Trunc);
        }

        debug!("{}({}, {}): ambiguous sign bit -> top", name, self, other);
        Self::top(width, sign)
    }
}

/// `2^bits(v) - 1`, capped at the width's unsigned maximum: the smallest
/// all-ones pattern covering `v`.
fn bit_ceiling(v: &BigInt, width: u32) -> BigInt {
    let bits = min(v.bits(), u64::from(width)) as u32;
    (BigInt::from(1) << bits) - 1
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::sign::Signedness;
    use crate::sign::Signedness::{Signed, Unsigned};

    fn mi(v: i64, w: u32, s: Signedness) -> MachineInt {
        MachineInt::new(v, w, s)
    }

    fn ival(lb: i64, ub: i64, w: u32, s: Signedness) -> Interval {
        Interval::new(mi(lb, w, s), mi(ub, w, s))
    }

    fn point(v: i64, w: u32, s: Signedness) -> Interval {
        Interval::singleton(mi(v, w, s))
    }

    #[test]
    fn test_add_wraps() {
        // [1,2] + [127,127] wraps past the signed maximum.
        assert_eq!(
            ival(1, 2, 8, Signed).add(&point(127, 8, Signed)),
            ival(-128, -127, 8, Signed)
        );
        // In-range addition stays exact.
        assert_eq!(
            ival(1, 2, 8, Signed).add(&ival(10, 20, 8, Signed)),
            ival(11, 22, 8, Signed)
        );
        // Partially wrapping result straddles the window: top.
        assert!(ival(100, 120, 8, Signed).add(&ival(0, 100, 8, Signed)).is_top());
    }

    #[test]
    fn test_add_no_wrap_discards_overflow() {
        // Every outcome overflows: bottom.
        assert!(ival(1, 2, 8, Signed).add_no_wrap(&point(127, 8, Signed)).is_bottom());
        // The overflowing tail is dropped, the feasible part survives.
        assert_eq!(
            ival(0, 2, 8, Signed).add_no_wrap(&point(126, 8, Signed)),
            ival(126, 127, 8, Signed)
        );
        assert_eq!(
            ival(250, 255, 8, Unsigned).add_no_wrap(&point(5, 8, Unsigned)),
            point(255, 8, Unsigned)
        );
    }

    #[test]
    fn test_sub() {
        assert_eq!(
            ival(0, 10, 8, Signed).sub(&ival(1, 2, 8, Signed)),
            ival(-2, 9, 8, Signed)
        );
        // Unsigned subtraction wraps below zero.
        assert_eq!(
            point(0, 8, Unsigned).sub(&point(1, 8, Unsigned)),
            point(255, 8, Unsigned)
        );
        assert!(point(0, 8, Unsigned).sub_no_wrap(&point(1, 8, Unsigned)).is_bottom());
        assert_eq!(
            ival(0, 10, 8, Unsigned).sub_no_wrap(&point(5, 8, Unsigned)),
            ival(0, 5, 8, Unsigned)
        );
    }

    #[test]
    fn test_mul() {
        assert_eq!(
            ival(2, 3, 8, Signed).mul(&ival(4, 5, 8, Signed)),
            ival(8, 15, 8, Signed)
        );
        assert_eq!(
            ival(-2, 3, 8, Signed).mul(&point(-5, 8, Signed)),
            ival(-15, 10, 8, Signed)
        );
        // 16 * 16 = 256 wraps to 0 at 8 bits.
        assert_eq!(point(16, 8, Unsigned).mul(&point(16, 8, Unsigned)), point(0, 8, Unsigned));
        assert!(point(16, 8, Unsigned).mul_no_wrap(&point(16, 8, Unsigned)).is_bottom());
    }

    #[test]
    fn test_div() {
        assert_eq!(
            ival(10, 20, 8, Signed).div(&ival(3, 4, 8, Signed)),
            ival(2, 6, 8, Signed)
        );
        // Divisor range containing zero: zero excluded, both sign parts kept.
        assert_eq!(
            ival(10, 20, 8, Signed).div(&ival(-2, 2, 8, Signed)),
            ival(-20, 20, 8, Signed)
        );
        // Exact-zero divisor cannot execute.
        assert!(ival(10, 20, 8, Signed).div(&point(0, 8, Signed)).is_bottom());
        // Signed minimum / -1 wraps back to the minimum.
        assert_eq!(point(-128, 8, Signed).div(&point(-1, 8, Signed)), point(-128, 8, Signed));
    }

    #[test]
    fn test_div_exact() {
        assert_eq!(point(12, 8, Signed).div_exact(&point(4, 8, Signed)), point(3, 8, Signed));
        // Provably inexact: infeasible.
        assert!(point(13, 8, Signed).div_exact(&point(4, 8, Signed)).is_bottom());
        assert!(point(13, 8, Signed).div_exact(&point(0, 8, Signed)).is_bottom());
        // Range operands keep the truncating result.
        assert_eq!(
            ival(10, 20, 8, Signed).div_exact(&point(4, 8, Signed)),
            ival(2, 5, 8, Signed)
        );
    }

    #[test]
    fn test_rem() {
        // Exact-zero divisor: bottom, even from top.
        assert!(Interval::top(8, Signed).rem(&point(0, 8, Signed)).is_bottom());
        // Magnitude bounded by |divisor| - 1.
        assert_eq!(
            Interval::top(8, Signed).rem(&point(10, 8, Signed)),
            ival(-9, 9, 8, Signed)
        );
        // Sign follows the dividend when known.
        assert_eq!(
            ival(0, 100, 8, Signed).rem(&point(10, 8, Signed)),
            ival(0, 9, 8, Signed)
        );
        assert_eq!(
            ival(-100, 0, 8, Signed).rem(&point(10, 8, Signed)),
            ival(-9, 0, 8, Signed)
        );
        // A small dividend also bounds the result.
        assert_eq!(
            ival(0, 5, 8, Signed).rem(&point(10, 8, Signed)),
            ival(0, 5, 8, Signed)
        );
        // Singleton remainder is exact and truncating.
        assert_eq!(point(-7, 8, Signed).rem(&point(4, 8, Signed)), point(-3, 8, Signed));
        // Divisor containing zero among others does not force bottom.
        assert_eq!(
            ival(0, 100, 8, Signed).rem(&ival(0, 10, 8, Signed)),
            ival(0, 9, 8, Signed)
        );
    }

    #[test]
    fn test_neg_not() {
        assert_eq!(ival(1, 5, 8, Signed).neg(), ival(-5, -1, 8, Signed));
        // Negating the minimum wraps back onto itself.
        assert_eq!(point(-128, 8, Signed).neg(), point(-128, 8, Signed));
        assert_eq!(ival(0, 5, 8, Signed).not_(), ival(-6, -1, 8, Signed));
        assert_eq!(point(0, 8, Unsigned).not_(), point(255, 8, Unsigned));
    }

    #[test]
    fn test_shl() {
        assert_eq!(
            ival(1, 2, 8, Unsigned).shl(&point(3, 8, Unsigned)),
            ival(8, 16, 8, Unsigned)
        );
        // 3 << 7 = 384 wraps to 128 at 8 bits unsigned.
        assert_eq!(point(3, 8, Unsigned).shl(&point(7, 8, Unsigned)), point(128, 8, Unsigned));
        assert!(point(3, 8, Unsigned).shl_no_wrap(&point(7, 8, Unsigned)).is_bottom());
        assert_eq!(
            ival(1, 100, 8, Unsigned).shl_no_wrap(&point(1, 8, Unsigned)),
            ival(2, 200, 8, Unsigned)
        );
        // Every shift amount is poison: bottom.
        assert!(point(1, 8, Unsigned).shl(&point(8, 8, Unsigned)).is_bottom());
        // Partially feasible shift range keeps its feasible part.
        assert_eq!(
            point(1, 8, Unsigned).shl(&ival(6, 9, 8, Unsigned)),
            ival(64, 128, 8, Unsigned)
        );
    }

    #[test]
    fn test_lshr() {
        assert_eq!(
            ival(16, 64, 8, Unsigned).lshr(&point(2, 8, Unsigned)),
            ival(4, 16, 8, Unsigned)
        );
        // Acts on the bit pattern: -1i8 is 255, 255 >> 4 = 15.
        assert_eq!(point(-1, 8, Signed).lshr(&point(4, 8, Signed)), point(15, 8, Signed));
        assert_eq!(
            point(16, 8, Unsigned).lshr_exact(&point(2, 8, Unsigned)),
            point(4, 8, Unsigned)
        );
        // No multiple of 2^2 in [17, 18]... 17 and 18 shifted out non-zero bits.
        assert!(ival(17, 18, 8, Unsigned).lshr_exact(&point(2, 8, Unsigned)).is_bottom());
        assert_eq!(
            ival(15, 17, 8, Unsigned).lshr_exact(&point(4, 8, Unsigned)),
            point(1, 8, Unsigned)
        );
    }

    #[test]
    fn test_ashr() {
        assert_eq!(
            ival(-64, 64, 8, Signed).ashr(&point(2, 8, Signed)),
            ival(-16, 16, 8, Signed)
        );
        // Floors toward negative infinity: -5 >> 1 = -3.
        assert_eq!(point(-5, 8, Signed).ashr(&point(1, 8, Signed)), point(-3, 8, Signed));
        // Unsigned operand with the high bit set reads as negative: 255 is
        // -1, so ashr keeps it at 255.
        assert_eq!(point(255, 8, Unsigned).ashr(&point(3, 8, Unsigned)), point(255, 8, Unsigned));
        assert_eq!(
            point(-16, 8, Signed).ashr_exact(&point(2, 8, Signed)),
            point(-4, 8, Signed)
        );
        assert!(ival(-15, -13, 8, Signed).ashr_exact(&point(2, 8, Signed)).is_bottom());
    }

    #[test]
    fn test_bitwise_singletons_exact() {
        assert_eq!(point(0b1100, 8, Unsigned).and_(&point(0b1010, 8, Unsigned)), point(0b1000, 8, Unsigned));
        assert_eq!(point(0b1100, 8, Unsigned).or_(&point(0b1010, 8, Unsigned)), point(0b1110, 8, Unsigned));
        assert_eq!(point(0b1100, 8, Unsigned).xor_(&point(0b1010, 8, Unsigned)), point(0b0110, 8, Unsigned));
        // Two's complement on signed values.
        assert_eq!(point(-1, 8, Signed).and_(&point(5, 8, Signed)), point(5, 8, Signed));
        assert_eq!(point(-1, 8, Signed).xor_(&point(5, 8, Signed)), point(-6, 8, Signed));
    }

    #[test]
    fn test_bitwise_nonneg_ranges() {
        let a = ival(0, 12, 8, Unsigned);
        let b = ival(0, 10, 8, Unsigned);
        assert_eq!(a.and_(&b), ival(0, 10, 8, Unsigned));
        // or/xor bounded by the covering all-ones pattern of 12 (0b1111).
        assert_eq!(a.or_(&b), ival(0, 15, 8, Unsigned));
        assert_eq!(a.xor_(&b), ival(0, 15, 8, Unsigned));
        // Also applies to signed non-negative ranges.
        assert_eq!(ival(0, 12, 8, Signed).and_(&ival(0, 10, 8, Signed)), ival(0, 10, 8, Signed));
    }

    #[test]
    fn test_bitwise_ambiguous_sign_is_top() {
        let straddling = ival(-1, 1, 8, Signed);
        let small = ival(0, 3, 8, Signed);
        assert!(straddling.and_(&small).is_top());
        assert!(small.or_(&straddling).is_top());
        assert!(ival(-5, -2, 8, Signed).xor_(&small).is_top());
    }

    #[test]
    fn test_bottom_propagates() {
        let bot = Interval::bottom(8, Signed);
        let i = ival(0, 10, 8, Signed);
        assert!(bot.add(&i).is_bottom());
        assert!(i.sub(&bot).is_bottom());
        assert!(bot.mul(&bot).is_bottom());
        assert!(i.rem(&bot).is_bottom());
        assert!(bot.shl(&i).is_bottom());
        assert!(i.lshr(&bot).is_bottom());
        assert!(bot.and_(&i).is_bottom());
        assert!(bot.neg().is_bottom());
        assert!(bot.not_().is_bottom());
    }
}
