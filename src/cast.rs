//! Width and signedness conversions on [`Interval`], mirroring the
//! trunc/zext/sext-then-reinterpret pipeline of LLVM cast instructions.
//!
//! All four conversions are thin wrappers over the ZInterval bridge: the
//! interval is read as an exact unbounded range and lowered into the
//! target `(width, sign)` with `Wrap` semantics, so anything that cannot
//! be represented contiguously in the target order becomes top.

use log::debug;

use crate::interval::{Interval, OverflowPolicy};
use crate::sign::Signedness;

impl Interval {
    /// Truncation to a smaller width. Top when the range spans more than
    /// `2^new_width` residues; otherwise the range is shifted by the
    /// unique multiple of `2^new_width` into the smaller window.
    ///
    /// # Panics
    ///
    /// Panics if `new_width` is zero or larger than the current width.
    pub fn trunc(&self, new_width: u32) -> Self {
        assert!(
            new_width <= self.width(),
            "trunc to a larger width: {} -> {}",
            self.width(),
            new_width
        );
        let result =
            Self::from_z_interval(&self.to_z_interval(), new_width, self.sign(), OverflowPolicy::Wrap);
        debug!("trunc({}, w={}) = {}", self, new_width, result);
        result
    }

    /// Extension to a larger width: zero- or sign-extends per the
    /// interval's own signedness. Always exact.
    ///
    /// # Panics
    ///
    /// Panics if `new_width` is smaller than the current width.
    pub fn ext(&self, new_width: u32) -> Self {
        assert!(
            new_width >= self.width(),
            "ext to a smaller width: {} -> {}",
            self.width(),
            new_width
        );
        // The values fit the larger window as-is, so Wrap never fires.
        Self::from_z_interval(&self.to_z_interval(), new_width, self.sign(), OverflowPolicy::Wrap)
    }

    /// Reinterpretation under the other signedness at the same width.
    /// Exact when the range stays contiguous in the target order; top
    /// when it straddles the target's discontinuity.
    pub fn sign_cast(&self, new_sign: Signedness) -> Self {
        let result =
            Self::from_z_interval(&self.to_z_interval(), self.width(), new_sign, OverflowPolicy::Wrap);
        debug!("sign_cast({}, {:?}) = {}", self, new_sign, result);
        result
    }

    /// General cast: truncate (when shrinking) or extend (when growing)
    /// at the source signedness, then reinterpret at the target one.
    pub fn cast(&self, new_width: u32, new_sign: Signedness) -> Self {
        if new_width < self.width() {
            self.trunc(new_width).sign_cast(new_sign)
        } else {
            self.ext(new_width).sign_cast(new_sign)
        }
    }
}
