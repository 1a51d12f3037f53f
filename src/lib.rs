//! # wrapint-rs: Machine-Integer Intervals in Rust
//!
//! **`wrapint-rs`** is a small, safe library implementing the **machine-integer
//! interval abstract domain**: bounded ranges over fixed-bit-width, signed or
//! unsigned integers with two's-complement wrap-around semantics.
//! It is designed as the numerical core of abstract-interpretation-based
//! static analyzers for LLVM-style intermediate representations.
//!
//! ## What is an interval domain?
//!
//! An interval abstracts the set of values a program variable may hold as a
//! single range `[lb, ub]` (or `bottom` for "no value possible"). A fixpoint
//! engine drives the domain per statement: arithmetic operators compute
//! successor ranges, `join`/`widening` merge ranges at control-flow joins and
//! loop back-edges, and `narrowing` refines the result after the fixpoint.
//! Because every answer is a sound over-approximation, anything the domain
//! proves (for example "this index never exceeds 9") holds for every concrete
//! execution.
//!
//! ## Key Features
//!
//! - **Faithful machine semantics**: every operator models two's-complement
//!   wrap-around at the interval's declared `(bit_width, signedness)`, with
//!   `*_no_wrap` / `*_exact` variants that treat overflow as infeasible the
//!   way LLVM's `nsw`/`nuw`/`exact` flags do.
//! - **One shared primitive**: all arithmetic, bitwise, and cast operators
//!   lift to an arbitrary-precision [`ZInterval`][crate::zint::ZInterval],
//!   compute the exact unbounded result, and lower it back with a
//!   [`Wrap` or `Trunc`][crate::interval::OverflowPolicy] policy.
//! - **Convergence built in**: widening (plain and threshold-guided)
//!   guarantees termination of increasing iteration sequences; narrowing
//!   regains precision afterwards without reintroducing divergence.
//! - **Plain values**: intervals are copied by value, operators are pure,
//!   and nothing is shared, so analysis workers need no synchronization.
//!
//! ## Basic Usage
//!
//! ```rust
//! use wrapint_rs::int::MachineInt;
//! use wrapint_rs::interval::Interval;
//! use wrapint_rs::sign::Signedness::Signed;
//!
//! let mi = |v: i64| MachineInt::new(v, 8, Signed);
//!
//! // x in [1, 2], plus the constant 127, at 8-bit signed: wraps.
//! let x = Interval::new(mi(1), mi(2));
//! let c = Interval::singleton(mi(127));
//! assert_eq!(x.add(&c), Interval::new(mi(-128), mi(-127)));
//!
//! // The no-wrap variant discards the overflowing outcomes entirely.
//! assert!(x.add_no_wrap(&c).is_bottom());
//!
//! // Loop merges: widen until stable, then narrow back.
//! let once = Interval::new(mi(0), mi(10));
//! let again = Interval::new(mi(0), mi(20));
//! let widened = once.widening(&again);
//! assert_eq!(widened, Interval::new(mi(0), mi(127)));
//! ```
//!
//! ## Core Components
//!
//! - **[`interval`]**: the lattice element itself: construction, queries,
//!   join/meet/leq, widening/narrowing, and the ZInterval bridge.
//! - **[`ops`]**: wrap-around arithmetic and bitwise operators.
//! - **[`cast`]**: width and signedness conversions (`trunc`/`ext`/
//!   `sign_cast`/`cast`).
//! - **[`int`]**: [`MachineInt`][crate::int::MachineInt], the exact point
//!   value the bounds are made of.
//! - **[`zint`]**: the arbitrary-precision interval every operator lifts to.

pub mod cast;
pub mod int;
pub mod interval;
pub mod ops;
pub mod sign;
pub mod zint;
