//! Core element traits for dynalg.

use std::ops::{Mul, Sub};

use num_traits::Zero;

/// Capabilities required of an element stored in a dense container.
///
/// `Zero` brings addition and the accumulator seed used by the product
/// operations; subtraction and multiplication cover the rest. Blanket
/// implemented, so the primitive integers and floats all qualify.
pub trait Element:
    Clone + PartialEq + Zero + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> Element for T where T: Clone + PartialEq + Zero + Sub<Output = Self> + Mul<Output = Self> {}
