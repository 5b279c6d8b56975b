//! Bitwise arithmetic built from boolean primitives: addition from XOR/AND
//! carry propagation, multiplication from shift-and-add, and the binary
//! reflected Gray code.

/// Adds two numbers using only bitwise operations.
///
/// Classic carry loop: the carry-less sum is `a ^ b`, the carries are
/// `(a & b) << 1`; repeat until no carry remains. Overflow wraps, like the
/// hardware adder this mimics.
pub const fn adder(a: u32, b: u32) -> u32 {
    let mut a = a;
    let mut b = b;
    while b != 0 {
        let carry = a & b;
        a ^= b;
        b = carry << 1;
    }
    a
}

/// Multiplies two numbers using only bitwise operations and [`adder`].
///
/// Shift-and-add over the set bits of `b`. Overflow wraps.
pub const fn multiplier(a: u32, b: u32) -> u32 {
    let mut res = 0;
    let mut mult = b;
    let mut shift = 0;
    while mult != 0 {
        if mult & 1 == 1 {
            res = adder(res, a << shift);
        }
        mult >>= 1;
        shift += 1;
    }
    res
}

/// Returns the binary reflected Gray code of `n`.
pub const fn gray_code(n: u32) -> u32 {
    n ^ (n >> 1)
}
