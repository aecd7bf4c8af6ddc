use num_complex::Complex64;

/// One step of `z -> z^p + c`.
///
/// The quadratic case multiplies directly; other powers go through repeated
/// squaring, which keeps integer exponents exact and away from the branch
/// cut of the logarithmic form.
#[inline]
pub fn seed(z: Complex64, c: Complex64, power: u32) -> Complex64 {
    if power == 2 {
        z * z + c
    } else {
        z.powu(power) + c
    }
}
