use num_complex::Complex64;

use crate::core::fractals::mandelbrot::seed::seed;

/// Escape time together with the last iterate reached.
///
/// This is everything the colouring models consume, so the field generator
/// works with it instead of a full [`Orbit`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Escape {
    pub escape_time: u32,
    pub final_z: Complex64,
}

/// Truncated orbit `z_0, z_1, ..., z_N` of a single starting point.
///
/// `N` is the escape time: the index of the first iterate with
/// `|z_N| > bailout`, or `max_iterations` if none escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    samples: Vec<Complex64>,
    escape_time: u32,
}

impl Orbit {
    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    pub fn escape_time(&self) -> u32 {
        self.escape_time
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn final_value(&self) -> Complex64 {
        self.samples[self.samples.len() - 1]
    }

    pub fn escape(&self) -> Escape {
        Escape {
            escape_time: self.escape_time,
            final_z: self.final_value(),
        }
    }

    /// `(|z_{n-1}|, |z_n|)`, which brackets the bailout radius when `n` is
    /// the escape time of an escaped orbit.
    pub fn bailout_pair(&self, n: usize) -> Option<(f64, f64)> {
        if n == 0 || n >= self.samples.len() {
            return None;
        }

        Some((self.samples[n - 1].norm(), self.samples[n].norm()))
    }
}

// Orbits of interior points run the whole budget; don't reserve it all up front.
const MAX_PREALLOCATED_SAMPLES: usize = 1024;

/// Iterates the seed function from `z0`, recording every visited value.
pub fn orbit(z0: Complex64, c: Complex64, max_iterations: u32, bailout: f64, power: u32) -> Orbit {
    let capacity = (max_iterations as usize).saturating_add(1).min(MAX_PREALLOCATED_SAMPLES);
    let mut samples = Vec::with_capacity(capacity);

    let Escape { escape_time, .. } =
        iterate(z0, c, max_iterations, bailout, power, |z| samples.push(z));

    Orbit {
        samples,
        escape_time,
    }
}

/// Same iteration as [`orbit`] without keeping the samples.
#[inline]
pub fn escape(z0: Complex64, c: Complex64, max_iterations: u32, bailout: f64, power: u32) -> Escape {
    iterate(z0, c, max_iterations, bailout, power, |_| {})
}

#[inline(always)]
fn iterate(
    z0: Complex64,
    c: Complex64,
    max_iterations: u32,
    bailout: f64,
    power: u32,
    mut visit: impl FnMut(Complex64),
) -> Escape {
    let bailout_squared = bailout * bailout;
    let mut z = z0;
    visit(z);

    for n in 1..=max_iterations {
        z = seed(z, c, power);
        visit(z);

        if z.norm_sqr() > bailout_squared {
            return Escape {
                escape_time: n,
                final_z: z,
            };
        }
    }

    Escape {
        escape_time: max_iterations,
        final_z: z,
    }
}
