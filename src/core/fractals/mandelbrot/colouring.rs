use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::fractals::mandelbrot::orbit::Escape;
use crate::core::fractals::registry::{
    resolve, AlgorithmCategory, RegistryKind, UnknownAlgorithmError,
};

/// Converts an escape result into the potential that drives colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ColouringKind {
    IterationCount,
    ContinuousIterationCount,
    #[default]
    SmoothIterationCount,
}

impl ColouringKind {
    /// Potential of a pixel. Points that never escaped get exactly `max_iterations`.
    pub fn potential(self, escape: Escape, max_iterations: u32, bailout: f64, power: u32) -> f64 {
        if escape.escape_time >= max_iterations {
            return f64::from(max_iterations);
        }

        match self {
            Self::IterationCount => iteration_count(escape),
            Self::ContinuousIterationCount => continuous_iteration_count(escape, bailout, power),
            Self::SmoothIterationCount => smooth_iteration_count(escape, bailout, power),
        }
    }
}

fn iteration_count(escape: Escape) -> f64 {
    f64::from(escape.escape_time)
}

// Divides by zero when |z_N| == bailout; the resulting infinity is clamped by the palette.
fn continuous_iteration_count(escape: Escape, bailout: f64, power: u32) -> f64 {
    let exponent = f64::from(power);
    let radius_pow = escape.final_z.norm().powf(exponent);

    f64::from(escape.escape_time) + 1.0
        - (radius_pow - bailout.powf(exponent)) / (radius_pow - bailout)
}

fn smooth_iteration_count(escape: Escape, bailout: f64, power: u32) -> f64 {
    let log_ratio = escape.final_z.norm().ln() / bailout.ln();

    f64::from(escape.escape_time) + 1.0 - log_ratio.ln() / f64::from(power).ln()
}

impl RegistryKind for ColouringKind {
    const CATEGORY: AlgorithmCategory = AlgorithmCategory::Colouring;
    const ALL: &'static [Self] = &[
        Self::SmoothIterationCount,
        Self::IterationCount,
        Self::ContinuousIterationCount,
    ];

    fn identifier(self) -> &'static str {
        match self {
            Self::IterationCount => "iteration-count",
            Self::ContinuousIterationCount => "continuous-iteration-count",
            Self::SmoothIterationCount => "smooth-iteration-count",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::IterationCount => "Iteration count",
            Self::ContinuousIterationCount => "Continuous iteration count",
            Self::SmoothIterationCount => "Smooth iteration count",
        }
    }
}

impl fmt::Display for ColouringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColouringKind {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

impl TryFrom<String> for ColouringKind {
    type Error = UnknownAlgorithmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColouringKind> for &'static str {
    fn from(kind: ColouringKind) -> Self {
        kind.identifier()
    }
}
