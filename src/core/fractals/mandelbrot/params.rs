use serde::{Deserialize, Serialize};

use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_BAILOUT: f64 = 2.0;
pub const DEFAULT_POWER: u32 = 2;

/// Iteration settings shared by every pixel of a render.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMandelbrotParams", into = "RawMandelbrotParams")]
pub struct MandelbrotParams {
    max_iterations: u32,
    bailout: f64,
    power: u32,
}

impl MandelbrotParams {
    pub fn new(max_iterations: u32, bailout: f64, power: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        if !bailout.is_finite() || bailout <= 0.0 {
            return Err(MandelbrotError::InvalidBailout { bailout });
        }

        if power < 2 {
            return Err(MandelbrotError::InvalidPower { power });
        }

        Ok(Self {
            max_iterations,
            bailout,
            power,
        })
    }

    pub fn with_max_iterations(max_iterations: u32) -> Result<Self, MandelbrotError> {
        Self::new(max_iterations, DEFAULT_BAILOUT, DEFAULT_POWER)
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn bailout(&self) -> f64 {
        self.bailout
    }

    pub fn power(&self) -> u32 {
        self.power
    }
}

impl Default for MandelbrotParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bailout: DEFAULT_BAILOUT,
            power: DEFAULT_POWER,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawMandelbrotParams {
    #[serde(default = "default_max_iterations")]
    max_iterations: u32,
    #[serde(default = "default_bailout")]
    bailout: f64,
    #[serde(default = "default_power")]
    power: u32,
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_bailout() -> f64 {
    DEFAULT_BAILOUT
}

fn default_power() -> u32 {
    DEFAULT_POWER
}

impl TryFrom<RawMandelbrotParams> for MandelbrotParams {
    type Error = MandelbrotError;

    fn try_from(raw: RawMandelbrotParams) -> Result<Self, Self::Error> {
        Self::new(raw.max_iterations, raw.bailout, raw.power)
    }
}

impl From<MandelbrotParams> for RawMandelbrotParams {
    fn from(params: MandelbrotParams) -> Self {
        Self {
            max_iterations: params.max_iterations,
            bailout: params.bailout,
            power: params.power,
        }
    }
}
