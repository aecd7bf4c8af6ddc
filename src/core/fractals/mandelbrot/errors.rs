use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("Bailout radius must be finite and positive, got {bailout}")]
    InvalidBailout { bailout: f64 },
    #[error("Power must be at least 2, got {power}")]
    InvalidPower { power: u32 },
}
