use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuarterError {
    #[error("Quarter must be between 1 and 4, got {0}")]
    InvalidQuarter(u32),

    #[error("Year {0} is outside the supported date range")]
    InvalidYear(i32),
}
