use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("range start {start} is past range end {end}")]
    Inverted { start: u32, end: u32 },
}
