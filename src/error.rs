// Failures of the fallible (try_*) concatenation entry points.
// The infallible paths abort on allocation failure like String does.
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatError {
    /// Summed piece lengths do not fit in `usize`
    CapacityOverflow,
    /// Allocator refused to grow the buffer to `requested` bytes
    Alloc { requested: usize },
}

impl fmt::Display for CatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatError::CapacityOverflow => write!(f, "strcat: total length overflows usize"),
            CatError::Alloc { requested } => {
                write!(f, "strcat: allocation of {} bytes failed", requested)
            }
        }
    }
}

impl core::error::Error for CatError {}
