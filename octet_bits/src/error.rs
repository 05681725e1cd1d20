use bytemuck::PodCastError;
use bytemuck::checked::CheckedCastError;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsError {
    #[cfg_attr(feature = "std", error("Octet bit index must be in the range 0..=7, got {0}"))]
    InvalidOctetIndex(u8),

    #[cfg_attr(
        feature = "std",
        error("Quartet bit index must be in the range 0..=3, got {0}")
    )]
    InvalidQuartetIndex(u8),

    #[cfg_attr(
        feature = "std",
        error("Quartet position must be 0 (lo) or 1 (hi), got {0}")
    )]
    InvalidQuartetPosition(u8),

    #[cfg_attr(feature = "std", error("Value {0:#04x} does not fit in 4 bits"))]
    QuartetOverflow(u8),

    #[cfg_attr(feature = "std", error("byte is not a valid quartet bit pattern"))]
    InvalidBitPattern,

    #[cfg_attr(feature = "std", error("slice cast failed: {0:?}"))]
    Cast(PodCastError),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitsError::InvalidOctetIndex(i) => {
                write!(f, "Octet bit index must be in the range 0..=7, got {}", i)
            }
            BitsError::InvalidQuartetIndex(i) => {
                write!(f, "Quartet bit index must be in the range 0..=3, got {}", i)
            }
            BitsError::InvalidQuartetPosition(p) => {
                write!(f, "Quartet position must be 0 (lo) or 1 (hi), got {}", p)
            }
            BitsError::QuartetOverflow(v) => write!(f, "Value {:#04x} does not fit in 4 bits", v),
            BitsError::InvalidBitPattern => write!(f, "byte is not a valid quartet bit pattern"),
            BitsError::Cast(e) => write!(f, "slice cast failed: {:?}", e),
        }
    }
}

impl From<CheckedCastError> for BitsError {
    fn from(err: CheckedCastError) -> Self {
        match err {
            CheckedCastError::InvalidBitPattern => BitsError::InvalidBitPattern,
            CheckedCastError::PodCastError(e) => BitsError::Cast(e),
        }
    }
}
