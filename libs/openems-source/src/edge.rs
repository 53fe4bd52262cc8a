//! Edge direction of a step waveform.

use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Direction of a step: low-to-high or high-to-low.
///
/// # Examples
/// ```
/// use openems_source::Edge;
///
/// assert_eq!(Edge::try_from(-1), Ok(Edge::Falling));
/// assert_eq!(Edge::Rising.sign(), 1);
/// assert!(Edge::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Edge {
    #[default]
    Rising,
    Falling,
}

impl Edge {
    /// `+1` for a rising edge, `-1` for a falling one.
    pub fn sign(self) -> i32 {
        match self {
            Edge::Rising => 1,
            Edge::Falling => -1,
        }
    }
}

impl TryFrom<i32> for Edge {
    type Error = SourceError;

    fn try_from(sign: i32) -> Result<Self, Self::Error> {
        match sign {
            1 => Ok(Edge::Rising),
            -1 => Ok(Edge::Falling),
            other => Err(SourceError::InvalidSign(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_round_trip() {
        for edge in [Edge::Rising, Edge::Falling] {
            assert_eq!(Edge::try_from(edge.sign()), Ok(edge));
        }
    }

    #[test]
    fn test_rejects_other_signs() {
        for sign in [0, 2, -2, i32::MAX] {
            assert_eq!(Edge::try_from(sign), Err(SourceError::InvalidSign(sign)));
        }
    }
}
