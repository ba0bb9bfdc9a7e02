use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CantorError {
    #[error("invalid argument: depth must be >= 0, got {depth}")]
    NegativeDepth { depth: i32 },
    #[error("depth {depth} produces more items than can be addressed (max depth {max})")]
    DepthTooLarge { depth: i32, max: u32 },
}

/// Validates a requested recursion depth.
///
/// `max` is the deepest level whose item count still fits in a `usize`.
pub(crate) fn checked_depth(depth: i32, max: u32) -> Result<u32, CantorError> {
    let Ok(unsigned) = u32::try_from(depth) else {
        return Err(CantorError::NegativeDepth { depth });
    };

    if unsigned > max {
        return Err(CantorError::DepthTooLarge { depth, max });
    }

    Ok(unsigned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_depth_is_invalid_argument() {
        let err = checked_depth(-1, 10).unwrap_err();

        assert_eq!(err, CantorError::NegativeDepth { depth: -1 });
        assert!(err.to_string().starts_with("invalid argument"));
    }

    #[test]
    fn depth_above_max_is_rejected() {
        assert_eq!(
            checked_depth(11, 10),
            Err(CantorError::DepthTooLarge { depth: 11, max: 10 })
        );
    }

    #[test]
    fn zero_and_max_are_accepted() {
        assert_eq!(checked_depth(0, 10), Ok(0));
        assert_eq!(checked_depth(10, 10), Ok(10));
    }
}
