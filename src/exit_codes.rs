//! Exit code constants for the prdiff CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, invalid glob)
//! - 2: Input could not be read
//! - 3: Input did not match the expected record shape

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration or filter patterns.
pub const USER_ERROR: i32 = 1;

/// Input failure: a diff or record file could not be read.
pub const INPUT_FAILURE: i32 = 2;

/// Format failure: JSON input does not match the pull-request wire shape.
pub const FORMAT_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, INPUT_FAILURE, FORMAT_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
