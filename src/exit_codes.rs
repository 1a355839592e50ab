//! Exit code constants for the splitdiff CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input)
//! - 2: Parse failure (catastrophic diff input)
//! - 3: Git operation failure
//! - 4: Configuration failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input file, unknown file selection.
pub const USER_ERROR: i32 = 1;

/// Parse failure: the diff text could not be read as a unified diff.
pub const PARSE_FAILURE: i32 = 2;

/// Git operation failure: git missing, bad revision, not a repository.
pub const GIT_FAILURE: i32 = 3;

/// Configuration failure: unreadable or invalid config file.
pub const CONFIG_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, PARSE_FAILURE, GIT_FAILURE, CONFIG_FAILURE];
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
