//! # Record Primitives
//!
//! Fixed constants of the `name,wins,losses` text record.
//!
//! These are compiled in and never configurable at runtime.

/// Separator between the fields of a text record.
pub const FIELD_DELIMITER: char = ',';

/// Number of fields in a well-formed text record: name, wins, losses.
pub const RECORD_FIELD_COUNT: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_has_three_fields() {
        assert_eq!(RECORD_FIELD_COUNT, 3);
    }

    #[test]
    fn delimiter_is_comma() {
        assert_eq!(FIELD_DELIMITER, ',');
    }
}
