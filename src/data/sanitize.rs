use crate::constants::{FIELD_SENTINEL, POSITION_SENTINEL};

/// Field column value, with the table's missing marker mapped to NaN.
pub fn sanitize_field(value: f64) -> f64 {
    if value == FIELD_SENTINEL {
        f64::NAN
    } else {
        value
    }
}

/// Position column value (body radii), with the missing marker mapped to NaN.
/// Must run before scaling to meters, the sentinel is only exact in table units.
pub fn sanitize_position(value: f64) -> f64 {
    if value == POSITION_SENTINEL {
        f64::NAN
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(999999.99 => true; "field sentinel")]
    #[test_case(999.99999 => false; "position sentinel is a valid field value")]
    #[test_case(-12.5 => false; "ordinary reading")]
    fn test_sanitize_field(value: f64) -> bool {
        sanitize_field(value).is_nan()
    }

    #[test_case(999.99999 => true; "position sentinel")]
    #[test_case(999999.99 => false; "field sentinel is not a position marker")]
    #[test_case(1.02 => false; "ordinary position")]
    fn test_sanitize_position(value: f64) -> bool {
        sanitize_position(value).is_nan()
    }

    #[test]
    fn test_values_pass_through_unchanged() {
        assert_eq!(sanitize_field(31.25), 31.25);
        assert_eq!(sanitize_position(-3.5), -3.5);
    }
}
