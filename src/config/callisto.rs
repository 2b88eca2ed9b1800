use crate::constants::CALLISTO_RADIUS;
use crate::models::body::BodyProperties;

pub struct Callisto;

impl Callisto {
    pub const NAME: &'static str = "CALLISTO";
    pub const RADIUS: f64 = CALLISTO_RADIUS; // meters
}

impl BodyProperties for Callisto {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn radius(&self) -> f64 {
        Self::RADIUS
    }

    fn magnetometer_table(&self, orbit: u32) -> String {
        format!("ORB{:02}_CALL_CPHIO.TAB", orbit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(3, "ORB03_CALL_CPHIO.TAB"; "single digit orbit is zero padded")]
    #[test_case(30, "ORB30_CALL_CPHIO.TAB"; "two digit orbit")]
    fn test_magnetometer_table(orbit: u32, expected: &str) {
        assert_eq!(Callisto.magnetometer_table(orbit), expected);
    }
}
