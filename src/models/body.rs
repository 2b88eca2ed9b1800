pub trait BodyProperties {
    fn name(&self) -> &str;
    /// Mean radius in meters
    fn radius(&self) -> f64;
    /// Identifier of the magnetometer table for a numbered orbit
    fn magnetometer_table(&self, orbit: u32) -> String;
}
