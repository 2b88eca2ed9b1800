pub mod callisto;
pub mod flybys;
pub mod regimes;
