pub mod body;

pub use body::BodyProperties;
