pub mod pileup;
pub mod pressure_balance;
