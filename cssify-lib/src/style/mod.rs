pub mod naming;
pub mod selector;
pub mod unitless;
pub mod units;
