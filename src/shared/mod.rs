pub mod patch;
pub mod test_helpers;
pub mod types;
