#[path = "shared/load.rs"]
pub mod load;
