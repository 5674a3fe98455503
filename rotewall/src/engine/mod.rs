pub mod classifier;
pub mod policy;
