pub mod analyze;
pub mod completion;
