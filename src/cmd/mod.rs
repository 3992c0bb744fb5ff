pub mod add;
pub mod evaluate;
pub mod import;
pub mod insights;
pub mod predict;
pub mod stats;
