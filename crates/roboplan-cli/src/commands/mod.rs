pub mod context;
pub mod floor_plan;
pub mod path;
pub mod sequence;
pub mod task;
