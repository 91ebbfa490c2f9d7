pub mod paths;
pub mod player;
pub mod task_slot;
