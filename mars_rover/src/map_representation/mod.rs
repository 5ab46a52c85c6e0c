pub mod map;
pub mod obstacle_set;
