pub mod activities;
pub mod workouts;

pub use activities::ActivityType;
pub use workouts::{Running, SportsWalking, Swimming, WorkoutRecord};
