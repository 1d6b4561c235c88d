pub mod entity;

pub use entity::{ReceivedWorkoutMeta, User, UserPreferences};
