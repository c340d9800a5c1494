//! # Game Module
//!
//! Game rules independent of the window and GPU: level classification, chest
//! animation, collision, interaction and win progress, tied together by the
//! per-frame [`GameController`].

pub mod chest;
pub mod collision;
pub mod controller;
pub mod input;
pub mod interaction;
pub mod level;
pub mod progress;

pub use chest::Chest;
pub use collision::CollisionChecker;
pub use controller::GameController;
pub use input::{GameInput, InputQueue};
pub use interaction::Interaction;
pub use level::{Level, ObjectRole};
pub use progress::GameProgress;
