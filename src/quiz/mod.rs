//! Quiz core: the question store and the swipe controller that mutates it.

mod controller;
mod store;

pub use controller::SwipeController;
pub use store::QuestionStore;
