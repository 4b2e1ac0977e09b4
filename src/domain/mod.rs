pub mod ai;
pub mod echo;
pub mod health;
