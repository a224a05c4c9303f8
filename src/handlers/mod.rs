pub mod health;
pub mod trails;
