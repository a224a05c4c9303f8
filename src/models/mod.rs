pub mod category;
pub mod common;
pub mod trail;

#[cfg(test)]
mod trail_test;
