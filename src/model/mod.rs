//! Typed records returned by the Fruityvice API.

pub mod fruit;

pub use fruit::*;
