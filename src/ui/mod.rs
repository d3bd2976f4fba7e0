//! UI building blocks
//!
//! Pure view functions: they project the loaded catalog and the current
//! selection into iced elements and emit messages; all state changes happen
//! in the application's update loop.

pub mod card;
pub mod filters;
