//! Command implementations for the wayfinder CLI

mod demo;
pub mod dispatch;
mod run;
