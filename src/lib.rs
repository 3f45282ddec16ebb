//! Transparent overlay that draws Fibonacci retracement guides between two
//! points picked with a global draw key.

pub mod constants;
pub mod controller;
pub mod gui;
pub mod hotkey;
pub mod input;
pub mod input_hook;
pub mod levels;
pub mod logging;
pub mod messages;
pub mod render;
pub mod selection;
pub mod settings;
