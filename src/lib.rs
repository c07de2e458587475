//! Keypad-style arithmetic calculator.
//!
//! The [`calculator`] module holds the input state machine and number
//! formatting, [`input`] turns keys and keypad buttons into events, and [`ui`]
//! renders frames to a terminal.

pub mod calculator;
pub mod config;
pub mod input;
pub mod ui;
