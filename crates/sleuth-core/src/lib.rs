#![deny(warnings)]
//! Deduction engine for Clue-style board games: tracks which location
//! (player or the solution envelope) holds each card and cascades every
//! observation into all the certain facts it implies.

pub mod catalog;
pub mod engine;
pub mod model;
