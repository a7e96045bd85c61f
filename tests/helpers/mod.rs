//! Shared fixtures for lowering tests.

#![allow(dead_code)]

pub mod oracles;
pub mod trees;
