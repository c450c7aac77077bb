//! Main module for hyml library functionality

pub mod ast;
pub mod building;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
