#![cfg_attr(not(doctest), doc = include_str!("../README.md"))]
pub mod cache;
pub mod functions;
pub mod objective;
pub mod types;
