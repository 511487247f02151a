//! Multi-line rail route finder.
//!
//! Builds a station graph from a set of rail lines and answers: "how do I
//! get from this station to that one, changing lines as little as possible?"

pub mod config;
pub mod domain;
pub mod graph;
pub mod network;
pub mod router;
pub mod segments;
pub mod web;
