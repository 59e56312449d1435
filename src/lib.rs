//! Agro Aid - Crop and Fertilizer Recommendation Assistant
//!
//! A step-driven conversational front-end over two pre-trained classifiers:
//! a crop model suggesting soil type and crop variety, and a fertilizer
//! model. Includes the offline tooling that trains and checks the models.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
