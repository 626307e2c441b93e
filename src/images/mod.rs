//! Prompt construction and the single DALL-E 3 request behind every
//! generated icon or headline image.

pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod models;
pub mod service;
pub mod structs;
