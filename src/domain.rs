//! Domain logic
//!
//! This module contains the presentation's domain types:
//! - The deck and its slides
//! - Notice value objects
//! - Call-to-action tokens and their notice table
//! - Text layout helpers

pub mod cta;
pub mod deck;
pub mod notice;
pub mod text;
