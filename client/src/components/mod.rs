//! Reusable UI component modules.

pub mod uploader_card;
