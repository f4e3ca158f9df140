//! Pure UI helpers shared by widget components.

pub mod labels;
