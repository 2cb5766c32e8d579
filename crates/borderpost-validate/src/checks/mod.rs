//! Structural checks, one module per level of the document.

pub mod document;
pub mod feature;
