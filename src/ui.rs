//! UI module for the PopSlider demo
//!
//! # Architecture
//!
//! - **Animation** (`animation`): Retained layers and implicit transitions
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Theme** (`theme`): Palette, slider defaults and container styles

pub mod animation;
pub mod primitives;
pub mod theme;
