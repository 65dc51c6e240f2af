//! Layer animation system for PopSlider
//!
//! Retained layers whose properties animate implicitly, built on `iced_anim`
//! transitions.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::animation::{LayerId, Layers, Transaction};
//!
//! // Geometry updates land in a single frame
//! let mut batch = layers.begin(Transaction::disabled());
//! batch.set_frame(LayerId::Track, track);
//! ```

mod layer;
mod transition;

pub use layer::{Layer, LayerId, Layers};
pub use transition::Transaction;
