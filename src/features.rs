//! Feature modules - application logic separated from UI

pub mod settings;

pub use settings::Settings;
