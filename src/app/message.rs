//! Application messages

/// Which demo slider a message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderId {
    Volume,
    Brightness,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Sliders ============
    /// A slider published a value-changed notification
    SliderChanged(SliderId, f32),
    /// Switch a slider between continuous and discrete notifications
    ToggleContinuous(SliderId, bool),
    /// Move a slider to the middle of its range, animated
    SetHalf(SliderId),
    /// Move a slider past its maximum without animation
    SetBeyondMaximum(SliderId),

    // ============ Appearance ============
    /// Advance to the next ambient tint
    CycleTint,
    /// Toggle dark mode
    UpdateDarkMode(bool),

    // ============ Settings ============
    /// Save settings
    SaveSettings,
}
