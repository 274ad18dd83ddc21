use std::time::Duration;

/// How the initial opacity of a newly inserted stop is chosen.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum OpacityPolicy {
    /// Blend the alphas of the nearest stops on either side.
    #[default]
    Interpolate,
    /// Always start fully opaque.
    Opaque,
}

/// Picker geometry and behavior knobs.
///
/// All lengths are logical pixels.
///
/// # Example
/// ```rust
/// use gradient_picker::config::{OpacityPolicy, PickerConfig};
///
/// let config = PickerConfig::default()
///     .drag_y_offset(20.0)
///     .opacity(OpacityPolicy::Opaque);
/// assert_eq!(config.drag_y_offset, 20.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    /// Horizontal distance from a handle's draw position to its visual center.
    pub handle_center: f32,
    /// Height of the alpha handle row above the track.
    pub handle_height: f32,
    /// How far below the track a color handle may be dragged; reaching the
    /// bottom of that band removes the stop on release.
    pub drag_y_offset: f32,
    /// Edge length of a handle's square hit box.
    pub handle_size: f32,
    pub opacity: OpacityPolicy,
    pub click: ClickConfig,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            handle_center: 4.5,
            handle_height: 13.0,
            drag_y_offset: 13.0,
            handle_size: 12.0,
            opacity: OpacityPolicy::default(),
            click: ClickConfig::default(),
        }
    }
}

impl PickerConfig {
    pub fn handle_center(mut self, v: f32) -> Self {
        self.handle_center = v;
        self
    }

    pub fn handle_height(mut self, v: f32) -> Self {
        self.handle_height = v;
        self
    }

    pub fn drag_y_offset(mut self, v: f32) -> Self {
        self.drag_y_offset = v;
        self
    }

    pub fn handle_size(mut self, v: f32) -> Self {
        self.handle_size = v;
        self
    }

    pub fn opacity(mut self, v: OpacityPolicy) -> Self {
        self.opacity = v;
        self
    }

    pub fn click(mut self, v: ClickConfig) -> Self {
        self.click = v;
        self
    }
}

/// Double-click recognition for hosts that only deliver raw button events.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClickConfig {
    /// Maximum time between two primary presses.
    pub double_click_interval: Duration,
    /// Maximum pointer travel between the two presses.
    pub slop: f32,
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self {
            double_click_interval: Duration::from_millis(400),
            slop: 4.0,
        }
    }
}
