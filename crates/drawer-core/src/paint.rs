//! Style instruction handed to the host after every state change.

/// What the host should paint for the panel and its backdrop.
///
/// Translation and scale only carry drag feedback. Closed and open
/// positions stay with the host's own transitions; `visible` tells it which
/// one applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelPaint {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Inline height for top and bottom panels whose height is negotiated.
    pub height_px: Option<f32>,
    pub transitions_enabled: bool,
    pub backdrop_visible: bool,
    pub backdrop_opacity: f32,
    pub visible: bool,
}

impl PanelPaint {
    pub const HIDDEN: PanelPaint = PanelPaint {
        translate_x: 0.0,
        translate_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        height_px: None,
        transitions_enabled: true,
        backdrop_visible: false,
        backdrop_opacity: 0.0,
        visible: false,
    };

    pub fn is_transformed(&self) -> bool {
        self.translate_x != 0.0
            || self.translate_y != 0.0
            || self.scale_x != 1.0
            || self.scale_y != 1.0
    }
}

impl Default for PanelPaint {
    fn default() -> Self {
        Self::HIDDEN
    }
}
