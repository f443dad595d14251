//! Drawer configuration record.

use crate::height_expr::{HeightExpr, HeightParseError};
use drawer_geometry::Side;

/// Size token of a panel. For top and bottom panels it maps to a fraction
/// of the viewport height used as the compact height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeToken {
    S,
    #[default]
    M,
    L,
    Xl,
    Fullscreen,
}

impl SizeToken {
    pub fn viewport_fraction(self) -> f32 {
        match self {
            SizeToken::S => 0.40,
            SizeToken::M => 0.65,
            SizeToken::L => 0.80,
            SizeToken::Xl => 0.90,
            SizeToken::Fullscreen => 1.0,
        }
    }
}

/// Upper bound for an expandable panel, either a pixel count or a CSS-like
/// expression such as `"90vh"` or `"calc(100% - 32px)"`.
#[derive(Debug, Clone, PartialEq)]
pub enum MaxExpandedHeight {
    Px(f32),
    Expr(String),
}

impl MaxExpandedHeight {
    pub fn to_expr(&self) -> Result<HeightExpr, HeightParseError> {
        match self {
            MaxExpandedHeight::Px(px) if px.is_finite() && *px >= 0.0 => Ok(HeightExpr::Px(*px)),
            MaxExpandedHeight::Px(px) if px.is_finite() => {
                Err(HeightParseError::Negative(px.to_string()))
            }
            MaxExpandedHeight::Px(px) => Err(HeightParseError::Malformed(px.to_string())),
            MaxExpandedHeight::Expr(text) => HeightExpr::parse(text),
        }
    }
}

impl From<f32> for MaxExpandedHeight {
    fn from(px: f32) -> Self {
        MaxExpandedHeight::Px(px)
    }
}

impl From<&str> for MaxExpandedHeight {
    fn from(text: &str) -> Self {
        MaxExpandedHeight::Expr(text.to_string())
    }
}

impl From<String> for MaxExpandedHeight {
    fn from(text: String) -> Self {
        MaxExpandedHeight::Expr(text)
    }
}

/// Options the host passes to a drawer.
///
/// `backdrop` and `trap_focus` are read by the host's own collaborators; the
/// gesture engine only uses `backdrop` to report backdrop visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerConfig {
    pub side: Side,
    pub size: SizeToken,
    pub dismissible: bool,
    pub swipe_to_close: bool,
    pub backdrop: bool,
    pub trap_focus: bool,
    pub expand_to_full: bool,
    pub max_expanded_height: Option<MaxExpandedHeight>,
    pub expand_with_wheel: bool,
    pub dock_header_on_close: bool,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            side: Side::Right,
            size: SizeToken::M,
            dismissible: true,
            swipe_to_close: true,
            backdrop: true,
            trap_focus: true,
            expand_to_full: false,
            max_expanded_height: None,
            expand_with_wheel: false,
            dock_header_on_close: false,
        }
    }
}

impl DrawerConfig {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: SizeToken) -> Self {
        self.size = size;
        self
    }

    pub fn with_dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    pub fn with_swipe_to_close(mut self, swipe_to_close: bool) -> Self {
        self.swipe_to_close = swipe_to_close;
        self
    }

    pub fn with_backdrop(mut self, backdrop: bool) -> Self {
        self.backdrop = backdrop;
        self
    }

    pub fn with_trap_focus(mut self, trap_focus: bool) -> Self {
        self.trap_focus = trap_focus;
        self
    }

    pub fn with_expand_to_full(mut self, expand_to_full: bool) -> Self {
        self.expand_to_full = expand_to_full;
        self
    }

    pub fn with_max_expanded_height(mut self, max: impl Into<MaxExpandedHeight>) -> Self {
        self.max_expanded_height = Some(max.into());
        self
    }

    pub fn with_expand_with_wheel(mut self, expand_with_wheel: bool) -> Self {
        self.expand_with_wheel = expand_with_wheel;
        self
    }

    pub fn with_dock_header_on_close(mut self, dock: bool) -> Self {
        self.dock_header_on_close = dock;
        self
    }

    /// Height negotiation only exists for top and bottom panels.
    pub fn expansion_enabled(&self) -> bool {
        self.expand_to_full && self.side.is_vertical()
    }

    /// Whether a gesture may dismiss (or dock) the panel.
    pub fn close_gesture_enabled(&self) -> bool {
        self.dismissible && self.swipe_to_close
    }

    pub fn docking_enabled(&self) -> bool {
        self.dock_header_on_close && self.side.is_vertical()
    }

    pub fn wheel_enabled(&self) -> bool {
        self.expand_with_wheel && self.expansion_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_requires_vertical_side() {
        let left = DrawerConfig::new(Side::Left).with_expand_to_full(true);
        assert!(!left.expansion_enabled());

        let bottom = DrawerConfig::new(Side::Bottom).with_expand_to_full(true);
        assert!(bottom.expansion_enabled());
        assert!(!bottom.wheel_enabled());
        assert!(bottom.with_expand_with_wheel(true).wheel_enabled());
    }

    #[test]
    fn close_gesture_needs_both_flags() {
        let config = DrawerConfig::default();
        assert!(config.close_gesture_enabled());
        assert!(!config.clone().with_dismissible(false).close_gesture_enabled());
        assert!(!config.with_swipe_to_close(false).close_gesture_enabled());
    }

    #[test]
    fn max_height_px_validates() {
        assert_eq!(
            MaxExpandedHeight::from(700.0).to_expr(),
            Ok(HeightExpr::Px(700.0))
        );
        assert!(MaxExpandedHeight::Px(-1.0).to_expr().is_err());
        assert!(MaxExpandedHeight::Px(f32::INFINITY).to_expr().is_err());
        assert_eq!(
            MaxExpandedHeight::from("calc(100% - 32px)").to_expr(),
            Ok(HeightExpr::ViewportMinus(32.0))
        );
    }
}
