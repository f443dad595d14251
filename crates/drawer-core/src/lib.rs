//! Gesture engine for swipeable drawer panels
//!
//! Turns pointer, touch and wheel input into axis-aware drag tracking,
//! height negotiation for expandable top/bottom panels, and a release
//! decision: close, dock, settle compact, settle expanded or spring back.
//! The host supplies geometry through [`DrawerSurface`] and paints whatever
//! [`Drawer::paint`] returns.

mod clock;
mod config;
mod controller;
mod drag_state;
mod drawer;
mod event;
pub mod gesture_constants;
mod height_expr;
mod ids;
mod listener;
mod paint;
mod session;
mod size_negotiator;
mod snap;
mod surface;
mod velocity;

pub use clock::*;
pub use config::*;
pub use controller::*;
pub use drag_state::{DragState, SubscriptionId};
pub use drawer::*;
pub use event::*;
pub use height_expr::*;
pub use ids::*;
pub use listener::*;
pub use paint::*;
pub use session::*;
pub use size_negotiator::*;
pub use snap::*;
pub use surface::*;
pub use velocity::*;

pub use drawer_geometry::{Axis, Point, Rect, Side, Size};

pub mod prelude {
    pub use crate::config::{DrawerConfig, MaxExpandedHeight, SizeToken};
    pub use crate::drag_state::DragState;
    pub use crate::drawer::{Drawer, DrawerCallbacks, DrawerPhase};
    pub use crate::event::{EventDisposition, PointerEvent, WheelEvent};
    pub use crate::ids::IdScope;
    pub use crate::paint::PanelPaint;
    pub use crate::surface::{DrawerSurface, ScrollMetrics};
    pub use drawer_geometry::prelude::*;
}
