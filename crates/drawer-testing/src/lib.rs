//! Testing utilities and harness for the drawer engine

pub mod recorder;
pub mod robot;
pub mod robot_assertions;
pub mod surface;

pub use recorder::*;
pub use robot::*;
pub use robot_assertions::assert_approx_eq;
pub use surface::*;

pub mod prelude {
    pub use crate::recorder::*;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use crate::robot_assertions::assert_approx_eq;
    pub use crate::surface::*;
}
