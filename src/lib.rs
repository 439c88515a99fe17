pub type StrError = &'static str;

pub mod controls;
pub mod demo;
pub mod enums;
pub mod error;
pub mod grid;
pub mod model;
mod productivity;
pub mod render;
pub mod report;
mod surface_trait;
mod symbolic;
pub mod terms;

pub use controls::*;
pub use demo::*;
pub use enums::*;
pub use error::*;
pub use grid::*;
pub use model::*;
pub use productivity::*;
pub use report::*;
pub use surface_trait::*;
pub use symbolic::*;
pub use terms::*;
