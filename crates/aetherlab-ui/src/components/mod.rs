//! Reusable UI components
//!
//! Every component is stateless: values come in through props and changes go
//! out through event handlers.

mod button;
mod chip;
mod input;
mod pill;

pub use button::*;
pub use chip::*;
pub use input::*;
pub use pill::*;
