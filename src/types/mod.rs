//! Core types for the body graph kernel.

pub mod planet;
pub mod gate;
pub mod center;
pub mod channel;
pub mod activation;

pub use planet::{Planet, PlanetMask};
pub use gate::{Gate, GateError};
pub use center::Center;
pub use channel::{Channel, active_channels};
pub use activation::{Activation, Activations, gates_of};
