mod car_wash;
mod display;
mod stack;

pub mod io;
pub mod menu;
pub mod terminal_io;

pub use car_wash::{CarId, CarWash, EmptyLineError, Line, LineFullError};
pub use stack::BoundedStack;
