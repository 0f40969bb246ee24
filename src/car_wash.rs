use crate::display;
use crate::stack::BoundedStack;
use log::{debug, warn};
use std::fmt::{self, Display};
use thiserror::Error;

/// A car's number or ID, as typed by the user. Not interpreted, and not
/// required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CarId(String);

impl Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CarId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CarId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// The line was at capacity, so the car was turned away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Car {0} cannot enter. Car wash line is FULL!")]
pub struct LineFullError(pub CarId);

/// There was no car to wash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No cars to wash. Line is EMPTY!")]
pub struct EmptyLineError;

/// The car wash line: the last car in is the first one washed.
#[derive(Debug, Clone)]
pub struct CarWash {
    line: BoundedStack<CarId>,
}

impl CarWash {
    /// The capacity is taken as-is; callers are expected to pass a positive
    /// value.
    pub fn new(capacity: usize) -> Self {
        Self {
            line: BoundedStack::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.line.capacity()
    }

    pub fn len(&self) -> usize {
        self.line.len()
    }

    pub fn is_full(&self) -> bool {
        self.line.is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Admit a car at the top of the line.
    pub fn arrive(&mut self, id: impl Into<CarId>) -> Result<(), LineFullError> {
        match self.line.push(id.into()) {
            Ok(()) => {
                debug!("car admitted ({}/{})", self.len(), self.capacity());
                Ok(())
            }
            Err(id) => {
                warn!("line full, turned away car {id}");
                Err(LineFullError(id))
            }
        }
    }

    /// Remove and return the most recently admitted car.
    pub fn wash_car(&mut self) -> Result<CarId, EmptyLineError> {
        let Some(id) = self.line.pop() else {
            warn!("wash requested on an empty line");
            return Err(EmptyLineError);
        };
        debug!("washed car {id} ({} left)", self.len());
        Ok(id)
    }

    pub fn show_line(&self) -> Line<'_> {
        if self.line.is_empty() {
            Line::Empty
        } else {
            Line::Cars(self.line.as_slice())
        }
    }
}

/// A snapshot of the line, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Empty,
    Cars(&'a [CarId]),
}

impl<'a> Line<'a> {
    pub fn cars(&self) -> &'a [CarId] {
        match *self {
            Line::Empty => &[],
            Line::Cars(cars) => cars,
        }
    }
}

impl Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Empty => write!(f, "Car wash line is empty."),
            Line::Cars(cars) => {
                writeln!(f, "Current car wash line (bottom --> top):")?;
                display::write_row(f, cars)
            }
        }
    }
}
