/// A LIFO stack that never holds more than `capacity` values.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    values: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// On overflow, the value is handed back and the stack is left alone.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.values.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.values.pop()
    }

    /// Bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}
