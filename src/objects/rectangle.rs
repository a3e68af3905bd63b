use serde::{Deserialize, Serialize};

/// A rectangle with integer side lengths.
///
/// # Examples
/// ```
/// # use katas::objects::Rectangle;
/// let r = Rectangle::new(10, 20);
/// assert_eq!(r.width, 10);
/// assert_eq!(r.height, 20);
/// assert_eq!(r.area(), 200);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub const fn new(width: u32, height: u32) -> Rectangle {
        Rectangle { width, height }
    }

    /// Returns the area, widened so that it can't overflow.
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area() {
        assert_eq!(Rectangle::new(0, 7).area(), 0);
        assert_eq!(
            Rectangle::new(u32::MAX, u32::MAX).area(),
            u64::from(u32::MAX) * u64::from(u32::MAX),
            "Area should not overflow for the largest side lengths."
        );
    }
}
