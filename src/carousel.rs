//! Achievements gallery navigation.
//!
//! The page ships every slide and a small script that switches the active
//! one. Wrap targets are computed here and written into the markup; the
//! script only follows them. Navigation wraps at both ends and dots jump
//! directly.

/// Active slide position within a gallery of fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// Creates carousel at the first slide.
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Navigation controls only make sense with more than one slide.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    /// Moves to the previous slide, wrapping from first to last.
    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = if self.current == 0 {
            self.len - 1
        } else {
            self.current - 1
        };
    }

    /// Moves to the next slide, wrapping from last to first.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + 1) % self.len;
    }

    /// Jumps to slide `index`; out of range indices are ignored.
    pub fn go(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Previous and next positions as seen from slide `index`.
    pub fn neighbours(&self, index: usize) -> (usize, usize) {
        let mut back = *self;
        back.go(index);
        back.prev();

        let mut forward = *self;
        forward.go(index);
        forward.next();

        (back.current(), forward.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = Carousel::new(3);

        carousel.prev();

        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_next_wraps_to_first() {
        // Arrange
        let mut carousel = Carousel::new(3);
        carousel.go(2);

        // Act
        carousel.next();

        // Assert
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_go_ignores_out_of_range() {
        let mut carousel = Carousel::new(2);

        carousel.go(1);
        carousel.go(5);

        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_empty_carousel_navigation_is_noop() {
        let mut carousel = Carousel::new(0);

        carousel.next();
        carousel.prev();

        assert_eq!(carousel.current(), 0);
        assert!(carousel.is_empty());
        assert!(!carousel.has_controls());
    }

    #[test]
    fn test_neighbours_wrap_at_both_ends() {
        // Arrange
        let carousel = Carousel::new(3);

        // Act & Assert
        assert_eq!(carousel.neighbours(0), (2, 1));
        assert_eq!(carousel.neighbours(1), (0, 2));
        assert_eq!(carousel.neighbours(2), (1, 0));
        assert_eq!(carousel.current(), 0, "Neighbours do not move the carousel");
    }

    #[test]
    fn test_single_slide_has_no_controls() {
        let mut carousel = Carousel::new(1);

        carousel.next();

        assert_eq!(carousel.current(), 0);
        assert!(!carousel.has_controls());
    }
}
