/// Iterations a sample point survived before leaving the bailout radius, out of `max_iterations`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeTime {
    pub iterations: u32,
    pub max_iterations: u32,
}

impl EscapeTime {
    /// True when the iteration cap was reached, i.e. the point is treated as inside the set.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.iterations == self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bounded_only_at_cap() {
        assert!(EscapeTime { iterations: 50, max_iterations: 50 }.is_bounded());
        assert!(!EscapeTime { iterations: 49, max_iterations: 50 }.is_bounded());
        assert!(!EscapeTime { iterations: 0, max_iterations: 50 }.is_bounded());
    }
}
