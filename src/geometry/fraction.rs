//! Threshold fractions for the piecewise branches

/// Greatest common divisor by the remainder algorithm
pub fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// The upper bound `count/total` of a branch, in lowest terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    pub numerator: usize,
    pub denominator: usize,
}

impl Threshold {
    pub fn new(count: usize, total: usize) -> Self {
        let divisor = gcd(count, total).max(1);
        Self {
            numerator: count / divisor,
            denominator: total / divisor,
        }
    }

    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_of_ordinals() {
        assert_eq!(gcd(2, 4), 2);
        assert_eq!(gcd(3, 4), 1);
        assert_eq!(gcd(6, 9), 3);
        assert_eq!(gcd(7, 7), 7);
        assert_eq!(gcd(5, 0), 5);
    }

    #[test]
    fn thresholds_are_reduced() {
        assert_eq!(Threshold::new(2, 4), Threshold { numerator: 1, denominator: 2 });
        assert_eq!(Threshold::new(3, 4).to_string(), "3/4");
        assert_eq!(Threshold::new(4, 12).to_string(), "1/3");
        assert_eq!(Threshold::new(1, 4).value(), 0.25);
    }
}
