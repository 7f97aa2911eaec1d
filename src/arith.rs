use thiserror::Error;

// =============================================================================
// Slices
// =============================================================================

/// Saturates at `i64::MIN`/`i64::MAX` instead of overflowing.
pub fn sum(numbers: &[i64]) -> i64 {
    numbers.iter().fold(0i64, |acc, n| acc.saturating_add(*n))
}

pub fn sum_all(collections: &[&[i64]]) -> Vec<i64> {
    collections.iter().map(|numbers| sum(numbers)).collect()
}

/// Sums everything but the head of each slice; empty slices sum to zero.
pub fn sum_all_tails(collections: &[&[i64]]) -> Vec<i64> {
    collections
        .iter()
        .map(|numbers| numbers.get(1..).map(sum).unwrap_or(0))
        .collect()
}

// =============================================================================
// Strings
// =============================================================================

pub fn repeat(character: &str, count: usize) -> String {
    let mut repeated = String::with_capacity(character.len() * count);
    for _ in 0..count {
        repeated.push_str(character);
    }
    repeated
}

// =============================================================================
// Quadratic roots
// =============================================================================

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RootsError {
    #[error("not a quadratic equation: leading coefficient is zero")]
    NotQuadratic,

    #[error("no real roots: discriminant {0} is negative")]
    NoRealRoots(f64),
}

/// Real roots of `a·x² + b·x + c = 0`, larger root first.
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Result<(f64, f64), RootsError> {
    if a == 0.0 {
        return Err(RootsError::NotQuadratic);
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Err(RootsError::NoRealRoots(discriminant));
    }

    let root = discriminant.sqrt();
    let x1 = (-b + root) / (2.0 * a);
    let x2 = (-b - root) / (2.0 * a);
    Ok((x1.max(x2), x1.min(x2)))
}
