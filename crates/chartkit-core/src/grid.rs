// File: crates/chartkit-core/src/grid.rs
// Summary: Even spacing helpers for point layout.

/// `steps` evenly spaced values from `start` to `end` inclusive.
/// A single step yields `[start]`; zero steps yield nothing.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn endpoints_are_exact() {
        let v = linspace(40.0, 360.0, 5);
        assert_eq!(v, vec![40.0, 120.0, 200.0, 280.0, 360.0]);
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
