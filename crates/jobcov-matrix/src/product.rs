//! Matrix Composer: full Cartesian product
//!
//! Combines per-axis state sequences into every possible selection of one
//! state per axis. Order is lexicographic over axis index with axis 0
//! varying slowest, the same order nested loops would produce:
//!
//! ```text
//! axes: [A0, A1] x [B0, B1, B2]
//!
//! [A0, B0] [A0, B1] [A0, B2] [A1, B0] [A1, B1] [A1, B2]
//! ```
//!
//! [`combination_matrix`] materializes the whole matrix; [`combinations`]
//! streams it one combination at a time in the same order.

use jobcov_core::{AxisValue, Combination, CombinationMatrix};
use std::iter::FusedIterator;

/// Upper bound on the combinations reserved up front by [`combination_matrix`].
pub const MAX_PREALLOCATED: usize = 4096;

/// Number of combinations the product of `axes` has, or `None` on overflow.
pub fn matrix_size<A: AsRef<[AxisValue]>>(axes: &[A]) -> Option<usize> {
    let mut size = 1usize;
    for axis in axes {
        size = size.checked_mul(axis.as_ref().len())?;
    }
    Some(size)
}

/// Every combination of one state per axis.
///
/// No axes yield a single empty combination; any empty axis yields an empty
/// matrix. At most [`MAX_PREALLOCATED`] combinations are reserved up front;
/// use [`combinations`] to stream products too large to hold in memory.
pub fn combination_matrix<A: AsRef<[AxisValue]>>(axes: &[A]) -> CombinationMatrix {
    let size = matrix_size(axes);
    if size.is_none() {
        tracing::warn!(axes = axes.len(), "combination count overflows usize");
    }
    let mut matrix = CombinationMatrix::with_capacity(size.unwrap_or(0).min(MAX_PREALLOCATED));
    extend_combination(Combination::with_capacity(axes.len()), axes, &mut matrix);

    tracing::debug!(axes = axes.len(), combinations = matrix.len(), "built combination matrix");
    matrix
}

// Each branch receives its own copy of the prefix, so completed combinations
// never share storage with a sibling still being built.
fn extend_combination<A: AsRef<[AxisValue]>>(
    prefix: Combination,
    remaining: &[A],
    matrix: &mut CombinationMatrix,
) {
    let Some((axis, rest)) = remaining.split_first() else {
        matrix.push(prefix);
        return;
    };

    for value in axis.as_ref() {
        let mut branch = prefix.clone();
        branch.push(value.clone());
        extend_combination(branch, rest, matrix);
    }
}

/// Lazy form of [`combination_matrix`].
pub fn combinations<A: AsRef<[AxisValue]>>(axes: &[A]) -> Combinations<'_, A> {
    Combinations::new(axes)
}

/// Iterator over the Cartesian product of axis sequences.
///
/// Keeps one index per axis and advances them like an odometer, rightmost
/// axis fastest. Each yielded combination is freshly allocated.
#[derive(Debug, Clone)]
pub struct Combinations<'a, A> {
    axes: &'a [A],
    indices: Vec<usize>,
    remaining: Option<usize>,
    done: bool,
}

impl<'a, A: AsRef<[AxisValue]>> Combinations<'a, A> {
    pub fn new(axes: &'a [A]) -> Self {
        let done = axes.iter().any(|axis| axis.as_ref().is_empty());
        Self {
            axes,
            indices: vec![0; axes.len()],
            remaining: if done { Some(0) } else { matrix_size(axes) },
            done,
        }
    }

    fn current(&self) -> Combination {
        self.axes
            .iter()
            .zip(&self.indices)
            .map(|(axis, &i)| axis.as_ref()[i].clone())
            .collect()
    }

    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.axes[pos].as_ref().len() {
                return;
            }
            self.indices[pos] = 0;
        }
        // every index wrapped around, or there were no axes
        self.done = true;
    }
}

impl<A: AsRef<[AxisValue]>> Iterator for Combinations<'_, A> {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let combination = self.current();
        self.advance();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<A: AsRef<[AxisValue]>> FusedIterator for Combinations<'_, A> {}

#[cfg(test)]
mod tests {
    use super::*;
    use jobcov_core::{AxisSequence, SoftwareId, StateValue};

    fn axis(id: SoftwareId, versions: &[&str]) -> AxisSequence {
        versions.iter().map(|v| AxisValue::version(id, *v)).collect()
    }

    fn render(matrix: &[Combination]) -> Vec<String> {
        matrix.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_identity() {
        let axes: Vec<AxisSequence> = vec![];
        let matrix = combination_matrix(&axes);
        assert_eq!(matrix, vec![Combination::new()]);
        assert_eq!(combinations(&axes).collect::<Vec<_>>(), matrix);
        assert_eq!(matrix_size(&axes), Some(1));
    }

    #[test]
    fn test_zero_factor() {
        let axes = vec![
            axis(SoftwareId::Gcc, &["9", "10"]),
            vec![],
            axis(SoftwareId::Cmake, &["3.22.3"]),
        ];
        assert!(combination_matrix(&axes).is_empty());
        assert_eq!(combinations(&axes).count(), 0);
        assert_eq!(matrix_size(&axes), Some(0));
    }

    #[test]
    fn test_first_axis_varies_slowest() {
        let axes = vec![
            axis(SoftwareId::Gcc, &["9", "10"]),
            axis(SoftwareId::Cmake, &["a", "b", "c"]),
        ];
        let matrix = combination_matrix(&axes);
        assert_eq!(
            render(&matrix),
            vec![
                "[GCC=9, CMAKE=a]",
                "[GCC=9, CMAKE=b]",
                "[GCC=9, CMAKE=c]",
                "[GCC=10, CMAKE=a]",
                "[GCC=10, CMAKE=b]",
                "[GCC=10, CMAKE=c]",
            ]
        );
    }

    #[test]
    fn test_branches_do_not_alias() {
        let axes = vec![
            vec![
                AxisValue::off(SoftwareId::CpuSerial),
                AxisValue::on(SoftwareId::CpuSerial),
            ],
            vec![
                AxisValue::off(SoftwareId::GpuHip),
                AxisValue::version(SoftwareId::GpuHip, "5.0"),
            ],
            vec![
                AxisValue::off(SoftwareId::CpuThreads),
                AxisValue::on(SoftwareId::CpuThreads),
            ],
        ];
        let matrix = combination_matrix(&axes);
        assert_eq!(matrix.len(), 8);
        for combo in &matrix {
            assert_eq!(combo.len(), 3);
        }
        assert_eq!(matrix[0].state_of(SoftwareId::CpuSerial), Some(&StateValue::Off));
        assert_eq!(matrix[0].state_of(SoftwareId::CpuThreads), Some(&StateValue::Off));
        assert_eq!(matrix[7].state_of(SoftwareId::GpuHip), Some(&StateValue::version("5.0")));
    }

    #[test]
    fn test_lazy_matches_eager() {
        let axes = vec![
            axis(SoftwareId::Gcc, &["9", "10"]),
            axis(SoftwareId::Boost, &["1.74.0", "1.75.0", "1.76.0"]),
            axis(SoftwareId::CxxStandard, &["17", "20"]),
        ];
        let lazy = combinations(&axes);
        assert_eq!(lazy.size_hint(), (12, Some(12)));
        assert_eq!(lazy.collect::<Vec<_>>(), combination_matrix(&axes));
    }

    #[test]
    fn test_matrix_beyond_preallocation() {
        let digits: Vec<String> = (0..10).map(|d| d.to_string()).collect();
        let digits: Vec<&str> = digits.iter().map(String::as_str).collect();
        let axes = vec![
            axis(SoftwareId::Gcc, &digits),
            axis(SoftwareId::Clang, &digits),
            axis(SoftwareId::Cmake, &digits),
            axis(SoftwareId::Boost, &digits),
        ];
        assert!(matrix_size(&axes).unwrap() > MAX_PREALLOCATED);

        let matrix = combination_matrix(&axes);
        assert_eq!(matrix.len(), 10_000);
        assert_eq!(matrix[0].to_string(), "[GCC=0, CLANG=0, CMAKE=0, BOOST=0]");
        assert_eq!(matrix[1234].to_string(), "[GCC=1, CLANG=2, CMAKE=3, BOOST=4]");
        assert_eq!(matrix[9999].to_string(), "[GCC=9, CLANG=9, CMAKE=9, BOOST=9]");
    }

    #[test]
    fn test_size_overflow_is_none() {
        let wide = axis(SoftwareId::Gcc, &["1", "2", "3", "4", "5", "6", "7", "8"]);
        let axes = vec![wide; 64];
        assert_eq!(matrix_size(&axes), None);
        assert_eq!(combinations(&axes).size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_lazy_is_fused() {
        let axes = vec![axis(SoftwareId::Gcc, &["9"])];
        let mut iter = combinations(&axes);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }
}
