use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work. Runs on whichever rayon pool the caller is
/// installed in, the global pool otherwise. Results are row-major, identical
/// to [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_parallel_rayon<Alg>(
    surface: SurfaceSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = surface.width;

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..surface.height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect();

    rows.map(|rows| rows.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(u64::from(pixel.x) * 1_000 + u64::from(pixel.y))
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel.y == 2 {
                Err(StubError {})
            } else {
                Ok(0)
            }
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = StubSuccessAlgorithm {};
        let surface = SurfaceSize::new(11, 9);

        let sequential_results = generate_fractal(surface, &algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(surface, &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let result = generate_fractal_parallel_rayon(SurfaceSize::new(3, 4), &StubFailureAlgorithm {});

        assert_eq!(result, Err(StubError {}));
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let results =
            generate_fractal_parallel_rayon(SurfaceSize::new(1, 1), &StubSuccessAlgorithm {}).unwrap();

        assert_eq!(results, vec![0]);
    }

    #[test]
    fn test_rayon_with_large_surface() {
        let algorithm = StubSuccessAlgorithm {};
        let surface = SurfaceSize::new(101, 101);

        let sequential_results = generate_fractal(surface, &algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(surface, &algorithm).unwrap();

        assert_eq!(rayon_results.len(), surface.pixel_count());
        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_with_empty_surface() {
        let results =
            generate_fractal_parallel_rayon(SurfaceSize::new(0, 5), &StubSuccessAlgorithm {}).unwrap();

        assert!(results.is_empty());
    }
}
