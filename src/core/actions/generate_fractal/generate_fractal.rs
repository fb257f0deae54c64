use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;

/// Evaluates every pixel of `surface` on the calling thread, row-major.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    surface: SurfaceSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..surface.height)
        .flat_map(|y| (0..surface.width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
