use crate::core::actions::render_frame::render_frame::{Parallelism, RenderFrameError, render_frame};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

#[derive(Debug)]
pub enum BackendError {
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreadPool(err) => write!(f, "failed to start compute thread pool: {}", err),
        }
    }
}

impl Error for BackendError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ThreadPool(err) => Some(err),
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for BackendError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

/// Executes the per-pixel pipeline for a whole frame.
pub trait ComputeBackend {
    fn name(&self) -> &str;

    fn render(
        &self,
        surface: SurfaceSize,
        viewport: &Viewport,
    ) -> Result<PixelBuffer, RenderFrameError>;
}

/// Parallel backend on a dedicated rayon pool.
pub struct RayonBackend {
    pool: rayon::ThreadPool,
}

impl RayonBackend {
    /// Builds the worker pool. `None` uses one thread per available core.
    pub fn new(threads: Option<NonZeroUsize>) -> Result<Self, BackendError> {
        let mut builder = rayon::ThreadPoolBuilder::new()
            .thread_name(|index| format!("mandelbrot-worker-{}", index));

        if let Some(threads) = threads {
            builder = builder.num_threads(threads.get());
        }

        let pool = builder.build()?;

        log::info!(
            "compute backend ready: rayon with {} threads",
            pool.current_num_threads()
        );

        Ok(Self { pool })
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl ComputeBackend for RayonBackend {
    fn name(&self) -> &str {
        "rayon"
    }

    fn render(
        &self,
        surface: SurfaceSize,
        viewport: &Viewport,
    ) -> Result<PixelBuffer, RenderFrameError> {
        self.pool
            .install(|| render_frame(surface, viewport, Parallelism::Rayon))
    }
}

/// Single-threaded reference backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialBackend;

impl ComputeBackend for SequentialBackend {
    fn name(&self) -> &str {
        "sequential"
    }

    fn render(
        &self,
        surface: SurfaceSize,
        viewport: &Viewport,
    ) -> Result<PixelBuffer, RenderFrameError> {
        render_frame(surface, viewport, Parallelism::Sequential)
    }
}
