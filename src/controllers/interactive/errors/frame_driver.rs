use crate::core::actions::render_frame::render_frame::RenderFrameError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FrameDriverError<E> {
    Render(RenderFrameError),
    Display(E),
}

impl<E: fmt::Display> fmt::Display for FrameDriverError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "failed to render frame: {}", err),
            Self::Display(err) => write!(f, "failed to present frame: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for FrameDriverError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Display(err) => Some(err),
        }
    }
}

impl<E> From<RenderFrameError> for FrameDriverError<E> {
    fn from(err: RenderFrameError) -> Self {
        Self::Render(err)
    }
}
