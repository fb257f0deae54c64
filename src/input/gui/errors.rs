use crate::core::actions::render_frame::backend::BackendError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GuiError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Surface(pixels::Error),
    Resize(pixels::TextureError),
    Backend(BackendError),
    Frame(Box<dyn Error>),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "pixels surface error: {}", err),
            Self::Resize(err) => write!(f, "failed to resize surface: {}", err),
            Self::Backend(err) => write!(f, "compute backend unavailable: {}", err),
            Self::Frame(err) => write!(f, "frame failed: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Resize(err) => Some(err),
            Self::Backend(err) => Some(err),
            Self::Frame(err) => Some(err.as_ref()),
        }
    }
}

impl From<winit::error::EventLoopError> for GuiError {
    fn from(err: winit::error::EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<winit::error::OsError> for GuiError {
    fn from(err: winit::error::OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<pixels::TextureError> for GuiError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Resize(err)
    }
}

impl From<BackendError> for GuiError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err)
    }
}
