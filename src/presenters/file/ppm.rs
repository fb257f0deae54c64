use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::display_surface::{DisplaySurface, Presentation};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface_size::SurfaceSize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes `buffer` as a binary PPM image.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> io::Result<()> {
    let surface = buffer.surface();

    // P6 = binary RGB, then width height max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", surface.width, surface.height)?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;
    writer.flush()
}

/// Headless display surface: every presented frame overwrites one PPM file.
#[derive(Debug, Clone)]
pub struct PpmFileSurface {
    path: PathBuf,
    surface: SurfaceSize,
    frames_written: u64,
}

impl PpmFileSurface {
    pub fn new(path: impl Into<PathBuf>, surface: SurfaceSize) -> Self {
        Self {
            path: path.into(),
            surface,
            frames_written: 0,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

impl DisplaySurface for PpmFileSurface {
    type Error = io::Error;

    fn surface_size(&self) -> SurfaceSize {
        self.surface
    }

    fn present(&mut self, frame: FrameData) -> Result<Presentation, Self::Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        write_ppm(&frame.pixel_buffer, BufWriter::new(file))?;
        self.frames_written += 1;

        log::info!(
            "wrote frame {} ({}x{}, rendered in {:?}) to {}",
            frame.frame_number,
            self.surface.width,
            self.surface.height,
            frame.render_duration,
            self.path.display()
        );

        Ok(Presentation::Shown)
    }
}
