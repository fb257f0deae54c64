use crate::adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::display_surface::{DisplaySurface, Presentation};
use crate::core::data::surface_size::SurfaceSize;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

/// Window surface backed by a `pixels` framebuffer with egui drawn on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface: SurfaceSize,
    last_frame_number: u64,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        log::info!(
            "pixels surface ready: {}x{} {:?}",
            size.width,
            size.height,
            pixels.render_texture_format()
        );

        Ok(Self {
            pixels,
            egui_renderer,
            surface: SurfaceSize::new(size.width, size.height),
            last_frame_number: 0,
        })
    }

    #[must_use]
    pub fn last_frame_number(&self) -> u64 {
        self.last_frame_number
    }
}

impl DisplaySurface for PixelsPresenter {
    type Error = PixelFormatError;

    fn surface_size(&self) -> SurfaceSize {
        self.surface
    }

    fn present(&mut self, frame: FrameData) -> Result<Presentation, Self::Error> {
        let frame_surface = frame.pixel_buffer.surface();

        if frame_surface != self.surface {
            log::warn!(
                "dropping frame {}: rendered {}x{} but surface is {}x{}",
                frame.frame_number,
                frame_surface.width,
                frame_surface.height,
                self.surface.width,
                self.surface.height
            );
            return Ok(Presentation::Dropped);
        }

        copy_rgb_to_rgba(frame.pixel_buffer.buffer(), self.pixels.frame_mut())?;
        self.last_frame_number = frame.frame_number;

        Ok(Presentation::Shown)
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface.is_empty() {
            return Ok(());
        }

        let size_in_pixels = [self.surface.width, self.surface.height];

        self.pixels.render_with(|encoder, render_target, context| {
            // fractal first, scaled to the window
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui overlay"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.surface = SurfaceSize::new(width, height);

        // minimised: keep the old buffers, the driver skips empty surfaces
        if self.surface.is_empty() {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }

        Ok(())
    }
}
