use egui::{Align2, Color32, FontId, LayerId, Rect, Stroke};

use egui_wgpu_backend::{RenderPass, ScreenDescriptor};
use egui_winit_platform::{Platform, PlatformDescriptor};

use winit::window::Window;

use wgpu::{Device, SurfaceConfiguration, TextureView};

use crate::scene::DrawCommand;
use crate::sim::color::Rgba8;

/// Paints draw lists through egui onto the wgpu surface.
pub struct Gui {
    pub platform: Platform,
    egui_rpass: RenderPass,
    tdelta: egui::TexturesDelta,
    srgb_target: bool,
}

impl Gui {
    pub fn new(window: &Window, device: &Device, config: &SurfaceConfiguration) -> Self {
        let egui_rpass = RenderPass::new(device, config.format, 1);
        let platform = Platform::new(PlatformDescriptor {
            physical_width: window.inner_size().width,
            physical_height: window.inner_size().height,
            scale_factor: window.scale_factor(),
            font_definitions: egui::FontDefinitions::default(),
            style: Default::default(),
        });
        Self {
            platform,
            egui_rpass,
            tdelta: egui::TexturesDelta::default(),
            srgb_target: config.format.is_srgb(),
        }
    }

    fn paint(&self, commands: &[DrawCommand]) {
        let painter = self.platform.context().layer_painter(LayerId::background());
        for command in commands {
            match command {
                // handled by the render pass load op
                DrawCommand::Clear(_) => {}
                DrawCommand::Text {
                    text,
                    position,
                    size,
                    color,
                } => {
                    painter.text(
                        *position,
                        Align2::LEFT_TOP,
                        text,
                        FontId::proportional(*size),
                        color32(*color),
                    );
                }
                DrawCommand::Line {
                    start,
                    end,
                    thickness,
                    color,
                } => {
                    painter.line_segment([*start, *end], Stroke::new(*thickness, color32(*color)));
                }
                DrawCommand::Rect { min, size, color } => {
                    painter.rect_filled(Rect::from_min_size(*min, *size), 0.0, color32(*color));
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => {
                    painter.circle_filled(*center, *radius, color32(*color));
                }
            }
        }
    }

    pub fn render(
        &mut self,
        window: &Window,
        config: &SurfaceConfiguration,
        device: &Device,
        queue: &wgpu::Queue,
        view: &TextureView,
        commands: &[DrawCommand],
    ) -> anyhow::Result<()> {
        self.platform.begin_frame();
        self.paint(commands);

        let full_output = self.platform.end_frame(Some(window));
        let paint_jobs = self.platform.context().tessellate(full_output.shapes);

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("encoder"),
        });

        let screen_descriptor = ScreenDescriptor {
            physical_width: config.width,
            physical_height: config.height,
            scale_factor: window.scale_factor() as f32,
        };
        self.tdelta = full_output.textures_delta;
        self.egui_rpass
            .add_textures(device, queue, &self.tdelta)
            .map_err(|e| anyhow::anyhow!("failed to upload egui textures: {:?}", e))?;
        self.egui_rpass
            .update_buffers(device, queue, &paint_jobs, &screen_descriptor);

        let clear = commands.iter().find_map(|c| match c {
            DrawCommand::Clear(color) => Some(clear_color(*color, self.srgb_target)),
            _ => None,
        });
        self.egui_rpass
            .execute(&mut encoder, view, &paint_jobs, &screen_descriptor, clear)
            .map_err(|e| anyhow::anyhow!("failed to record egui render pass: {:?}", e))?;
        queue.submit(std::iter::once(encoder.finish()));
        Ok(())
    }

    /// Frees the textures egui released this frame. Call after presenting.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        self.egui_rpass
            .remove_textures(std::mem::take(&mut self.tdelta))
            .map_err(|e| anyhow::anyhow!("failed to free egui textures: {:?}", e))
    }
}

fn color32(color: Rgba8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// wgpu clear colors are written as-is, so an sRGB target needs linear values.
fn clear_color(color: Rgba8, srgb_target: bool) -> wgpu::Color {
    let [r, g, b, a] = if srgb_target {
        egui::Rgba::from(color32(color)).to_array()
    } else {
        color.to_array().map(|c| c as f32 / 255.0)
    };
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}
