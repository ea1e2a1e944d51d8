use std::time::Instant;

use anyhow::Context;
use winit::{
    dpi::LogicalSize,
    event::{self, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    platform::run_return::EventLoopExtRunReturn,
};

use super::clock::FrameClock;
use super::gui;
use super::scene;
use super::sim::{Params, Simulation};
use super::{HEIGHT, TARGET_FPS, WIDTH};

pub struct Setup {
    window: winit::window::Window,
    event_loop: EventLoop<()>,
    title: String,
    instance: wgpu::Instance,
    size: winit::dpi::PhysicalSize<u32>,
    surface: wgpu::Surface,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
}

pub async fn setup(title: &str) -> anyhow::Result<Setup> {
    let event_loop = EventLoop::new();

    let window = winit::window::WindowBuilder::new()
        .with_visible(true)
        .with_title(title)
        .with_resizable(false)
        .with_inner_size(LogicalSize::new(WIDTH, HEIGHT))
        .build(&event_loop)
        .context("failed to open the window")?;

    log::info!("Initializing the surface...");

    let backends = wgpu::util::backend_bits_from_env().unwrap_or_else(wgpu::Backends::all);
    let dx12_shader_compiler = wgpu::util::dx12_shader_compiler_from_env().unwrap_or_default();

    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
        backends,
        dx12_shader_compiler,
        ..Default::default()
    });

    let size = window.inner_size();
    // SAFETY: `window` is moved into `Setup` next to `surface`, and `start`
    // drops the surface before the window.
    let surface = unsafe { instance.create_surface(&window) }
        .context("failed to create a surface for the window")?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::util::power_preference_from_env().unwrap_or_default(),
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        })
        .await
        .context("no suitable GPU adapter found")?;

    let adapter_info = adapter.get_info();
    log::info!("Using {} ({:?})", adapter_info.name, adapter_info.backend);

    let trace_dir = std::env::var("WGPU_TRACE");
    let (device, queue) = adapter
        .request_device(
            &wgpu::DeviceDescriptor {
                label: None,
                features: wgpu::Features::empty(),
                limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
            },
            trace_dir.ok().as_ref().map(std::path::Path::new),
        )
        .await
        .context("unable to open a device on the adapter")?;

    Ok(Setup {
        window,
        event_loop,
        title: title.to_owned(),
        instance,
        size,
        surface,
        adapter,
        device,
        queue,
    })
}

/// Runs the frame loop until the window is closed or Escape is pressed.
/// Every resource in `setup` is released before this returns.
pub fn start(
    Setup {
        window,
        mut event_loop,
        title,
        instance: _instance,
        size,
        surface,
        adapter,
        device,
        queue,
    }: Setup,
) -> anyhow::Result<()> {
    let caps = surface.get_capabilities(&adapter);
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first().copied())
        .context("surface reports no supported formats")?;
    let alpha_mode = caps
        .alpha_modes
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto);

    let mut config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::Fifo,
        alpha_mode,
        view_formats: vec![],
    };
    surface.configure(&device, &config);

    let mut ui = gui::Gui::new(&window, &device, &config);
    let mut sim = Simulation::new(Params::new());

    let started = Instant::now();
    let mut clock = FrameClock::new(TARGET_FPS, started);
    let mut failure: Option<anyhow::Error> = None;

    println!("CirAni started successfully!");
    println!("{}", scene::EXIT_HINT);
    log::info!("Entering render loop...");

    event_loop.run_return(|event, _, control_flow| {
        ui.platform.handle_event(&event);
        match event {
            event::Event::MainEventsCleared => {
                if clock.is_due(Instant::now()) {
                    window.request_redraw();
                }
                *control_flow = ControlFlow::WaitUntil(clock.next_frame());
            }
            event::Event::WindowEvent {
                event:
                    WindowEvent::Resized(size)
                    | WindowEvent::ScaleFactorChanged {
                        new_inner_size: &mut size,
                        ..
                    },
                ..
            } => {
                config.width = size.width.max(1);
                config.height = size.height.max(1);
                surface.configure(&device, &config);
            }
            event::Event::WindowEvent { event, .. } => match event {
                WindowEvent::KeyboardInput {
                    input:
                        event::KeyboardInput {
                            virtual_keycode: Some(event::VirtualKeyCode::Escape),
                            state: event::ElementState::Pressed,
                            ..
                        },
                    ..
                }
                | WindowEvent::CloseRequested => {
                    log::info!("Close requested");
                    *control_flow = ControlFlow::Exit;
                }
                _ => {}
            },
            event::Event::RedrawRequested(_) => {
                let now = Instant::now();
                sim.advance(clock.tick(now));
                if let Some(fps) = clock.fps_sample(now) {
                    log::debug!("FPS: {} (t = {:.2}s)", fps, sim.elapsed());
                }
                ui.platform.update_time(started.elapsed().as_secs_f64());

                let frame = match surface.get_current_texture() {
                    Ok(frame) => frame,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("Surface lost or outdated, reconfiguring");
                        surface.configure(&device, &config);
                        return;
                    }
                    Err(wgpu::SurfaceError::Timeout) => {
                        log::warn!("Timed out acquiring the next surface texture");
                        return;
                    }
                    Err(e @ wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Failed to acquire next surface texture: {}", e);
                        failure = Some(e.into());
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                };
                let view = frame
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                let commands = scene::compose(&sim, &title, clock.fps());
                let rendered = ui
                    .render(&window, &config, &device, &queue, &view, &commands)
                    .and_then(|()| {
                        frame.present();
                        ui.cleanup()
                    });
                if let Err(e) = rendered {
                    log::error!("{:#}", e);
                    failure = Some(e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    log::info!("Render loop exited after {:.2}s of animation", sim.elapsed());

    // the surface must not outlive the window it was created from
    drop(ui);
    drop(surface);
    drop(window);

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
