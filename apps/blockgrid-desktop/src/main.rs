mod keymap;

use anyhow::{Context, Result};
use blockgrid_common::ViewerConfig;
use blockgrid_input::{InputController, Modifiers};
use blockgrid_kernel::Scene;
use blockgrid_render::{Projection, Viewport, render_frame, reshape};
use blockgrid_render_wgpu::{ImmediateBatch, WgpuRenderer};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "blockgrid-desktop", about = "Block grid viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Grid cells along X
    #[arg(long, default_value_t = 50)]
    width: u32,

    /// Grid cells along Z
    #[arg(long, default_value_t = 50)]
    depth: u32,
}

/// Window, surface and device for one window.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
}

impl Gpu {
    fn new(event_loop: &ActiveEventLoop) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title("blockgrid")
            .with_inner_size(PhysicalSize::new(640u32, 480));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no compatible graphics adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("blockgrid_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("failed to create device")?;

        let size = window.inner_size();
        let caps = surface.get_capabilities(&adapter);
        // Face colors are authored for a linear framebuffer.
        let format = caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first())
            .copied()
            .context("surface reports no formats")?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = WgpuRenderer::new(&device, format, config.width, config.height);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.config.width, self.config.height)
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    fn present(&mut self, batch: &ImmediateBatch) -> Result<()> {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("surface timeout, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e).context("failed to acquire surface texture"),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer.render(&self.device, &self.queue, &view, batch);
        output.present();
        self.window.request_redraw();
        Ok(())
    }
}

struct App {
    scene: Scene,
    input: InputController,
    projection: Projection,
    modifiers: Modifiers,
    batch: ImmediateBatch,
    gpu: Option<Gpu>,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: ViewerConfig) -> Result<Self> {
        let input = InputController::from_config(&config);
        let projection = Projection::from_config(&config);
        let scene = Scene::new(config)?;
        Ok(Self {
            scene,
            input,
            projection,
            modifiers: Modifiers::NONE,
            batch: ImmediateBatch::new(Viewport::new(640, 480)),
            gpu: None,
            error: None,
        })
    }

    /// Record a fatal error and stop the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = render_frame(&self.scene, &mut self.batch);
        let result = match (frame, self.gpu.as_mut()) {
            (Err(e), _) => Err(anyhow::Error::from(e).context("frame failed")),
            (Ok(_), Some(gpu)) => gpu.present(&self.batch),
            (Ok(_), None) => Ok(()),
        };
        if let Err(e) = result {
            self.fail(event_loop, e);
            return;
        }
        if self.input.exit_requested() {
            tracing::info!("exit key held");
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match Gpu::new(event_loop) {
            Ok(gpu) => {
                let viewport = gpu.viewport();
                self.gpu = Some(gpu);
                if let Err(e) = reshape(&mut self.batch, viewport, &self.projection) {
                    self.fail(event_loop, e.into());
                }
            }
            Err(e) => self.fail(event_loop, e.context("initialization failed")),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                let Some(gpu) = self.gpu.as_mut() else {
                    return;
                };
                gpu.resize(size);
                let viewport = gpu.viewport();
                if let Err(e) = reshape(&mut self.batch, viewport, &self.projection) {
                    self.fail(event_loop, e.into());
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = keymap::modifiers(modifiers.state());
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(key_event) = keymap::translate(&event, self.modifiers) {
                    self.input.handle(&mut self.scene, key_event);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("blockgrid-desktop starting");

    let config = ViewerConfig::with_grid(cli.width, cli.depth);
    let mut app = App::new(config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
