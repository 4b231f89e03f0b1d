use super::init::*;
use super::render::*;
use crate::error::SurfaceError;
use crate::math::fit_within;
use crate::options::SurfaceConfig;
use crate::shaders::CausticProgram;
use crate::uniforms::Uniforms;

/// Intermediate struct for GPU resources during initialization
struct GpuResources {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    surface_format: wgpu::TextureFormat,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    pipeline: wgpu::RenderPipeline,
}

/// Caustic renderer bound to one canvas
pub struct CausticRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    pipeline: wgpu::RenderPipeline,
    clear: wgpu::Color,
}

impl CausticRenderer {
    /// Create a renderer drawing `program` into `canvas`
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        program: CausticProgram,
        config: SurfaceConfig,
    ) -> Result<Self, String> {
        let (instance, surface, width, height) = Self::create_surface(canvas)?;
        let gpu = Self::setup_gpu(&instance, &surface, &program, &config, width, height).await?;
        Ok(Self::assemble(surface, gpu, &config))
    }

    /// Create the wgpu instance and surface from canvas
    #[cfg(target_arch = "wasm32")]
    fn create_surface(
        canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>, u32, u32), String> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| format!("Failed to create surface: {}", e))?;

        Ok((instance, surface, width, height))
    }

    /// Create the wgpu instance and surface from canvas (non-WASM stub)
    #[cfg(not(target_arch = "wasm32"))]
    fn create_surface(
        _canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>, u32, u32), String> {
        Err("CausticRenderer only supports WASM targets".to_string())
    }

    /// Setup GPU device, queue, surface configuration and pipeline
    async fn setup_gpu(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'static>,
        program: &CausticProgram,
        config: &SurfaceConfig,
        width: u32,
        height: u32,
    ) -> Result<GpuResources, String> {
        let (device, queue, adapter) = create_device(instance, surface).await?;
        let (surface_config, surface_format) =
            configure_surface(surface, &adapter, &device, config, width, height)?;
        let (uniform_buffer, bind_group_layout, bind_group) = create_uniform_resources(&device);
        let pipeline = create_pipeline(&device, &bind_group_layout, program, config, surface_format);

        Ok(GpuResources {
            device,
            queue,
            surface_config,
            surface_format,
            bind_group,
            uniform_buffer,
            pipeline,
        })
    }

    /// Assemble the final renderer from surface and GPU resources
    fn assemble(surface: wgpu::Surface<'static>, gpu: GpuResources, config: &SurfaceConfig) -> Self {
        debug_assert_eq!(gpu.surface_config.format, gpu.surface_format);
        Self {
            device: gpu.device,
            queue: gpu.queue,
            surface,
            surface_config: gpu.surface_config,
            bind_group: gpu.bind_group,
            uniform_buffer: gpu.uniform_buffer,
            pipeline: gpu.pipeline,
            clear: clear_color(config.transparent),
        }
    }

    /// Current drawable size in physical pixels
    pub fn size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    /// Resize the renderer. Sizes beyond the device's texture limit are
    /// scaled down; the canvas CSS stretches the result.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let (width, height) = fit_within((width, height), max_surface_dimension(&self.device));
        if (width, height) == self.size() {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Render one frame with the given uniforms
    pub fn render(&mut self, uniforms: &Uniforms) -> Result<(), SurfaceError> {
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[*uniforms]));

        let output = match self.get_surface_texture()? {
            Some(output) => output,
            None => return Ok(()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Caustics Encoder"),
            });

        render_caustic_pass(
            &mut encoder,
            &self.pipeline,
            &self.bind_group,
            &view,
            self.clear,
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get surface texture; `None` means skip this frame
    fn get_surface_texture(&mut self) -> Result<Option<wgpu::SurfaceTexture>, SurfaceError> {
        match self.surface.get_current_texture() {
            Ok(texture) => Ok(Some(texture)),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                Ok(None)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(SurfaceError::OutOfMemory),
            Err(wgpu::SurfaceError::Timeout) => Ok(None),
        }
    }
}
