//! Headless GPU context.
//!
//! [`GpuContext`] holds the wgpu device and queue used to upload generated
//! meshes and uniform data. No surface is created here: presentation is a
//! frontend concern, and keeping the context headless lets mesh upload run
//! the same way under tests, offscreen tools, and windowed frontends.

use std::fmt;

/// The wgpu device and queue for resource creation and uploads.
pub struct GpuContext {
    /// The logical GPU device for creating resources and pipelines.
    pub device: wgpu::Device,
    /// The command queue for submitting work to the GPU.
    pub queue: wgpu::Queue,
}

impl GpuContext {
    /// Creates a context without a surface: instance, adapter, then
    /// device/queue, blocking on the async wgpu calls.
    pub fn headless() -> Result<Self, GpuError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .map_err(|e| GpuError::Adapter(e.to_string()))?;

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("Tessella Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
            trace: Default::default(),
            experimental_features: Default::default(),
        }))
        .map_err(|e| GpuError::Device(e.to_string()))?;

        Ok(Self { device, queue })
    }
}

/// Failures while bringing up the GPU context.
#[derive(Debug, Clone)]
pub enum GpuError {
    /// No suitable adapter was found.
    Adapter(String),
    /// The adapter refused to create a device.
    Device(String),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::Adapter(e) => write!(f, "failed to acquire a GPU adapter: {}", e),
            GpuError::Device(e) => write!(f, "failed to create a GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {}
