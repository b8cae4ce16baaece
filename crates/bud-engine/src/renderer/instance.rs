use bytemuck::{Pod, Zeroable};

/// Per-instance draw data read by the TypeScript host from wasm memory.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    /// X position in canvas pixels (camera transform applied by the host).
    pub x: f32,
    /// Y position in canvas pixels.
    pub y: f32,
    /// Square destination size in pixels.
    pub size: f32,
    /// Index into the sheet path list reported at load time.
    pub sheet: f32,
    /// Sheet grid column.
    pub col: f32,
    /// Sheet grid row.
    pub row: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    pub _pad: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Flat buffer of draw instances for one frame, in draw order.
pub struct RenderBuffer {
    instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    #[cfg(test)]
    pub fn instances(&self) -> &[RenderInstance] {
        &self.instances
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
