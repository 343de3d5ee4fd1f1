/// Context-creation flags for the benchmark surface.
///
/// These are fixed per session and chosen by the harness so that every
/// engine version renders against an identical context. The defaults are
/// the benchmark's reference configuration; they are not meant to be
/// tweaked between runs of the same comparison.
#[derive(Debug, Clone)]
pub struct ContextOptions {
    /// Composite the surface with alpha. Off: the window is opaque and the
    /// compositor can skip blending.
    pub alpha: bool,

    /// Allocate a depth buffer. The 2D workloads never depth-test.
    pub depth: bool,

    /// Allocate a stencil buffer (mask/scissor paths in some engine
    /// generations rely on it).
    pub stencil: bool,

    /// Multisample the color target. On: 4x MSAA.
    pub antialias: bool,

    /// Treat surface colors as premultiplied when alpha compositing is on.
    pub premultiplied_alpha: bool,

    /// Keep the drawing buffer contents after present. Off: the swapchain
    /// may discard, which is cheaper.
    pub preserve_drawing_buffer: bool,

    /// Refuse to run on a software/fallback adapter instead of silently
    /// benchmarking a CPU rasterizer.
    pub fail_if_major_performance_caveat: bool,

    /// Adapter power preference hint.
    pub power_preference: wgpu::PowerPreference,

    /// Present mode (swap behavior). FIFO is broadly supported.
    pub present_mode: wgpu::PresentMode,

    /// Desired maximum frame latency for the surface; a hint only.
    pub desired_maximum_frame_latency: u32,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            alpha: false,
            depth: false,
            stencil: true,
            antialias: true,
            premultiplied_alpha: true,
            preserve_drawing_buffer: false,
            fail_if_major_performance_caveat: false,
            power_preference: wgpu::PowerPreference::None,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
        }
    }
}

impl ContextOptions {
    /// Color-target sample count implied by the antialias flag.
    pub fn sample_count(&self) -> u32 {
        if self.antialias { 4 } else { 1 }
    }

    /// Depth/stencil attachment format implied by the buffer flags, if any.
    pub fn depth_stencil_format(&self) -> Option<wgpu::TextureFormat> {
        match (self.depth, self.stencil) {
            (true, true) => Some(wgpu::TextureFormat::Depth24PlusStencil8),
            (true, false) => Some(wgpu::TextureFormat::Depth24Plus),
            (false, true) => Some(wgpu::TextureFormat::Stencil8),
            (false, false) => None,
        }
    }

    /// Alpha mode to request from the surface, resolved against what it
    /// supports in `Gpu::new`.
    pub(crate) fn requested_alpha_mode(&self) -> Option<wgpu::CompositeAlphaMode> {
        if !self.alpha {
            return Some(wgpu::CompositeAlphaMode::Opaque);
        }
        Some(if self.premultiplied_alpha {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            wgpu::CompositeAlphaMode::PostMultiplied
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_defaults_match_the_reference_configuration() {
        let opts = ContextOptions::default();
        assert!(!opts.alpha);
        assert!(!opts.depth);
        assert!(opts.stencil);
        assert!(opts.antialias);
        assert!(opts.premultiplied_alpha);
        assert!(!opts.preserve_drawing_buffer);
        assert!(!opts.fail_if_major_performance_caveat);
        assert_eq!(opts.power_preference, wgpu::PowerPreference::None);
    }

    #[test]
    fn flag_derived_formats() {
        let opts = ContextOptions::default();
        assert_eq!(opts.sample_count(), 4);
        assert_eq!(opts.depth_stencil_format(), Some(wgpu::TextureFormat::Stencil8));
        assert_eq!(opts.requested_alpha_mode(), Some(wgpu::CompositeAlphaMode::Opaque));
    }
}
