//! Reference engine adapters.
//!
//! One adapter type covers every known API generation: the differences the
//! benchmark can observe are captured by [`Capabilities`], and everything
//! else behind the narrow interface behaves identically. The render path
//! clears the surface with the configured background color and presents;
//! per-object rasterization is deliberately left to the engine build itself
//! and is not modelled here.

use std::collections::HashMap;

use crate::device::Gpu;
use crate::version::EngineVersion;

use super::{
    ApiGeneration, Capabilities, EngineFactory, EngineInit, RenderEngine, ScreenRect, Stage,
    TextureSource,
};

/// Entry-point factory for one API generation.
#[derive(Debug, Copy, Clone)]
pub struct ReferenceFactory {
    generation: ApiGeneration,
}

impl ReferenceFactory {
    pub fn new(generation: ApiGeneration) -> Self {
        Self { generation }
    }
}

impl EngineFactory for ReferenceFactory {
    fn generation(&self) -> ApiGeneration {
        self.generation
    }

    fn build(&self, init: EngineInit) -> Box<dyn RenderEngine> {
        Box::new(ReferenceEngine {
            version: init.version,
            generation: self.generation,
            capabilities: init.capabilities,
            screen: init.screen,
            background: init.background,
            transparent: init.transparent,
            clear_before_render: init.clear_before_render,
            stage: Stage::new(),
            textures: HashMap::new(),
        })
    }
}

struct ReferenceEngine {
    version: EngineVersion,
    generation: ApiGeneration,
    capabilities: Capabilities,
    screen: ScreenRect,
    background: u32,
    transparent: bool,
    clear_before_render: bool,
    stage: Stage,
    textures: HashMap<String, TextureSource>,
}

impl ReferenceEngine {
    fn clear_color(&self) -> wgpu::Color {
        if self.transparent {
            return wgpu::Color::TRANSPARENT;
        }

        let srgb = |channel: u32| (channel & 0xff) as f64 / 255.0;
        wgpu::Color {
            r: srgb(self.background >> 16),
            g: srgb(self.background >> 8),
            b: srgb(self.background),
            a: 1.0,
        }
    }
}

impl RenderEngine for ReferenceEngine {
    fn version(&self) -> &EngineVersion {
        &self.version
    }

    fn generation(&self) -> ApiGeneration {
        self.generation
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn screen(&self) -> ScreenRect {
        self.screen
    }

    fn stage(&self) -> &Stage {
        &self.stage
    }

    fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    fn install_texture(&mut self, key: &str, source: TextureSource) -> anyhow::Result<()> {
        anyhow::ensure!(
            source.rgba.len() == (source.width * source.height * 4) as usize,
            "texture {key}: pixel buffer does not match {}x{}",
            source.width,
            source.height
        );

        self.textures.insert(key.to_string(), source);
        Ok(())
    }

    fn has_texture(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }

    fn render(&mut self, gpu: &mut Gpu<'_>) -> Result<(), wgpu::SurfaceError> {
        let mut frame = gpu.begin_frame()?;

        let load = if self.clear_before_render {
            wgpu::LoadOp::Clear(self.clear_color())
        } else {
            wgpu::LoadOp::Load
        };

        {
            let _pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("bunnymark frame"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations { load, store: wgpu::StoreOp::Store },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        gpu.submit(frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(generation: ApiGeneration) -> Box<dyn RenderEngine> {
        ReferenceFactory::new(generation).build(EngineInit {
            version: EngineVersion::new("v6.2.1"),
            capabilities: Capabilities::native_for(generation),
            screen: ScreenRect::new(960.0, 540.0),
            background: 0x1099bb,
            transparent: false,
            clear_before_render: true,
        })
    }

    #[test]
    fn fresh_engine_has_an_empty_stage() {
        let engine = build(ApiGeneration::V6);
        assert!(engine.stage().is_empty());
        assert_eq!(engine.screen(), ScreenRect::new(960.0, 540.0));
    }

    #[test]
    fn install_texture_validates_dimensions() {
        let mut engine = build(ApiGeneration::V6);

        let good = TextureSource { width: 2, height: 2, rgba: vec![0; 16] };
        engine.install_texture("images/bunny1.png", good).unwrap();
        assert!(engine.has_texture("images/bunny1.png"));

        let bad = TextureSource { width: 2, height: 2, rgba: vec![0; 3] };
        assert!(engine.install_texture("broken", bad).is_err());
        assert!(!engine.has_texture("broken"));
    }
}
