use wgpu::{Device, Queue, Sampler, Texture, TextureFormat, TextureView};

use super::display_context::DisplayContext;
use super::frame::PixelBuffer;
use crate::error::Result;

/// Pick the frame texture format for a surface format
///
/// Sampling an sRGB texture decodes to linear and writing to an sRGB surface
/// encodes back, so producer bytes reach the screen unchanged either way.
pub fn texture_format_for(surface_format: TextureFormat) -> TextureFormat {
    if surface_format.is_srgb() {
        TextureFormat::Rgba8UnormSrgb
    } else {
        TextureFormat::Rgba8Unorm
    }
}

/// The single GPU texture frames are uploaded into
///
/// Fixed size for its whole lifetime. Uploads go through a persistent staging
/// copy and overwrite the full texture region in place.
pub struct FrameTexture {
    texture: Texture,
    view: TextureView,
    sampler: Sampler,
    staging: PixelBuffer,
    context: DisplayContext,
}

impl FrameTexture {
    pub fn new(device: &Device, context: DisplayContext, format: TextureFormat) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Frame Texture"),
            size: Self::extent(context),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Frame Texture Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
            staging: PixelBuffer::new(context.width, context.height),
            context,
        }
    }

    fn extent(context: DisplayContext) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: context.width,
            height: context.height,
            depth_or_array_layers: 1,
        }
    }

    /// Copy `frame` into staging and write it over the whole texture
    pub fn upload(&mut self, queue: &Queue, frame: &PixelBuffer) -> Result<()> {
        self.staging.copy_from(frame)?;

        queue.write_texture(
            self.texture.as_image_copy(),
            self.staging.as_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(self.staging.bytes_per_row()),
                rows_per_image: Some(self.context.height),
            },
            Self::extent(self.context),
        );
        Ok(())
    }

    pub fn view(&self) -> &TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    pub fn format(&self) -> TextureFormat {
        self.texture.format()
    }

    pub fn dimensions(&self) -> DisplayContext {
        self.context
    }

    /// Last frame that was uploaded
    pub fn staging(&self) -> &PixelBuffer {
        &self.staging
    }
}
