use stainlab_core::display::{preview, DisplayTransform};
use stainlab_core::error::Result;
use stainlab_core::raster::SourceImage;

/// Convert an 8-bit gray, RGB or RGBA image to an egui ColorImage.
pub fn source_to_color_image(image: &SourceImage) -> egui::ColorImage {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let channels = image.channel_depth();
    let raw = image.to_raw();

    let pixels = raw
        .chunks_exact(channels)
        .map(|px| match *px {
            [v] => egui::Color32::from_gray(v),
            [r, g, b] => egui::Color32::from_rgb(r, g, b),
            [r, g, b, a] => egui::Color32::from_rgba_unmultiplied(r, g, b, a),
            _ => egui::Color32::MAGENTA,
        })
        .collect();

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}

/// Upload `image` downscaled to fit `max_width x max_height`.
pub fn fitted_texture(
    ctx: &egui::Context,
    name: &str,
    image: &SourceImage,
    max_width: u32,
    max_height: u32,
) -> Result<egui::TextureHandle> {
    let fit = DisplayTransform::for_image(image, max_width, max_height);
    // Never upscale the texture; the painter stretches it to the display rect.
    let small = if fit.scale < 1.0 {
        preview(image, &fit)?
    } else {
        image.clone()
    };
    Ok(ctx.load_texture(
        name,
        source_to_color_image(&small),
        egui::TextureOptions::LINEAR,
    ))
}
