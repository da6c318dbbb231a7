use image::imageops::FilterType;
use image::DynamicImage;

/// Longest texture side uploaded to the GPU. Larger images are downscaled for
/// display only; geometry always uses the natural size.
const MAX_TEXTURE_SIDE: u32 = 4096;

/// Convert a decoded image to an egui ColorImage, downscaling oversized ones.
pub fn dynamic_to_color_image(img: &DynamicImage) -> egui::ColorImage {
    let rgba = if img.width() > MAX_TEXTURE_SIDE || img.height() > MAX_TEXTURE_SIDE {
        img.resize(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE, FilterType::Triangle)
            .to_rgba8()
    } else {
        img.to_rgba8()
    };
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
