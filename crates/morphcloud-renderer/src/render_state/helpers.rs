/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// wgpu clear color from an sRGB color, converted for an sRGB surface.
pub(crate) fn clear_color(color: morphcloud_common::Rgb) -> wgpu::Color {
    let linear = color.to_linear();
    wgpu::Color {
        r: linear.r as f64,
        g: linear.g as f64,
        b: linear.b as f64,
        a: 1.0,
    }
}
