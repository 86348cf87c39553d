use crate::error::RenderResult;
use crate::raster::PixelBuffer;

/// Encodes the buffer as an 8-bit RGBA PNG.
///
/// # Errors
///
/// - [`crate::error::RenderError::Encode`] if the encoder rejects the frame.
pub fn encode_png(buffer: &PixelBuffer) -> RenderResult<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(buffer.data())?;
        writer.finish()?;
    }

    tracing::debug!(
        width = buffer.width(),
        height = buffer.height(),
        bytes = out.len(),
        "export: png encoded"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Rect, Surface};
    use poster_core::Rgb;

    #[test]
    fn test_png_signature_and_roundtrip_pixels() {
        let mut buf = PixelBuffer::new(8, 4);
        buf.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Rgb::new(10, 20, 30));

        let bytes = encode_png(&buf).unwrap();
        assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");

        let decoder = png::Decoder::new(&bytes[..]);
        let mut reader = decoder.read_info().expect("decode");
        let mut pixels = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut pixels).expect("frame");

        assert_eq!((info.width, info.height), (8, 4));
        assert_eq!(&pixels[..info.buffer_size()], buf.data());
    }
}
