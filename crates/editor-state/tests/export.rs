use editor_state::PosterSession;
use poster_core::EditorState;

fn decode(png_data: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(png_data);
    let mut reader = decoder.read_info().expect("decode");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("frame");
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}

#[test]
fn export_is_a_poster_sized_png() {
    let session = PosterSession::default();
    let png_data = session.export_image().expect("export");

    assert!(png_data.len() > 100, "PNG data seems too small");
    assert_eq!(&png_data[0..8], b"\x89PNG\r\n\x1a\n");

    let (width, height, pixels) = decode(&png_data);
    assert_eq!((width, height), (600, 400));
    assert_eq!(pixels.len(), 600 * 400 * 4);
}

#[test]
fn export_contains_background_border_and_text() {
    let mut session = PosterSession::default();
    session.set_color("#1e90ff").unwrap();
    session.set_font_size(48);

    let (_, _, pixels) = decode(&session.export_image().unwrap());

    let mut found_text = false;
    let mut found_background = false;
    for chunk in pixels.chunks(4) {
        found_text |= chunk == [0x1e_u8, 0x90, 0xff, 255];
        found_background |= chunk == [0xf8_u8, 0xf9, 0xfa, 255];
    }
    assert!(found_text, "Expected text pixels in the chosen color");
    assert!(found_background, "Expected background pixels");

    // Top-left corner is border
    assert_eq!(&pixels[0..4], &[0xe9_u8, 0xec, 0xef, 255]);
}

#[test]
fn export_reflects_undo() {
    let mut session = PosterSession::new(EditorState::default());
    let original = session.export_image().unwrap();

    session.set_text("First");
    session.set_text("Second");
    assert_ne!(session.export_image().unwrap(), original);

    assert!(session.undo());
    assert_eq!(session.state(), &EditorState::default());
    assert_eq!(session.export_image().unwrap(), original);
}

#[test]
fn export_is_deterministic() {
    let session = PosterSession::default();
    assert_eq!(session.export_image().unwrap(), session.export_image().unwrap());
}
