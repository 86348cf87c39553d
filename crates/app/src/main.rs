use anyhow::Context;
use clap::Parser;
use fltk::prelude::{GroupExt, WidgetExt};
use io::ExportSink;

mod cli;
mod logging;

fn main() -> anyhow::Result<()> {
    let config = cli::StartupConfig::from(cli::Args::parse());
    logging::init(config.log_filter.as_deref())?;

    let session = editor_state::PosterSession::new(config.initial.clone());

    if config.headless {
        return export_headless(&session, &config.output);
    }

    run_gui(session)
}

fn export_headless(
    session: &editor_state::PosterSession,
    output: &std::path::Path,
) -> anyhow::Result<()> {
    let bytes = session.export_image().context("rendering poster")?;
    io::FileSink::new(output)
        .save(&bytes)
        .with_context(|| format!("saving poster to {}", output.display()))?;
    println!("{}", output.display());
    Ok(())
}

fn run_gui(session: editor_state::PosterSession) -> anyhow::Result<()> {
    let app = fltk::app::App::default();
    let (w, h) = ui::PosterEditor::preferred_size();
    let mut win = fltk::window::Window::default()
        .with_size(w, h)
        .with_label("CanvaLite");

    let session = std::rc::Rc::new(std::cell::RefCell::new(session));
    let _editor = ui::PosterEditor::new(0, 0, session);

    win.end();
    win.show();

    tracing::info!("editor window opened");
    app.run()
        .map_err(|e| anyhow::anyhow!("event loop failed: {e:?}"))
}
