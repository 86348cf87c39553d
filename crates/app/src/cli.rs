use clap::Parser;
use poster_core::{EditorState, FontSize, Rgb};

#[derive(Debug, Parser)]
#[command(name = "canvalite", version, about = "Single-page poster editor")]
pub struct Args {
    /// Initial poster text.
    #[arg(long, default_value = EditorState::DEFAULT_TEXT)]
    pub text: String,

    /// Initial font size in pixels (12-72).
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(12..=72))]
    pub font_size: u32,

    /// Initial text color as #RRGGBB.
    #[arg(long, default_value = "#000000")]
    pub color: Rgb,

    /// Where --headless writes the PNG.
    #[arg(long, short, default_value = io::DEFAULT_FILE_NAME)]
    pub output: std::path::PathBuf,

    /// Render the initial poster to --output and exit without a window.
    #[arg(long)]
    pub headless: bool,

    /// Log filter directives; RUST_LOG wins when set.
    #[arg(long)]
    pub log_filter: Option<String>,
}

/// Everything `main` needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub initial: EditorState,
    pub output: std::path::PathBuf,
    pub headless: bool,
    pub log_filter: Option<String>,
}

impl From<Args> for StartupConfig {
    fn from(args: Args) -> Self {
        Self {
            initial: EditorState::new(args.text, FontSize::new(args.font_size), args.color),
            output: args.output,
            headless: args.headless,
            log_filter: args.log_filter,
        }
    }
}
