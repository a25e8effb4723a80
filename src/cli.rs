use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ytnotes",
    about = "YouTube transcript to detailed notes converter",
    version,
)]
pub struct Cli {
    /// YouTube video URL (reads from stdin if omitted)
    pub url: Option<String>,

    /// Print the transcript and skip notes generation
    #[arg(short, long)]
    pub transcript_only: bool,

    /// Preferred caption language
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Gemini model for notes generation
    #[arg(short, long)]
    pub model: Option<String>,

    /// Show pipeline progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
