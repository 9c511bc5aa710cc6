use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "juxtafig",
    about = "Generate LaTeX figures juxtaposing dataset frames over time"
)]
pub struct Cli {
    /// Defaults to `render` with every dataset.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print figure markup to stdout.
    Render {
        /// Dataset to render (repeatable). Renders every dataset when omitted.
        #[arg(short, long = "dataset")]
        datasets: Vec<String>,

        /// Wrap the figures in a compilable article document.
        #[arg(long)]
        standalone: bool,
    },
    /// List the known datasets.
    List,
}
