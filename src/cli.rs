use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lazymodal", version, about = "Modal dialog widget demo")]
pub struct Args {
    /// Theme name (e.g., "Catppuccin Latte")
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Open a dialog on startup; "confirm" opens a confirm prompt, any
    /// other value opens an alert
    #[arg(long, value_name = "MODE")]
    pub open: Option<String>,

    /// Message shown by --open
    #[arg(long, requires = "open")]
    pub message: Option<String>,
}
