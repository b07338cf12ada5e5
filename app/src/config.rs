use std::path::PathBuf;

use clap::Parser;

lazy_static::lazy_static! {
    pub static ref PROJECT_NAME: String = String::from("Directory").to_uppercase();
}

/// Get the data directory for the application
pub fn get_data_dir() -> PathBuf {
    let project_name = PROJECT_NAME.clone().to_lowercase();

    if let Ok(data_dir) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(data_dir).join(&project_name)
    } else if let Ok(home_dir) = std::env::var("HOME") {
        PathBuf::from(home_dir)
            .join(".local")
            .join("share")
            .join(&project_name)
    } else {
        // Fallback to current directory if no home directory is found
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&project_name)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "directory")]
#[command(about = "Browse and edit a user directory and its stock portfolios")]
pub struct Cli {
    /// JSON array of user records
    #[arg(long, env = "DIRECTORY_USERS", default_value = "data/users.json")]
    pub users: PathBuf,

    /// JSON array of stock records
    #[arg(long, env = "DIRECTORY_STOCKS", default_value = "data/stocks.json")]
    pub stocks: PathBuf,

    /// Directory the page's assets (`logos/`) are resolved against
    #[arg(long, env = "DIRECTORY_ASSETS", default_value = ".")]
    pub assets: PathBuf,

    /// Where `render` writes the HTML page [default: <data dir>/index.html]
    #[arg(long, env = "DIRECTORY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Answer every confirmation with yes
    #[arg(long)]
    pub assume_yes: bool,
}

impl Cli {
    /// Loads `.env` (if any) before parsing so it can supply the `DIRECTORY_*` variables.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::parse()
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| get_data_dir().join("index.html"))
    }
}
