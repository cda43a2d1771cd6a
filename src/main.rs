use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scheme_picker::{Mode, Request, FALLBACK_SCHEME};

#[derive(Parser)]
#[command(name = "scheme-picker")]
#[command(version)]
#[command(about = "Pick a color scheme variant for an image")]
struct Cli {
    /// Print the image's colorfulness score instead of a scheme
    #[arg(long)]
    colorfulness: bool,

    /// Image file to analyze; extra paths are ignored
    #[arg(value_name = "IMAGE")]
    images: Vec<PathBuf>,
}

impl Cli {
    fn into_request(self) -> Request {
        let mut images = self.images.into_iter();
        let image = images.next();
        let ignored = images.count();
        if ignored > 0 {
            tracing::warn!(ignored, "Only the first image is analyzed");
        }
        let mode = if self.colorfulness {
            Mode::Colorfulness
        } else {
            Mode::Classify
        };
        Request::new(image, mode)
    }
}

fn init_logging() {
    // stdout carries only the result line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scheme_picker=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(request: &Request) -> anyhow::Result<String> {
    scheme_picker::run(request).with_context(|| match &request.image {
        Some(path) => format!("Could not analyze {}", path.display()),
        None => "Nothing to analyze".to_string(),
    })
}

fn fail() -> ExitCode {
    println!("{FALLBACK_SCHEME}");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            tracing::error!(error = %e, "Invalid arguments");
            return fail();
        }
    };

    match run(&cli.into_request()) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            fail()
        }
    }
}
