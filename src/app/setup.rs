//! This module handles the initial setup of the application.
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::{Endpoints, ImageSearchConfig, IMAGE_API_KEY_ENV, IMAGE_CX_ENV};

use super::args::AppArgs;

/// Contains all the necessary components for the application to run.
pub struct PreparedApp {
    /// Image-search credentials, absent when not configured.
    pub image_config: Option<ImageSearchConfig>,
    /// Base URLs of the lookup providers.
    pub endpoints: Endpoints,
}

/// Prepares the application for running.
///
/// This function performs the following steps:
/// 1. Configures logging.
/// 2. Reads the image-search credentials, warning once if they are
///    missing (the image command stays disabled, the others keep
///    working).
/// 3. Resolves the provider endpoints.
/// 4. Prints a start banner.
pub fn prepare(args: AppArgs) -> PreparedApp {
    configure_logging();

    let image_config = ImageSearchConfig::from_env();
    if image_config.is_none() {
        warn!(
            "[ImageSearch] CX and/or API key are not available. Check \"{}\" and \"{}\" in the \
             environment.",
            IMAGE_CX_ENV, IMAGE_API_KEY_ENV
        );
    }

    let endpoints = Endpoints::from_env(&args.lang);

    print_start_banner(&args, image_config.is_some());

    PreparedApp {
        image_config,
        endpoints,
    }
}

/// Configures logging for the application.
fn configure_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,search_bot=debug")),
        )
        .try_init();
}

/// Prints a banner with startup information.
fn print_start_banner(args: &AppArgs, image_search: bool) {
    println!("🔎 Starting search bot");
    println!("Encyclopedia language: {}", args.lang);
    println!(
        "Image search: {}",
        if image_search {
            "enabled"
        } else {
            "disabled (missing credentials)"
        }
    );
    println!();
}
