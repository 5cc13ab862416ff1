//! Spotify Relay Service Library
//!
//! This library implements a small HTTP relay in front of the Spotify Web API.
//! It drives the OAuth2 authorization-code flow for a single web front-end and
//! exposes convenience endpoints that compose several upstream calls (search,
//! playlist creation, recommendation lookup) into one request.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the relay's endpoints
//! - `config` - Configuration management and environment variables
//! - `management` - In-process access token ownership
//! - `server` - Router assembly and the HTTP server
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use tunerelay::{config, server};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env();
//!     let config = config::Config::from_env().expect("configuration");
//!     server::start_api_server(config).await;
//! }
//! ```

pub mod api;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use tunerelay::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// info!("Resolved {} of {} songs", found, total);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations. Used to provide positive feedback
/// when operations complete successfully.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Access token stored");
/// success!("Playlist {} created", playlist_id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. For the relay that means startup
/// failures only; request handlers log with [`warning!`] and answer with a
/// generic error response instead.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Cannot load environment: {}", e);
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program
/// termination. Request handlers use this to record the real cause of a
/// failure before replying with a generic status, so upstream detail stays
/// in the process log and never reaches the caller.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", e);
/// warning!("Upstream search failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
