// THEORY:
// This file is the entry point for the `sheet_options` library crate. It holds
// the typed layer that sits between a command-line front end and the image
// filters of a scanned-sheet processing pipeline.
//
// - `options` defines the `Options` record and its "nothing configured yet"
//   defaults.
// - `parsers` turns one option value's text into one typed value (sizes,
//   offsets, rectangles, borders, colors, directions, wipe areas).
// - `core_modules` holds the value types those parsers produce.
// - `error` describes every way a value can be refused.
//
// Tokenizing the command line and running the filters are left to the caller.

pub mod core_modules;
pub mod error;
pub mod options;
pub mod parsers;

pub use core_modules::direction::Direction;
pub use core_modules::geometry::geometry::{Border, Delta, Point, Rectangle, RectangleSize};
pub use core_modules::multi_index::MultiIndex;
pub use core_modules::pixel::pixel::Pixel;
pub use core_modules::wipes::{MAX_WIPES, Wipes};
pub use error::{OptionError, OptionResult};
pub use options::{Layout, Options};

/// Installs a `tracing` subscriber that prints to stderr, filtered by `RUST_LOG`.
///
/// Front ends call this once at startup so the wipe diagnostics become visible.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
