//! # shot-sort CLI
//!
//! Command-line interface for the screenshot sorter.
//!
//! ## Usage
//! ```bash
//! shot-sort            # sort images in the current directory
//! shot-sort ~/Inbox    # sort images in a specific directory
//! ```

mod cli;

use screenshot_sorter::Result;

fn main() -> Result<()> {
    cli::run()
}
