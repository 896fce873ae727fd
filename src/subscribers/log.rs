//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints every delivered message to stdout in a
//! human-readable format. This is primarily useful for development,
//! debugging, and examples.
//!
//! ## Output format
//! ```text
//! [received] message=hello
//! [received] message=HELLO
//! ```
//!
//! ## Example
//! ```no_run
//! # use msgrelay::{LogWriter, Publisher, Subscribe};
//! let publisher = Publisher::new();
//! LogWriter.attach_to(&publisher);
//! // LogWriter will print every published message to stdout
//! ```

use crate::messages::Publisher;

use super::subscriber::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Prints each delivered message to
/// stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
pub struct LogWriter;

impl Subscribe for LogWriter {
    fn attach_to(&self, upstream: &Publisher) {
        upstream.subscribe(|msg| {
            println!("[received] message={}", msg.content());
            Ok(())
        });
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
