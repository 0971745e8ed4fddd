//! taskrank-ingest: bulk task intake from pasted JSON arrays.

pub mod ingestor;
pub mod parser;

pub use ingestor::BulkIngestor;
pub use parser::parse_bulk;
