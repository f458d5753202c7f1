//! Project loading: reading model documents and merging fragments.

pub mod loader;

pub use loader::{
    Format, LoadError, ParseError, collect_fragment_paths, load_document, load_fragments,
    load_model, parse_document,
};
