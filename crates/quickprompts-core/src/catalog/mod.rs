//! Prompt catalog
//!
//! The catalog is the persisted, ordered list of [`PromptEntry`] records. It
//! is seeded once from a bundled Markdown-like document and from then on only
//! replaced as a whole.

mod defaults;
mod entry;
mod query;
mod seed;
mod store;

pub use defaults::DEFAULT_PROMPTS_DOCUMENT;
pub use entry::PromptEntry;
pub use query::{by_category, categories, find_by_key, uncategorized};
pub use seed::{SeedOutcome, parse_seed_document, read_seed_document};
pub use store::{CATALOG_KEY, CatalogStore};
