//! Dataset generation engine.
//!
//! ## Module Structure
//!
//! - `file`: Page metadata from the tldr-pages directory layout
//! - `scanner`: Discovery of page files under a tldr-pages checkout
//! - `markdown`: Block-level tokenizer over pulldown-cmark events
//! - `page`: Strict page parser
//! - `normalize`: Placeholder normalization of example commands
//! - `unique`: Collision-discarding uniqueness filter
//! - `align`: Alignment of two language variants of a page
//! - `context`: Discovered files, lazily parsed pages and language pairs
//! - `pipeline`: Emission of one language pair into a writer
//!
//! ## Data Flow
//!
//! 1. `scanner` finds `pages*/<platform>/<command>.md` files and `file`
//!    classifies them by language, platform and command.
//! 2. `context` groups files into language pairs and matches each source
//!    file with its variant in the target language.
//! 3. `page` parses both variants on demand (once per file).
//! 4. `align` turns the two pages into translation pairs, which `pipeline`
//!    pushes one at a time into a [`Writer`](crate::writers::Writer).

pub mod align;
pub mod context;
pub mod file;
pub mod markdown;
pub mod normalize;
pub mod page;
pub mod pipeline;
pub mod scanner;
pub mod unique;

pub use align::{TranslationPair, find_translations};
pub use context::{DatasetContext, LanguagePair, PageStats};
pub use file::{DEFAULT_LANGUAGE, PageFile, PathError};
pub use normalize::{NORMALIZED_TOKEN, normalize};
pub use page::{Example, MalformedPage, Page};
pub use pipeline::{PairSummary, emit_language_pair};
pub use unique::retain_unique;
