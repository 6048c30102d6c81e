//! Loader for `.lng` resource files.
//!
//! A resource opens with a directive that declares its own delimiters, then
//! lists named blocks whose bodies may reference one another:
//!
//! ```text
//! !!! === $ $ ;
//! === company ; legal name, do not translate
//! Volkswagen Group
//! === welcome
//! Welcome to $company$!
//! ```
//!
//! [`load`] turns that text into an immutable [`Store`]; [`Localizer`] keeps
//! the active language and swaps stores on reload.

pub mod error;
pub mod io;
pub mod languages;
pub mod localizer;
pub mod parsing;
pub mod store;

#[cfg(test)]
pub mod tests;

use xi_rope::Rope;

pub use error::*;
pub use io::{AvailableLanguage, available_languages, load_file, scan_resource_files};
pub use localizer::Localizer;
pub use parsing::{directive::DelimiterConfig, resolve::ResolvedBlock};
pub use store::{Key, Store, Translation};

/// Parses and resolves a whole resource.
///
/// Either every block resolves and a complete store comes back, or the
/// first problem is reported and nothing is kept. A leading UTF-8 byte
/// order mark is skipped.
pub fn load(text: &str) -> Result<Store, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rope = Rope::from(text);
    let doc = parsing::parse_document(&rope)?;
    let resolved = parsing::resolve::resolve_blocks(&doc.blocks)?;
    let store = Store::build(resolved)?;
    log::info!("Loaded {} strings", store.len());
    Ok(store)
}

/// Text stored under `name`.
pub fn lookup<'a>(store: &'a Store, name: &str) -> Result<&'a str, KeyError> {
    store.lookup(name)
}
