//! Guidance module - legal guides, scripts, prompts and fallback content.
//!
//! Pure domain logic only: prompt construction, response parsing and the
//! static tables used when generation fails. Network calls live in the
//! application layer behind the `AIProvider` port.

mod catalog;
mod fallback;
mod guide;
mod prompts;
mod purchase;
mod script_parser;

pub use catalog::GuideCatalog;
pub use fallback::{basic_rights, fallback_guide, fallback_scripts};
pub use guide::{LegalGuide, ScriptSet};
pub use prompts::{
    guide_prompt, script_prompt, Prompt, DEFAULT_SCENARIO, GUIDE_WORD_LIMIT, SCRIPT_ITEMS_MAX,
    SCRIPT_ITEMS_MIN,
};
pub use purchase::PurchaseKind;
pub use script_parser::{parse_script_response, ScriptParseError};
