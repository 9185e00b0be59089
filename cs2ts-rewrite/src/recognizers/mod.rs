//! Built-in recognizers, in tie-break priority order.

mod attribute;
mod auto_property;
mod doc_summary;
mod public_member;

pub use attribute::AttributeRecognizer;
pub use auto_property::AutoPropertyRecognizer;
pub use doc_summary::DocSummaryRecognizer;
pub use public_member::PublicMemberRecognizer;
