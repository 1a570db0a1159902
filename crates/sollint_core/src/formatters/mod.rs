//! Output formatting module.

mod checkstyle;
mod xml;

pub use checkstyle::{CHECKSTYLE_VERSION, CheckstyleReporter};
pub use xml::XmlBuffer;
