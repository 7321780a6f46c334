//! Configuration section definitions.
//!
//! Each module corresponds to a section in `~/.tex2any.toml`:
//!
//! | Module   | TOML Section | Purpose                                     |
//! |----------|--------------|---------------------------------------------|
//! | `author` | `[author]`   | Author name and email                       |
//! | `footer` | `[footer]`   | Footer component text (copyright, license)  |
//! | `output` | `[output]`   | Default theme, formats and components       |
//! | `engine` | `[engine]`   | LaTeXML / pandoc executables and timeouts   |

mod author;
mod engine;
mod footer;
mod output;

pub use author::AuthorConfig;
pub use engine::EngineConfig;
pub use footer::{FooterConfig, FooterData};
pub use output::OutputConfig;
