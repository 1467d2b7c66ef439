//! curl2py: paste a cURL command, get Python `requests` code back.
//!
//! The conversion itself is delegated to a Gemini-style text-generation
//! endpoint; this crate only provides the boundary around that call
//! (`conversion`) and the desktop UI driving it (`ui`).

pub mod conversion;
pub mod ui;
