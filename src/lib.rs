//! Foglio fetches a single named Markdown document over HTTP, converts it to
//! HTML through an injected converter capability, and writes the result into a
//! display region of an in-process page model. Failures are logged and leave
//! the region untouched.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
