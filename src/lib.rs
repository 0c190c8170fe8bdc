//! Selection-correction core for host text extensions.
//!
//! A host (editor plugin, OS automation layer) hands over the current
//! selection and its configuration; this crate picks a chat-completion
//! provider (OpenAI-style or Gemini-style, with single-step fallback on a
//! missing key), asks it to correct the text, and delivers the result back
//! through the host's paste or clipboard capability. One network call per
//! invocation, no state kept between runs.

pub mod action;
pub mod config;
pub mod error;
pub mod host;
pub mod pipeline;
pub mod provider;
