//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

/// Professional email writer
pub const EMAIL_WRITER: &str = include_str!("../../prompts/email-writer.pmt");

/// E-commerce product description
pub const PRODUCT_DESCRIPTION: &str = include_str!("../../prompts/product-description.pmt");

/// Code review request
pub const CODE_REVIEWER: &str = include_str!("../../prompts/code-reviewer.pmt");
