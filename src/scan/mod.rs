//! Single-scan baseline partition implementations.

pub mod lomuto;
