//! Shared constants used across the application

/// Versioned root of the generative-language REST API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1000;
pub const DEFAULT_TOP_P: f32 = 0.8;
pub const DEFAULT_TOP_K: u32 = 10;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";
pub const MODEL_ENV: &str = "GEMINI_MODEL";

/// Value shipped in sample configs; treated the same as an unset key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";
