#![forbid(unsafe_code)]

//! Static variable catalogs shared by the checks
//!
//! Both catalogs are process-wide, read-only data. Required variables must
//! be declared by every conformant theme; recommended variables improve
//! coverage but only warn when absent.

use regex::Regex;
use std::sync::LazyLock;

/// CSS custom properties every theme must declare
pub const REQUIRED_VARIABLES: [&str; 7] = [
    "--bg-primary",
    "--bg-secondary",
    "--text-primary",
    "--text-secondary",
    "--accent-primary",
    "--border-color",
    "--font-family-primary",
];

/// CSS custom properties a theme should declare
pub const RECOMMENDED_VARIABLES: [&str; 8] = [
    "--bg-tertiary",
    "--text-muted",
    "--accent-secondary",
    "--color-success",
    "--color-warning",
    "--color-error",
    "--border-focus",
    "--font-family-mono",
];

/// Matches any CSS custom property token, declaration or usage alike
pub(crate) static VARIABLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[\w-]+").expect("variable pattern is valid"));
