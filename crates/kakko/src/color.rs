//! Centralized CLI color functions.
//!
//! All functions automatically respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection
//! via `owo-colors`' `if_supports_color()`. The `--no-color` flag sets an internal
//! flag that bypasses owo-colors entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

/// Global override: when true, forces color off (set by `--no-color` flag).
static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

/// Type-safe RGB color with compile-time hex-to-component conversion.
#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const AURORA: Rgb = Rgb::from_hex(0x6B8F5E); // Success
const COPPER: Rgb = Rgb::from_hex(0xC49A5C); // Warning
const EMBER: Rgb = Rgb::from_hex(0xB87060); // Error
const MUTED: Rgb = Rgb::from_hex(0x5C6370); // Secondary info

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

/// Apply aurora green (success).
pub fn aurora(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(AURORA.r, AURORA.g, AURORA.b))
        .to_string()
}

/// Apply copper amber (warnings on stdout).
pub fn copper(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(COPPER.r, COPPER.g, COPPER.b))
        .to_string()
}

/// Apply muted gray (paths, secondary info).
pub fn muted(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(MUTED.r, MUTED.g, MUTED.b))
        .to_string()
}

/// Apply bold.
pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Apply ember red for messages written to stderr.
pub fn error(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stderr, |t| t.truecolor(EMBER.r, EMBER.g, EMBER.b))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        let c = Rgb::from_hex(0x6B8F5E);
        assert_eq!((c.r, c.g, c.b), (0x6B, 0x8F, 0x5E));
    }

    #[test]
    fn test_no_color_returns_plain_text() {
        set_no_color();
        assert_eq!(aurora("ok"), "ok");
        assert_eq!(copper("warn"), "warn");
        assert_eq!(muted("path"), "path");
        assert_eq!(bold("b"), "b");
        assert_eq!(error("bad"), "bad");
    }
}
