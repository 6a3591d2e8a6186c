//! Teal gradient ASCII banner shown at kiosk start.

use crate::domain::clinic::CLINIC_NAME;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Teal 700 (#0f766e).
const TEAL_DARK: (u8, u8, u8) = (0x0f, 0x76, 0x6e);
/// Teal 300 (#5eead4).
const TEAL_LIGHT: (u8, u8, u8) = (0x5e, 0xea, 0xd4);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Banner art lines; falls back to the plain title when the font cannot render.
fn banner_lines(title: &str) -> Vec<String> {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(title).map(|figure| figure.to_string()))
        .map(|art| art.lines().map(str::to_string).collect())
        .unwrap_or_else(|| vec![title.to_string()])
}

/// Prints "DENTAL DESK" with a vertical teal gradient, then the clinic name and version.
pub fn print_welcome() {
    let mut out = stdout();
    let lines = banner_lines("DENTAL DESK");
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(TEAL_DARK, TEAL_LIGHT, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: TEAL_LIGHT.0,
        g: TEAL_LIGHT.1,
        b: TEAL_LIGHT.2,
    }));
    let _ = out.execute(Print(format!("{CLINIC_NAME} · v{version}\r\n")));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
