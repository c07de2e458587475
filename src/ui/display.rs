//! Text rendering of the calculator display and keypad.

use crate::calculator::{DisplayFrame, Operator};
use crate::input::KEYPAD;

/// Render the display as a boxed line of text.
///
/// Numbers are right-aligned like a pocket calculator; error messages are
/// left-aligned and marked with `!`. The box grows if the text is wider than
/// `width`.
pub fn render_display(frame: &DisplayFrame, width: usize) -> String {
    let text = if frame.is_error {
        format!("! {}", frame.text)
    } else {
        frame.text.clone()
    };
    let inner = width.max(text.chars().count());
    let rule = "─".repeat(inner + 2);

    let line = if frame.is_error {
        format!("│ {:<inner$} │", text)
    } else {
        format!("│ {:>inner$} │", text)
    };

    format!("╭{rule}╮\n{line}\n╰{rule}╯")
}

/// Render the keypad, bracketing the active operator.
pub fn render_keypad(active_operator: Option<Operator>) -> String {
    KEYPAD
        .iter()
        .map(|row| {
            row.iter()
                .map(|button| {
                    let label = button.label();
                    if button.is_active(active_operator) {
                        format!("[{label}]")
                    } else {
                        format!(" {label} ")
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the display with the keypad underneath.
pub fn render_panel(frame: &DisplayFrame, width: usize, show_keypad: bool) -> String {
    let display = render_display(frame, width);
    if show_keypad {
        format!("{display}\n{}", render_keypad(frame.active_operator))
    } else {
        display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(text: &str) -> DisplayFrame {
        DisplayFrame {
            text: text.to_string(),
            active_operator: None,
            is_error: false,
        }
    }

    #[test]
    fn test_number_right_aligned() {
        let rendered = render_display(&frame("42"), 6);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "│     42 │");
        assert_eq!(lines[0], "╭────────╮");
    }

    #[test]
    fn test_error_left_aligned_and_widened() {
        let error = DisplayFrame {
            is_error: true,
            ..frame("Cannot divide by zero")
        };
        let rendered = render_display(&error, 12);
        assert!(rendered.contains("│ ! Cannot divide by zero │"));
    }

    #[test]
    fn test_keypad_highlight() {
        let plain = render_keypad(None);
        assert!(!plain.contains('['));
        assert_eq!(plain.lines().count(), KEYPAD.len());

        let active = render_keypad(Some(Operator::Multiply));
        assert!(active.contains("[×]"));
        assert_eq!(active.matches('[').count(), 1);
    }

    #[test]
    fn test_panel_without_keypad() {
        let display = render_panel(&frame("7"), 12, false);
        assert_eq!(display, render_display(&frame("7"), 12));
        let panel = render_panel(&frame("7"), 12, true);
        assert!(panel.starts_with(&display));
        assert!(panel.lines().count() > 3);
    }
}
