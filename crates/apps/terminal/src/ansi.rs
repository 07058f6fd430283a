//! Minimal ANSI SGR (`ESC [ n ; n m`) parsing into styled text runs.

/// Escape prefix emitted by the interpreter.
pub const ESC: &str = "\u{1b}[";

/// SGR foreground colors understood by the terminal view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiColor {
    /// 30
    Black,
    /// 31
    Red,
    /// 32
    Green,
    /// 33
    Yellow,
    /// 34
    Blue,
    /// 35
    Magenta,
    /// 36
    Cyan,
    /// 37
    White,
    /// 90
    Gray,
}

impl AnsiColor {
    fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            30 => Self::Black,
            31 => Self::Red,
            32 => Self::Green,
            33 => Self::Yellow,
            34 => Self::Blue,
            35 => Self::Magenta,
            36 => Self::Cyan,
            37 => Self::White,
            90 => Self::Gray,
            _ => return None,
        })
    }

    /// SGR code for this color.
    pub const fn code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::Gray => 90,
        }
    }

    /// CSS color value.
    pub const fn css(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::Red => "#ff5f56",
            Self::Green => "#27c93f",
            Self::Yellow => "#ffbd2e",
            Self::Blue => "#007aff",
            Self::Magenta => "#af52de",
            Self::Cyan => "#5ac8fa",
            Self::White => "#ffffff",
            Self::Gray => "#8e8e93",
        }
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment {
    /// Visible text with escapes stripped.
    pub text: String,
    /// Foreground color, if any.
    pub color: Option<AnsiColor>,
    /// Bold weight.
    pub bold: bool,
}

impl StyledSegment {
    /// Inline CSS for the segment.
    pub fn css(&self) -> String {
        let mut style = String::new();
        if let Some(color) = self.color {
            style.push_str("color:");
            style.push_str(color.css());
            style.push(';');
        }
        if self.bold {
            style.push_str("font-weight:bold;");
        }
        style
    }
}

/// Wraps `text` in a color escape followed by a reset.
pub fn paint(color: AnsiColor, text: &str) -> String {
    format!("{ESC}{}m{text}{ESC}0m", color.code())
}

/// Wraps `text` in a bold escape followed by a reset.
pub fn bold(text: &str) -> String {
    format!("{ESC}1m{text}{ESC}0m")
}

/// Splits a line into styled segments.
///
/// `0` resets, `1` sets bold, `22` clears bold, `39` clears the color; unknown codes and
/// malformed sequences are dropped without affecting the surrounding text.
pub fn parse_sgr(line: &str) -> Vec<StyledSegment> {
    let mut segments = Vec::new();
    let mut color = None;
    let mut bold = false;
    let mut text = String::new();
    let mut rest = line;

    while let Some(start) = rest.find(ESC) {
        text.push_str(&rest[..start]);
        let after = &rest[start + ESC.len()..];
        let Some(end) = after.find('m') else {
            rest = "";
            break;
        };
        let params = &after[..end];
        rest = &after[end + 1..];
        if !params.chars().all(|c| c.is_ascii_digit() || c == ';') {
            continue;
        }

        flush(&mut segments, &mut text, color, bold);
        let codes = if params.is_empty() { "0" } else { params };
        for code in codes.split(';').filter_map(|code| code.parse::<u8>().ok()) {
            match code {
                0 => {
                    color = None;
                    bold = false;
                }
                1 => bold = true,
                22 => bold = false,
                39 => color = None,
                other => {
                    if let Some(next) = AnsiColor::from_code(other) {
                        color = Some(next);
                    }
                }
            }
        }
    }
    text.push_str(rest);
    flush(&mut segments, &mut text, color, bold);
    segments
}

fn flush(
    segments: &mut Vec<StyledSegment>,
    text: &mut String,
    color: Option<AnsiColor>,
    bold: bool,
) {
    if text.is_empty() {
        return;
    }
    segments.push(StyledSegment {
        text: std::mem::take(text),
        color,
        bold,
    });
}

/// Line with every escape removed.
pub fn strip(line: &str) -> String {
    parse_sgr(line).into_iter().map(|segment| segment.text).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn colored_and_plain_runs_are_split() {
        let line = format!("{} and {}", paint(AnsiColor::Red, "error"), bold("strong"));
        assert_eq!(
            parse_sgr(&line),
            vec![
                StyledSegment {
                    text: "error".to_string(),
                    color: Some(AnsiColor::Red),
                    bold: false,
                },
                StyledSegment {
                    text: " and ".to_string(),
                    color: None,
                    bold: false,
                },
                StyledSegment {
                    text: "strong".to_string(),
                    color: None,
                    bold: true,
                },
            ]
        );
    }

    #[test]
    fn combined_codes_and_unknown_codes() {
        let segments = parse_sgr("\u{1b}[1;36mhead\u{1b}[5mer\u{1b}[0m");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].color, Some(AnsiColor::Cyan));
        assert!(segments[0].bold);
        assert_eq!(segments[1].text, "er");
        assert_eq!(segments[0].css(), "color:#5ac8fa;font-weight:bold;");
    }

    #[test]
    fn plain_and_malformed_input() {
        assert!(parse_sgr("").is_empty());
        assert_eq!(strip("no escapes"), "no escapes");
        assert_eq!(strip("cut \u{1b}[31"), "cut ");
        assert_eq!(strip("a\u{1b}[x;ym b"), "a b");
    }
}
