//! Terminal rendering of suggestions, definitions and benchmark reports

use crate::corpus::Entry;
use crate::query::{Comparison, Suggestion};
use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// Resolve the `--color` setting against the config default
pub fn color_choice(flag: Option<&str>, config_color: bool) -> ColorChoice {
    match flag {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        Some(_) => ColorChoice::Auto,
        None if config_color => ColorChoice::Auto,
        None => ColorChoice::Never,
    }
}

/// Print ranked suggestions, highlighting where `pattern` occurs in each key
pub fn print_suggestions<W: WriteColor>(
    out: &mut W,
    suggestions: &[Suggestion],
    pattern: &str,
) -> io::Result<()> {
    for suggestion in suggestions {
        write_highlighted(out, &suggestion.key, pattern)?;

        if suggestion.display != suggestion.key {
            write!(out, "  ")?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(out, "{}", suggestion.display)?;
            out.reset()?;
        }
        writeln!(out)?;
    }

    out.set_color(ColorSpec::new().set_dimmed(true))?;
    match suggestions.len() {
        1 => writeln!(out, "1 match")?,
        n => writeln!(out, "{} matches", n)?,
    }
    out.reset()?;

    Ok(())
}

/// Print every definition recorded for `key`, numbered
pub fn print_definitions<W: WriteColor>(
    out: &mut W,
    key: &str,
    entries: &[Entry],
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(out, "{}", key)?;
    out.reset()?;

    for (i, entry) in entries.iter().enumerate() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{:>3}.", i + 1)?;
        out.reset()?;

        if !entry.display.is_empty() && entry.display != key {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(out, " [{}]", entry.display)?;
            out.reset()?;
        }
        writeln!(out, " {}", entry.definition)?;
    }

    Ok(())
}

/// Print one row per pattern comparing the scan and the index
pub fn print_comparisons<W: WriteColor>(out: &mut W, comparisons: &[Comparison]) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(
        out,
        "{:<20} {:>12} {:>12} {:>9} {:>8}  {}",
        "pattern", "scan (µs)", "index (µs)", "speedup", "matches", "result"
    )?;
    out.reset()?;

    for cmp in comparisons {
        write!(
            out,
            "{:<20} {:>12.1} {:>12.1} {:>8.1}x {:>8}  ",
            format!("{:?}", cmp.pattern),
            cmp.scan_time.as_secs_f64() * 1e6,
            cmp.index_time.as_secs_f64() * 1e6,
            cmp.speedup(),
            cmp.index_matches,
        )?;

        if cmp.equal {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            writeln!(out, "ok")?;
        } else {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            writeln!(out, "DIFF (scan found {})", cmp.scan_matches)?;
        }
        out.reset()?;
    }

    Ok(())
}

/// Write `text` with the first occurrence of `pattern` highlighted
fn write_highlighted<W: WriteColor>(out: &mut W, text: &str, pattern: &str) -> io::Result<()> {
    let found = if pattern.is_empty() {
        None
    } else {
        text.find(pattern)
    };

    let Some(start) = found else {
        return write!(out, "{}", text);
    };
    let end = start + pattern.len();

    write!(out, "{}", &text[..start])?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "{}", &text[start..end])?;
    out.reset()?;
    write!(out, "{}", &text[end..])?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use termcolor::NoColor;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut NoColor<Vec<u8>>) -> io::Result<()>,
    {
        let mut out = NoColor::new(Vec::new());
        f(&mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_color_choice() {
        assert_eq!(color_choice(Some("never"), true), ColorChoice::Never);
        assert_eq!(color_choice(Some("always"), false), ColorChoice::Always);
        assert_eq!(color_choice(Some("auto"), false), ColorChoice::Auto);
        assert_eq!(color_choice(None, false), ColorChoice::Never);
        assert_eq!(color_choice(None, true), ColorChoice::Auto);
    }

    #[test]
    fn test_print_suggestions() {
        let suggestions = vec![
            Suggestion {
                key: "cat".to_string(),
                display: "cat".to_string(),
            },
            Suggestion {
                key: "scatter".to_string(),
                display: "Scatter".to_string(),
            },
        ];

        let text = render(|out| print_suggestions(out, &suggestions, "cat"));
        assert_eq!(text, "cat\nscatter  Scatter\n2 matches\n");
    }

    #[test]
    fn test_print_suggestions_empty() {
        let text = render(|out| print_suggestions(out, &[], "zzz"));
        assert_eq!(text, "0 matches\n");
    }

    #[test]
    fn test_print_definitions() {
        let entries = vec![
            Entry {
                display: "run".to_string(),
                definition: "to move quickly".to_string(),
            },
            Entry {
                display: "Run".to_string(),
                definition: "a period of running".to_string(),
            },
        ];

        let text = render(|out| print_definitions(out, "run", &entries));
        assert_eq!(
            text,
            "run\n  1. to move quickly\n  2. [Run] a period of running\n"
        );
    }

    #[test]
    fn test_print_comparisons_marks_diff() {
        let comparisons = vec![Comparison {
            pattern: "ab".to_string(),
            scan_time: Duration::from_micros(40),
            index_time: Duration::from_micros(4),
            scan_matches: 3,
            index_matches: 2,
            equal: false,
        }];

        let text = render(|out| print_comparisons(out, &comparisons));
        assert!(text.starts_with("pattern"));
        assert!(text.contains("\"ab\""));
        assert!(text.contains("DIFF (scan found 3)"));
    }

    #[test]
    fn test_highlight_multibyte() {
        let text = render(|out| write_highlighted(out, "שלומית", "לו"));
        assert_eq!(text, "שלומית");
    }
}
