use crate::index::SuffixIndex;
use std::io::{self, Write};
use std::path::Path;

/// Display index statistics on stdout
pub fn show_stats(index: &SuffixIndex, source: &Path, lexicon_keys: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_stats(&mut out, index, source, lexicon_keys)
}

pub fn write_stats<W: Write>(
    out: &mut W,
    index: &SuffixIndex,
    source: &Path,
    lexicon_keys: usize,
) -> io::Result<()> {
    let stats = index.stats();

    writeln!(out, "Index Statistics")?;
    writeln!(out, "================")?;
    writeln!(out)?;
    writeln!(out, "Source:           {}", source.display())?;
    writeln!(out, "Input strings:    {}", stats.input_count)?;
    writeln!(out, "Distinct words:   {}", stats.word_count)?;
    writeln!(out, "Duplicates:       {}", stats.duplicate_count)?;
    writeln!(out, "Empty words:      {}", stats.empty_count)?;
    writeln!(out, "Defined keys:     {}", lexicon_keys)?;

    writeln!(out)?;
    let counts = [
        ("Trie nodes:", stats.node_count),
        ("Suffixes:", stats.suffix_count),
        ("Symbols inserted:", stats.symbol_count),
    ];
    for (label, count) in counts {
        writeln!(out, "{:<18}{}", label, format_count(count))?;
    }
    writeln!(out, "Max depth:        {}", stats.max_depth)?;
    writeln!(out, "Sharing ratio:    {:.2}", stats.sharing_ratio())?;

    Ok(())
}

/// Format a count with thousands separators
fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_write_stats() {
        let index = SuffixIndex::new(["cat", "cats", "cat"]);
        let mut buf = Vec::new();
        write_stats(&mut buf, &index, Path::new("words.json"), 2).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Source:           words.json"));
        assert!(text.contains("Distinct words:   2"));
        assert!(text.contains("Duplicates:       1"));
        assert!(text.contains("Defined keys:     2"));
    }
}
