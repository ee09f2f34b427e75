use nu_ansi_term::{Color as AnsiColor, Style};
use similar::{ChangeTag, TextDiff};
use std::fmt::Write;
use std::path::Path;

const CONTEXT_LINES: usize = 3;

/// Render a unified line diff between the original and migrated contents
pub fn render_diff(path: &Path, before: &str, after: &str, use_color: bool) -> String {
    let mut output = String::new();
    let diff = TextDiff::from_lines(before, after);

    // Use forward slashes for consistent cross-platform output
    let file_str = if cfg!(windows) {
        path.to_string_lossy().replace('\\', "/")
    } else {
        path.to_string_lossy().to_string()
    };

    if use_color {
        write!(
            output,
            "{}",
            Style::new()
                .fg(AnsiColor::White)
                .bold()
                .paint(format!("--- {}\n+++ {}\n", file_str, file_str))
        )
        .unwrap();
    } else {
        write!(output, "--- {}\n+++ {}\n", file_str, file_str).unwrap();
    }

    for group in diff.grouped_ops(CONTEXT_LINES) {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        let old_start = first.old_range().start;
        let old_len = last.old_range().end - old_start;
        let new_start = first.new_range().start;
        let new_len = last.new_range().end - new_start;

        let header = format!(
            "@@ -{},{} +{},{} @@",
            old_start + 1,
            old_len,
            new_start + 1,
            new_len
        );
        if use_color {
            writeln!(output, "{}", AnsiColor::Blue.paint(header)).unwrap();
        } else {
            writeln!(output, "{}", header).unwrap();
        }

        for op in &group {
            for change in diff.iter_changes(op) {
                let change_text = change.to_string();
                let change_text = change_text.trim_end_matches('\n');

                match (change.tag(), use_color) {
                    (ChangeTag::Delete, true) => {
                        writeln!(output, "{}", AnsiColor::Red.paint(format!("-{}", change_text)))
                            .unwrap();
                    },
                    (ChangeTag::Insert, true) => {
                        writeln!(
                            output,
                            "{}",
                            AnsiColor::Green.paint(format!("+{}", change_text))
                        )
                        .unwrap();
                    },
                    (ChangeTag::Delete, false) => writeln!(output, "-{}", change_text).unwrap(),
                    (ChangeTag::Insert, false) => writeln!(output, "+{}", change_text).unwrap(),
                    (ChangeTag::Equal, _) => writeln!(output, " {}", change_text).unwrap(),
                }
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_shows_rewritten_line() {
        let before = "use crate::store::posts;\nfn main() {}\n";
        let after = "use ruxlog_shared::store::posts;\nfn main() {}\n";

        let output = render_diff(Path::new("src/app.rs"), before, after, false);

        assert!(output.starts_with("--- src/app.rs\n+++ src/app.rs\n"));
        assert!(output.contains("@@ -1,2 +1,2 @@\n"));
        assert!(output.contains("-use crate::store::posts;\n"));
        assert!(output.contains("+use ruxlog_shared::store::posts;\n"));
        assert!(output.contains(" fn main() {}\n"));
    }

    #[test]
    fn test_identical_content_has_no_hunks() {
        let output = render_diff(Path::new("a.rs"), "x\n", "x\n", false);
        assert_eq!(output, "--- a.rs\n+++ a.rs\n");
    }

    #[test]
    fn test_colored_diff_contains_escape_codes() {
        let output = render_diff(Path::new("a.rs"), "use a;\n", "use b;\n", true);
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("use b;"));
    }
}
