use super::Report;

pub struct AnsiRenderer {
    pub use_color: bool,
}

impl AnsiRenderer {
    fn bold(&self, s: &str) -> String {
        if self.use_color { format!("\x1b[1m{s}\x1b[0m") } else { s.to_string() }
    }

    fn cyan(&self, s: &str) -> String {
        if self.use_color { format!("\x1b[36m{s}\x1b[0m") } else { s.to_string() }
    }

    fn dim(&self, s: &str) -> String {
        if self.use_color { format!("\x1b[2m{s}\x1b[0m") } else { s.to_string() }
    }

    /// Numeric block first, then one block per hit, separated by blank lines.
    pub fn render(&self, report: &Report) -> String {
        let n = &report.numeric;
        let mut blocks = Vec::with_capacity(report.hits.len() + 1);

        // "DWORD\t3221225786" / "int\t-1073741510" / "Hex\t0xC000013A"
        blocks.push(format!(
            "{}\t{}\n{}\t{}\n{}\t{}",
            self.dim("DWORD"),
            self.bold(&n.unsigned.to_string()),
            self.dim("int"),
            self.bold(&n.signed.to_string()),
            self.dim("Hex"),
            self.bold(&n.hex),
        ));

        for hit in &report.hits {
            blocks.push(format!("{}: {}", self.cyan(hit.namespace.key()), hit.text));
        }

        let mut out = blocks.join("\n\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::Namespace;

    fn sample() -> Report {
        let mut r = Report::new(0x0024_0005);
        r.push(Namespace::GeneralSystem, "Some host text.");
        r.push(Namespace::UpdateSubsystem, "WU_S_REBOOT_REQUIRED\n(The system must be restarted)");
        r
    }

    #[test]
    fn render_numeric_block_first() {
        let r = AnsiRenderer { use_color: false };
        let out = r.render(&Report::new(3_221_225_786));
        assert_eq!(out, "DWORD\t3221225786\nint\t-1073741510\nHex\t0xC000013A\n");
    }

    #[test]
    fn render_hits_separated_by_blank_lines() {
        let r = AnsiRenderer { use_color: false };
        let out = r.render(&sample());
        let blocks: Vec<&str> = out.trim_end().split("\n\n").collect();
        assert_eq!(blocks.len(), 3, "unexpected layout:\n{out}");
        assert!(blocks[0].starts_with("DWORD\t2359301"));
        assert_eq!(blocks[1], "general-system: Some host text.");
        assert!(blocks[2].starts_with("update-subsystem: WU_S_REBOOT_REQUIRED\n("));
    }

    #[test]
    fn render_with_color_contains_ansi_codes() {
        let r = AnsiRenderer { use_color: true };
        let out = r.render(&sample());
        assert!(out.contains("\x1b["), "expected ANSI codes when use_color=true");
        assert!(out.contains("WU_S_REBOOT_REQUIRED"));
    }

    #[test]
    fn render_without_color_no_ansi_codes() {
        let r = AnsiRenderer { use_color: false };
        let out = r.render(&sample());
        assert!(!out.contains("\x1b["), "unexpected ANSI codes when use_color=false");
    }

    #[test]
    fn render_ends_with_single_newline() {
        let r = AnsiRenderer { use_color: false };
        let out = r.render(&sample());
        assert!(out.ends_with(")\n"));
        assert!(!out.ends_with("\n\n"));
    }
}
