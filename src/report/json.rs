use super::Report;

pub fn render(report: &Report) -> String {
    let hits: Vec<serde_json::Value> = report.hits.iter().map(|h| {
        let mut obj = serde_json::json!({
            "namespace": h.namespace.key(),
            "title": h.namespace.title(),
            "text": h.text,
        });
        if let Some(entry) = h.entry {
            obj["name"] = serde_json::Value::String(entry.name.to_string());
            if let Some(summary) = entry.summary {
                obj["summary"] = serde_json::Value::String(summary.to_string());
            }
        }
        obj
    }).collect();

    let obj = serde_json::json!({
        "code": report.code,
        "unsigned": report.numeric.unsigned,
        "signed": report.numeric.signed,
        "hex": report.numeric.hex,
        "hits": hits,
    });

    serde_json::to_string(&obj).unwrap_or_else(|_| r#"{"error":"internal error serializing report"}"#.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::Namespace;
    use crate::table::CodeEntry;

    fn parse_json(s: &str) -> serde_json::Value {
        serde_json::from_str(s).expect("valid JSON")
    }

    #[test]
    fn render_numeric_fields() {
        let v = parse_json(&render(&Report::new(3_221_225_786)));
        assert_eq!(v["code"], 3_221_225_786u32);
        assert_eq!(v["unsigned"], 3_221_225_786u32);
        assert_eq!(v["signed"], -1_073_741_510);
        assert_eq!(v["hex"], "0xC000013A");
        assert!(v["hits"].as_array().unwrap().is_empty());
    }

    #[test]
    fn render_table_hit_has_name_and_summary() {
        static ROW: CodeEntry = CodeEntry::described(0x0024_0005, "WU_S_REBOOT_REQUIRED", "restart needed");
        let mut r = Report::new(ROW.code);
        r.push_entry(Namespace::UpdateSubsystem, &ROW);
        let v = parse_json(&render(&r));
        let hit = &v["hits"][0];
        assert_eq!(hit["namespace"], "update-subsystem");
        assert_eq!(hit["title"], "Windows Update");
        assert_eq!(hit["name"], "WU_S_REBOOT_REQUIRED");
        assert_eq!(hit["summary"], "restart needed");
        assert_eq!(hit["text"], "WU_S_REBOOT_REQUIRED\n(restart needed)");
    }

    #[test]
    fn render_host_hit_has_no_name() {
        let mut r = Report::new(5);
        r.push(Namespace::GeneralSystem, "Access is denied.");
        let v = parse_json(&render(&r));
        let hit = &v["hits"][0];
        assert_eq!(hit["text"], "Access is denied.");
        assert!(hit.get("name").is_none());
        assert!(hit.get("summary").is_none());
    }

    #[test]
    fn render_preserves_hit_order() {
        let mut r = Report::new(1);
        r.push(Namespace::GeneralSystem, "Incorrect function.");
        r.push(Namespace::DirectoryProtocol, "LDAP_OPERATIONS_ERROR");
        r.push(Namespace::KernelPanic, "APC_INDEX_MISMATCH");
        let v = parse_json(&render(&r));
        let order: Vec<_> = v["hits"].as_array().unwrap().iter()
            .map(|h| h["namespace"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(order, ["general-system", "directory-protocol", "kernel-panic"]);
    }
}
