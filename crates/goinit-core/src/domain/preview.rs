//! Preview payload types.
//!
//! A [`Template`] is one generated file as returned by the preview
//! endpoint; this core treats its content as opaque text beyond counting
//! and filtering.

use serde::{Deserialize, Serialize};

/// One generated file: path plus textual content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub path: String,
    pub content: String,
}

impl Template {
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Whether this file counts as project configuration in the summary
    /// (yaml, go.mod, Makefile).
    pub fn is_config(&self) -> bool {
        self.path.ends_with(".yaml")
            || self.path.ends_with(".yml")
            || self.path == "go.mod"
            || self.path == "Makefile"
    }
}

/// Successful preview response: the ordered template list and its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResult {
    pub templates: Vec<Template>,
    pub count: usize,
}

impl PreviewResult {
    pub fn from_templates(templates: Vec<Template>) -> Self {
        let count = templates.len();
        Self { templates, count }
    }

    /// Templates whose path contains `needle` (case-insensitive).
    pub fn filter(&self, needle: &str) -> Vec<&Template> {
        let needle = needle.to_lowercase();
        self.templates
            .iter()
            .filter(|t| t.path.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn find(&self, path: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.path == path)
    }

    pub fn stats(&self) -> PreviewStats {
        PreviewStats {
            total_files: self.templates.len(),
            go_files: self
                .templates
                .iter()
                .filter(|t| t.path.ends_with(".go"))
                .count(),
            config_files: self.templates.iter().filter(|t| t.is_config()).count(),
            total_lines: self.templates.iter().map(Template::line_count).sum(),
        }
    }
}

/// Summary numbers for a preview, as shown under the file list.
///
/// Also the shape of `GET /api/templates/stats`, which echoes the queried
/// type and framework alongside these counts; the echo fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewStats {
    pub total_files: usize,
    pub go_files: usize,
    pub config_files: usize,
    pub total_lines: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PreviewResult {
        PreviewResult::from_templates(vec![
            Template {
                path: "cmd/app/main.go".into(),
                content: "package main\n\nfunc main() {}\n".into(),
            },
            Template {
                path: "go.mod".into(),
                content: "module example\n".into(),
            },
            Template {
                path: "Makefile".into(),
                content: "build:\n\tgo build ./...\n".into(),
            },
            Template {
                path: "README.md".into(),
                content: "# app\n".into(),
            },
        ])
    }

    #[test]
    fn count_matches_template_length() {
        let preview = sample();
        assert_eq!(preview.count, preview.templates.len());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let preview = sample();
        let hits = preview.filter("MAIN");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "cmd/app/main.go");
    }

    #[test]
    fn stats_classify_go_and_config_files() {
        let stats = sample().stats();
        assert_eq!(stats.total_files, 4);
        assert_eq!(stats.go_files, 1);
        assert_eq!(stats.config_files, 2); // go.mod + Makefile
        assert_eq!(stats.total_lines, 3 + 1 + 2 + 1);
    }

    #[test]
    fn preview_result_deserializes_service_shape() {
        let preview: PreviewResult = serde_json::from_str(
            r#"{"templates": [{"path": "go.mod", "content": "module x"}], "count": 1}"#,
        )
        .unwrap();
        assert_eq!(preview.count, 1);
        assert_eq!(preview.templates[0].path, "go.mod");
    }
}
