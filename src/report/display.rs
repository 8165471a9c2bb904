// src/report/display.rs
//! Report view model: what a page or terminal shows for one report

use serde::Serialize;

use super::date_format::format_date;
use super::labels::LabelSet;
use super::schema::NormalizedReport;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayTree {
    pub back: String,
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub key: &'static str,
    pub heading: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    /// `label: value` lines
    Facts(Vec<Fact>),
    Paragraph(String),
    /// Enumerated items; holds the single "no data" label when empty
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

impl DisplayTree {
    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }
}

/// Build the display tree for `report`, substituting `labels.no_data` for
/// every field that is absent or empty.
pub fn render(report: &NormalizedReport, labels: &LabelSet) -> DisplayTree {
    let no_data = labels.no_data;
    let details = &report.basic_details;

    let sections = vec![
        Section {
            key: "basic_details",
            heading: labels.basic_details.to_string(),
            body: SectionBody::Facts(vec![
                fact("Name", text_or(details.name.as_deref(), no_data)),
                fact(
                    "DOB",
                    text_or(Some(format_date(details.date_of_birth.as_deref()).as_str()), no_data),
                ),
                fact("TOB", text_or(details.time_of_birth.as_deref(), no_data)),
                fact("POB", text_or(details.place_of_birth.as_deref(), no_data)),
            ]),
        },
        Section {
            key: "personality",
            heading: labels.personality.to_string(),
            body: SectionBody::Paragraph(text_or(report.personality.as_deref(), no_data)),
        },
        Section {
            key: "career",
            heading: labels.career.to_string(),
            body: SectionBody::List(items_or(&report.career.top_5, no_data)),
        },
        Section {
            key: "avoid",
            heading: labels.avoid.to_string(),
            body: SectionBody::Facts(vec![
                fact(labels.colors, joined_or(&report.avoid.colors, no_data)),
                fact(labels.habits, joined_or(&report.avoid.habits, no_data)),
                fact(labels.industries, joined_or(&report.avoid.industries, no_data)),
            ]),
        },
        Section {
            key: "marriage",
            heading: labels.marriage.to_string(),
            body: SectionBody::Paragraph(text_or(report.marriage.as_deref(), no_data)),
        },
        Section {
            key: "remedies",
            heading: labels.remedies.to_string(),
            body: SectionBody::List(items_or(&report.remedies, no_data)),
        },
        Section {
            key: "summary",
            heading: labels.summary.to_string(),
            body: SectionBody::Paragraph(text_or(report.summary.as_deref(), no_data)),
        },
    ];

    DisplayTree {
        back: labels.back.to_string(),
        title: labels.header_title.to_string(),
        subtitle: labels.header_subtitle.to_string(),
        sections,
    }
}

fn fact(label: &str, value: String) -> Fact {
    Fact {
        label: label.to_string(),
        value,
    }
}

fn text_or(value: Option<&str>, no_data: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => no_data.to_string(),
    }
}

fn joined_or(items: &[String], no_data: &str) -> String {
    if items.is_empty() {
        no_data.to_string()
    } else {
        items.join(", ")
    }
}

fn items_or(items: &[String], no_data: &str) -> Vec<String> {
    if items.is_empty() {
        vec![no_data.to_string()]
    } else {
        items.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::labels::resolve_labels;
    use serde_json::json;

    fn english() -> &'static LabelSet {
        resolve_labels(Some("english"))
    }

    fn list_items<'a>(tree: &'a DisplayTree, key: &str) -> &'a [String] {
        match &tree.section(key).unwrap().body {
            SectionBody::List(items) => items,
            other => panic!("expected list for {key}, got {other:?}"),
        }
    }

    fn paragraph<'a>(tree: &'a DisplayTree, key: &str) -> &'a str {
        match &tree.section(key).unwrap().body {
            SectionBody::Paragraph(text) => text,
            other => panic!("expected paragraph for {key}, got {other:?}"),
        }
    }

    fn facts<'a>(tree: &'a DisplayTree, key: &str) -> &'a [Fact] {
        match &tree.section(key).unwrap().body {
            SectionBody::Facts(facts) => facts,
            other => panic!("expected facts for {key}, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_career_does_not_affect_siblings() {
        let report = NormalizedReport::project(json!({
            "basic_details": { "name": "Ravi" },
            "personality": "Curious",
            "marriage": "Late",
            "remedies": ["Yoga"]
        }));
        let tree = render(&report, english());

        assert_eq!(list_items(&tree, "career"), ["No data available"]);
        assert_eq!(paragraph(&tree, "personality"), "Curious");
        assert_eq!(paragraph(&tree, "marriage"), "Late");
        assert_eq!(list_items(&tree, "remedies"), ["Yoga"]);
        assert_eq!(facts(&tree, "basic_details")[0].value, "Ravi");
    }

    #[test]
    fn test_remedies_shapes() {
        let tree = render(&NormalizedReport::project(json!({ "remedies": "chant daily" })), english());
        assert_eq!(list_items(&tree, "remedies"), ["chant daily"]);

        let tree = render(&NormalizedReport::project(json!({ "remedies": [] })), english());
        assert_eq!(list_items(&tree, "remedies"), ["No data available"]);

        let tree = render(
            &NormalizedReport::project(json!({ "remedies": ["a", "", null, "b"] })),
            english(),
        );
        assert_eq!(list_items(&tree, "remedies"), ["a", "b"]);
    }

    #[test]
    fn test_avoid_lists_are_joined() {
        let report = NormalizedReport::project(json!({
            "avoid": { "colors": ["black", "grey"], "industries": [] }
        }));
        let tree = render(&report, english());
        let avoid = facts(&tree, "avoid");

        assert_eq!(avoid[0], Fact { label: "Colors".into(), value: "black, grey".into() });
        assert_eq!(avoid[1].value, "No data available");
        assert_eq!(avoid[2].value, "No data available");
    }

    #[test]
    fn test_dates_are_formatted_and_missing_details_fall_back() {
        let report = NormalizedReport::project(json!({
            "basic_details": { "date_of_birth": "2000-01-15", "place_of_birth": "Pune" }
        }));
        let tree = render(&report, english());
        let details = facts(&tree, "basic_details");

        assert_eq!(details[0].value, "No data available");
        assert_eq!(details[1].value, "15 Jan 2000");
        assert_eq!(details[2].value, "No data available");
        assert_eq!(details[3].value, "Pune");
    }

    #[test]
    fn test_labels_follow_language_but_dates_do_not() {
        let report = NormalizedReport::project(json!({
            "basic_details": { "date_of_birth": "1999-12-31" }
        }));
        let tree = render(&report, resolve_labels(Some("hindi")));

        assert_eq!(tree.section("personality").unwrap().heading, "🧿 व्यक्तित्व");
        assert_eq!(paragraph(&tree, "personality"), "कोई डेटा उपलब्ध नहीं");
        assert_eq!(facts(&tree, "basic_details")[1].value, "31 Dec 1999");
    }

    #[test]
    fn test_empty_report_renders_every_section() {
        let tree = render(&NormalizedReport::default(), english());
        let keys: Vec<_> = tree.sections.iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            ["basic_details", "personality", "career", "avoid", "marriage", "remedies", "summary"]
        );
        assert_eq!(tree.title, "🔮 AI Astrovaani Report");
    }
}
