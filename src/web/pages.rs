// src/web/pages.rs
//! Server-rendered HTML pages
//!
//! Templates are embedded and rendered with Handlebars, which HTML-escapes
//! every `{{value}}`. Report content comes from a language model and is never
//! inserted unescaped.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use crate::report::{format_date, DisplayTree, LabelSet, Language};
use crate::types::ReportSummary;

const LAYOUT_HEAD: &str = r#"<!doctype html>
<html lang="{{lang}}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{page_title}}</title>
<style>
body { margin: 0; min-height: 100vh; color: #fff; font-family: system-ui, sans-serif;
       background: linear-gradient(to bottom, #000, #312e81, #581c87); }
main { max-width: 64rem; margin: 0 auto; padding: 2.5rem 1.5rem; }
a { color: inherit; }
.button { display: inline-block; padding: .5rem 1rem; border-radius: .75rem; text-decoration: none;
          background: rgba(255,255,255,.1); border: 1px solid rgba(255,255,255,.2); }
.card { padding: 1.5rem; margin-bottom: 1.75rem; border-radius: 1rem;
        background: rgba(255,255,255,.1); border: 1px solid rgba(255,255,255,.2); }
.muted { color: #d1d5db; }
.error { color: #f87171; }
input, select { width: 100%; box-sizing: border-box; padding: .75rem; margin-bottom: 1rem; color: #fff;
                background: rgba(255,255,255,.1); border: 1px solid rgba(255,255,255,.2); border-radius: .5rem; }
button { width: 100%; padding: .75rem; border: 0; border-radius: .75rem; color: #fff;
         background: #9333ea; font-weight: 600; cursor: pointer; }
</style>
</head>
<body>
<main>
"#;

const LAYOUT_FOOT: &str = "</main>\n</body>\n</html>\n";

const REPORT_LIST: &str = r#"{{> head}}
<header style="display:flex;justify-content:space-between;align-items:center">
  <h1>🔮 Astrology Reports</h1>
  <a class="button" href="/astrology/create">➕ Create Report</a>
</header>
{{#if error}}<p class="error">{{error}}</p>{{/if}}
{{#if reports}}
<ul style="list-style:none;padding:0">
{{#each reports}}
  <li class="card">
    {{#if id}}<a href="/astrology/{{id}}" style="text-decoration:none">{{/if}}
    <h2>{{name}} <span class="muted">▶</span></h2>
    <p class="muted">{{date}} • {{tob}}</p>
    {{#if id}}</a>{{/if}}
  </li>
{{/each}}
</ul>
{{else}}
<p class="muted" style="text-align:center">No reports found. Generate one to get started.</p>
{{/if}}
{{> foot}}"#;

const REPORT_DETAIL: &str = r#"{{> head}}
<p><a class="button" href="/">{{tree.back}}</a></p>
<header style="text-align:center">
  <h1>{{tree.title}}</h1>
  <p class="muted">{{tree.subtitle}}</p>
</header>
{{#each tree.sections}}
<section class="card" id="{{key}}">
  <h2>{{heading}}</h2>
  {{#if (eq body.kind "facts")}}
    {{#each body.content}}<p><b>{{label}}:</b> {{value}}</p>{{/each}}
  {{/if}}
  {{#if (eq body.kind "paragraph")}}<p>{{body.content}}</p>{{/if}}
  {{#if (eq body.kind "list")}}
    <ul>{{#each body.content}}<li>{{this}}</li>{{/each}}</ul>
  {{/if}}
</section>
{{/each}}
{{> foot}}"#;

const REPORT_ERROR: &str = r#"{{> head}}
<div style="text-align:center;margin-top:8rem">
  <p class="error">{{message}}</p>
  <a class="button" href="/">{{back_to_reports}}</a>
</div>
{{> foot}}"#;

const CREATE_FORM: &str = r#"{{> head}}
<div class="card" style="max-width:32rem;margin:0 auto">
  <p><a class="button" href="/">← Back</a></p>
  <h1 style="text-align:center">✨ Generate Astrology Report</h1>
  {{#if errors}}
  <ul class="error">{{#each errors}}<li>{{this}}</li>{{/each}}</ul>
  {{/if}}
  <form method="post" action="/astrology/create">
    <input type="text" name="name" placeholder="Full Name" value="{{form.name}}" required>
    <input type="date" name="dob" value="{{form.dob}}" required>
    <input type="time" name="tob" value="{{form.tob}}" required>
    <input type="text" name="pob" placeholder="Place of Birth" value="{{form.pob}}" required>
    <select name="language">
    {{#each languages}}
      <option value="{{code}}"{{#if selected}} selected{{/if}}>{{code}}</option>
    {{/each}}
    </select>
    <button type="submit">🔮 Generate Report</button>
  </form>
</div>
{{> foot}}"#;

/// Raw values typed into the create form, echoed back when it is re-shown.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormValues {
    pub name: String,
    pub dob: String,
    pub tob: String,
    pub pob: String,
    pub language: Option<String>,
}

#[derive(Serialize)]
struct ListItem<'a> {
    id: Option<&'a str>,
    name: &'a str,
    date: String,
    tob: &'a str,
}

pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);

        handlebars
            .register_partial("head", LAYOUT_HEAD)
            .context("Failed to register page head")?;
        handlebars
            .register_partial("foot", LAYOUT_FOOT)
            .context("Failed to register page foot")?;

        for (name, template) in [
            ("report_list", REPORT_LIST),
            ("report_detail", REPORT_DETAIL),
            ("report_error", REPORT_ERROR),
            ("create_form", CREATE_FORM),
        ] {
            handlebars
                .register_template_string(name, template)
                .with_context(|| format!("Failed to register template {}", name))?;
        }

        Ok(Self { handlebars })
    }

    fn render(&self, name: &str, data: &serde_json::Value) -> Result<String> {
        self.handlebars
            .render(name, data)
            .with_context(|| format!("Failed to render {}", name))
    }

    pub fn report_list(&self, reports: &[ReportSummary], error: Option<&str>) -> Result<String> {
        let items: Vec<ListItem> = reports
            .iter()
            .map(|r| ListItem {
                id: r.id.as_deref(),
                name: r.name.as_deref().unwrap_or_default(),
                date: format_date(r.dob.as_deref()),
                tob: r.tob.as_deref().unwrap_or_default(),
            })
            .collect();

        self.render(
            "report_list",
            &json!({
                "lang": "en",
                "page_title": "Astrology Reports",
                "reports": items,
                "error": error,
            }),
        )
    }

    pub fn report_detail(&self, tree: &DisplayTree, language: Language) -> Result<String> {
        self.render(
            "report_detail",
            &json!({
                "lang": html_lang(language),
                "page_title": tree.title,
                "tree": tree,
            }),
        )
    }

    pub fn report_error(&self, message: &str, labels: &LabelSet) -> Result<String> {
        self.render(
            "report_error",
            &json!({
                "lang": "en",
                "page_title": message,
                "message": message,
                "back_to_reports": labels.back_to_reports,
            }),
        )
    }

    pub fn create_form(&self, form: &FormValues, errors: &[String]) -> Result<String> {
        let selected = Language::resolve(form.language.as_deref());
        let languages: Vec<_> = Language::ALL
            .iter()
            .map(|lang| json!({ "code": lang.as_str(), "selected": (*lang == selected) }))
            .collect();

        self.render(
            "create_form",
            &json!({
                "lang": "en",
                "page_title": "Generate Astrology Report",
                "form": form,
                "errors": errors,
                "languages": languages,
            }),
        )
    }
}

fn html_lang(language: Language) -> &'static str {
    match language {
        Language::English => "en",
        Language::Hindi => "hi",
        Language::Gujarati => "gu",
    }
}
