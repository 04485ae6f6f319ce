// Markdown rendering for yapi-mcp
// Pure functions turning YAPI records into text an LLM can read

use chrono::DateTime;
use serde_json::Value;

use crate::models::{
    Category, InterfaceDetail, InterfaceSummary, MenuCategory, NamedValue, PaginatedList, Project, ProjectTag,
    ReqBodyType, ResBodyType,
};

pub const NO_CATEGORIES: &str = "No categories found.";
pub const NO_INTERFACES: &str = "No interfaces found.";

/// Placed between sections of a composite response
pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";

const SUMMARY_TABLE_HEADER: [&str; 2] = [
    "| ID | Method | Path | Title | Status |",
    "|----|--------|------|-------|--------|",
];

/// Escape text for a Markdown table cell.
/// Pipes are backslash-escaped, `\n` becomes a space and `\r` is dropped,
/// so no value can split a cell or a row. Empty text renders as `-`.
pub fn escape_cell(text: &str) -> String {
    if text.is_empty() {
        return "-".to_string();
    }
    text.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}

/// Re-indent a JSON document. Anything that does not parse comes back unchanged.
pub fn pretty_json(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

pub fn required_label(required: bool) -> &'static str {
    if required {
        "Yes"
    } else {
        "No"
    }
}

/// `ceil(total / limit)`, or 0 when `limit` is 0
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        0
    } else {
        total.div_ceil(limit)
    }
}

/// Next-page hint, present only while more pages remain
pub fn pagination_hint(page: u64, limit: u64, total: u64) -> Option<String> {
    if page < total_pages(total, limit) {
        Some(format!("Use page={} to see the next page.", page + 1))
    } else {
        None
    }
}

fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.trim().is_empty() {
        placeholder
    } else {
        text
    }
}

fn format_timestamp(secs: i64) -> Option<String> {
    if secs <= 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0).map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// Fence long enough that backticks inside `body` cannot close it early
fn push_fenced(lines: &mut Vec<String>, lang: &str, body: &str) {
    let mut longest = 0;
    let mut run = 0;
    for ch in body.chars() {
        if ch == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    let fence = "`".repeat(longest.max(2) + 1);
    lines.push(format!("{}{}", fence, lang));
    lines.push(body.to_string());
    lines.push(fence);
}

fn summary_row(item: &InterfaceSummary) -> String {
    format!(
        "| {} | {} | {} | {} | {} |",
        item.id,
        escape_cell(&item.method.to_string()),
        escape_cell(&item.path),
        escape_cell(&item.title),
        item.status
    )
}

fn tag_names(tags: &[ProjectTag]) -> String {
    tags.iter()
        .map(|t| t.name.trim())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn names(values: &[NamedValue]) -> String {
    values
        .iter()
        .filter(|v| !v.name.is_empty())
        .map(|v| format!("`{}`", v.name))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_project(data: &Project) -> String {
    let mut lines = vec![
        format!("# Project: {}", escape_cell(&data.name)),
        String::new(),
        format!("- **ID**: {}", data.id),
        format!("- **Base Path**: {}", or_placeholder(&data.basepath, "/")),
        format!("- **Description**: {}", or_placeholder(&data.desc, "N/A")),
        format!("- **Tags**: {}", or_placeholder(&tag_names(&data.tag), "N/A")),
    ];
    if let Some(updated) = format_timestamp(data.up_time) {
        lines.push(format!("- **Last Updated**: {}", updated));
    }

    if !data.env.is_empty() {
        lines.push(String::new());
        lines.push("## Environments".to_string());
        for env in &data.env {
            lines.push(format!("- **{}**: {}", escape_cell(&env.name), or_placeholder(&env.domain, "-")));
            let headers = names(&env.header);
            if !headers.is_empty() {
                lines.push(format!("  - Headers: {}", headers));
            }
            let globals = names(&env.global);
            if !globals.is_empty() {
                lines.push(format!("  - Globals: {}", globals));
            }
        }
    }

    lines.join("\n")
}

pub fn format_categories(data: &[Category]) -> String {
    if data.is_empty() {
        return NO_CATEGORIES.to_string();
    }

    let mut lines = vec![
        "# Interface Categories".to_string(),
        String::new(),
        "| ID | Name | Description |".to_string(),
        "|----|------|-------------|".to_string(),
    ];
    for cat in data {
        lines.push(format!("| {} | {} | {} |", cat.id, escape_cell(&cat.name), escape_cell(&cat.desc)));
    }
    lines.join("\n")
}

/// One page of interfaces with a heading, table and next-page hint
pub fn format_interface_list(data: &PaginatedList<InterfaceSummary>, page: u64, limit: u64) -> String {
    let mut lines = vec![
        format!(
            "# Interfaces (Page {}/{}, Total: {})",
            page,
            total_pages(data.total, limit),
            data.total
        ),
        String::new(),
    ];

    if data.list.is_empty() {
        lines.push(NO_INTERFACES.to_string());
    } else {
        lines.extend(SUMMARY_TABLE_HEADER.iter().map(|s| s.to_string()));
        lines.extend(data.list.iter().map(summary_row));
    }

    if let Some(hint) = pagination_hint(page, limit, data.total) {
        lines.push(String::new());
        lines.push(hint);
    }

    lines.join("\n")
}

/// Full interface record.
///
/// Section order: header block, description/tags, path params, headers,
/// query params, request body, response body, documentation.
pub fn format_interface_detail(data: &InterfaceDetail) -> String {
    let summary = &data.summary;
    let mut lines = vec![
        format!("## {} {}", summary.method, summary.path),
        String::new(),
        format!("- **Title**: {}", escape_cell(&summary.title)),
        format!("- **Status**: {}", summary.status),
        format!("- **Interface ID**: {}", summary.id),
        format!("- **Category ID**: {}", summary.catid),
    ];

    if !data.desc.trim().is_empty() {
        lines.push(format!("- **Description**: {}", escape_cell(&data.desc)));
    }
    if !data.tag.is_empty() {
        lines.push(format!("- **Tags**: {}", data.tag.join(", ")));
    }

    if !data.req_params.is_empty() {
        lines.push(String::new());
        lines.push("### Path Parameters".to_string());
        lines.push("| Name | Example | Description |".to_string());
        lines.push("|------|---------|-------------|".to_string());
        for p in &data.req_params {
            lines.push(format!(
                "| {} | {} | {} |",
                escape_cell(&p.name),
                escape_cell(&p.example),
                escape_cell(&p.desc)
            ));
        }
    }

    if !data.req_headers.is_empty() {
        lines.push(String::new());
        lines.push("### Request Headers".to_string());
        lines.push("| Name | Required | Value | Description |".to_string());
        lines.push("|------|----------|-------|-------------|".to_string());
        for h in &data.req_headers {
            lines.push(format!(
                "| {} | {} | {} | {} |",
                escape_cell(&h.name),
                required_label(h.required),
                escape_cell(&h.value),
                escape_cell(&h.desc)
            ));
        }
    }

    if !data.req_query.is_empty() {
        lines.push(String::new());
        lines.push("### Query Parameters".to_string());
        lines.push("| Name | Required | Example | Description |".to_string());
        lines.push("|------|----------|---------|-------------|".to_string());
        for q in &data.req_query {
            lines.push(format!(
                "| {} | {} | {} | {} |",
                escape_cell(&q.name),
                required_label(q.required),
                escape_cell(&q.example),
                escape_cell(&q.desc)
            ));
        }
    }

    if let Some(kind) = data.req_body_type {
        lines.push(String::new());
        lines.push(format!("### Request Body ({})", kind));
        if kind == ReqBodyType::Form && !data.req_body_form.is_empty() {
            lines.push("| Name | Type | Required | Example | Description |".to_string());
            lines.push("|------|------|----------|---------|-------------|".to_string());
            for f in &data.req_body_form {
                lines.push(format!(
                    "| {} | {} | {} | {} | {} |",
                    escape_cell(&f.name),
                    escape_cell(&f.kind),
                    required_label(f.required),
                    escape_cell(&f.example),
                    escape_cell(&f.desc)
                ));
            }
        } else if !data.req_body_other.trim().is_empty() {
            if kind == ReqBodyType::Json {
                push_fenced(&mut lines, "json", &pretty_json(&data.req_body_other));
            } else {
                push_fenced(&mut lines, "text", &data.req_body_other);
            }
        }
    }

    if !data.res_body.trim().is_empty() {
        let kind = data.res_body_type.unwrap_or(ResBodyType::Json);
        lines.push(String::new());
        lines.push(format!("### Response Body ({})", kind));
        match kind {
            ResBodyType::Json => push_fenced(&mut lines, "json", &pretty_json(&data.res_body)),
            ResBodyType::Raw => push_fenced(&mut lines, "text", &data.res_body),
        }
    }

    if !data.markdown.trim().is_empty() {
        lines.push(String::new());
        lines.push("### Documentation".to_string());
        lines.push(data.markdown.clone());
    }

    lines.join("\n")
}

/// Category tree: one heading per category, then its interfaces
pub fn format_full_menu(data: &[MenuCategory]) -> String {
    if data.is_empty() {
        return NO_CATEGORIES.to_string();
    }

    let mut lines = vec!["# Full Interface Menu".to_string(), String::new()];

    for menu in data {
        let cat = &menu.category;
        lines.push(format!("## {} ({} interfaces)", escape_cell(&cat.name), menu.list.len()));
        if !cat.desc.trim().is_empty() {
            lines.push(format!("> {}", escape_cell(&cat.desc)));
        }
        lines.push(String::new());

        if !menu.list.is_empty() {
            lines.extend(SUMMARY_TABLE_HEADER.iter().map(|s| s.to_string()));
            lines.extend(menu.list.iter().map(summary_row));
            lines.push(String::new());
        }
    }

    lines.join("\n").trim_end().to_string()
}
