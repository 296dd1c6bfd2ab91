//! Report document rendering.
//!
//! This module assembles the filtered subset and its groupings into a
//! self-contained printable HTML document: institution header, summary
//! counts, one table per grouping, and detail tables.

use crate::config::InstitutionConfig;
use crate::error::{ReportError, ReportResult};
use crate::models::{CategoryGroup, FilterCriteria, OwnerGroup, OwnerSelector, ProductionRecord};

/// A fully rendered, self-contained report document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReportDocument {
    /// The document title, including the period label.
    pub title: String,
    /// The complete HTML markup.
    pub html: String,
}

/// Renders the report document for a filtered subset and its groupings.
///
/// The document contains the institution identity header, a summary block
/// (total count, period label, owner scope), a table per grouping, and
/// detail tables: one per owner for the all-owners selector, or a single
/// detail table when a specific owner was selected. Dates appear
/// calendar-date-only, regardless of the source timestamp precision.
///
/// # Errors
///
/// Returns [`ReportError::NoMatchingRecords`] when the subset is empty;
/// an empty document is never emitted.
pub fn render_report(
    subset: &[ProductionRecord],
    category_groups: &[CategoryGroup],
    owner_groups: &[OwnerGroup],
    criteria: &FilterCriteria,
    institution: &InstitutionConfig,
) -> ReportResult<ReportDocument> {
    if subset.is_empty() {
        return Err(ReportError::NoMatchingRecords {
            criteria: criteria.describe(),
        });
    }

    let period_label = criteria.period.label();
    let title = format!("{} — {}", institution.document_title, period_label);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&title)));
    html.push_str("<style>\n");
    html.push_str("body { font-family: serif; margin: 2em; }\n");
    html.push_str("h1, h2, p.identity { text-align: center; margin: 0.2em; }\n");
    html.push_str("table { border-collapse: collapse; width: 100%; margin: 1em 0; }\n");
    html.push_str("th, td { border: 1px solid #333; padding: 4px 8px; text-align: left; }\n");
    html.push_str("</style>\n</head>\n<body>\n");

    // Institution identity header
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&institution.name)));
    html.push_str(&format!(
        "<p class=\"identity\">{}</p>\n",
        escape_html(&institution.address)
    ));
    html.push_str(&format!(
        "<p class=\"identity\">{}</p>\n",
        escape_html(&institution.office)
    ));
    html.push_str(&format!(
        "<h2>{} — {}</h2>\n",
        escape_html(&institution.document_title),
        escape_html(&period_label)
    ));

    // Summary block
    let scope = match &criteria.owner {
        OwnerSelector::All => "All Employees".to_string(),
        OwnerSelector::Id(_) => owner_groups
            .first()
            .map(|g| g.owner_name.clone())
            .unwrap_or_else(|| criteria.owner.to_string()),
    };
    html.push_str("<section class=\"summary\">\n");
    html.push_str(&format!(
        "<p>Total accomplished records: <strong>{}</strong></p>\n",
        subset.len()
    ));
    html.push_str(&format!("<p>Period: {}</p>\n", escape_html(&period_label)));
    html.push_str(&format!("<p>Scope: {}</p>\n", escape_html(&scope)));
    html.push_str("</section>\n");

    // Grouping tables
    html.push_str("<h3>By Category</h3>\n<table>\n");
    html.push_str("<tr><th>Category</th><th>Count</th></tr>\n");
    for group in category_groups {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(&group.label),
            group.count
        ));
    }
    html.push_str("</table>\n");

    html.push_str("<h3>By Employee</h3>\n<table>\n");
    html.push_str("<tr><th>Employee</th><th>Count</th></tr>\n");
    for group in owner_groups {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(&group.owner_name),
            group.count
        ));
    }
    html.push_str("</table>\n");

    // Detail tables: one per owner for "all", a single table otherwise
    for group in owner_groups {
        html.push_str(&format!(
            "<h3>Details — {}</h3>\n",
            escape_html(&group.owner_name)
        ));
        html.push_str(&detail_table(&group.members));
    }

    html.push_str("</body>\n</html>\n");

    Ok(ReportDocument { title, html })
}

/// Renders one detail table for a member list.
fn detail_table(members: &[ProductionRecord]) -> String {
    let mut table = String::new();
    table.push_str("<table>\n");
    table.push_str("<tr><th>Record</th><th>Category</th><th>Started</th><th>Completed</th></tr>\n");
    for record in members {
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&record.id),
            escape_html(&record.category),
            record.started_at.date().format("%B %d, %Y"),
            record.completion_date().format("%B %d, %Y"),
        ));
    }
    table.push_str("</table>\n");
    table
}

/// Escapes text for embedding in HTML element content.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Owner, OwnerSelector, Period};
    use crate::report::{group_by_category, group_by_owner};
    use chrono::NaiveDateTime;

    fn make_record(id: &str, owner_id: &str, owner_name: &str, category: &str) -> ProductionRecord {
        ProductionRecord {
            id: id.to_string(),
            owner: Owner::new(owner_id, owner_name),
            category: category.to_string(),
            started_at: NaiveDateTime::parse_from_str(
                "2024-03-01 08:15:00",
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            completed_at: NaiveDateTime::parse_from_str(
                "2024-03-05 16:45:00",
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
        }
    }

    fn render_for(records: &[ProductionRecord], criteria: &FilterCriteria) -> ReportDocument {
        render_report(
            records,
            &group_by_category(records),
            &group_by_owner(records),
            criteria,
            &InstitutionConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_subset_is_refused() {
        let criteria = FilterCriteria::new(OwnerSelector::All, Period::year(2024));
        let result = render_report(
            &[],
            &[],
            &[],
            &criteria,
            &InstitutionConfig::default(),
        );
        assert!(matches!(
            result,
            Err(ReportError::NoMatchingRecords { .. })
        ));
    }

    #[test]
    fn test_document_contains_institution_header() {
        let records = vec![make_record("rec_001", "E1", "Maria Santos", "Sewing")];
        let criteria =
            FilterCriteria::new(OwnerSelector::All, Period::month(2024, 3).unwrap());

        let document = render_for(&records, &criteria);
        assert!(document.html.contains("Marinduque State University"));
        assert!(document.html.contains("Business Affairs Office"));
        assert!(document.html.contains("Accomplishment Report"));
    }

    #[test]
    fn test_document_contains_period_label_and_counts() {
        let records = vec![
            make_record("rec_001", "E1", "Maria Santos", "Sewing"),
            make_record("rec_002", "E1", "Maria Santos", "Cutting"),
        ];
        let criteria =
            FilterCriteria::new(OwnerSelector::All, Period::month(2024, 3).unwrap());

        let document = render_for(&records, &criteria);
        assert!(document.html.contains("March 2024"));
        assert!(document
            .html
            .contains("Total accomplished records: <strong>2</strong>"));
        assert!(document.title.contains("March 2024"));
    }

    #[test]
    fn test_dates_are_calendar_only() {
        let records = vec![make_record("rec_001", "E1", "Maria Santos", "Sewing")];
        let criteria =
            FilterCriteria::new(OwnerSelector::All, Period::month(2024, 3).unwrap());

        let document = render_for(&records, &criteria);
        assert!(document.html.contains("March 05, 2024"));
        assert!(!document.html.contains("16:45"));
        assert!(!document.html.contains("08:15"));
    }

    #[test]
    fn test_one_detail_table_per_owner_for_all_selector() {
        let records = vec![
            make_record("rec_001", "E1", "Maria Santos", "Sewing"),
            make_record("rec_002", "E2", "Jose Reyes", "Cutting"),
        ];
        let criteria = FilterCriteria::new(OwnerSelector::All, Period::year(2024));

        let document = render_for(&records, &criteria);
        assert!(document.html.contains("Details — Maria Santos"));
        assert!(document.html.contains("Details — Jose Reyes"));
        assert!(document.html.contains("Scope: All Employees"));
    }

    #[test]
    fn test_single_detail_table_for_specific_owner() {
        let records = vec![
            make_record("rec_001", "E1", "Maria Santos", "Sewing"),
            make_record("rec_002", "E1", "Maria Santos", "Cutting"),
        ];
        let criteria = FilterCriteria::new(
            OwnerSelector::Id("E1".to_string()),
            Period::year(2024),
        );

        let document = render_for(&records, &criteria);
        assert_eq!(document.html.matches("Details —").count(), 1);
        assert!(document.html.contains("Scope: Maria Santos"));
    }

    #[test]
    fn test_html_escaping_of_record_fields() {
        let records = vec![make_record(
            "rec_001",
            "E1",
            "Maria <Santos> & Co",
            "Sewing",
        )];
        let criteria = FilterCriteria::new(OwnerSelector::All, Period::year(2024));

        let document = render_for(&records, &criteria);
        assert!(document.html.contains("Maria &lt;Santos&gt; &amp; Co"));
        assert!(!document.html.contains("Maria <Santos>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
