//! Standalone printable records page.

use crate::i18n::{
    Language, StringId, get_string, localize_equipment, localize_record_lift,
    localize_record_type, localize_sex_plural,
};
use crate::meet::{MeetState, display_weight};
use crate::records::{
    LiftingRecord, RecordCategoryGrouping, RecordsState, group_and_sort_records_into_categories,
};

const PAGE_CSS: &str = "\
body { font-family: sans-serif; margin: 0; }
.recordsPage { margin: 0 auto; max-width: 1000px; padding: 16px; }
.recordsPageTitle { font-size: 28px; font-weight: bold; text-align: center; }
.recordCategory { margin-bottom: 24px; page-break-inside: avoid; }
.categoryHeading { font-size: 18px; font-weight: bold; margin: 8px 0; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #999; padding: 4px 8px; text-align: left; }
th { background: #eee; }
.tinyColumn { width: 8%; }
.smallColumn { width: 12%; }
.mediumColumn { width: 16%; }
.largeColumn { width: 28%; }
";

/// Render every confirmed record as one HTML document, one table per
/// category in display order.
pub fn generate_records_page_html(
    state: &RecordsState,
    meet: &MeetState,
    language: Language,
) -> String {
    let title = escape_html(get_string(StringId::PageTitle, language));
    let groupings = group_and_sort_records_into_categories(state.records(), meet);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n", language.code()));
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(&format!("<style>\n{PAGE_CSS}</style>\n"));
    html.push_str("</head>\n<body>\n<div class=\"recordsPage\">\n");
    html.push_str(&format!("<p class=\"recordsPageTitle\">{title}</p>\n"));

    for grouping in &groupings {
        render_category(&mut html, grouping, language);
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_category(html: &mut String, grouping: &RecordCategoryGrouping, language: Language) {
    let category = &grouping.category;
    let heading = format!(
        "{} {} - {} {}",
        localize_sex_plural(category.sex, language),
        localize_equipment(category.equipment, language),
        category.division,
        category.weight_class
    );

    let s = |id| escape_html(get_string(id, language));

    html.push_str("<div class=\"recordCategory\">\n");
    html.push_str(&format!(
        "<p class=\"categoryHeading\">{}</p>\n",
        escape_html(&heading)
    ));
    html.push_str("<table>\n<thead>\n<tr>");
    html.push_str(&format!(
        "<th class=\"mediumColumn\">{}</th>\
         <th class=\"tinyColumn\">{}</th>\
         <th class=\"tinyColumn\">{}</th>\
         <th class=\"largeColumn\">{}</th>\
         <th class=\"smallColumn\">{}</th>\
         <th class=\"largeColumn\">{}</th>",
        s(StringId::PageColumnRecordType),
        s(StringId::PageColumnWeight),
        s(StringId::PageColumnRecordLift),
        s(StringId::PageColumnName),
        s(StringId::PageColumnDate),
        s(StringId::PageColumnLocation),
    ));
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for record in &grouping.records {
        render_record(html, record, language);
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
}

fn render_record(html: &mut String, record: &LiftingRecord, language: Language) {
    let cells = [
        localize_record_type(record.record_type, language).to_string(),
        display_weight(record.weight),
        localize_record_lift(record.record_lift, language).to_string(),
        record.full_name.clone(),
        record.date.clone(),
        record.location.clone(),
    ];
    html.push_str("<tr>");
    for cell in &cells {
        html.push_str(&format!("<td>{}</td>", escape_html(cell)));
    }
    html.push_str("</tr>\n");
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meet::{Equipment, Sex};
    use crate::records::{RecordLift, RecordType};

    fn record(name: &str, weight_class: &str, lift: RecordLift, weight: f64) -> LiftingRecord {
        LiftingRecord {
            full_name: name.to_string(),
            weight,
            date: "2024-03-02".to_string(),
            location: "Hamilton".to_string(),
            division: "Open".to_string(),
            sex: Sex::F,
            weight_class: weight_class.to_string(),
            equipment: Equipment::Sleeves,
            record_lift: lift,
            record_type: RecordType::FullPower,
        }
    }

    fn meet() -> MeetState {
        MeetState {
            divisions: vec!["Open".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_page_structure() {
        let state = RecordsState::from_records(vec![
            record("A", "84+", RecordLift::S, 180.0),
            record("B", "63", RecordLift::Total, 402.5),
            record("B", "63", RecordLift::S, 140.0),
        ]);
        let html = generate_records_page_html(&state, &meet(), Language::En);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Powerlifting Records</title>"));
        assert_eq!(html.matches("class=\"recordCategory\"").count(), 2);

        let light = html.find("Women Sleeves - Open 63").unwrap();
        let heavy = html.find("Women Sleeves - Open 84+").unwrap();
        assert!(light < heavy);

        let squat = html.find("<td>140</td>").unwrap();
        let total = html.find("<td>402.5</td>").unwrap();
        assert!(squat < total);
    }

    #[test]
    fn test_weight_is_rounded_for_display() {
        let state = RecordsState::from_records(vec![record("A", "63", RecordLift::D, 226.796)]);
        let html = generate_records_page_html(&state, &meet(), Language::En);
        assert!(html.contains("<td>226.8</td>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let state = RecordsState::from_records(vec![record(
            "<script>alert('x')</script>",
            "63",
            RecordLift::S,
            100.0,
        )]);
        let html = generate_records_page_html(&state, &meet(), Language::En);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn test_localized_page() {
        let state = RecordsState::from_records(vec![record("A", "63", RecordLift::B, 100.0)]);
        let html = generate_records_page_html(&state, &meet(), Language::Es);
        assert!(html.contains("<html lang=\"es\">"));
        assert!(html.contains("Mujeres Rodilleras - Open 63"));
        assert!(html.contains("<td>Press de banca</td>"));
    }

    #[test]
    fn test_empty_state() {
        let html = generate_records_page_html(&RecordsState::new(), &meet(), Language::En);
        assert!(html.contains("recordsPageTitle"));
        assert!(!html.contains("<table>"));
    }
}
