//! Plain-text and JSON rendering for command-line output.

use gigboard::state::{ListingItem, ScreenState, SearchHit, SortField, SortSpec, ViewStatus};
use gigboard::util::{display_width, fmt_number, pad_display, ts_to_date};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Serialize rows as pretty JSON.
///
/// # Errors
/// - Returns the serializer error.
pub fn items_json<T: serde::Serialize>(items: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Column title, with the direction arrow when `field` is the active sort.
fn header(label: &str, field: SortField, sort: &SortSpec) -> String {
    let arrow = sort.arrow(field);
    if arrow.is_empty() {
        label.to_string()
    } else {
        format!("{label} {arrow}")
    }
}

fn row_cells(item: &ListingItem) -> Vec<String> {
    match item {
        ListingItem::Artist(a) => vec![
            a.id.to_string(),
            a.name.clone(),
            a.primary_category.clone(),
            fmt_number(a.average_rating),
            fmt_number(a.budget),
        ],
        ListingItem::Event(e) => vec![
            e.id.to_string(),
            e.title.clone(),
            e.category.clone(),
            ts_to_date(e.date),
            fmt_number(e.popularity),
            fmt_number(e.budget),
        ],
    }
}

/// What: Render the screen's rows as an aligned table with a status footer.
///
/// Inputs:
/// - `screen`: Settled screen state
///
/// Output:
/// - Header, one line per row, then a summary line. The active sort column
///   carries its direction arrow.
pub fn listing_table(screen: &ScreenState) -> String {
    let sort = &screen.sort;
    let headers: Vec<String> = match screen.kind {
        gigboard::state::EntityKind::Artists => vec![
            "ID".into(),
            "NAME".into(),
            "CATEGORY".into(),
            header("RATING", SortField::Rating, sort),
            header("BUDGET", SortField::Budget, sort),
        ],
        gigboard::state::EntityKind::Events => vec![
            "ID".into(),
            "TITLE".into(),
            "CATEGORY".into(),
            header("DATE", SortField::Date, sort),
            header("POPULARITY", SortField::Popularity, sort),
            header("BUDGET", SortField::Budget, sort),
        ],
    };
    let rows: Vec<Vec<String>> = screen.items.iter().map(row_cells).collect();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| display_width(c))
                .chain(std::iter::once(display_width(h)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out.push_str(&footer(screen));
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| pad_display(c, *w))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

fn footer(screen: &ScreenState) -> String {
    let label = screen.kind.label();
    match &screen.status {
        ViewStatus::Empty => format!("No {label} found.\n"),
        ViewStatus::Error(e) => format!("Error: {e}\n"),
        _ => {
            let more = if screen.has_more {
                ", more available"
            } else {
                ""
            };
            let filters = if screen.filters.is_empty() {
                String::new()
            } else {
                let names: Vec<&str> = screen.filters.iter().map(String::as_str).collect();
                format!(" [{}]", names.join(", "))
            };
            format!(
                "{} {label}{filters}, {} page(s){more}\n",
                screen.items.len(),
                screen.page
            )
        }
    }
}

/// What: Render unified search hits, one per line, tagged by kind.
pub fn search_lines(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No matches.\n".to_string();
    }
    let mut out = String::new();
    for hit in hits {
        let (kind, detail) = match hit {
            SearchHit::Artist(a) => ("artist", a.primary_category.as_str()),
            SearchHit::Event(e) => ("event", e.category.as_str()),
            SearchHit::Category { .. } => ("category", ""),
        };
        let line = format!("{}  {}  {detail}", pad_display(kind, 8), hit.display_name());
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gigboard::sources::{dummy_artists, search_items};
    use gigboard::state::{Artist, EntityKind, SortOrder};

    fn screen_with(items: Vec<ListingItem>, sort: SortSpec) -> ScreenState {
        let mut s = ScreenState::new(EntityKind::Artists, 6);
        s.items = items;
        s.sort = sort;
        s.status = ViewStatus::Ready;
        s
    }

    #[test]
    /// What: Columns align and the active sort column shows its arrow
    fn table_aligns_and_marks_sort() {
        let items = dummy_artists()
            .into_iter()
            .take(2)
            .map(ListingItem::Artist)
            .collect();
        let out = listing_table(&screen_with(
            items,
            SortSpec {
                field: Some(SortField::Budget),
                order: SortOrder::Desc,
            },
        ));
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("ID  NAME"));
        assert!(lines[0].ends_with("BUDGET ↓"));
        assert!(lines[1].contains("Alice"));
        assert_eq!(lines[1].find("Singer"), lines[2].find("Dancer"));
        assert_eq!(lines.last().copied(), Some("2 artists, 1 page(s)"));
    }

    #[test]
    /// What: Only the active sort column carries an arrow
    fn header_marks_active_field_only() {
        let sort = SortSpec::by(SortField::Date);
        assert_eq!(header("DATE", SortField::Date, &sort), "DATE ↑");
        assert_eq!(header("BUDGET", SortField::Budget, &sort), "BUDGET");
        assert_eq!(header("DATE", SortField::Date, &SortSpec::default()), "DATE");
    }

    #[test]
    /// What: Missing values print as dashes and empty screens say so
    fn table_dash_and_empty() {
        let bare = ListingItem::Artist(Artist {
            id: 7,
            name: "Nobody".into(),
            average_rating: None,
            primary_category: "Mime".into(),
            budget: None,
            profile_picture: String::new(),
        });
        let out = listing_table(&screen_with(vec![bare], SortSpec::default()));
        assert!(out.lines().nth(1).is_some_and(|l| l.ends_with("-       -")));

        let mut empty = screen_with(Vec::new(), SortSpec::default());
        empty.status = ViewStatus::Empty;
        assert!(listing_table(&empty).ends_with("No artists found.\n"));
    }

    #[test]
    /// What: Search lines are tagged and blank results say so
    fn search_lines_tagged() {
        let hits = search_items(&dummy_artists(), &[], "violin");
        let out = search_lines(&hits);
        assert!(out.starts_with("artist    Fiona"));
        assert!(out.contains("category  Violinist"));
        assert_eq!(search_lines(&[]), "No matches.\n");
    }
}
