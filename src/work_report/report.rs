use scraper::{Html, Selector};

/// Extracts the recorded work time from a work-report page: the trimmed text
/// of the last cell of the `workreport-table` table. A missing table or a
/// table without cells is a miss, not an error.
pub fn work_time_cell(body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    let table_selector = Selector::parse("#workreport-table").ok()?;
    let cell_selector = Selector::parse("td").ok()?;

    let table = document.select(&table_selector).next()?;
    let cell = table.select(&cell_selector).last()?;
    Some(cell.text().collect::<String>().trim().to_string())
}
