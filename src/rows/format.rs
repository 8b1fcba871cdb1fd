use itertools::Itertools;

use super::{row::Row, shape::RowShape};

/// Renders rows as an ASCII table, one line per row.
///
/// ```text
/// +----+----+
/// |COL1|COL4|
/// +----+----+
/// |7   |42  |
/// +----+----+
/// ```
pub fn format_table<R: Row>(rows: &[R]) -> String {
    let headers = R::Shape::FIELDS.iter().map(|f| f.name.to_owned()).collect_vec();
    let cells = rows
        .iter()
        .map(|row| (0..headers.len()).map(|i| row.get(i).to_string()).collect_vec())
        .collect_vec();

    let widths = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .map(|line| line[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect_vec();

    let border = format!(
        "+{}+",
        widths.iter().map(|w| "-".repeat(*w)).join("+")
    );
    let line = |values: &[String]| {
        let padded = values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{v:w$}", w = *w))
            .join("|");
        format!("|{padded}|")
    };

    let mut out = vec![border.clone(), line(headers.as_slice()), border.clone()];
    out.extend(cells.iter().map(|c| line(c.as_slice())));
    out.push(border);
    out.join("\n")
}
