//! Text table rendering for flight lists.

use std::fmt::Write;

use crate::record::FlightRecord;

/// Printed instead of a table when there is nothing to show.
pub const EMPTY_MESSAGE: &str = "List of flights is empty.";

/// Column widths: number, destination, departure date, aircraft type.
const WIDTHS: [usize; 4] = [4, 30, 20, 8];

/// Render flights as a bordered fixed-width table.
///
/// Rows are numbered from 1 in list order. An empty list renders as
/// [`EMPTY_MESSAGE`]. The result always ends with a newline.
#[must_use]
pub fn render_flights(flights: &[FlightRecord]) -> String {
    if flights.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let line = border();
    let [no, dest, date, kind] = WIDTHS;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{line}");
    let _ = writeln!(
        out,
        "| {:^no$} | {:^dest$} | {:^date$} | {:^kind$} |",
        "No", "Destination", "Departure Date", "Aircraft Type"
    );
    let _ = writeln!(out, "{line}");
    for (idx, flight) in flights.iter().enumerate() {
        let _ = writeln!(
            out,
            "| {:>no$} | {:<dest$} | {:<date$} | {:>kind$} |",
            idx + 1,
            flight.destination(),
            flight.departure_date(),
            flight.aircraft_type()
        );
        let _ = writeln!(out, "{line}");
    }
    out
}

fn border() -> String {
    let cells: Vec<String> = WIDTHS.iter().map(|w| "-".repeat(*w)).collect();
    format!("+-{}-+", cells.join("-+-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str =
        "+------+--------------------------------+----------------------+----------+";

    #[test]
    fn test_border() {
        assert_eq!(border(), LINE);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_flights(&[]), "List of flights is empty.\n");
    }

    #[test]
    fn test_render_single_flight() {
        let out = render_flights(&[FlightRecord::new("Paris", "2024-05-01", "A320")]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], LINE);
        assert_eq!(
            lines[1],
            "|  No  |          Destination           |    Departure Date    | Aircraft Type |"
        );
        assert_eq!(lines[2], LINE);
        assert_eq!(
            lines[3],
            "|    1 | Paris                          | 2024-05-01           |     A320 |"
        );
        assert_eq!(lines[4], LINE);
    }

    #[test]
    fn test_render_numbers_rows_in_order() {
        let flights = vec![
            FlightRecord::new("Paris", "2024-05-01", "A320"),
            FlightRecord::new("Berlin", "2024-05-02", "B737"),
            FlightRecord::new("Rome", "2024-05-03", "A320"),
        ];
        let out = render_flights(&flights);
        let rows: Vec<&str> = out.lines().filter(|l| l.starts_with("| ")).skip(1).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("|    1 | Paris "));
        assert!(rows[1].starts_with("|    2 | Berlin "));
        assert!(rows[2].starts_with("|    3 | Rome "));
        assert_eq!(out.lines().filter(|l| *l == LINE).count(), 5);
    }

    #[test]
    fn test_render_missing_fields_as_empty() {
        let out = render_flights(&[FlightRecord::default()]);
        assert!(out.contains(
            "|    1 |                                |                      |          |"
        ));
    }

    #[test]
    fn test_render_does_not_truncate() {
        let long = "A".repeat(40);
        let out = render_flights(&[FlightRecord::new(long.clone(), "2024-05-01", "B787-10")]);
        assert!(out.contains(&format!("| {long} |")));
    }
}
