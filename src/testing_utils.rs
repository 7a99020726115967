use crate::roster::PlayerRecord;

/// Test utilities for creating raw rows and records
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Headers of a registration export with separate name columns
    pub fn separate_headers() -> Vec<String> {
        ["Players First Name", "Players Last Name", "Players Team", "Jersey Number"]
            .iter()
            .map(|header| header.to_string())
            .collect()
    }

    /// Headers of a registration export with one combined name column
    pub fn combined_headers() -> Vec<String> {
        ["Name", "Team", "Sweater"]
            .iter()
            .map(|header| header.to_string())
            .collect()
    }

    /// Creates a raw row in `separate_headers` column order
    pub fn raw_row(first: &str, last: &str, team: &str, sweater: &str) -> Vec<String> {
        vec![
            first.to_string(),
            last.to_string(),
            team.to_string(),
            sweater.to_string(),
        ]
    }

    /// Creates a raw row in `combined_headers` column order
    pub fn full_name_row(name: &str, team: &str, sweater: &str) -> Vec<String> {
        vec![name.to_string(), team.to_string(), sweater.to_string()]
    }

    /// Creates `count` rows for one team with distinct players and sweaters
    pub fn team_rows(team: &str, count: usize) -> Vec<Vec<String>> {
        (1..=count)
            .map(|n| Self::raw_row(&format!("player{n}"), "skater", team, &n.to_string()))
            .collect()
    }

    /// Creates an already-canonical record
    pub fn record(first: &str, last: &str, team: &str, sweater: &str) -> PlayerRecord {
        PlayerRecord::new(first, last, team, sweater)
    }

    /// Renders rows as CSV text below `headers`
    pub fn csv_text(headers: &[String], rows: &[Vec<String>]) -> String {
        let mut text = headers.join(",");
        text.push('\n');
        for row in rows {
            text.push_str(&row.join(","));
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_rows_are_distinct() {
        let rows = TestDataBuilder::team_rows("12u red", 3);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "player1");
        assert_eq!(rows[2][3], "3");
    }

    #[test]
    fn test_csv_text() {
        let text = TestDataBuilder::csv_text(
            &TestDataBuilder::combined_headers(),
            &[TestDataBuilder::full_name_row("Ann Lee", "12u red", "4")],
        );
        assert_eq!(text, "Name,Team,Sweater\nAnn Lee,12u red,4\n");
    }
}
