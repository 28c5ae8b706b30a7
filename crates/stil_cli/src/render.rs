//! Rendering a parsed test for the terminal.

use stil_model::StilTest;

use crate::ReportFormat;

/// Renders `test` in `format`, newline-terminated.
pub fn render(test: &StilTest, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(stil_model::dump::render(test)),
        ReportFormat::Json => serde_json::to_string_pretty(test).map(|mut s| {
            s.push('\n');
            s
        }),
    }
}

/// One-line summary: name, signal count, group count and cycle count.
pub fn summary(test: &StilTest) -> String {
    format!(
        "{}: {} signals, {} groups, {} cycles",
        test.name().unwrap_or("<unnamed>"),
        test.signals().len(),
        test.groups().len(),
        test.test_vectors().count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stil_common::Direction;

    fn named() -> StilTest {
        let mut test = StilTest::new();
        test.set_name("t").unwrap();
        test.add_signal("a", Direction::Input).unwrap();
        test
    }

    #[test]
    fn json_contains_signals() {
        let out = render(&named(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "t");
        assert_eq!(value["signals"][0]["name"], "a");
        assert_eq!(value["signals"][0]["direction"], "Input");
    }

    #[test]
    fn text_is_the_dump() {
        let test = named();
        assert_eq!(
            render(&test, ReportFormat::Text).unwrap(),
            stil_model::dump::render(&test)
        );
    }

    #[test]
    fn summary_line() {
        assert_eq!(summary(&named()), "t: 1 signals, 0 groups, 0 cycles");
    }
}
