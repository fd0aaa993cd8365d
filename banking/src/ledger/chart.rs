use crate::data::models::{ChartSeries, FinancialOverview};

pub const EMPTY_CHART_MESSAGE: &str = "No data available to display chart.";

/// Plot-ready view of a [`FinancialOverview`]: every series mapped onto a
/// unit square, x spread evenly over the points, y scaled from zero to the
/// largest value across all series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub labels: Vec<String>,
    pub max_value: f64,
    pub lines: Vec<ChartLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub series: ChartSeries,
    /// `(x, y)` in `0.0..=1.0`, y pointing up.
    pub points: Vec<(f32, f32)>,
}

impl ChartFrame {
    pub fn from_overview(overview: &FinancialOverview) -> Option<Self> {
        if overview.points.is_empty() || overview.series.is_empty() {
            return None;
        }

        let max_value = overview
            .points
            .iter()
            .flat_map(|p| p.values.values().copied())
            .fold(0.0_f64, f64::max);
        let span = overview.points.len().saturating_sub(1).max(1) as f32;

        let lines = overview
            .series
            .iter()
            .map(|series| ChartLine {
                series: series.clone(),
                points: overview
                    .points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        let value = p.values.get(&series.key).copied().unwrap_or(0.0);
                        let y = if max_value > 0.0 { value / max_value } else { 0.0 };
                        (i as f32 / span, y as f32)
                    })
                    .collect(),
            })
            .collect();

        Some(Self {
            labels: overview.points.iter().map(|p| p.label.clone()).collect(),
            max_value,
            lines,
        })
    }
}

/// Parses `#rrggbb` into components; anything else yields `None`.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BankData, InMemoryBank};

    #[test]
    fn test_frame_scales_to_largest_value() {
        let overview = InMemoryBank::builtin().unwrap().overview();
        let frame = ChartFrame::from_overview(&overview).unwrap();

        assert_eq!(frame.max_value, 9800.0);
        assert_eq!(frame.labels.first().map(String::as_str), Some("Jan"));
        let expenses = frame.lines.iter().find(|l| l.series.key == "expenses").unwrap();
        assert_eq!(expenses.points[2], (0.4, 1.0));
        assert_eq!(expenses.points[0].0, 0.0);
        assert_eq!(expenses.points[5].0, 1.0);
    }

    #[test]
    fn test_empty_overview_has_no_frame() {
        let mut overview = InMemoryBank::builtin().unwrap().overview();
        overview.points.clear();
        assert!(ChartFrame::from_overview(&overview).is_none());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#22c55e"), Some((0x22, 0xc5, 0x5e)));
        assert_eq!(parse_hex_color("22c55e"), None);
        assert_eq!(parse_hex_color("#zzz000"), None);
    }
}
