use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::probs::ZoneProbabilities;
use crate::stats::{DropReason, PassStats, ShotStats};
use crate::zone::zone_number;

/// Scales a probability to a whole percentage: rounds to two decimal places, scales by 100 and
/// truncates toward zero.
///
/// Rounding is correct with respect to the exact binary value of `prob`, with exact ties going to
/// the even digit, so `0.125 → 12` while `0.375 → 38`. Because the rounded value is not always
/// exactly representable, the scaled result can fall just short of the intended integer, e.g.
/// `0.29 → 28`.
pub fn as_percentage(prob: f64) -> i64 {
    let rounded = format!("{prob:.2}").parse::<f64>().unwrap_or(prob);
    (rounded * 100.0) as i64
}

/// Renders one `#define` line per probability, zones in ascending order and entries in derivation
/// order within each zone.
pub fn format_defines(probabilities: &ZoneProbabilities, team_prefix: &str) -> String {
    let mut lines = vec![];
    for zone_probs in probabilities.iter() {
        for (metric, prob) in zone_probs.entries() {
            let zone_prefix = if metric.is_zone_pair() {
                String::new()
            } else {
                format!("{}_", zone_probs.zone())
            };
            lines.push(format!(
                "#define {team_prefix}_{zone_prefix}{metric} {};",
                as_percentage(*prob)
            ));
        }
    }
    lines.join("\n")
}

pub fn tabulate_shots(stats: &ShotStats) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(3)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "#".into(),
                "Zone".into(),
                "Shots".into(),
                "On target".into(),
                "Goals".into(),
                "Off target".into(),
            ],
        ));
    for (zone, stat) in stats.zones() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                zone_number(Some(zone)).to_string().into(),
                zone.to_string().into(),
                stat.total_shots.to_string().into(),
                stat.on_target.to_string().into(),
                stat.goal.to_string().into(),
                stat.off_target.to_string().into(),
            ],
        ));
    }
    table.push_row(Row::new(
        Styles::default().with(Separator(true)),
        vec![
            zone_number(None).to_string().into(),
            "unclassified".into(),
            stats.skipped.to_string().into(),
            "".into(),
            "".into(),
            "".into(),
        ],
    ));
    table
}

pub fn tabulate_passes(stats: &PassStats) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(9)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(9)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "From".into(),
                "To".into(),
                "Attempted".into(),
                "Completed".into(),
            ],
        ));
    for zone_stat in stats.zones() {
        table.push_row(Row::new(
            Styles::default().with(Separator(true)),
            vec![
                zone_stat.zone().to_string().into(),
                "*".into(),
                zone_stat.passes_attempted.to_string().into(),
                zone_stat.passes_completed.to_string().into(),
            ],
        ));
        for (target, pair) in zone_stat.targets() {
            table.push_row(Row::new(
                Styles::default(),
                vec![
                    "".into(),
                    target.to_string().into(),
                    pair.attempted.to_string().into(),
                    pair.completed.to_string().into(),
                ],
            ));
        }
    }
    table.push_row(Row::new(
        Styles::default().with(Separator(true)),
        vec![
            "total".into(),
            "".into(),
            stats.total_valid_passes_attempted().to_string().into(),
            stats.total_valid_passes_completed().to_string().into(),
        ],
    ));
    for reason in DropReason::iter() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                "dropped".into(),
                reason.to_string().into(),
                stats.dropped(reason).to_string().into(),
                "".into(),
            ],
        ));
    }
    table
}

pub fn tabulate_probabilities(probabilities: &ZoneProbabilities) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(30)).with(Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Zone".into(), "Metric".into(), "Probability".into()],
        ));
    for zone_probs in probabilities.iter() {
        for (index, (metric, prob)) in zone_probs.entries().iter().enumerate() {
            let styles = if index == 0 {
                Styles::default().with(Separator(true))
            } else {
                Styles::default()
            };
            table.push_row(Row::new(
                styles,
                vec![
                    zone_probs.zone().to_string().into(),
                    metric.to_string().into(),
                    format!("{prob:.3}").into(),
                ],
            ));
        }
    }
    table
}
