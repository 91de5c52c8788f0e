use strum::IntoEnumIterator;

use super::*;
use crate::event::PassOutcome;

fn shot(team: &str, location: (f64, f64), outcome: ShotOutcome) -> Event {
    Event::shot(team, location, outcome)
}

fn pass(team: &str, from: (f64, f64), to: (f64, f64), outcome: Option<PassOutcome>) -> Event {
    Event::pass(team, from, to, outcome)
}

fn assert_shot_invariants(stats: &ShotStats) {
    for (zone, stat) in stats.zones() {
        assert_eq!(
            stat.total_shots,
            stat.on_target + stat.off_target,
            "partition broken in {zone}: {stat:?}"
        );
        assert!(stat.goal <= stat.on_target, "goals exceed on-target in {zone}: {stat:?}");
    }
}

fn assert_pass_invariants(stats: &PassStats) {
    for zone_stat in stats.zones() {
        assert!(zone_stat.passes_completed <= zone_stat.passes_attempted);
        let mut attempted = 0;
        let mut completed = 0;
        for (target, pair) in zone_stat.targets() {
            assert!(pair.completed <= pair.attempted, "{} -> {target}: {pair:?}", zone_stat.zone());
            attempted += pair.attempted;
            completed += pair.completed;
        }
        assert_eq!(zone_stat.passes_attempted, attempted);
        assert_eq!(zone_stat.passes_completed, completed);
    }
}

#[test]
fn goal_in_zone_one() {
    let shots = vec![shot("England", (100.0, 15.0), ShotOutcome::Goal)];
    let stats = aggregate_shots(&shots);
    assert_eq!(
        ZoneStat {
            total_shots: 1,
            on_target: 1,
            goal: 1,
            off_target: 0
        },
        stats[Zone::One]
    );
    assert_eq!(1, stats.number_of_shots);
    assert_eq!(0, stats.skipped);
    for zone in Zone::iter().skip(1) {
        assert_eq!(ZoneStat::default(), stats[zone]);
    }
}

#[test]
fn unclassified_shot_still_counted_in_total() {
    let shots = vec![shot("England", (50.0, 40.0), ShotOutcome::Goal)];
    let stats = aggregate_shots(&shots);
    for zone in Zone::iter() {
        assert_eq!(ZoneStat::default(), stats[zone]);
    }
    assert_eq!(1, stats.number_of_shots);
    assert_eq!(1, stats.skipped);
}

#[test]
fn shot_outcomes_partition() {
    let shots = vec![
        shot("England", (95.0, 40.0), ShotOutcome::Goal),
        shot("England", (95.0, 40.0), ShotOutcome::Saved),
        shot("England", (95.0, 40.0), ShotOutcome::SavedToPost),
        shot("England", (95.0, 40.0), ShotOutcome::Blocked),
        shot("England", (95.0, 40.0), ShotOutcome::OffTarget),
        shot("England", (95.0, 40.0), ShotOutcome::Wayward),
        shot("England", (108.0, 40.0), ShotOutcome::Post),
    ];
    let stats = aggregate_shots(&shots);
    assert_eq!(
        ZoneStat {
            total_shots: 6,
            on_target: 3,
            goal: 1,
            off_target: 3
        },
        stats[Zone::Five]
    );
    assert_eq!(
        ZoneStat {
            total_shots: 1,
            on_target: 0,
            goal: 0,
            off_target: 1
        },
        stats[Zone::Four]
    );
    assert_shot_invariants(&stats);
}

#[test]
fn shot_with_missing_fields_skipped() {
    let mut no_location = shot("England", (100.0, 15.0), ShotOutcome::Goal);
    no_location.location = None;
    let mut no_outcome = shot("England", (100.0, 15.0), ShotOutcome::Goal);
    no_outcome.shot = None;
    let shots = vec![no_location, no_outcome];
    let stats = aggregate_shots(&shots);
    assert_eq!(ZoneStat::default(), stats[Zone::One]);
    assert_eq!(2, stats.number_of_shots);
    assert_eq!(2, stats.skipped);
}

#[test]
fn completed_pass_one_to_two() {
    let passes = vec![pass("England", (95.0, 10.0), (115.0, 40.0), None)];
    let stats = aggregate_passes(&passes);
    let zone_one = &stats[Zone::One];
    assert_eq!(1, zone_one.passes_attempted);
    assert_eq!(1, zone_one.passes_completed);
    assert_eq!(
        Some(&PairStat {
            attempted: 1,
            completed: 1
        }),
        zone_one.target(Zone::Two)
    );
    assert_eq!(Some(&PairStat::default()), zone_one.target(Zone::Four));
    assert_eq!(1, stats.total_valid_passes_attempted());
    assert_eq!(1, stats.total_valid_passes_completed());
    assert_eq!(0, stats.total_dropped());
}

#[test]
fn incomplete_pass_counts_attempt_only() {
    let passes = vec![pass(
        "England",
        (95.0, 10.0),
        (108.0, 40.0),
        Some(PassOutcome::Incomplete),
    )];
    let stats = aggregate_passes(&passes);
    let zone_one = &stats[Zone::One];
    assert_eq!(1, zone_one.passes_attempted);
    assert_eq!(0, zone_one.passes_completed);
    assert_eq!(
        Some(&PairStat {
            attempted: 1,
            completed: 0
        }),
        zone_one.target(Zone::Four)
    );
    assert_eq!(1, stats.total_valid_passes_attempted());
    assert_eq!(0, stats.total_valid_passes_completed());
}

#[test]
fn pass_within_zone_dropped() {
    let passes = vec![pass("England", (95.0, 10.0), (95.0, 10.0), None)];
    let stats = aggregate_passes(&passes);
    assert_eq!(PassStats::default().zones, stats.zones);
    assert_eq!(1, stats.dropped(DropReason::SameZone));
    assert_eq!(1, stats.number_of_passes);
    assert_eq!(0, stats.total_valid_passes_attempted());
}

#[test]
fn pass_to_non_adjacent_zone_dropped() {
    let passes = vec![pass("England", (115.0, 40.0), (95.0, 10.0), None)];
    let stats = aggregate_passes(&passes);
    assert!(stats[Zone::Two].targets().is_empty());
    assert_eq!(0, stats.total_valid_passes_attempted());
    assert_eq!(1, stats.dropped(DropReason::InvalidTarget));
}

#[test]
fn pass_drop_reasons() {
    let mut no_end_location = pass("England", (95.0, 10.0), (115.0, 40.0), None);
    no_end_location.pass = None;
    let passes = vec![
        no_end_location,
        pass("England", (50.0, 40.0), (115.0, 40.0), None),
        pass("England", (95.0, 10.0), (50.0, 40.0), None),
        pass("England", (95.0, 10.0), (96.0, 11.0), None),
        pass("England", (108.0, 40.0), (95.0, 40.0), None),
        pass("England", (95.0, 40.0), (108.0, 40.0), None),
    ];
    let stats = aggregate_passes(&passes);
    assert_eq!(1, stats.dropped(DropReason::MissingField));
    assert_eq!(1, stats.dropped(DropReason::UnclassifiedSource));
    assert_eq!(1, stats.dropped(DropReason::UnclassifiedTarget));
    assert_eq!(1, stats.dropped(DropReason::SameZone));
    assert_eq!(1, stats.dropped(DropReason::InvalidTarget));
    assert_eq!(5, stats.total_dropped());
    assert_eq!(6, stats.number_of_passes);
    assert_eq!(1, stats.total_valid_passes_attempted());
    assert_eq!(Some(1), stats[Zone::Five].target(Zone::Four).map(|pair| pair.attempted));
}

#[test]
fn classify_pass_reasons() {
    assert_eq!(
        Ok((Zone::Five, Zone::Two)),
        classify_pass(&pass("England", (95.0, 40.0), (116.0, 40.0), None))
    );
    assert_eq!(
        Err(DropReason::UnclassifiedTarget),
        classify_pass(&pass("England", (95.0, 40.0), (114.0, 40.0), None))
    );
}

#[test]
fn target_tables_follow_adjacency() {
    let stats = PassStats::default();
    for zone in Zone::iter() {
        let targets = stats[zone]
            .targets()
            .iter()
            .map(|(target, _)| *target)
            .collect::<Vec<_>>();
        assert_eq!(zone.valid_targets(), &targets[..]);
    }
}

#[test]
fn mixed_passes_per_zone() {
    let passes = vec![
        pass("England", (95.0, 40.0), (95.0, 10.0), None),
        pass("England", (95.0, 40.0), (95.0, 10.0), Some(PassOutcome::Out)),
        pass("England", (95.0, 40.0), (116.0, 40.0), None),
        pass("England", (108.0, 40.0), (95.0, 70.0), None),
        pass("England", (95.0, 70.0), (116.0, 40.0), Some(PassOutcome::Incomplete)),
    ];
    let stats = aggregate_passes(&passes);
    assert_eq!(3, stats[Zone::Five].passes_attempted);
    assert_eq!(2, stats[Zone::Five].passes_completed);
    assert_eq!(
        Some(&PairStat {
            attempted: 2,
            completed: 1
        }),
        stats[Zone::Five].target(Zone::One)
    );
    assert_eq!(1, stats[Zone::Four].passes_completed);
    assert_eq!(1, stats[Zone::Three].passes_attempted);
    assert_eq!(0, stats[Zone::Three].passes_completed);
    assert_eq!(5, stats.total_valid_passes_attempted());
    assert_eq!(3, stats.total_valid_passes_completed());
    assert_pass_invariants(&stats);
}

#[test]
fn aggregation_is_idempotent() {
    let events = vec![
        shot("England", (100.0, 15.0), ShotOutcome::Goal),
        shot("England", (95.0, 40.0), ShotOutcome::Saved),
        shot("England", (30.0, 40.0), ShotOutcome::OffTarget),
        pass("England", (95.0, 40.0), (116.0, 40.0), None),
        pass("England", (108.0, 40.0), (95.0, 70.0), Some(PassOutcome::Out)),
    ];
    assert_eq!(aggregate_shots(&events[..3]), aggregate_shots(&events[..3]));
    assert_eq!(aggregate_passes(&events[3..]), aggregate_passes(&events[3..]));
}
