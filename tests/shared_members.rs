//! The taxonomy is shared, read-only data: members and their derived strings
//! can be read from any number of threads.

use std::thread;

use pdfa_flavour::{Flavour, Level, Standard, StandardSeries};

fn assert_send_sync<T: Send + Sync + Copy + 'static>() {}

#[test]
fn members_are_send_and_sync() {
    assert_send_sync::<Flavour>();
    assert_send_sync::<Standard>();
    assert_send_sync::<Level>();
    assert_send_sync::<StandardSeries>();
}

#[test]
fn derived_strings_agree_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                Flavour::ALL
                    .iter()
                    .map(|flavour| (flavour.short_id(), flavour.standard().id(), flavour.to_string()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    for result in &results[1..] {
        assert_eq!(result, &results[0]);
    }
    for (first, second) in results[0].iter().zip(&results[1]) {
        assert!(std::ptr::eq(first.0, second.0));
        assert!(std::ptr::eq(first.1, second.1));
    }
}

#[test]
fn standards_are_shared_between_flavours() {
    let part_1: Vec<_> = Flavour::for_standard(Standard::Iso19005_1).collect();
    assert_eq!(part_1, vec![Flavour::Pdfa1A, Flavour::Pdfa1B]);
    assert!(std::ptr::eq(
        Flavour::Pdfa1A.standard().id(),
        Flavour::Pdfa1B.standard().id()
    ));
}

#[test]
fn every_standard_belongs_to_a_listed_series() {
    for standard in Standard::ALL {
        assert!(StandardSeries::ALL.contains(&standard.series()));
    }
    for flavour in Flavour::ALL {
        assert!(Standard::ALL.contains(&flavour.standard()));
        assert!(Level::ALL.contains(&flavour.level()));
    }
}

#[test]
fn exhaustive_match_selects_a_profile() {
    fn profile(flavour: Flavour) -> &'static str {
        match flavour {
            Flavour::None => "auto-detect",
            Flavour::Pdfa1A | Flavour::Pdfa1B => "pdfa-1",
            Flavour::Pdfa2A | Flavour::Pdfa2B => "pdfa-2",
            Flavour::Pdfa3A | Flavour::Pdfa3B | Flavour::Pdfa3U => "pdfa-3",
        }
    }

    for flavour in Flavour::ALL {
        let expected = match flavour.standard().part_number() {
            0 => "auto-detect".to_string(),
            part => format!("pdfa-{part}"),
        };
        assert_eq!(profile(flavour), expected);
    }
}
