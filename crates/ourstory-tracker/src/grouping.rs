//! Event grouping

use ourstory_domain::HistoricalEvent;

/// Partition events into clusters of related events
///
/// Single greedy pass in input order. Each event not yet claimed seeds a
/// new cluster and claims every unclaimed event (earlier or later in the
/// input) that shares at least one tag with the seed, or whose id the seed
/// lists in `related_events`. Only the seed is compared against candidates,
/// so the relation is neither symmetric nor transitive. Singleton clusters
/// are kept.
///
/// Every input event appears in exactly one cluster.
///
/// # Examples
///
/// ```
/// use ourstory_domain::{DateRange, HistoricalEvent};
/// use ourstory_tracker::group_events;
///
/// let events = vec![
///     HistoricalEvent::new("a", "A", "", DateRange::new("1947"), vec![]).with_tags(["ufo"]),
///     HistoricalEvent::new("b", "B", "", DateRange::new("1963"), vec![]).with_tags(["jfk"]),
///     HistoricalEvent::new("c", "C", "", DateRange::new("1952"), vec![]).with_tags(["ufo"]),
/// ];
///
/// let groups = group_events(&events);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].len(), 2);
/// ```
pub fn group_events(events: &[HistoricalEvent]) -> Vec<Vec<&HistoricalEvent>> {
    // Claimed state is per input position; with unique ids this matches
    // claiming by id.
    let mut processed = vec![false; events.len()];
    let mut groups = Vec::new();

    for (seed_index, seed) in events.iter().enumerate() {
        if processed[seed_index] {
            continue;
        }
        processed[seed_index] = true;
        let mut group = vec![seed];

        for (index, other) in events.iter().enumerate() {
            if processed[index] {
                continue;
            }

            let has_common_tags = seed.tags.iter().any(|tag| other.has_tag(tag));
            if has_common_tags || seed.is_related_to(&other.id) {
                group.push(other);
                processed[index] = true;
            }
        }

        groups.push(group);
    }

    groups
}


#[cfg(test)]
mod proptests {
    use super::*;
    use ourstory_domain::DateRange;
    use proptest::prelude::*;

    fn arb_events() -> impl Strategy<Value = Vec<HistoricalEvent>> {
        proptest::collection::vec(
            (
                proptest::collection::vec(0u8..6, 0..4),
                proptest::collection::vec(0usize..12, 0..3),
            ),
            0..12,
        )
        .prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (tags, related))| {
                    HistoricalEvent::new(format!("e{}", i), "t", "d", DateRange::new("1000 CE"), vec![])
                        .with_tags(tags.into_iter().map(|t| format!("tag{}", t)))
                        .with_related(related.into_iter().map(|r| format!("e{}", r)))
                })
                .collect()
        })
    }

    proptest! {
        /// Property: clusters partition the input exactly once each
        #[test]
        fn test_grouping_partition(events in arb_events()) {
            let groups = group_events(&events);

            let mut seen: Vec<&str> = groups.iter()
                .flat_map(|g| g.iter().map(|e| e.id.as_str()))
                .collect();
            prop_assert!(groups.iter().all(|g| !g.is_empty()));
            prop_assert_eq!(seen.len(), events.len());

            seen.sort_unstable();
            let mut expected: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
            expected.sort_unstable();
            prop_assert_eq!(seen, expected);
        }

        /// Property: every non-seed member is linked to its cluster's seed
        #[test]
        fn test_members_linked_to_seed(events in arb_events()) {
            for group in group_events(&events) {
                let seed = group[0];
                for member in &group[1..] {
                    let linked = seed.tags.iter().any(|t| member.has_tag(t))
                        || seed.is_related_to(&member.id);
                    prop_assert!(linked);
                }
            }
        }
    }
}
