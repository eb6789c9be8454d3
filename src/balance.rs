//! Required-count balancing.
//!
//! Keeps per-class required counts consistent while the user edits them:
//! changing one class pushes the difference onto the other enabled classes.

use crate::charset::{CharacterClass, ClassMap};

/// Upper bound for a single class's required count.
pub const MAX_REQUIRED: usize = 10;

fn clamp_count(value: i64) -> usize {
    value.clamp(0, MAX_REQUIRED as i64) as usize
}

/// Rounds to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Sets `changed` to `new_value` and redistributes the difference across
/// the other enabled classes.
///
/// Each other class absorbs a share proportional to the inverse of its
/// [`resistance`](CharacterClass::resistance), rounded to the nearest
/// integer (halves up) and clamped to `[0, MAX_REQUIRED]`. Any rounding leftover goes to
/// the most affected class. If the enabled total then exceeds `length`,
/// the most affected classes are cut first, the changed class last.
///
/// With fewer than two enabled classes only `changed` is updated. Every
/// enabled class ends up within `[0, MAX_REQUIRED]`.
pub fn rebalance(
    counts: &ClassMap<usize>,
    changed: CharacterClass,
    new_value: usize,
    length: usize,
    enabled: &[CharacterClass],
) -> ClassMap<usize> {
    let mut next = *counts;
    let new_value = new_value.min(MAX_REQUIRED);
    next[changed] = new_value;

    let others: Vec<CharacterClass> = CharacterClass::ALL
        .into_iter()
        .filter(|class| *class != changed && enabled.contains(class))
        .collect();

    let mut affected: Vec<(CharacterClass, i64)> = Vec::with_capacity(others.len());
    if !others.is_empty() && enabled.contains(&changed) {
        let difference = new_value as i64 - counts[changed] as i64;
        let total_weight: f64 = others.iter().map(|c| 1.0 / c.resistance()).sum();

        let mut remaining = difference;
        for &class in &others {
            let share = difference as f64 / class.resistance() / total_weight;
            let adjustment = round_half_up(share);
            next[class] = clamp_count(counts[class] as i64 - adjustment);
            remaining -= adjustment;
            affected.push((class, adjustment.abs()));
        }

        // Stable: ties keep canonical order.
        affected.sort_by(|a, b| b.1.cmp(&a.1));

        if remaining != 0 {
            let (target, _) = affected[0];
            next[target] = clamp_count(next[target] as i64 - remaining);
        }
    } else {
        affected.extend(others.iter().map(|&class| (class, 0)));
    }

    // Counts coming from `distribute` may exceed the cap.
    for &class in enabled {
        next[class] = next[class].min(MAX_REQUIRED);
    }

    let mut excess = next.total_of(enabled).saturating_sub(length);
    let cut_order = affected
        .iter()
        .map(|(class, _)| *class)
        .chain(std::iter::once(changed));
    for class in cut_order {
        if excess == 0 {
            break;
        }
        let cut = next[class].min(excess);
        next[class] -= cut;
        excess -= cut;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Rebalanced {} to {}: {:?} -> {:?}",
        changed,
        new_value,
        counts,
        next
    );

    next
}

/// Splits `length` evenly across `enabled` classes.
///
/// The remainder is handed out one per class to the first enabled classes
/// in canonical order, so the enabled total is exactly `length`. Disabled
/// classes get zero.
pub fn distribute(length: usize, enabled: &[CharacterClass]) -> ClassMap<usize> {
    let active: Vec<CharacterClass> = CharacterClass::ALL
        .into_iter()
        .filter(|class| enabled.contains(class))
        .collect();

    let mut counts = ClassMap::splat(0);
    if active.is_empty() {
        return counts;
    }

    let base = length / active.len();
    let remainder = length % active.len();
    for (i, class) in active.into_iter().enumerate() {
        counts[class] = base + usize::from(i < remainder);
    }
    counts
}
