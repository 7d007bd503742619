use crate::model::ApplicationMap;

/// What the application dialog reports when it closes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogOutcome {
    pub applications: ApplicationMap,
    /// Whether every application card in the dialog passed validation.
    pub valid: bool,
}

impl DialogOutcome {
    pub fn new(applications: ApplicationMap, valid: bool) -> Self {
        Self {
            applications,
            valid,
        }
    }
}

/// Whether a dialog result may mark the node's applications as configured.
///
/// All three must hold: the dialog says it is valid, the owning form is
/// valid, and the quantities add up to exactly `target`.
pub fn accepts(outcome: &DialogOutcome, form_valid: bool, target: u32) -> bool {
    outcome.valid && form_valid && outcome.applications.total_quantity() == target
}

/// Shrinks `apps` so their quantities add up to at most `target`.
///
/// Entries are walked in map order. An entry is kept whole while the running
/// total stays within `target`; the first one that would overshoot is clipped
/// to the remainder and everything after it is dropped.
pub fn truncate_applications(apps: ApplicationMap, target: u32) -> ApplicationMap {
    let mut kept = ApplicationMap::new();
    let mut total = 0;
    for mut app in apps {
        // `total` never exceeds `target`.
        let room = target - total;
        if room == 0 {
            break;
        }
        if app.quantity <= room {
            total += app.quantity;
            kept.insert(app);
        } else {
            app.quantity = room;
            kept.insert(app);
            break;
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Application;

    fn apps(entries: &[(&str, u32)]) -> ApplicationMap {
        entries
            .iter()
            .map(|(id, quantity)| Application::new(*id, *quantity))
            .collect()
    }

    #[test]
    fn exact_fit_keeps_entries_whole() {
        let result = truncate_applications(apps(&[("a1", 2), ("a2", 1), ("a3", 4)]), 3);
        assert_eq!(result, apps(&[("a1", 2), ("a2", 1)]));
    }

    #[test]
    fn huge_quantities_are_clipped_without_overflow() {
        let result = truncate_applications(apps(&[("a1", 1), ("a2", u32::MAX), ("a3", 1)]), 3);
        assert_eq!(result, apps(&[("a1", 1), ("a2", 2)]));
    }

    #[test]
    fn zero_target_drops_everything() {
        assert!(truncate_applications(apps(&[("a1", 2)]), 0).is_empty());
    }

    #[test]
    fn target_above_total_changes_nothing() {
        let original = apps(&[("a1", 2), ("a2", 3)]);
        assert_eq!(truncate_applications(original.clone(), 8), original);
    }
}
