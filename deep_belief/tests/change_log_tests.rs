/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2023 - 2026. The DeepBelief Authors and Contributors. All Rights Reserved.
 */

use deep_belief::prelude::*;

#[test]
fn test_fresh_log_is_clean() {
    let log = ChangeLog::new();
    assert!(log.is_empty());
    assert!(!log.is_structure_dirty());
}

#[test]
fn test_plain_transitions() {
    let mut log = ChangeLog::new();

    log.record_added(0);
    assert_eq!(log.change(0), Some(EvidenceChange::Added));

    log.record_erased(1);
    assert_eq!(log.change(1), Some(EvidenceChange::Erased));

    log.record_modified(2);
    assert_eq!(log.change(2), Some(EvidenceChange::Modified));
    assert_eq!(log.len(), 3);
}

#[test]
fn test_added_then_erased_cancels() {
    let mut log = ChangeLog::new();

    log.record_added(0);
    log.record_erased(0);
    assert!(!log.contains(0));
    assert!(log.is_empty());
}

#[test]
fn test_added_then_modified_stays_added() {
    let mut log = ChangeLog::new();

    log.record_added(0);
    log.record_modified(0);
    assert_eq!(log.change(0), Some(EvidenceChange::Added));
}

#[test]
fn test_modified_then_erased_becomes_erased() {
    let mut log = ChangeLog::new();

    log.record_modified(0);
    log.record_erased(0);
    assert_eq!(log.change(0), Some(EvidenceChange::Erased));
}

#[test]
fn test_erased_then_added_becomes_modified() {
    let mut log = ChangeLog::new();

    log.record_erased(0);
    log.record_added(0);
    assert_eq!(log.change(0), Some(EvidenceChange::Modified));
}

#[test]
fn test_modified_twice_stays_modified() {
    let mut log = ChangeLog::new();

    log.record_modified(0);
    log.record_modified(0);
    assert_eq!(log.change(0), Some(EvidenceChange::Modified));
    assert_eq!(log.len(), 1);
}

#[test]
fn test_clear_resets_everything() {
    let mut log = ChangeLog::new();

    log.record_added(0);
    log.set_structure_dirty();
    assert!(log.is_structure_dirty());

    log.clear();
    assert!(log.is_empty());
    assert!(!log.is_structure_dirty());
}

#[test]
fn test_changed_nodes_iteration() {
    let mut log = ChangeLog::new();
    log.record_added(3);
    log.record_erased(1);

    let changes: Vec<_> = log.changed_nodes().collect();
    assert_eq!(
        changes,
        vec![(1, EvidenceChange::Erased), (3, EvidenceChange::Added)]
    );
}
