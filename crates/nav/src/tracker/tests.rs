use super::*;
use crate::section::section_map;

/// Absolute section top rows used across the scroll tests, in document
/// order: about, experience, projects, skills, education, contact.
const TOPS: [i64; 6] = [0, 800, 1600, 2400, 3200, 4000];

fn snapshot_at(offset: i64) -> ScrollSnapshot {
	let mut snapshot = ScrollSnapshot::new(offset);
	for (section, top) in section_map().iter().zip(TOPS) {
		snapshot.record_section_top(section.id, (top - offset) as i32);
	}
	snapshot
}

fn mounted() -> NavTracker {
	NavTracker::mount(section_map())
}

#[test]
fn initial_state_is_empty() {
	let tracker = mounted();
	assert_eq!(tracker.state().active_section(), None);
	assert!(!tracker.state().scrolled_past_threshold());
	assert!(!tracker.state().menu_open());
}

#[test]
fn scroll_into_second_section_activates_it() {
	// Offset 850: "about" top is -850, "experience" top is -50.
	let mut tracker = mounted();
	tracker.on_scroll(&snapshot_at(850));
	assert_eq!(tracker.state().active_section(), Some("experience"));
	assert!(tracker.state().scrolled_past_threshold());
}

#[test]
fn unscrolled_viewport_activates_first_section() {
	// The first section sits exactly at offset 0, which qualifies.
	let mut tracker = mounted();
	tracker.on_scroll(&snapshot_at(0));
	assert_eq!(tracker.state().active_section(), Some("about"));
	assert!(!tracker.state().scrolled_past_threshold());
}

#[test]
fn threshold_boundary_is_exclusive() {
	let mut tracker = mounted();
	tracker.on_scroll(&snapshot_at(20));
	assert!(!tracker.state().scrolled_past_threshold());
	tracker.on_scroll(&snapshot_at(21));
	assert!(tracker.state().scrolled_past_threshold());
	tracker.on_scroll(&snapshot_at(0));
	assert!(!tracker.state().scrolled_past_threshold());
}

#[test]
fn activation_line_is_inclusive() {
	// "experience" top lands exactly on the activation line.
	let mut tracker = mounted();
	tracker.on_scroll(&snapshot_at(800 - i64::from(ACTIVATION_LINE)));
	assert_eq!(tracker.state().active_section(), Some("experience"));
	// One row higher and it has not crossed yet.
	tracker.on_scroll(&snapshot_at(800 - i64::from(ACTIVATION_LINE) - 1));
	assert_eq!(tracker.state().active_section(), Some("about"));
}

#[test]
fn downward_scroll_activation_is_monotonic() {
	let sections = section_map();
	let mut tracker = mounted();
	let mut last_order = 0usize;
	for offset in (0..=4400).step_by(25) {
		tracker.on_scroll(&snapshot_at(offset));
		let active = tracker.state().active_section();
		// Never dangling: any active id resolves in the section map.
		let order = active
			.map(|id| sections.iter().find(|s| s.id == id).expect("dangling id").order)
			.unwrap_or(0);
		assert!(order >= last_order, "order regressed at offset {offset}");
		last_order = order;
	}
	assert_eq!(tracker.state().active_section(), Some("contact"));
}

#[test]
fn no_section_in_view_leaves_active_none() {
	// All tops far below the activation line.
	let mut snapshot = ScrollSnapshot::new(0);
	for section in section_map() {
		snapshot.record_section_top(section.id, 500);
	}
	let mut tracker = mounted();
	tracker.on_scroll(&snapshot);
	assert_eq!(tracker.state().active_section(), None);
}

#[test]
fn unmounted_anchors_are_skipped() {
	// Only "projects" is mounted this tick; everything else is absent.
	let snapshot = ScrollSnapshot::new(1700).with_section_top("projects", -100);
	let mut tracker = mounted();
	tracker.on_scroll(&snapshot);
	assert_eq!(tracker.state().active_section(), Some("projects"));

	// An entirely empty snapshot is not an error either.
	tracker.on_scroll(&ScrollSnapshot::new(1700));
	assert_eq!(tracker.state().active_section(), None);
}

#[test]
fn negative_scroll_offsets_are_clamped() {
	let snapshot = ScrollSnapshot::new(-40);
	assert_eq!(snapshot.scroll_offset(), 0);
	let mut tracker = mounted();
	tracker.on_scroll(&snapshot);
	assert!(!tracker.state().scrolled_past_threshold());
}

#[test]
fn released_tracker_drops_scroll_events() {
	let mut tracker = mounted();
	tracker.on_scroll(&snapshot_at(850));
	let before = *tracker.state();

	tracker.release();
	tracker.on_scroll(&snapshot_at(3300));
	assert_eq!(*tracker.state(), before);

	// Releasing again is a safe no-op.
	tracker.release();
	assert!(!tracker.is_attached());
}

#[test]
fn double_attach_does_not_duplicate_updates() {
	let mut tracker = mounted();
	tracker.attach();
	assert!(tracker.is_attached());
	tracker.on_scroll(&snapshot_at(850));
	assert_eq!(tracker.state().active_section(), Some("experience"));

	// Release then re-attach resumes tracking.
	tracker.release();
	tracker.attach();
	tracker.on_scroll(&snapshot_at(2500));
	assert_eq!(tracker.state().active_section(), Some("projects"));
}

#[test]
fn toggle_then_select_ends_closed() {
	let mut tracker = mounted();
	tracker.toggle_menu();
	assert!(tracker.state().menu_open());
	let target = tracker.select_navigation_item("skills");
	assert_eq!(target, Some("skills"));
	assert!(!tracker.state().menu_open());
}

#[test]
fn select_while_closed_is_idempotent() {
	let mut tracker = mounted();
	assert!(!tracker.state().menu_open());
	tracker.select_navigation_item("contact");
	assert!(!tracker.state().menu_open());
}

#[test]
fn select_unknown_id_closes_menu_and_resolves_none() {
	let mut tracker = mounted();
	tracker.toggle_menu();
	assert_eq!(tracker.select_navigation_item("blog"), None);
	assert!(!tracker.state().menu_open());
}

#[test]
fn selection_does_not_touch_scroll_state() {
	let mut tracker = mounted();
	tracker.on_scroll(&snapshot_at(850));
	tracker.select_navigation_item("contact");
	// Active section only moves once the host scrolls and reports back.
	assert_eq!(tracker.state().active_section(), Some("experience"));
	tracker.on_scroll(&snapshot_at(4000));
	assert_eq!(tracker.state().active_section(), Some("contact"));
}
