use super::*;
use folio_content::Registry;
use folio_nav::{NavTracker, section_map};

use crate::theme::SLATE;

fn layout_at(width: u16) -> DocumentLayout {
	let registry = Registry::bundled().unwrap();
	DocumentLayout::compose(&registry, &section_map(), width, &SLATE)
}

#[test]
fn all_sections_are_anchored_in_order() {
	let layout = layout_at(100);
	let anchors: Vec<_> = layout.section_rows().iter().map(|(id, _)| *id).collect();
	let expected: Vec<_> = section_map().iter().map(|s| s.id).collect();
	assert_eq!(anchors, expected);

	let rows: Vec<_> = layout.section_rows().iter().map(|(_, row)| *row).collect();
	for pair in rows.windows(2) {
		assert!(pair[0] < pair[1], "section rows not strictly increasing");
	}
}

#[test]
fn hero_precedes_the_first_section() {
	let layout = layout_at(100);
	let first = layout.section_row("about").unwrap();
	assert!(first > 0, "hero should occupy rows before the first anchor");
}

#[test]
fn narrow_width_keeps_anchor_order() {
	let wide = layout_at(120);
	let narrow = layout_at(48);
	let wide_ids: Vec<_> = wide.section_rows().iter().map(|(id, _)| *id).collect();
	let narrow_ids: Vec<_> = narrow.section_rows().iter().map(|(id, _)| *id).collect();
	assert_eq!(wide_ids, narrow_ids);
	// Narrower text wraps onto more rows.
	assert!(narrow.height() >= wide.height());
}

#[test]
fn snapshot_offsets_are_viewport_relative_pixels() {
	let layout = layout_at(100);
	let row = layout.section_row("projects").unwrap();
	let snapshot = layout.snapshot(row + 40);
	assert_eq!(snapshot.section_top("projects"), Some(-40 * CELL_PX as i32));
	assert_eq!(snapshot.scroll_offset(), ((row + 40) as i64 * CELL_PX) as u32);
}

#[test]
fn threshold_flag_follows_pixel_offset() {
	// One row is 16 px, still inside the 20 px threshold; two rows are
	// past it.
	let layout = layout_at(100);
	let mut tracker = NavTracker::mount(section_map());
	tracker.on_scroll(&layout.snapshot(1));
	assert!(!tracker.state().scrolled_past_threshold());
	tracker.on_scroll(&layout.snapshot(2));
	assert!(tracker.state().scrolled_past_threshold());
}

#[test]
fn anchor_scrolling_activates_the_target_section() {
	let layout = layout_at(100);
	let mut tracker = NavTracker::mount(section_map());
	for section in section_map() {
		let row = layout.section_row(section.id).unwrap();
		tracker.on_scroll(&layout.snapshot(row));
		assert_eq!(tracker.state().active_section(), Some(section.id));
	}
}

#[test]
fn unscrolled_viewport_has_no_active_section() {
	// The hero fills the top of the page, so no section heading has
	// crossed the activation line yet.
	let layout = layout_at(100);
	let mut tracker = NavTracker::mount(section_map());
	tracker.on_scroll(&layout.snapshot(0));
	assert_eq!(tracker.state().active_section(), None);
	assert!(!tracker.state().scrolled_past_threshold());
}

#[test]
fn max_scroll_accounts_for_viewport_height() {
	let layout = layout_at(100);
	assert_eq!(layout.max_scroll(layout.height()), 0);
	assert_eq!(layout.max_scroll(10), layout.height() - 10);
	assert_eq!(layout.max_scroll(layout.height() + 50), 0);
}

#[test]
fn rows_fit_the_requested_width() {
	let layout = layout_at(60);
	for line in layout.lines() {
		let width: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
		assert!(width <= 60, "row wider than the terminal: {width}");
	}
}
