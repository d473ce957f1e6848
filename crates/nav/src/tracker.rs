//! Viewport scroll tracking and navigation state ownership.

#[cfg(test)]
mod tests;

use tracing::{debug, trace};

use crate::disclosure::Disclosure;
use crate::section::{Section, SectionId};
use crate::snapshot::ScrollSnapshot;

/// Scroll offset beyond which the navbar switches to its elevated
/// styling. The boundary value itself does not qualify.
pub const SCROLL_THRESHOLD: u32 = 20;

/// Viewport-relative offset at which a section counts as "in view". A
/// section is active once its top has crossed this line; the lowest
/// such section wins.
pub const ACTIVATION_LINE: i32 = 120;

/// The single mutable state object the renderer depends on.
///
/// `active_section` and `scrolled_past_threshold` are written only by
/// the scroll tracker; `menu` only by the disclosure transitions.
/// Everything downstream reads this through shared references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
	active_section: Option<SectionId>,
	scrolled_past_threshold: bool,
	menu: Disclosure,
}

impl NavigationState {
	/// Id of the section currently in view, if any has crossed the
	/// activation line.
	pub fn active_section(&self) -> Option<SectionId> {
		self.active_section
	}

	/// Whether the viewport has scrolled past [`SCROLL_THRESHOLD`].
	pub fn scrolled_past_threshold(&self) -> bool {
		self.scrolled_past_threshold
	}

	/// Whether the compact navigation panel is expanded.
	pub fn menu_open(&self) -> bool {
		self.menu.is_open()
	}
}

/// Determines the active section for a scroll snapshot.
///
/// Sections are scanned in **reverse document order**: the first
/// section (bottom-most first) whose top row is at or above
/// [`ACTIVATION_LINE`] wins. Scanning bottom-to-top picks the *last*
/// section whose top has crossed the line (the lowest section the
/// user has scrolled into) rather than the first one ever crossed.
/// Anchors missing from the snapshot are not candidates this tick.
pub fn active_section(snapshot: &ScrollSnapshot, sections: &[Section]) -> Option<SectionId> {
	for section in sections.iter().rev() {
		let Some(top) = snapshot.section_top(section.id) else {
			continue;
		};
		if top <= ACTIVATION_LINE {
			return Some(section.id);
		}
	}
	None
}

/// The scroll listener as an explicitly owned resource.
///
/// Attach and release are idempotent: attaching twice never produces
/// duplicate state updates, releasing twice is a no-op, and a released
/// subscription drops every scroll event delivered after teardown.
#[derive(Debug)]
struct ScrollSubscription {
	attached: bool,
}

impl ScrollSubscription {
	fn attach(&mut self) {
		if self.attached {
			debug!("scroll subscription already attached, ignoring");
			return;
		}
		self.attached = true;
	}

	fn release(&mut self) {
		if !self.attached {
			debug!("scroll subscription already released, ignoring");
			return;
		}
		self.attached = false;
	}
}

/// Owns [`NavigationState`] and keeps it in agreement with the
/// viewport.
///
/// The tracker is created at mount with the section map and an
/// attached scroll subscription, consumes one [`ScrollSnapshot`] per
/// scroll event, and exposes the disclosure entry points the renderer
/// wires to user input. `active_section` is always either `None` or an
/// id present in the section map.
#[derive(Debug)]
pub struct NavTracker {
	sections: Vec<Section>,
	subscription: ScrollSubscription,
	state: NavigationState,
}

impl NavTracker {
	/// Mounts the tracker over the given section map and attaches its
	/// scroll subscription exactly once.
	pub fn mount(sections: Vec<Section>) -> Self {
		let mut subscription = ScrollSubscription { attached: false };
		subscription.attach();
		Self {
			sections,
			subscription,
			state: NavigationState::default(),
		}
	}

	/// Re-attaches the scroll subscription. Safe no-op while already
	/// attached.
	pub fn attach(&mut self) {
		self.subscription.attach();
	}

	/// Releases the scroll subscription. Scroll events delivered after
	/// this are dropped without touching the state. Safe no-op when
	/// already released.
	pub fn release(&mut self) {
		self.subscription.release();
	}

	/// Whether the scroll subscription is currently attached.
	pub fn is_attached(&self) -> bool {
		self.subscription.attached
	}

	/// Handles one scroll event. Side effects only.
	pub fn on_scroll(&mut self, snapshot: &ScrollSnapshot) {
		if !self.subscription.attached {
			trace!("scroll event after release, dropping");
			return;
		}

		self.state.scrolled_past_threshold = snapshot.scroll_offset() > SCROLL_THRESHOLD;

		let active = active_section(snapshot, &self.sections);
		if active != self.state.active_section {
			trace!(
				from = self.state.active_section.unwrap_or("-"),
				to = active.unwrap_or("-"),
				offset = snapshot.scroll_offset(),
				"active section changed"
			);
			self.state.active_section = active;
		}
	}

	/// Flips the compact menu open or closed.
	pub fn toggle_menu(&mut self) {
		self.state.menu = self.state.menu.toggled();
		debug!(open = self.state.menu.is_open(), "menu toggled");
	}

	/// Handles selection of a navigation item: closes the compact menu
	/// unconditionally and resolves the target section for the host to
	/// scroll to. Unknown ids close the menu and resolve to `None`.
	pub fn select_navigation_item(&mut self, id: &str) -> Option<SectionId> {
		self.state.menu = self.state.menu.after_select();
		self.sections.iter().find(|s| s.id == id).map(|s| s.id)
	}

	/// Read-only view of the navigation state.
	pub fn state(&self) -> &NavigationState {
		&self.state
	}

	/// The section map in document order.
	pub fn sections(&self) -> &[Section] {
		&self.sections
	}
}
