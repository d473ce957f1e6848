//! Section identity and the navigation section map.

/// Identifier of an anchorable section. Ids are unique and stable for
/// the process lifetime.
pub type SectionId = &'static str;

/// A named, anchorable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
	/// Anchor id, e.g. `"experience"`.
	pub id: SectionId,
	/// Label shown in the navigation bar.
	pub display_name: &'static str,
	/// Position in the navigation, matching top-to-bottom document order.
	pub order: usize,
}

/// The hand-authored section list, top to bottom.
const NAV_SECTIONS: [(SectionId, &str); 6] = [
	("about", "About"),
	("experience", "Experience"),
	("projects", "Projects"),
	("skills", "Skills"),
	("education", "Education"),
	("contact", "Contact"),
];

/// Builds the ordered section list consumed by both the navigation bar
/// and the scroll tracker.
///
/// Always returns forward/document order; the tracker reverses it
/// itself when scanning for the active section.
pub fn section_map() -> Vec<Section> {
	NAV_SECTIONS
		.iter()
		.enumerate()
		.map(|(order, &(id, display_name))| Section {
			id,
			display_name,
			order,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn map_is_in_document_order() {
		let sections = section_map();
		assert_eq!(sections.len(), 6);
		assert_eq!(sections[0].id, "about");
		assert_eq!(sections[5].id, "contact");
		for (i, section) in sections.iter().enumerate() {
			assert_eq!(section.order, i);
		}
	}

	#[test]
	fn ids_are_unique() {
		let sections = section_map();
		for a in &sections {
			let count = sections.iter().filter(|b| b.id == a.id).count();
			assert_eq!(count, 1, "duplicate id {}", a.id);
		}
	}
}
