use std::io::Write as _;

use super::*;

#[test]
fn bundled_portfolio_parses() {
	let registry = Registry::bundled().unwrap();
	assert_eq!(registry.profile.name, "Parth Pahanpate");
	assert_eq!(registry.experience.len(), 2);
	assert_eq!(registry.projects.len(), 3);
	assert_eq!(registry.skills.len(), 2);
	assert_eq!(registry.certifications.len(), 5);
	assert_eq!(registry.languages.len(), 4);
}

#[test]
fn bundled_records_keep_their_fields() {
	let registry = Registry::bundled().unwrap();

	let intern = &registry.experience[1];
	assert_eq!(intern.role, "Engineering Intern");
	assert_eq!(intern.company, "CIIIT Centre by TATA Technologies");
	assert_eq!(intern.points.len(), 4);

	let project = &registry.projects[0];
	assert_eq!(project.tags, vec!["Electrical", "IoT", "Arduino"]);
	assert!(project.repo.is_some());
	assert!(project.link.is_none());

	assert_eq!(registry.education.field, "Electrical Engineering");
	assert_eq!(registry.about.highlights.len(), 4);
}

#[test]
fn proficiency_label_native_at_level_100() {
	let registry = Registry::bundled().unwrap();
	let labels: Vec<_> = registry
		.languages
		.iter()
		.map(|l| (l.name.as_str(), l.proficiency_label()))
		.collect();
	assert_eq!(
		labels,
		vec![
			("English", "Fluent"),
			("Hindi", "Fluent"),
			("Marathi", "Native"),
			("Spanish", "Fluent"),
		]
	);
}

#[test]
fn invalid_toml_is_a_parse_error() {
	let err = Registry::parse("profile = 3").unwrap_err();
	assert!(matches!(err, ContentError::Toml(_)));
}

#[test]
fn language_level_above_100_is_rejected() {
	let mut doc = DEFAULT_PORTFOLIO.to_string();
	doc = doc.replace("level = 95", "level = 950");
	let err = Registry::parse(&doc).unwrap_err();
	match err {
		ContentError::InvalidLanguageLevel { name, level } => {
			assert_eq!(name, "Hindi");
			assert_eq!(level, 950);
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn empty_about_is_rejected() {
	let mut registry = Registry::bundled().unwrap();
	registry.about.paragraphs.clear();
	let err = registry.validate().unwrap_err();
	assert!(matches!(err, ContentError::Empty("about paragraph")));
}

#[test]
fn load_reads_a_file_and_reports_the_path_on_failure() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(DEFAULT_PORTFOLIO.as_bytes()).unwrap();
	let registry = Registry::load(file.path()).unwrap();
	assert_eq!(registry.footer.name, "Parth Pahanpate");

	let err = Registry::load("/nonexistent/portfolio.toml").unwrap_err();
	match err {
		ContentError::Io { path, .. } => {
			assert_eq!(path, std::path::PathBuf::from("/nonexistent/portfolio.toml"));
		}
		other => panic!("unexpected error: {other}"),
	}
}
