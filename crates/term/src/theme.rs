use ratatui::style::Color;

#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct UiColors {
	pub bg: Color,
	pub fg: Color,
	pub dim_fg: Color,
	pub heading_fg: Color,
	pub accent: Color,
	pub accent_alt: Color,
	pub chip_bg: Color,
	pub chip_fg: Color,
	pub quote_fg: Color,
	pub meter_fg: Color,
	pub meter_track_fg: Color,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct NavColors {
	pub bar_bg: Color,
	/// Bar background once the viewport scrolls past the threshold.
	pub bar_elevated_bg: Color,
	pub brand_fg: Color,
	pub link_fg: Color,
	pub link_active_fg: Color,
	pub panel_bg: Color,
	pub panel_fg: Color,
	pub panel_active_bg: Color,
	pub panel_active_fg: Color,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct StatusColors {
	pub bg: Color,
	pub fg: Color,
	pub dim_fg: Color,
	pub message_fg: Color,
	pub error_fg: Color,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct ThemeColors {
	pub ui: UiColors,
	pub nav: NavColors,
	pub status: StatusColors,
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct Theme {
	pub id: &'static str,
	pub name: &'static str,
	pub colors: ThemeColors,
}

/// Dark default, echoing the page's slate-and-blue palette.
pub static SLATE: Theme = Theme {
	id: "slate",
	name: "Slate",
	colors: ThemeColors {
		ui: UiColors {
			bg: Color::Rgb(0x0f, 0x17, 0x2a),
			fg: Color::Rgb(0xe2, 0xe8, 0xf0),
			dim_fg: Color::Rgb(0x94, 0xa3, 0xb8),
			heading_fg: Color::Rgb(0xf8, 0xfa, 0xfc),
			accent: Color::Rgb(0x60, 0xa5, 0xfa),
			accent_alt: Color::Rgb(0x81, 0x8c, 0xf8),
			chip_bg: Color::Rgb(0x1e, 0x29, 0x3b),
			chip_fg: Color::Rgb(0xcb, 0xd5, 0xe1),
			quote_fg: Color::Rgb(0xc7, 0xd2, 0xfe),
			meter_fg: Color::Rgb(0x60, 0xa5, 0xfa),
			meter_track_fg: Color::Rgb(0x33, 0x41, 0x55),
		},
		nav: NavColors {
			bar_bg: Color::Rgb(0x0f, 0x17, 0x2a),
			bar_elevated_bg: Color::Rgb(0x1e, 0x29, 0x3b),
			brand_fg: Color::Rgb(0x60, 0xa5, 0xfa),
			link_fg: Color::Rgb(0x94, 0xa3, 0xb8),
			link_active_fg: Color::Rgb(0x60, 0xa5, 0xfa),
			panel_bg: Color::Rgb(0x1e, 0x29, 0x3b),
			panel_fg: Color::Rgb(0xcb, 0xd5, 0xe1),
			panel_active_bg: Color::Rgb(0x2b, 0x3a, 0x55),
			panel_active_fg: Color::Rgb(0x93, 0xc5, 0xfd),
		},
		status: StatusColors {
			bg: Color::Rgb(0x1e, 0x29, 0x3b),
			fg: Color::Rgb(0xcb, 0xd5, 0xe1),
			dim_fg: Color::Rgb(0x64, 0x74, 0x8b),
			message_fg: Color::Rgb(0x86, 0xef, 0xac),
			error_fg: Color::Rgb(0xfc, 0xa5, 0xa5),
		},
	},
};

/// Light scheme close to the page's printed look.
pub static PAPER: Theme = Theme {
	id: "paper",
	name: "Paper",
	colors: ThemeColors {
		ui: UiColors {
			bg: Color::Rgb(0xf8, 0xfa, 0xfc),
			fg: Color::Rgb(0x33, 0x41, 0x55),
			dim_fg: Color::Rgb(0x64, 0x74, 0x8b),
			heading_fg: Color::Rgb(0x0f, 0x17, 0x2a),
			accent: Color::Rgb(0x25, 0x63, 0xeb),
			accent_alt: Color::Rgb(0x4f, 0x46, 0xe5),
			chip_bg: Color::Rgb(0xe2, 0xe8, 0xf0),
			chip_fg: Color::Rgb(0x33, 0x41, 0x55),
			quote_fg: Color::Rgb(0x1e, 0x3a, 0x8a),
			meter_fg: Color::Rgb(0x25, 0x63, 0xeb),
			meter_track_fg: Color::Rgb(0xcb, 0xd5, 0xe1),
		},
		nav: NavColors {
			bar_bg: Color::Rgb(0xf8, 0xfa, 0xfc),
			bar_elevated_bg: Color::Rgb(0xe2, 0xe8, 0xf0),
			brand_fg: Color::Rgb(0x25, 0x63, 0xeb),
			link_fg: Color::Rgb(0x64, 0x74, 0x8b),
			link_active_fg: Color::Rgb(0x25, 0x63, 0xeb),
			panel_bg: Color::Rgb(0xe2, 0xe8, 0xf0),
			panel_fg: Color::Rgb(0x33, 0x41, 0x55),
			panel_active_bg: Color::Rgb(0xbf, 0xdb, 0xfe),
			panel_active_fg: Color::Rgb(0x1d, 0x4e, 0xd8),
		},
		status: StatusColors {
			bg: Color::Rgb(0xe2, 0xe8, 0xf0),
			fg: Color::Rgb(0x33, 0x41, 0x55),
			dim_fg: Color::Rgb(0x94, 0xa3, 0xb8),
			message_fg: Color::Rgb(0x15, 0x80, 0x3d),
			error_fg: Color::Rgb(0xb9, 0x1c, 0x1c),
		},
	},
};

/// Looks up a theme by id.
pub fn get_theme(id: &str) -> Option<&'static Theme> {
	match id {
		"slate" => Some(&SLATE),
		"paper" => Some(&PAPER),
		_ => None,
	}
}

/// Ids of all built-in themes, for error messages.
pub fn theme_ids() -> &'static [&'static str] {
	&["slate", "paper"]
}
