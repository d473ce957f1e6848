//! Application state and the event loop.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{
	self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use folio_content::Registry;
use folio_nav::{NavTracker, section_map};

use crate::document::DocumentLayout;
use crate::print;
use crate::render;
use crate::theme::Theme;

/// Rows taken by the navigation bar above the body viewport.
pub const NAVBAR_HEIGHT: u16 = 1;
/// Rows taken by the status line below the body viewport.
pub const STATUS_HEIGHT: u16 = 1;

/// Transient status-line message.
pub struct Message {
	pub text: String,
	pub kind: MessageKind,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
	Info,
	Error,
}

pub struct App {
	pub registry: Registry,
	pub theme: &'static Theme,
	pub tracker: NavTracker,
	pub layout: DocumentLayout,
	/// Document row currently at the top of the body viewport.
	pub scroll: usize,
	pub width: u16,
	pub body_height: usize,
	/// Highlighted row inside the open compact menu. Frontend state
	/// only; the disclosure machine itself is two-state.
	pub menu_cursor: usize,
	pub message: Option<Message>,
}

impl App {
	pub fn new(registry: Registry, theme: &'static Theme, width: u16, height: u16) -> Self {
		let tracker = NavTracker::mount(section_map());
		let layout = DocumentLayout::compose(&registry, tracker.sections(), width, theme);
		let mut app = Self {
			registry,
			theme,
			tracker,
			layout,
			scroll: 0,
			width,
			body_height: body_height(height),
			menu_cursor: 0,
			message: None,
		};
		app.sync_nav();
		app
	}

	/// Feeds the tracker the current viewport geometry. Called after
	/// every scroll mutation and relayout so the navigation state
	/// never lags the screen.
	fn sync_nav(&mut self) {
		let snapshot = self.layout.snapshot(self.scroll);
		self.tracker.on_scroll(&snapshot);
	}

	pub fn handle_resize(&mut self, width: u16, height: u16) {
		if width != self.width {
			self.width = width;
			self.layout =
				DocumentLayout::compose(&self.registry, self.tracker.sections(), width, self.theme);
			debug!(width, height = self.layout.height(), "document recomposed");
		}
		self.body_height = body_height(height);
		self.scroll = self.scroll.min(self.layout.max_scroll(self.body_height));
		self.sync_nav();
	}

	fn scroll_to(&mut self, row: usize) {
		self.scroll = row.min(self.layout.max_scroll(self.body_height));
		self.sync_nav();
	}

	fn scroll_by(&mut self, delta: i64) {
		let target = (self.scroll as i64 + delta).max(0) as usize;
		self.scroll_to(target);
	}

	/// Anchor navigation: close the menu, then scroll the target's
	/// heading row to the viewport top. The follow-up snapshot makes
	/// the tracker agree with the jump.
	fn select_section(&mut self, id: &str) {
		let Some(target) = self.tracker.select_navigation_item(id) else {
			return;
		};
		if let Some(row) = self.layout.section_row(target) {
			debug!(section = target, row, "navigating to section");
			self.scroll_to(row);
		}
	}

	fn select_section_at(&mut self, index: usize) {
		if let Some(section) = self.tracker.sections().get(index) {
			let id = section.id;
			self.select_section(id);
		}
	}

	/// Jumps to the section before or after the active one.
	fn cycle_section(&mut self, forward: bool) {
		let sections = self.tracker.sections();
		let current = self
			.tracker
			.state()
			.active_section()
			.and_then(|id| sections.iter().find(|s| s.id == id))
			.map(|s| s.order);
		let next = match (current, forward) {
			(Some(order), true) => (order + 1).min(sections.len().saturating_sub(1)),
			(Some(order), false) => order.saturating_sub(1),
			(None, _) => 0,
		};
		self.select_section_at(next);
	}

	fn open_menu(&mut self) {
		// Start the cursor on the active section so Enter is a no-op jump.
		let sections = self.tracker.sections();
		self.menu_cursor = self
			.tracker
			.state()
			.active_section()
			.and_then(|id| sections.iter().find(|s| s.id == id))
			.map(|s| s.order)
			.unwrap_or(0);
		self.tracker.toggle_menu();
	}

	fn request_print(&mut self) {
		let text = print::document_text(&self.layout);
		match print::spool(text) {
			Ok(()) => self.show_message("Portfolio handed to the system printer"),
			Err(e) => self.show_error(format!("Print failed: {e}")),
		}
	}

	pub fn show_message(&mut self, text: impl Into<String>) {
		self.message = Some(Message {
			text: text.into(),
			kind: MessageKind::Info,
		});
	}

	pub fn show_error(&mut self, text: impl Into<String>) {
		self.message = Some(Message {
			text: text.into(),
			kind: MessageKind::Error,
		});
	}

	/// Handles one key press. Returns true to quit.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		self.message = None;

		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return true;
		}

		if self.tracker.state().menu_open() {
			return self.handle_menu_key(key);
		}

		match key.code {
			KeyCode::Char('q') => return true,
			KeyCode::Char('m') => self.open_menu(),
			KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
			KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
			KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(self.body_height as i64),
			KeyCode::PageUp => self.scroll_by(-(self.body_height as i64)),
			KeyCode::Char('d') => self.scroll_by((self.body_height / 2) as i64),
			KeyCode::Char('u') => self.scroll_by(-((self.body_height / 2) as i64)),
			KeyCode::Char('g') | KeyCode::Home => self.scroll_to(0),
			KeyCode::Char('G') | KeyCode::End => {
				self.scroll_to(self.layout.max_scroll(self.body_height));
			}
			KeyCode::Tab => self.cycle_section(true),
			KeyCode::BackTab => self.cycle_section(false),
			KeyCode::Char('p') => self.request_print(),
			KeyCode::Char(c @ '1'..='9') => {
				self.select_section_at(c as usize - '1' as usize);
			}
			_ => {}
		}
		false
	}

	/// Key handling while the compact menu is open.
	fn handle_menu_key(&mut self, key: KeyEvent) -> bool {
		let len = self.tracker.sections().len();
		match key.code {
			KeyCode::Char('q') => return true,
			KeyCode::Esc | KeyCode::Char('m') => self.tracker.toggle_menu(),
			KeyCode::Char('j') | KeyCode::Down => {
				self.menu_cursor = (self.menu_cursor + 1) % len.max(1);
			}
			KeyCode::Char('k') | KeyCode::Up => {
				self.menu_cursor = self.menu_cursor.checked_sub(1).unwrap_or(len.saturating_sub(1));
			}
			KeyCode::Enter => self.select_section_at(self.menu_cursor),
			KeyCode::Char(c @ '1'..='9') => {
				self.select_section_at(c as usize - '1' as usize);
			}
			_ => {}
		}
		false
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::ScrollDown => self.scroll_by(3),
			MouseEventKind::ScrollUp => self.scroll_by(-3),
			_ => {}
		}
	}
}

fn body_height(height: u16) -> usize {
	height.saturating_sub(NAVBAR_HEIGHT + STATUS_HEIGHT) as usize
}

/// Runs the page until the user quits.
///
/// One thread, one queue: every state mutation happens here in
/// response to a discrete event, and teardown releases the scroll
/// subscription before the terminal is restored.
pub fn run(app: &mut App, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
	loop {
		terminal.draw(|frame| render::render(app, frame))?;

		if !event::poll(Duration::from_millis(50))? {
			continue;
		}

		match event::read()? {
			Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
				if app.handle_key(key) {
					break;
				}
			}
			Event::Mouse(mouse) => app.handle_mouse(mouse),
			Event::Resize(width, height) => app.handle_resize(width, height),
			_ => {}
		}
	}

	app.tracker.release();
	Ok(())
}
