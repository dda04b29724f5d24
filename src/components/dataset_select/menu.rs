use crate::catalog::Label;

/// What a key press did to the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
	Pick(Label),
	Opened,
	Closed,
	Ignored,
}

/// Open/closed state of the dropdown menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Menu {
	open: bool,
}

impl Menu {
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Pressing the control, focusing it or typing into it.
	pub fn open(&mut self) {
		self.open = true;
	}

	/// Picking an option or leaving the control.
	pub fn close(&mut self) {
		self.open = false;
	}

	/// Enter picks the first visible option, but only while the menu is shown.
	pub fn key(&mut self, key: &str, visible: &[Label]) -> KeyOutcome {
		match key {
			"Enter" if self.open => match visible.first() {
				Some(first) => {
					self.close();
					KeyOutcome::Pick(first.clone())
				}
				None => KeyOutcome::Ignored,
			},
			"ArrowDown" if !self.open => {
				self.open();
				KeyOutcome::Opened
			}
			"Escape" if self.open => {
				self.close();
				KeyOutcome::Closed
			}
			_ => KeyOutcome::Ignored,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn labels() -> Vec<Label> {
		vec![Label::new("ALICE - 2021-01"), Label::new("BOB - 2021-03")]
	}

	#[test]
	fn enter_on_closed_menu_keeps_the_selection() {
		let mut menu = Menu::default();
		assert_eq!(menu.key("Enter", &labels()), KeyOutcome::Ignored);
		assert!(!menu.is_open());
	}

	#[test]
	fn enter_on_open_menu_picks_first_and_closes() {
		let mut menu = Menu::default();
		menu.open();
		assert_eq!(
			menu.key("Enter", &labels()),
			KeyOutcome::Pick(Label::new("ALICE - 2021-01"))
		);
		assert!(!menu.is_open());
	}

	#[test]
	fn enter_without_matches_does_nothing() {
		let mut menu = Menu::default();
		menu.open();
		assert_eq!(menu.key("Enter", &[]), KeyOutcome::Ignored);
		assert!(menu.is_open());
	}

	#[test]
	fn control_press_reopens_after_a_pick() {
		let mut menu = Menu::default();
		menu.open();
		menu.key("Enter", &labels());
		assert!(!menu.is_open());

		menu.open();
		assert!(menu.is_open());
	}

	#[test]
	fn arrow_down_reopens_after_escape() {
		let mut menu = Menu::default();
		menu.open();
		assert_eq!(menu.key("Escape", &labels()), KeyOutcome::Closed);
		assert!(!menu.is_open());

		assert_eq!(menu.key("ArrowDown", &labels()), KeyOutcome::Opened);
		assert!(menu.is_open());
	}

	#[test]
	fn other_keys_are_ignored() {
		let mut menu = Menu::default();
		menu.open();
		assert_eq!(menu.key("a", &labels()), KeyOutcome::Ignored);
		assert!(menu.is_open());
	}
}
