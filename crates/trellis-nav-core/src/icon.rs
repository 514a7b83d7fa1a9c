// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Icon identifiers used by navigation nodes and route descriptions.
//!
//! Icons are a closed set: configuration naming an icon outside of it is
//! rejected when the configuration is loaded, not when the icon is drawn.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use trellis_common_i18n::Direction;

use crate::error::NavError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconName {
	// Navigation & core UI
	Home,
	Dashboard,
	Menu,
	Settings,
	Search,

	// User management
	UserCircle,
	Profile,
	Users,
	UserList,
	UserAdd,
	UserChange,

	// Permissions & security
	Shield,
	Permission,
	Lock,
	Unlock,
	SignIn,
	SignOut,

	// Notifications & preferences
	Bell,
	BellRinging,
	Translate,
	Sun,
	Moon,
	Sliders,
	CreditCard,
	Chat,
	Info,

	// Actions
	Plus,
	Minus,
	Trash,
	Eye,
	Pencil,
	Printer,
	Check,
	Spinner,

	// Directional
	CaretLeft,
	CaretRight,
	CaretUp,
	CaretDown,
	ArrowLineLeft,
	ArrowLineRight,
}

impl IconName {
	pub const ALL: &'static [IconName] = &[
		IconName::Home,
		IconName::Dashboard,
		IconName::Menu,
		IconName::Settings,
		IconName::Search,
		IconName::UserCircle,
		IconName::Profile,
		IconName::Users,
		IconName::UserList,
		IconName::UserAdd,
		IconName::UserChange,
		IconName::Shield,
		IconName::Permission,
		IconName::Lock,
		IconName::Unlock,
		IconName::SignIn,
		IconName::SignOut,
		IconName::Bell,
		IconName::BellRinging,
		IconName::Translate,
		IconName::Sun,
		IconName::Moon,
		IconName::Sliders,
		IconName::CreditCard,
		IconName::Chat,
		IconName::Info,
		IconName::Plus,
		IconName::Minus,
		IconName::Trash,
		IconName::Eye,
		IconName::Pencil,
		IconName::Printer,
		IconName::Check,
		IconName::Spinner,
		IconName::CaretLeft,
		IconName::CaretRight,
		IconName::CaretUp,
		IconName::CaretDown,
		IconName::ArrowLineLeft,
		IconName::ArrowLineRight,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			IconName::Home => "Home",
			IconName::Dashboard => "Dashboard",
			IconName::Menu => "Menu",
			IconName::Settings => "Settings",
			IconName::Search => "Search",
			IconName::UserCircle => "UserCircle",
			IconName::Profile => "Profile",
			IconName::Users => "Users",
			IconName::UserList => "UserList",
			IconName::UserAdd => "UserAdd",
			IconName::UserChange => "UserChange",
			IconName::Shield => "Shield",
			IconName::Permission => "Permission",
			IconName::Lock => "Lock",
			IconName::Unlock => "Unlock",
			IconName::SignIn => "SignIn",
			IconName::SignOut => "SignOut",
			IconName::Bell => "Bell",
			IconName::BellRinging => "BellRinging",
			IconName::Translate => "Translate",
			IconName::Sun => "Sun",
			IconName::Moon => "Moon",
			IconName::Sliders => "Sliders",
			IconName::CreditCard => "CreditCard",
			IconName::Chat => "Chat",
			IconName::Info => "Info",
			IconName::Plus => "Plus",
			IconName::Minus => "Minus",
			IconName::Trash => "Trash",
			IconName::Eye => "Eye",
			IconName::Pencil => "Pencil",
			IconName::Printer => "Printer",
			IconName::Check => "Check",
			IconName::Spinner => "Spinner",
			IconName::CaretLeft => "CaretLeft",
			IconName::CaretRight => "CaretRight",
			IconName::CaretUp => "CaretUp",
			IconName::CaretDown => "CaretDown",
			IconName::ArrowLineLeft => "ArrowLineLeft",
			IconName::ArrowLineRight => "ArrowLineRight",
		}
	}

	/// Resolve a name as written in configuration.
	///
	/// Accepts canonical names (`Users`), component names with an `Icon`
	/// suffix (`UsersIcon`), icon-library names (`WindowsLogo`, `Gear`) and
	/// lower-case shorthand (`home`, `edit`).
	pub fn from_name(name: &str) -> Option<Self> {
		let name = name.trim();
		let base = match name.strip_suffix("Icon") {
			Some(stripped) if !stripped.is_empty() => stripped,
			_ => name,
		};
		Self::from_library_name(base).or_else(|| Self::from_alias(name))
	}

	fn from_library_name(name: &str) -> Option<Self> {
		let icon = match name {
			"Home" | "House" | "HouseLine" => IconName::Home,
			"Dashboard" | "WindowsLogo" => IconName::Dashboard,
			"Menu" | "SquaresFour" | "List" => IconName::Menu,
			"Settings" | "Gear" => IconName::Settings,
			"Search" | "MagnifyingGlass" | "ListMagnifyingGlass" => IconName::Search,
			"UserCircle" => IconName::UserCircle,
			"Profile" => IconName::Profile,
			"Users" => IconName::Users,
			"UserList" => IconName::UserList,
			"UserAdd" | "UserCirclePlus" => IconName::UserAdd,
			"UserChange" | "UserSwitch" => IconName::UserChange,
			"Shield" => IconName::Shield,
			"Permission" | "LockKey" => IconName::Permission,
			"Lock" => IconName::Lock,
			"Unlock" | "LockOpen" => IconName::Unlock,
			"SignIn" => IconName::SignIn,
			"SignOut" => IconName::SignOut,
			"Bell" => IconName::Bell,
			"BellRinging" => IconName::BellRinging,
			"Translate" => IconName::Translate,
			"Sun" => IconName::Sun,
			"Moon" => IconName::Moon,
			"Sliders" => IconName::Sliders,
			"CreditCard" => IconName::CreditCard,
			"Chat" | "ChatText" => IconName::Chat,
			"Info" => IconName::Info,
			"Plus" => IconName::Plus,
			"Minus" => IconName::Minus,
			"Trash" => IconName::Trash,
			"Eye" => IconName::Eye,
			"Pencil" | "PencilSimple" => IconName::Pencil,
			"Printer" => IconName::Printer,
			"Check" | "CheckCircle" => IconName::Check,
			"Spinner" => IconName::Spinner,
			"CaretLeft" => IconName::CaretLeft,
			"CaretRight" => IconName::CaretRight,
			"CaretUp" => IconName::CaretUp,
			"CaretDown" => IconName::CaretDown,
			"ArrowLineLeft" => IconName::ArrowLineLeft,
			"ArrowLineRight" => IconName::ArrowLineRight,
			_ => return None,
		};
		Some(icon)
	}

	fn from_alias(alias: &str) -> Option<Self> {
		let icon = match alias {
			"home" => IconName::Home,
			"dashboard" => IconName::Dashboard,
			"menu" | "hamburger" => IconName::Menu,
			"settings" => IconName::Settings,
			"search" => IconName::Search,
			"profile" => IconName::Profile,
			"users" => IconName::Users,
			"add" => IconName::Plus,
			"remove" => IconName::Minus,
			"delete" => IconName::Trash,
			"edit" => IconName::Pencil,
			"success" => IconName::Check,
			"info" => IconName::Info,
			"loading" => IconName::Spinner,
			"message" => IconName::Chat,
			"notification" => IconName::Bell,
			"light" => IconName::Sun,
			"dark" => IconName::Moon,
			"back" => IconName::CaretLeft,
			"forward" => IconName::CaretRight,
			"up" => IconName::CaretUp,
			"down" => IconName::CaretDown,
			_ => return None,
		};
		Some(icon)
	}

	/// Whether the icon points along the reading direction.
	pub fn flips_in_rtl(&self) -> bool {
		self.mirrored().is_some()
	}

	fn mirrored(&self) -> Option<Self> {
		match self {
			IconName::CaretLeft => Some(IconName::CaretRight),
			IconName::CaretRight => Some(IconName::CaretLeft),
			IconName::ArrowLineLeft => Some(IconName::ArrowLineRight),
			IconName::ArrowLineRight => Some(IconName::ArrowLineLeft),
			IconName::SignIn => Some(IconName::SignOut),
			IconName::SignOut => Some(IconName::SignIn),
			_ => None,
		}
	}

	/// The icon to draw for a given text direction.
	pub fn for_direction(self, direction: Direction) -> Self {
		match (direction, self.mirrored()) {
			(Direction::Rtl, Some(mirrored)) => mirrored,
			_ => self,
		}
	}
}

impl fmt::Display for IconName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for IconName {
	type Err = NavError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_name(s).ok_or_else(|| NavError::UnknownIcon(s.to_string()))
	}
}

impl Serialize for IconName {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for IconName {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		raw.parse().map_err(de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_canonical_names_round_trip() {
		for icon in IconName::ALL {
			assert_eq!(IconName::from_name(icon.as_str()), Some(*icon), "{icon}");
		}
	}

	#[test]
	fn test_component_suffix_is_accepted() {
		assert_eq!(IconName::from_name("UsersIcon"), Some(IconName::Users));
		assert_eq!(IconName::from_name("GearIcon"), Some(IconName::Settings));
		assert_eq!(IconName::from_name("WindowsLogoIcon"), Some(IconName::Dashboard));
		assert_eq!(IconName::from_name("ShieldIcon"), Some(IconName::Shield));
	}

	#[test]
	fn test_library_names() {
		assert_eq!(IconName::from_name("HouseLine"), Some(IconName::Home));
		assert_eq!(IconName::from_name("LockKey"), Some(IconName::Permission));
		assert_eq!(IconName::from_name("UserSwitch"), Some(IconName::UserChange));
	}

	#[test]
	fn test_aliases() {
		assert_eq!(IconName::from_name("home"), Some(IconName::Home));
		assert_eq!(IconName::from_name("hamburger"), Some(IconName::Menu));
		assert_eq!(IconName::from_name("edit"), Some(IconName::Pencil));
		assert_eq!(IconName::from_name("dark"), Some(IconName::Moon));
	}

	#[test]
	fn test_unknown_names() {
		assert_eq!(IconName::from_name("Icon"), None);
		assert_eq!(IconName::from_name("Rocket"), None);
		let err = "Rocket".parse::<IconName>().unwrap_err();
		assert!(matches!(err, NavError::UnknownIcon(name) if name == "Rocket"));
	}

	#[test]
	fn test_rtl_mirroring() {
		assert_eq!(IconName::CaretLeft.for_direction(Direction::Rtl), IconName::CaretRight);
		assert_eq!(IconName::ArrowLineRight.for_direction(Direction::Rtl), IconName::ArrowLineLeft);
		assert_eq!(IconName::SignIn.for_direction(Direction::Rtl), IconName::SignOut);
		assert_eq!(IconName::CaretLeft.for_direction(Direction::Ltr), IconName::CaretLeft);
		assert_eq!(IconName::Home.for_direction(Direction::Rtl), IconName::Home);
		assert!(!IconName::CaretUp.flips_in_rtl());
	}

	#[test]
	fn test_serde_uses_canonical_name() {
		let json = serde_json::to_string(&IconName::Permission).unwrap();
		assert_eq!(json, "\"Permission\"");
		let parsed: IconName = serde_json::from_str("\"LockKeyIcon\"").unwrap();
		assert_eq!(parsed, IconName::Permission);
		assert!(serde_json::from_str::<IconName>("\"Nope\"").is_err());
	}

	proptest! {
		/// Mirroring twice under RTL returns the original icon.
		#[test]
		fn rtl_mirroring_is_an_involution(index in 0..IconName::ALL.len()) {
			let icon = IconName::ALL[index];
			let twice = icon.for_direction(Direction::Rtl).for_direction(Direction::Rtl);
			prop_assert_eq!(twice, icon);
		}
	}
}
