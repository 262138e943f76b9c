//! Admin password cached in `sessionStorage` for the lifetime of the tab.

use web_sys::Storage;

const PASSWORD_KEY: &str = "portfolio-admin-password";

fn storage() -> Option<Storage> {
	web_sys::window()?.session_storage().ok().flatten()
}

pub fn load_password() -> Option<String> {
	storage()?
		.get_item(PASSWORD_KEY)
		.ok()
		.flatten()
		.filter(|p| !p.is_empty())
}

pub fn store_password(password: &str) {
	if let Some(s) = storage() {
		if s.set_item(PASSWORD_KEY, password).is_err() {
			log::warn!("session storage rejected the admin password");
		}
	}
}

pub fn clear_password() {
	if let Some(s) = storage() {
		let _ = s.remove_item(PASSWORD_KEY);
	}
}
