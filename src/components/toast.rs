use std::time::Duration;

use leptos::prelude::*;

pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
	Success,
	Error,
}

impl ToastKind {
	fn class(self) -> &'static str {
		match self {
			ToastKind::Success => "toast toast-success",
			ToastKind::Error => "toast toast-error",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
	pub id: u64,
	pub kind: ToastKind,
	pub message: String,
}

/// Visible notifications, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
	items: Vec<Toast>,
	next_id: u64,
}

impl ToastQueue {
	pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
		let id = self.next_id;
		self.next_id += 1;
		self.items.push(Toast { id, kind, message });
		id
	}

	pub fn dismiss(&mut self, id: u64) {
		self.items.retain(|t| t.id != id);
	}

	pub fn items(&self) -> &[Toast] {
		&self.items
	}
}

/// App-wide toast handle, provided as context by `App`.
#[derive(Clone, Copy)]
pub struct Toasts {
	queue: RwSignal<ToastQueue>,
}

impl Toasts {
	pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
		let message = message.into();
		match kind {
			ToastKind::Error => log::error!("{}", message),
			ToastKind::Success => log::info!("{}", message),
		}
		let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
			return;
		};
		let toasts = *self;
		set_timeout(move || toasts.dismiss(id), TOAST_DURATION);
	}

	pub fn success(&self, message: impl Into<String>) {
		self.push(ToastKind::Success, message);
	}

	pub fn error(&self, message: impl Into<String>) {
		self.push(ToastKind::Error, message);
	}

	pub fn dismiss(&self, id: u64) {
		// The owner may be gone by the time the timer fires.
		let _ = self.queue.try_update(|q| q.dismiss(id));
	}
}

pub fn provide_toasts() -> Toasts {
	let toasts = Toasts {
		queue: RwSignal::new(ToastQueue::default()),
	};
	provide_context(toasts);
	toasts
}

pub fn use_toasts() -> Toasts {
	use_context::<Toasts>().unwrap_or_else(|| {
		log::warn!("toasts used outside App; creating a local queue");
		provide_toasts()
	})
}

#[component]
pub fn ToastHost() -> impl IntoView {
	let toasts = use_toasts();

	view! {
		<div class="toast-host" role="status" aria-live="polite">
			{move || {
				toasts
					.queue
					.with(|q| q.items().to_vec())
					.into_iter()
					.map(|t| {
						let id = t.id;
						view! {
							<div class=t.kind.class() on:click=move |_| toasts.dismiss(id)>
								{t.message}
							</div>
						}
					})
					.collect_view()
			}}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn queue_assigns_ids_and_dismisses() {
		let mut q = ToastQueue::default();
		let a = q.push(ToastKind::Error, "Upload failed".into());
		let b = q.push(ToastKind::Success, "Saved".into());
		assert_ne!(a, b);
		assert_eq!(q.items().len(), 2);

		q.dismiss(a);
		assert_eq!(q.items().len(), 1);
		assert_eq!(q.items()[0].message, "Saved");

		q.dismiss(a);
		assert_eq!(q.items().len(), 1);
		assert!(q.push(ToastKind::Error, "x".into()) > b);
	}
}
