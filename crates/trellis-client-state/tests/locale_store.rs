// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale store behaviour across suspension points of the cookie write.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;
use trellis_client_state::{
	CookieWriteError, DocumentAttributes, InMemoryCookieJar, LocaleCookieStore, LocaleStore,
};
use trellis_common_i18n::{CookieOptions, Direction, LocaleCatalog, LocaleCookie, LOCALE_COOKIE_NAME};

/// Holds every write until the test releases the gate for its value.
#[derive(Default)]
struct GatedJar {
	jar: InMemoryCookieJar,
	gates: Mutex<HashMap<String, Arc<Notify>>>,
	waiting: AtomicUsize,
}

impl GatedJar {
	fn gate(&self, value: &str) -> Arc<Notify> {
		self.gates
			.lock()
			.entry(value.to_string())
			.or_insert_with(|| Arc::new(Notify::new()))
			.clone()
	}

	fn release(&self, value: &str) {
		self.gate(value).notify_one();
	}

	async fn wait_for_writers(&self, count: usize) {
		while self.waiting.load(Ordering::SeqCst) < count {
			tokio::task::yield_now().await;
		}
	}
}

#[async_trait]
impl LocaleCookieStore for GatedJar {
	fn read(&self, name: &str) -> Option<String> {
		self.jar.read(name)
	}

	async fn write(&self, cookie: &LocaleCookie) -> Result<(), CookieWriteError> {
		let gate = self.gate(cookie.value());
		self.waiting.fetch_add(1, Ordering::SeqCst);
		gate.notified().await;
		self.waiting.fetch_sub(1, Ordering::SeqCst);
		self.jar.write(cookie).await
	}
}

fn catalog() -> Arc<LocaleCatalog> {
	Arc::new(LocaleCatalog::builtin())
}

#[tokio::test]
async fn stalled_write_keeps_store_changing() {
	let jar = Arc::new(GatedJar::default());
	let store = LocaleStore::new(catalog(), jar.clone(), Some("en"));

	let task = {
		let store = store.clone();
		tokio::spawn(async move { store.set_locale("ar").await })
	};
	jar.wait_for_writers(1).await;

	let during = store.snapshot();
	assert!(during.is_changing);
	assert_eq!(during.locale, "en");
	assert_eq!(during.direction, Direction::Ltr);

	jar.release("ar");
	task.await.unwrap().unwrap();

	let after = store.snapshot();
	assert!(!after.is_changing);
	assert_eq!(after.locale, "ar");
	assert_eq!(after.direction, Direction::Rtl);
}

#[tokio::test]
async fn last_completed_write_wins() {
	let jar = Arc::new(GatedJar::default());
	let store = LocaleStore::new(catalog(), jar.clone(), Some("en"));
	let mut rx = store.subscribe();

	let french = {
		let store = store.clone();
		tokio::spawn(async move { store.set_locale("fr").await })
	};
	let arabic = {
		let store = store.clone();
		tokio::spawn(async move { store.set_locale("ar").await })
	};
	jar.wait_for_writers(2).await;

	jar.release("ar");
	arabic.await.unwrap().unwrap();
	// The earlier call is still in flight
	assert!(store.is_changing());
	assert_eq!(store.locale(), "ar");

	jar.release("fr");
	french.await.unwrap().unwrap();

	let snapshot = store.snapshot();
	assert_eq!(snapshot.locale, "fr");
	assert_eq!(snapshot.direction, Direction::Ltr);
	assert!(!snapshot.is_changing);

	let first = rx.recv().await.unwrap();
	let second = rx.recv().await.unwrap();
	assert_eq!((first.previous_locale.as_str(), first.locale.as_str()), ("en", "ar"));
	assert_eq!((second.previous_locale.as_str(), second.locale.as_str()), ("ar", "fr"));
}

#[tokio::test]
async fn document_attributes_follow_changes() {
	let jar = Arc::new(InMemoryCookieJar::new());
	let store = LocaleStore::new(catalog(), jar.clone(), Some("en"));
	let mut doc = DocumentAttributes::from_snapshot(&store.snapshot());
	let mut rx = store.subscribe();

	store.set_locale("ar").await.unwrap();
	doc.apply(&rx.recv().await.unwrap());
	assert_eq!(doc.lang, "ar");
	assert_eq!(doc.body_class(), "rtl");

	jar.set(LOCALE_COOKIE_NAME, "fr");
	assert!(store.sync_with_cookie());
	doc.apply(&rx.recv().await.unwrap());
	assert_eq!(doc.root_attributes(), r#"lang="fr" dir="ltr""#);
}

#[tokio::test]
async fn production_cookie_is_secure_and_readable_by_scripts() {
	let jar = Arc::new(InMemoryCookieJar::new());
	let store = LocaleStore::with_options(catalog(), jar.clone(), CookieOptions::for_environment(true), None);

	store.set_locale("fr").await.unwrap();
	let header = jar.last_set_cookie().unwrap();
	assert!(header.starts_with("trellis_locale=fr;"));
	assert!(header.contains("Max-Age=31536000"));
	assert!(header.contains("SameSite=Lax"));
	assert!(header.contains("Secure"));
	assert!(!header.contains("HttpOnly"));
}

#[tokio::test]
async fn independent_stores_do_not_share_state() {
	let a = LocaleStore::new(catalog(), Arc::new(InMemoryCookieJar::new()), Some("en"));
	let b = LocaleStore::new(catalog(), Arc::new(InMemoryCookieJar::new()), Some("en"));

	a.set_locale("ar").await.unwrap();
	assert_eq!(a.locale(), "ar");
	assert_eq!(b.locale(), "en");
}
