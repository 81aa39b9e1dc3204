//! Order list and edit pages driven end to end through one session

use better_tables_conf::{NavigationSettings, TablesSettings};
use better_tables_navigation::{MockClock, NavigationState, NavigationStore, PatternResolver};
use better_tables_sessions::{SessionData, SessionStore, SessionStoreExt};
use better_tables_views::{
	BulkSelection, EditNavigation, FilterField, FocusedKeys, ListViewHandler, TableRequest,
	TableSpec,
};
use rstest::*;
use std::sync::Arc;

const ORIGIN: &str = "https://shop.test";

fn order_keys() -> Vec<u64> {
	(1..=120).collect()
}

fn orders_table() -> TableSpec {
	TableSpec::builder(["number", "customer", "status"])
		.name("orders")
		.bulk_select("/order/bulk/")
		.editable("orders:order_update")
		.create_url("/order/new/")
		.build()
		.unwrap()
}

fn list_handler(settings: &TablesSettings) -> ListViewHandler<u64> {
	ListViewHandler::standard(
		settings,
		&orders_table(),
		vec![
			FilterField::value("status"),
			FilterField::date_range("created"),
		],
	)
	.unwrap()
}

#[fixture]
fn settings() -> TablesSettings {
	TablesSettings::default()
}

#[rstest]
fn test_order_list_then_save_and_next(settings: TablesSettings) {
	// Arrange
	let list = list_handler(&settings);
	let mut session = SessionData::new();
	let request = TableRequest::get("/order/?status=open&page=2").with_origin(ORIGIN);

	// Act
	let context = list.handle(&request, &mut session, &order_keys()).unwrap();
	let navigation = context.navigation.unwrap();
	let edit = EditNavigation::new(
		NavigationStore::new(settings.navigation.clone()).unwrap(),
		PatternResolver::conventional("Order"),
	);
	let save = TableRequest::post(
		&format!("/order/60/?nav_token={}", navigation.token),
		"customer=Acme&save_and_next=Save",
	);
	let target = edit.redirect_after_save(&save, &session, 60);

	// Assert
	assert_eq!(navigation.entry.primary_keys.len(), 120);
	assert!(!navigation.entry.truncated);
	assert_eq!(
		navigation.entry.origin_url.as_deref(),
		Some("https://shop.test/order/?status=open&page=2")
	);
	assert_eq!(target, Some(format!("/order/61/?nav_token={}", navigation.token)));
}

#[rstest]
fn test_capped_list(settings: TablesSettings) {
	// Arrange
	let settings = TablesSettings {
		navigation: settings.navigation.with_max_pk_count(100),
		..settings
	};
	let list = list_handler(&settings);
	let mut session = SessionData::new();

	// Act
	let context = list
		.handle(&TableRequest::get("/order/"), &mut session, &order_keys())
		.unwrap();

	// Assert
	let entry = context.navigation.unwrap().entry;
	assert_eq!(entry.primary_keys, (1..=100).collect::<Vec<u64>>());
	assert!(entry.truncated);
	assert_eq!(entry.total_count, 120);
}

#[rstest]
fn test_returning_to_list_recentres_window(settings: TablesSettings) {
	// Arrange
	let settings = TablesSettings {
		navigation: settings
			.navigation
			.with_max_pk_count(100)
			.with_context_window(10),
		..settings
	};
	let list = list_handler(&settings);
	let edit = EditNavigation::new(
		NavigationStore::new(settings.navigation.clone()).unwrap(),
		PatternResolver::conventional("Order"),
	);
	let mut session = SessionData::new();
	let token = list
		.handle(&TableRequest::get("/order/"), &mut session, &order_keys())
		.unwrap()
		.navigation
		.unwrap()
		.token;

	// Act
	let reload = TableRequest::get(&format!("/order/?nav_token={}", token));
	let keys = FocusedKeys::new(order_keys()).focused_on(100);
	let entry = list
		.handle(&reload, &mut session, &keys)
		.unwrap()
		.navigation
		.unwrap()
		.entry;
	let save = TableRequest::post(
		&format!("/order/100/?nav_token={}", token),
		"save_and_next=1",
	);
	let target = edit.redirect_after_save(&save, &session, 100);
	let view = edit.view(
		&TableRequest::get(&format!("/order/110/?nav_token={}", token)),
		&session,
		110,
	);

	// Assert
	assert_eq!(entry.primary_keys, (90..=110).collect::<Vec<u64>>());
	assert!(entry.truncated);
	assert_eq!(target, Some(format!("/order/101/?nav_token={}", token)));
	assert_eq!(view.position.map(|p| (p.index, p.total)), Some((21, 21)));
	assert_eq!(
		view.previous_url,
		Some(format!("/order/109/?nav_token={}", token))
	);
	assert_eq!(view.next_url, None);
}

#[rstest]
fn test_token_reused_by_list_reload(settings: TablesSettings) {
	// Arrange
	let list = list_handler(&settings);
	let mut session = SessionData::new();
	let first = list
		.handle(&TableRequest::get("/order/"), &mut session, &order_keys())
		.unwrap()
		.navigation
		.unwrap();

	// Act
	let reload = TableRequest::get(&format!("/order/?page=3&nav_token={}", first.token));
	let second = list
		.handle(&reload, &mut session, &order_keys())
		.unwrap()
		.navigation
		.unwrap();

	// Assert
	assert_eq!(first.token, second.token);
	assert_eq!(session.count_with_prefix(&settings.navigation.session_key_prefix), 1);
}

#[rstest]
fn test_per_page_choice_survives_requests(settings: TablesSettings) {
	// Arrange
	let list = list_handler(&settings);
	let mut session = SessionData::new();

	// Act
	list.handle(
		&TableRequest::post("/order/", "per_page=100"),
		&mut session,
		&order_keys(),
	)
	.unwrap();
	let later = list
		.handle(&TableRequest::get("/order/"), &mut session, &order_keys())
		.unwrap();

	// Assert
	assert_eq!(later.per_page.unwrap().current, 100);
	assert_eq!(session.get_as::<usize>("table_per_page"), Some(100));
}

#[rstest]
fn test_filters_in_context(settings: TablesSettings) {
	let list = list_handler(&settings);
	let mut session = SessionData::new();
	let request =
		TableRequest::get("/order/?status=open&created_max=2024-06-30&page=4&search=acme");

	let context = list.handle(&request, &mut session, &order_keys()).unwrap();

	let labels: Vec<&str> = context.active_filters.iter().map(|f| f.label.as_str()).collect();
	assert_eq!(labels, ["Status", "Created", "Search"]);
	assert_eq!(
		context.current_filters.to_query_string(),
		"status=open&created_max=2024-06-30&search=acme"
	);
}

#[rstest]
fn test_context_serializes_for_templates(settings: TablesSettings) {
	let list = list_handler(&settings);
	let mut session = SessionData::new();

	let context = list
		.handle(&TableRequest::get("/order/?status=open"), &mut session, &order_keys())
		.unwrap();
	let json = serde_json::to_value(&context).unwrap();

	assert_eq!(json["current_per_page"], 25);
	assert_eq!(json["active_filters"][0]["clear_url"], "/order/");
	assert_eq!(json["navigation"]["entry"]["total_count"], 120);
}

#[rstest]
fn test_expired_context_disables_navigation() {
	// Arrange
	let clock = MockClock::new(1_700_000_000);
	let settings = NavigationSettings::default();
	let store = NavigationStore::with_clock(settings, Arc::new(clock.clone())).unwrap();
	let mut session = SessionData::new();
	store
		.store_navigation_pks(&mut session, "tok", &order_keys(), None, Some("/order/?status=open"))
		.unwrap();
	let edit = EditNavigation::new(store, PatternResolver::conventional("Order"));
	clock.advance(3601);

	// Act
	let view = edit.view(&TableRequest::get("/order/60/?nav_token=tok"), &session, 60);

	// Assert
	assert_eq!(view.state, NavigationState::Absent);
	assert_eq!(view.close_url, "/order/");
}

#[rstest]
fn test_bulk_selection_from_list_post() {
	let request = TableRequest::post("/order/bulk/", "selected_items=4&selected_items=9");

	let selection = BulkSelection::<u64>::from_form(request.form());

	assert_eq!(selection.keys(), [4, 9]);
}
