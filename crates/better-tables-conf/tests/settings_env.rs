//! Environment overrides for table settings
//!
//! Every test mutates process environment, so they run serially.

use better_tables_conf::{ConfigError, NavigationSettings, PerPageSettings, TablesSettings};
use rstest::rstest;
use serial_test::serial;
use std::env;

const NAV_VARS: [&str; 5] = [
	"BETTER_TABLES_NAVIGATION_MAX_PK_COUNT",
	"BETTER_TABLES_NAVIGATION_CONTEXT_WINDOW",
	"BETTER_TABLES_NAVIGATION_SESSION_TIMEOUT",
	"BETTER_TABLES_NAVIGATION_MAX_CONTEXTS",
	"BETTER_TABLES_NAVIGATION_SESSION_KEY_PREFIX",
];

fn clear_vars() {
	// SAFETY: Callers are #[serial], so no other test touches the environment.
	unsafe {
		for var in NAV_VARS {
			env::remove_var(var);
		}
		env::remove_var("BETTER_TABLES_PER_PAGE_OPTIONS");
		env::remove_var("BETTER_TABLES_PER_PAGE_DEFAULT");
		env::remove_var("BETTER_TABLES_PER_PAGE_SESSION_KEY");
	}
}

#[rstest]
#[serial]
fn test_unset_environment_yields_defaults() {
	// Arrange
	clear_vars();

	// Act
	let settings = TablesSettings::from_env().unwrap();

	// Assert
	assert_eq!(settings, TablesSettings::default());
}

#[rstest]
#[serial]
fn test_navigation_overrides() {
	// Arrange
	clear_vars();
	// SAFETY: #[serial] guarantees exclusive access to the environment.
	unsafe {
		env::set_var("BETTER_TABLES_NAVIGATION_MAX_PK_COUNT", "0");
		env::set_var("BETTER_TABLES_NAVIGATION_CONTEXT_WINDOW", "5");
		env::set_var("BETTER_TABLES_NAVIGATION_SESSION_TIMEOUT", "120");
		env::set_var("BETTER_TABLES_NAVIGATION_MAX_CONTEXTS", "3");
		env::set_var("BETTER_TABLES_NAVIGATION_SESSION_KEY_PREFIX", "nav_");
	}

	// Act
	let settings = NavigationSettings::from_env().unwrap();

	// Assert
	assert!(settings.pk_count_unlimited());
	assert_eq!(settings.context_window, 5);
	assert_eq!(settings.session_timeout, 120);
	assert_eq!(settings.max_contexts, 3);
	assert_eq!(settings.session_key_prefix, "nav_");
	clear_vars();
}

#[rstest]
#[serial]
fn test_non_numeric_override_is_rejected() {
	// Arrange
	clear_vars();
	// SAFETY: #[serial] guarantees exclusive access to the environment.
	unsafe {
		env::set_var("BETTER_TABLES_NAVIGATION_MAX_CONTEXTS", "lots");
	}

	// Act
	let result = NavigationSettings::from_env();

	// Assert
	assert!(matches!(result, Err(ConfigError::ParseError { .. })));
	clear_vars();
}

#[rstest]
#[serial]
fn test_per_page_overrides_are_validated() {
	// Arrange
	clear_vars();
	// SAFETY: #[serial] guarantees exclusive access to the environment.
	unsafe {
		env::set_var("BETTER_TABLES_PER_PAGE_OPTIONS", "10,20");
		env::set_var("BETTER_TABLES_PER_PAGE_DEFAULT", "30");
	}

	// Act
	let result = PerPageSettings::from_env();

	// Assert
	assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
	clear_vars();
}

#[rstest]
#[serial]
fn test_per_page_overrides() {
	// Arrange
	clear_vars();
	// SAFETY: #[serial] guarantees exclusive access to the environment.
	unsafe {
		env::set_var("BETTER_TABLES_PER_PAGE_OPTIONS", "10,20");
		env::set_var("BETTER_TABLES_PER_PAGE_DEFAULT", "20");
		env::set_var("BETTER_TABLES_PER_PAGE_SESSION_KEY", "orders_per_page");
	}

	// Act
	let settings = PerPageSettings::from_env().unwrap();

	// Assert
	assert_eq!(settings.options, vec![10, 20]);
	assert_eq!(settings.default_per_page, Some(20));
	assert_eq!(settings.session_key, "orders_per_page");
	clear_vars();
}
