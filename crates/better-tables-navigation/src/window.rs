//! Primary key window limiting
//!
//! Large filtered lists are not stored whole. Instead a bounded window of
//! keys around the record being viewed is kept, which is enough to walk a
//! few dozen records in either direction.

use better_tables_conf::NavigationSettings;

/// Limit `keys` to at most `max_pk_count` entries around `current`
///
/// - `max_pk_count == 0` (unlimited) or a short enough list: `keys` unchanged.
/// - `current` missing or not in `keys`: the first `max_pk_count` keys.
/// - otherwise the keys from `context_window` before `current` through
///   `context_window` after it, clipped at the list boundaries. If that span
///   is still longer than `max_pk_count`, its end is pulled in to
///   `start + max_pk_count`. When that would drop `current` itself (a cap
///   no larger than the window), the window ends at `current` instead.
///
/// The result always borrows from `keys`.
///
/// # Examples
///
/// ```
/// use better_tables_navigation::window::limit_window;
///
/// let keys: Vec<u32> = (1..=10).collect();
///
/// assert_eq!(limit_window(&keys, None, 4, 1), &[1, 2, 3, 4]);
/// assert_eq!(limit_window(&keys, Some(&6), 4, 1), &[5, 6, 7]);
/// assert_eq!(limit_window(&keys, Some(&6), 0, 1), &keys[..]);
/// ```
pub fn limit_window<'a, K: PartialEq>(
	keys: &'a [K],
	current: Option<&K>,
	max_pk_count: usize,
	context_window: usize,
) -> &'a [K] {
	if max_pk_count == 0 || keys.len() <= max_pk_count {
		return keys;
	}

	let Some(index) = current.and_then(|c| keys.iter().position(|k| k == c)) else {
		return &keys[..max_pk_count];
	};

	let start = index.saturating_sub(context_window);
	let mut end = keys.len().min(index.saturating_add(context_window).saturating_add(1));
	if end - start > max_pk_count {
		end = start + max_pk_count;
	}
	if end <= index {
		return &keys[index + 1 - max_pk_count..=index];
	}
	&keys[start..end]
}

/// [`limit_window`] with limits taken from `settings`
pub fn limit_with_settings<'a, K: PartialEq>(
	keys: &'a [K],
	current: Option<&K>,
	settings: &NavigationSettings,
) -> &'a [K] {
	limit_window(keys, current, settings.max_pk_count, settings.context_window)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn keys(n: u32) -> Vec<u32> {
		(1..=n).collect()
	}

	#[rstest]
	fn test_short_list_is_unchanged() {
		let all = keys(5);
		assert_eq!(limit_window(&all, Some(&3), 5, 1), &all[..]);
	}

	#[rstest]
	fn test_unlimited_keeps_everything() {
		let all = keys(1000);
		assert_eq!(limit_window(&all, Some(&500), 0, 1).len(), 1000);
	}

	#[rstest]
	fn test_missing_current_takes_prefix() {
		let all = keys(20);
		assert_eq!(limit_window(&all, Some(&99), 5, 2), &[1, 2, 3, 4, 5]);
	}

	#[rstest]
	fn test_window_centred_on_current() {
		let all = keys(100);
		assert_eq!(limit_window(&all, Some(&50), 20, 3), &[47, 48, 49, 50, 51, 52, 53]);
	}

	#[rstest]
	#[case::first(1, &[1, 2, 3])]
	#[case::last(10, &[8, 9, 10])]
	fn test_window_clipped_at_boundary(#[case] current: u32, #[case] expected: &[u32]) {
		let all = keys(10);
		assert_eq!(limit_window(&all, Some(&current), 5, 2), expected);
	}

	#[rstest]
	fn test_clamp_trims_tail() {
		// window span is 2 * 3 + 1 = 7, max is 5: the tail is cut
		let all = keys(20);
		assert_eq!(limit_window(&all, Some(&10), 5, 3), &[7, 8, 9, 10, 11]);
	}

	#[rstest]
	fn test_clamp_never_drops_current() {
		// start + max would end before the current key
		let all = keys(20);
		assert_eq!(limit_window(&all, Some(&10), 2, 5), &[9, 10]);
		assert_eq!(limit_window(&all, Some(&10), 1, 5), &[10]);
	}

	#[rstest]
	fn test_clamp_near_start() {
		let all = keys(20);
		assert_eq!(limit_window(&all, Some(&2), 4, 3), &[1, 2, 3, 4]);
	}

	#[rstest]
	fn test_list_shorter_than_window() {
		let all = keys(3);
		assert_eq!(limit_window(&all, Some(&2), 2, 50), &[1, 2]);
	}

	#[rstest]
	fn test_with_settings_uses_defaults() {
		let all = keys(1000);
		let settings = NavigationSettings::default();

		let window = limit_with_settings(&all, Some(&500), &settings);

		assert_eq!(window.len(), 101);
		assert_eq!(window.first(), Some(&450));
		assert_eq!(window.last(), Some(&550));
	}
}
