//! Window limiter properties
//!
//! Property-based tests for `limit_window` over arbitrary list lengths,
//! caps and context windows.

use better_tables_navigation::limit_window;
use proptest::prelude::*;

fn keys(len: usize) -> Vec<u32> {
	(0..len as u32).collect()
}

proptest! {
	/// Without a current key the result is the leading `min(len, m)` keys.
	#[test]
	fn prop_no_current_is_prefix(len in 0usize..400, max in 0usize..200, window in 0usize..80) {
		let keys = keys(len);

		let limited = limit_window(&keys, None, max, window);

		let expected = if max == 0 { len } else { len.min(max) };
		prop_assert_eq!(limited.len(), expected);
		prop_assert_eq!(limited, &keys[..expected]);
	}

	/// The current key is always kept and the cap is never exceeded.
	#[test]
	fn prop_current_is_kept(
		len in 1usize..400,
		max in 1usize..200,
		window in 0usize..80,
		pick in any::<prop::sample::Index>(),
	) {
		let keys = keys(len);
		let current = keys[pick.index(len)];

		let limited = limit_window(&keys, Some(&current), max, window);

		prop_assert!(limited.contains(&current));
		prop_assert!(limited.len() <= max);
		prop_assert!(limited.windows(2).all(|pair| pair[1] == pair[0] + 1));
	}

	/// A window spanning at least `m` keys is filled up to the cap.
	#[test]
	fn prop_wide_window_fills_cap(
		len in 1usize..400,
		max in 1usize..200,
		pick in any::<prop::sample::Index>(),
	) {
		let keys = keys(len);
		let current = keys[pick.index(len)];
		let window = len;

		let limited = limit_window(&keys, Some(&current), max, window);

		prop_assert_eq!(limited.len(), len.min(max));
	}

	/// Lists no longer than the cap are returned whole.
	#[test]
	fn prop_short_list_unchanged(
		len in 0usize..200,
		extra in 0usize..50,
		window in 0usize..80,
		pick in any::<prop::sample::Index>(),
	) {
		let keys = keys(len);
		let current = if len == 0 { None } else { Some(keys[pick.index(len)]) };

		let limited = limit_window(&keys, current.as_ref(), len + extra, window);

		prop_assert_eq!(limited, &keys[..]);
	}
}
