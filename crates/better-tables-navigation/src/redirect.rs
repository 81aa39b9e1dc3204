//! Post-save redirect selection

use crate::query::QueryParams;

/// Form field of the "save and go to next record" button
pub const SAVE_AND_NEXT: &str = "save_and_next";
/// Form field of the "save and go to previous record" button
pub const SAVE_AND_PREVIOUS: &str = "save_and_previous";
/// Form field of the "save and keep editing" button
pub const SAVE_AND_CONTINUE: &str = "save_and_continue";
/// Form field of the "save and return to the list" button
pub const SAVE_AND_CLOSE: &str = "save_and_close";

/// Query or form parameter naming an explicit success URL
pub const NEXT_PARAM: &str = "next";

/// Which save button submitted an edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveAction {
	/// Plain save; the host's success URL applies
	#[default]
	Default,
	/// Stay on the saved record
	Continue,
	/// Go to the following record
	Next,
	/// Go to the preceding record
	Previous,
	/// Return to where the list was opened
	Close,
}

impl SaveAction {
	/// Detect the pressed button from submitted form fields
	///
	/// Browsers only submit the button that was pressed, but when a form
	/// carries several anyway the precedence is next, previous, continue,
	/// close.
	///
	/// # Examples
	///
	/// ```
	/// use better_tables_navigation::{QueryParams, SaveAction};
	///
	/// let form = QueryParams::parse("name=Widget&save_and_next=1");
	/// assert_eq!(SaveAction::from_form(&form), SaveAction::Next);
	/// assert_eq!(SaveAction::from_form(&QueryParams::new()), SaveAction::Default);
	/// ```
	pub fn from_form(form: &QueryParams) -> Self {
		if form.contains(SAVE_AND_NEXT) {
			Self::Next
		} else if form.contains(SAVE_AND_PREVIOUS) {
			Self::Previous
		} else if form.contains(SAVE_AND_CONTINUE) {
			Self::Continue
		} else if form.contains(SAVE_AND_CLOSE) {
			Self::Close
		} else {
			Self::Default
		}
	}

	/// Form field name of the button, `None` for a plain save
	pub fn field_name(self) -> Option<&'static str> {
		match self {
			Self::Default => None,
			Self::Continue => Some(SAVE_AND_CONTINUE),
			Self::Next => Some(SAVE_AND_NEXT),
			Self::Previous => Some(SAVE_AND_PREVIOUS),
			Self::Close => Some(SAVE_AND_CLOSE),
		}
	}
}

/// Explicit `next` URL, form value first, then query
pub fn next_param<'a>(query: &'a QueryParams, form: &'a QueryParams) -> Option<&'a str> {
	form.get_non_empty(NEXT_PARAM)
		.or_else(|| query.get_non_empty(NEXT_PARAM))
}

/// Destination of "close": origin URL, then `next`, then the list URL, then `/`
///
/// Blank candidates are skipped.
///
/// # Examples
///
/// ```
/// use better_tables_navigation::redirect::close_url;
///
/// let origin = "https://x.test/orders/?status=open";
/// assert_eq!(close_url(Some(origin), Some("/a/"), None), origin);
/// assert_eq!(close_url(None, Some("/a/"), Some("/orders/")), "/a/");
/// assert_eq!(close_url(None, None, Some("/orders/")), "/orders/");
/// assert_eq!(close_url(None, None, None), "/");
/// ```
pub fn close_url(origin_url: Option<&str>, next: Option<&str>, list_url: Option<&str>) -> String {
	[origin_url, next, list_url]
		.into_iter()
		.flatten()
		.map(str::trim)
		.find(|url| !url.is_empty())
		.unwrap_or("/")
		.to_string()
}
