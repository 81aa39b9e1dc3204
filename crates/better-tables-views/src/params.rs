//! Filter parameters of the current request

use better_tables_navigation::{NAV_TOKEN_PARAM, QueryParams};

/// Parameters that never describe a filter
pub const NON_FILTER_PARAMS: [&str; 5] = [
	"page",
	"per_page",
	"export",
	"csrfmiddlewaretoken",
	NAV_TOKEN_PARAM,
];

/// The filtering part of `query`
///
/// Drops pagination, export, CSRF and navigation parameters and empty
/// values. Used to save a report of the current filters and to carry them
/// on links.
///
/// # Examples
///
/// ```
/// use better_tables_navigation::QueryParams;
/// use better_tables_views::current_filter_params;
///
/// let query = QueryParams::parse("status=open&page=3&customer=&export=csv");
/// assert_eq!(current_filter_params(&query).to_query_string(), "status=open");
/// ```
pub fn current_filter_params(query: &QueryParams) -> QueryParams {
	query
		.iter()
		.filter(|(name, value)| !NON_FILTER_PARAMS.contains(name) && !value.is_empty())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_keeps_order_and_repeats() {
		let query = QueryParams::parse(
			"tag=a&csrfmiddlewaretoken=x&nav_token=t&per_page=50&tag=b&q=widget",
		);

		let params = current_filter_params(&query);

		assert_eq!(params.to_query_string(), "tag=a&tag=b&q=widget");
	}

	#[rstest]
	fn test_nothing_to_keep() {
		assert!(current_filter_params(&QueryParams::parse("page=2")).is_empty());
	}
}
