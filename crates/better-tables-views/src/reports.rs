//! Saved reports: named filter sets per list view
//!
//! A report stores the filter parameters of a list view under a name. Users
//! see their own personal reports, every global report and group reports
//! shared with one of their groups, each flagged when it is a favorite.
//! Storage is injected through [`ReportRepository`].

use crate::error::{Result, ViewError};
use crate::handler::{ListCapability, ListContext, PrimaryKeySource};
use crate::messages::{Message, PostOutcome};
use crate::params::current_filter_params;
use crate::request::{RequestUser, TableRequest};
use better_tables_navigation::QueryParams;
use better_tables_sessions::SessionStore;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Form field of the "save report" button
pub const SAVE_REPORT_FIELD: &str = "save_report";
/// Form field of the "toggle favorite" button
pub const TOGGLE_FAVORITE_FIELD: &str = "toggle_favorite";
/// Form field naming the report to toggle
pub const REPORT_ID_FIELD: &str = "report_id";

/// Longest accepted report name
pub const MAX_NAME_LENGTH: usize = 200;

pub type ReportId = u64;

/// Who can see a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
	/// Only the creator
	Personal,
	/// Members of the report's allowed groups
	Group,
	/// Everyone
	Global,
}

impl Visibility {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Personal => "personal",
			Self::Group => "group",
			Self::Global => "global",
		}
	}

	/// Human-readable label
	pub fn label(&self) -> &'static str {
		match self {
			Self::Personal => "Personal",
			Self::Group => "Group-based",
			Self::Global => "Global",
		}
	}
}

impl FromStr for Visibility {
	type Err = ReportFormError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"personal" => Ok(Self::Personal),
			"group" => Ok(Self::Group),
			"global" => Ok(Self::Global),
			other => Err(ReportFormError::InvalidVisibility(other.to_string())),
		}
	}
}

/// A saved filter set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
	pub id: ReportId,
	pub name: String,
	pub description: String,
	/// List view the report belongs to
	pub view_name: String,
	pub filter_params: QueryParams,
	pub visibility: Visibility,
	/// Id of the creating user
	pub created_by: String,
	/// Groups allowed to see a [`Visibility::Group`] report
	pub allowed_groups: Vec<String>,
	pub is_active: bool,
	pub created_at: DateTime<Utc>,
}

impl Report {
	/// `list_url` with the report's filters applied
	pub fn url(&self, list_url: &str) -> String {
		self.filter_params.append_to(list_url)
	}

	/// Whether `user` may see the report; anonymous users see global ones
	pub fn user_can_access(&self, user: Option<&RequestUser>) -> bool {
		match (self.visibility, user) {
			(Visibility::Global, _) => true,
			(_, None) => false,
			(Visibility::Personal, Some(user)) => self.created_by == user.id,
			(Visibility::Group, Some(user)) => {
				self.allowed_groups.iter().any(|g| user.is_member_of(g))
			}
		}
	}
}

impl fmt::Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.name, self.visibility.label())
	}
}

/// Rejected "save report" submission
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportFormError {
	#[error("Field '{0}' is required")]
	Missing(&'static str),

	#[error("Report name is longer than {} characters", MAX_NAME_LENGTH)]
	NameTooLong,

	#[error("Unknown visibility '{0}'")]
	InvalidVisibility(String),
}

/// A validated "save report" submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
	pub name: String,
	pub description: String,
	pub view_name: String,
	pub filter_params: QueryParams,
	pub visibility: Visibility,
	pub allowed_groups: Vec<String>,
}

impl NewReport {
	/// Validate a submitted form for `view_name`
	///
	/// `filter_params` holds the filters as a URL-encoded query string.
	/// Groups are only kept for group-based reports.
	///
	/// # Examples
	///
	/// ```
	/// use better_tables_navigation::QueryParams;
	/// use better_tables_views::reports::{NewReport, Visibility};
	///
	/// let form = QueryParams::parse(
	///     "name=Open+orders&visibility=global&filter_params=status%3Dopen&allowed_groups=ops",
	/// );
	/// let report = NewReport::from_form(&form, "orders:list").unwrap();
	/// assert_eq!(report.visibility, Visibility::Global);
	/// assert_eq!(report.filter_params.get("status"), Some("open"));
	/// assert!(report.allowed_groups.is_empty());
	/// ```
	pub fn from_form(
		form: &QueryParams,
		view_name: &str,
	) -> std::result::Result<Self, ReportFormError> {
		let name = form
			.get_non_empty("name")
			.map(str::trim)
			.filter(|name| !name.is_empty())
			.ok_or(ReportFormError::Missing("name"))?;
		if name.chars().count() > MAX_NAME_LENGTH {
			return Err(ReportFormError::NameTooLong);
		}
		let visibility: Visibility = form
			.get_non_empty("visibility")
			.ok_or(ReportFormError::Missing("visibility"))?
			.parse()?;
		let allowed_groups = match visibility {
			Visibility::Group => form
				.get_all("allowed_groups")
				.into_iter()
				.filter(|g| !g.is_empty())
				.map(str::to_string)
				.collect(),
			_ => Vec::new(),
		};
		Ok(Self {
			name: name.to_string(),
			description: form.get("description").unwrap_or_default().to_string(),
			view_name: view_name.to_string(),
			filter_params: QueryParams::parse(form.get("filter_params").unwrap_or_default()),
			visibility,
			allowed_groups,
		})
	}
}

/// Storage for reports and per-user favorites
pub trait ReportRepository: Send + Sync {
	/// Every report of `view_name`, active or not
	fn reports_for_view(&self, view_name: &str) -> Result<Vec<Report>>;

	fn get(&self, id: ReportId) -> Result<Option<Report>>;

	/// Persist a new report created by `created_by`
	fn create(&self, report: NewReport, created_by: &str) -> Result<Report>;

	/// Ids of the reports `user_id` marked as favorite
	fn favorite_ids(&self, user_id: &str) -> Result<HashSet<ReportId>>;

	/// Flip the favorite flag; returns whether the report is now a favorite
	fn toggle_favorite(&self, user_id: &str, id: ReportId) -> Result<bool>;
}

#[derive(Debug, Default)]
struct Reports {
	reports: Vec<Report>,
	favorites: HashSet<(String, ReportId)>,
	next_id: ReportId,
}

/// Process-local [`ReportRepository`]
///
/// # Examples
///
/// ```
/// use better_tables_navigation::QueryParams;
/// use better_tables_views::reports::{InMemoryReportRepository, NewReport, ReportRepository};
///
/// let repository = InMemoryReportRepository::new();
/// let form = QueryParams::parse("name=Mine&visibility=personal");
/// let report = repository
///     .create(NewReport::from_form(&form, "orders:list").unwrap(), "alice")
///     .unwrap();
///
/// assert!(repository.toggle_favorite("alice", report.id).unwrap());
/// assert!(!repository.toggle_favorite("alice", report.id).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryReportRepository {
	inner: RwLock<Reports>,
}

impl InMemoryReportRepository {
	pub fn new() -> Self {
		Self::default()
	}

	/// Activate or retire a report; returns whether it exists
	pub fn set_active(&self, id: ReportId, is_active: bool) -> bool {
		let mut inner = self.inner.write();
		match inner.reports.iter_mut().find(|r| r.id == id) {
			Some(report) => {
				report.is_active = is_active;
				true
			}
			None => false,
		}
	}
}

impl ReportRepository for InMemoryReportRepository {
	fn reports_for_view(&self, view_name: &str) -> Result<Vec<Report>> {
		let inner = self.inner.read();
		Ok(inner
			.reports
			.iter()
			.filter(|r| r.view_name == view_name)
			.cloned()
			.collect())
	}

	fn get(&self, id: ReportId) -> Result<Option<Report>> {
		Ok(self.inner.read().reports.iter().find(|r| r.id == id).cloned())
	}

	fn create(&self, report: NewReport, created_by: &str) -> Result<Report> {
		let mut inner = self.inner.write();
		inner.next_id += 1;
		let report = Report {
			id: inner.next_id,
			name: report.name,
			description: report.description,
			view_name: report.view_name,
			filter_params: report.filter_params,
			visibility: report.visibility,
			created_by: created_by.to_string(),
			allowed_groups: report.allowed_groups,
			is_active: true,
			created_at: Utc::now(),
		};
		inner.reports.push(report.clone());
		Ok(report)
	}

	fn favorite_ids(&self, user_id: &str) -> Result<HashSet<ReportId>> {
		let inner = self.inner.read();
		Ok(inner
			.favorites
			.iter()
			.filter(|(user, _)| user == user_id)
			.map(|(_, id)| *id)
			.collect())
	}

	fn toggle_favorite(&self, user_id: &str, id: ReportId) -> Result<bool> {
		let mut inner = self.inner.write();
		if !inner.reports.iter().any(|r| r.id == id) {
			return Err(ViewError::ReportStorage(format!("report {} does not exist", id)));
		}
		let key = (user_id.to_string(), id);
		if inner.favorites.remove(&key) {
			Ok(false)
		} else {
			inner.favorites.insert(key);
			Ok(true)
		}
	}
}

/// A report as listed on the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailableReport {
	#[serde(flatten)]
	pub report: Report,
	pub is_favorite: bool,
	/// List URL with the report's filters applied
	pub url: String,
}

/// Initial values of the "save report" form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReportForm {
	pub view_name: String,
	/// URL-encoded current filters
	pub filter_params: String,
}

/// Lists, saves and favorites reports of one list view
pub struct ReportProvider {
	view_name: String,
	repository: Arc<dyn ReportRepository>,
}

impl ReportProvider {
	pub fn new(view_name: impl Into<String>, repository: Arc<dyn ReportRepository>) -> Self {
		Self {
			view_name: view_name.into(),
			repository,
		}
	}

	pub fn view_name(&self) -> &str {
		&self.view_name
	}

	/// Active reports the request's user may see, by name
	pub fn available_reports(&self, request: &TableRequest) -> Result<Vec<AvailableReport>> {
		let user = request.user();
		let favorites = match user {
			Some(user) => self.repository.favorite_ids(&user.id)?,
			None => HashSet::new(),
		};
		let mut reports: Vec<AvailableReport> = self
			.repository
			.reports_for_view(&self.view_name)?
			.into_iter()
			.filter(|report| report.is_active && report.user_can_access(user))
			.map(|report| AvailableReport {
				is_favorite: favorites.contains(&report.id),
				url: report.url(request.path()),
				report,
			})
			.collect();
		reports.sort_by(|a, b| a.report.name.cmp(&b.report.name));
		Ok(reports)
	}

	/// Handle the report buttons of a POST; `None` when neither was pressed
	pub fn handle_post(&self, request: &TableRequest) -> Result<Option<PostOutcome>> {
		let form = request.form();
		if form.contains(SAVE_REPORT_FIELD) {
			self.save_report(request).map(Some)
		} else if form.contains(TOGGLE_FAVORITE_FIELD) {
			self.toggle_favorite(request).map(Some)
		} else {
			Ok(None)
		}
	}

	fn save_report(&self, request: &TableRequest) -> Result<PostOutcome> {
		let redirect = request.path();
		let Some(user) = request.user() else {
			return Ok(PostOutcome::redirect(
				redirect,
				Message::error("Sign in to save reports."),
			));
		};
		let report = match NewReport::from_form(request.form(), &self.view_name) {
			Ok(report) => report,
			Err(error) => {
				tracing::debug!(%error, view = %self.view_name, "rejected report form");
				return Ok(PostOutcome::redirect(
					redirect,
					Message::error("Error saving report. Please check the form."),
				));
			}
		};
		let report = self.repository.create(report, &user.id)?;
		tracing::debug!(report = report.id, view = %self.view_name, "saved report");
		Ok(PostOutcome::redirect(
			redirect,
			Message::success(format!("Report \"{}\" saved successfully.", report.name)),
		))
	}

	fn toggle_favorite(&self, request: &TableRequest) -> Result<PostOutcome> {
		let redirect = request.path();
		let not_found = || PostOutcome::redirect(redirect, Message::error("Report not found."));
		let Some(user) = request.user() else {
			return Ok(not_found());
		};
		let report = match request
			.form()
			.get(REPORT_ID_FIELD)
			.and_then(|id| id.trim().parse::<ReportId>().ok())
		{
			Some(id) => self.repository.get(id)?,
			None => None,
		};
		let Some(report) = report.filter(|r| r.is_active && r.user_can_access(Some(user))) else {
			return Ok(not_found());
		};
		let message = if self.repository.toggle_favorite(&user.id, report.id)? {
			format!("Added \"{}\" to favorites.", report.name)
		} else {
			format!("Removed \"{}\" from favorites.", report.name)
		};
		Ok(PostOutcome::redirect(redirect, Message::success(message)))
	}
}

impl fmt::Debug for ReportProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ReportProvider")
			.field("view_name", &self.view_name)
			.finish_non_exhaustive()
	}
}

impl<K> ListCapability<K> for ReportProvider {
	fn name(&self) -> &'static str {
		"reports"
	}

	fn apply(
		&self,
		request: &TableRequest,
		_session: &mut dyn SessionStore,
		_keys: &dyn PrimaryKeySource<K>,
		context: &mut ListContext<K>,
	) -> Result<()> {
		let current_filters = current_filter_params(request.query());
		context.available_reports = self.available_reports(request)?;
		context.save_report = Some(SaveReportForm {
			view_name: self.view_name.clone(),
			filter_params: current_filters.to_query_string(),
		});
		context.current_filters = current_filters;
		Ok(())
	}

	fn handle_post(
		&self,
		request: &TableRequest,
		_session: &mut dyn SessionStore,
	) -> Result<Option<PostOutcome>> {
		ReportProvider::handle_post(self, request)
	}
}
