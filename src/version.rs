//! Version string derived from package version and build metadata.
//!
//! Build metadata is read at compile time from `UNIFILER_GIT_COMMIT`,
//! `UNIFILER_GIT_DATE` (YYYYMMDD) and `UNIFILER_GIT_BRANCH`.

use chrono::{NaiveDate, Utc};

/// Build metadata injected by the release pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInfo {
    pub commit: Option<String>,
    pub date: Option<String>,
    pub branch: Option<String>,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            commit: option_env!("UNIFILER_GIT_COMMIT").map(str::to_string),
            date: option_env!("UNIFILER_GIT_DATE").map(str::to_string),
            branch: option_env!("UNIFILER_GIT_BRANCH").map(str::to_string),
        }
    }

    /// Commit date if present and well-formed, else `today`.
    pub fn build_date(&self, today: NaiveDate) -> NaiveDate {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y%m%d").ok())
            .unwrap_or(today)
    }
}

fn origin_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 13).unwrap_or_default()
}

fn package_part(value: &str) -> u32 {
    value.parse().unwrap_or(0)
}

/// Version of the running binary.
pub fn version() -> String {
    format_version(&BuildInfo::current(), Utc::now().date_naive())
}

/// Build date of the running binary, used for the copyright banner.
pub fn build_date() -> NaiveDate {
    BuildInfo::current().build_date(Utc::now().date_naive())
}

/// `<major>.<minor>.<patch>.<days since origin>[-<commit>]`
///
/// `release` bumps minor and marks the patch `-rc`, `feat/*` bumps minor and
/// marks `-dev`, `master` is untouched, any other branch bumps patch and
/// marks `-dev`.
pub fn format_version(info: &BuildInfo, today: NaiveDate) -> String {
    let major = package_part(env!("CARGO_PKG_VERSION_MAJOR"));
    let minor = package_part(env!("CARGO_PKG_VERSION_MINOR"));
    let patch = package_part(env!("CARGO_PKG_VERSION_PATCH"));
    format_version_parts(info, today, major, minor, patch)
}

fn format_version_parts(
    info: &BuildInfo,
    today: NaiveDate,
    major: u32,
    minor: u32,
    patch: u32,
) -> String {
    let days = (info.build_date(today) - origin_date()).num_days();

    let branch = info.branch.as_deref().unwrap_or("");
    let (minor, patch) = match branch {
        "master" => (minor, patch.to_string()),
        "release" => (minor + 1, format!("{}-rc", patch)),
        b if b.contains("feat/") => (minor + 1, format!("{}-dev", patch)),
        _ => (minor, format!("{}-dev", patch + 1)),
    };

    match info.commit.as_deref().filter(|c| !c.is_empty()) {
        Some(commit) => format!("{}.{}.{}.{}-{}", major, minor, patch, days, commit),
        None => format!("{}.{}.{}.{}", major, minor, patch, days),
    }
}
