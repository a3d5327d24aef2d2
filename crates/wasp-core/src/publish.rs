//! # Publish Reconciler
//!
//! Turns enumerated paths into a deterministic sequence of writes and drives
//! them through a [`StorageGateway`].
//!
//! ## Write sequence
//!
//! For each non-directory candidate, in enumeration order:
//!
//! 1. `PUT <name>` with the file's bytes and inferred media type.
//! 2. If `<name>` is an index file, `PUT <alias>` with the same bytes, where
//!    `<alias>` is the containing directory with a trailing `/` (or the empty
//!    name for the root `index.html`).
//!
//! ## Failure handling
//!
//! Read failures, transport errors, and non-2xx responses are recorded and
//! logged; later files are still attempted. With `strict` set, scheduling
//! stops after the first file with a failed write. Nothing is rolled back.
//!
//! ## Concurrency
//!
//! Files may be processed `concurrency` at a time. Results are collected in
//! enumeration order regardless of completion order, so the summary is the
//! same as for a sequential run.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use mime::Mime;
use serde::Serialize;
use url::Url;

use crate::error::GatewayError;
use crate::gateway::{PutRequest, StorageGateway};
use crate::media::media_type_for;
use crate::resource::{is_lossless, map_resource_name, ResourceName, StripMode};
use crate::space::SpaceHandle;

/// Knobs for planning and running a publish.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    pub strip_prefix: String,
    pub strip_mode: StripMode,
    /// Stop after the first file with a failed write.
    pub strict: bool,
    /// Files in flight at once. Values below 1 are treated as 1.
    pub concurrency: usize,
    /// Plan and report without writing anything.
    pub dry_run: bool,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            strip_prefix: String::new(),
            strip_mode: StripMode::default(),
            strict: false,
            concurrency: 1,
            dry_run: false,
        }
    }
}

/// Whether a write targets the file's own name or its container alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteKind {
    Primary,
    ContainerAlias,
}

/// A local file scheduled for publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub local_path: PathBuf,
    pub resource: ResourceName,
    pub media_type: Option<Mime>,
}

impl PlannedFile {
    /// The writes this file produces: primary first, then the alias if any.
    pub fn writes(&self) -> Vec<WriteOp> {
        let primary = WriteOp {
            resource: self.resource.clone(),
            kind: WriteKind::Primary,
            source: self.local_path.clone(),
        };
        let alias = self.resource.container_alias().map(|resource| WriteOp {
            resource,
            kind: WriteKind::ContainerAlias,
            source: self.local_path.clone(),
        });
        std::iter::once(primary).chain(alias).collect()
    }
}

/// A single scheduled write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOp {
    pub resource: ResourceName,
    pub kind: WriteKind,
    pub source: PathBuf,
}

/// Files to publish, in enumeration order.
#[derive(Debug, Clone, Default)]
pub struct PublishPlan {
    files: Vec<PlannedFile>,
    skipped_dirs: usize,
    lossy_names: usize,
}

impl PublishPlan {
    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// Every write in the order it will be issued.
    pub fn writes(&self) -> Vec<WriteOp> {
        self.files.iter().flat_map(PlannedFile::writes).collect()
    }

    /// Candidates dropped because they were directories.
    pub fn skipped_dirs(&self) -> usize {
        self.skipped_dirs
    }

    /// Files whose path is not valid UTF-8 and so got a lossy name.
    pub fn lossy_names(&self) -> usize {
        self.lossy_names
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// Build a plan from enumerated candidates.
///
/// Directories are dropped (checked without following symlinks). A path
/// whose metadata cannot be read is kept; reading it will fail later and be
/// recorded like any other write failure.
pub fn plan<I>(candidates: I, cwd: &Path, options: &PublishOptions) -> PublishPlan
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut plan = PublishPlan::default();
    for path in candidates {
        if std::fs::symlink_metadata(&path).is_ok_and(|meta| meta.is_dir()) {
            tracing::trace!(path = %path.display(), "skipping directory");
            plan.skipped_dirs += 1;
            continue;
        }
        let resource = map_resource_name(&path, cwd, &options.strip_prefix, options.strip_mode);
        if !is_lossless(&path) {
            tracing::warn!(
                path = %path.display(),
                resource = %resource,
                "path is not valid UTF-8; resource name is lossy and may collide"
            );
            plan.lossy_names += 1;
        }
        let media_type = media_type_for(&path);
        plan.files.push(PlannedFile {
            local_path: path,
            resource,
            media_type,
        });
    }
    tracing::debug!(
        files = plan.files.len(),
        skipped_dirs = plan.skipped_dirs,
        lossy_names = plan.lossy_names,
        "publish plan built"
    );
    plan
}

/// What happened to one write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum WriteOutcome {
    /// The service answered 2xx.
    Written { status: u16 },
    /// The service answered with a non-2xx status.
    Rejected { status: u16 },
    /// No response: the file could not be read, the name has no URL, or the
    /// request never completed.
    Failed { reason: String },
    /// Dry run; nothing was sent.
    Planned,
}

/// Outcome of one write, in the order writes were issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishRecord {
    pub resource: ResourceName,
    pub kind: WriteKind,
    /// Absent when the name has no resource URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub outcome: WriteOutcome,
}

impl PublishRecord {
    pub fn status(&self) -> Option<u16> {
        match self.outcome {
            WriteOutcome::Written { status } | WriteOutcome::Rejected { status } => Some(status),
            WriteOutcome::Failed { .. } | WriteOutcome::Planned => None,
        }
    }

    /// `false` only for rejected or failed writes.
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, WriteOutcome::Written { .. } | WriteOutcome::Planned)
    }

    fn attempted(&self) -> bool {
        !matches!(self.outcome, WriteOutcome::Planned)
    }
}

/// Result of a publish run.
#[derive(Debug, Clone, Serialize)]
pub struct PublishSummary {
    pub space_url: String,
    pub records: Vec<PublishRecord>,
    /// Name of the last file attempted, whatever its outcome.
    pub last_name: Option<ResourceName>,
    /// Name of the last file whose primary write succeeded.
    pub last_ok_name: Option<ResourceName>,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

#[derive(Default)]
struct LastSeen<'a> {
    name: Option<&'a PublishRecord>,
    ok: Option<&'a PublishRecord>,
}

impl PublishSummary {
    fn fold(
        space_url: String,
        records: Vec<PublishRecord>,
        dry_run: bool,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let last = records
            .iter()
            .filter(|r| r.kind == WriteKind::Primary)
            .fold(LastSeen::default(), |acc, record| LastSeen {
                name: Some(record),
                ok: if record.is_ok() { Some(record) } else { acc.ok },
            });
        let last_name = last.name.map(|r| r.resource.clone());
        let last_ok_name = last.ok.map(|r| r.resource.clone());
        Self {
            space_url,
            records,
            last_name,
            last_ok_name,
            dry_run,
            started_at,
            finished_at,
        }
    }

    /// Full URL of [`last_name`](Self::last_name).
    pub fn resource_url(&self) -> Option<&str> {
        let name = self.last_name.as_ref()?;
        self.records
            .iter()
            .rev()
            .find(|r| r.kind == WriteKind::Primary && &r.resource == name)
            .and_then(|r| r.url.as_deref())
    }

    /// Writes actually sent (or that failed before a response).
    pub fn attempted(&self) -> usize {
        self.records.iter().filter(|r| r.attempted()).count()
    }

    pub fn succeeded(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, WriteOutcome::Written { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.records.iter().filter(|r| !r.is_ok()).count()
    }

    /// No write failed.
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}

/// Publish every file in `plan` to the space behind `handle`.
///
/// Never fails as a whole: per-write problems end up in the summary.
pub async fn publish<G>(
    gateway: &G,
    handle: &SpaceHandle,
    plan: &PublishPlan,
    options: &PublishOptions,
) -> PublishSummary
where
    G: StorageGateway,
{
    let started_at = Utc::now();
    let concurrency = options.concurrency.max(1);
    tracing::info!(
        space = %handle.space_url(),
        files = plan.len(),
        concurrency,
        dry_run = options.dry_run,
        "publishing"
    );

    let mut per_file = stream::iter(plan.files())
        .map(|file| publish_file(gateway, handle, file, options.dry_run))
        .buffered(concurrency);

    let mut records = Vec::with_capacity(plan.len());
    while let Some(file_records) = per_file.next().await {
        let failed = file_records.iter().any(|r| !r.is_ok());
        records.extend(file_records);
        if failed && options.strict {
            tracing::warn!("strict mode: stopping after first failed write");
            break;
        }
    }
    drop(per_file);

    let summary = PublishSummary::fold(
        handle.space_url().to_string(),
        records,
        options.dry_run,
        started_at,
        Utc::now(),
    );
    tracing::info!(
        attempted = summary.attempted(),
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "publish finished"
    );
    summary
}

async fn publish_file<G>(
    gateway: &G,
    handle: &SpaceHandle,
    file: &PlannedFile,
    dry_run: bool,
) -> Vec<PublishRecord>
where
    G: StorageGateway,
{
    let writes = file.writes();
    let targets: Vec<_> = writes
        .iter()
        .map(|op| (op, handle.resource_url(&op.resource)))
        .collect();
    let record = |op: &WriteOp, url: Option<&Url>, outcome| PublishRecord {
        resource: op.resource.clone(),
        kind: op.kind,
        url: url.map(Url::to_string),
        outcome,
    };
    let refused = |op: &WriteOp, e: &GatewayError| {
        tracing::warn!(resource = %op.resource, error = %e, "resource name has no URL");
        record(op, None, WriteOutcome::Failed { reason: e.to_string() })
    };

    if dry_run {
        return targets
            .iter()
            .map(|(op, target)| match target {
                Ok(url) => {
                    tracing::info!(path = %url.path(), "would PUT");
                    record(op, Some(url), WriteOutcome::Planned)
                }
                Err(e) => refused(op, e),
            })
            .collect();
    }

    let body = match tokio::fs::read(&file.local_path).await {
        Ok(bytes) => Bytes::from(bytes),
        Err(e) => {
            let reason = format!("reading {}: {e}", file.local_path.display());
            tracing::warn!(path = %file.local_path.display(), error = %e, "cannot read file");
            return targets
                .iter()
                .map(|(op, target)| {
                    record(op, target.as_ref().ok(), WriteOutcome::Failed { reason: reason.clone() })
                })
                .collect();
        }
    };

    let mut records = Vec::with_capacity(targets.len());
    for (op, target) in &targets {
        let url = match target {
            Ok(url) => url,
            Err(e) => {
                records.push(refused(op, e));
                continue;
            }
        };
        let path = url.path();
        tracing::info!(path = %path, kind = ?op.kind, "PUT");
        let request = PutRequest {
            resource: &op.resource,
            body: body.clone(),
            media_type: file.media_type.as_ref(),
        };
        let outcome = match gateway.put(handle, request).await {
            Ok(put) if put.ok() => WriteOutcome::Written { status: put.status },
            Ok(put) => {
                tracing::warn!(path = %path, status = put.status, "write rejected");
                WriteOutcome::Rejected { status: put.status }
            }
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "write failed");
                WriteOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        records.push(record(op, Some(url), outcome));
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::address::resolve_space;
    use crate::gateway::PutOutcome;
    use wasp_crypto::Identity;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Put {
        name: String,
        body: Vec<u8>,
        media_type: Option<String>,
    }

    /// Records every write; answers per-name statuses, 201 otherwise.
    #[derive(Default)]
    struct Recorder {
        puts: Mutex<Vec<Put>>,
        statuses: HashMap<String, u16>,
        unreachable: Vec<String>,
    }

    impl Recorder {
        fn answering(name: &str, status: u16) -> Self {
            let mut statuses = HashMap::new();
            statuses.insert(name.to_string(), status);
            Self {
                statuses,
                ..Self::default()
            }
        }

        fn names(&self) -> Vec<String> {
            self.puts.lock().unwrap().iter().map(|p| p.name.clone()).collect()
        }
    }

    impl StorageGateway for Recorder {
        async fn put(
            &self,
            _space: &SpaceHandle,
            request: PutRequest<'_>,
        ) -> Result<PutOutcome, GatewayError> {
            let name = request.resource.as_str().to_string();
            self.puts.lock().unwrap().push(Put {
                name: name.clone(),
                body: request.body.to_vec(),
                media_type: request.media_type.map(|m| m.essence_str().to_string()),
            });
            if self.unreachable.contains(&name) {
                return Err(GatewayError::Transport {
                    resource: name,
                    reason: "connection refused".into(),
                });
            }
            let status = self.statuses.get(&name).copied().unwrap_or(201);
            Ok(PutOutcome { status })
        }
    }

    fn handle() -> SpaceHandle {
        let space = resolve_space(Some(
            "https://storage.example/space/0b8c5a52-8b9e-4b7c-a4f0-1f2e3d4c5b6a",
        ))
        .unwrap();
        SpaceHandle::new(Identity::from_seed(&[9u8; 32]), space)
    }

    fn write(root: &Path, rel: &str, body: &str) -> PathBuf {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, body).unwrap();
        path
    }

    fn dist_options() -> PublishOptions {
        PublishOptions {
            strip_prefix: "dist/".into(),
            ..PublishOptions::default()
        }
    }

    #[tokio::test]
    async fn nested_index_is_written_twice_with_same_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "assets/index.html", "<p>assets</p>");
        let gateway = Recorder::default();

        let plan = plan([path], dir.path(), &PublishOptions::default());
        let summary = publish(&gateway, &handle(), &plan, &PublishOptions::default()).await;

        let puts = gateway.puts.lock().unwrap().clone();
        assert_eq!(puts.len(), 2);
        assert_eq!(puts[0].name, "assets/index.html");
        assert_eq!(puts[1].name, "assets/");
        assert_eq!(puts[0].body, puts[1].body);
        assert_eq!(puts[0].media_type.as_deref(), Some("text/html"));
        assert_eq!(summary.records[1].kind, WriteKind::ContainerAlias);
        assert_eq!(summary.last_name, Some(ResourceName::new("assets/index.html")));
    }

    #[tokio::test]
    async fn root_index_aliases_to_empty_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "dist/index.html", "<h1>home</h1>");
        let gateway = Recorder::default();

        let plan = plan([path], dir.path(), &dist_options());
        let summary = publish(&gateway, &handle(), &plan, &dist_options()).await;

        assert_eq!(gateway.names(), vec!["index.html", ""]);
        assert!(summary.records[1].url.as_deref().unwrap().ends_with("/resource/"));
    }

    #[tokio::test]
    async fn non_index_file_is_written_once_under_stripped_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "dist/css/a.css", "a{}");
        let gateway = Recorder::default();

        let plan = plan([path], dir.path(), &dist_options());
        publish(&gateway, &handle(), &plan, &dist_options()).await;

        let puts = gateway.puts.lock().unwrap().clone();
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].name, "css/a.css");
        assert_eq!(puts[0].media_type.as_deref(), Some("text/css"));
    }

    #[tokio::test]
    async fn rejected_write_does_not_stop_later_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.txt", "a");
        let b = write(dir.path(), "b.txt", "b");
        let gateway = Recorder::answering("a.txt", 500);

        let plan = plan([a, b], dir.path(), &PublishOptions::default());
        let summary = publish(&gateway, &handle(), &plan, &PublishOptions::default()).await;

        assert_eq!(gateway.names(), vec!["a.txt", "b.txt"]);
        assert_eq!(summary.records[0].status(), Some(500));
        assert!(!summary.records[0].is_ok());
        assert!(summary.records[1].is_ok());
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.last_name, Some(ResourceName::new("b.txt")));
    }

    #[tokio::test]
    async fn last_name_is_last_attempted_even_when_it_failed() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.txt", "a");
        let b = write(dir.path(), "b.txt", "b");
        let gateway = Recorder {
            unreachable: vec!["b.txt".into()],
            ..Recorder::default()
        };

        let plan = plan([a, b], dir.path(), &PublishOptions::default());
        let summary = publish(&gateway, &handle(), &plan, &PublishOptions::default()).await;

        assert_eq!(summary.last_name, Some(ResourceName::new("b.txt")));
        assert_eq!(summary.last_ok_name, Some(ResourceName::new("a.txt")));
        assert!(matches!(summary.records[1].outcome, WriteOutcome::Failed { .. }));
        assert!(summary.resource_url().unwrap().ends_with("/resource/b.txt"));
    }

    #[tokio::test]
    async fn directories_produce_no_writes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        let gateway = Recorder::default();

        let plan = plan([dir.path().join("assets")], dir.path(), &PublishOptions::default());
        assert!(plan.is_empty());
        assert_eq!(plan.skipped_dirs(), 1);

        let summary = publish(&gateway, &handle(), &plan, &PublishOptions::default()).await;
        assert!(gateway.names().is_empty());
        assert_eq!(summary.last_name, None);
        assert_eq!(summary.resource_url(), None);
    }

    #[tokio::test]
    async fn strict_mode_stops_after_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.txt", "a");
        let b = write(dir.path(), "b.txt", "b");
        let gateway = Recorder::answering("a.txt", 403);
        let options = PublishOptions {
            strict: true,
            ..PublishOptions::default()
        };

        let plan = plan([a, b], dir.path(), &options);
        let summary = publish(&gateway, &handle(), &plan, &options).await;

        assert_eq!(gateway.names(), vec!["a.txt"]);
        assert_eq!(summary.records.len(), 1);
        assert!(!summary.is_clean());
    }

    #[tokio::test]
    async fn unreadable_file_is_recorded_for_each_planned_write() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("docs/index.html");
        let gateway = Recorder::default();

        let plan = plan([gone], dir.path(), &PublishOptions::default());
        let summary = publish(&gateway, &handle(), &plan, &PublishOptions::default()).await;

        assert!(gateway.names().is_empty());
        assert_eq!(summary.records.len(), 2);
        assert_eq!(summary.failed(), 2);
        assert_eq!(summary.attempted(), 2);
    }

    #[tokio::test]
    async fn dry_run_sends_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "index.html", "home");
        let gateway = Recorder::default();
        let options = PublishOptions {
            dry_run: true,
            ..PublishOptions::default()
        };

        let plan = plan([path], dir.path(), &options);
        let summary = publish(&gateway, &handle(), &plan, &options).await;

        assert!(gateway.names().is_empty());
        assert_eq!(summary.records.len(), 2);
        assert_eq!(summary.attempted(), 0);
        assert!(summary.is_clean());
        assert!(summary.dry_run);
        assert_eq!(summary.last_name, Some(ResourceName::new("index.html")));
    }

    #[tokio::test]
    async fn concurrent_run_keeps_enumeration_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = (0..8)
            .map(|i| write(dir.path(), &format!("f{i}.txt"), &i.to_string()))
            .collect();
        let gateway = Recorder::default();
        let options = PublishOptions {
            concurrency: 4,
            ..PublishOptions::default()
        };

        let plan = plan(paths, dir.path(), &options);
        let summary = publish(&gateway, &handle(), &plan, &options).await;

        let recorded: Vec<&str> = summary.records.iter().map(|r| r.resource.as_str()).collect();
        let expected: Vec<String> = (0..8).map(|i| format!("f{i}.txt")).collect();
        assert_eq!(recorded, expected);
        assert_eq!(summary.last_name, Some(ResourceName::new("f7.txt")));
    }

    #[tokio::test]
    async fn parent_relative_name_is_refused_without_collision() {
        let dir = tempfile::tempdir().unwrap();
        let site = dir.path().join("site");
        let outside = write(dir.path(), "other/x.txt", "outside");
        let inside = write(&site, "other/x.txt", "inside");
        let gateway = Recorder::default();

        let plan = plan([outside, inside], &site, &PublishOptions::default());
        let summary = publish(&gateway, &handle(), &plan, &PublishOptions::default()).await;

        let puts = gateway.puts.lock().unwrap().clone();
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].name, "other/x.txt");
        assert_eq!(puts[0].body, b"inside");

        let refused = &summary.records[0];
        assert_eq!(refused.resource.as_str(), "../other/x.txt");
        assert!(matches!(refused.outcome, WriteOutcome::Failed { .. }));
        assert_eq!(refused.url, None);
        assert!(summary.records[1].url.as_deref().unwrap().ends_with("/resource/other/x.txt"));
        assert_eq!(summary.failed(), 1);
    }

    #[tokio::test]
    async fn dry_run_flags_names_without_url() {
        let dir = tempfile::tempdir().unwrap();
        let site = dir.path().join("site");
        let outside = write(dir.path(), "x.txt", "x");
        let options = PublishOptions {
            dry_run: true,
            ..PublishOptions::default()
        };

        let plan = plan([outside], &site, &options);
        let summary = publish(&Recorder::default(), &handle(), &plan, &options).await;

        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.resource_url(), None);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_are_counted_as_lossy() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let odd = dir.path().join(OsStr::from_bytes(b"\xff.txt"));
        let plain = dir.path().join("plain.txt");

        let plan = plan([odd, plain], dir.path(), &PublishOptions::default());

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.lossy_names(), 1);
        assert_eq!(plan.files()[0].resource.as_str(), "\u{fffd}.txt");
    }

    #[test]
    fn plan_lists_primary_then_alias_writes() {
        let dir = tempfile::tempdir().unwrap();
        let index = write(dir.path(), "dist/index.html", "x");
        let css = write(dir.path(), "dist/css/a.css", "y");

        let plan = plan([index, css], dir.path(), &dist_options());
        let writes: Vec<(String, WriteKind)> = plan
            .writes()
            .into_iter()
            .map(|w| (w.resource.as_str().to_string(), w.kind))
            .collect();
        assert_eq!(
            writes,
            vec![
                ("index.html".to_string(), WriteKind::Primary),
                (String::new(), WriteKind::ContainerAlias),
                ("css/a.css".to_string(), WriteKind::Primary),
            ]
        );
    }
}
