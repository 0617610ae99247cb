//! `docsite generate [--watch]`.
//!
//! Writes the site generator files once, then optionally keeps watching the
//! config file and the generated pages.
//!
//! ```text
//! notify thread ──events──▶ channel ──▶ classify ──▶ Pending (200ms debounce)
//!                                                          │
//!                             reload_config (if config) ◀──┘──▶ generate
//! ```

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::{LoadOptions, SiteConfig, cfg, reload_config};
use crate::core::{enter_foreground, is_shutdown, leave_foreground};
use crate::generator::{GenerateReport, generate};
use crate::logger::WatchStatus;
use crate::utils::path::{fs::relative_display, normalize_path};
use crate::utils::plural::{plural_count, plural_count_irregular};
use crate::{debug, log};

/// Quiet period before a batch of changes is processed.
const DEBOUNCE: Duration = Duration::from_millis(200);

/// Channel poll interval; bounds shutdown latency.
const POLL: Duration = Duration::from_millis(50);

pub fn run_generate(options: &LoadOptions, watch: bool) -> Result<()> {
    let config = cfg();
    let report = generate(&config)?;
    log_report(&config, &report);

    if watch {
        watch_loop(options)?;
    }
    Ok(())
}

/// One line per written file, plus a page count.
pub fn log_report(config: &SiteConfig, report: &GenerateReport) {
    let root = config.get_root();
    log!("generate"; "found {}", plural_count(report.pages.len(), "generated page"));
    for page in &report.pages {
        debug!(
            "generate";
            "{} `{}` ({})",
            relative_display(&page.path, root),
            page.title,
            plural_count(page.sections.len(), "section")
        );
    }
    debug!(
        "generate";
        "sidebar covers {}",
        plural_count_irregular(report.sidebar.len(), "prefix", "prefixes")
    );

    if report.written.is_empty() {
        let outputs = std::iter::once(&report.config_ts)
            .chain(&report.index)
            .map(|path| relative_display(path, root))
            .collect::<Vec<_>>();
        log!("generate"; "up to date: {}", outputs.join(", "));
    }
    for path in &report.written {
        log!("generate"; "wrote {}", relative_display(path, root));
    }
}

fn report_line(report: &GenerateReport) -> String {
    format!(
        "regenerated ({}, {} written)",
        plural_count(report.pages.len(), "page"),
        plural_count(report.written.len(), "file")
    )
}

// ============================================================================
// change classification
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Config,
    Pages,
}

/// Paths a change can come from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WatchTargets {
    config_path: PathBuf,
    generated_root: PathBuf,
}

impl WatchTargets {
    fn from_config(config: &SiteConfig) -> Self {
        Self {
            config_path: config.config_path.clone(),
            generated_root: normalize_path(&config.generated_root()),
        }
    }

    fn classify(&self, path: &Path) -> Option<Change> {
        if path == self.config_path {
            return Some(Change::Config);
        }

        let is_page_input = path.extension().is_some_and(|ext| ext == "md")
            || path.file_name().is_some_and(|name| name == "stats.json");
        (path.starts_with(&self.generated_root) && is_page_input).then_some(Change::Pages)
    }
}

/// Metadata-only changes (mtime/chmod) and reads are noise.
fn is_content_event(kind: &EventKind) -> bool {
    match kind {
        EventKind::Create(_) | EventKind::Remove(_) => true,
        EventKind::Modify(modify) => !matches!(modify, notify::event::ModifyKind::Metadata(_)),
        _ => false,
    }
}

// ============================================================================
// debouncing
// ============================================================================

/// Changes collected since the last regeneration.
#[derive(Debug, Default)]
struct Pending {
    config: bool,
    pages: bool,
    last_event: Option<Instant>,
}

impl Pending {
    fn add(&mut self, change: Change, at: Instant) {
        match change {
            Change::Config => self.config = true,
            Change::Pages => self.pages = true,
        }
        self.last_event = Some(at);
    }

    /// Take the batch once no event arrived for [`DEBOUNCE`].
    fn take_if_ready(&mut self, now: Instant) -> Option<(bool, bool)> {
        let last = self.last_event?;
        if now.duration_since(last) < DEBOUNCE {
            return None;
        }
        let batch = (self.config, self.pages);
        *self = Self::default();
        Some(batch)
    }
}

// ============================================================================
// watch loop
// ============================================================================

struct ConfigWatcher {
    watcher: RecommendedWatcher,
    targets: WatchTargets,
    config_dir: PathBuf,
    /// Nearest existing ancestor watched while the generated dir is missing.
    waiting_on: Option<PathBuf>,
}

impl ConfigWatcher {
    fn new(watcher: RecommendedWatcher, config: &SiteConfig) -> Result<Self> {
        let targets = WatchTargets::from_config(config);

        // Editors replace files on save, so watch the directory, not the file
        let config_dir = targets
            .config_path
            .parent()
            .context("config file has no parent directory")?
            .to_path_buf();

        let mut this = Self {
            watcher,
            targets,
            config_dir,
            waiting_on: None,
        };
        this.watcher
            .watch(&this.config_dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {}", this.config_dir.display()))?;

        this.watch_generated();
        Ok(this)
    }

    /// Watch the generated dir, or its nearest existing ancestor until it
    /// appears. Returns whether the generated dir itself is watched.
    fn watch_generated(&mut self) -> bool {
        self.stop_waiting();

        let dir = self.targets.generated_root.clone();
        if dir.is_dir() {
            if let Err(e) = self.watcher.watch(&dir, RecursiveMode::Recursive) {
                log!("watch"; "failed to watch {}: {}", dir.display(), e);
                return false;
            }
            return true;
        }

        let Some(ancestor) = dir.ancestors().skip(1).find(|p| p.is_dir()) else {
            return false;
        };
        log!("watch"; "{} does not exist yet, waiting for it", dir.display());
        if ancestor != self.config_dir
            && let Err(e) = self.watcher.watch(ancestor, RecursiveMode::NonRecursive)
        {
            log!("watch"; "failed to watch {}: {}", ancestor.display(), e);
        }
        self.waiting_on = Some(ancestor.to_path_buf());
        false
    }

    fn stop_waiting(&mut self) {
        let Some(ancestor) = self.waiting_on.take() else {
            return;
        };
        // The config dir watch is shared and must survive
        if ancestor != self.config_dir
            && let Err(e) = self.watcher.unwatch(&ancestor)
        {
            debug!("watch"; "unwatch {}: {}", ancestor.display(), e);
        }
    }

    /// Feed one event into `pending`.
    fn handle_event(&mut self, event: &notify::Event, pending: &mut Pending) {
        if !is_content_event(&event.kind) {
            return;
        }
        for path in &event.paths {
            let path = normalize_path(path);

            // A directory on the way to the generated dir was created
            if self.waiting_on.is_some()
                && matches!(event.kind, EventKind::Create(_))
                && self.targets.generated_root.starts_with(&path)
                && self.watch_generated()
            {
                debug!("watch"; "now watching {}", self.targets.generated_root.display());
                // Pages may have landed before the watch was in place
                pending.add(Change::Pages, Instant::now());
                continue;
            }

            if let Some(change) = self.targets.classify(&path) {
                debug!("watch"; "{:?}: {}", change, path.display());
                pending.add(change, Instant::now());
            }
        }
    }

    /// Follow a `generate.generated_dir` or `docs_dir` change.
    fn retarget(&mut self, config: &SiteConfig) {
        let targets = WatchTargets::from_config(config);
        if targets == self.targets {
            return;
        }
        if self.waiting_on.is_none()
            && let Err(e) = self.watcher.unwatch(&self.targets.generated_root)
        {
            debug!("watch"; "unwatch {}: {}", self.targets.generated_root.display(), e);
        }
        self.targets = targets;
        self.watch_generated();
    }
}

fn watch_loop(options: &LoadOptions) -> Result<()> {
    let (tx, rx) = mpsc::channel::<notify::Result<notify::Event>>();
    let watcher = notify::recommended_watcher(tx)?;
    let mut watcher = ConfigWatcher::new(watcher, &cfg())?;

    let mut pending = Pending::default();
    let mut status = WatchStatus::new();

    enter_foreground();
    log!("watch"; "watching for changes, press Ctrl+C to stop");

    while !is_shutdown() {
        match rx.recv_timeout(POLL) {
            Ok(Ok(event)) => watcher.handle_event(&event, &mut pending),
            Ok(Err(e)) => log!("watch"; "notify error: {}", e),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if let Some((config_changed, pages_changed)) = pending.take_if_ready(Instant::now()) {
            regenerate(options, &mut watcher, &mut status, config_changed, pages_changed);
        }
    }

    leave_foreground();
    log!("watch"; "stopped");
    Ok(())
}

fn regenerate(
    options: &LoadOptions,
    watcher: &mut ConfigWatcher,
    status: &mut WatchStatus,
    config_changed: bool,
    pages_changed: bool,
) {
    if config_changed {
        match reload_config(options) {
            Ok(true) => watcher.retarget(&cfg()),
            Ok(false) if !pages_changed => {
                status.unchanged("config unchanged");
                return;
            }
            Ok(false) => {}
            Err(e) => {
                // The previous config stays active
                status.error("config rejected", &format!("{e:#}"));
                return;
            }
        }
    }

    match generate(&cfg()) {
        Ok(report) => status.success(&report_line(&report)),
        Err(e) => status.error("generate failed", &format!("{e:#}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use notify::event::{CreateKind, DataChange, MetadataKind, ModifyKind};
    use std::fs;
    use tempfile::TempDir;

    fn targets() -> WatchTargets {
        WatchTargets {
            config_path: PathBuf::from("/project/docsite.toml"),
            generated_root: PathBuf::from("/project/web/docs/generated"),
        }
    }

    #[test]
    fn test_classify() {
        let targets = targets();
        assert_eq!(
            targets.classify(Path::new("/project/docsite.toml")),
            Some(Change::Config)
        );
        assert_eq!(
            targets.classify(Path::new("/project/web/docs/generated/module.md")),
            Some(Change::Pages)
        );
        assert_eq!(
            targets.classify(Path::new("/project/web/docs/generated/stats.json")),
            Some(Change::Pages)
        );
        // our own output
        assert_eq!(
            targets.classify(Path::new("/project/web/docs/.vitepress/config.ts")),
            None
        );
        assert_eq!(targets.classify(Path::new("/project/web/docs/index.md")), None);
        assert_eq!(targets.classify(Path::new("/project/README.md")), None);
    }

    #[test]
    fn test_content_events() {
        assert!(is_content_event(&EventKind::Create(CreateKind::File)));
        assert!(is_content_event(&EventKind::Modify(ModifyKind::Data(
            DataChange::Content
        ))));
        assert!(!is_content_event(&EventKind::Modify(ModifyKind::Metadata(
            MetadataKind::WriteTime
        ))));
        assert!(!is_content_event(&EventKind::Any));
    }

    #[test]
    fn test_debounce() {
        let start = Instant::now();
        let mut pending = Pending::default();
        assert_eq!(pending.take_if_ready(start), None);

        pending.add(Change::Pages, start);
        pending.add(Change::Config, start + Duration::from_millis(150));

        // quiet period restarts with every event
        assert_eq!(pending.take_if_ready(start + Duration::from_millis(250)), None);
        assert_eq!(
            pending.take_if_ready(start + Duration::from_millis(350)),
            Some((true, true))
        );
        assert_eq!(pending.take_if_ready(start + Duration::from_millis(900)), None);
    }

    #[test]
    fn test_picks_up_generated_dir_created_later() {
        let dir = TempDir::new().unwrap();
        let root = normalize_path(dir.path());
        let mut config = test_parse_config("");
        config.root = root.clone();
        config.config_path = root.join("docsite.toml");
        fs::write(&config.config_path, "[site]\ntitle = \"Test\"\n").unwrap();

        let (tx, rx) = mpsc::channel::<notify::Result<notify::Event>>();
        let mut watcher =
            ConfigWatcher::new(notify::recommended_watcher(tx).unwrap(), &config).unwrap();
        assert_eq!(watcher.waiting_on.as_deref(), Some(root.as_path()));

        // the upstream generator creates its output directory after startup
        let generated = config.generated_root();
        fs::create_dir_all(&generated).unwrap();

        let mut pending = Pending::default();
        let mut wrote_page = false;
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline && !(wrote_page && pending.pages) {
            if let Ok(Ok(event)) = rx.recv_timeout(POLL) {
                watcher.handle_event(&event, &mut pending);
            }
            if watcher.waiting_on.is_none() && !wrote_page {
                assert!(pending.pages, "creating the directory counts as a page change");
                pending = Pending::default();
                fs::write(generated.join("module.md"), "# Module\n").unwrap();
                wrote_page = true;
            }
        }

        assert!(wrote_page, "generated directory was never watched");
        assert!(pending.pages, "page written into the new directory went unnoticed");
    }
}
