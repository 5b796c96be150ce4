//! Gallery Controller
//!
//! Turns navigation events into render requests and commits their results.
//!
//! Every event is computed from the *committed* path and page and tagged with a
//! fresh generation. Rendering (list, classify, paginate, load bytes) happens
//! outside the controller, usually on a spawned task. When a result comes back
//! it is only committed if it belongs to the newest generation issued, so a slow
//! listing for an abandoned folder can never overwrite a later navigation.
//!
//! State machine: `Idle` -> `Loading` -> `Ready` -> `Loading` (any event).

pub mod lister;
pub mod loader;
pub mod view;

use std::sync::Arc;
use thiserror::Error;

use crate::host::{FolderHost, FolderRef, HostError};
use crate::model::{PathStack, PathStackError};

pub use lister::{list, Listing};
pub use loader::{load_page, materialize, LoadedImage};
pub use view::{compute_view_state, ViewState};

#[derive(Debug, Error)]
pub enum GalleryError {
    /// The folder picker was dismissed; never shown to the user
    #[error("folder selection cancelled")]
    UserCancelled,

    #[error("permission denied for folder {folder}")]
    PermissionDenied { folder: String },

    #[error("failed to load {name}: {reason}")]
    EntryLoadFailed { name: String, reason: String },

    #[error("no root folder selected")]
    NoRoot,

    #[error("breadcrumb {index} does not exist (path has {len} levels)")]
    InvalidBreadcrumb { index: usize, len: usize },

    #[error(transparent)]
    Host(HostError),
}

impl From<HostError> for GalleryError {
    fn from(err: HostError) -> Self {
        match err {
            HostError::Cancelled => GalleryError::UserCancelled,
            HostError::PermissionDenied(folder) => GalleryError::PermissionDenied { folder },
            other => GalleryError::Host(other),
        }
    }
}

impl From<PathStackError> for GalleryError {
    fn from(err: PathStackError) -> Self {
        match err {
            PathStackError::Empty => GalleryError::NoRoot,
            PathStackError::OutOfBounds { index, len } => {
                GalleryError::InvalidBreadcrumb { index, len }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryState {
    /// No root picked yet
    Idle,
    /// A render request is outstanding
    Loading,
    /// The committed view is current
    Ready,
}

/// User intent that leads to a re-render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent<H> {
    PickRoot(FolderRef<H>),
    EnterFolder(FolderRef<H>),
    JumpToBreadcrumb(usize),
    ChangePage(usize),
    Refresh,
}

/// What to render: a full path and a requested page, tagged with its generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest<H> {
    pub generation: u64,
    pub path: PathStack<H>,
    pub page: usize,
}

/// A finished render, ready to be committed
#[derive(Debug, Clone)]
pub struct RenderedPage<H> {
    pub request: RenderRequest<H>,
    pub view: ViewState<H>,
    /// Successfully loaded images of the page, in listing order
    pub images: Arc<[LoadedImage]>,
    /// Names of entries that failed to load
    pub failed: Vec<String>,
}

/// Result of a render, successful or not, still carrying its generation
#[derive(Debug)]
pub struct RenderOutcome<H> {
    pub generation: u64,
    pub result: Result<RenderedPage<H>, GalleryError>,
}

/// Stamp for a root pick that is still resolving on the host
///
/// A pick only takes effect if no later pick was started and no render was
/// issued while it was in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickTicket {
    pick: u64,
    issued_at: u64,
}

/// What `apply` did with a render outcome
#[derive(Debug)]
pub enum ApplyOutcome {
    /// The result was current and is now the committed view
    Applied,
    /// A newer request was issued since; the result was dropped
    Stale,
    /// The current request failed; committed state is unchanged
    Failed(GalleryError),
}

/// Ask the host for a root folder. A dismissed picker yields `UserCancelled`.
pub async fn choose_root<F: FolderHost>(
    host: &F,
    request: &str,
) -> Result<FolderRef<F::Handle>, GalleryError> {
    Ok(host.pick_folder(request).await?)
}

/// Perform a render request: list, classify, paginate, load the visible page
pub async fn render<F: FolderHost>(
    host: &F,
    request: RenderRequest<F::Handle>,
) -> RenderOutcome<F::Handle> {
    let generation = request.generation;
    let result = render_page(host, request).await;
    RenderOutcome { generation, result }
}

async fn render_page<F: FolderHost>(
    host: &F,
    request: RenderRequest<F::Handle>,
) -> Result<RenderedPage<F::Handle>, GalleryError> {
    let folder = request.path.current().ok_or(GalleryError::NoRoot)?;
    let listing = lister::list(host, folder).await?;
    let view = compute_view_state(&request.path, &listing, request.page);

    let (images, failures) = load_page(host, &view.page_entries).await;
    let failed = failures
        .into_iter()
        .filter_map(|e| match e {
            GalleryError::EntryLoadFailed { name, .. } => Some(name),
            _ => None,
        })
        .collect();

    Ok(RenderedPage {
        request,
        view,
        images: images.into(),
        failed,
    })
}

/// Owns the committed path stack, page and view
#[derive(Debug)]
pub struct GalleryController<H> {
    path: PathStack<H>,
    page: usize,
    state: GalleryState,
    /// Last generation handed out
    issued: u64,
    view: Option<ViewState<H>>,
    images: Arc<[LoadedImage]>,
    failed: Vec<String>,
    /// Generation of the committed view
    page_generation: u64,
    /// Number of root picks started
    picks: u64,
}

impl<H: Clone> Default for GalleryController<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Clone> GalleryController<H> {
    pub fn new() -> Self {
        Self {
            path: PathStack::new(),
            page: 1,
            state: GalleryState::Idle,
            issued: 0,
            view: None,
            images: Arc::from(Vec::new()),
            failed: Vec::new(),
            page_generation: 0,
            picks: 0,
        }
    }

    pub fn state(&self) -> GalleryState {
        self.state
    }

    pub fn path(&self) -> &PathStack<H> {
        &self.path
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn view(&self) -> Option<&ViewState<H>> {
        self.view.as_ref()
    }

    /// Loaded images of the committed page, shared with the viewer
    pub fn images(&self) -> &Arc<[LoadedImage]> {
        &self.images
    }

    pub fn failed_entries(&self) -> &[String] {
        &self.failed
    }

    /// Generation of the committed page; changes whenever a new page is shown
    pub fn page_generation(&self) -> u64 {
        self.page_generation
    }

    pub fn current_folder(&self) -> Option<&FolderRef<H>> {
        self.path.current()
    }

    fn issue(&mut self, path: PathStack<H>, page: usize) -> RenderRequest<H> {
        self.issued += 1;
        self.state = GalleryState::Loading;
        RenderRequest {
            generation: self.issued,
            path,
            page,
        }
    }

    fn committed_path(&self) -> Result<PathStack<H>, GalleryError> {
        if self.path.is_empty() {
            return Err(GalleryError::NoRoot);
        }
        Ok(self.path.clone())
    }

    /// Start resolving a root on the host; supersedes any pick still in flight
    pub fn begin_pick(&mut self) -> PickTicket {
        self.picks += 1;
        PickTicket {
            pick: self.picks,
            issued_at: self.issued,
        }
    }

    /// Whether a resolved pick is still the newest navigation
    pub fn pick_is_current(&self, ticket: PickTicket) -> bool {
        ticket.pick == self.picks && ticket.issued_at == self.issued
    }

    /// Turn a resolved pick into a render request, or `None` if it was overtaken
    pub fn complete_pick(&mut self, ticket: PickTicket, root: FolderRef<H>) -> Option<RenderRequest<H>> {
        if !self.pick_is_current(ticket) {
            log::debug!("Discarding stale root pick {:?}", ticket);
            return None;
        }
        Some(self.pick_root(root))
    }

    pub fn pick_root(&mut self, root: FolderRef<H>) -> RenderRequest<H> {
        let path = PathStack::rooted(root.name.clone(), root);
        self.issue(path, 1)
    }

    pub fn enter_folder(&mut self, folder: FolderRef<H>) -> Result<RenderRequest<H>, GalleryError> {
        let mut path = self.committed_path()?;
        path.push(folder.name.clone(), folder)?;
        Ok(self.issue(path, 1))
    }

    pub fn jump_to_breadcrumb(&mut self, index: usize) -> Result<RenderRequest<H>, GalleryError> {
        let mut path = self.committed_path()?;
        path.truncate_to(index)?;
        Ok(self.issue(path, 1))
    }

    /// Same folder, another page; the page is clamped when rendered
    pub fn change_page(&mut self, page: usize) -> Result<RenderRequest<H>, GalleryError> {
        let path = self.committed_path()?;
        Ok(self.issue(path, page))
    }

    /// Same folder and page, re-listed
    pub fn refresh(&mut self) -> Result<RenderRequest<H>, GalleryError> {
        let path = self.committed_path()?;
        let page = self.page;
        Ok(self.issue(path, page))
    }

    /// Turn any event into a render request
    pub fn request(&mut self, event: NavigationEvent<H>) -> Result<RenderRequest<H>, GalleryError> {
        match event {
            NavigationEvent::PickRoot(root) => Ok(self.pick_root(root)),
            NavigationEvent::EnterFolder(folder) => self.enter_folder(folder),
            NavigationEvent::JumpToBreadcrumb(index) => self.jump_to_breadcrumb(index),
            NavigationEvent::ChangePage(page) => self.change_page(page),
            NavigationEvent::Refresh => self.refresh(),
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.issued
    }

    /// Commit a render outcome if it is still the newest request
    pub fn apply(&mut self, outcome: RenderOutcome<H>) -> ApplyOutcome {
        if !self.is_current(outcome.generation) {
            log::debug!(
                "Discarding stale render {} (current {})",
                outcome.generation,
                self.issued
            );
            return ApplyOutcome::Stale;
        }

        match outcome.result {
            Ok(rendered) => {
                self.path = rendered.request.path;
                self.page = rendered.view.page;
                self.view = Some(rendered.view);
                self.images = rendered.images;
                self.failed = rendered.failed;
                self.page_generation = outcome.generation;
                self.state = GalleryState::Ready;
                ApplyOutcome::Applied
            }
            Err(e) => {
                self.state = if self.view.is_some() {
                    GalleryState::Ready
                } else {
                    GalleryState::Idle
                };
                ApplyOutcome::Failed(e)
            }
        }
    }

    /// Issue, render and apply one event in sequence
    pub async fn dispatch<F>(&mut self, host: &F, event: NavigationEvent<H>) -> Result<(), GalleryError>
    where
        F: FolderHost<Handle = H>,
    {
        let request = self.request(event)?;
        let outcome = render(host, request).await;
        match self.apply(outcome) {
            ApplyOutcome::Applied | ApplyOutcome::Stale => Ok(()),
            ApplyOutcome::Failed(e) => Err(e),
        }
    }
}
