use crate::clickup;
use crate::config::Config;
use crate::data::{derive, Assignee, FilterSelection, SortKey, Task, Workspace};
use crate::session::SessionStore;
use anyhow::Result;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use super::Message;

/// Braille spinner frames for loading animation
pub const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Active modal state - only one modal can be active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    None,
    WorkspaceMenu,
    AssigneeMenu,
    StatusMenu,
    TypeMenu,
    SortMenu,
    Help,
}

impl ModalState {
    pub fn is_none(&self) -> bool {
        matches!(self, ModalState::None)
    }
}

/// A gateway call currently in flight, tagged for staleness checks.
///
/// The flag this drives is advisory (it gates the spinner, not input);
/// correctness comes from the generation check in `handle_fetch_result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight {
    pub generation: u64,
    pub kind: FetchKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    Workspaces,
    Tasks { workspace_id: String },
}

/// Result from a background gateway call.
#[derive(Debug)]
pub enum FetchResult {
    Workspaces {
        generation: u64,
        outcome: Result<Vec<Workspace>, clickup::GatewayError>,
    },
    Tasks {
        generation: u64,
        workspace_id: String,
        outcome: Result<Vec<Task>, clickup::GatewayError>,
    },
}

pub struct App {
    pub config: Config,
    pub session: SessionStore,

    /// True only while the last gateway call with the current token
    /// succeeded; a restored token is provisionally authenticated until
    /// the first workspace fetch resolves.
    pub authenticated: bool,
    pub token_input: String,

    pub workspaces: Vec<Workspace>,
    pub selected_workspace: Option<Workspace>,
    pub tasks: Vec<Task>,
    pub filters: FilterSelection,

    // UI state
    pub modal: ModalState,
    /// Index into the filtered grid
    pub selected: usize,
    pub grid_columns: usize,
    pub notice: Option<String>,
    pub is_loading: bool,
    pub spinner_frame: usize,
    pub last_refresh: Option<DateTime<Utc>>,

    /// The fetch currently in flight, if any
    pub in_flight: Option<InFlight>,
    fetch_generation: u64,
    fetch_tx: mpsc::Sender<FetchResult>,
    fetch_rx: mpsc::Receiver<FetchResult>,
}

impl App {
    pub fn new(config: Config, session: SessionStore) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::channel(16);
        // Optimistic: a restored token counts until the gateway says otherwise.
        let authenticated = session.token().is_some();
        Self {
            config,
            session,
            authenticated,
            token_input: String::new(),
            workspaces: Vec::new(),
            selected_workspace: None,
            tasks: Vec::new(),
            filters: FilterSelection::default(),
            modal: ModalState::None,
            selected: 0,
            grid_columns: 1,
            notice: None,
            is_loading: false,
            spinner_frame: 0,
            last_refresh: None,
            in_flight: None,
            fetch_generation: 0,
            fetch_tx,
            fetch_rx,
        }
    }

    /// Kick off the startup authentication check for a restored token.
    pub fn bootstrap(&mut self) {
        if self.session.token().is_some() {
            self.start_workspaces_fetch();
        }
    }

    /// Process a message and update app state (Elm Architecture update
    /// function).
    ///
    /// Returns `Ok(true)` if the app should quit, `Ok(false)` to continue.
    pub async fn update(&mut self, msg: Message) -> Result<bool> {
        match msg {
            // ─────────────────────────────────────────────────────────────────
            // App lifecycle
            // ─────────────────────────────────────────────────────────────────
            Message::Quit => return Ok(true),
            Message::Refresh => self.refresh(),
            Message::Logout => self.logout(),

            // ─────────────────────────────────────────────────────────────────
            // Login form
            // ─────────────────────────────────────────────────────────────────
            Message::TokenInput(c) => self.token_input.push(c),
            Message::TokenBackspace => {
                self.token_input.pop();
            }
            Message::SubmitToken => self.submit_token(),

            // ─────────────────────────────────────────────────────────────────
            // Grid navigation
            // ─────────────────────────────────────────────────────────────────
            Message::MoveUp => self.move_selection(-(self.grid_columns as i32)),
            Message::MoveDown => self.move_selection(self.grid_columns as i32),
            Message::MoveLeft => self.move_selection(-1),
            Message::MoveRight => self.move_selection(1),
            Message::GotoTop => self.selected = 0,
            Message::GotoBottom => {
                let len = self.visible_tasks().len();
                self.selected = len.saturating_sub(1);
            }
            Message::OpenTask => self.open_selected_task()?,

            // ─────────────────────────────────────────────────────────────────
            // Workspace selection
            // ─────────────────────────────────────────────────────────────────
            Message::ToggleWorkspaceMenu => self.toggle_modal(ModalState::WorkspaceMenu),
            Message::SelectWorkspace(idx) => {
                self.modal = ModalState::None;
                self.select_workspace(idx);
            }

            // ─────────────────────────────────────────────────────────────────
            // Filter menus
            // ─────────────────────────────────────────────────────────────────
            Message::ToggleAssigneeMenu => self.toggle_modal(ModalState::AssigneeMenu),
            Message::ToggleAssigneeFilter(idx) => self.toggle_assignee_filter(idx),
            Message::ToggleStatusMenu => self.toggle_modal(ModalState::StatusMenu),
            Message::ToggleStatusFilter(idx) => self.toggle_status_filter(idx),
            Message::ToggleTypeMenu => self.toggle_modal(ModalState::TypeMenu),
            Message::SetTypeFilter(idx) => self.set_type_filter(idx),
            Message::ClearFilters => self.clear_filters(),

            // ─────────────────────────────────────────────────────────────────
            // Sort menu
            // ─────────────────────────────────────────────────────────────────
            Message::ToggleSortMenu => self.toggle_modal(ModalState::SortMenu),
            Message::SetSortKey(key) => self.set_sort(key),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Message::ToggleHelp => self.toggle_modal(ModalState::Help),
            Message::CloseModal => self.modal = ModalState::None,
            Message::DismissNotice => self.notice = None,

            // ─────────────────────────────────────────────────────────────────
            // No-op
            // ─────────────────────────────────────────────────────────────────
            Message::None => {}
        }
        Ok(false)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Session transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate and persist the entered token, then start the
    /// authentication check. Blank tokens never reach the network.
    pub fn submit_token(&mut self) {
        let token = self.token_input.trim().to_string();
        if token.is_empty() {
            self.notice = Some("Please enter your ClickUp API token".to_string());
            return;
        }

        // Persistence is best-effort; a disk error must not block login.
        if let Err(e) = self.session.save_token(&token) {
            tracing::warn!("Failed to persist token: {}", e);
        }

        self.start_workspaces_fetch();
    }

    /// Clear the stored session and reset all state to logged out.
    pub fn logout(&mut self) {
        self.notice = None;
        self.reset_to_logged_out();
    }

    fn reset_to_logged_out(&mut self) {
        self.session.clear();
        self.authenticated = false;
        self.token_input.clear();
        self.workspaces.clear();
        self.tasks.clear();
        self.selected_workspace = None;
        self.filters.clear();
        self.selected = 0;
        self.is_loading = false;
        self.in_flight = None;
        self.last_refresh = None;
        // Invalidate anything still in flight
        self.fetch_generation += 1;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Background fetches
    // ─────────────────────────────────────────────────────────────────────────

    fn start_workspaces_fetch(&mut self) {
        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        self.in_flight = Some(InFlight {
            generation,
            kind: FetchKind::Workspaces,
        });
        self.is_loading = true;

        let token = self.session.token().unwrap_or_default().to_string();
        let base_url = self.config.api.base_url.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let outcome = clickup::list_workspaces(&base_url, &token).await;
            if tx
                .send(FetchResult::Workspaces { generation, outcome })
                .await
                .is_err()
            {
                tracing::warn!("Fetch result receiver dropped");
            }
        });
    }

    fn start_tasks_fetch(&mut self, workspace_id: String) {
        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        self.in_flight = Some(InFlight {
            generation,
            kind: FetchKind::Tasks {
                workspace_id: workspace_id.clone(),
            },
        });
        self.is_loading = true;

        let token = self.session.token().unwrap_or_default().to_string();
        let base_url = self.config.api.base_url.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let outcome = clickup::list_tasks(&base_url, &token, &workspace_id).await;
            if tx
                .send(FetchResult::Tasks {
                    generation,
                    workspace_id,
                    outcome,
                })
                .await
                .is_err()
            {
                tracing::warn!("Fetch result receiver dropped");
            }
        });
    }

    /// Drain background fetch results (non-blocking, call from the event
    /// loop tick).
    pub fn poll_fetches(&mut self) {
        while let Ok(result) = self.fetch_rx.try_recv() {
            self.handle_fetch_result(result);
        }
    }

    /// Apply one gateway result. A response from a superseded fetch
    /// generation is discarded, so rapid workspace switching can never
    /// apply an out-of-order response.
    pub fn handle_fetch_result(&mut self, result: FetchResult) {
        match result {
            FetchResult::Workspaces { generation, outcome } => {
                if generation != self.fetch_generation {
                    tracing::debug!("Discarding stale workspace response (gen {})", generation);
                    return;
                }
                self.is_loading = false;
                self.in_flight = None;
                match outcome {
                    Ok(workspaces) => {
                        self.authenticated = true;
                        self.notice = None;
                        self.token_input.clear();
                        self.workspaces = workspaces;
                        self.restore_or_autoselect_workspace();
                    }
                    Err(e) => {
                        tracing::error!("Workspace fetch failed: {}", e);
                        self.notice = Some(e.to_string());
                        self.reset_to_logged_out();
                    }
                }
            }
            FetchResult::Tasks {
                generation,
                workspace_id,
                outcome,
            } => {
                if generation != self.fetch_generation {
                    tracing::debug!(
                        "Discarding stale task response for workspace {} (gen {})",
                        workspace_id,
                        generation
                    );
                    return;
                }
                // The selected workspace must still be the one the fetch
                // was issued for.
                if self.selected_workspace.as_ref().map(|w| w.id.as_str())
                    != Some(workspace_id.as_str())
                {
                    tracing::debug!(
                        "Discarding task response for deselected workspace {}",
                        workspace_id
                    );
                    return;
                }
                self.is_loading = false;
                self.in_flight = None;
                match outcome {
                    Ok(tasks) => {
                        self.tasks = tasks;
                        self.last_refresh = Some(Utc::now());
                        self.selected = 0;
                        self.notice = None;
                    }
                    Err(e) => {
                        tracing::error!("Task fetch failed: {}", e);
                        self.notice = Some(e.to_string());
                        // Never leave a stale task list visible.
                        self.tasks.clear();
                        self.selected = 0;
                    }
                }
            }
        }
    }

    /// After a successful login: restore the remembered workspace if it is
    /// still in the list, otherwise auto-select the first one.
    fn restore_or_autoselect_workspace(&mut self) {
        let remembered = self
            .session
            .last_workspace()
            .and_then(|last| self.workspaces.iter().find(|w| w.id == last.id))
            .cloned();
        match remembered.or_else(|| self.workspaces.first().cloned()) {
            Some(workspace) => self.set_workspace(workspace),
            None => self.selected_workspace = None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Workspace selection
    // ─────────────────────────────────────────────────────────────────────────

    pub fn select_workspace(&mut self, index: usize) {
        let Some(workspace) = self.workspaces.get(index).cloned() else {
            return;
        };
        self.set_workspace(workspace);
    }

    /// Enter the "workspace selected" state: persist the choice, reset all
    /// filter and sort selections, and issue exactly one task fetch.
    ///
    /// Re-selecting the current workspace goes through the same path; that
    /// is the retry mechanism after a failed task fetch.
    fn set_workspace(&mut self, workspace: Workspace) {
        if let Err(e) = self.session.save_last_workspace(&workspace) {
            tracing::warn!("Failed to persist workspace: {}", e);
        }
        self.selected_workspace = Some(workspace.clone());
        self.filters.clear();
        self.tasks.clear();
        self.selected = 0;
        self.start_tasks_fetch(workspace.id);
    }

    /// Re-fetch without resetting selections (the `r` key).
    pub fn refresh(&mut self) {
        if let Some(workspace) = self.selected_workspace.clone() {
            self.start_tasks_fetch(workspace.id);
        } else if self.authenticated {
            self.start_workspaces_fetch();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived state (pure, recomputed on demand)
    // ─────────────────────────────────────────────────────────────────────────

    /// Indices of tasks passing the current filters, in sorted order.
    pub fn visible_tasks(&self) -> Vec<usize> {
        derive::filter_and_sort(&self.tasks, &self.filters)
    }

    pub fn assignee_options(&self) -> Vec<Assignee> {
        derive::distinct_assignees(&self.tasks)
    }

    pub fn status_options(&self) -> Vec<String> {
        derive::distinct_statuses(&self.tasks)
    }

    pub fn type_options(&self) -> Vec<String> {
        derive::distinct_task_types(&self.tasks)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle_assignee_filter(&mut self, index: usize) {
        let options = self.assignee_options();
        if let Some(option) = options.get(index) {
            if !self.filters.assignees.remove(&option.id) {
                self.filters.assignees.insert(option.id.clone());
            }
            self.clamp_selection();
        }
    }

    pub fn toggle_status_filter(&mut self, index: usize) {
        let options = self.status_options();
        if let Some(option) = options.get(index) {
            if !self.filters.statuses.remove(option) {
                self.filters.statuses.insert(option.clone());
            }
            self.clamp_selection();
        }
    }

    /// Index 0 means "all types"; higher indices pick from the distinct
    /// type list.
    pub fn set_type_filter(&mut self, index: usize) {
        if index == 0 {
            self.filters.task_type = None;
        } else if let Some(task_type) = self.type_options().get(index - 1) {
            self.filters.task_type = Some(task_type.clone());
        } else {
            return;
        }
        self.modal = ModalState::None;
        self.clamp_selection();
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.filters.sort = sort;
        self.modal = ModalState::None;
        self.clamp_selection();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Grid navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.visible_tasks().len();
        if len == 0 {
            return;
        }
        let pos = self.selected as i32 + delta;
        self.selected = pos.clamp(0, len as i32 - 1) as usize;
    }

    /// Recompute the number of grid columns for the terminal width.
    pub fn recalculate_grid(&mut self, terminal_width: u16) {
        let min = self.config.ui.card_min_width.max(20) as usize;
        self.grid_columns = ((terminal_width as usize) / min).clamp(1, 3);
    }

    pub fn open_selected_task(&self) -> Result<()> {
        let visible = self.visible_tasks();
        if let Some(&idx) = visible.get(self.selected) {
            open_url(&self.tasks[idx].url)?;
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Misc UI state
    // ─────────────────────────────────────────────────────────────────────────

    fn toggle_modal(&mut self, modal: ModalState) {
        if self.modal == modal {
            self.modal = ModalState::None;
        } else {
            self.modal = modal;
        }
    }

    /// Advance spinner frame (call on tick while loading)
    pub fn tick_spinner(&mut self) {
        if self.is_loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Get current spinner character
    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }

    pub fn on_tick(&mut self) {
        self.tick_spinner();
    }
}

fn open_url(url: &str) -> Result<()> {
    // Use xdg-open on Linux, which works in WSL
    std::process::Command::new("xdg-open")
        .arg(url)
        .spawn()
        .or_else(|_| {
            // Fallback to wslview for WSL
            std::process::Command::new("wslview").arg(url).spawn()
        })?;
    Ok(())
}
