use crate::components::debate_browser::{BrowserAction, DebateBrowser};
use crate::components::graph_view::GraphView;
use crate::settings::GraphSettings;
use crate::theme;
use agora_client::ApiClient;
use agora_core::{DebateGraph, DebateId, DebateSummary, GraphSource, LeaderboardEntry, SourceError};
use agora_store::{DebateFilter, GraphLoader, LoadState, Store};
use eframe::egui;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Browse,
    Debate,
}

pub struct AgoraApp {
    loader: GraphLoader,
    catalog: Vec<DebateSummary>,
    leaderboard: Vec<LeaderboardEntry>,
    browser: DebateBrowser,
    graph_view: Option<GraphView>,
    settings: GraphSettings,
    screen: Screen,
}

impl AgoraApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::apply(&cc.egui_ctx);
        let (source, catalog, leaderboard) = build_source();
        Self {
            loader: GraphLoader::new(source),
            catalog,
            leaderboard,
            browser: DebateBrowser::new(),
            graph_view: None,
            settings: GraphSettings::default(),
            screen: Screen::Browse,
        }
    }

    fn open_debate(&mut self, id: DebateId) {
        // Drop the previous view first; its simulation dies with it.
        self.graph_view = None;
        self.loader.request(id);
        self.screen = Screen::Debate;
    }

    fn back_to_browse(&mut self) {
        self.graph_view = None;
        self.loader.reset();
        self.screen = Screen::Browse;
    }

    fn header(&mut self, ctx: &egui::Context) {
        let mut back = false;
        let mut reheat = false;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Agora")
                        .size(20.0)
                        .strong()
                        .color(theme::ACCENT),
                );
                if self.screen == Screen::Debate {
                    ui.separator();
                    if ui.button("← Back").clicked() {
                        back = true;
                    }
                    ui.menu_button("⚙ Layout", |ui| {
                        ui.add(
                            egui::Slider::new(&mut self.settings.link_distance, 40.0..=300.0)
                                .text("Link distance"),
                        );
                        ui.add(
                            egui::Slider::new(&mut self.settings.charge_strength, 200.0..=8000.0)
                                .text("Repulsion"),
                        );
                        ui.checkbox(&mut self.settings.show_labels, "Show labels");
                        if ui.button("Apply & reheat").clicked() {
                            reheat = true;
                            ui.close();
                        }
                    });
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.screen == Screen::Debate {
                        if let Some(view) = &self.graph_view {
                            ui.label(
                                egui::RichText::new(format!(
                                    "Debate ID: {} | Nodes: {}",
                                    view.debate_id(),
                                    view.node_count()
                                ))
                                .color(theme::MUTED_TEXT),
                            );
                        }
                    }
                });
            });
            ui.add_space(4.0);
        });

        if reheat {
            if let Some(view) = self.graph_view.as_mut() {
                view.apply_settings(&self.settings);
            }
        }
        if back {
            self.back_to_browse();
        }
    }

    fn browse_screen(&mut self, ctx: &egui::Context) {
        let mut open_id = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(BrowserAction::Open(id)) =
                self.browser.ui(ui, &self.catalog, &self.leaderboard)
            {
                open_id = Some(id);
            }
        });
        if let Some(id) = open_id {
            self.open_debate(id);
        }
    }

    fn debate_screen(&mut self, ctx: &egui::Context) {
        enum Gate {
            Loading,
            Ready,
            NotFound,
            Failed(String),
            NoIdentifier,
        }
        let gate = match self.loader.state() {
            LoadState::Loading => Gate::Loading,
            LoadState::Loaded(_) => Gate::Ready,
            LoadState::NotFound => Gate::NotFound,
            LoadState::Failed(reason) => Gate::Failed(reason.clone()),
            LoadState::Idle => Gate::NoIdentifier,
        };

        match gate {
            Gate::Ready => {
                if let Some(view) = self.graph_view.as_mut() {
                    view.ui(ctx, &self.settings);
                }
            }
            Gate::Loading => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(theme::spacing::SECTION_SPACING * 6.0);
                        ui.add(egui::Spinner::new().size(32.0));
                        ui.add_space(theme::spacing::ITEM_SPACING);
                        ui.label(
                            egui::RichText::new("Loading debate...").color(theme::MUTED_TEXT),
                        );
                    });
                });
            }
            Gate::NotFound => self.error_screen(
                ctx,
                "🔍",
                "Debate Not Found",
                "The debate you're looking for doesn't exist.",
            ),
            Gate::Failed(reason) => self.error_screen(ctx, "❌", "Error", &reason),
            Gate::NoIdentifier => self.error_screen(ctx, "❌", "Error", "No debate ID provided"),
        }
    }

    /// Terminal load failures render as a full view with a recovery link;
    /// none of them retry.
    fn error_screen(&mut self, ctx: &egui::Context, icon: &str, title: &str, message: &str) {
        let mut back = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            theme::empty_state(ui, icon, title, message);
            ui.vertical_centered(|ui| {
                if ui.button("← Back to debates").clicked() {
                    back = true;
                }
            });
        });
        if back {
            self.back_to_browse();
        }
    }
}

impl eframe::App for AgoraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.loader.poll();
        if let LoadState::Loaded(graph) = self.loader.state() {
            let stale = self
                .graph_view
                .as_ref()
                .is_none_or(|view| view.debate_id() != &graph.debate_id);
            if stale {
                self.graph_view = Some(GraphView::new(graph, &self.settings));
            }
        }

        self.header(ctx);
        match self.screen {
            Screen::Browse => self.browse_screen(ctx),
            Screen::Debate => self.debate_screen(ctx),
        }
    }
}

/// Fallback source when even the in-memory store cannot be opened.
struct UnavailableSource;

impl GraphSource for UnavailableSource {
    fn load_graph(&self, _id: &DebateId) -> Result<DebateGraph, SourceError> {
        Err(SourceError::Unavailable(
            "local debate store unavailable".to_string(),
        ))
    }
}

/// Pick the debate source: the REST backend when `AGORA_API_URL` is set,
/// the seeded local store otherwise.
fn build_source() -> (
    Arc<dyn GraphSource>,
    Vec<DebateSummary>,
    Vec<LeaderboardEntry>,
) {
    if let Ok(base_url) = std::env::var("AGORA_API_URL") {
        tracing::info!("using REST backend at {base_url}");
        let client = Arc::new(ApiClient::new(base_url));
        let catalog = match client.debates() {
            Ok(debates) => debates,
            Err(err) => {
                tracing::warn!("failed to list debates from API: {err}");
                Vec::new()
            }
        };
        // The leaderboard has no public endpoint yet; the tab stays empty
        // in API mode.
        return (client, catalog, Vec::new());
    }

    match Store::seeded_in_memory() {
        Ok(store) => {
            let catalog = store
                .list_debates(&DebateFilter::default())
                .unwrap_or_default();
            let leaderboard = store.leaderboard().unwrap_or_default();
            (Arc::new(store), catalog, leaderboard)
        }
        Err(err) => {
            tracing::error!("failed to open seeded store: {err}");
            (Arc::new(UnavailableSource), Vec::new(), Vec::new())
        }
    }
}
