use crate::theme::{self, spacing};
use agora_core::{DebateId, DebateSummary, LeaderboardEntry, stars};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserTab {
    Debates,
    Leaderboard,
}

pub enum BrowserAction {
    Open(DebateId),
}

/// Case-insensitive title/category filtering for the browse screen.
/// An empty query matches everything.
pub fn filter_debates<'a>(
    debates: &'a [DebateSummary],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a DebateSummary> {
    let query = query.trim().to_lowercase();
    debates
        .iter()
        .filter(|d| {
            category.is_none_or(|c| d.category.eq_ignore_ascii_case(c))
                && (query.is_empty() || d.title.to_lowercase().contains(&query))
        })
        .collect()
}

fn rank_icon(rank: u32) -> String {
    match rank {
        1 => "👑".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        other => other.to_string(),
    }
}

/// Browse screen: searchable debate list plus the leaderboard tab.
pub struct DebateBrowser {
    pub active_tab: BrowserTab,
    query: String,
    category: Option<String>,
}

impl DebateBrowser {
    pub fn new() -> Self {
        Self {
            active_tab: BrowserTab::Debates,
            query: String::new(),
            category: None,
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        debates: &[DebateSummary],
        leaderboard: &[LeaderboardEntry],
    ) -> Option<BrowserAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.active_tab == BrowserTab::Debates, "Debates")
                .clicked()
            {
                self.active_tab = BrowserTab::Debates;
            }
            if ui
                .selectable_label(self.active_tab == BrowserTab::Leaderboard, "Leaderboard")
                .clicked()
            {
                self.active_tab = BrowserTab::Leaderboard;
            }
        });
        ui.separator();

        match self.active_tab {
            BrowserTab::Debates => {
                if let Some(act) = self.debates_tab(ui, debates) {
                    action = Some(act);
                }
            }
            BrowserTab::Leaderboard => self.leaderboard_tab(ui, leaderboard),
        }

        action
    }

    fn debates_tab(
        &mut self,
        ui: &mut egui::Ui,
        debates: &[DebateSummary],
    ) -> Option<BrowserAction> {
        let mut action = None;

        ui.add_space(spacing::ITEM_SPACING);
        ui.horizontal(|ui| {
            ui.label("🔍");
            ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text("Search debates...")
                    .desired_width(320.0),
            );
        });

        ui.add_space(spacing::ITEM_SPACING);
        ui.horizontal_wrapped(|ui| {
            if ui
                .selectable_label(self.category.is_none(), "All")
                .clicked()
            {
                self.category = None;
            }
            let mut categories: Vec<&str> =
                debates.iter().map(|d| d.category.as_str()).collect();
            categories.sort_unstable();
            categories.dedup();
            for category in categories {
                let selected = self.category.as_deref() == Some(category);
                if ui.selectable_label(selected, category).clicked() {
                    self.category = if selected {
                        None
                    } else {
                        Some(category.to_string())
                    };
                }
            }
        });
        ui.add_space(spacing::ITEM_SPACING);

        let visible = filter_debates(debates, &self.query, self.category.as_deref());
        if visible.is_empty() {
            theme::empty_state(ui, "🔍", "No debates", "Try a different search or category");
            return None;
        }

        egui::ScrollArea::vertical()
            .id_salt("debate_list")
            .show(ui, |ui| {
                for debate in visible {
                    if self.debate_card(ui, debate) {
                        action = Some(BrowserAction::Open(debate.id.clone()));
                    }
                    ui.add_space(spacing::ITEM_SPACING);
                }
            });

        action
    }

    /// One debate card; returns true when the title is clicked.
    fn debate_card(&self, ui: &mut egui::Ui, debate: &DebateSummary) -> bool {
        let mut open = false;
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                if ui
                    .link(egui::RichText::new(&debate.title).size(16.0).strong())
                    .clicked()
                {
                    open = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(debate.status.as_str())
                            .size(12.0)
                            .color(theme::status_color(debate.status)),
                    );
                });
            });
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("@{}", debate.creator))
                        .color(theme::MUTED_TEXT),
                );
                ui.label(
                    egui::RichText::new(&debate.category)
                        .size(12.0)
                        .color(theme::ACCENT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} arguments · {} participants · {}",
                            debate.argument_count, debate.participant_count, debate.last_active
                        ))
                        .size(12.0)
                        .color(theme::MUTED_TEXT),
                    );
                });
            });
        });
        open
    }

    fn leaderboard_tab(&self, ui: &mut egui::Ui, leaderboard: &[LeaderboardEntry]) {
        if leaderboard.is_empty() {
            theme::empty_state(ui, "🏆", "No rankings yet", "The leaderboard is empty");
            return;
        }
        ui.add_space(spacing::ITEM_SPACING);
        egui::ScrollArea::vertical()
            .id_salt("leaderboard")
            .show(ui, |ui| {
                egui::Grid::new("leaderboard_grid")
                    .striped(true)
                    .num_columns(6)
                    .spacing([spacing::SECTION_SPACING, spacing::ITEM_SPACING])
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("Rank").strong());
                        ui.label(egui::RichText::new("Debater").strong());
                        ui.label(egui::RichText::new("Reputation").strong());
                        ui.label(egui::RichText::new("Debates Won").strong());
                        ui.label(egui::RichText::new("Avg Rating").strong());
                        ui.label(egui::RichText::new("Trend").strong());
                        ui.end_row();

                        for entry in leaderboard {
                            ui.label(rank_icon(entry.rank));
                            ui.label(&entry.username);
                            ui.label(entry.reputation.to_string());
                            ui.label(entry.debates_won.to_string());
                            ui.label(
                                egui::RichText::new(stars(entry.avg_rating))
                                    .color(theme::STAR_GOLD),
                            );
                            ui.label(
                                egui::RichText::new(&entry.trend)
                                    .color(theme::status_color(agora_core::DebateStatus::Active)),
                            );
                            ui.end_row();
                        }
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::DebateStatus;

    fn summary(id: &str, title: &str, category: &str) -> DebateSummary {
        DebateSummary {
            id: DebateId::from(id),
            title: title.to_string(),
            category: category.to_string(),
            creator: "someone".to_string(),
            status: DebateStatus::Active,
            argument_count: 1,
            participant_count: 1,
            avg_reputation: 50,
            last_active: "1h ago".to_string(),
        }
    }

    #[test]
    fn test_filter_by_query_is_case_insensitive() {
        let debates = vec![
            summary("1", "Should AI content carry a watermark?", "Technology"),
            summary("2", "Is remote work more productive?", "Business"),
        ];
        let hits = filter_debates(&debates, "REMOTE", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, DebateId::from("2"));
    }

    #[test]
    fn test_filter_by_category() {
        let debates = vec![
            summary("1", "A", "Technology"),
            summary("2", "B", "Business"),
            summary("3", "C", "technology"),
        ];
        let hits = filter_debates(&debates, "", Some("Technology"));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_empty_query_matches_all() {
        let debates = vec![summary("1", "A", "X"), summary("2", "B", "Y")];
        assert_eq!(filter_debates(&debates, "   ", None).len(), 2);
    }

    #[test]
    fn test_rank_icons() {
        assert_eq!(rank_icon(1), "👑");
        assert_eq!(rank_icon(3), "🥉");
        assert_eq!(rank_icon(8), "8");
    }
}
