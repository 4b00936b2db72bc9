use crate::theme::{self, spacing};
use agora_core::stars;
use agora_graph::{GraphArena, NodeIndex, kind_color};
use eframe::egui;

/// Selection state for the detail panel.
///
/// Selecting a different node while visible goes straight to the new
/// node's detail; only the explicit close action hides the panel. Clicks
/// on empty canvas never reach `select`, so the selection persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    #[default]
    Hidden,
    Visible(NodeIndex),
}

pub struct Sidebar {
    state: SidebarState,
}

impl Sidebar {
    pub fn new() -> Self {
        Self {
            state: SidebarState::Hidden,
        }
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn selected(&self) -> Option<NodeIndex> {
        match self.state {
            SidebarState::Hidden => None,
            SidebarState::Visible(idx) => Some(idx),
        }
    }

    pub fn select(&mut self, idx: NodeIndex) {
        self.state = SidebarState::Visible(idx);
    }

    pub fn close(&mut self) {
        self.state = SidebarState::Hidden;
    }

    pub fn ui(&mut self, ctx: &egui::Context, arena: &GraphArena) {
        let visible = self.selected().is_some();
        let mut close_requested = false;

        egui::SidePanel::right("argument_detail")
            .resizable(false)
            .default_width(320.0)
            .show_animated(ctx, visible, |ui| {
                let Some(idx) = self.selected() else {
                    return;
                };
                let node = &arena[idx];

                ui.add_space(spacing::ITEM_SPACING);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.button("✕").clicked() {
                        close_requested = true;
                    }
                });

                ui.label(egui::RichText::new(&node.label).size(18.0).strong());
                ui.label(
                    egui::RichText::new(format!("@{}", node.author)).color(theme::MUTED_TEXT),
                );
                ui.add_space(spacing::ITEM_SPACING);

                let color = kind_color(node.kind);
                egui::Frame::new()
                    .fill(theme::with_alpha(color, 40))
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::symmetric(6, 2))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(node.kind.as_str())
                                .size(12.0)
                                .color(theme::color32(color)),
                        );
                    });

                ui.add_space(spacing::SECTION_SPACING);
                ui.label(
                    egui::RichText::new(stars(node.rating))
                        .size(18.0)
                        .color(theme::STAR_GOLD),
                );
                ui.label(
                    egui::RichText::new(format!("Rating: {}/5", node.rating))
                        .color(theme::MUTED_TEXT),
                );
            });

        if close_requested {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let sidebar = Sidebar::new();
        assert_eq!(sidebar.state(), SidebarState::Hidden);
        assert_eq!(sidebar.selected(), None);
    }

    #[test]
    fn test_select_then_reselect_never_hides() {
        let mut sidebar = Sidebar::new();
        sidebar.select(NodeIndex(0));
        assert_eq!(sidebar.state(), SidebarState::Visible(NodeIndex(0)));

        // Clicking node B while A's detail shows swaps content directly.
        sidebar.select(NodeIndex(3));
        assert_eq!(sidebar.state(), SidebarState::Visible(NodeIndex(3)));
    }

    #[test]
    fn test_close_hides() {
        let mut sidebar = Sidebar::new();
        sidebar.select(NodeIndex(2));
        sidebar.close();
        assert_eq!(sidebar.state(), SidebarState::Hidden);
    }
}
