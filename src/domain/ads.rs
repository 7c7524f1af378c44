//! Advertising placements and their configuration document.

use serde::{Deserialize, Serialize};

/// One advertising slot: operator-authored raw markup plus an on/off switch.
///
/// The markup is an intentional trust boundary; the operator is trusted to
/// supply safe code and nothing here sanitizes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdSlot {
    pub code: String,
    pub active: bool,
}

impl AdSlot {
    pub fn empty() -> Self {
        Self {
            code: String::new(),
            active: true,
        }
    }

    /// An inactive slot and a blank code are equivalent: both render nothing.
    pub fn is_blank(&self) -> bool {
        !self.active || self.code.trim().is_empty()
    }
}

impl Default for AdSlot {
    fn default() -> Self {
        Self::empty()
    }
}

/// The ten named placements an operator can configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdPlacement {
    GlobalHeader,
    PopUnder,
    HomeTop,
    HomeInGrid,
    HomeBottom,
    DetailTop,
    DetailSidebar1,
    DetailSidebar2,
    WatchTimer,
    DownloadTimer,
}

impl AdPlacement {
    pub const ALL: [AdPlacement; 10] = [
        AdPlacement::GlobalHeader,
        AdPlacement::PopUnder,
        AdPlacement::HomeTop,
        AdPlacement::HomeInGrid,
        AdPlacement::HomeBottom,
        AdPlacement::DetailTop,
        AdPlacement::DetailSidebar1,
        AdPlacement::DetailSidebar2,
        AdPlacement::WatchTimer,
        AdPlacement::DownloadTimer,
    ];

    /// Wire/document key for the placement.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdPlacement::GlobalHeader => "globalHeader",
            AdPlacement::PopUnder => "popUnder",
            AdPlacement::HomeTop => "homeTop",
            AdPlacement::HomeInGrid => "homeInGrid",
            AdPlacement::HomeBottom => "homeBottom",
            AdPlacement::DetailTop => "detailTop",
            AdPlacement::DetailSidebar1 => "detailSidebar1",
            AdPlacement::DetailSidebar2 => "detailSidebar2",
            AdPlacement::WatchTimer => "watchTimer",
            AdPlacement::DownloadTimer => "downloadTimer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|placement| placement.as_str().eq_ignore_ascii_case(value))
    }
}

/// The ad configuration document: one slot per placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdConfiguration {
    pub global_header: AdSlot,
    pub pop_under: AdSlot,
    pub home_top: AdSlot,
    pub home_in_grid: AdSlot,
    pub home_bottom: AdSlot,
    pub detail_top: AdSlot,
    pub detail_sidebar1: AdSlot,
    pub detail_sidebar2: AdSlot,
    pub watch_timer: AdSlot,
    pub download_timer: AdSlot,
}

impl AdConfiguration {
    pub fn slot(&self, placement: AdPlacement) -> &AdSlot {
        match placement {
            AdPlacement::GlobalHeader => &self.global_header,
            AdPlacement::PopUnder => &self.pop_under,
            AdPlacement::HomeTop => &self.home_top,
            AdPlacement::HomeInGrid => &self.home_in_grid,
            AdPlacement::HomeBottom => &self.home_bottom,
            AdPlacement::DetailTop => &self.detail_top,
            AdPlacement::DetailSidebar1 => &self.detail_sidebar1,
            AdPlacement::DetailSidebar2 => &self.detail_sidebar2,
            AdPlacement::WatchTimer => &self.watch_timer,
            AdPlacement::DownloadTimer => &self.download_timer,
        }
    }

    pub fn slot_mut(&mut self, placement: AdPlacement) -> &mut AdSlot {
        match placement {
            AdPlacement::GlobalHeader => &mut self.global_header,
            AdPlacement::PopUnder => &mut self.pop_under,
            AdPlacement::HomeTop => &mut self.home_top,
            AdPlacement::HomeInGrid => &mut self.home_in_grid,
            AdPlacement::HomeBottom => &mut self.home_bottom,
            AdPlacement::DetailTop => &mut self.detail_top,
            AdPlacement::DetailSidebar1 => &mut self.detail_sidebar1,
            AdPlacement::DetailSidebar2 => &mut self.detail_sidebar2,
            AdPlacement::WatchTimer => &mut self.watch_timer,
            AdPlacement::DownloadTimer => &mut self.download_timer,
        }
    }
}
