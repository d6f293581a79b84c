//! Reusable components

mod badges;
mod consensus_panel;
mod extraction_panel;
mod nav;
mod stat_card;
mod upload_panel;

pub use badges::{acknowledge, ScoreBar, SectionButton, StatusBadge, TrustActions};
pub use consensus_panel::ConsensusPanel;
pub use extraction_panel::{BreakdownList, ExtractionPanel};
pub use nav::Nav;
pub use stat_card::StatCard;
pub use upload_panel::{UploadMode, UploadPanel};
