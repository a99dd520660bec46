//! Batch export of inventory products to all marketplaces

mod orchestrator;
mod outcome;

pub use orchestrator::ExportOrchestrator;
pub use outcome::{ExportOutcome, ExportSummary, MarketplaceSlot, SlotError};
