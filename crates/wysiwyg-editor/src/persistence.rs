//! Simulated persistence boundary for the demo flows.
//!
//! `FakeBackend` stands in for a real storage service: single-shot load
//! and save calls that resolve after a fixed latency. It carries no
//! contract beyond "eventually resolves" — except for sequencing:
//! overlapping calls are explicitly cancel-and-replace. Each `*_latest`
//! call takes a generation ticket from a [`SerialGate`]; an operation
//! whose ticket went stale while it slept resolves
//! [`PersistenceError::Superseded`] instead of racing the newer call.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info};

use wysiwyg_core::{BlockType, InlineStyle, RawBlock, RawContent, RawStyleRange};

const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(1500);
const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(1000);

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum PersistenceError {
    /// A newer operation replaced this one before it completed.
    #[error("operation superseded by a newer request")]
    Superseded,
    /// The (simulated) backend rejected the operation.
    #[error("backend failure: {0}")]
    Backend(String),
}

// ── SerialGate ────────────────────────────────────────────────────────────

/// Hands out generation tickets; beginning a new operation invalidates
/// every ticket issued before it.
#[derive(Debug, Default)]
pub struct SerialGate {
    current: Arc<AtomicU64>,
}

/// Proof of participation in a [`SerialGate`] generation.
#[derive(Debug)]
pub struct Ticket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl SerialGate {
    pub fn new() -> Self {
        SerialGate::default()
    }

    /// Start a new generation, superseding all outstanding tickets.
    pub fn begin(&self) -> Ticket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            generation,
            current: Arc::clone(&self.current),
        }
    }
}

impl Ticket {
    /// Whether no newer operation has begun since this ticket was issued.
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

// ── FakeBackend ───────────────────────────────────────────────────────────

/// A stand-in backend with fixed simulated latency.
#[derive(Debug)]
pub struct FakeBackend {
    load_delay: Duration,
    save_delay: Duration,
    fail_next: AtomicBool,
    load_gate: SerialGate,
    save_gate: SerialGate,
}

impl Default for FakeBackend {
    fn default() -> Self {
        FakeBackend::new(DEFAULT_LOAD_DELAY, DEFAULT_SAVE_DELAY)
    }
}

impl FakeBackend {
    pub fn new(load_delay: Duration, save_delay: Duration) -> Self {
        FakeBackend {
            load_delay,
            save_delay,
            fail_next: AtomicBool::new(false),
            load_gate: SerialGate::new(),
            save_gate: SerialGate::new(),
        }
    }

    /// Make the next operation reject, to exercise caller error paths.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn take_failure(&self) -> Result<(), PersistenceError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(PersistenceError::Backend(
                "simulated backend outage".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    /// Single-shot load: resolves with the sample document after the fixed
    /// delay. Does no sequencing of its own.
    pub async fn load(&self) -> Result<RawContent, PersistenceError> {
        sleep(self.load_delay).await;
        self.take_failure()?;
        debug!(delay_ms = self.load_delay.as_millis() as u64, "content loaded");
        Ok(sample_content())
    }

    /// Single-shot save: resolves after the fixed delay.
    pub async fn save(&self, content: &RawContent) -> Result<(), PersistenceError> {
        sleep(self.save_delay).await;
        self.take_failure()?;
        info!(blocks = content.blocks.len(), "content saved");
        Ok(())
    }

    /// Sequenced load: a load started after this one supersedes it.
    pub async fn load_latest(&self) -> Result<RawContent, PersistenceError> {
        let ticket = self.load_gate.begin();
        let content = self.load().await?;
        if ticket.is_current() {
            Ok(content)
        } else {
            debug!("load superseded by a newer load");
            Err(PersistenceError::Superseded)
        }
    }

    /// Sequenced save: a save started after this one supersedes it.
    pub async fn save_latest(&self, content: &RawContent) -> Result<(), PersistenceError> {
        let ticket = self.save_gate.begin();
        self.save(content).await?;
        if ticket.is_current() {
            Ok(())
        } else {
            debug!("save superseded by a newer save");
            Err(PersistenceError::Superseded)
        }
    }
}

// ── Sample document ───────────────────────────────────────────────────────

/// The fixed document the demo load returns.
pub fn sample_content() -> RawContent {
    let first = RawBlock {
        key: "sample1".to_string(),
        text: "Welcome to the WYSIWYG Editor!".to_string(),
        block_type: BlockType::Unstyled,
        depth: 0,
        inline_style_ranges: vec![
            RawStyleRange {
                offset: 0,
                length: 7,
                style: InlineStyle::Bold,
            },
            RawStyleRange {
                offset: 15,
                length: 14,
                style: InlineStyle::Italic,
            },
        ],
        entity_ranges: Vec::new(),
        data: serde_json::Map::new(),
    };
    let second = RawBlock {
        key: "sample2".to_string(),
        text: "This content was loaded asynchronously. You can format text with \
               bold, italic, and underline styles."
            .to_string(),
        block_type: BlockType::Unstyled,
        depth: 0,
        inline_style_ranges: vec![
            RawStyleRange {
                offset: 65,
                length: 4,
                style: InlineStyle::Bold,
            },
            RawStyleRange {
                offset: 71,
                length: 6,
                style: InlineStyle::Italic,
            },
            RawStyleRange {
                offset: 83,
                length: 9,
                style: InlineStyle::Underline,
            },
        ],
        entity_ranges: Vec::new(),
        data: serde_json::Map::new(),
    };
    RawContent {
        blocks: vec![first, second],
        entity_map: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wysiwyg_core::raw::from_raw;

    #[test]
    fn sample_content_is_valid() {
        let content = from_raw(&sample_content()).expect("sample must decode");
        assert!(content
            .plain_text()
            .contains("Welcome to the WYSIWYG Editor!"));
        assert_eq!(content.block_count(), 2);
    }

    #[test]
    fn sample_styles_cover_the_advertised_words() {
        let content = from_raw(&sample_content()).unwrap();
        let second = &content.blocks()[1];
        let text: Vec<char> = second.text().chars().collect();
        let word_at = |offset: usize, len: usize| -> String {
            text[offset..offset + len].iter().collect()
        };
        assert_eq!(word_at(65, 4), "bold");
        assert_eq!(word_at(71, 6), "italic");
        assert_eq!(word_at(83, 9), "underline");
        assert!(second.range_has_style(65, 69, &InlineStyle::Bold));
        assert!(second.range_has_style(71, 77, &InlineStyle::Italic));
        assert!(second.range_has_style(83, 92, &InlineStyle::Underline));
    }

    #[test]
    fn tickets_go_stale_when_a_new_generation_begins() {
        let gate = SerialGate::new();
        let first = gate.begin();
        assert!(first.is_current());
        let second = gate.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }
}
