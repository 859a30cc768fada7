//! The serializable boundary form of document content.
//!
//! [`RawContent`] is the engine-independent representation used for
//! storage and transport: an ordered block list, each block carrying its
//! text, type tag, nesting depth, and style ranges keyed by
//! offset + length + style name. The wire format is camelCase JSON.
//!
//! Entity ranges and block data are carried opaquely so foreign payloads
//! survive parsing; the content model itself does not interpret them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::content::{BlockKey, ContentBlock, ContentState};
use crate::style::{BlockType, InlineStyle, StyleSet};

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum RawContentError {
    #[error("raw content has no blocks")]
    NoBlocks,
    #[error("style range {offset}+{length} out of bounds in block \"{block}\"")]
    RangeOutOfBounds {
        block: String,
        offset: usize,
        length: usize,
    },
    #[error("invalid raw content JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ── Wire structures ───────────────────────────────────────────────────────

/// One style annotation: `length` characters starting at `offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: InlineStyle,
}

/// One entity annotation, carried opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntityRange {
    pub offset: usize,
    pub length: usize,
    pub key: u64,
}

/// One serialized block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    /// Block key; an empty key gets a generated one on decode.
    #[serde(default)]
    pub key: String,
    pub text: String,
    #[serde(rename = "type", default)]
    pub block_type: BlockType,
    #[serde(default)]
    pub depth: u8,
    #[serde(default)]
    pub inline_style_ranges: Vec<RawStyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<RawEntityRange>,
    #[serde(default)]
    pub data: serde_json::Map<String, Value>,
}

/// The full serializable document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContent {
    pub blocks: Vec<RawBlock>,
    #[serde(default)]
    pub entity_map: IndexMap<String, Value>,
}

impl RawContent {
    /// Parse from JSON text.
    pub fn from_json(json: &str) -> Result<Self, RawContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON text.
    pub fn to_json(&self) -> Result<String, RawContentError> {
        Ok(serde_json::to_string(self)?)
    }
}

// ── Encoding ──────────────────────────────────────────────────────────────

/// Serialize content to its raw form. Style ranges come out as maximal
/// runs per style, ordered by style then offset, so the output for a given
/// content state is deterministic.
pub fn to_raw(content: &ContentState) -> RawContent {
    let blocks = content
        .blocks()
        .iter()
        .map(|block| RawBlock {
            key: block.key().as_str().to_string(),
            text: block.text().to_string(),
            block_type: block.block_type().clone(),
            depth: block.depth(),
            inline_style_ranges: style_runs(block),
            entity_ranges: Vec::new(),
            data: serde_json::Map::new(),
        })
        .collect();
    RawContent {
        blocks,
        entity_map: IndexMap::new(),
    }
}

/// Maximal per-style runs over a block's per-character style sets.
fn style_runs(block: &ContentBlock) -> Vec<RawStyleRange> {
    let mut present: std::collections::BTreeSet<InlineStyle> = std::collections::BTreeSet::new();
    for set in block.styles() {
        for style in set.iter() {
            present.insert(style.clone());
        }
    }

    let mut ranges = Vec::new();
    for style in present {
        let mut run_start: Option<usize> = None;
        for (i, set) in block.styles().iter().enumerate() {
            if set.contains(&style) {
                run_start.get_or_insert(i);
            } else if let Some(start) = run_start.take() {
                ranges.push(RawStyleRange {
                    offset: start,
                    length: i - start,
                    style: style.clone(),
                });
            }
        }
        if let Some(start) = run_start {
            ranges.push(RawStyleRange {
                offset: start,
                length: block.char_len() - start,
                style: style.clone(),
            });
        }
    }
    ranges
}

// ── Decoding ──────────────────────────────────────────────────────────────

/// Rebuild content from its raw form, validating block count and range
/// bounds. Malformed input is an error, never a panic; the caller decides
/// whether to fail safe.
pub fn from_raw(raw: &RawContent) -> Result<ContentState, RawContentError> {
    if raw.blocks.is_empty() {
        return Err(RawContentError::NoBlocks);
    }

    let mut blocks = Vec::with_capacity(raw.blocks.len());
    for raw_block in &raw.blocks {
        let char_len = raw_block.text.chars().count();
        let mut styles = vec![StyleSet::new(); char_len];
        for range in &raw_block.inline_style_ranges {
            let in_bounds = range
                .offset
                .checked_add(range.length)
                .is_some_and(|end| end <= char_len);
            if !in_bounds {
                return Err(RawContentError::RangeOutOfBounds {
                    block: raw_block.key.clone(),
                    offset: range.offset,
                    length: range.length,
                });
            }
            for set in &mut styles[range.offset..range.offset + range.length] {
                set.insert(range.style.clone());
            }
        }

        let key = if raw_block.key.is_empty() {
            BlockKey::generate()
        } else {
            BlockKey::new(raw_block.key.as_str())
        };
        blocks.push(ContentBlock::from_parts(
            key,
            raw_block.text.clone(),
            raw_block.block_type.clone(),
            raw_block.depth,
            styles,
        ));
    }
    Ok(ContentState::from_blocks(blocks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_raw() -> RawContent {
        RawContent {
            blocks: vec![RawBlock {
                key: "b1".to_string(),
                text: "hello world".to_string(),
                block_type: BlockType::Unstyled,
                depth: 0,
                inline_style_ranges: vec![RawStyleRange {
                    offset: 6,
                    length: 5,
                    style: InlineStyle::Bold,
                }],
                entity_ranges: Vec::new(),
                data: serde_json::Map::new(),
            }],
            entity_map: IndexMap::new(),
        }
    }

    #[test]
    fn round_trip_preserves_texts_and_ranges() {
        let raw = sample_raw();
        let content = from_raw(&raw).unwrap();
        let back = to_raw(&content);
        assert_eq!(back.blocks.len(), 1);
        assert_eq!(back.blocks[0].text, "hello world");
        assert_eq!(back.blocks[0].inline_style_ranges, raw.blocks[0].inline_style_ranges);
    }

    #[test]
    fn adjacent_same_style_ranges_merge_into_one_run() {
        let mut raw = sample_raw();
        raw.blocks[0].inline_style_ranges = vec![
            RawStyleRange { offset: 0, length: 3, style: InlineStyle::Bold },
            RawStyleRange { offset: 3, length: 2, style: InlineStyle::Bold },
        ];
        let content = from_raw(&raw).unwrap();
        let back = to_raw(&content);
        assert_eq!(
            back.blocks[0].inline_style_ranges,
            vec![RawStyleRange { offset: 0, length: 5, style: InlineStyle::Bold }]
        );
    }

    #[test]
    fn empty_block_list_is_rejected() {
        let raw = RawContent {
            blocks: Vec::new(),
            entity_map: IndexMap::new(),
        };
        assert!(matches!(from_raw(&raw), Err(RawContentError::NoBlocks)));
    }

    #[test]
    fn out_of_bounds_range_is_rejected() {
        let mut raw = sample_raw();
        raw.blocks[0].inline_style_ranges[0].length = 100;
        assert!(matches!(
            from_raw(&raw),
            Err(RawContentError::RangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let mut raw = sample_raw();
        raw.blocks[0].text = "héllo".to_string();
        raw.blocks[0].inline_style_ranges = vec![RawStyleRange {
            offset: 0,
            length: 5,
            style: InlineStyle::Italic,
        }];
        let content = from_raw(&raw).unwrap();
        assert!(content.first_block().range_has_style(0, 5, &InlineStyle::Italic));
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(&sample_raw()).unwrap();
        let block = &json["blocks"][0];
        assert!(block.get("inlineStyleRanges").is_some());
        assert!(block.get("entityRanges").is_some());
        assert_eq!(block["type"], "unstyled");
        assert!(json.get("entityMap").is_some());
    }

    #[test]
    fn parses_foreign_payload_with_defaults() {
        let payload = json!({
            "blocks": [
                { "text": "plain" }
            ]
        })
        .to_string();
        let raw = RawContent::from_json(&payload).unwrap();
        assert_eq!(raw.blocks[0].block_type, BlockType::Unstyled);
        let content = from_raw(&raw).unwrap();
        assert_eq!(content.plain_text(), "plain");
        // Generated key, since the payload had none.
        assert!(!content.first_block().key().as_str().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            RawContent::from_json("{\"blocks\": 12}"),
            Err(RawContentError::Json(_))
        ));
    }
}
